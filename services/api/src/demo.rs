use crate::infra::{parse_date, parse_topic, seed_portfolio, CannedRecommendationGenerator};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::sync::Arc;
use prospect_ai::error::AppError;
use prospect_ai::workflows::advisor::{
    AdviceRequest, AdvisorOutcome, AdvisorService, Topic, TopicClassifier, TopicSource,
};
use prospect_ai::workflows::prospecting::report::views::ProspectReportSummary;
use prospect_ai::workflows::prospecting::{
    LeadScoringConfig, LeadScoringEngine, ProspectFilter, ProspectReport,
};

#[derive(Args, Debug)]
pub(crate) struct ProspectReportArgs {
    /// Keep only companies in these states (repeatable)
    #[arg(long = "state")]
    pub(crate) states: Vec<String>,
    /// Keep only companies in these segments (repeatable)
    #[arg(long = "segment")]
    pub(crate) segments: Vec<String>,
    /// Minimum qualifying score (defaults to 60)
    #[arg(long)]
    pub(crate) min_score: Option<u8>,
    /// Report date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the outreach sequence for every contact
    #[arg(long)]
    pub(crate) include_outreach: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AdvisorAskArgs {
    /// The general manager's question
    #[arg(long)]
    pub(crate) question: String,
    /// Pin the topic instead of classifying (revenue, staff, guest, ops)
    #[arg(long, value_parser = parse_topic)]
    pub(crate) topic: Option<Topic>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Report date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print outreach sequences in the prospecting portion
    #[arg(long)]
    pub(crate) include_outreach: bool,
    /// Question for the advisory portion of the demo
    #[arg(long)]
    pub(crate) question: Option<String>,
    /// Skip the advisory portion of the demo
    #[arg(long)]
    pub(crate) skip_advisor: bool,
}

pub(crate) fn run_prospect_report(args: ProspectReportArgs) -> Result<(), AppError> {
    let ProspectReportArgs {
        states,
        segments,
        min_score,
        today,
        include_outreach,
    } = args;

    let filter = ProspectFilter {
        states,
        segments,
        min_score: min_score.unwrap_or_else(|| ProspectFilter::default().min_score),
    };
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let engine = LeadScoringEngine::new(LeadScoringConfig::us_mice_standard());
    let report = ProspectReport::build(&engine, &seed_portfolio(), &filter, today);
    render_prospect_report(&report.summary(include_outreach), filter.min_score);

    Ok(())
}

pub(crate) fn run_advisor_ask(args: AdvisorAskArgs) -> Result<(), AppError> {
    let AdvisorAskArgs { question, topic } = args;

    let service = AdvisorService::new(
        TopicClassifier::hospitality_standard(),
        Arc::new(CannedRecommendationGenerator),
    );
    let outcome = service.advise(AdviceRequest { question, topic })?;
    render_advisor_outcome(&outcome);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        include_outreach,
        question,
        skip_advisor,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Sales activation demo");
    let engine = LeadScoringEngine::new(LeadScoringConfig::us_mice_standard());
    let filter = ProspectFilter::default();
    let report = ProspectReport::build(&engine, &seed_portfolio(), &filter, today);
    render_prospect_report(&report.summary(include_outreach), filter.min_score);

    if skip_advisor {
        return Ok(());
    }

    println!("\nAdvisor demo (canned generation backend)");
    let question = question.unwrap_or_else(|| {
        "¿Cómo aumentar ingresos F&B en 6 semanas manteniendo NPS?".to_string()
    });
    run_advisor_ask(AdvisorAskArgs {
        question,
        topic: None,
    })
}

fn render_prospect_report(summary: &ProspectReportSummary, min_score: u8) {
    println!("Prospect report ({})", summary.generated_on);
    println!(
        "- {} companies scanned | {} qualified (score >= {}) | {} contacts | avg score {}",
        summary.companies_total,
        summary.qualified_total,
        min_score,
        summary.contacts_total,
        summary.average_score
    );

    if summary.prospects.is_empty() {
        println!("\nNo companies passed the filter");
        return;
    }

    println!("\nQualified companies");
    for prospect in &summary.prospects {
        println!(
            "- {} | {} | {}, {} | {} | score {}",
            prospect.company_name,
            prospect.segment,
            prospect.city,
            prospect.state,
            prospect.domain,
            prospect.score
        );
        for contact in &prospect.contacts {
            println!("    {} — {} <{}>", contact.full_name, contact.role, contact.email);
            if let Some(sequence) = &contact.outreach {
                for step in sequence {
                    println!("      Paso {} ({}) — {}", step.step, step.channel, step.subject);
                }
            }
        }
    }
}

fn render_advisor_outcome(outcome: &AdvisorOutcome) {
    let source = match outcome.topic_source {
        TopicSource::Detected => "detected",
        TopicSource::Requested => "requested",
    };
    println!("Topic: {} ({source})", outcome.topic_label);

    let tally: Vec<String> = outcome
        .votes
        .iter()
        .map(|votes| format!("{} {}", votes.topic_label, votes.votes))
        .collect();
    println!("Votes: {}", tally.join(" | "));

    println!("\n{}", outcome.markdown);

    if let Some(payload) = &outcome.payload {
        if !payload.actions.is_empty() {
            println!("\nAcciones");
            for action in &payload.actions {
                println!(
                    "- {} ({}, {})",
                    action.title, action.suggested_owner, action.horizon
                );
            }
        }
        if let Some(metrics) = &payload.metrics {
            println!(
                "\nMétricas: principal {} | guardia {}",
                metrics.primary, metrics.guardrail
            );
        }
    }

    if let Some(followup) = &outcome.followup {
        println!("\nArtefacto sugerido ({})", followup.kind.label());
        println!("{}", followup.content);
    }
}
