use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::domain::{CompanyRecord, ProspectProfile};
use super::super::enrichment::enrich;
use super::super::outreach::outreach_sequence;
use super::super::scoring::LeadScoringEngine;
use super::views::{ContactView, ProspectReportSummary, ProspectView};

/// Qualification filter for the prospect report.
///
/// Empty state/segment lists impose no constraint, matching the
/// select-everything default of the dashboard this replaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectFilter {
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub segments: Vec<String>,
    #[serde(default = "ProspectFilter::default_min_score")]
    pub min_score: u8,
}

impl ProspectFilter {
    fn default_min_score() -> u8 {
        60
    }

    fn matches(&self, profile: &ProspectProfile) -> bool {
        if !self.states.is_empty()
            && !self
                .states
                .iter()
                .any(|state| state.eq_ignore_ascii_case(&profile.company.state))
        {
            return false;
        }

        if !self.segments.is_empty() && !self.segments.contains(&profile.company.segment) {
            return false;
        }

        profile.score.total >= self.min_score
    }
}

impl Default for ProspectFilter {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            segments: Vec::new(),
            min_score: Self::default_min_score(),
        }
    }
}

/// Result of one enrichment-and-qualification pass over a company list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProspectReport {
    pub generated_on: NaiveDate,
    pub companies_total: usize,
    pub qualified: Vec<ProspectProfile>,
}

impl ProspectReport {
    /// Sanitize and enrich every company, keeping those that pass the filter.
    pub fn build(
        engine: &LeadScoringEngine,
        companies: &[CompanyRecord],
        filter: &ProspectFilter,
        today: NaiveDate,
    ) -> Self {
        let qualified = companies
            .iter()
            .map(|record| enrich(engine, record))
            .filter(|profile| filter.matches(profile))
            .collect();

        Self {
            generated_on: today,
            companies_total: companies.len(),
            qualified,
        }
    }

    pub fn summary(&self, include_outreach: bool) -> ProspectReportSummary {
        let contacts_total = self
            .qualified
            .iter()
            .map(|profile| profile.contacts.len())
            .sum();

        let average_score = if self.qualified.is_empty() {
            0.0
        } else {
            let total: u32 = self
                .qualified
                .iter()
                .map(|profile| u32::from(profile.score.total))
                .sum();
            let mean = total as f32 / self.qualified.len() as f32;
            (mean * 10.0).round() / 10.0
        };

        let prospects = self
            .qualified
            .iter()
            .map(|profile| prospect_view(profile, include_outreach))
            .collect();

        ProspectReportSummary {
            generated_on: self.generated_on,
            companies_total: self.companies_total,
            qualified_total: self.qualified.len(),
            contacts_total,
            average_score,
            prospects,
        }
    }
}

fn prospect_view(profile: &ProspectProfile, include_outreach: bool) -> ProspectView {
    let contacts = profile
        .contacts
        .iter()
        .map(|contact| ContactView {
            full_name: contact.full_name.clone(),
            role: contact.role.clone(),
            email: contact.email.clone(),
            outreach: include_outreach.then(|| {
                outreach_sequence(
                    &profile.company.company_name,
                    contact.first_name(),
                    &profile.company.segment,
                )
            }),
        })
        .collect();

    ProspectView {
        company_name: profile.company.company_name.clone(),
        segment: profile.company.segment.clone(),
        city: profile.company.city.clone(),
        state: profile.company.state.clone(),
        domain: profile.domain.clone(),
        score: profile.score.total,
        contacts,
    }
}
