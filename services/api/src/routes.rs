use crate::infra::{deserialize_optional_date, seed_portfolio, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use prospect_ai::error::AppError;
use prospect_ai::workflows::advisor::{advisor_router, AdvisorService, RecommendationGenerator};
use prospect_ai::workflows::prospecting::report::views::ProspectView;
use prospect_ai::workflows::prospecting::{
    CompanyRecord, LeadScoringConfig, LeadScoringEngine, ProspectFilter, ProspectReport,
};

#[derive(Debug, Deserialize)]
pub(crate) struct ProspectReportRequest {
    /// Companies to evaluate; the bundled seed portfolio is used when absent.
    #[serde(default)]
    pub(crate) companies: Option<Vec<CompanyRecord>>,
    #[serde(default)]
    pub(crate) states: Vec<String>,
    #[serde(default)]
    pub(crate) segments: Vec<String>,
    #[serde(default)]
    pub(crate) min_score: Option<u8>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) include_outreach: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProspectReportResponse {
    pub(crate) generated_on: NaiveDate,
    pub(crate) data_source: ProspectDataSource,
    pub(crate) companies_total: usize,
    pub(crate) qualified_total: usize,
    pub(crate) contacts_total: usize,
    pub(crate) average_score: f32,
    pub(crate) prospects: Vec<ProspectView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ProspectDataSource {
    Provided,
    Seed,
}

pub(crate) fn with_advisor_routes<G>(service: Arc<AdvisorService<G>>) -> axum::Router
where
    G: RecommendationGenerator + 'static,
{
    advisor_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/prospects/report",
            axum::routing::post(prospect_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn prospect_report_endpoint(
    Json(payload): Json<ProspectReportRequest>,
) -> Result<Json<ProspectReportResponse>, AppError> {
    let ProspectReportRequest {
        companies,
        states,
        segments,
        min_score,
        today,
        include_outreach,
    } = payload;

    let (companies, data_source) = match companies {
        Some(companies) => (companies, ProspectDataSource::Provided),
        None => (seed_portfolio(), ProspectDataSource::Seed),
    };

    let filter = ProspectFilter {
        states,
        segments,
        min_score: min_score.unwrap_or_else(|| ProspectFilter::default().min_score),
    };

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let engine = LeadScoringEngine::new(LeadScoringConfig::us_mice_standard());
    let report = ProspectReport::build(&engine, &companies, &filter, today);
    let summary = report.summary(include_outreach);

    Ok(Json(ProspectReportResponse {
        generated_on: summary.generated_on,
        data_source,
        companies_total: summary.companies_total,
        qualified_total: summary.qualified_total,
        contacts_total: summary.contacts_total,
        average_score: summary.average_score,
        prospects: summary.prospects,
    }))
}
