use chrono::NaiveDate;
use serde::Serialize;

use super::super::outreach::OutreachStep;

/// Serializable dashboard summary for a prospect report run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProspectReportSummary {
    pub generated_on: NaiveDate,
    pub companies_total: usize,
    pub qualified_total: usize,
    pub contacts_total: usize,
    pub average_score: f32,
    pub prospects: Vec<ProspectView>,
}

/// One qualified company row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProspectView {
    pub company_name: String,
    pub segment: String,
    pub city: String,
    pub state: String,
    pub domain: String,
    pub score: u8,
    pub contacts: Vec<ContactView>,
}

/// Contact row, optionally carrying the personalized outreach cadence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub full_name: String,
    pub role: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outreach: Option<Vec<OutreachStep>>,
}
