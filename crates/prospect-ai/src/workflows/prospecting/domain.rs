use serde::{Deserialize, Serialize};

use super::scoring::{AttributeSource, LeadScore};

/// Tabular company record as supplied by the prospect list source.
///
/// Upstream data is messy (blank cells, mixed-case state codes), so callers
/// run [`CompanyRecord::sanitized`] before scoring or filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company_name: String,
    #[serde(default)]
    pub segment: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub website: String,
}

impl CompanyRecord {
    /// Trim every field and uppercase the state code.
    pub fn sanitized(&self) -> CompanyRecord {
        CompanyRecord {
            company_name: self.company_name.trim().to_string(),
            segment: self.segment.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_uppercase(),
            website: self.website.trim().to_string(),
        }
    }
}

impl AttributeSource for CompanyRecord {
    fn attribute(&self, name: &str) -> Option<&str> {
        let value = match name {
            "company_name" => &self.company_name,
            "segment" => &self.segment,
            "city" => &self.city,
            "state" => &self.state,
            "website" => &self.website,
            _ => return None,
        };

        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// Placeholder contact derived during enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectContact {
    pub full_name: String,
    pub role: String,
    pub email: String,
}

impl ProspectContact {
    /// First token of the full name, used to personalize outreach copy.
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(self.full_name.as_str())
    }
}

/// Enriched company ready for filtering and reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProspectProfile {
    pub company: CompanyRecord,
    pub domain: String,
    pub score: LeadScore,
    pub contacts: Vec<ProspectContact>,
}
