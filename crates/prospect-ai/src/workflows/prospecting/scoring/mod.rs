mod config;

pub use config::{CategoricalRule, LeadScoringConfig, MembershipRule};

use std::collections::BTreeMap;

use serde::Serialize;

/// Lower bound of the published lead score.
pub const SCORE_FLOOR: i32 = 0;
/// Upper bound of the published lead score.
pub const SCORE_CEILING: i32 = 100;

/// Read-only view of a record's attributes as seen by the scoring rules.
///
/// Absent attributes are a non-match, never a fault, so sparse records
/// score without complaint.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Discrete contribution to a lead score, retained for transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub attribute: String,
    pub matched: String,
    pub delta: i32,
}

/// Scoring outcome: the clamped total plus the rules that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadScore {
    pub total: u8,
    pub raw_total: i32,
    pub components: Vec<ScoreComponent>,
}

/// Stateless engine applying an additive rule table to a record.
pub struct LeadScoringEngine {
    config: LeadScoringConfig,
}

impl LeadScoringEngine {
    pub fn new(config: LeadScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LeadScoringConfig {
        &self.config
    }

    /// Score a record against the rule table.
    ///
    /// Starts from the configured base, adds each matching categorical rule
    /// in table order, then each matching membership rule, and clamps the
    /// result to [`SCORE_FLOOR`]..=[`SCORE_CEILING`].
    pub fn score<S: AttributeSource>(&self, record: &S) -> LeadScore {
        let mut components = Vec::new();
        let mut raw_total = self.config.base_score;

        for rule in &self.config.categorical_rules {
            if record.attribute(&rule.attribute) == Some(rule.value.as_str()) {
                components.push(ScoreComponent {
                    attribute: rule.attribute.clone(),
                    matched: rule.value.clone(),
                    delta: rule.delta,
                });
                raw_total += rule.delta;
            }
        }

        for rule in &self.config.membership_rules {
            if let Some(value) = record.attribute(&rule.attribute) {
                if rule.accepted.contains(value) {
                    components.push(ScoreComponent {
                        attribute: rule.attribute.clone(),
                        matched: value.to_string(),
                        delta: rule.delta,
                    });
                    raw_total += rule.delta;
                }
            }
        }

        LeadScore {
            total: raw_total.clamp(SCORE_FLOOR, SCORE_CEILING) as u8,
            raw_total,
            components,
        }
    }
}
