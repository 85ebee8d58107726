use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Rule applied when a record attribute exactly matches a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalRule {
    pub attribute: String,
    pub value: String,
    pub delta: i32,
}

/// Rule applied when a record attribute is a member of an accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRule {
    pub attribute: String,
    pub accepted: BTreeSet<String>,
    pub delta: i32,
}

/// Rule table driving [`super::LeadScoringEngine`].
///
/// Loaded once and immutable thereafter; deltas are signed so a table can
/// carry penalties as well as bonuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadScoringConfig {
    pub base_score: i32,
    pub categorical_rules: Vec<CategoricalRule>,
    pub membership_rules: Vec<MembershipRule>,
}

impl LeadScoringConfig {
    /// Stock rubric for the US MICE direct segment: segment bonuses plus a
    /// flat bonus for companies in the priority states.
    pub fn us_mice_standard() -> Self {
        let segment_bonuses = [
            ("Resort", 15),
            ("Hotel Chain (Upscale)", 20),
            ("Boutique Hotel", 10),
            ("Convention Center", 25),
            ("Conference Center", 18),
            ("Event Planner/Agency", 12),
            ("Incentives Agency", 12),
            ("Lodge", 8),
        ];

        let categorical_rules = segment_bonuses
            .into_iter()
            .map(|(value, delta)| CategoricalRule {
                attribute: "segment".to_string(),
                value: value.to_string(),
                delta,
            })
            .collect();

        let priority_states = ["CA", "NY", "FL", "MA", "IL", "TX"]
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            base_score: 50,
            categorical_rules,
            membership_rules: vec![MembershipRule {
                attribute: "state".to_string(),
                accepted: priority_states,
                delta: 8,
            }],
        }
    }
}
