use serde::{Deserialize, Serialize};

/// Advisory topics a general-manager question can be routed to.
///
/// The set is closed; routing, prompt templates, and the keyword table all
/// key off it. `ordered()` fixes the canonical iteration order, which is
/// also the classifier's tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Revenue,
    Staff,
    Guest,
    Ops,
}

impl Topic {
    pub const fn label(self) -> &'static str {
        match self {
            Topic::Revenue => "revenue",
            Topic::Staff => "staff",
            Topic::Guest => "guest",
            Topic::Ops => "ops",
        }
    }

    pub const fn ordered() -> [Topic; 4] {
        [Topic::Revenue, Topic::Staff, Topic::Guest, Topic::Ops]
    }

    pub fn from_label(label: &str) -> Option<Topic> {
        match label.trim().to_ascii_lowercase().as_str() {
            "revenue" => Some(Topic::Revenue),
            "staff" => Some(Topic::Staff),
            "guest" => Some(Topic::Guest),
            "ops" => Some(Topic::Ops),
            _ => None,
        }
    }
}

/// Vote tally for a single topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicVotes {
    pub topic: Topic,
    pub topic_label: &'static str,
    pub votes: usize,
}

/// Classifier output: the winning topic plus the full tally that produced
/// it, retained for observability and testing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub topic: Topic,
    pub votes: Vec<TopicVotes>,
}

impl Classification {
    /// True when no keyword matched and the default topic was returned.
    pub fn is_fallback(&self) -> bool {
        self.votes.iter().all(|tally| tally.votes == 0)
    }
}
