//! Hospitality advisor workflow: classify the general manager's question
//! into a topic, compose the prompt contract around it, hand it to the
//! external recommendation generator, and parse the structured reply.

pub mod classification;
pub mod domain;
pub mod followup;
pub mod generator;
pub mod prompt;
pub mod reply;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use classification::{KeywordTable, KeywordTableError, TopicClassifier};
pub use domain::{Classification, Topic, TopicVotes};
pub use followup::FollowupKind;
pub use generator::{GenerationError, GenerationRequest, RecommendationGenerator};
pub use reply::{split_reply, AdvisorPayload, AdvisorReply, RecommendedAction, SuccessMetrics};
pub use router::advisor_router;
pub use service::{
    AdviceRequest, AdvisorOutcome, AdvisorService, AdvisorServiceError, FollowupArtifact,
    TopicSource,
};
