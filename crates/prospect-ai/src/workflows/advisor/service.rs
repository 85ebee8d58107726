use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::classification::TopicClassifier;
use super::domain::{Topic, TopicVotes};
use super::followup::{compose_followup_prompt, FollowupKind};
use super::generator::{GenerationError, GenerationRequest, RecommendationGenerator};
use super::prompt::{compose_user_prompt, SYSTEM_PROMPT};
use super::reply::{split_reply, AdvisorPayload};

/// Incoming advisory question, optionally pinned to a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub question: String,
    #[serde(default)]
    pub topic: Option<Topic>,
}

/// Where the routed topic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSource {
    Detected,
    Requested,
}

/// Follow-up artifact produced after the main recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowupArtifact {
    pub kind: FollowupKind,
    pub content: String,
}

/// Full advisory result: routing, tally, reply, and optional follow-up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorOutcome {
    pub question: String,
    pub topic: Topic,
    pub topic_label: &'static str,
    pub topic_source: TopicSource,
    pub votes: Vec<TopicVotes>,
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<AdvisorPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followup: Option<FollowupArtifact>,
}

/// Error raised by the advisor service.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorServiceError {
    #[error("question must not be empty")]
    EmptyQuestion,
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Service composing the classifier, prompt contract, and generation seam.
pub struct AdvisorService<G> {
    classifier: TopicClassifier,
    generator: Arc<G>,
}

impl<G> AdvisorService<G>
where
    G: RecommendationGenerator + 'static,
{
    pub fn new(classifier: TopicClassifier, generator: Arc<G>) -> Self {
        Self {
            classifier,
            generator,
        }
    }

    /// Route the question, obtain a recommendation, and parse it.
    ///
    /// The classifier always runs so the vote tally is observable even when
    /// the caller pins the topic. A failed primary generation is an error;
    /// a failed follow-up degrades to an inline notice in the artifact.
    pub fn advise(&self, request: AdviceRequest) -> Result<AdvisorOutcome, AdvisorServiceError> {
        let question = request.question.trim().to_string();
        if question.is_empty() {
            return Err(AdvisorServiceError::EmptyQuestion);
        }

        let classification = self.classifier.classify(&question);
        let (topic, topic_source) = match request.topic {
            Some(requested) => (requested, TopicSource::Requested),
            None => (classification.topic, TopicSource::Detected),
        };

        let raw = self.generator.generate(&GenerationRequest {
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt: compose_user_prompt(&question, topic),
            topic,
        })?;
        let reply = split_reply(&raw);

        let followup = reply
            .payload
            .as_ref()
            .and_then(|payload| self.followup_artifact(payload, topic, &question));

        Ok(AdvisorOutcome {
            question,
            topic,
            topic_label: topic.label(),
            topic_source,
            votes: classification.votes,
            markdown: reply.markdown,
            payload: reply.payload,
            followup,
        })
    }

    fn followup_artifact(
        &self,
        payload: &AdvisorPayload,
        routed_topic: Topic,
        question: &str,
    ) -> Option<FollowupArtifact> {
        let kind = payload.next_step;
        let topic = payload.topic.unwrap_or(routed_topic);
        let prompt = compose_followup_prompt(kind, topic, &payload.actions, question)?;

        let content = match self.generator.generate(&GenerationRequest {
            system_prompt: "Eres un asistente de operaciones hoteleras. Sé conciso y práctico."
                .to_string(),
            user_prompt: prompt,
            topic,
        }) {
            Ok(text) => text,
            Err(err) => format!("No se pudo generar el artefacto del agente: {err}"),
        };

        Some(FollowupArtifact { kind, content })
    }
}
