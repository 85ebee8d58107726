mod config;

pub use config::{KeywordEntry, KeywordTable, KeywordTableError};

use super::domain::{Classification, Topic, TopicVotes};

/// Stateless keyword-vote classifier over a validated table.
pub struct TopicClassifier {
    table: KeywordTable,
    default_topic: Topic,
}

impl TopicClassifier {
    pub fn new(table: KeywordTable, default_topic: Topic) -> Self {
        Self {
            table,
            default_topic,
        }
    }

    /// Stock hospitality classifier: standard keyword lists, `ops` fallback.
    pub fn hospitality_standard() -> Self {
        Self::new(KeywordTable::hospitality_standard(), Topic::Ops)
    }

    pub fn default_topic(&self) -> Topic {
        self.default_topic
    }

    /// Classify free text by keyword votes.
    ///
    /// The text is Unicode-lowercased once; each keyword present anywhere in
    /// it contributes one vote to its topic, however often it repeats. The
    /// winner is the first topic in canonical order with the strictly
    /// highest tally; an all-zero tally yields the default topic.
    pub fn classify(&self, text: &str) -> Classification {
        let normalized = text.to_lowercase();

        let votes: Vec<TopicVotes> = self
            .table
            .entries()
            .iter()
            .map(|entry| TopicVotes {
                topic: entry.topic,
                topic_label: entry.topic.label(),
                votes: entry
                    .keywords
                    .iter()
                    .filter(|keyword| normalized.contains(keyword.as_str()))
                    .count(),
            })
            .collect();

        let mut winner = self.default_topic;
        let mut best = 0;
        for tally in &votes {
            if tally.votes > best {
                best = tally.votes;
                winner = tally.topic;
            }
        }

        Classification {
            topic: winner,
            votes,
        }
    }
}
