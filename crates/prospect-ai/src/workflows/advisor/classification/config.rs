use super::super::domain::Topic;

/// Keyword list for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub(crate) topic: Topic,
    pub(crate) keywords: Vec<String>,
}

/// Keyword table driving [`super::TopicClassifier`].
///
/// Construction validates the table so classification itself never faults:
/// every topic appears exactly once, entries are held in canonical topic
/// order, keywords are lowercased, and blank keywords are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<KeywordEntry>,
}

/// Configuration faults detected while building a keyword table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeywordTableError {
    #[error("duplicate keyword entry for topic '{0}'")]
    DuplicateTopic(&'static str),
    #[error("missing keyword entry for topic '{0}'")]
    MissingTopic(&'static str),
}

impl KeywordTable {
    pub fn new(entries: Vec<(Topic, Vec<String>)>) -> Result<Self, KeywordTableError> {
        let mut ordered = Vec::with_capacity(Topic::ordered().len());

        for topic in Topic::ordered() {
            let mut keywords = None;
            for (candidate, list) in &entries {
                if *candidate == topic {
                    if keywords.is_some() {
                        return Err(KeywordTableError::DuplicateTopic(topic.label()));
                    }
                    keywords = Some(list.clone());
                }
            }

            let keywords = keywords.ok_or(KeywordTableError::MissingTopic(topic.label()))?;
            ordered.push(KeywordEntry {
                topic,
                keywords: normalize_keywords(keywords),
            });
        }

        Ok(Self { entries: ordered })
    }

    /// Stock hospitality keyword lists, Spanish/English mixed to match the
    /// questions general managers actually ask.
    pub fn hospitality_standard() -> Self {
        let revenue = [
            "ingresos",
            "revenue",
            "ventas",
            "f&b",
            "food",
            "bebidas",
            "upsell",
            "tasa de ocupación",
            "revpar",
            "adr",
            "ancillary",
            "promoción",
            "menu",
        ];
        let staff = [
            "equipo",
            "rotación",
            "moral",
            "clima",
            "turnover",
            "entrenamiento",
            "capacitación",
            "roles",
            "horarios",
            "cultura",
            "liderazgo",
        ];
        let guest = [
            "huésped",
            "guest",
            "nps",
            "reviews",
            "reseñas",
            "satisfacción",
            "quejas",
            "servicio al cliente",
            "experiencia",
            "check-in",
            "check out",
        ];
        let ops = [
            "operación",
            "ops",
            "inventario",
            "costos",
            "mermas",
            "sop",
            "estándar",
            "estandarización",
            "procesos",
            "eficiencia",
            "turnos",
            "housekeeping",
        ];

        Self {
            entries: vec![
                stock_entry(Topic::Revenue, &revenue),
                stock_entry(Topic::Staff, &staff),
                stock_entry(Topic::Guest, &guest),
                stock_entry(Topic::Ops, &ops),
            ],
        }
    }

    /// Entries in canonical topic order.
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn keywords(&self, topic: Topic) -> &[String] {
        self.entries
            .iter()
            .find(|entry| entry.topic == topic)
            .map(|entry| entry.keywords.as_slice())
            .unwrap_or(&[])
    }
}

fn stock_entry(topic: Topic, keywords: &[&str]) -> KeywordEntry {
    KeywordEntry {
        topic,
        keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
    }
}

fn normalize_keywords(keywords: Vec<String>) -> Vec<String> {
    keywords
        .into_iter()
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_entries() -> Vec<(Topic, Vec<String>)> {
        Topic::ordered()
            .into_iter()
            .map(|topic| (topic, vec![topic.label().to_string()]))
            .collect()
    }

    #[test]
    fn accepts_a_complete_table() {
        let table = KeywordTable::new(full_entries()).expect("table builds");
        assert_eq!(table.entries().len(), 4);
        assert_eq!(table.keywords(Topic::Staff), ["staff"]);
    }

    #[test]
    fn rejects_duplicate_topics() {
        let mut entries = full_entries();
        entries.push((Topic::Guest, vec!["nps".to_string()]));
        assert_eq!(
            KeywordTable::new(entries),
            Err(KeywordTableError::DuplicateTopic("guest"))
        );
    }

    #[test]
    fn rejects_missing_topics() {
        let mut entries = full_entries();
        entries.retain(|(topic, _)| *topic != Topic::Ops);
        assert_eq!(
            KeywordTable::new(entries),
            Err(KeywordTableError::MissingTopic("ops"))
        );
    }

    #[test]
    fn normalizes_keywords_on_construction() {
        let mut entries = full_entries();
        entries[0].1 = vec!["  RevPAR ".to_string(), String::new(), "ROTACIÓN".to_string()];
        let table = KeywordTable::new(entries).expect("table builds");
        assert_eq!(table.keywords(Topic::Revenue), ["revpar", "rotación"]);
    }

    #[test]
    fn stock_table_is_ordered_and_complete() {
        let table = KeywordTable::hospitality_standard();
        let topics: Vec<Topic> = table.entries().iter().map(|entry| entry.topic).collect();
        assert_eq!(topics, Topic::ordered());
        assert!(table.keywords(Topic::Staff).contains(&"rotación".to_string()));
    }
}
