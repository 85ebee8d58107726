use serde::{Deserialize, Serialize};

use super::domain::Topic;
use super::followup::FollowupKind;

/// Delimiter line the generator is instructed to place before its JSON.
pub const JSON_DELIMITER: &str = "===JSON===";

/// Structured tail of a generator reply. Wire keys are the Spanish names
/// the prompt contract dictates; fields are lenient so a partially
/// conforming reply still parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorPayload {
    #[serde(rename = "tema", default)]
    pub topic: Option<Topic>,
    #[serde(rename = "resumen", default)]
    pub summary: String,
    #[serde(rename = "acciones", default)]
    pub actions: Vec<RecommendedAction>,
    #[serde(rename = "riesgos", default)]
    pub risks: Vec<String>,
    #[serde(rename = "metricas", default)]
    pub metrics: Option<SuccessMetrics>,
    #[serde(rename = "siguiente_paso_agente", default)]
    pub next_step: FollowupKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedAction {
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "horizonte", default)]
    pub horizon: String,
    #[serde(rename = "owner_sugerido", default)]
    pub suggested_owner: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessMetrics {
    #[serde(rename = "principal", default)]
    pub primary: String,
    #[serde(rename = "guardia", default)]
    pub guardrail: String,
}

/// A generator reply split into its markdown body and structured tail.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorReply {
    pub markdown: String,
    pub payload: Option<AdvisorPayload>,
}

/// Split a raw reply on the delimiter contract.
///
/// Without the delimiter, a rescue pass tries to parse from the first `{`.
/// Parsing never fails the caller: an unparsable tail simply leaves the
/// payload empty and the text as markdown.
pub fn split_reply(raw: &str) -> AdvisorReply {
    if let Some((markdown, json_text)) = raw.split_once(JSON_DELIMITER) {
        let payload = serde_json::from_str(json_text.trim()).ok();
        return AdvisorReply {
            markdown: markdown.trim().to_string(),
            payload,
        };
    }

    if let Some(json_start) = raw.find('{') {
        if let Ok(payload) = serde_json::from_str(raw[json_start..].trim()) {
            return AdvisorReply {
                markdown: raw[..json_start].trim().to_string(),
                payload: Some(payload),
            };
        }
    }

    AdvisorReply {
        markdown: raw.trim().to_string(),
        payload: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delimited_reply() -> String {
        format!(
            "## Resumen\nSube el ADR por escalones.\n{}\n{}",
            JSON_DELIMITER,
            serde_json::json!({
                "tema": "revenue",
                "resumen": "Subir ADR por escalones.",
                "acciones": [{
                    "titulo": "Revisar tarifas corporativas",
                    "descripcion": "Comparar ADR contra el comp set.",
                    "horizonte": "2 semanas",
                    "owner_sugerido": "Revenue Manager"
                }],
                "riesgos": ["Resistencia de cuentas clave"],
                "metricas": {"principal": "ADR", "guardia": "ocupación"},
                "siguiente_paso_agente": "checklist"
            })
        )
    }

    #[test]
    fn splits_on_the_delimiter() {
        let reply = split_reply(&delimited_reply());
        assert_eq!(reply.markdown, "## Resumen\nSube el ADR por escalones.");

        let payload = reply.payload.expect("payload parses");
        assert_eq!(payload.topic, Some(Topic::Revenue));
        assert_eq!(payload.actions.len(), 1);
        assert_eq!(payload.actions[0].suggested_owner, "Revenue Manager");
        assert_eq!(payload.next_step, FollowupKind::Checklist);
    }

    #[test]
    fn rescues_a_reply_missing_the_delimiter() {
        let raw = "Resumen breve.\n{\"tema\": \"staff\", \"resumen\": \"x\"}";
        let reply = split_reply(raw);

        assert_eq!(reply.markdown, "Resumen breve.");
        let payload = reply.payload.expect("rescued payload");
        assert_eq!(payload.topic, Some(Topic::Staff));
        assert_eq!(payload.next_step, FollowupKind::None);
    }

    #[test]
    fn unparsable_tail_degrades_to_markdown_only() {
        let raw = format!("Texto libre.\n{}\nno es json", JSON_DELIMITER);
        let reply = split_reply(&raw);
        assert_eq!(reply.markdown, "Texto libre.");
        assert!(reply.payload.is_none());

        let reply = split_reply("sin json en absoluto { roto");
        assert_eq!(reply.markdown, "sin json en absoluto { roto");
        assert!(reply.payload.is_none());
    }

    #[test]
    fn lenient_payload_tolerates_missing_fields() {
        let raw = format!("md\n{}\n{{\"resumen\": \"solo resumen\"}}", JSON_DELIMITER);
        let payload = split_reply(&raw).payload.expect("payload parses");
        assert_eq!(payload.topic, None);
        assert_eq!(payload.summary, "solo resumen");
        assert!(payload.actions.is_empty());
        assert_eq!(payload.next_step, FollowupKind::None);
    }
}
