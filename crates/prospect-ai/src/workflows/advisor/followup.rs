use serde::{Deserialize, Serialize};

use super::domain::Topic;
use super::reply::RecommendedAction;

/// Follow-up artifact the generator may request via the reply payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowupKind {
    #[serde(rename = "checklist")]
    Checklist,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "experimento")]
    Experiment,
    #[default]
    #[serde(rename = "ninguno")]
    None,
}

impl FollowupKind {
    pub const fn label(self) -> &'static str {
        match self {
            FollowupKind::Checklist => "checklist",
            FollowupKind::Email => "email",
            FollowupKind::Experiment => "experimento",
            FollowupKind::None => "ninguno",
        }
    }
}

/// Compose the follow-up generation prompt for the requested kind.
///
/// Returns `None` for [`FollowupKind::None`]; every other kind wraps the
/// recommended actions and the original question into the matching Spanish
/// brief.
pub fn compose_followup_prompt(
    kind: FollowupKind,
    topic: Topic,
    actions: &[RecommendedAction],
    question: &str,
) -> Option<String> {
    let actions_json =
        serde_json::to_string_pretty(actions).unwrap_or_else(|_| "[]".to_string());

    match kind {
        FollowupKind::Checklist => Some(format!(
            "Genera un checklist operativo breve (8-12 ítems) para el tema '{}' basado en estas acciones:\n\
             {}\n\
             Contexto del GM: {}\n\
             Formato: bullets simples con verbo de acción al inicio.",
            topic.label(),
            actions_json,
            question
        )),
        FollowupKind::Email => Some(format!(
            "Redacta un borrador de email breve (120-160 palabras) al equipo, tono hospitality,\n\
             con call-to-action y fecha objetivo, basado en estas acciones:\n\
             {}\n\
             Asunto: Iniciativa prioritaria ({}).",
            actions_json,
            topic.label()
        )),
        FollowupKind::Experiment => Some(format!(
            "Esboza un mini experimento A/B para '{}' con:\n\
             - Hipótesis, variante A/B, muestra, duración (semanas), métrica principal y de guardia,\n\
             - Criterios de éxito y siguiente paso.\n\
             Basado en estas acciones:\n\
             {}",
            topic.label(),
            actions_json
        )),
        FollowupKind::None => None,
    }
}
