use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use prospect_ai::workflows::advisor::{
    GenerationError, GenerationRequest, RecommendationGenerator, Topic,
};
use prospect_ai::workflows::prospecting::CompanyRecord;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Deterministic stand-in for the external generation backend, used by the
/// demo command and until a real gateway is configured.
///
/// Primary requests (recognized by the reply-format contract in the system
/// prompt) get a conforming markdown-plus-JSON reply keyed off the routed
/// topic; follow-up requests get a short canned artifact.
#[derive(Default, Clone)]
pub(crate) struct CannedRecommendationGenerator;

impl RecommendationGenerator for CannedRecommendationGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        if request.system_prompt.contains("FORMATO DE SALIDA") {
            Ok(primary_reply(request.topic))
        } else {
            Ok(followup_reply(request.topic))
        }
    }
}

fn primary_reply(topic: Topic) -> String {
    let (summary, action_title, primary_metric) = match topic {
        Topic::Revenue => (
            "Prioriza upsell de F&B y tarifas corporativas escalonadas.",
            "Relanzar paquetes de grupos con tarifa corporativa",
            "RevPAR",
        ),
        Topic::Staff => (
            "Ataca la rotación con entrevistas de permanencia y turnos estables.",
            "Entrevistas de permanencia con el equipo de pisos",
            "rotación mensual",
        ),
        Topic::Guest => (
            "Cierra el ciclo de quejas y mide NPS por punto de contacto.",
            "Auditar el flujo de check-in y respuesta a reseñas",
            "NPS",
        ),
        Topic::Ops => (
            "Estandariza los SOP de housekeeping y controla mermas.",
            "Publicar SOP de housekeeping con checklist diario",
            "costo por habitación ocupada",
        ),
    };

    format!(
        "## Resumen\n{summary}\n\n## Acciones recomendadas\n1. {action_title}.\n===JSON===\n{}",
        serde_json::json!({
            "tema": topic.label(),
            "resumen": summary,
            "acciones": [{
                "titulo": action_title,
                "descripcion": "Plan operativo en dos fases con responsable único.",
                "horizonte": "4 semanas",
                "owner_sugerido": "General Manager"
            }],
            "riesgos": ["Carga adicional sobre el equipo durante el arranque"],
            "metricas": {"principal": primary_metric, "guardia": "satisfacción del equipo"},
            "siguiente_paso_agente": "checklist"
        })
    )
}

fn followup_reply(topic: Topic) -> String {
    format!(
        "- Definir responsable y fecha para el tema '{}'\n\
         - Revisar avances en el daily briefing\n\
         - Documentar resultados en el SOP correspondiente",
        topic.label()
    )
}

/// Bundled company portfolio used when a request or demo run supplies none.
pub(crate) fn seed_portfolio() -> Vec<CompanyRecord> {
    let rows = [
        (
            "Lone Star Convention Center",
            "Convention Center",
            "Austin",
            "TX",
            "",
        ),
        ("Bayview Resort", "Resort", "Miami", "FL", "bayviewresort.example"),
        (
            "Harborlight Hotel Group",
            "Hotel Chain (Upscale)",
            "Boston",
            "MA",
            "",
        ),
        ("The Juniper House", "Boutique Hotel", "Santa Fe", "NM", ""),
        ("Summit Planners", "Event Planner/Agency", "Chicago", "IL", ""),
        ("Northstar Incentives", "Incentives Agency", "New York", "NY", ""),
        (
            "Cascade Conference Center",
            "Conference Center",
            "Portland",
            "OR",
            "",
        ),
        ("Grand Pines Lodge", "Lodge", "Jackson", "WY", ""),
    ];

    rows.into_iter()
        .map(|(name, segment, city, state, website)| CompanyRecord {
            company_name: name.to_string(),
            segment: segment.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            website: website.to_string(),
        })
        .collect()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_topic(raw: &str) -> Result<Topic, String> {
    Topic::from_label(raw)
        .ok_or_else(|| format!("unknown topic '{raw}' (expected revenue, staff, guest, or ops)"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
