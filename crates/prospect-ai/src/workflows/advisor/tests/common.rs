use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::workflows::advisor::classification::TopicClassifier;
use crate::workflows::advisor::generator::{
    GenerationError, GenerationRequest, RecommendationGenerator,
};
use crate::workflows::advisor::reply::JSON_DELIMITER;
use crate::workflows::advisor::service::AdvisorService;

/// Generator stub replaying scripted replies and recording every request.
#[derive(Default)]
pub(super) struct ScriptedGenerator {
    requests: Mutex<Vec<GenerationRequest>>,
    replies: Mutex<VecDeque<Result<String, String>>>,
}

impl ScriptedGenerator {
    pub(super) fn with_replies(replies: Vec<Result<String, String>>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.into()),
        }
    }

    pub(super) fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("request mutex poisoned").clone()
    }
}

impl RecommendationGenerator for ScriptedGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests
            .lock()
            .expect("request mutex poisoned")
            .push(request.clone());

        match self
            .replies
            .lock()
            .expect("reply mutex poisoned")
            .pop_front()
        {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(GenerationError::Unavailable(message)),
            None => Err(GenerationError::Unavailable(
                "no scripted reply left".to_string(),
            )),
        }
    }
}

/// Conforming generator reply with the given `siguiente_paso_agente` value.
pub(super) fn canned_reply(next_step: &str) -> String {
    format!(
        "## Resumen\nPlan de retención en dos frentes.\n{}\n{}",
        JSON_DELIMITER,
        serde_json::json!({
            "tema": "staff",
            "resumen": "Plan de retención en dos frentes.",
            "acciones": [{
                "titulo": "Entrevistas de permanencia",
                "descripcion": "Sesiones 1:1 con el equipo de pisos.",
                "horizonte": "2 semanas",
                "owner_sugerido": "HR Manager"
            }],
            "riesgos": ["Carga extra para supervisores"],
            "metricas": {"principal": "rotación mensual", "guardia": "horas extra"},
            "siguiente_paso_agente": next_step
        })
    )
}

pub(super) fn service_with(
    replies: Vec<Result<String, String>>,
) -> (AdvisorService<ScriptedGenerator>, Arc<ScriptedGenerator>) {
    let generator = Arc::new(ScriptedGenerator::with_replies(replies));
    let service = AdvisorService::new(TopicClassifier::hospitality_standard(), generator.clone());
    (service, generator)
}
