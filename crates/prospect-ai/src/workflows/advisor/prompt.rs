use super::domain::Topic;

/// System prompt declaring the advisory persona and the reply contract,
/// including the `===JSON===` delimiter the parser relies on.
pub const SYSTEM_PROMPT: &str = "Eres un asesor para hotelería/hospitalidad.\n\
Habla con tono cálido, claro y profesional (hospitality).\n\
Usa prácticas tipo SOP: pasos claros, checklists, responsables y horizontes.\n\
\n\
FORMATO DE SALIDA:\n\
1) Resumen (3-4 líneas orientadas a negocio).\n\
2) Acciones recomendadas (exactamente 3), estilo SMART: qué, quién (rol sugerido), cuándo (horizonte en semanas).\n\
3) Riesgos/consideraciones (2-4 bullets).\n\
4) Métricas de éxito (principal y de guardia).\n\
5) Al final, devuelve un JSON válido (SOLO JSON) con:\n\
{\n\
  \"tema\": \"revenue|staff|guest|ops\",\n\
  \"resumen\": \"...\",\n\
  \"acciones\": [\n\
    {\"titulo\":\"...\", \"descripcion\":\"...\", \"horizonte\":\"semanas\", \"owner_sugerido\":\"rol\"}\n\
  ],\n\
  \"riesgos\": [\"...\", \"...\"],\n\
  \"metricas\": {\"principal\":\"...\", \"guardia\":\"...\"},\n\
  \"siguiente_paso_agente\": \"checklist|email|experimento|ninguno\"\n\
}\n\
\n\
NO incluyas explicaciones fuera del formato anterior. Delimita el JSON con una línea que diga SOLO: ===JSON===\n";

/// Compose the user prompt around the routed topic and the GM's question.
pub fn compose_user_prompt(question: &str, topic: Topic) -> String {
    format!(
        "Contexto:\n\
         - Rol del usuario: General Manager (hotel).\n\
         - Tema detectado: {}.\n\
         - Pregunta/objetivo: {}\n\
         \n\
         Instrucciones:\n\
         - Adapta recomendaciones al contexto hotelero.\n\
         - Usa ejemplos operativos realistas (F&B, staff scheduling, guest experience, housekeeping, etc.).\n\
         - Mantén respuesta concisa y accionable.\n",
        topic.label(),
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_carries_topic_and_question() {
        let prompt = compose_user_prompt("¿Cómo subir ADR sin afectar ocupación?", Topic::Revenue);
        assert!(prompt.contains("Tema detectado: revenue."));
        assert!(prompt.contains("¿Cómo subir ADR sin afectar ocupación?"));
    }

    #[test]
    fn system_prompt_declares_the_json_delimiter() {
        assert!(SYSTEM_PROMPT.contains("===JSON==="));
        assert!(SYSTEM_PROMPT.contains("siguiente_paso_agente"));
    }
}
