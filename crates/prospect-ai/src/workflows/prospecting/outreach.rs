use serde::Serialize;

/// Single touchpoint in the canned outreach cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutreachStep {
    pub step: u8,
    pub channel: &'static str,
    pub subject: String,
    pub body: String,
}

/// Three-step MICE outreach sequence personalized for one contact.
///
/// Copy is Spanish by design; the target accounts are worked by a
/// Spanish-speaking sales team.
pub fn outreach_sequence(
    company_name: &str,
    contact_first_name: &str,
    segment: &str,
) -> Vec<OutreachStep> {
    vec![
        OutreachStep {
            step: 1,
            channel: "Email",
            subject: format!("Offsites/Grupos – ¿Encaja {company_name} con Paradero?"),
            body: format!(
                "Hola {contact_first_name},\n\n\
                 Soy Emiliano. Trabajo con Paradero para diseñar experiencias MICE en México. \
                 Vi que {company_name} opera en el segmento '{segment}' y pensé en propuestas \
                 para sus clientes corporativos (retreats, incentivos, board meetings).\n\n\
                 ¿Te interesa una llamada de 15 min para explorar fechas, tarifas corporativas \
                 y beneficios?\n\nSaludos,\nEmiliano"
            ),
        },
        OutreachStep {
            step: 2,
            channel: "Email (follow-up)",
            subject: "¿Te viene bien esta semana o la próxima?".to_string(),
            body: format!(
                "Hola {contact_first_name},\n\n\
                 Retomando mi nota anterior sobre opciones MICE en Paradero. \
                 Puedo compartir un par de itinerarios de ejemplo (3d/2n) y políticas para \
                 grupos. ¿Agenda abierta esta o la próxima semana?\n\nGracias,\nEmiliano"
            ),
        },
        OutreachStep {
            step: 3,
            channel: "LinkedIn/Call",
            subject: "Touchpoint rápido".to_string(),
            body: format!(
                "Hola {contact_first_name},\n\n\
                 ¿Podemos coordinar un touchpoint rápido? También puedo enviar un one-pager \
                 con espacios, capacidades y perks para planners.\n\nSaludos"
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_has_three_ordered_steps() {
        let steps = outreach_sequence("Lone Star Convention Center", "Alex", "Convention Center");
        assert_eq!(steps.len(), 3);
        assert_eq!(
            steps.iter().map(|step| step.step).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(steps[0].channel, "Email");
        assert_eq!(steps[2].channel, "LinkedIn/Call");
    }

    #[test]
    fn copy_is_personalized() {
        let steps = outreach_sequence("Grand Pines Lodge", "Jordan", "Lodge");
        assert!(steps[0].subject.contains("Grand Pines Lodge"));
        assert!(steps[0].body.contains("Hola Jordan"));
        assert!(steps[0].body.contains("'Lodge'"));
        assert!(steps[1].body.contains("Hola Jordan"));
    }
}
