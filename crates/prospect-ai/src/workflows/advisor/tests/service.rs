use super::common::{canned_reply, service_with};
use crate::workflows::advisor::domain::Topic;
use crate::workflows::advisor::followup::FollowupKind;
use crate::workflows::advisor::service::{AdviceRequest, AdvisorServiceError, TopicSource};

fn staff_question() -> AdviceRequest {
    AdviceRequest {
        question: "¿Cómo bajar la rotación del equipo este trimestre?".to_string(),
        topic: None,
    }
}

#[test]
fn advise_routes_generates_and_parses() {
    let (service, generator) = service_with(vec![
        Ok(canned_reply("checklist")),
        Ok("1. Revisar turnos\n2. Entrevistas 1:1".to_string()),
    ]);

    let outcome = service.advise(staff_question()).expect("advise succeeds");

    assert_eq!(outcome.topic, Topic::Staff);
    assert_eq!(outcome.topic_source, TopicSource::Detected);
    assert_eq!(outcome.markdown, "## Resumen\nPlan de retención en dos frentes.");

    let payload = outcome.payload.expect("payload parsed");
    assert_eq!(payload.topic, Some(Topic::Staff));
    assert_eq!(payload.actions.len(), 1);

    let followup = outcome.followup.expect("follow-up produced");
    assert_eq!(followup.kind, FollowupKind::Checklist);
    assert!(followup.content.contains("Revisar turnos"));

    let requests = generator.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].user_prompt.contains("Tema detectado: staff."));
    assert!(requests[1].user_prompt.contains("checklist operativo"));
}

#[test]
fn requested_topic_overrides_detection_but_keeps_the_tally() {
    let (service, generator) = service_with(vec![Ok(canned_reply("ninguno"))]);
    let request = AdviceRequest {
        topic: Some(Topic::Revenue),
        ..staff_question()
    };

    let outcome = service.advise(request).expect("advise succeeds");

    assert_eq!(outcome.topic, Topic::Revenue);
    assert_eq!(outcome.topic_source, TopicSource::Requested);
    let staff_votes = outcome
        .votes
        .iter()
        .find(|tally| tally.topic == Topic::Staff)
        .expect("staff tally present");
    assert!(staff_votes.votes > 0);

    let requests = generator.requests();
    assert!(requests[0].user_prompt.contains("Tema detectado: revenue."));
}

#[test]
fn blank_questions_are_rejected_eagerly() {
    let (service, generator) = service_with(Vec::new());
    let request = AdviceRequest {
        question: "   ".to_string(),
        topic: None,
    };

    match service.advise(request) {
        Err(AdvisorServiceError::EmptyQuestion) => {}
        other => panic!("expected empty question error, got {other:?}"),
    }
    assert!(generator.requests().is_empty());
}

#[test]
fn primary_generation_failure_is_an_error() {
    let (service, _) = service_with(vec![Err("gateway timeout".to_string())]);

    match service.advise(staff_question()) {
        Err(AdvisorServiceError::Generation(err)) => {
            assert!(err.to_string().contains("gateway timeout"));
        }
        other => panic!("expected generation error, got {other:?}"),
    }
}

#[test]
fn followup_failure_degrades_to_an_inline_notice() {
    let (service, _) = service_with(vec![
        Ok(canned_reply("email")),
        Err("gateway timeout".to_string()),
    ]);

    let outcome = service.advise(staff_question()).expect("advise succeeds");

    let followup = outcome.followup.expect("follow-up present");
    assert_eq!(followup.kind, FollowupKind::Email);
    assert!(followup
        .content
        .contains("No se pudo generar el artefacto del agente"));
}

#[test]
fn no_followup_is_requested_when_the_payload_says_ninguno() {
    let (service, generator) = service_with(vec![Ok(canned_reply("ninguno"))]);

    let outcome = service.advise(staff_question()).expect("advise succeeds");

    assert!(outcome.followup.is_none());
    assert_eq!(generator.requests().len(), 1);
}

#[test]
fn reply_without_payload_still_returns_markdown() {
    let (service, _) = service_with(vec![Ok("Texto libre sin JSON.".to_string())]);

    let outcome = service.advise(staff_question()).expect("advise succeeds");

    assert_eq!(outcome.markdown, "Texto libre sin JSON.");
    assert!(outcome.payload.is_none());
    assert!(outcome.followup.is_none());
}
