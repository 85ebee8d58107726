use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::generator::RecommendationGenerator;
use super::service::{AdviceRequest, AdvisorService, AdvisorServiceError};

/// Router builder exposing the advisory endpoint.
pub fn advisor_router<G>(service: Arc<AdvisorService<G>>) -> Router
where
    G: RecommendationGenerator + 'static,
{
    Router::new()
        .route(
            "/api/v1/advisor/recommendations",
            post(recommendations_handler::<G>),
        )
        .with_state(service)
}

pub(crate) async fn recommendations_handler<G>(
    State(service): State<Arc<AdvisorService<G>>>,
    axum::Json(request): axum::Json<AdviceRequest>,
) -> Response
where
    G: RecommendationGenerator + 'static,
{
    match service.advise(request) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error @ AdvisorServiceError::EmptyQuestion) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error @ AdvisorServiceError::Generation(_)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}
