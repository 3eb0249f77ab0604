use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::Answer;
use super::result::ResultId;
use super::service::{QuizService, SubmissionOutcome};
use crate::presentation::present;
use crate::store::{ResultStore, StoreError};

/// Router builder exposing the quiz endpoints over the given store.
pub fn quiz_router<S>(service: Arc<QuizService<S>>) -> Router
where
    S: ResultStore + 'static,
{
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler::<S>))
        .route("/api/v1/quiz/submissions", post(submit_handler::<S>))
        .route(
            "/api/v1/quiz/results/:result_id",
            get(result_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmissionRequest {
    pub(crate) answers: Vec<Answer>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmissionResponse {
    pub(crate) result_id: ResultId,
    pub(crate) persisted: bool,
    pub(crate) result: super::result::TestResult,
}

pub(crate) async fn questions_handler<S>(
    State(service): State<Arc<QuizService<S>>>,
) -> Response
where
    S: ResultStore + 'static,
{
    let questions = service.bank().questions().to_vec();
    (StatusCode::OK, axum::Json(json!({ "questions": questions }))).into_response()
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<QuizService<S>>>,
    axum::Json(request): axum::Json<SubmissionRequest>,
) -> Response
where
    S: ResultStore + 'static,
{
    match service.submit(&request.answers) {
        Ok(SubmissionOutcome { result, persisted }) => {
            let response = SubmissionResponse {
                result_id: result.id.clone(),
                persisted,
                result,
            };
            (StatusCode::CREATED, axum::Json(response)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn result_handler<S>(
    State(service): State<Arc<QuizService<S>>>,
    Path(result_id): Path<String>,
) -> Response
where
    S: ResultStore + 'static,
{
    let id = ResultId(result_id);
    match present(service.store(), &id) {
        // A retake payload is still a 200: absence is an expected outcome,
        // not an error page.
        Ok(presentation) => (StatusCode::OK, axum::Json(presentation)).into_response(),
        Err(StoreError::Unavailable(reason)) => {
            let payload = json!({ "error": format!("result storage unavailable: {reason}") });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
