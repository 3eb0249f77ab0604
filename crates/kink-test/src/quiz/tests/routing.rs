use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::quiz::router::{quiz_router, result_handler, submit_handler, SubmissionRequest};
use crate::quiz::service::QuizService;

#[tokio::test]
async fn submit_handler_returns_created_with_result_id() {
    let (_store, service) = memory_service();
    let service = Arc::new(service);

    let response = submit_handler(
        State(service),
        axum::Json(SubmissionRequest {
            answers: dominant_answers(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn result_handler_returns_retake_payload_for_unknown_id() {
    let (_store, service) = memory_service();
    let service = Arc::new(service);

    let response = result_handler(
        State(service),
        Path("99999999-0000-0000-0000-000000000000".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(payload["status"], "retake");
}

#[tokio::test]
async fn result_handler_maps_outage_to_service_unavailable() {
    let service = Arc::new(QuizService::new(Arc::new(UnavailableStore)));

    let response = result_handler(
        State(service),
        Path("99999999-0000-0000-0000-000000000000".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn submission_round_trips_through_the_router() {
    let (_store, service) = memory_service();
    let router = quiz_router(Arc::new(service));

    let submit = Request::builder()
        .method("POST")
        .uri("/api/v1/quiz/submissions")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "answers": [
                    { "question_id": "role", "option_id": "lead" },
                    { "question_id": "restraint", "option_id": "tie" }
                ]
            })
            .to_string(),
        ))
        .expect("request builds");

    let response = router
        .clone()
        .oneshot(submit)
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    let result_id = payload["result_id"].as_str().expect("id in response");
    assert_eq!(payload["persisted"], true);

    let fetch = Request::builder()
        .uri(format!("/api/v1/quiz/results/{result_id}"))
        .body(Body::empty())
        .expect("request builds");

    let response = router.oneshot(fetch).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(payload["status"], "ready");
    assert_eq!(payload["result"]["id"], result_id);
}

#[tokio::test]
async fn questions_endpoint_serves_the_bank() {
    let (_store, service) = memory_service();
    let router = quiz_router(Arc::new(service));

    let request = Request::builder()
        .uri("/api/v1/quiz/questions")
        .body(Body::empty())
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    let questions = payload["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 10);
}
