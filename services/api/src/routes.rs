use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use kink_test::quiz::{quiz_router, QuizService};
use kink_test::store::FileResultStore;
use kink_test::vitals::{HealthStatus, WebVital};

/// Compose the quiz router with the service-level endpoints. State for the
/// quiz routes travels in the router's own state; everything else reads the
/// shared [`AppState`] extension.
pub(crate) fn with_service_routes(service: Arc<QuizService<FileResultStore>>) -> axum::Router {
    quiz_router(service)
        .route("/health", axum::routing::get(health_endpoint))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/vitals", axum::routing::post(vitals_endpoint))
        .route("/api/v1/articles", axum::routing::get(articles_endpoint))
        .route(
            "/api/v1/articles/:slug",
            axum::routing::get(article_endpoint),
        )
}

pub(crate) async fn health_endpoint(Extension(state): Extension<AppState>) -> Response {
    let status = state.health_status();
    let report = state.vitals.report(status);

    let code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (code, Json(report)).into_response()
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Accepts one measurement per call. Recording never fails; only a payload
/// that does not parse produces the error object, so a broken client can
/// never degrade the primary flow.
pub(crate) async fn vitals_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<WebVital>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(vital)) => {
            state.vitals.record(&vital);
            (StatusCode::OK, Json(json!({ "success": true }))).into_response()
        }
        Err(rejection) => {
            let payload = json!({ "error": rejection.body_text() });
            (rejection.status(), Json(payload)).into_response()
        }
    }
}

pub(crate) async fn articles_endpoint(Extension(state): Extension<AppState>) -> Response {
    let articles: Vec<_> = state
        .articles
        .articles()
        .iter()
        .map(|article| {
            json!({
                "slug": article.slug,
                "title": article.title,
                "description": article.description,
                "published_at": article.published_at,
                "reading_minutes": article.reading_minutes,
            })
        })
        .collect();

    (StatusCode::OK, Json(json!({ "articles": articles }))).into_response()
}

pub(crate) async fn article_endpoint(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match state.articles.find(&slug) {
        Ok(article) => (StatusCode::OK, Json(article)).into_response(),
        Err(not_found) => {
            let payload = json!({ "error": not_found.to_string(), "slug": not_found.slug });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
