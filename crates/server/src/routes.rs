use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::roster::RosterStore;

use crate::openapi::ApiDoc;

pub mod activities;

pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<dyn RosterStore>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `GET /` always lands on the static frontend (307).
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: JSON API, frontend redirect and static assets
pub fn build_router(state: AppState, cors: CorsLayer, static_dir: &str) -> Router {
    let api = Router::new()
        .route("/activities", get(activities::list_activities))
        .route("/activities/:activity_name", get(activities::get_activity))
        .route("/activities/:activity_name/signup", post(activities::signup))
        .route("/activities/:activity_name/unregister", post(activities::unregister));

    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .nest_service("/static", ServeDir::new(static_dir));

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
