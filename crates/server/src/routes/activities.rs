use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use common::types::MessageResponse;
use models::{ActivityRecord, Roster};
use serde::Deserialize;

use crate::errors::JsonApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// A missing `email` is passed on as empty, so the roster reports an unknown
/// activity (404) before rejecting the email (422).
fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, JsonApiError> {
    query
        .map(|Query(q)| q.email.unwrap_or_default())
        .map_err(|rej| JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rej.body_text()))
}

#[utoipa::path(
    get,
    path = "/activities",
    tag = "activities",
    responses((status = 200, description = "All activities keyed by name", body = crate::openapi::ActivitiesDoc))
)]
pub async fn list_activities(State(state): State<AppState>) -> Json<Roster> {
    Json(state.roster.list().await)
}

#[utoipa::path(
    get,
    path = "/activities/{activity_name}",
    tag = "activities",
    params(("activity_name" = String, Path, description = "Exact, case-sensitive activity name")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ActivityDoc),
        (status = 404, description = "Activity not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
) -> Result<Json<ActivityRecord>, JsonApiError> {
    let rec = state.roster.get(&activity_name).await?;
    Ok(Json(rec))
}

#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    tag = "activities",
    params(
        ("activity_name" = String, Path, description = "Exact, case-sensitive activity name"),
        ("email" = String, Query, description = "Student email")
    ),
    responses(
        (status = 200, description = "Signed up", body = crate::openapi::MessageDoc),
        (status = 400, description = "Already signed up", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Activity not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Missing email", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let email = email_from(query)?;
    let change = state.roster.signup(&activity_name, &email).await?;
    Ok(Json(MessageResponse::new(change.message())))
}

#[utoipa::path(
    post,
    path = "/activities/{activity_name}/unregister",
    tag = "activities",
    params(
        ("activity_name" = String, Path, description = "Exact, case-sensitive activity name"),
        ("email" = String, Query, description = "Student email")
    ),
    responses(
        (status = 200, description = "Unregistered", body = crate::openapi::MessageDoc),
        (status = 400, description = "Not registered", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Activity not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Missing email", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let email = email_from(query)?;
    let change = state.roster.unregister(&activity_name, &email).await?;
    Ok(Json(MessageResponse::new(change.message())))
}
