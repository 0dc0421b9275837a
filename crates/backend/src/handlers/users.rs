use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::users::{SignupRequest, SignupResponse};
use sqlx::SqlitePool;

use crate::error::SignupError;
use crate::users::service;

/// Signup handler. Accepts the URL-encoded form body a native submission
/// would produce.
pub async fn signup(
    State(pool): State<SqlitePool>,
    Form(request): Form<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), SignupError> {
    let response = service::signup(&pool, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
