use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::users::ErrorBody;
use thiserror::Error;

/// Everything that can go wrong while registering a customer.
///
/// Each variant maps to an HTTP status plus a `{ "error": message }` JSON
/// body; the message is what the frontend renders verbatim.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error("This email address is already taken.")]
    EmailTaken,

    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SignupError {
    fn status(&self) -> StatusCode {
        match self {
            SignupError::EmailTaken => StatusCode::CONFLICT,
            SignupError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SignupError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let error = match &self {
            SignupError::Internal(err) => {
                tracing::error!("signup failed: {:#}", err);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (self.status(), Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_taken_keeps_the_original_wording() {
        assert_eq!(
            SignupError::EmailTaken.to_string(),
            "This email address is already taken."
        );
        assert_eq!(SignupError::EmailTaken.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn internal_errors_are_not_leaked_to_the_client() {
        let err = SignupError::Internal(anyhow::anyhow!("db path /secret/hotels.db missing"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
