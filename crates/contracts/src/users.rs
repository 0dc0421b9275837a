use serde::{Deserialize, Serialize};

/// Fields of the signup form, in markup order.
///
/// The frontend encodes this as a URL-encoded body (what a native form
/// submission would send) and the backend decodes it with `axum::Form`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub id: String,
    pub email: String,
}

/// Failure body for the signup endpoint: `{ "error": string }`.
///
/// The `error` message is rendered verbatim to the user, so the backend
/// keeps it human-readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
