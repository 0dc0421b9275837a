use contracts::users::{SignupRequest, SignupResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Submit the signup form fields to the backend.
///
/// The body is URL-encoded, matching what a native form submission would
/// send. On failure the `Err` carries the server-supplied message, ready
/// to be rendered as-is.
pub async fn signup(request: &SignupRequest) -> Result<SignupResponse, String> {
    let body = serde_qs::to_string(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let response = Request::post(&api_url("/user/signup"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let body = response.json::<serde_json::Value>().await.ok();
        return Err(rejection_message(response.status(), body.as_ref()));
    }

    response
        .json::<SignupResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Pull the `error` field out of a failure body.
///
/// The endpoint promises `{ "error": string }`, but a proxy or a crashed
/// handler can hand back anything, so a missing or malformed body falls
/// back to a status-derived message instead of being treated as fatal.
pub fn rejection_message(status: u16, body: Option<&serde_json::Value>) -> String {
    body.and_then(|value| value.get("error"))
        .and_then(|error| error.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Signup failed: {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn form_body_round_trips_the_field_values() {
        let request = SignupRequest {
            name: "Alice".to_string(),
            surname: "Liddell".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };

        let body = serde_qs::to_string(&request).unwrap();
        let decoded: SignupRequest = serde_qs::from_str(&body).unwrap();

        assert_eq!(decoded, request);
    }

    #[test]
    fn rejection_message_is_the_server_error_field() {
        let body = json!({"error": "username taken"});
        assert_eq!(rejection_message(409, Some(&body)), "username taken");
    }

    #[test]
    fn rejection_message_overwrites_nothing_else_in_the_body() {
        let body = json!({"error": "first", "hint": "ignored"});
        assert_eq!(rejection_message(409, Some(&body)), "first");
    }

    #[test]
    fn missing_error_field_falls_back_to_the_status() {
        let body = json!({"detail": "boom"});
        assert_eq!(rejection_message(500, Some(&body)), "Signup failed: 500");
    }

    #[test]
    fn absent_body_falls_back_to_the_status() {
        assert_eq!(rejection_message(502, None), "Signup failed: 502");
    }

    #[test]
    fn non_string_error_field_falls_back_to_the_status() {
        let body = json!({"error": 42});
        assert_eq!(rejection_message(500, Some(&body)), "Signup failed: 500");
    }
}
