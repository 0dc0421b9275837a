//! API utilities for frontend-backend communication.

/// Get the base URL for API requests.
///
/// Resolved from the current window location, with the backend listening
/// on port 3000. Returns an empty string when no window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
