//! Helpers for talking to the bills API.

/// Base URL of the API, derived from the current window location. The
/// backend listens on port 5678 next to whatever host serves the app.
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
    format!("{}//{}:5678", protocol, hostname)
}

/// Build a full API URL from a path starting with "/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
