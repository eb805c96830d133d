use gloo::utils::window;

/// Get the base HTTP URL of the backend (same origin as the app).
pub fn get_base_url() -> String {
    let location = window().location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:8000".to_string());

    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path (e.g., "/chat" -> "http://localhost:8000/chat")
pub fn api_url(path: &str) -> String {
    format!("{}{}", get_base_url(), path)
}
