//! API utilities for frontend-backend communication

/// Port the backend listens on
pub const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the base URL from the current window location, using
/// [`BACKEND_PORT`] for the backend server.
///
/// # Returns
/// - Base URL like "http://localhost:3000"
/// - Empty string if window is not available (relative URLs are used then)
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
    base_url(&protocol, &hostname)
}

/// Build a full API URL from a path like "/upload"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("http:", "localhost"), "http://localhost:3000");
        assert_eq!(base_url("https:", "example.com"), "https://example.com:3000");
    }
}
