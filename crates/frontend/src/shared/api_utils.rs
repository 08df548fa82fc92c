//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making
//! authorized JSON requests.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_error::ApiError;
use crate::system::session::Session;

/// Port the backend listens on when no explicit URL is configured
const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// `BACKEND_URL` set at build time wins (e.g. `BACKEND_URL=https://erp.example.com/api/`).
/// Otherwise the URL is derived from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL without trailing slash, like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = option_env!("BACKEND_URL") {
        return normalize_base(url);
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/scrap/get");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", normalize_base(base), path.trim_start_matches('/'))
}

/// GET a JSON document with the session's bearer token
///
/// Only transport and decoding are handled here; deciding whether the
/// payload means success is up to the caller (see `ApiEnvelope`).
/// Returns the decoded body together with the HTTP `ok` flag.
pub async fn get_json<T>(path: &str, session: &Session) -> Result<(T, bool), ApiError>
where
    T: DeserializeOwned,
{
    let bearer = session.bearer().ok_or(ApiError::Unauthorized)?;

    let response = Request::get(&api_url(path))
        .header("Authorization", &bearer)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();

    match response.json::<T>().await {
        Ok(body) => Ok((body, ok)),
        // a non-JSON error page is reported by its status, not as a parse failure
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Parse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000/", "/scrap/get"),
            "http://localhost:3000/scrap/get"
        );
        assert_eq!(
            join_url("https://erp.example.com/api", "sale/sales-dispatch"),
            "https://erp.example.com/api/sale/sales-dispatch"
        );
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(" http://x:3000// "), "http://x:3000");
    }
}
