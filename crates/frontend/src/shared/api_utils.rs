//! HTTP helpers for the reference service
//!
//! The reference service is a third-party commerce API hosted on its own
//! domain, so the base URL comes from client configuration rather than from
//! the window location.

use gloo_net::http::Request;

/// GET a URL and return the response body as text
///
/// Non-2xx statuses are errors. The URL may carry the access token in the
/// query string, so it is never included in error messages.
pub async fn get_text(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}
