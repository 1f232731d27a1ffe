//! HTTP API Client
//!
//! The single request this dashboard makes.

use gloo_net::http::Request;

use crate::state::global::{AnalyticsSnapshot, Envelope};

/// Default analytics endpoint
pub const DEFAULT_OVERVIEW_URL: &str = "https://hdfc-bot-backend.vtour.tech/analytics/overview";

const OVERVIEW_URL_KEY: &str = "gamepulse_overview_url";

/// Get the overview URL from local storage or use default.
///
/// Setting `gamepulse_overview_url` in local storage points the page at a
/// dashboard server's `/analytics/overview` mirror instead.
pub fn get_overview_url() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(OVERVIEW_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_OVERVIEW_URL.to_string())
}

/// GET the overview envelope and unwrap its `data` field
pub async fn fetch_overview() -> Result<AnalyticsSnapshot, String> {
    let url = get_overview_url();

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "HTTP {} {} from {}",
            response.status(),
            response.status_text(),
            url
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Read error: {}", e))?;

    parse_overview(&body)
}

/// Strict decode of the `{ "data": ... }` envelope
pub fn parse_overview(body: &str) -> Result<AnalyticsSnapshot, String> {
    serde_json::from_str::<Envelope>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Parse error: {}", e))
}
