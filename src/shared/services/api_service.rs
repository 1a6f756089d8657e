//! Search backend client
//!
//! URL construction is pure and shared across targets; the actual fetch goes
//! through the browser fetch API and only exists on WASM.

#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;

use crate::config::SearchConfig;
use crate::domain::models::ApiResponse;
use crate::shared::errors::{AppError, Result};

/// Build the search GET URL. Parameter order matches the backend contract:
/// `vrm`, `query_to`, `query_from`, each percent-encoded.
pub fn search_url(config: &SearchConfig, vrm: &str) -> String {
    format!(
        "{}?vrm={}&query_to={}&query_from={}",
        config.endpoint,
        urlencoding::encode(vrm),
        urlencoding::encode(&config.query_to),
        urlencoding::encode(&config.query_from),
    )
}

/// Issue one GET against the search backend and parse the response envelope.
///
/// Every failure mode from request issuance through body parsing collapses
/// into [`AppError::Fetch`]; callers surface its generic message and log the
/// cause.
#[cfg(target_arch = "wasm32")]
pub async fn search_vehicle(config: &SearchConfig, vrm: &str) -> Result<ApiResponse> {
    let url = search_url(config, vrm);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|request_error| AppError::Fetch(request_error.to_string()))?;

    if !response.ok() {
        return Err(AppError::Fetch(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        )));
    }

    response
        .json::<ApiResponse>()
        .await
        .map_err(|parse_error| AppError::Fetch(parse_error.to_string()))
}

// The browser fetch API is unavailable off-WASM; native builds exist for the
// test suite and dx tooling only.
#[cfg(not(target_arch = "wasm32"))]
pub async fn search_vehicle(config: &SearchConfig, vrm: &str) -> Result<ApiResponse> {
    let _ = (config, vrm);
    Err(AppError::Fetch(
        "search requires the browser fetch API".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_all_three_parameters() {
        let config = SearchConfig::default();
        let url = search_url(&config, "MA16 GXX");
        assert_eq!(
            url,
            "http://localhost:8000/api/v1/vehicle\
             ?vrm=MA16%20GXX\
             &query_to=2025-11-11%2023%3A00%3A00\
             &query_from=2025-11-11%2018%3A00%3A00"
        );
    }

    #[test]
    fn test_search_url_respects_config_overrides() {
        let config = SearchConfig::with_endpoint("https://search.example/api/v1/vehicle")
            .with_window("2025-12-01 08:00:00", "2025-12-01 12:00:00");
        let url = search_url(&config, "AB12CDE");
        assert!(url.starts_with("https://search.example/api/v1/vehicle?vrm=AB12CDE&"));
        assert!(url.contains("query_to=2025-12-01%2012%3A00%3A00"));
        assert!(url.ends_with("query_from=2025-12-01%2008%3A00%3A00"));
    }
}
