//! Shared HTTP request handling for the store clients.
//!
//! Both endpoints speak flat JSON with success signalled by the response
//! status class, so sending, status checking, logging, and decoding are
//! factored here; each client constructs its own `RequestBuilder`.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::util::truncate_for_log;

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with timeout configuration.
pub(crate) fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// Perform an HTTP request and return the response text.
///
/// # Arguments
/// * `request_builder` - configured request constructor (URL, body, etc.)
/// * `endpoint` - endpoint name (for logging and errors)
/// * `method` - request method name (for logging)
/// * `url` - request URL (for logging)
///
/// # Returns
/// * `Ok(response_text)` on any success status
/// * `Err(StoreError::Status)` on a non-success status, regardless of class
/// * `Err(StoreError::Network | StoreError::Timeout)` on transport failure
pub(crate) async fn execute_request(
    request_builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    url: &str,
) -> Result<String, StoreError> {
    log::debug!("[{endpoint}] {method} {url}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            StoreError::Timeout {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        } else {
            StoreError::Network {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status();
    log::debug!("[{endpoint}] Response Status: {status}");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::warn!(
            "[{endpoint}] {method} failed (HTTP {status}): {}",
            truncate_for_log(&body)
        );
        return Err(StoreError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    let response_text = response.text().await.map_err(|e| StoreError::Network {
        endpoint: endpoint.to_string(),
        detail: format!("Failed to read response body: {e}"),
    })?;

    log::debug!(
        "[{endpoint}] Response Body: {}",
        truncate_for_log(&response_text)
    );

    Ok(response_text)
}

/// Parse a JSON response body.
pub(crate) fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("[{endpoint}] JSON parse failed: {e}");
        log::error!(
            "[{endpoint}] Raw response: {}",
            truncate_for_log(response_text)
        );
        StoreError::Parse {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        }
    })
}
