//! HTTP fetching for source pages.
//!
//! One GET per call, no retries. Every request carries the fixed
//! `User-Agent: status-site-scraper/1.0` header and is bounded by a 30 second
//! timeout; both are baked into the client returned by [`build_client`].

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Identifies this scraper to the sites it visits.
pub const USER_AGENT: &str = "status-site-scraper/1.0";

/// Upper bound on a single request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Build the shared HTTP client used for every source.
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// GET `url` and return the response body as text.
///
/// Transport errors, timeouts, and any non-2xx status are all reported as a
/// [`FetchError`].
#[instrument(level = "info", skip(client))]
pub async fn fetch(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await?;
    debug!(bytes = body.len(), %status, "Fetched page");
    Ok(body)
}
