//! Host address lookup.
//!
//! The page footer shows which host served it. The address comes from the
//! cloud instance metadata endpoint; any failure leaves the footer blank.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Metadata endpoints answer quickly or not at all.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Fetch the host's private address from `url`.
///
/// Returns `None` on any transport error, non-success status or empty body.
pub async fn lookup_address(url: &str) -> Option<String> {
    let client = match Client::builder().timeout(LOOKUP_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => {
            warn!(error = %err, "Failed to build metadata client");
            return None;
        }
    };

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            warn!(url, error = %err, "Instance metadata lookup failed");
            return None;
        }
    };

    if !response.status().is_success() {
        warn!(url, status = %response.status(), "Instance metadata lookup rejected");
        return None;
    }

    match response.text().await {
        Ok(body) => {
            let address = body.trim().to_string();
            debug!(address = %address, "Instance address resolved");
            (!address.is_empty()).then_some(address)
        }
        Err(err) => {
            warn!(url, error = %err, "Instance metadata body unreadable");
            None
        }
    }
}
