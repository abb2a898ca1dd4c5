//! Blocking HTTP transport shared by the registry and fixture-URL backends.

use std::time::Duration;

use depgraph_util::errors::DepgraphError;
use reqwest::blocking::Client;

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(500);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a shared blocking client for registry lookups.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("depgraph/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            DepgraphError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// GET `url` and return the body as text, retrying timeouts, connection errors and 5xx.
pub fn fetch_text(client: &Client, url: &str) -> miette::Result<String> {
    let mut last_err = String::new();

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            std::thread::sleep(RETRY_DELAY * attempt);
        }

        tracing::info!(url, attempt, "GET");
        match client.get(url).send() {
            Ok(resp) => {
                let status = resp.status();
                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(DepgraphError::Network {
                        message: format!("{url} not found (HTTP 404)"),
                    }
                    .into());
                }
                if status.is_server_error() {
                    last_err = format!("HTTP {status} from {url}");
                    continue;
                }
                if !status.is_success() {
                    return Err(DepgraphError::Network {
                        message: format!("HTTP {status} fetching {url}"),
                    }
                    .into());
                }
                return resp.text().map_err(|e| {
                    DepgraphError::Network {
                        message: format!("Failed to read response from {url}: {e}"),
                    }
                    .into()
                });
            }
            Err(e) if e.is_timeout() || e.is_connect() => {
                last_err = format!("{e}");
                continue;
            }
            Err(e) => {
                return Err(DepgraphError::Network {
                    message: format!("Request to {url} failed: {e}"),
                }
                .into());
            }
        }
    }

    Err(DepgraphError::Network {
        message: format!("Failed after {MAX_RETRIES} attempts for {url}: {last_err}"),
    }
    .into())
}
