//! Page fetching over simple blocking HTTP

use std::time::Duration;

use scraper::Html;
use tracing::debug;

use crate::error::EngineError;

/// Some sites serve bots an empty shell; identify as a browser-ish client.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; feedgrab/0.1)";
const FETCH_TIMEOUT_SECS: u64 = 30;

/// Fetch a page and parse it into a document tree.
pub fn fetch_document(url: &str) -> Result<Html, EngineError> {
    let agent = ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(FETCH_TIMEOUT_SECS)))
            .user_agent(USER_AGENT)
            // Non-2xx responses come back as responses, not transport errors.
            .http_status_as_error(false)
            .build(),
    );

    match agent.get(url).call() {
        Ok(resp) => {
            if resp.status().is_success() {
                let html = resp
                    .into_body()
                    .read_to_string()
                    .map_err(|source| EngineError::Fetch {
                        url: url.to_string(),
                        source,
                    })?;
                debug!(url, bytes = html.len(), "fetched page");
                Ok(Html::parse_document(&html))
            } else {
                Err(EngineError::HttpStatus {
                    status: resp.status().as_u16(),
                    url: url.to_string(),
                })
            }
        }
        Err(source) => Err(EngineError::Fetch {
            url: url.to_string(),
            source,
        }),
    }
}
