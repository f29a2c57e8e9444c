//! Page-weight measurement.
//!
//! Determines a page's transferred byte size with an ordered list of
//! strategies, tried in sequence until one yields a byte count:
//!
//! 1. A metadata-only HEAD probe on the short-timeout client. If the target
//!    declares a `Content-Length`, that figure is used and no body is ever
//!    transferred.
//! 2. A full GET fetch on the long-timeout client, counting the exact bytes
//!    of the retrieved body.
//!
//! When both strategies are exhausted the estimator fails hard. There is no
//! default-weight fallback: a fabricated byte count would silently corrupt
//! the score.

mod types;

use log::{debug, warn};
use reqwest::header::CONTENT_LENGTH;
use url::Url;

use crate::initialization::HttpClients;
pub use types::{PageWeight, WeightError, WeightSource};

/// The strategies, in the order they are attempted.
#[derive(Debug, Clone, Copy)]
enum WeightStrategy {
    HeadProbe,
    FullFetch,
}

const STRATEGY_ORDER: [WeightStrategy; 2] = [WeightStrategy::HeadProbe, WeightStrategy::FullFetch];

impl WeightStrategy {
    /// Runs one strategy. `Ok(None)` means the strategy completed but is not
    /// applicable to this target (probe without a usable content length) and
    /// the next strategy should run.
    async fn attempt(
        self,
        clients: &HttpClients,
        url: &Url,
    ) -> Result<Option<PageWeight>, reqwest::Error> {
        match self {
            WeightStrategy::HeadProbe => {
                let response = clients.probe.head(url.clone()).send().await?;
                if !response.status().is_success() {
                    // Target rejects or does not support HEAD; fall through
                    debug!("HEAD probe for {url} answered {}", response.status());
                    return Ok(None);
                }
                let declared = response
                    .headers()
                    .get(CONTENT_LENGTH)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok());
                Ok(declared.map(|bytes| PageWeight {
                    bytes,
                    source: WeightSource::ContentLength,
                }))
            }
            WeightStrategy::FullFetch => {
                let response = clients
                    .fetch
                    .get(url.clone())
                    .send()
                    .await?
                    .error_for_status()?;
                let body = response.bytes().await?;
                Ok(Some(PageWeight {
                    bytes: body.len() as u64,
                    source: WeightSource::FullBody,
                }))
            }
        }
    }
}

/// Measures the transferred byte size of a page.
///
/// Tries each strategy in order (probe, then full fetch); a strategy error
/// is logged and the next strategy runs. Only when the list is exhausted
/// does the estimator fail, carrying the last transport error.
pub async fn estimate_page_weight(
    clients: &HttpClients,
    url: &Url,
) -> Result<PageWeight, WeightError> {
    let mut last_error: Option<reqwest::Error> = None;

    for strategy in STRATEGY_ORDER {
        match strategy.attempt(clients, url).await {
            Ok(Some(weight)) => {
                debug!(
                    "Measured {url} at {} bytes via {:?}",
                    weight.bytes, weight.source
                );
                return Ok(weight);
            }
            Ok(None) => {
                debug!("{strategy:?} inconclusive for {url}, trying next strategy");
            }
            Err(e) => {
                warn!("{strategy:?} failed for {url}: {e}");
                last_error = Some(e);
            }
        }
    }

    Err(match last_error {
        Some(e) => WeightError::Transport(e),
        None => WeightError::Exhausted,
    })
}
