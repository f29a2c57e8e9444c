//! Weight estimation data structures.

use thiserror::Error;

/// Which strategy produced the byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightSource {
    /// The HEAD probe's declared `Content-Length`; no body was transferred.
    ContentLength,
    /// The byte length of a fully fetched body.
    FullBody,
}

/// A measured page weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWeight {
    /// Transferred byte size of the page's primary response.
    pub bytes: u64,
    /// The strategy that produced the figure.
    pub source: WeightSource,
}

/// Terminal failure of the weight estimator.
///
/// Raised only when every strategy has been tried; the caller must abort the
/// analysis rather than score on a fabricated byte count.
#[derive(Error, Debug)]
pub enum WeightError {
    /// The last strategy failed at the transport level (connect, timeout,
    /// body read, or a non-success status surfaced via `error_for_status`).
    #[error("page fetch failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Every strategy ran without error yet none produced a byte count.
    #[error("no weight strategy produced a byte count")]
    Exhausted,
}
