//! Error type definitions.
//!
//! This module defines the error taxonomy used throughout the application.
//! Hosting-registry failures are deliberately absent: they are recovered
//! inside the hosting module and never surface as errors.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::weight::WeightError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that can abort an analysis.
///
/// `InvalidUrl` is a client error (the request never reaches the pipeline);
/// `WeightUnavailable` is a server error (both weight strategies exhausted,
/// so there is no honest byte count to score on).
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The submitted URL is missing, unparsable, or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Page weight could not be determined by any strategy.
    #[error("Failed to determine page weight for {url}")]
    WeightUnavailable {
        /// The normalized URL whose weight could not be measured.
        url: String,
        /// The terminal strategy failure.
        #[source]
        source: WeightError,
    },
}

impl AnalysisError {
    /// True when the error is the caller's fault rather than the service's.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalysisError::InvalidUrl(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_client_error() {
        let err = AnalysisError::InvalidUrl("not a url".to_string());
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Invalid URL: not a url");
    }

    #[test]
    fn test_weight_unavailable_is_server_error() {
        let err = AnalysisError::WeightUnavailable {
            url: "https://example.com/".to_string(),
            source: WeightError::Exhausted,
        };
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("https://example.com/"));
    }
}
