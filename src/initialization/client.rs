//! HTTP client initialization.
//!
//! This module builds the two outbound clients the analysis pipeline uses.
//! They share the redirect cap and user-agent but differ in timeout: the
//! probe client serves the HEAD probe and the green-hosting registry lookup,
//! the fetch client serves the full-body fallback.

use std::sync::Arc;

use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::{FETCH_TIMEOUT, MAX_REDIRECT_HOPS, PROBE_TIMEOUT, USER_AGENT};
use crate::error_handling::InitializationError;

/// The outbound HTTP clients shared across all analyses.
#[derive(Clone)]
pub struct HttpClients {
    /// Short-timeout client for metadata probes and registry lookups.
    pub probe: Arc<reqwest::Client>,
    /// Long-timeout client for full page fetches.
    pub fetch: Arc<reqwest::Client>,
}

/// Initializes the HTTP clients.
///
/// Both clients follow at most [`MAX_REDIRECT_HOPS`] redirects and identify
/// themselves with the service user-agent.
///
/// # Errors
///
/// Returns an `InitializationError` if client construction fails.
pub async fn init_clients() -> Result<HttpClients, InitializationError> {
    let probe = ClientBuilder::new()
        .timeout(PROBE_TIMEOUT)
        .redirect(Policy::limited(MAX_REDIRECT_HOPS))
        .user_agent(USER_AGENT)
        .build()?;

    let fetch = ClientBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .redirect(Policy::limited(MAX_REDIRECT_HOPS))
        .user_agent(USER_AGENT)
        .build()?;

    Ok(HttpClients {
        probe: Arc::new(probe),
        fetch: Arc::new(fetch),
    })
}
