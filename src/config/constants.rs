//! Configuration constants.
//!
//! This module defines the fixed operational parameters of the service:
//! network timeouts, redirect limits, cache lifetime, and defaults for the
//! values that can be overridden via CLI flags or environment variables.

use std::time::Duration;

// Network operation timeouts
/// Timeout for the metadata-only HEAD probe and the green-hosting registry
/// lookup. Both are small requests that should answer quickly; failing fast
/// here keeps analysis latency bounded.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for the full page fetch fallback. Longer than the probe timeout
/// because the whole body is transferred.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

// Redirect handling
/// Maximum number of redirect hops to follow when probing or fetching a page.
/// Prevents redirect loops from consuming the request budget.
pub const MAX_REDIRECT_HOPS: usize = 5;

// Result cache
/// Time-to-live for cached analysis results: 24 hours. Page weight and
/// hosting status change slowly, so a day-old result is still representative.
pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

// URL handling
/// Maximum URL length (2048 characters) to prevent DoS via extremely long
/// URLs. Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Server defaults
/// Default HTTP listening port (overridable via `--port` or `PORT`).
pub const DEFAULT_PORT: u16 = 3000;
/// Default allowed CORS origins: any origin.
pub const DEFAULT_CORS_ORIGINS: &str = "*";

// External services
/// Base URL of The Green Web Foundation greencheck API. The hostname under
/// test is appended as a path segment.
pub const DEFAULT_GREENCHECK_URL: &str =
    "https://api.thegreenwebfoundation.org/api/v3/greencheck";

/// User-Agent header sent on all outbound requests, so target sites and the
/// registry can identify the crawler.
pub const USER_AGENT: &str = concat!("page_carbon/", env!("CARGO_PKG_VERSION"));
