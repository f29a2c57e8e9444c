//! page_carbon library: web page carbon footprint analysis
//!
//! This library estimates the carbon footprint of a web page from its
//! transferred byte size and its hosting provider's energy source, then
//! derives a bounded 0-100 eco-score with an A-F ranking. Results are cached
//! in-process for 24 hours per normalized URL.
//!
//! # Example
//!
//! ```no_run
//! use page_carbon::{analyze_once, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let result = analyze_once(&config, "https://example.com").await?;
//! println!("{} scores {} ({})", result.url, result.score.eco_score, result.score.ranking);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
pub mod analyzer;
pub mod cache;
pub mod carbon;
pub mod config;
mod error_handling;
pub mod hosting;
pub mod initialization;
pub mod score;
pub mod server;
pub mod weight;

// Re-export public API
pub use analyzer::{AnalysisOutcome, AnalysisResult, Analyzer};
pub use app::validate_and_normalize_url;
pub use cache::{CacheStats, ResultCache};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AnalysisError, InitializationError};
pub use run::{analyze_once, run_server};

// Internal run module (wires the collaborators together)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};

    use crate::analyzer::{AnalysisResult, Analyzer};
    use crate::cache::ResultCache;
    use crate::config::Config;
    use crate::initialization::init_clients;
    use crate::server::{cors_layer, start_server, AppState};

    /// Builds an analyzer with a fresh cache from the configuration.
    async fn init_analyzer(config: &Config) -> Result<(Arc<Analyzer>, Arc<ResultCache>)> {
        let clients = init_clients()
            .await
            .context("Failed to initialize HTTP clients")?;
        let cache = Arc::new(ResultCache::new());
        let analyzer = Arc::new(Analyzer::new(
            clients,
            config.greencheck_url(),
            Arc::clone(&cache),
        ));
        Ok((analyzer, cache))
    }

    /// Runs the HTTP server until shutdown.
    ///
    /// Constructs the cache and analyzer once at startup; both live for the
    /// whole process and are shared by every request.
    ///
    /// # Errors
    ///
    /// Returns an error if client initialization or port binding fails, or
    /// if the server dies while serving.
    pub async fn run_server(config: Config) -> Result<()> {
        let (analyzer, cache) = init_analyzer(&config).await?;
        let state = AppState { analyzer, cache };
        let cors = cors_layer(&config.cors_origins());
        start_server(config.port(), state, cors).await
    }

    /// Analyzes a single URL outside the server, for the one-shot CLI mode.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization fails or the analysis itself
    /// fails (invalid URL, or page weight unavailable).
    pub async fn analyze_once(config: &Config, url: &str) -> Result<AnalysisResult> {
        let (analyzer, _cache) = init_analyzer(config).await?;
        let outcome = analyzer
            .analyze(url)
            .await
            .context("Failed to analyze URL")?;
        Ok(outcome.result)
    }
}
