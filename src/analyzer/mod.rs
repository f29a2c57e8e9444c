//! The analysis orchestrator.
//!
//! Composes the pipeline for one URL: cache probe, then green-hosting lookup
//! and page-weight measurement (concurrently), then the pure carbon and
//! score calculations, then cache insertion.

mod types;

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};

use crate::app::validate_and_normalize_url;
use crate::cache::ResultCache;
use crate::carbon::calculate_carbon;
use crate::error_handling::AnalysisError;
use crate::hosting::check_hosting;
use crate::initialization::HttpClients;
use crate::score::calculate_score;
use crate::weight::estimate_page_weight;
pub use types::{AnalysisOutcome, AnalysisResult};

/// Runs analyses against a shared cache and shared HTTP clients.
///
/// Holds no per-request state: one instance serves all concurrent requests.
pub struct Analyzer {
    clients: HttpClients,
    greencheck_url: String,
    cache: Arc<ResultCache>,
}

impl Analyzer {
    /// Creates an analyzer from its collaborators. The cache is injected so
    /// its lifecycle belongs to the caller, not to this struct.
    pub fn new(clients: HttpClients, greencheck_url: String, cache: Arc<ResultCache>) -> Self {
        Analyzer {
            clients,
            greencheck_url,
            cache,
        }
    }

    /// Analyzes a page end to end.
    ///
    /// The raw URL is validated and normalized first; the normalized form is
    /// the cache key. A fresh analysis consults the hosting registry and the
    /// weight estimator concurrently — the two depend only on the URL, not
    /// on each other. A hosting failure has already been degraded to a
    /// non-green descriptor by the time it reaches here; a weight failure is
    /// fatal and propagates unchanged, and nothing is cached for it.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidUrl`] when the URL fails validation.
    /// - [`AnalysisError::WeightUnavailable`] when both weight strategies
    ///   are exhausted.
    pub async fn analyze(&self, raw_url: &str) -> Result<AnalysisOutcome, AnalysisError> {
        let url = validate_and_normalize_url(raw_url)
            .ok_or_else(|| AnalysisError::InvalidUrl(raw_url.to_string()))?;
        let key = url.to_string();

        if let Some(result) = self.cache.get(&key).await {
            debug!("Cache hit for {key}");
            return Ok(AnalysisOutcome {
                result,
                cached: true,
            });
        }

        info!("Analyzing {key}");
        let (hosting, weight) = tokio::join!(
            check_hosting(&self.clients.probe, &self.greencheck_url, &url),
            estimate_page_weight(&self.clients, &url),
        );
        let weight = weight.map_err(|source| AnalysisError::WeightUnavailable {
            url: key.clone(),
            source,
        })?;

        let carbon = calculate_carbon(weight.bytes, hosting.is_green);
        let score = calculate_score(&carbon, &hosting);
        info!(
            "Analyzed {key}: {} bytes, {}g CO2, score {} ({})",
            weight.bytes, carbon.grams_co2_per_view, score.eco_score, score.ranking
        );

        let result = AnalysisResult {
            url: key.clone(),
            score,
            hosting,
            carbon,
            page_weight_bytes: weight.bytes,
            analyzed_at: Utc::now(),
        };
        self.cache.put(key, result.clone()).await;

        Ok(AnalysisOutcome {
            result,
            cached: false,
        })
    }
}
