//! Analysis result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::carbon::CarbonEstimate;
use crate::hosting::HostingDescriptor;
use crate::score::ScoreResult;

/// The complete outcome of analyzing one page.
///
/// Immutable once constructed; this is the unit stored in the result cache
/// and returned verbatim on a cache hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The normalized URL that was analyzed.
    pub url: String,
    /// Eco-score and ranking, flattened into the result body.
    #[serde(flatten)]
    pub score: ScoreResult,
    /// Hosting provider verdict.
    pub hosting: HostingDescriptor,
    /// Carbon estimate and equivalences.
    pub carbon: CarbonEstimate,
    /// Raw page weight in bytes.
    pub page_weight_bytes: u64,
    /// When the analysis ran.
    pub analyzed_at: DateTime<Utc>,
}

/// An analysis result plus whether it was served from the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    /// The result itself.
    pub result: AnalysisResult,
    /// True when the result came from the cache rather than a fresh run.
    pub cached: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carbon::calculate_carbon;
    use crate::score::calculate_score;

    #[test]
    fn test_result_serializes_camel_case_with_flattened_score() {
        let hosting = HostingDescriptor::degraded();
        let carbon = calculate_carbon(1024 * 1024, hosting.is_green);
        let score = calculate_score(&carbon, &hosting);
        let result = AnalysisResult {
            url: "https://example.com/".to_string(),
            score,
            hosting,
            carbon,
            page_weight_bytes: 1024 * 1024,
            analyzed_at: Utc::now(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["url"], "https://example.com/");
        assert_eq!(json["ecoScore"], 93);
        assert_eq!(json["ranking"], "A");
        assert_eq!(json["pageWeightBytes"], 1024 * 1024);
        assert_eq!(json["hosting"]["isGreen"], false);
        assert_eq!(json["carbon"]["gramsCO2PerView"], 0.5);
        assert!(json.get("analyzedAt").is_some());
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let hosting = HostingDescriptor::degraded();
        let carbon = calculate_carbon(2048, hosting.is_green);
        let score = calculate_score(&carbon, &hosting);
        let result = AnalysisResult {
            url: "https://example.com/".to_string(),
            score,
            hosting,
            carbon,
            page_weight_bytes: 2048,
            analyzed_at: Utc::now(),
        };

        let json = serde_json::to_string(&result).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
