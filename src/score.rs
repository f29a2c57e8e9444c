//! Eco-score derivation.
//!
//! Pure arithmetic, no I/O: maps a carbon estimate and a hosting descriptor
//! to a bounded 0-100 score and a letter ranking. Penalty breakpoints and
//! ranking thresholds are fixed policy constants, not configurable.

use serde::{Deserialize, Serialize};

use crate::carbon::CarbonEstimate;
use crate::hosting::HostingDescriptor;

/// Bonus awarded when the page is served from verified green hosting.
const GREEN_HOSTING_BONUS: f64 = 10.0;

/// Maximum bonus contributed by the cleaner-than percentage.
const CLEANER_THAN_MAX_BONUS: f64 = 5.0;

/// Letter ranking derived from the eco-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ranking {
    /// 90 and above
    A,
    /// 75 to 89
    B,
    /// 60 to 74
    C,
    /// 45 to 59
    D,
    /// 30 to 44
    E,
    /// Below 30
    F,
}

impl Ranking {
    /// Maps a score to its ranking band.
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Ranking::A,
            75..=89 => Ranking::B,
            60..=74 => Ranking::C,
            45..=59 => Ranking::D,
            30..=44 => Ranking::E,
            _ => Ranking::F,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Ranking::A => "A",
            Ranking::B => "B",
            Ranking::C => "C",
            Ranking::D => "D",
            Ranking::E => "E",
            Ranking::F => "F",
        };
        f.write_str(letter)
    }
}

/// The bounded eco-score and its letter ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Composite eco-score in [0, 100].
    pub eco_score: u8,
    /// Letter grade for the score.
    pub ranking: Ranking,
}

/// Piecewise-linear CO2 penalty.
///
/// Light pages are penalized gently (20 points per gram), the slope steepens
/// sharply between 0.5 g and 1 g, then flattens; beyond 2 g the penalty is
/// capped at 50 so even enormous pages keep a meaningful score gradient
/// elsewhere in the formula.
fn co2_penalty(grams: f64) -> f64 {
    if grams <= 0.5 {
        grams * 20.0
    } else if grams <= 1.0 {
        10.0 + (grams - 0.5) * 40.0
    } else if grams <= 2.0 {
        30.0 + (grams - 1.0) * 15.0
    } else {
        45.0 + ((grams - 2.0) * 5.0).min(5.0)
    }
}

/// Derives the eco-score for a carbon estimate and hosting descriptor.
///
/// Starts at 100, subtracts the CO2 penalty, credits green hosting and the
/// cleaner-than placeholder, clamps to [0, 100], and rounds to the nearest
/// integer. Deterministic: equal inputs always produce equal scores.
pub fn calculate_score(carbon: &CarbonEstimate, hosting: &HostingDescriptor) -> ScoreResult {
    let mut score = 100.0 - co2_penalty(carbon.grams_co2_per_view);
    if hosting.is_green {
        score += GREEN_HOSTING_BONUS;
    }
    score += carbon.cleaner_than_percent as f64 / 100.0 * CLEANER_THAN_MAX_BONUS;

    let eco_score = score.clamp(0.0, 100.0).round() as u8;
    ScoreResult {
        eco_score,
        ranking: Ranking::from_score(eco_score),
    }
}
