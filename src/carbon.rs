//! Carbon footprint calculation.
//!
//! Pure arithmetic, no I/O: maps a transferred byte count and a
//! green-hosting flag to an estimated CO2 mass per page view, plus
//! human-relatable equivalences.

use serde::{Deserialize, Serialize};

/// Emission factor: grams of CO2 per megabyte transferred.
pub const EMISSION_FACTOR_GRAMS_PER_MB: f64 = 0.5;

/// Multiplier applied when the page is served from verified green hosting.
/// Renewable-powered infrastructure is credited with half the emissions.
pub const GREEN_HOSTING_FACTOR: f64 = 0.5;

/// One tree absorbs roughly 6 kg of CO2 per year.
const GRAMS_PER_TREE_YEAR: f64 = 6000.0;

/// Boiling one kettle emits roughly 15 g of CO2.
const GRAMS_PER_KETTLE_BOIL: f64 = 15.0;

/// Driving one kilometer by car emits roughly 120 g of CO2.
const GRAMS_PER_KM_DRIVEN: f64 = 120.0;

/// Placeholder for "percentage of sites this page is cleaner than".
/// Not computed from any comparison corpus; a fixed midpoint until a real
/// reference dataset exists.
pub const CLEANER_THAN_PERCENT: u8 = 50;

/// Human-relatable restatements of the CO2 estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equivalence {
    /// Trees that would absorb this much CO2 in a year.
    pub trees_planted: f64,
    /// Kettle boils emitting the same mass.
    pub kettles_boiled: f64,
    /// Kilometers driven by car emitting the same mass.
    pub km_driven: f64,
}

/// Estimated CO2 emissions for one view of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonEstimate {
    /// Grams of CO2 emitted per page view, rounded to 2 decimal places.
    #[serde(rename = "gramsCO2PerView")]
    pub grams_co2_per_view: f64,
    /// Equivalences derived from the headline figure.
    pub equivalence: Equivalence,
    /// See [`CLEANER_THAN_PERCENT`].
    pub cleaner_than_percent: u8,
}

/// Rounds to `places` decimal places.
fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Estimates the CO2 emitted by one view of a page.
///
/// `megabytes * 0.5` grams, halved again when the page is served from green
/// hosting. The headline figure is rounded to 2 decimal places and the
/// equivalences are derived from it, so the numbers a consumer sees never
/// disagree with each other.
pub fn calculate_carbon(bytes: u64, is_green: bool) -> CarbonEstimate {
    let megabytes = bytes as f64 / (1024.0 * 1024.0);
    let mut grams = megabytes * EMISSION_FACTOR_GRAMS_PER_MB;
    if is_green {
        grams *= GREEN_HOSTING_FACTOR;
    }
    let grams = round_to(grams, 2);

    CarbonEstimate {
        grams_co2_per_view: grams,
        equivalence: Equivalence {
            trees_planted: round_to(grams / GRAMS_PER_TREE_YEAR, 5),
            kettles_boiled: round_to(grams / GRAMS_PER_KETTLE_BOIL, 2),
            km_driven: round_to(grams / GRAMS_PER_KM_DRIVEN, 3),
        },
        cleaner_than_percent: CLEANER_THAN_PERCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn test_one_mib_non_green() {
        let estimate = calculate_carbon(MIB, false);
        assert_eq!(estimate.grams_co2_per_view, 0.5);
        assert_eq!(estimate.cleaner_than_percent, 50);
    }

    #[test]
    fn test_four_mib_green_is_halved() {
        let estimate = calculate_carbon(4 * MIB, true);
        assert_eq!(estimate.grams_co2_per_view, 1.0);
    }

    #[test]
    fn test_zero_bytes() {
        let estimate = calculate_carbon(0, false);
        assert_eq!(estimate.grams_co2_per_view, 0.0);
        assert_eq!(estimate.equivalence.trees_planted, 0.0);
        assert_eq!(estimate.equivalence.kettles_boiled, 0.0);
        assert_eq!(estimate.equivalence.km_driven, 0.0);
    }

    #[test]
    fn test_equivalences_derive_from_headline() {
        let estimate = calculate_carbon(30 * MIB, false); // 15 g
        assert_eq!(estimate.grams_co2_per_view, 15.0);
        assert_eq!(estimate.equivalence.kettles_boiled, 1.0);
        assert_eq!(estimate.equivalence.trees_planted, 0.0025);
        assert_eq!(estimate.equivalence.km_driven, 0.125);
    }

    #[test]
    fn test_headline_rounded_to_two_places() {
        // 100 KiB is 0.09765625 MiB -> 0.048828125 g, rounds to 0.05
        let estimate = calculate_carbon(100 * 1024, false);
        assert_eq!(estimate.grams_co2_per_view, 0.05);
    }

    #[test]
    fn test_serializes_with_expected_field_names() {
        let estimate = calculate_carbon(MIB, false);
        let json = serde_json::to_value(&estimate).unwrap();
        assert!(json.get("gramsCO2PerView").is_some());
        assert!(json.get("cleanerThanPercent").is_some());
        assert!(json["equivalence"].get("treesPlanted").is_some());
        assert!(json["equivalence"].get("kettlesBoiled").is_some());
        assert!(json["equivalence"].get("kmDriven").is_some());
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_grams_never_negative(bytes in 0u64..=1_000_000_000_000, green: bool) {
            let estimate = calculate_carbon(bytes, green);
            prop_assert!(estimate.grams_co2_per_view >= 0.0);
            prop_assert!(estimate.equivalence.trees_planted >= 0.0);
            prop_assert!(estimate.equivalence.kettles_boiled >= 0.0);
            prop_assert!(estimate.equivalence.km_driven >= 0.0);
        }

        #[test]
        fn test_green_hosting_halves_emissions(mib in 0u64..=100_000) {
            // Whole-MiB weights give grams with at most two decimal places,
            // so the halving relation survives the 2dp rounding exactly.
            let bytes = mib * MIB;
            let green = calculate_carbon(bytes, true);
            let grey = calculate_carbon(bytes, false);
            prop_assert_eq!(green.grams_co2_per_view, grey.grams_co2_per_view / 2.0);
        }

        #[test]
        fn test_monotone_in_bytes(a in 0u64..=10_000_000_000, b in 0u64..=10_000_000_000) {
            let (small, large) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                calculate_carbon(small, false).grams_co2_per_view
                    <= calculate_carbon(large, false).grams_co2_per_view
            );
        }
    }
}
