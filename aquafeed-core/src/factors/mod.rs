//! Water-Quality Response Curves
//!
//! ## Overview
//!
//! Fish eat less when the water is wrong for them. Each of the three readings
//! is mapped onto a dimensionless multiplier that scales the feed amount:
//!
//! | Reading | Curve | Output |
//! |---|---|---|
//! | Temperature | Gaussian around the optimum, linear penalty outside the tolerated window | [0.1, 1.0] |
//! | Dissolved oxygen | Logistic around the midpoint of minimum and optimum | [0.1, 1.0] |
//! | pH | Plateau inside the tolerated range, linear shoulders | [0.2, 1.0] |
//!
//! A fourth term, the interaction correction, captures what the independent
//! curves miss (low oxygen hurts more in warm water). It works on the raw
//! readings, not on the three factors, and stays within [0.8, 1.2].
//!
//! ## Combination
//!
//! ```text
//! env = f_T × f_DO × f_pH × interaction
//! ```
//!
//! The product is not clamped again. Each component already guarantees its
//! own bounds, and re-clamping would change the reference numbers.
//!
//! ## Why Curves Never Reach Zero
//!
//! A single reading can suspend feeding through the tier classification, but
//! it never erases the amount arithmetically. The caller still sees what the
//! population would need once the water recovers.
//!
//! ## Usage
//!
//! ```
//! use aquafeed_core::{BuiltinSpecies, ResponseCurve, SpeciesCatalog, TemperatureCurve};
//!
//! let tilapia = BuiltinSpecies.lookup("tilapia");
//! let curve = TemperatureCurve::default();
//!
//! assert_eq!(curve.factor(28.0, tilapia), 1.0);
//! assert!(curve.factor(15.0, tilapia) < 0.3);
//! ```

mod interaction;
mod oxygen;
mod ph;
mod temperature;

pub use interaction::{interaction_factor, polynomial_features, POLYNOMIAL_FEATURE_NAMES};
pub use oxygen::OxygenCurve;
pub use ph::PhCurve;
pub use temperature::TemperatureCurve;

use crate::{environment::EnvironmentReading, species::SpeciesProfile, traits::ResponseCurve};

/// Temperature factor with the reference curve
pub fn temperature_factor(temperature: f64, profile: &SpeciesProfile) -> f64 {
    TemperatureCurve::default().factor(temperature, profile)
}

/// Dissolved-oxygen factor with the reference curve
pub fn oxygen_factor(dissolved_oxygen: f64, profile: &SpeciesProfile) -> f64 {
    OxygenCurve::default().factor(dissolved_oxygen, profile)
}

/// pH factor with the reference curve
pub fn ph_factor(ph: f64, profile: &SpeciesProfile) -> f64 {
    PhCurve::default().factor(ph, profile)
}

/// Combined environmental factor: product of the three factors and the
/// interaction correction, without further clamping
pub fn combine(temperature: f64, oxygen: f64, ph: f64, interaction: f64) -> f64 {
    temperature * oxygen * ph * interaction
}

/// Combined environmental factor for a reading set with the reference curves
pub fn environmental_factor(reading: &EnvironmentReading, profile: &SpeciesProfile) -> f64 {
    combine(
        temperature_factor(reading.temperature, profile),
        oxygen_factor(reading.dissolved_oxygen, profile),
        ph_factor(reading.ph, profile),
        interaction_factor(reading),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{species::BuiltinSpecies, traits::SpeciesCatalog};

    #[test]
    fn combination_is_the_plain_product() {
        assert_eq!(combine(1.0, 0.5, 1.0, 1.2), 0.6);
        assert_eq!(combine(0.1, 0.1, 0.2, 0.8), 0.1 * 0.1 * 0.2 * 0.8);
    }

    #[test]
    fn favourable_water_scores_high() {
        let tilapia = BuiltinSpecies.lookup("tilapia");
        let reading = EnvironmentReading::new(28.0, 5.0, 7.5);
        let env = environmental_factor(&reading, tilapia);
        assert!((env - 0.875512).abs() < 1e-6);
    }
}
