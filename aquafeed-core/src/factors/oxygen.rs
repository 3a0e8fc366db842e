//! Dissolved-oxygen response curve
//!
//! Appetite collapses quickly once oxygen drops below what the species needs,
//! so the curve is a logistic step centred between the minimum and the
//! optimum:
//!
//! ```text
//! DO_crit = (DO_min + DO_opt) / 2
//! f(DO)   = 1 / (1 + exp(-k × (DO - DO_crit)))      k = 2.0
//! ```
//!
//! Two corrections follow:
//!
//! - **Over-saturation** (`DO > 1.5 × DO_opt`): × 0.95. Gas supersaturation
//!   is mildly harmful.
//! - **Hypoxia** (`DO < DO_min`): × max(0.1, DO / DO_min), scaling toward the
//!   floor as oxygen approaches zero.
//!
//! The result is clamped to [0.1, 1.0]. At the optimum the factor equals
//! `sigmoid(DO_opt - DO_min)` (k/2 × the gap), e.g. 0.881 for a 2 mg/L gap.

use crate::{
    constants::factors::{
        OXYGEN_FACTOR_MAX, OXYGEN_FACTOR_MIN, OXYGEN_HYPOXIA_SCALE_MIN, OXYGEN_STEEPNESS,
        OXYGEN_SUPERSATURATION_PENALTY, OXYGEN_SUPERSATURATION_RATIO,
    },
    species::SpeciesProfile,
    traits::{FactorBounds, ResponseCurve},
    utils::sigmoid,
};

/// Logistic dissolved-oxygen curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OxygenCurve {
    /// Logistic steepness (per mg/L)
    steepness: f64,

    /// Multiple of the optimum above which the saturation penalty applies
    supersaturation_ratio: f64,

    /// Multiplier for over-saturated water
    supersaturation_penalty: f64,
}

impl Default for OxygenCurve {
    fn default() -> Self {
        Self {
            steepness: OXYGEN_STEEPNESS,
            supersaturation_ratio: OXYGEN_SUPERSATURATION_RATIO,
            supersaturation_penalty: OXYGEN_SUPERSATURATION_PENALTY,
        }
    }
}

impl OxygenCurve {
    /// Curve with a custom steepness, keeping the saturation correction
    pub fn with_steepness(steepness: f64) -> Self {
        Self {
            steepness: libm::fabs(steepness),
            ..Self::default()
        }
    }

    /// Midpoint of the logistic step for a species (mg/L)
    pub fn critical_level(profile: &SpeciesProfile) -> f64 {
        (profile.min_do + profile.optimal_do) / 2.0
    }
}

impl ResponseCurve for OxygenCurve {
    fn factor(&self, dissolved_oxygen: f64, profile: &SpeciesProfile) -> f64 {
        let critical = Self::critical_level(profile);
        let mut factor = sigmoid(self.steepness * (dissolved_oxygen - critical));

        if dissolved_oxygen > profile.optimal_do * self.supersaturation_ratio {
            factor *= self.supersaturation_penalty;
        }

        if dissolved_oxygen < profile.min_do {
            factor *= (dissolved_oxygen / profile.min_do).max(OXYGEN_HYPOXIA_SCALE_MIN);
        }

        self.bounds().clamp(factor)
    }

    fn bounds(&self) -> FactorBounds {
        FactorBounds {
            floor: OXYGEN_FACTOR_MIN,
            ceiling: OXYGEN_FACTOR_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{species::BuiltinSpecies, traits::SpeciesCatalog, utils::sigmoid};

    #[test]
    fn optimum_sits_on_the_upper_shoulder() {
        let curve = OxygenCurve::default();
        for key in BuiltinSpecies::keys() {
            let profile = BuiltinSpecies.lookup(key);
            let factor = curve.factor(profile.optimal_do, profile);
            let expected = sigmoid(profile.optimal_do - profile.min_do);
            assert!((factor - expected).abs() < 1e-12, "{}", key);
            assert!(factor > 0.8, "{}", key);
        }

        // The 2.5 mg/L gap species clear 0.9
        assert!(curve.factor(6.5, BuiltinSpecies.lookup("yellow_croaker")) > 0.9);
        assert!(curve.factor(6.0, BuiltinSpecies.lookup("sea_bass")) > 0.9);
    }

    #[test]
    fn midpoint_is_half() {
        let profile = BuiltinSpecies.lookup("tilapia");
        assert_eq!(OxygenCurve::default().factor(4.0, profile), 0.5);
    }

    #[test]
    fn hypoxia_hits_the_floor() {
        // tilapia: min 3.0, optimum 5.0
        let profile = BuiltinSpecies.lookup("tilapia");
        let curve = OxygenCurve::default();
        assert_eq!(curve.factor(1.0, profile), 0.1);
        assert_eq!(curve.factor(0.0, profile), 0.1);
        assert_eq!(curve.factor(-2.0, profile), 0.1);
    }

    #[test]
    fn hypoxia_scales_the_sigmoid() {
        // Grouper has a narrow minimum-to-optimum gap, so just below the
        // minimum the scaled sigmoid is still above the floor
        let profile = BuiltinSpecies.lookup("grouper");
        let reading = 3.8;
        let expected = sigmoid(2.0 * (reading - 4.75)) * (reading / 4.0);
        assert!(expected > 0.1);
        let factor = OxygenCurve::default().factor(reading, profile);
        assert!((factor - expected).abs() < 1e-12);
    }

    #[test]
    fn supersaturation_is_penalised() {
        let profile = BuiltinSpecies.default_profile();
        let curve = OxygenCurve::default();
        let saturated = curve.factor(9.0, profile);
        let supersaturated = curve.factor(12.0, profile);
        assert!(supersaturated < saturated);
        assert!((supersaturated - 0.95 * sigmoid(14.0)).abs() < 1e-12);
    }

    #[test]
    fn steeper_curve_is_sharper() {
        let profile = BuiltinSpecies.default_profile();
        let soft = OxygenCurve::default().factor(5.5, profile);
        let sharp = OxygenCurve::with_steepness(6.0).factor(5.5, profile);
        assert!(sharp > soft);
    }
}
