//! Cross-factor interaction correction
//!
//! The three curves treat each reading on its own, but water-quality effects
//! compound: low oxygen is worse when the water is also warm. The correction
//! normalizes each raw reading around a fixed reference point and sums the
//! scaled pairwise products:
//!
//! ```text
//! t  = (T  - 20)  / 10
//! o  = (DO - 6)   / 2
//! p  = (pH - 7.5) / 0.5
//!
//! interaction = clamp(1 + 0.015·t·o + 0.008·t·p + 0.012·o·p, 0.8, 1.2)
//! ```
//!
//! The reference points are species-independent, and the correction depends
//! on the readings only, never on the three factor values.
//!
//! ## Polynomial features
//!
//! [`polynomial_features`] expands a reading set into the ten-term quadratic
//! basis `[1, T, DO, pH, T², DO², pH², T·DO, T·pH, DO·pH]`. It is a
//! diagnostic hook for fitting coefficients offline and does not feed the
//! amount, the tier or the rationale.

use crate::{
    constants::interaction::{
        FEATURE_TEMPERATURE_REFERENCE_C, FEATURE_TEMPERATURE_SCALE_C, INTERACTION_MAX,
        INTERACTION_MIN, OXYGEN_PH_COEFFICIENT, OXYGEN_REFERENCE_MG_L, OXYGEN_SCALE_MG_L,
        PH_REFERENCE, PH_SCALE, TEMPERATURE_OXYGEN_COEFFICIENT, TEMPERATURE_PH_COEFFICIENT,
        TEMPERATURE_REFERENCE_C, TEMPERATURE_SCALE_C,
    },
    environment::EnvironmentReading,
};

/// Names of the entries of [`polynomial_features`], in order
pub const POLYNOMIAL_FEATURE_NAMES: [&str; 10] = [
    "intercept",
    "temperature",
    "dissolved_oxygen",
    "ph",
    "temperature_sq",
    "dissolved_oxygen_sq",
    "ph_sq",
    "temperature_x_dissolved_oxygen",
    "temperature_x_ph",
    "dissolved_oxygen_x_ph",
];

/// Second-order correction multiplier in [0.8, 1.2]
pub fn interaction_factor(reading: &EnvironmentReading) -> f64 {
    let t = (reading.temperature - TEMPERATURE_REFERENCE_C) / TEMPERATURE_SCALE_C;
    let o = (reading.dissolved_oxygen - OXYGEN_REFERENCE_MG_L) / OXYGEN_SCALE_MG_L;
    let p = (reading.ph - PH_REFERENCE) / PH_SCALE;

    let correction = TEMPERATURE_OXYGEN_COEFFICIENT * t * o
        + TEMPERATURE_PH_COEFFICIENT * t * p
        + OXYGEN_PH_COEFFICIENT * o * p;

    (1.0 + correction).clamp(INTERACTION_MIN, INTERACTION_MAX)
}

/// Quadratic feature expansion of a reading set (diagnostic only)
pub fn polynomial_features(reading: &EnvironmentReading) -> [f64; 10] {
    let t = (reading.temperature - FEATURE_TEMPERATURE_REFERENCE_C) / FEATURE_TEMPERATURE_SCALE_C;
    let o = (reading.dissolved_oxygen - OXYGEN_REFERENCE_MG_L) / OXYGEN_SCALE_MG_L;
    let p = (reading.ph - PH_REFERENCE) / PH_SCALE;

    [1.0, t, o, p, t * t, o * o, p * p, t * o, t * p, o * p]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_at_reference_point() {
        let reading = EnvironmentReading::new(20.0, 6.0, 7.5);
        assert_eq!(interaction_factor(&reading), 1.0);
    }

    #[test]
    fn warm_hypoxic_water_is_penalised() {
        // t = 0.8, o = -2.5, p = 0  →  1 + 0.015 × 0.8 × -2.5 = 0.97
        let reading = EnvironmentReading::new(28.0, 1.0, 7.5);
        assert!((interaction_factor(&reading) - 0.97).abs() < 1e-12);
    }

    #[test]
    fn correction_is_clamped() {
        let high = EnvironmentReading::new(60.0, 20.0, 10.0);
        assert_eq!(interaction_factor(&high), 1.2);

        let low = EnvironmentReading::new(60.0, 0.0, 14.0);
        assert_eq!(interaction_factor(&low), 0.8);
    }

    #[test]
    fn feature_vector_layout() {
        let features = polynomial_features(&EnvironmentReading::new(30.0, 8.0, 8.0));
        // t = 1, o = 1, p = 1
        assert_eq!(features, [1.0; 10]);

        let centred = polynomial_features(&EnvironmentReading::new(24.0, 6.0, 7.5));
        assert_eq!(centred[0], 1.0);
        assert!(centred[1..].iter().all(|f| *f == 0.0));

        assert_eq!(POLYNOMIAL_FEATURE_NAMES.len(), features.len());
    }
}
