//! Interaction Correction Parameters
//!
//! Readings are normalized as `(reading - reference) / scale` before the
//! pairwise products are taken. The reference points are fixed and do not
//! depend on the species.

/// Temperature reference point (°C).
pub const TEMPERATURE_REFERENCE_C: f64 = 20.0;

/// Temperature normalization scale (°C).
pub const TEMPERATURE_SCALE_C: f64 = 10.0;

/// Dissolved-oxygen reference point (mg/L).
pub const OXYGEN_REFERENCE_MG_L: f64 = 6.0;

/// Dissolved-oxygen normalization scale (mg/L).
pub const OXYGEN_SCALE_MG_L: f64 = 2.0;

/// pH reference point.
pub const PH_REFERENCE: f64 = 7.5;

/// pH normalization scale.
pub const PH_SCALE: f64 = 0.5;

/// Coefficient of the temperature × dissolved-oxygen product.
pub const TEMPERATURE_OXYGEN_COEFFICIENT: f64 = 0.015;

/// Coefficient of the temperature × pH product.
pub const TEMPERATURE_PH_COEFFICIENT: f64 = 0.008;

/// Coefficient of the dissolved-oxygen × pH product.
pub const OXYGEN_PH_COEFFICIENT: f64 = 0.012;

/// Lowest interaction multiplier.
pub const INTERACTION_MIN: f64 = 0.8;

/// Highest interaction multiplier.
pub const INTERACTION_MAX: f64 = 1.2;

// ===== POLYNOMIAL FEATURES =====
//
// The diagnostic feature vector centres temperature on a different point than
// the interaction term does.

/// Temperature reference point for the polynomial features (°C).
pub const FEATURE_TEMPERATURE_REFERENCE_C: f64 = 24.0;

/// Temperature scale for the polynomial features (°C).
pub const FEATURE_TEMPERATURE_SCALE_C: f64 = 6.0;
