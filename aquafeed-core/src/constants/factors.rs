//! Water-Quality Response Curve Parameters
//!
//! Each curve maps a raw reading onto a dimensionless multiplier. The floors
//! keep any single reading from driving feeding to exactly zero; a poor
//! reading shows up as a low tier instead.

// ===== TEMPERATURE =====

/// Divisor turning the tolerated temperature window into the Gaussian sigma.
///
/// sigma = (max - min) / 4, so the window edges sit two sigma from the
/// optimum when the optimum is centred.
pub const TEMPERATURE_SIGMA_DIVISOR: f64 = 4.0;

/// Slope of the linear penalty applied outside the tolerated window.
///
/// penalty = slope × (distance beyond bound / bound)
pub const TEMPERATURE_OVERSHOOT_PENALTY: f64 = 0.5;

/// Lowest temperature factor.
pub const TEMPERATURE_FACTOR_MIN: f64 = 0.1;

/// Highest temperature factor.
pub const TEMPERATURE_FACTOR_MAX: f64 = 1.0;

// ===== DISSOLVED OXYGEN =====

/// Steepness of the dissolved-oxygen logistic curve (per mg/L).
pub const OXYGEN_STEEPNESS: f64 = 2.0;

/// Ratio of the optimum above which water counts as over-saturated.
pub const OXYGEN_SUPERSATURATION_RATIO: f64 = 1.5;

/// Multiplier applied to over-saturated readings.
pub const OXYGEN_SUPERSATURATION_PENALTY: f64 = 0.95;

/// Smallest scale applied below the species minimum (do / min_do floors here).
pub const OXYGEN_HYPOXIA_SCALE_MIN: f64 = 0.1;

/// Lowest dissolved-oxygen factor.
pub const OXYGEN_FACTOR_MIN: f64 = 0.1;

/// Highest dissolved-oxygen factor.
pub const OXYGEN_FACTOR_MAX: f64 = 1.0;

// ===== PH =====

/// Factor lost per pH unit outside the tolerated range.
pub const PH_DEVIATION_SLOPE: f64 = 0.4;

/// Lowest pH factor.
pub const PH_FACTOR_MIN: f64 = 0.2;

/// pH factor inside the tolerated range.
pub const PH_FACTOR_MAX: f64 = 1.0;
