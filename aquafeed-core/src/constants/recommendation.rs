//! Composer Weights and Thresholds

// ===== BLEND =====

/// Weight of the environment-adjusted baseline in the final amount.
pub const BASELINE_WEIGHT: f64 = 0.6;

/// Weight of the energy-balance estimate in the final amount.
pub const ENERGY_WEIGHT: f64 = 0.4;

// ===== TIERS =====
//
// Lower bounds are closed: an environmental factor of exactly 0.85 is
// normal feeding, exactly 0.6 is reduced feeding.

/// Environmental factor at or above which feeding is normal.
pub const NORMAL_FEEDING_THRESHOLD: f64 = 0.85;

/// Environmental factor at or above which feeding is reduced (below: suspended).
pub const REDUCED_FEEDING_THRESHOLD: f64 = 0.6;

// ===== RATIONALE TRIGGERS =====

/// Temperature factor below which the rationale names the water temperature.
pub const TEMPERATURE_CONCERN_THRESHOLD: f64 = 0.7;

/// Dissolved-oxygen factor below which the rationale names the oxygen level.
pub const OXYGEN_CONCERN_THRESHOLD: f64 = 0.7;

/// pH factor below which the rationale names the pH.
pub const PH_CONCERN_THRESHOLD: f64 = 0.8;

/// Separator between rationale sentences.
pub const RATIONALE_SEPARATOR: &str = "; ";

// ===== ROUNDING =====

/// Decimal places kept for feed masses (amount, biomass, sub-estimates).
pub const MASS_DECIMALS: i32 = 2;

/// Decimal places kept for the dimensionless factors in the breakdown.
pub const FACTOR_DECIMALS: i32 = 3;
