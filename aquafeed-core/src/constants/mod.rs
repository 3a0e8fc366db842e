//! Constants for the Feeding Calculator
//!
//! Every coefficient of the response curves, the interaction correction and
//! the composer lives here, with its unit, so none of them appear as magic
//! numbers in the calculation code.
//!
//! ## Organization
//!
//! - **Factors**: shape parameters and output bounds of the three
//!   water-quality response curves
//! - **Interaction**: reference points and coefficients of the second-order
//!   correction
//! - **Recommendation**: blend weights, tier thresholds and rationale triggers
//! - **Defaults**: request defaults applied when the caller omits a field

/// Response curve parameters for temperature, dissolved oxygen and pH.
pub mod factors;

/// Second-order interaction correction parameters.
pub mod interaction;

/// Composer weights and classification thresholds.
pub mod recommendation;

/// Request defaults.
pub mod defaults;

pub use defaults::{
    DEFAULT_DISSOLVED_OXYGEN_MG_L, DEFAULT_PH, DEFAULT_SPECIES_KEY, DEFAULT_TEMPERATURE_C,
    DEFAULT_TIME_INTERVAL_DAYS,
};

pub use recommendation::{
    BASELINE_WEIGHT, ENERGY_WEIGHT, NORMAL_FEEDING_THRESHOLD, REDUCED_FEEDING_THRESHOLD,
};
