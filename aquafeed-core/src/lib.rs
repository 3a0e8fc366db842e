//! Feeding-amount calculator for farmed fish
//!
//! Turns a population (fish count, average weight), a species key and the
//! current water-quality readings into a feed amount, a feeding tier and a
//! plain-language rationale.
//!
//! The calculation is pure arithmetic: no I/O, no shared mutable state, no
//! allocation beyond the rationale string. It runs the same on a pond
//! controller as on the service that stores the result.
//!
//! ```
//! use aquafeed_core::{EnvironmentReading, FeedingCalculator, FeedingRequest, FeedingTier};
//!
//! let calculator = FeedingCalculator::new();
//! let request = FeedingRequest::new(10_000, 0.5)
//!     .species("tilapia")
//!     .environment(EnvironmentReading::new(28.0, 5.0, 7.5));
//!
//! let recommendation = calculator.recommend(&request);
//! assert_eq!(recommendation.tier, FeedingTier::Normal);
//! assert!(recommendation.amount > 0.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod calculator;
pub mod constants;
pub mod environment;
pub mod errors;
pub mod estimators;
pub mod factors;
pub mod recommendation;
pub mod request;
pub mod species;
pub mod traits;

mod utils;

// Public API
pub use calculator::{calculate_feeding, CalculatorConfig, EnvironmentAssessment, FeedingCalculator};
pub use environment::EnvironmentReading;
pub use errors::{FeedingError, FeedingResult};
pub use factors::{
    polynomial_features, OxygenCurve, PhCurve, TemperatureCurve, POLYNOMIAL_FEATURE_NAMES,
};
pub use recommendation::{
    Concern, FeedingDetails, FeedingRecommendation, FeedingTier, RationaleTriggers, TierThresholds,
};
pub use request::{fish_count_from, FeedingRequest};
pub use species::{BuiltinSpecies, SpeciesProfile, SpeciesTable, ToleranceRange};
pub use traits::{ResponseCurve, SpeciesCatalog, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
