//! Recommendation output types
//!
//! A [`FeedingRecommendation`] is what the calculator hands back: the
//! rounded amount, the tier, a plain-language rationale and the breakdown
//! that produced them. Field names serialize in camelCase, matching the
//! service contract:
//!
//! ```json
//! {
//!   "amount": 215.76,
//!   "tier": "normal feeding",
//!   "rationale": "conditions favorable",
//!   "details": {
//!     "biomass": 5000.0, "baseFeeding": 200.0,
//!     "tempFactor": 1.0, "doFactor": 0.881, "phFactor": 1.0, "envFactor": 0.876,
//!     "adjustedBaseline": 175.1, "energyFeeding": 276.74,
//!     "speciesDisplayName": "Tilapia"
//!   }
//! }
//! ```

mod rationale;
mod tier;

pub use rationale::{render as render_rationale, Concern, Concerns, RationaleTriggers, MAX_CONCERNS};
pub use tier::{FeedingTier, TierThresholds};

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Feed amount, tier and rationale for one request
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeedingRecommendation {
    /// Feed for the whole interval (kg, 2 decimals)
    pub amount: f64,

    /// Feeding tier, classified on the unrounded environmental factor
    pub tier: FeedingTier,

    /// Flagged readings joined with "; ", or the tier's default sentence
    pub rationale: String,

    /// Typed form of the flagged readings (not serialized)
    #[cfg_attr(feature = "serde", serde(skip))]
    pub concerns: Concerns,

    /// Intermediate values
    pub details: FeedingDetails,
}

/// Rounded breakdown of a recommendation
///
/// Masses keep 2 decimals, factors keep 3.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FeedingDetails {
    /// Total fish mass (kg)
    pub biomass: f64,

    /// Feed-table amount before environmental adjustment (kg)
    pub base_feeding: f64,

    /// Temperature factor
    pub temp_factor: f64,

    /// Dissolved-oxygen factor
    pub do_factor: f64,

    /// pH factor
    pub ph_factor: f64,

    /// Combined environmental factor
    pub env_factor: f64,

    /// Baseline scaled by the environmental factor (kg)
    pub adjusted_baseline: f64,

    /// Energy-balance amount (kg)
    pub energy_feeding: f64,

    /// Display name of the profile actually used
    pub species_display_name: String,
}

impl FeedingRecommendation {
    /// Whether any reading was flagged
    pub fn has_concerns(&self) -> bool {
        !self.concerns.is_empty()
    }
}
