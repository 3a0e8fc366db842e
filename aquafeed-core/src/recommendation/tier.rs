//! Feeding tier classification

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::recommendation::{NORMAL_FEEDING_THRESHOLD, REDUCED_FEEDING_THRESHOLD};

/// Discrete feeding recommendation derived from the environmental factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeedingTier {
    /// Water conditions support the full amount
    #[cfg_attr(feature = "serde", serde(rename = "normal feeding"))]
    Normal,

    /// Marginal conditions, feed less than the table amount
    #[cfg_attr(feature = "serde", serde(rename = "reduced feeding"))]
    Reduced,

    /// Poor conditions, hold feeding until the water recovers
    #[cfg_attr(feature = "serde", serde(rename = "feeding suspended"))]
    Suspended,
}

impl FeedingTier {
    /// Classify with the reference thresholds (0.85 and 0.6)
    pub fn from_env_factor(environmental_factor: f64) -> Self {
        TierThresholds::default().classify(environmental_factor)
    }

    /// Label reported to callers
    pub fn label(&self) -> &'static str {
        match self {
            FeedingTier::Normal => "normal feeding",
            FeedingTier::Reduced => "reduced feeding",
            FeedingTier::Suspended => "feeding suspended",
        }
    }

    /// Rationale used when no individual reading is flagged
    pub fn default_rationale(&self) -> &'static str {
        match self {
            FeedingTier::Normal => "conditions favorable",
            FeedingTier::Reduced => "conditions marginal, reduce feeding",
            FeedingTier::Suspended => "conditions poor, suspend feeding and inspect water quality",
        }
    }
}

impl fmt::Display for FeedingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds of the normal and reduced tiers
///
/// Both bounds are closed. A factor that is NaN fails both comparisons and
/// lands in [`FeedingTier::Suspended`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    /// Factor at or above which feeding is normal
    pub normal: f64,

    /// Factor at or above which feeding is reduced
    pub reduced: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            normal: NORMAL_FEEDING_THRESHOLD,
            reduced: REDUCED_FEEDING_THRESHOLD,
        }
    }
}

impl TierThresholds {
    /// Tier for an unrounded environmental factor
    pub fn classify(&self, environmental_factor: f64) -> FeedingTier {
        if environmental_factor >= self.normal {
            FeedingTier::Normal
        } else if environmental_factor >= self.reduced {
            FeedingTier::Reduced
        } else {
            FeedingTier::Suspended
        }
    }
}
