//! Core traits for the calculator
//!
//! Two seams: how a reading becomes a multiplier (`ResponseCurve`) and where
//! species constants come from (`SpeciesCatalog`). Both are statically
//! dispatched; the calculator is generic over the catalog.

use crate::species::SpeciesProfile;

/// Output bounds of a response curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorBounds {
    /// Smallest multiplier the curve returns
    pub floor: f64,

    /// Largest multiplier the curve returns
    pub ceiling: f64,
}

impl FactorBounds {
    /// Clamp a raw curve value into these bounds
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.floor, self.ceiling)
    }

    /// Check whether a value lies within these bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.floor && value <= self.ceiling
    }
}

/// Maps one water-quality reading to a suitability multiplier for a species
pub trait ResponseCurve {
    /// Suitability multiplier for `reading`, always within [`Self::bounds`]
    fn factor(&self, reading: f64, profile: &SpeciesProfile) -> f64;

    /// Output bounds of this curve
    fn bounds(&self) -> FactorBounds;
}

/// Source of species profiles
///
/// Lookup is total: a key the catalog does not know resolves to the default
/// profile.
pub trait SpeciesCatalog {
    /// Profile registered under `key`, if any
    fn profile(&self, key: &str) -> Option<&SpeciesProfile>;

    /// Profile used for unknown keys
    fn default_profile(&self) -> &SpeciesProfile;

    /// Profile for `key`, falling back to the default profile
    fn lookup(&self, key: &str) -> &SpeciesProfile {
        match self.profile(key) {
            Some(profile) => profile,
            None => {
                log_debug!("Unknown species '{}', using default profile", key);
                self.default_profile()
            }
        }
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_clamp_and_contain() {
        let bounds = FactorBounds { floor: 0.1, ceiling: 1.0 };
        assert_eq!(bounds.clamp(0.0), 0.1);
        assert_eq!(bounds.clamp(1.7), 1.0);
        assert_eq!(bounds.clamp(0.5), 0.5);
        assert!(bounds.contains(0.1));
        assert!(!bounds.contains(1.01));
    }

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
    }
}
