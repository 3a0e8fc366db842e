//! pH response curve
//!
//! pH tolerance is a plateau with linear shoulders, no smoothing:
//!
//! ```text
//! pH in [pH_min, pH_max]:  1.0
//! otherwise:               max(0.2, 1 - 0.4 × distance to the nearer bound)
//! ```

use crate::{
    constants::factors::{PH_DEVIATION_SLOPE, PH_FACTOR_MAX, PH_FACTOR_MIN},
    species::SpeciesProfile,
    traits::{FactorBounds, ResponseCurve},
};

/// Trapezoid pH curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhCurve {
    /// Factor lost per pH unit outside the range
    slope: f64,
}

impl Default for PhCurve {
    fn default() -> Self {
        Self {
            slope: PH_DEVIATION_SLOPE,
        }
    }
}

impl PhCurve {
    /// Curve with a custom shoulder slope
    pub fn with_slope(slope: f64) -> Self {
        Self {
            slope: libm::fabs(slope),
        }
    }
}

impl ResponseCurve for PhCurve {
    fn factor(&self, ph: f64, profile: &SpeciesProfile) -> f64 {
        let range = profile.ph_range;
        let deviation = if ph < range.min {
            range.min - ph
        } else if ph > range.max {
            ph - range.max
        } else {
            return PH_FACTOR_MAX;
        };

        (1.0 - self.slope * deviation).max(PH_FACTOR_MIN)
    }

    fn bounds(&self) -> FactorBounds {
        FactorBounds {
            floor: PH_FACTOR_MIN,
            ceiling: PH_FACTOR_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{species::BuiltinSpecies, traits::SpeciesCatalog};

    #[test]
    fn plateau_includes_bounds() {
        let profile = BuiltinSpecies.lookup("grouper");
        let curve = PhCurve::default();
        assert_eq!(curve.factor(7.5, profile), 1.0);
        assert_eq!(curve.factor(7.8, profile), 1.0);
        assert_eq!(curve.factor(8.2, profile), 1.0);
    }

    #[test]
    fn linear_shoulders() {
        // grouper: 7.5 - 8.2
        let profile = BuiltinSpecies.lookup("grouper");
        let curve = PhCurve::default();
        assert!((curve.factor(9.5, profile) - 0.48).abs() < 1e-9);
        assert!((curve.factor(7.0, profile) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn shoulders_floor_at_point_two() {
        let profile = BuiltinSpecies.lookup("grouper");
        let curve = PhCurve::default();
        assert_eq!(curve.factor(11.0, profile), 0.2);
        assert_eq!(curve.factor(3.0, profile), 0.2);
    }
}
