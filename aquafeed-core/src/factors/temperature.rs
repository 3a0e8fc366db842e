//! Temperature response curve
//!
//! Feeding peaks at the species optimum and falls off as a Gaussian:
//!
//! ```text
//! sigma = (T_max - T_min) / 4
//! f(T)  = exp(-(T - T_opt)² / (2 sigma²))
//! ```
//!
//! Outside the tolerated window the Gaussian alone decays too slowly, so a
//! linear penalty proportional to the fractional overshoot is subtracted:
//!
//! ```text
//! T < T_min:  penalty = 0.5 × (T_min - T) / T_min
//! T > T_max:  penalty = 0.5 × (T - T_max) / T_max
//! ```
//!
//! The result is clamped to [0.1, 1.0].

use crate::{
    constants::factors::{
        TEMPERATURE_FACTOR_MAX, TEMPERATURE_FACTOR_MIN, TEMPERATURE_OVERSHOOT_PENALTY,
        TEMPERATURE_SIGMA_DIVISOR,
    },
    species::SpeciesProfile,
    traits::{FactorBounds, ResponseCurve},
};

/// Gaussian temperature curve with overshoot penalty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureCurve {
    /// Tolerated window width divided by this gives sigma
    sigma_divisor: f64,

    /// Slope of the penalty outside the tolerated window
    overshoot_penalty: f64,
}

impl Default for TemperatureCurve {
    fn default() -> Self {
        Self {
            sigma_divisor: TEMPERATURE_SIGMA_DIVISOR,
            overshoot_penalty: TEMPERATURE_OVERSHOOT_PENALTY,
        }
    }
}

impl TemperatureCurve {
    /// Curve with custom shape parameters
    pub fn new(sigma_divisor: f64, overshoot_penalty: f64) -> Self {
        Self {
            sigma_divisor: libm::fabs(sigma_divisor),
            overshoot_penalty: libm::fabs(overshoot_penalty),
        }
    }

    /// Linear penalty for readings outside the tolerated window
    fn overshoot(&self, temperature: f64, profile: &SpeciesProfile) -> f64 {
        let range = profile.temp_range;
        if temperature < range.min {
            self.overshoot_penalty * ((range.min - temperature) / range.min)
        } else if temperature > range.max {
            self.overshoot_penalty * ((temperature - range.max) / range.max)
        } else {
            0.0
        }
    }
}

impl ResponseCurve for TemperatureCurve {
    fn factor(&self, temperature: f64, profile: &SpeciesProfile) -> f64 {
        let sigma = profile.temp_range.width() / self.sigma_divisor;
        let deviation = temperature - profile.optimal_temp;
        let gaussian = libm::exp(-(deviation * deviation) / (2.0 * sigma * sigma));

        self.bounds().clamp(gaussian - self.overshoot(temperature, profile))
    }

    fn bounds(&self) -> FactorBounds {
        FactorBounds {
            floor: TEMPERATURE_FACTOR_MIN,
            ceiling: TEMPERATURE_FACTOR_MAX,
        }
    }
}
