//! Feed-Amount Estimators
//!
//! Two independent estimates of how much feed a population needs, both
//! scaled by the environmental factor:
//!
//! ```text
//! biomass            = fish count × average weight                       (kg)
//! baseline           = biomass × rate% / 100 × days                      (kg)
//! adjusted baseline  = baseline × env
//! energy balance     = biomass × E_req × days × env / (FCR × E_feed)      (kg)
//! ```
//!
//! The baseline follows the feeding tables farms already use. The energy
//! balance works from the metabolic need of the fish and the energy density
//! of the feed. Neither is trusted alone: the composer blends them 60/40.

use crate::species::SpeciesProfile;

/// Total fish mass in kg
pub fn biomass(fish_count: u32, average_weight: f64) -> f64 {
    fish_count as f64 * average_weight
}

/// Feed-table amount for `days` under ideal conditions (kg)
pub fn baseline_feeding(biomass: f64, profile: &SpeciesProfile, days: f64) -> f64 {
    biomass * (profile.base_feeding_rate_percent / 100.0) * days
}

/// Feed needed to cover the metabolic energy demand for `days` (kg)
pub fn energy_balance_feeding(
    biomass: f64,
    profile: &SpeciesProfile,
    environmental_factor: f64,
    days: f64,
) -> f64 {
    (biomass * profile.energy_requirement_per_kg_per_day * days * environmental_factor)
        / (profile.feed_conversion_ratio * profile.feed_energy_content_per_kg)
}

/// Unrounded estimates for one population and reading set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimates {
    /// Total fish mass (kg)
    pub biomass: f64,

    /// Feed-table amount before environmental adjustment (kg)
    pub baseline: f64,

    /// Baseline scaled by the environmental factor (kg)
    pub adjusted_baseline: f64,

    /// Energy-balance amount (kg)
    pub energy: f64,
}

impl Estimates {
    /// Run both estimators
    pub fn compute(
        fish_count: u32,
        average_weight: f64,
        profile: &SpeciesProfile,
        environmental_factor: f64,
        days: f64,
    ) -> Self {
        let biomass = biomass(fish_count, average_weight);
        let baseline = baseline_feeding(biomass, profile, days);

        Self {
            biomass,
            baseline,
            adjusted_baseline: baseline * environmental_factor,
            energy: energy_balance_feeding(biomass, profile, environmental_factor, days),
        }
    }

    /// Weighted blend of the adjusted baseline and the energy balance
    pub fn blend(&self, baseline_weight: f64, energy_weight: f64) -> f64 {
        baseline_weight * self.adjusted_baseline + energy_weight * self.energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{species::BuiltinSpecies, traits::SpeciesCatalog};

    #[test]
    fn biomass_is_count_times_weight() {
        assert_eq!(biomass(10_000, 0.5), 5000.0);
        assert_eq!(biomass(1, 0.25), 0.25);
    }

    #[test]
    fn baseline_uses_rate_and_interval() {
        let tilapia = BuiltinSpecies.lookup("tilapia");
        // 5000 kg × 4% = 200 kg/day
        assert_eq!(baseline_feeding(5000.0, tilapia, 1.0), 200.0);
        assert_eq!(baseline_feeding(5000.0, tilapia, 2.0), 400.0);
    }

    #[test]
    fn energy_balance_reference_value() {
        let tilapia = BuiltinSpecies.lookup("tilapia");
        // 5000 × 110 / (1.2 × 1450) = 316.09 at env 1.0
        let energy = energy_balance_feeding(5000.0, tilapia, 1.0, 1.0);
        assert!((energy - 316.091954).abs() < 1e-5);

        let scaled = energy_balance_feeding(5000.0, tilapia, 0.5, 1.0);
        assert!((scaled - energy / 2.0).abs() < 1e-9);
    }

    #[test]
    fn blend_weights_both_estimates() {
        let profile = BuiltinSpecies.default_profile();
        let estimates = Estimates::compute(10_000, 0.5, profile, 1.0, 1.0);
        assert_eq!(estimates.baseline, 125.0);
        assert_eq!(estimates.adjusted_baseline, 125.0);
        // 5000 × 100 / (1.5 × 1500) = 222.22
        let expected = 0.6 * 125.0 + 0.4 * estimates.energy;
        assert_eq!(estimates.blend(0.6, 0.4), expected);
        assert_eq!(estimates.blend(1.0, 0.0), 125.0);
    }
}
