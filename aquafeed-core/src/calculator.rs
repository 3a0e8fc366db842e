//! Recommendation Composer
//!
//! ## Pipeline
//!
//! ```text
//! request ──► species lookup ──► response curves ──► env factor ─┬─► tier
//!                                 (T, DO, pH, interaction)      │
//!                                                                ├─► estimates ──► blend ──► amount
//!                                                                └─► concerns ──► rationale
//! ```
//!
//! 1. Resolve the species key; unknown keys use the default profile.
//! 2. Score the three readings and the interaction correction, then take
//!    their product.
//! 3. Run the baseline and energy-balance estimators and blend them 60/40.
//! 4. Classify the tier and collect concerns on the *unrounded* factors.
//! 5. Round masses to 2 decimals and factors to 3 for the output.
//!
//! [`FeedingCalculator::recommend`] is infallible and does no input checks;
//! the service layer validates first, or calls
//! [`FeedingCalculator::recommend_checked`].
//!
//! ## Thread Safety
//!
//! A calculator holds only its catalog and configuration and never mutates
//! them. Share it freely (`&FeedingCalculator` is `Send + Sync` whenever the
//! catalog is).

use alloc::string::String;

use crate::{
    constants::{
        recommendation::{FACTOR_DECIMALS, MASS_DECIMALS},
        BASELINE_WEIGHT, ENERGY_WEIGHT,
    },
    environment::EnvironmentReading,
    errors::FeedingResult,
    estimators::Estimates,
    factors::{combine, interaction_factor, OxygenCurve, PhCurve, TemperatureCurve},
    recommendation::{
        render_rationale, FeedingDetails, FeedingRecommendation, RationaleTriggers,
        TierThresholds,
    },
    request::FeedingRequest,
    species::{BuiltinSpecies, SpeciesProfile},
    traits::{ResponseCurve, SpeciesCatalog},
    utils::round_to,
};

/// Composer tunables
///
/// `Default` reproduces the reference behaviour exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    /// Weight of the environment-adjusted baseline
    pub baseline_weight: f64,

    /// Weight of the energy-balance estimate
    pub energy_weight: f64,

    /// Tier lower bounds
    pub tiers: TierThresholds,

    /// Factor levels that put a reading into the rationale
    pub triggers: RationaleTriggers,

    /// Temperature curve parameters
    pub temperature_curve: TemperatureCurve,

    /// Dissolved-oxygen curve parameters
    pub oxygen_curve: OxygenCurve,

    /// pH curve parameters
    pub ph_curve: PhCurve,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            baseline_weight: BASELINE_WEIGHT,
            energy_weight: ENERGY_WEIGHT,
            tiers: TierThresholds::default(),
            triggers: RationaleTriggers::default(),
            temperature_curve: TemperatureCurve::default(),
            oxygen_curve: OxygenCurve::default(),
            ph_curve: PhCurve::default(),
        }
    }
}

/// Unrounded factors for one reading set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentAssessment {
    /// Temperature factor, [0.1, 1.0]
    pub temperature: f64,

    /// Dissolved-oxygen factor, [0.1, 1.0]
    pub oxygen: f64,

    /// pH factor, [0.2, 1.0]
    pub ph: f64,

    /// Interaction correction, [0.8, 1.2]
    pub interaction: f64,

    /// Product of the four, not clamped again
    pub combined: f64,
}

/// Feeding calculator over a species catalog
#[derive(Debug, Clone, Default)]
pub struct FeedingCalculator<C: SpeciesCatalog = BuiltinSpecies> {
    catalog: C,
    config: CalculatorConfig,
}

impl FeedingCalculator<BuiltinSpecies> {
    /// Calculator over the reference profiles with the reference settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: SpeciesCatalog> FeedingCalculator<C> {
    /// Calculator over a custom catalog
    pub fn with_catalog(catalog: C) -> Self {
        Self {
            catalog,
            config: CalculatorConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Species catalog in use
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Configuration in use
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Score a reading set for a species
    pub fn assess(&self, reading: &EnvironmentReading, profile: &SpeciesProfile) -> EnvironmentAssessment {
        let temperature = self.config.temperature_curve.factor(reading.temperature, profile);
        let oxygen = self.config.oxygen_curve.factor(reading.dissolved_oxygen, profile);
        let ph = self.config.ph_curve.factor(reading.ph, profile);
        let interaction = interaction_factor(reading);

        EnvironmentAssessment {
            temperature,
            oxygen,
            ph,
            interaction,
            combined: combine(temperature, oxygen, ph, interaction),
        }
    }

    /// Compute a recommendation
    ///
    /// Assumes a request that passed [`FeedingRequest::validate`]. Never
    /// fails; extreme readings end up as a suspended tier.
    pub fn recommend(&self, request: &FeedingRequest) -> FeedingRecommendation {
        let profile = self.catalog.lookup(&request.species_key);
        let reading = &request.environment;

        let assessment = self.assess(reading, profile);
        let env = assessment.combined;

        let estimates = Estimates::compute(
            request.fish_count,
            request.average_weight,
            profile,
            env,
            request.time_interval_days,
        );
        let amount = estimates.blend(self.config.baseline_weight, self.config.energy_weight);

        let tier = self.config.tiers.classify(env);
        let concerns = self.config.triggers.concerns(&assessment, reading, profile);
        let rationale = render_rationale(&concerns, tier);

        log_debug!(
            "species={} T={:.3} DO={:.3} pH={:.3} I={:.3} env={:.3} tier={} amount={:.2}",
            request.species_key,
            assessment.temperature,
            assessment.oxygen,
            assessment.ph,
            assessment.interaction,
            env,
            tier,
            amount
        );

        FeedingRecommendation {
            amount: round_to(amount, MASS_DECIMALS),
            tier,
            rationale,
            concerns,
            details: FeedingDetails {
                biomass: round_to(estimates.biomass, MASS_DECIMALS),
                base_feeding: round_to(estimates.baseline, MASS_DECIMALS),
                temp_factor: round_to(assessment.temperature, FACTOR_DECIMALS),
                do_factor: round_to(assessment.oxygen, FACTOR_DECIMALS),
                ph_factor: round_to(assessment.ph, FACTOR_DECIMALS),
                env_factor: round_to(env, FACTOR_DECIMALS),
                adjusted_baseline: round_to(estimates.adjusted_baseline, MASS_DECIMALS),
                energy_feeding: round_to(estimates.energy, MASS_DECIMALS),
                species_display_name: String::from(profile.display_name.as_ref()),
            },
        }
    }

    /// Validate the request, then compute a recommendation
    pub fn recommend_checked(&self, request: &FeedingRequest) -> FeedingResult<FeedingRecommendation> {
        request.validate()?;
        Ok(self.recommend(request))
    }
}

/// One-shot recommendation over the reference profiles
pub fn calculate_feeding(request: &FeedingRequest) -> FeedingRecommendation {
    FeedingCalculator::new().recommend(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::FeedingError,
        recommendation::{Concern, FeedingTier},
        species::{SpeciesTable, ToleranceRange},
    };
    use alloc::borrow::Cow;

    fn tilapia(reading: EnvironmentReading) -> FeedingRequest {
        FeedingRequest::new(10_000, 0.5).species("tilapia").environment(reading)
    }

    #[test]
    fn favourable_tilapia() {
        let rec = calculate_feeding(&tilapia(EnvironmentReading::new(28.0, 5.0, 7.5)));

        assert_eq!(rec.amount, 215.76);
        assert_eq!(rec.tier, FeedingTier::Normal);
        assert_eq!(rec.rationale, "conditions favorable");
        assert!(!rec.has_concerns());

        let d = &rec.details;
        assert_eq!(d.biomass, 5000.0);
        assert_eq!(d.base_feeding, 200.0);
        assert_eq!(d.temp_factor, 1.0);
        assert_eq!(d.do_factor, 0.881);
        assert_eq!(d.ph_factor, 1.0);
        assert_eq!(d.env_factor, 0.876);
        assert_eq!(d.adjusted_baseline, 175.1);
        assert_eq!(d.energy_feeding, 276.74);
        assert_eq!(d.species_display_name, "Tilapia");
    }

    #[test]
    fn hypoxic_tilapia_is_suspended() {
        let rec = calculate_feeding(&tilapia(EnvironmentReading::new(28.0, 1.0, 7.5)));

        assert_eq!(rec.tier, FeedingTier::Suspended);
        assert_eq!(rec.details.do_factor, 0.1);
        assert_eq!(rec.details.env_factor, 0.097);
        assert_eq!(rec.amount, 23.9);
        assert_eq!(
            rec.rationale,
            "Dissolved oxygen insufficient (1.0 mg/L), recommended above 5.0 mg/L"
        );
        assert_eq!(
            rec.concerns[..],
            [Concern::OxygenLow { reading: 1.0, recommended: 5.0 }]
        );
    }

    #[test]
    fn assessment_matches_recommendation_details() {
        let calculator = FeedingCalculator::new();
        let reading = EnvironmentReading::new(26.0, 5.5, 9.5);
        let profile = calculator.catalog().lookup("grouper");
        let assessment = calculator.assess(&reading, profile);

        assert_eq!(assessment.temperature, 1.0);
        assert!((assessment.ph - 0.48).abs() < 1e-12);
        assert!((assessment.interaction - 1.00495).abs() < 1e-12);
        assert_eq!(
            assessment.combined,
            assessment.temperature * assessment.oxygen * assessment.ph * assessment.interaction
        );

        let rec = calculator.recommend(&FeedingRequest::new(2000, 1.2).species("grouper").environment(reading));
        assert_eq!(rec.details.ph_factor, 0.48);
        assert_eq!(rec.details.env_factor, 0.394);
    }

    #[test]
    fn reported_values_round_ties_to_even() {
        let rec = calculate_feeding(&FeedingRequest::new(1, 0.125));
        assert_eq!(rec.details.biomass, 0.12);

        let rec = calculate_feeding(&FeedingRequest::new(1, 0.625));
        assert_eq!(rec.details.biomass, 0.62);
    }

    #[test]
    fn checked_rejects_invalid_requests() {
        let calculator = FeedingCalculator::new();
        assert!(matches!(
            calculator.recommend_checked(&FeedingRequest::new(0, 0.5)),
            Err(FeedingError::NonPositive { field: "fishCount", .. })
        ));
        assert!(calculator.recommend_checked(&FeedingRequest::new(10, 0.5)).is_ok());
    }

    #[test]
    fn custom_catalog_profiles_are_used() {
        let mut table = SpeciesTable::builtin();
        table
            .insert(
                "rainbow_trout",
                SpeciesProfile {
                    display_name: Cow::Borrowed("Rainbow trout"),
                    optimal_temp: 15.0,
                    temp_range: ToleranceRange::new(10.0, 20.0),
                    optimal_do: 8.0,
                    min_do: 5.5,
                    ph_range: ToleranceRange::new(6.5, 8.0),
                    base_feeding_rate_percent: 1.8,
                    feed_conversion_ratio: 1.1,
                    energy_requirement_per_kg_per_day: 95.0,
                    feed_energy_content_per_kg: 1700.0,
                },
            )
            .unwrap();

        let calculator = FeedingCalculator::with_catalog(&table);
        let request = FeedingRequest::new(1000, 1.0)
            .species("rainbow_trout")
            .environment(EnvironmentReading::new(15.0, 8.0, 7.0));
        let rec = calculator.recommend(&request);

        assert_eq!(rec.details.species_display_name, "Rainbow trout");
        assert_eq!(rec.details.temp_factor, 1.0);
        assert_eq!(rec.details.base_feeding, 18.0);
    }

    #[test]
    fn config_weights_drive_the_blend() {
        let request = tilapia(EnvironmentReading::new(28.0, 5.0, 7.5));
        let baseline_only = FeedingCalculator::new().with_config(CalculatorConfig {
            baseline_weight: 1.0,
            energy_weight: 0.0,
            ..CalculatorConfig::default()
        });
        let rec = baseline_only.recommend(&request);
        assert_eq!(rec.amount, rec.details.adjusted_baseline);
    }

    #[test]
    fn config_thresholds_drive_the_tier() {
        let request = tilapia(EnvironmentReading::new(28.0, 5.0, 7.5));
        let strict = FeedingCalculator::new().with_config(CalculatorConfig {
            tiers: TierThresholds { normal: 0.9, reduced: 0.6 },
            ..CalculatorConfig::default()
        });
        let rec = strict.recommend(&request);
        assert_eq!(rec.tier, FeedingTier::Reduced);
        assert_eq!(rec.rationale, "conditions marginal, reduce feeding");
    }
}
