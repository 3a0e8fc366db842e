//! Conversion between Python arguments and core types

use aquafeed_core::{fish_count_from, EnvironmentReading, FeedingRecommendation, FeedingRequest};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::errors::BindingResult;

/// Build a request from Python arguments
///
/// Python integers are unbounded, so the fish count arrives as `i64` and is
/// narrowed by [`fish_count_from`] rather than failing with an `OverflowError`.
pub fn build_request(
    fish_count: i64,
    average_weight: f64,
    species_key: &str,
    environment: EnvironmentReading,
    time_interval_days: f64,
) -> BindingResult<FeedingRequest> {
    let count = fish_count_from(fish_count)?;

    let request = FeedingRequest::new(count, average_weight)
        .species(species_key)
        .environment(environment)
        .interval_days(time_interval_days);
    request.validate()?;

    Ok(request)
}

/// Recommendation as a Python dict with snake_case detail keys
pub fn recommendation_to_dict<'py>(
    py: Python<'py>,
    recommendation: &FeedingRecommendation,
) -> PyResult<&'py PyDict> {
    let d = &recommendation.details;
    let details = PyDict::new(py);
    details.set_item("biomass", d.biomass)?;
    details.set_item("base_feeding", d.base_feeding)?;
    details.set_item("temp_factor", d.temp_factor)?;
    details.set_item("do_factor", d.do_factor)?;
    details.set_item("ph_factor", d.ph_factor)?;
    details.set_item("env_factor", d.env_factor)?;
    details.set_item("adjusted_baseline", d.adjusted_baseline)?;
    details.set_item("energy_feeding", d.energy_feeding)?;
    details.set_item("species_display_name", d.species_display_name.as_str())?;

    let concerns: Vec<String> = recommendation
        .concerns
        .iter()
        .map(|concern| concern.to_string())
        .collect();

    let result = PyDict::new(py);
    result.set_item("amount", recommendation.amount)?;
    result.set_item("tier", recommendation.tier.label())?;
    result.set_item("rationale", recommendation.rationale.as_str())?;
    result.set_item("concerns", concerns)?;
    result.set_item("details", details)?;

    Ok(result)
}
