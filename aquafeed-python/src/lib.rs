//! AquaFeed Python Bindings
//!
//! The single entry point the Python service layer calls to turn a
//! population and its water readings into a feeding recommendation.
//!
//! ## Usage
//!
//! ```python
//! import aquafeed
//!
//! result = aquafeed.calculate_feeding(
//!     10000, 0.5, species_key="tilapia",
//!     temperature=28.0, dissolved_oxygen=5.0, ph=7.5,
//! )
//! print(result["amount"], result["tier"], result["rationale"])
//!
//! # Farm-specific species, merged over the built-in profiles
//! table = aquafeed.load_species_table(open("species.json").read())
//! result = table.calculate_feeding(2000, 0.3, species_key="rainbow_trout")
//! ```
//!
//! Invalid requests (a fish count or weight of zero, NaN readings) raise
//! `InvalidRequestError`; an invalid species document raises `ProfileError`.

use aquafeed_core::{
    polynomial_features as core_polynomial_features, EnvironmentReading, FeedingCalculator,
    FeedingRequest, SpeciesCatalog, SpeciesTable, POLYNOMIAL_FEATURE_NAMES,
};
use aquafeed_schemas::{load_species_table as load_table, BUILTIN_TABLE};
use pyo3::prelude::*;
use pyo3::types::PyDict;

mod conversion;
mod errors;

use conversion::{build_request, recommendation_to_dict};
use errors::{AquafeedError, BindingError, InvalidRequestError, ProfileError};

/// Species table loaded from a JSON document
#[pyclass(name = "SpeciesTable")]
pub struct PySpeciesTable {
    table: SpeciesTable,
}

#[pymethods]
impl PySpeciesTable {
    /// Species keys, `default` first
    fn keys(&self) -> Vec<String> {
        self.table.keys().map(str::to_string).collect()
    }

    /// Display name of the profile a key resolves to
    fn display_name(&self, species_key: &str) -> String {
        self.table.lookup(species_key).display_name.to_string()
    }

    /// Feeding recommendation using this table's profiles
    #[pyo3(signature = (
        fish_count,
        average_weight,
        species_key = "default",
        temperature = 24.0,
        dissolved_oxygen = 6.0,
        ph = 7.5,
        time_interval_days = 1.0
    ))]
    #[allow(clippy::too_many_arguments)]
    fn calculate_feeding<'py>(
        &self,
        py: Python<'py>,
        fish_count: i64,
        average_weight: f64,
        species_key: &str,
        temperature: f64,
        dissolved_oxygen: f64,
        ph: f64,
        time_interval_days: f64,
    ) -> PyResult<&'py PyDict> {
        let request = build_request(
            fish_count,
            average_weight,
            species_key,
            EnvironmentReading::new(temperature, dissolved_oxygen, ph),
            time_interval_days,
        )?;
        let recommendation = FeedingCalculator::with_catalog(&self.table).recommend(&request);
        recommendation_to_dict(py, &recommendation)
    }

    fn __len__(&self) -> usize {
        self.table.len()
    }

    fn __repr__(&self) -> String {
        format!("SpeciesTable(keys={:?})", self.keys())
    }
}

/// Feeding recommendation over the built-in species profiles
///
/// Returns a dict with `amount` (kg), `tier`, `rationale`, `concerns` and
/// `details`.
#[pyfunction]
#[pyo3(signature = (
    fish_count,
    average_weight,
    species_key = "default",
    temperature = 24.0,
    dissolved_oxygen = 6.0,
    ph = 7.5,
    time_interval_days = 1.0
))]
#[allow(clippy::too_many_arguments)]
fn calculate_feeding<'py>(
    py: Python<'py>,
    fish_count: i64,
    average_weight: f64,
    species_key: &str,
    temperature: f64,
    dissolved_oxygen: f64,
    ph: f64,
    time_interval_days: f64,
) -> PyResult<&'py PyDict> {
    let request = build_request(
        fish_count,
        average_weight,
        species_key,
        EnvironmentReading::new(temperature, dissolved_oxygen, ph),
        time_interval_days,
    )?;
    let recommendation = FeedingCalculator::with_catalog(&*BUILTIN_TABLE).recommend(&request);
    recommendation_to_dict(py, &recommendation)
}

/// Recommendation for a camelCase JSON request, as camelCase JSON
#[pyfunction]
fn recommend_json(request_json: &str) -> PyResult<String> {
    let request: FeedingRequest = serde_json::from_str(request_json)
        .map_err(|e| BindingError::MalformedRequest(e.to_string()))?;
    let recommendation = FeedingCalculator::with_catalog(&*BUILTIN_TABLE)
        .recommend_checked(&request)
        .map_err(BindingError::from)?;

    let json = serde_json::to_string(&recommendation)
        .map_err(|e| BindingError::Serialization(e.to_string()))?;
    Ok(json)
}

/// Keys of the built-in species profiles, `default` first
#[pyfunction]
fn species_keys() -> Vec<String> {
    BUILTIN_TABLE.keys().map(str::to_string).collect()
}

/// Parse a species-table document and merge it over the built-in profiles
#[pyfunction]
fn load_species_table(json: &str) -> PyResult<PySpeciesTable> {
    let table = load_table(json).map_err(BindingError::from)?;
    Ok(PySpeciesTable { table })
}

/// Quadratic feature expansion of a reading set (diagnostic only)
#[pyfunction]
fn polynomial_features(temperature: f64, dissolved_oxygen: f64, ph: f64) -> Vec<f64> {
    core_polynomial_features(&EnvironmentReading::new(temperature, dissolved_oxygen, ph)).to_vec()
}

/// AquaFeed Python module
#[pymodule]
fn aquafeed(py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Exception classes
    m.add("AquafeedError", py.get_type::<AquafeedError>())?;
    m.add("InvalidRequestError", py.get_type::<InvalidRequestError>())?;
    m.add("ProfileError", py.get_type::<ProfileError>())?;

    m.add_class::<PySpeciesTable>()?;

    m.add_function(wrap_pyfunction!(calculate_feeding, m)?)?;
    m.add_function(wrap_pyfunction!(recommend_json, m)?)?;
    m.add_function(wrap_pyfunction!(species_keys, m)?)?;
    m.add_function(wrap_pyfunction!(load_species_table, m)?)?;
    m.add_function(wrap_pyfunction!(polynomial_features, m)?)?;

    m.add("POLYNOMIAL_FEATURE_NAMES", POLYNOMIAL_FEATURE_NAMES.to_vec())?;

    Ok(())
}
