//! Feeding requests
//!
//! The flat input object of the service contract. Only `fishCount` and
//! `averageWeight` are required; everything else has a default:
//!
//! | Field | Default |
//! |---|---|
//! | `speciesKey` | `"default"` |
//! | `temperature` | 24.0 °C |
//! | `dissolvedOxygen` | 6.0 mg/L |
//! | `ph` | 7.5 |
//! | `timeIntervalDays` | 1.0 |

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEFAULT_SPECIES_KEY, DEFAULT_TIME_INTERVAL_DAYS},
    environment::EnvironmentReading,
    errors::{FeedingError, FeedingResult},
    traits::Validatable,
};

/// Population, species and readings for one calculation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FeedingRequest {
    /// Number of fish in the unit
    pub fish_count: u32,

    /// Mean body weight (kg)
    pub average_weight: f64,

    /// Species identifier, unknown keys use the default profile
    #[cfg_attr(feature = "serde", serde(default = "default_species_key"))]
    pub species_key: String,

    /// Current water-quality readings
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub environment: EnvironmentReading,

    /// Length of the feeding period (days)
    #[cfg_attr(feature = "serde", serde(default = "default_time_interval_days"))]
    pub time_interval_days: f64,
}

#[cfg(feature = "serde")]
fn default_species_key() -> String {
    String::from(DEFAULT_SPECIES_KEY)
}

#[cfg(feature = "serde")]
fn default_time_interval_days() -> f64 {
    DEFAULT_TIME_INTERVAL_DAYS
}

impl FeedingRequest {
    /// Request with the default species, readings and a one-day interval
    pub fn new(fish_count: u32, average_weight: f64) -> Self {
        Self {
            fish_count,
            average_weight,
            species_key: String::from(DEFAULT_SPECIES_KEY),
            environment: EnvironmentReading::default(),
            time_interval_days: DEFAULT_TIME_INTERVAL_DAYS,
        }
    }

    /// Set the species key
    pub fn species(mut self, key: impl Into<String>) -> Self {
        self.species_key = key.into();
        self
    }

    /// Set the water-quality readings
    pub fn environment(mut self, environment: EnvironmentReading) -> Self {
        self.environment = environment;
        self
    }

    /// Set the feeding period
    pub fn interval_days(mut self, days: f64) -> Self {
        self.time_interval_days = days;
        self
    }

    /// Check the request before it reaches the calculator
    ///
    /// Rejects a zero fish count, a non-positive weight or interval, and any
    /// non-finite number. Readings may be arbitrarily far out of range, only
    /// NaN and infinities are refused.
    pub fn validate(&self) -> FeedingResult<()> {
        if self.fish_count == 0 {
            return Err(FeedingError::NonPositive {
                field: "fishCount",
                value: 0.0,
            });
        }

        check_positive("averageWeight", self.average_weight)?;
        check_positive("timeIntervalDays", self.time_interval_days)?;

        check_finite("temperature", self.environment.temperature)?;
        check_finite("dissolvedOxygen", self.environment.dissolved_oxygen)?;
        check_finite("ph", self.environment.ph)?;

        Ok(())
    }
}

/// Fish count from a wider signed integer
///
/// Callers holding unbounded integers (JSON numbers, Python ints) narrow
/// through here before building a [`FeedingRequest`].
pub fn fish_count_from(count: i64) -> FeedingResult<u32> {
    if count <= 0 {
        return Err(FeedingError::NonPositive {
            field: "fishCount",
            value: count as f64,
        });
    }
    u32::try_from(count).map_err(|_| FeedingError::TooLarge {
        field: "fishCount",
        value: count,
        max: u32::MAX as u64,
    })
}

fn check_finite(field: &'static str, value: f64) -> FeedingResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(FeedingError::NotFinite { field })
    }
}

fn check_positive(field: &'static str, value: f64) -> FeedingResult<()> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(FeedingError::NonPositive { field, value })
    }
}
