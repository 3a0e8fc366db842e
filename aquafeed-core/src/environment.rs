//! Water-quality readings consumed by the calculator
//!
//! Raw sensor values with no required range. Out-of-range readings are not
//! rejected here; the response curves turn them into low factors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DISSOLVED_OXYGEN_MG_L, DEFAULT_PH, DEFAULT_TEMPERATURE_C};

/// One set of water-quality readings
///
/// Missing fields deserialize to the defaults (24.0 °C, 6.0 mg/L, pH 7.5).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct EnvironmentReading {
    /// Water temperature (°C)
    pub temperature: f64,

    /// Dissolved oxygen (mg/L)
    pub dissolved_oxygen: f64,

    /// pH
    pub ph: f64,
}

impl EnvironmentReading {
    /// Create a reading set
    pub const fn new(temperature: f64, dissolved_oxygen: f64, ph: f64) -> Self {
        Self {
            temperature,
            dissolved_oxygen,
            ph,
        }
    }

    /// Replace the temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Replace the dissolved oxygen
    pub fn with_dissolved_oxygen(mut self, dissolved_oxygen: f64) -> Self {
        self.dissolved_oxygen = dissolved_oxygen;
        self
    }

    /// Replace the pH
    pub fn with_ph(mut self, ph: f64) -> Self {
        self.ph = ph;
        self
    }
}

impl Default for EnvironmentReading {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE_C, DEFAULT_DISSOLVED_OXYGEN_MG_L, DEFAULT_PH)
    }
}
