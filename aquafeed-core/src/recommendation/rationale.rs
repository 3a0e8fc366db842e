//! Rationale assembly
//!
//! Each factor that drops below its trigger becomes a [`Concern`] naming the
//! reading and the value it is compared against. Concerns are rendered in a
//! fixed order (temperature, oxygen, pH) and joined with `"; "`. When none
//! fires, the tier's default sentence stands alone.
//!
//! Readings are printed with Rust's `{:?}` float formatting, which always
//! keeps a decimal point (`28.0`, not `28`).

use alloc::string::String;
use core::fmt::{self, Write};

use heapless::Vec;

use crate::{
    calculator::EnvironmentAssessment,
    constants::recommendation::{
        OXYGEN_CONCERN_THRESHOLD, PH_CONCERN_THRESHOLD, RATIONALE_SEPARATOR,
        TEMPERATURE_CONCERN_THRESHOLD,
    },
    environment::EnvironmentReading,
    species::SpeciesProfile,
};

use super::tier::FeedingTier;

/// At most one concern per reading
pub const MAX_CONCERNS: usize = 3;

/// Triggered concerns, in rendering order
pub type Concerns = Vec<Concern, MAX_CONCERNS>;

/// A reading flagged as limiting the feed amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Concern {
    /// Water colder than the species optimum
    TemperatureLow {
        /// Measured temperature (°C)
        reading: f64,
        /// Species optimum (°C)
        optimal: f64,
    },

    /// Water at or above the species optimum
    TemperatureHigh {
        /// Measured temperature (°C)
        reading: f64,
        /// Species optimum (°C)
        optimal: f64,
    },

    /// Dissolved oxygen too low for full appetite
    OxygenLow {
        /// Measured dissolved oxygen (mg/L)
        reading: f64,
        /// Species optimum (mg/L)
        recommended: f64,
    },

    /// pH outside the tolerated range, either side
    PhOutOfRange {
        /// Measured pH
        reading: f64,
        /// Lower bound of the range
        min: f64,
        /// Upper bound of the range
        max: f64,
    },
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Concern::TemperatureLow { reading, optimal } => write!(
                f,
                "Water temperature low ({:?}°C), below optimal {:?}°C",
                reading, optimal
            ),
            Concern::TemperatureHigh { reading, optimal } => write!(
                f,
                "Water temperature high ({:?}°C), above optimal {:?}°C",
                reading, optimal
            ),
            Concern::OxygenLow { reading, recommended } => write!(
                f,
                "Dissolved oxygen insufficient ({:?} mg/L), recommended above {:?} mg/L",
                reading, recommended
            ),
            Concern::PhOutOfRange { reading, min, max } => {
                write!(f, "pH ({:?}) outside optimal range {:?}-{:?}", reading, min, max)
            }
        }
    }
}

/// Factor levels below which a reading is named in the rationale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationaleTriggers {
    /// Temperature factor trigger
    pub temperature: f64,

    /// Dissolved-oxygen factor trigger
    pub oxygen: f64,

    /// pH factor trigger
    pub ph: f64,
}

impl Default for RationaleTriggers {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE_CONCERN_THRESHOLD,
            oxygen: OXYGEN_CONCERN_THRESHOLD,
            ph: PH_CONCERN_THRESHOLD,
        }
    }
}

impl RationaleTriggers {
    /// Concerns raised by an assessed reading set
    ///
    /// Uses the unrounded factors, so a factor of 0.6996 triggers even
    /// though the breakdown reports it as 0.7.
    pub fn concerns(
        &self,
        assessment: &EnvironmentAssessment,
        reading: &EnvironmentReading,
        profile: &SpeciesProfile,
    ) -> Concerns {
        let mut concerns = Concerns::new();

        // Capacity equals the number of checks, pushes cannot fail
        if assessment.temperature < self.temperature {
            let concern = if reading.temperature < profile.optimal_temp {
                Concern::TemperatureLow {
                    reading: reading.temperature,
                    optimal: profile.optimal_temp,
                }
            } else {
                Concern::TemperatureHigh {
                    reading: reading.temperature,
                    optimal: profile.optimal_temp,
                }
            };
            let _ = concerns.push(concern);
        }

        if assessment.oxygen < self.oxygen {
            let _ = concerns.push(Concern::OxygenLow {
                reading: reading.dissolved_oxygen,
                recommended: profile.optimal_do,
            });
        }

        if assessment.ph < self.ph {
            let _ = concerns.push(Concern::PhOutOfRange {
                reading: reading.ph,
                min: profile.ph_range.min,
                max: profile.ph_range.max,
            });
        }

        concerns
    }
}

/// Render the rationale sentence for a set of concerns
pub fn render(concerns: &[Concern], tier: FeedingTier) -> String {
    if concerns.is_empty() {
        return String::from(tier.default_rationale());
    }

    let mut rationale = String::new();
    for (i, concern) in concerns.iter().enumerate() {
        if i > 0 {
            rationale.push_str(RATIONALE_SEPARATOR);
        }
        // Writing into a String never fails
        let _ = write!(rationale, "{}", concern);
    }
    rationale
}
