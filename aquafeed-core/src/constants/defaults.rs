//! Request Defaults
//!
//! Applied when the caller has no reading for a field, e.g. before the first
//! sensor sample of the day arrives.

/// Species key used when none is given. Also the fallback profile key.
pub const DEFAULT_SPECIES_KEY: &str = "default";

/// Water temperature assumed when none is given (°C).
pub const DEFAULT_TEMPERATURE_C: f64 = 24.0;

/// Dissolved oxygen assumed when none is given (mg/L).
pub const DEFAULT_DISSOLVED_OXYGEN_MG_L: f64 = 6.0;

/// pH assumed when none is given.
pub const DEFAULT_PH: f64 = 7.5;

/// Feeding interval assumed when none is given (days).
pub const DEFAULT_TIME_INTERVAL_DAYS: f64 = 1.0;
