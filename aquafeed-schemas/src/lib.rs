//! Species Tables and Avro Records for the Feeding Calculator
//!
//! ## Overview
//!
//! The calculator in `aquafeed-core` is pure arithmetic with no I/O. This
//! crate holds the two data surfaces that sit around it:
//!
//! - **Species-table documents**: JSON files that extend or override the
//!   built-in species profiles at startup, so a farm can add a species
//!   without a rebuild.
//! - **Avro records**: compact binary encodings of requests and
//!   recommendations for the service layer to persist or ship.
//!
//! ## Species-Table Documents
//!
//! ```json
//! {
//!   "profiles": {
//!     "rainbow_trout": {
//!       "displayName": "Rainbow trout",
//!       "optimalTemp": 15.0,
//!       "tempRange": { "min": 10.0, "max": 20.0 },
//!       "optimalDO": 8.0,
//!       "minDO": 5.5,
//!       "phRange": { "min": 6.5, "max": 8.0 },
//!       "baseFeedingRatePercent": 1.8,
//!       "feedConversionRatio": 1.1,
//!       "energyRequirementPerKgPerDay": 95.0,
//!       "feedEnergyContentPerKg": 1700.0
//!     }
//!   }
//! }
//! ```
//!
//! Loaded profiles are merged over the built-ins and validated one by one. A
//! profile under `default` replaces the fallback used for unknown keys.
//!
//! ## Schema Evolution
//!
//! Record schemas carry their version in the name (`feeding_request_v1`).
//! New fields are appended with defaults, never removed, so a v2 reader can
//! still read v1 data.
//!
//! ## Usage Example
//!
//! ```rust
//! use aquafeed_core::{FeedingCalculator, FeedingRequest};
//! use aquafeed_schemas::{decode_recommendation, encode_recommendation, SchemaRegistry};
//!
//! let registry = SchemaRegistry::new();
//! registry.load_defaults()?;
//! let schema = registry.get("feeding_recommendation_v1")?;
//!
//! let recommendation = FeedingCalculator::new().recommend(&FeedingRequest::new(1000, 0.5));
//! let bytes = encode_recommendation(&schema, &recommendation)?;
//! let decoded = decode_recommendation(&schema, &bytes)?;
//! assert_eq!(decoded.amount, recommendation.amount);
//! # Ok::<(), aquafeed_schemas::SchemaError>(())
//! ```

use aquafeed_core::FeedingError;

pub mod profiles;
pub mod records;
pub mod registry;
pub mod schemas;

pub use profiles::{
    load_species_table, load_species_table_file, save_species_table_file, species_table_to_json,
    SpeciesTableDocument, BUILTIN_TABLE,
};
pub use records::{
    decode_profile, decode_recommendation, decode_request, encode_profile,
    encode_recommendation, encode_request,
};
pub use registry::{SchemaMetadata, SchemaRegistry, GLOBAL_REGISTRY};

/// Schema, document and record errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    /// Malformed schema, JSON document or Avro datum
    #[error("Failed to parse schema: {0}")]
    ParseError(String),

    /// No schema registered under the name
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// Data does not match its schema
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A loaded species profile breaks the profile invariants
    #[error("{0}")]
    Profile(FeedingError),

    /// Reading or writing a document failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<FeedingError> for SchemaError {
    fn from(err: FeedingError) -> Self {
        SchemaError::Profile(err)
    }
}

impl From<std::io::Error> for SchemaError {
    fn from(err: std::io::Error) -> Self {
        SchemaError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::ParseError(err.to_string())
    }
}
