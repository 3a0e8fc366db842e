//! Avro record schemas
//!
//! Field names follow the JSON service contract (camelCase). Units are in
//! the field docs.

use apache_avro::Schema;
use serde_json::json;

use crate::SchemaError;

/// Namespace shared by all records
pub const NAMESPACE: &str = "io.aquafeed.v1";

/// Avro symbols of the feeding tier, in `FeedingTier` declaration order
pub const TIER_SYMBOLS: [&str; 3] = ["NORMAL_FEEDING", "REDUCED_FEEDING", "FEEDING_SUSPENDED"];

/// Feeding request schema v1
pub fn feeding_request_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": NAMESPACE,
        "type": "record",
        "name": "FeedingRequest",
        "doc": "Population, species and water-quality readings for one calculation",
        "fields": [
            { "name": "fishCount", "type": "long", "doc": "Number of fish" },
            { "name": "averageWeight", "type": "double", "doc": "Mean body weight (kg)" },
            { "name": "speciesKey", "type": "string", "default": "default" },
            { "name": "temperature", "type": "double", "default": 24.0, "doc": "Water temperature (celsius)" },
            { "name": "dissolvedOxygen", "type": "double", "default": 6.0, "doc": "Dissolved oxygen (mg/L)" },
            { "name": "ph", "type": "double", "default": 7.5 },
            { "name": "timeIntervalDays", "type": "double", "default": 1.0, "doc": "Feeding period (days)" }
        ]
    });

    Schema::parse(&schema_json).map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Feeding recommendation schema v1
pub fn feeding_recommendation_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": NAMESPACE,
        "type": "record",
        "name": "FeedingRecommendation",
        "doc": "Feed amount, tier and rationale with the rounded breakdown",
        "fields": [
            { "name": "amount", "type": "double", "doc": "Feed for the whole interval (kg)" },
            {
                "name": "tier",
                "type": {
                    "type": "enum",
                    "name": "FeedingTier",
                    "symbols": TIER_SYMBOLS
                }
            },
            { "name": "rationale", "type": "string" },
            {
                "name": "details",
                "type": {
                    "type": "record",
                    "name": "FeedingDetails",
                    "fields": [
                        { "name": "biomass", "type": "double", "doc": "kg" },
                        { "name": "baseFeeding", "type": "double", "doc": "kg" },
                        { "name": "tempFactor", "type": "double" },
                        { "name": "doFactor", "type": "double" },
                        { "name": "phFactor", "type": "double" },
                        { "name": "envFactor", "type": "double" },
                        { "name": "adjustedBaseline", "type": "double", "doc": "kg" },
                        { "name": "energyFeeding", "type": "double", "doc": "kg" },
                        { "name": "speciesDisplayName", "type": "string" }
                    ]
                }
            }
        ]
    });

    Schema::parse(&schema_json).map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Species profile schema v1
pub fn species_profile_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": NAMESPACE,
        "type": "record",
        "name": "SpeciesProfile",
        "doc": "Biological constants of one farmed species",
        "fields": [
            { "name": "key", "type": "string" },
            { "name": "displayName", "type": "string" },
            { "name": "optimalTemp", "type": "double", "doc": "celsius" },
            {
                "name": "tempRange",
                "type": {
                    "type": "record",
                    "name": "ToleranceRange",
                    "fields": [
                        { "name": "min", "type": "double" },
                        { "name": "max", "type": "double" }
                    ]
                }
            },
            { "name": "optimalDO", "type": "double", "doc": "mg/L" },
            { "name": "minDO", "type": "double", "doc": "mg/L" },
            { "name": "phRange", "type": "ToleranceRange" },
            { "name": "baseFeedingRatePercent", "type": "double", "doc": "% body weight per day" },
            { "name": "feedConversionRatio", "type": "double" },
            { "name": "energyRequirementPerKgPerDay", "type": "double", "doc": "kJ" },
            { "name": "feedEnergyContentPerKg", "type": "double", "doc": "kJ/kg" }
        ]
    });

    Schema::parse(&schema_json).map_err(|e| SchemaError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_parse() {
        assert!(feeding_request_v1().is_ok());
        assert!(feeding_recommendation_v1().is_ok());
        assert!(species_profile_v1().is_ok());
    }

    #[test]
    fn record_names() {
        let schema = feeding_recommendation_v1().unwrap();
        let name = schema.name().unwrap();
        assert_eq!(name.name, "FeedingRecommendation");
        assert_eq!(name.namespace.as_deref(), Some(NAMESPACE));
    }
}
