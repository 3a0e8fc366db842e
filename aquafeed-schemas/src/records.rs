//! Avro encoding of requests, recommendations and species profiles
//!
//! Records are built as `apache_avro::types::Value` directly rather than
//! through serde, so the tier is written as an Avro enum symbol and the
//! field order is exactly the schema order.
//!
//! The typed concern list of a recommendation is not part of the record; a
//! decoded recommendation has an empty list and keeps only the rendered
//! rationale.

use std::borrow::Cow;

use apache_avro::{from_avro_datum, to_avro_datum, types::Value, Schema};
use aquafeed_core::{
    recommendation::Concerns, EnvironmentReading, FeedingDetails, FeedingRecommendation,
    FeedingRequest, FeedingTier, SpeciesProfile, ToleranceRange,
};

use crate::{schemas::TIER_SYMBOLS, SchemaError};

/// Encode a request as a `feeding_request_v1` datum
pub fn encode_request(schema: &Schema, request: &FeedingRequest) -> Result<Vec<u8>, SchemaError> {
    let record = Value::Record(vec![
        ("fishCount".to_string(), Value::Long(i64::from(request.fish_count))),
        ("averageWeight".to_string(), Value::Double(request.average_weight)),
        ("speciesKey".to_string(), Value::String(request.species_key.clone())),
        ("temperature".to_string(), Value::Double(request.environment.temperature)),
        ("dissolvedOxygen".to_string(), Value::Double(request.environment.dissolved_oxygen)),
        ("ph".to_string(), Value::Double(request.environment.ph)),
        ("timeIntervalDays".to_string(), Value::Double(request.time_interval_days)),
    ]);

    encode(schema, record)
}

/// Decode a `feeding_request_v1` datum
pub fn decode_request(schema: &Schema, bytes: &[u8]) -> Result<FeedingRequest, SchemaError> {
    let fields = decode_record(schema, bytes)?;

    let fish_count = long(&fields, "fishCount")?;
    let fish_count = u32::try_from(fish_count).map_err(|_| {
        SchemaError::ValidationError(format!("fishCount {} out of range", fish_count))
    })?;

    Ok(FeedingRequest {
        fish_count,
        average_weight: double(&fields, "averageWeight")?,
        species_key: string(&fields, "speciesKey")?,
        environment: EnvironmentReading::new(
            double(&fields, "temperature")?,
            double(&fields, "dissolvedOxygen")?,
            double(&fields, "ph")?,
        ),
        time_interval_days: double(&fields, "timeIntervalDays")?,
    })
}

/// Encode a recommendation as a `feeding_recommendation_v1` datum
pub fn encode_recommendation(
    schema: &Schema,
    recommendation: &FeedingRecommendation,
) -> Result<Vec<u8>, SchemaError> {
    let d = &recommendation.details;
    let details = Value::Record(vec![
        ("biomass".to_string(), Value::Double(d.biomass)),
        ("baseFeeding".to_string(), Value::Double(d.base_feeding)),
        ("tempFactor".to_string(), Value::Double(d.temp_factor)),
        ("doFactor".to_string(), Value::Double(d.do_factor)),
        ("phFactor".to_string(), Value::Double(d.ph_factor)),
        ("envFactor".to_string(), Value::Double(d.env_factor)),
        ("adjustedBaseline".to_string(), Value::Double(d.adjusted_baseline)),
        ("energyFeeding".to_string(), Value::Double(d.energy_feeding)),
        ("speciesDisplayName".to_string(), Value::String(d.species_display_name.clone())),
    ]);

    let index = tier_index(recommendation.tier);
    let record = Value::Record(vec![
        ("amount".to_string(), Value::Double(recommendation.amount)),
        (
            "tier".to_string(),
            Value::Enum(index as u32, TIER_SYMBOLS[index].to_string()),
        ),
        ("rationale".to_string(), Value::String(recommendation.rationale.clone())),
        ("details".to_string(), details),
    ]);

    encode(schema, record)
}

/// Decode a `feeding_recommendation_v1` datum
pub fn decode_recommendation(
    schema: &Schema,
    bytes: &[u8],
) -> Result<FeedingRecommendation, SchemaError> {
    let fields = decode_record(schema, bytes)?;

    let tier = match field(&fields, "tier")? {
        Value::Enum(_, symbol) => tier_from_symbol(symbol)?,
        other => return Err(type_mismatch("tier", other)),
    };

    let details = match field(&fields, "details")? {
        Value::Record(details) => details,
        other => return Err(type_mismatch("details", other)),
    };

    Ok(FeedingRecommendation {
        amount: double(&fields, "amount")?,
        tier,
        rationale: string(&fields, "rationale")?,
        concerns: Concerns::new(),
        details: FeedingDetails {
            biomass: double(details, "biomass")?,
            base_feeding: double(details, "baseFeeding")?,
            temp_factor: double(details, "tempFactor")?,
            do_factor: double(details, "doFactor")?,
            ph_factor: double(details, "phFactor")?,
            env_factor: double(details, "envFactor")?,
            adjusted_baseline: double(details, "adjustedBaseline")?,
            energy_feeding: double(details, "energyFeeding")?,
            species_display_name: string(details, "speciesDisplayName")?,
        },
    })
}

/// Encode a keyed profile as a `species_profile_v1` datum
pub fn encode_profile(
    schema: &Schema,
    key: &str,
    profile: &SpeciesProfile,
) -> Result<Vec<u8>, SchemaError> {
    let range = |r: ToleranceRange| {
        Value::Record(vec![
            ("min".to_string(), Value::Double(r.min)),
            ("max".to_string(), Value::Double(r.max)),
        ])
    };

    let record = Value::Record(vec![
        ("key".to_string(), Value::String(key.to_string())),
        ("displayName".to_string(), Value::String(profile.display_name.to_string())),
        ("optimalTemp".to_string(), Value::Double(profile.optimal_temp)),
        ("tempRange".to_string(), range(profile.temp_range)),
        ("optimalDO".to_string(), Value::Double(profile.optimal_do)),
        ("minDO".to_string(), Value::Double(profile.min_do)),
        ("phRange".to_string(), range(profile.ph_range)),
        ("baseFeedingRatePercent".to_string(), Value::Double(profile.base_feeding_rate_percent)),
        ("feedConversionRatio".to_string(), Value::Double(profile.feed_conversion_ratio)),
        (
            "energyRequirementPerKgPerDay".to_string(),
            Value::Double(profile.energy_requirement_per_kg_per_day),
        ),
        (
            "feedEnergyContentPerKg".to_string(),
            Value::Double(profile.feed_energy_content_per_kg),
        ),
    ]);

    encode(schema, record)
}

/// Decode a `species_profile_v1` datum into its key and validated profile
pub fn decode_profile(
    schema: &Schema,
    bytes: &[u8],
) -> Result<(String, SpeciesProfile), SchemaError> {
    let fields = decode_record(schema, bytes)?;

    let profile = SpeciesProfile {
        display_name: Cow::Owned(string(&fields, "displayName")?),
        optimal_temp: double(&fields, "optimalTemp")?,
        temp_range: range(&fields, "tempRange")?,
        optimal_do: double(&fields, "optimalDO")?,
        min_do: double(&fields, "minDO")?,
        ph_range: range(&fields, "phRange")?,
        base_feeding_rate_percent: double(&fields, "baseFeedingRatePercent")?,
        feed_conversion_ratio: double(&fields, "feedConversionRatio")?,
        energy_requirement_per_kg_per_day: double(&fields, "energyRequirementPerKgPerDay")?,
        feed_energy_content_per_kg: double(&fields, "feedEnergyContentPerKg")?,
    };
    profile.validate()?;

    Ok((string(&fields, "key")?, profile))
}

fn encode(schema: &Schema, record: Value) -> Result<Vec<u8>, SchemaError> {
    to_avro_datum(schema, record).map_err(|e| SchemaError::ValidationError(e.to_string()))
}

fn decode_record(schema: &Schema, bytes: &[u8]) -> Result<Vec<(String, Value)>, SchemaError> {
    let mut reader = bytes;
    match from_avro_datum(schema, &mut reader, None) {
        Ok(Value::Record(fields)) => Ok(fields),
        Ok(other) => Err(type_mismatch("record", &other)),
        Err(e) => Err(SchemaError::ParseError(e.to_string())),
    }
}

fn tier_index(tier: FeedingTier) -> usize {
    match tier {
        FeedingTier::Normal => 0,
        FeedingTier::Reduced => 1,
        FeedingTier::Suspended => 2,
    }
}

fn tier_from_symbol(symbol: &str) -> Result<FeedingTier, SchemaError> {
    match TIER_SYMBOLS.iter().position(|s| *s == symbol) {
        Some(0) => Ok(FeedingTier::Normal),
        Some(1) => Ok(FeedingTier::Reduced),
        Some(2) => Ok(FeedingTier::Suspended),
        _ => Err(SchemaError::ValidationError(format!("Unknown tier symbol {}", symbol))),
    }
}

fn field<'a>(fields: &'a [(String, Value)], name: &str) -> Result<&'a Value, SchemaError> {
    fields
        .iter()
        .find(|(candidate, _)| candidate == name)
        .map(|(_, value)| value)
        .ok_or_else(|| SchemaError::ValidationError(format!("Missing field {}", name)))
}

fn double(fields: &[(String, Value)], name: &str) -> Result<f64, SchemaError> {
    match field(fields, name)? {
        Value::Double(value) => Ok(*value),
        other => Err(type_mismatch(name, other)),
    }
}

fn long(fields: &[(String, Value)], name: &str) -> Result<i64, SchemaError> {
    match field(fields, name)? {
        Value::Long(value) => Ok(*value),
        other => Err(type_mismatch(name, other)),
    }
}

fn string(fields: &[(String, Value)], name: &str) -> Result<String, SchemaError> {
    match field(fields, name)? {
        Value::String(value) => Ok(value.clone()),
        other => Err(type_mismatch(name, other)),
    }
}

fn range(fields: &[(String, Value)], name: &str) -> Result<ToleranceRange, SchemaError> {
    match field(fields, name)? {
        Value::Record(bounds) => Ok(ToleranceRange::new(
            double(bounds, "min")?,
            double(bounds, "max")?,
        )),
        other => Err(type_mismatch(name, other)),
    }
}

fn type_mismatch(name: &str, value: &Value) -> SchemaError {
    SchemaError::ValidationError(format!("Unexpected type for {}: {:?}", name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas;
    use aquafeed_core::{BuiltinSpecies, FeedingCalculator, SpeciesCatalog};

    fn hypoxic_request() -> FeedingRequest {
        FeedingRequest::new(10_000, 0.5)
            .species("tilapia")
            .environment(EnvironmentReading::new(28.0, 1.0, 7.5))
    }

    #[test]
    fn request_survives_encoding() {
        let schema = schemas::feeding_request_v1().unwrap();
        let request = hypoxic_request().interval_days(3.0);

        let bytes = encode_request(&schema, &request).unwrap();
        assert_eq!(decode_request(&schema, &bytes).unwrap(), request);
    }

    #[test]
    fn recommendation_keeps_everything_but_concerns() {
        let schema = schemas::feeding_recommendation_v1().unwrap();
        let recommendation = FeedingCalculator::new().recommend(&hypoxic_request());
        assert!(recommendation.has_concerns());

        let bytes = encode_recommendation(&schema, &recommendation).unwrap();
        let decoded = decode_recommendation(&schema, &bytes).unwrap();

        assert_eq!(decoded.amount, recommendation.amount);
        assert_eq!(decoded.tier, FeedingTier::Suspended);
        assert_eq!(decoded.rationale, recommendation.rationale);
        assert_eq!(decoded.details, recommendation.details);
        assert!(decoded.concerns.is_empty());
    }

    #[test]
    fn every_tier_has_a_symbol() {
        for tier in [FeedingTier::Normal, FeedingTier::Reduced, FeedingTier::Suspended] {
            let symbol = TIER_SYMBOLS[tier_index(tier)];
            assert_eq!(tier_from_symbol(symbol).unwrap(), tier);
        }
        assert!(tier_from_symbol("STARVE").is_err());
    }

    #[test]
    fn profile_survives_encoding() {
        let schema = schemas::species_profile_v1().unwrap();
        let grouper = BuiltinSpecies.lookup("grouper");

        let bytes = encode_profile(&schema, "grouper", grouper).unwrap();
        let (key, decoded) = decode_profile(&schema, &bytes).unwrap();
        assert_eq!(key, "grouper");
        assert_eq!(&decoded, grouper);
    }

    #[test]
    fn wrong_schema_is_rejected() {
        let request_schema = schemas::feeding_request_v1().unwrap();
        let recommendation = FeedingCalculator::new().recommend(&hypoxic_request());
        assert!(encode_recommendation(&request_schema, &recommendation).is_err());
    }

    #[test]
    fn truncated_datum_is_a_parse_error() {
        let schema = schemas::feeding_request_v1().unwrap();
        let bytes = encode_request(&schema, &hypoxic_request()).unwrap();
        assert!(matches!(
            decode_request(&schema, &bytes[..bytes.len() / 2]),
            Err(SchemaError::ParseError(_))
        ));
    }
}
