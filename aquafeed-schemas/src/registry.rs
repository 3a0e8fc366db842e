//! Schema Registry with Version Tracking
//!
//! Schemas are registered under a qualified name ending in `_v<N>`. The
//! registry keeps every version and resolves the highest one for a base
//! name, so readers can ask for "the current recommendation schema" without
//! hard-coding a version.

use apache_avro::Schema;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::{schemas, SchemaError};

/// Registry entry metadata
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaMetadata {
    /// Base name (e.g., "feeding_request")
    pub name: String,

    /// Version number (the `N` of `_vN`)
    pub version: u32,

    /// Full qualified name (e.g., "feeding_request_v1")
    pub qualified_name: String,
}

impl SchemaMetadata {
    /// Split a qualified name into base name and version
    ///
    /// Names without a `_v<N>` suffix are version 1.
    pub fn from_qualified_name(qualified_name: &str) -> Self {
        let split = qualified_name.rfind("_v").and_then(|pos| {
            qualified_name[pos + 2..]
                .parse::<u32>()
                .ok()
                .map(|version| (&qualified_name[..pos], version))
        });
        let (name, version) = split.unwrap_or((qualified_name, 1));

        Self {
            name: name.to_string(),
            version,
            qualified_name: qualified_name.to_string(),
        }
    }
}

/// Thread-safe schema registry
pub struct SchemaRegistry {
    /// Schemas indexed by qualified name
    schemas: RwLock<HashMap<String, (Schema, SchemaMetadata)>>,

    /// Registered versions per base name, ascending
    versions: RwLock<HashMap<String, Vec<u32>>>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            schemas: RwLock::new(HashMap::new()),
            versions: RwLock::new(HashMap::new()),
        }
    }

    /// Register a schema under its qualified name
    ///
    /// Registering the same qualified name twice is an error.
    pub fn register(&self, qualified_name: &str, schema: Schema) -> Result<(), SchemaError> {
        let metadata = SchemaMetadata::from_qualified_name(qualified_name);

        {
            let mut schemas = self
                .schemas
                .write()
                .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;
            if schemas.contains_key(qualified_name) {
                return Err(SchemaError::ValidationError(format!(
                    "Schema {} already registered",
                    qualified_name
                )));
            }
            schemas.insert(qualified_name.to_string(), (schema, metadata.clone()));
        }

        let mut versions = self
            .versions
            .write()
            .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;
        let list = versions.entry(metadata.name).or_default();
        list.push(metadata.version);
        list.sort_unstable();

        Ok(())
    }

    /// Schema by qualified name
    pub fn get(&self, qualified_name: &str) -> Result<Schema, SchemaError> {
        let schemas = self
            .schemas
            .read()
            .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;

        schemas
            .get(qualified_name)
            .map(|(schema, _)| schema.clone())
            .ok_or_else(|| SchemaError::NotFound(qualified_name.to_string()))
    }

    /// Highest registered version of a base name
    pub fn get_latest(&self, base_name: &str) -> Result<Schema, SchemaError> {
        let version = self
            .get_versions(base_name)?
            .last()
            .copied()
            .ok_or_else(|| SchemaError::NotFound(format!("No versions of {}", base_name)))?;

        self.get(&format!("{}_v{}", base_name, version))
    }

    /// All registered versions of a base name, ascending
    pub fn get_versions(&self, base_name: &str) -> Result<Vec<u32>, SchemaError> {
        let versions = self
            .versions
            .read()
            .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;

        Ok(versions.get(base_name).cloned().unwrap_or_default())
    }

    /// Metadata of a registered schema
    pub fn get_metadata(&self, qualified_name: &str) -> Result<SchemaMetadata, SchemaError> {
        let schemas = self
            .schemas
            .read()
            .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;

        schemas
            .get(qualified_name)
            .map(|(_, metadata)| metadata.clone())
            .ok_or_else(|| SchemaError::NotFound(qualified_name.to_string()))
    }

    /// Register the request, recommendation and species-profile schemas
    pub fn load_defaults(&self) -> Result<(), SchemaError> {
        self.register("feeding_request_v1", schemas::feeding_request_v1()?)?;
        self.register("feeding_recommendation_v1", schemas::feeding_recommendation_v1()?)?;
        self.register("species_profile_v1", schemas::species_profile_v1()?)?;
        Ok(())
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Process-wide registry with the default schemas loaded
    pub static ref GLOBAL_REGISTRY: SchemaRegistry = {
        let registry = SchemaRegistry::new();
        // The default schemas are static JSON; a failure here shows up as
        // NotFound on the first lookup
        let _ = registry.load_defaults();
        registry
    };
}
