//! Species-table documents
//!
//! JSON documents of the form `{"profiles": {key: profile}}`, merged over
//! the built-in profiles. Every loaded profile is validated before it is
//! accepted; the first invalid one aborts the load.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use aquafeed_core::{SpeciesProfile, SpeciesTable};
use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// On-disk form of a species table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesTableDocument {
    /// Profiles keyed by species identifier
    pub profiles: BTreeMap<String, SpeciesProfile>,
}

impl SpeciesTableDocument {
    /// Snapshot every entry of a table, fallback included
    pub fn from_table(table: &SpeciesTable) -> Self {
        Self {
            profiles: table
                .iter()
                .map(|(key, profile)| (key.to_string(), profile.clone()))
                .collect(),
        }
    }

    /// Merge the document over the built-in profiles
    pub fn into_table(self) -> Result<SpeciesTable, SchemaError> {
        self.merge_into(SpeciesTable::builtin())
    }

    /// Merge the document over an existing table
    pub fn merge_into(self, mut table: SpeciesTable) -> Result<SpeciesTable, SchemaError> {
        for (key, profile) in self.profiles {
            table.insert(key, profile)?;
        }
        Ok(table)
    }
}

/// Parse a document and merge it over the built-in profiles
pub fn load_species_table(json: &str) -> Result<SpeciesTable, SchemaError> {
    let document: SpeciesTableDocument = serde_json::from_str(json)?;
    document.into_table()
}

/// Read a document from disk and merge it over the built-in profiles
pub fn load_species_table_file(path: impl AsRef<Path>) -> Result<SpeciesTable, SchemaError> {
    let json = fs::read_to_string(path)?;
    load_species_table(&json)
}

/// Serialize every entry of a table as a pretty-printed document
pub fn species_table_to_json(table: &SpeciesTable) -> Result<String, SchemaError> {
    Ok(serde_json::to_string_pretty(&SpeciesTableDocument::from_table(table))?)
}

/// Write a table to disk as a document
pub fn save_species_table_file(
    table: &SpeciesTable,
    path: impl AsRef<Path>,
) -> Result<(), SchemaError> {
    fs::write(path, species_table_to_json(table)?)?;
    Ok(())
}

lazy_static::lazy_static! {
    /// The built-in profiles as a shared table, built on first use
    pub static ref BUILTIN_TABLE: SpeciesTable = SpeciesTable::builtin();
}
