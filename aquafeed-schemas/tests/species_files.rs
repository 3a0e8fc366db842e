//! Species-table files on disk

use std::fs;

use aquafeed_core::{EnvironmentReading, FeedingCalculator, FeedingRequest, SpeciesCatalog};
use aquafeed_schemas::{
    load_species_table, load_species_table_file, save_species_table_file, SchemaError,
    BUILTIN_TABLE,
};

const OVERRIDES: &str = r#"{
    "profiles": {
        "default": {
            "displayName": "House fish",
            "optimalTemp": 20.0,
            "tempRange": { "min": 14.0, "max": 26.0 },
            "optimalDO": 7.0,
            "minDO": 4.5,
            "phRange": { "min": 7.0, "max": 8.0 },
            "baseFeedingRatePercent": 2.0,
            "feedConversionRatio": 1.4,
            "energyRequirementPerKgPerDay": 100.0,
            "feedEnergyContentPerKg": 1500.0
        }
    }
}"#;

#[test]
fn save_then_load_preserves_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("species.json");

    let table = load_species_table(OVERRIDES).unwrap();
    save_species_table_file(&table, &path).unwrap();

    let reloaded = load_species_table_file(&path).unwrap();
    assert_eq!(reloaded, table);
    assert_eq!(reloaded.default_profile().display_name, "House fish");
}

#[test]
fn replaced_default_drives_unknown_species() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overrides.json");
    fs::write(&path, OVERRIDES).unwrap();

    let table = load_species_table_file(&path).unwrap();
    let calculator = FeedingCalculator::with_catalog(&table);
    let rec = calculator.recommend(
        &FeedingRequest::new(100, 1.0)
            .species("unicorn-fish")
            .environment(EnvironmentReading::new(20.0, 7.0, 7.5)),
    );

    assert_eq!(rec.details.species_display_name, "House fish");
    assert_eq!(rec.details.temp_factor, 1.0);
    assert_eq!(rec.details.base_feeding, 2.0);

    // Named built-ins are untouched
    assert_eq!(table.lookup("tilapia"), BUILTIN_TABLE.lookup("tilapia"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_species_table_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(SchemaError::Io(_))));
}
