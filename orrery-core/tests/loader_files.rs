//! File-backed loading: extension dispatch, checksums, error paths.

use std::io::Write;

use orrery_core::{presets, Error, SystemDef, SystemLoader, SystemSourceFormat};

const SOLAR_TOML: &str = r#"
[[bodies]]
name = "Sun"
mass = 1.98847e30
radius = 6.957e8

[[bodies]]
name = "Earth"
mass = 5.9722e24
radius = 6.371e6
sma = 1.496e11
eccentricity = 0.0167
soi = 9.24e8
parent = "Sun"
"#;

const SOLAR_JSON: &str = r#"{
    "bodies": [
        {"name": "Sun", "mass": 1.98847e30, "radius": 6.957e8},
        {"name": "Earth", "mass": 5.9722e24, "radius": 6.371e6,
         "sma": 1.496e11, "parent": "Sun"}
    ]
}"#;

fn write_definition(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("system")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_toml_file() {
    let file = write_definition(".toml", SOLAR_TOML);
    let result = SystemLoader::load_from_file(file.path()).unwrap();

    assert_eq!(result.format, SystemSourceFormat::Toml);
    assert_eq!(result.num_bodies, 2);
    assert!(result.catalog.get("Earth").unwrap().orbital_period().is_ok());
}

#[test]
fn loads_json_file() {
    let file = write_definition(".json", SOLAR_JSON);
    let result = SystemLoader::load_from_file(file.path()).unwrap();

    assert_eq!(result.format, SystemSourceFormat::Json);
    assert_eq!(result.num_bodies, 2);
}

#[test]
fn file_checksum_matches_string_checksum() {
    let file = write_definition(".toml", SOLAR_TOML);
    let from_file = SystemLoader::load_from_file(file.path()).unwrap();
    let from_str = SystemLoader::load_from_toml_str(SOLAR_TOML).unwrap();

    assert_eq!(from_file.checksum, from_str.checksum);
    assert_eq!(from_file.checksum.len(), 64);
}

#[test]
fn checksum_detects_edits() {
    let original = SystemLoader::load_from_toml_str(SOLAR_TOML).unwrap();
    let edited = SystemLoader::load_from_toml_str(&SOLAR_TOML.replace("0.0167", "0.0168")).unwrap();
    assert_ne!(original.checksum, edited.checksum);
}

#[test]
fn unsupported_extension_is_rejected_before_reading() {
    let file = write_definition(".yaml", SOLAR_TOML);
    let err = SystemLoader::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}

#[test]
fn extensionless_path_is_rejected() {
    let err = SystemLoader::load_from_file("definitions/system").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_reports_io_error() {
    let err = SystemLoader::load_from_file("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn parse_errors_carry_the_format() {
    let file = write_definition(".json", "not json at all");
    let err = SystemLoader::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn catalog_serializes_and_reloads() {
    let system = presets::solar_system();
    let def = SystemDef {
        bodies: system.to_records(),
    };
    let text = toml::to_string(&def).unwrap();

    let reloaded = SystemLoader::load_from_toml_str(&text).unwrap();
    assert_eq!(reloaded.catalog.to_records(), system.to_records());

    // Identical text, identical checksum.
    let again = SystemLoader::load_from_toml_str(&text).unwrap();
    assert_eq!(again.checksum, reloaded.checksum);
}

#[test]
fn catalog_serializes_and_reloads_as_json() {
    let system = presets::solar_system();
    let def = SystemDef {
        bodies: system.to_records(),
    };
    let text = serde_json::to_string(&def).unwrap();

    let reloaded = SystemLoader::load_from_json_str(&text).unwrap();
    assert_eq!(reloaded.catalog.to_records(), system.to_records());

    // Large-exponent literals must come back as the exact nearest double.
    let sun = reloaded.catalog.get("Sun").unwrap();
    assert_eq!(sun.mass().value().to_bits(), presets::SUN_MASS.to_bits());
}

#[test]
fn assembly_errors_surface_through_file_loading() {
    let cyclic = r#"
[[bodies]]
name = "Alpha"
mass = 1.0e24
radius = 1.0e6
sma = 1.0e9
parent = "Beta"

[[bodies]]
name = "Beta"
mass = 1.0e24
radius = 1.0e6
sma = 1.0e9
parent = "Alpha"
"#;
    let file = write_definition(".toml", cyclic);
    let err = SystemLoader::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::ParentCycle { .. }));
}
