//! End-to-end assembly: records to catalogs to orbital quantities.

use approx::assert_relative_eq;
use orrery_core::{presets, BodyRecord, Catalog, Error};
use qtty::Day;

fn record(name: &str, mass: f64, radius: f64, sma: Option<f64>, parent: Option<&str>) -> BodyRecord {
    BodyRecord {
        name: name.to_owned(),
        mass,
        radius,
        sma,
        eccentricity: None,
        soi: None,
        parent: parent.map(str::to_owned),
    }
}

#[test]
fn earth_year_through_the_whole_pipeline() {
    let records = vec![
        record("Sun", 1.98847e30, 6.957e8, None, None),
        record("Earth", 5.9722e24, 6.371e6, Some(1.496e11), Some("Sun")),
    ];
    let catalog = Catalog::from_records(records).unwrap();

    let year = catalog.get("Earth").unwrap().orbital_period().unwrap();
    assert_relative_eq!(year.value(), 3.1558e7, max_relative = 1e-4);
    assert_relative_eq!(year.to::<Day>().value(), 365.25, max_relative = 1e-3);
}

#[test]
fn preset_moon_month_is_about_27_days() {
    let system = presets::solar_system();
    let month = system.get("Moon").unwrap().orbital_period().unwrap();
    assert_relative_eq!(month.to::<Day>().value(), 27.45, max_relative = 1e-3);
}

#[test]
fn preset_catalog_survives_record_round_trip() {
    let system = presets::solar_system();
    let rebuilt = Catalog::from_records(system.to_records()).unwrap();

    assert_eq!(rebuilt.len(), system.len());
    for (a, b) in rebuilt.iter().zip(system.iter()) {
        assert_eq!(a, b);
    }
    assert_eq!(rebuilt.to_records(), system.to_records());
}

#[test]
fn scrambled_records_assemble_identically() {
    let mut records = presets::solar_system().to_records();
    records.reverse();
    let catalog = Catalog::from_records(records).unwrap();

    assert_eq!(catalog.len(), 10);
    let moon = catalog.get("Moon").unwrap();
    let chain: Vec<&str> = moon.ancestors().map(|b| b.name()).collect();
    assert_eq!(chain, ["Earth", "Sun"]);
}

#[test]
fn deep_chains_resolve() {
    // Star -> planet -> moon -> station, written leaf-first.
    let records = vec![
        record("Station", 4.2e5, 5.5e1, Some(4.0e5), Some("Moon")),
        record("Moon", 7.342e22, 1.7374e6, Some(3.844e8), Some("Planet")),
        record("Planet", 5.9722e24, 6.371e6, Some(1.496e11), Some("Star")),
        record("Star", 1.98847e30, 6.957e8, None, None),
    ];
    let catalog = Catalog::from_records(records).unwrap();

    let station = catalog.get("Station").unwrap();
    assert_eq!(station.ancestors().count(), 3);
    assert!(station.orbital_period().is_ok());
}

#[test]
fn mixed_failure_reports_the_unknown_parent() {
    // Halley's parent is missing entirely; Giotto depends on Halley. The
    // classifier must blame the truly unknown name, not report a cycle.
    let records = vec![
        record("Sun", 1.98847e30, 6.957e8, None, None),
        record("Halley", 2.2e14, 5.5e3, Some(2.667e12), Some("Sol")),
        record("Giotto", 1.0e3, 2.0, Some(1.0e7), Some("Halley")),
    ];
    let err = Catalog::from_records(records).unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownParent { child, parent } if child == "Halley" && parent == "Sol"
    ));
}

#[test]
fn root_without_orbit_has_no_period() {
    let system = presets::solar_system();
    let sun = system.get("Sun").unwrap();
    let err = sun.orbital_period().unwrap_err();
    assert!(err.to_string().contains("Sun"));
}
