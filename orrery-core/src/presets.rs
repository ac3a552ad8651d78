//! Nominal solar-system parameters and a ready-made catalog.
//!
//! Masses are in kilograms, every length in metres. The values are the
//! conventional nominal ones (IAU nominal radii, NASA fact-sheet masses and
//! mean orbital distances); they are reference data for examples and tests,
//! not an ephemeris.

use std::sync::Arc;

use qtty::{Kilograms, Meters};

use crate::body::Body;
use crate::catalog::Catalog;

// ─────────────────────────────────────────────────────────────────────────────
// Sun
// ─────────────────────────────────────────────────────────────────────────────

/// Solar mass.
pub const SUN_MASS: f64 = 1.988_47e30;
/// Nominal solar radius.
pub const SUN_RADIUS: f64 = 6.957e8;

// ─────────────────────────────────────────────────────────────────────────────
// Mercury
// ─────────────────────────────────────────────────────────────────────────────

/// Mercury mass.
pub const MERCURY_MASS: f64 = 3.3011e23;
/// Mercury mean radius.
pub const MERCURY_RADIUS: f64 = 2.4397e6;
/// Mercury semi-major axis.
pub const MERCURY_SMA: f64 = 5.7909e10;
/// Mercury orbital eccentricity.
pub const MERCURY_ECCENTRICITY: f64 = 0.2056;
/// Mercury sphere-of-influence radius.
pub const MERCURY_SOI: f64 = 1.12e8;

// ─────────────────────────────────────────────────────────────────────────────
// Venus
// ─────────────────────────────────────────────────────────────────────────────

/// Venus mass.
pub const VENUS_MASS: f64 = 4.8675e24;
/// Venus mean radius.
pub const VENUS_RADIUS: f64 = 6.0518e6;
/// Venus semi-major axis.
pub const VENUS_SMA: f64 = 1.0821e11;
/// Venus orbital eccentricity.
pub const VENUS_ECCENTRICITY: f64 = 0.0068;
/// Venus sphere-of-influence radius.
pub const VENUS_SOI: f64 = 6.16e8;

// ─────────────────────────────────────────────────────────────────────────────
// Earth and the Moon
// ─────────────────────────────────────────────────────────────────────────────

/// Earth mass.
pub const EARTH_MASS: f64 = 5.9722e24;
/// Earth mean radius.
pub const EARTH_RADIUS: f64 = 6.371e6;
/// Earth semi-major axis.
pub const EARTH_SMA: f64 = 1.496e11;
/// Earth orbital eccentricity.
pub const EARTH_ECCENTRICITY: f64 = 0.0167;
/// Earth sphere-of-influence radius.
pub const EARTH_SOI: f64 = 9.24e8;

/// Moon mass.
pub const MOON_MASS: f64 = 7.342e22;
/// Moon mean radius.
pub const MOON_RADIUS: f64 = 1.7374e6;
/// Moon semi-major axis (around Earth).
pub const MOON_SMA: f64 = 3.844e8;
/// Moon orbital eccentricity.
pub const MOON_ECCENTRICITY: f64 = 0.0549;
/// Moon sphere-of-influence radius.
pub const MOON_SOI: f64 = 6.61e7;

// ─────────────────────────────────────────────────────────────────────────────
// Mars
// ─────────────────────────────────────────────────────────────────────────────

/// Mars mass.
pub const MARS_MASS: f64 = 6.4171e23;
/// Mars mean radius.
pub const MARS_RADIUS: f64 = 3.3895e6;
/// Mars semi-major axis.
pub const MARS_SMA: f64 = 2.2794e11;
/// Mars orbital eccentricity.
pub const MARS_ECCENTRICITY: f64 = 0.0934;
/// Mars sphere-of-influence radius.
pub const MARS_SOI: f64 = 5.76e8;

// ─────────────────────────────────────────────────────────────────────────────
// Jupiter
// ─────────────────────────────────────────────────────────────────────────────

/// Jupiter mass.
pub const JUPITER_MASS: f64 = 1.8982e27;
/// Jupiter mean radius.
pub const JUPITER_RADIUS: f64 = 6.9911e7;
/// Jupiter semi-major axis.
pub const JUPITER_SMA: f64 = 7.7857e11;
/// Jupiter orbital eccentricity.
pub const JUPITER_ECCENTRICITY: f64 = 0.0489;
/// Jupiter sphere-of-influence radius.
pub const JUPITER_SOI: f64 = 4.82e10;

// ─────────────────────────────────────────────────────────────────────────────
// Saturn
// ─────────────────────────────────────────────────────────────────────────────

/// Saturn mass.
pub const SATURN_MASS: f64 = 5.6834e26;
/// Saturn mean radius.
pub const SATURN_RADIUS: f64 = 5.8232e7;
/// Saturn semi-major axis.
pub const SATURN_SMA: f64 = 1.4335e12;
/// Saturn orbital eccentricity.
pub const SATURN_ECCENTRICITY: f64 = 0.0565;
/// Saturn sphere-of-influence radius.
pub const SATURN_SOI: f64 = 5.48e10;

// ─────────────────────────────────────────────────────────────────────────────
// Uranus
// ─────────────────────────────────────────────────────────────────────────────

/// Uranus mass.
pub const URANUS_MASS: f64 = 8.681e25;
/// Uranus mean radius.
pub const URANUS_RADIUS: f64 = 2.5362e7;
/// Uranus semi-major axis.
pub const URANUS_SMA: f64 = 2.8725e12;
/// Uranus orbital eccentricity.
pub const URANUS_ECCENTRICITY: f64 = 0.0457;
/// Uranus sphere-of-influence radius.
pub const URANUS_SOI: f64 = 5.18e10;

// ─────────────────────────────────────────────────────────────────────────────
// Neptune
// ─────────────────────────────────────────────────────────────────────────────

/// Neptune mass.
pub const NEPTUNE_MASS: f64 = 1.02413e26;
/// Neptune mean radius.
pub const NEPTUNE_RADIUS: f64 = 2.4622e7;
/// Neptune semi-major axis.
pub const NEPTUNE_SMA: f64 = 4.4951e12;
/// Neptune orbital eccentricity.
pub const NEPTUNE_ECCENTRICITY: f64 = 0.0113;
/// Neptune sphere-of-influence radius.
pub const NEPTUNE_SOI: f64 = 8.66e10;

/// Builds the Sun, the eight planets and the Moon as one catalog.
///
/// Planets are parented to the Sun, the Moon to Earth. Iteration order is
/// Sun first, then the planets outward, the Moon right after Earth.
///
/// # Examples
///
/// ```rust
/// use orrery_core::presets;
/// use qtty::Day;
///
/// let system = presets::solar_system();
/// let earth = system.get("Earth").unwrap();
///
/// let year = earth.orbital_period()?;
/// assert!((year.to::<Day>().value() - 365.25).abs() < 0.1);
/// # Ok::<(), orrery_core::Error>(())
/// ```
pub fn solar_system() -> Catalog {
    let mut catalog = Catalog::new();

    // Names are unique and parents are inserted before their satellites, so
    // the checked insert cannot fail here.
    let sun = catalog.insert_unchecked(Body::new(
        "Sun",
        Kilograms::new(SUN_MASS),
        Meters::new(SUN_RADIUS),
    ));

    catalog.insert_unchecked(orbiter(
        "Mercury",
        MERCURY_MASS,
        MERCURY_RADIUS,
        MERCURY_SMA,
        MERCURY_ECCENTRICITY,
        MERCURY_SOI,
        &sun,
    ));
    catalog.insert_unchecked(orbiter(
        "Venus",
        VENUS_MASS,
        VENUS_RADIUS,
        VENUS_SMA,
        VENUS_ECCENTRICITY,
        VENUS_SOI,
        &sun,
    ));
    let earth = catalog.insert_unchecked(orbiter(
        "Earth",
        EARTH_MASS,
        EARTH_RADIUS,
        EARTH_SMA,
        EARTH_ECCENTRICITY,
        EARTH_SOI,
        &sun,
    ));
    catalog.insert_unchecked(orbiter(
        "Moon",
        MOON_MASS,
        MOON_RADIUS,
        MOON_SMA,
        MOON_ECCENTRICITY,
        MOON_SOI,
        &earth,
    ));
    catalog.insert_unchecked(orbiter(
        "Mars",
        MARS_MASS,
        MARS_RADIUS,
        MARS_SMA,
        MARS_ECCENTRICITY,
        MARS_SOI,
        &sun,
    ));
    catalog.insert_unchecked(orbiter(
        "Jupiter",
        JUPITER_MASS,
        JUPITER_RADIUS,
        JUPITER_SMA,
        JUPITER_ECCENTRICITY,
        JUPITER_SOI,
        &sun,
    ));
    catalog.insert_unchecked(orbiter(
        "Saturn",
        SATURN_MASS,
        SATURN_RADIUS,
        SATURN_SMA,
        SATURN_ECCENTRICITY,
        SATURN_SOI,
        &sun,
    ));
    catalog.insert_unchecked(orbiter(
        "Uranus",
        URANUS_MASS,
        URANUS_RADIUS,
        URANUS_SMA,
        URANUS_ECCENTRICITY,
        URANUS_SOI,
        &sun,
    ));
    catalog.insert_unchecked(orbiter(
        "Neptune",
        NEPTUNE_MASS,
        NEPTUNE_RADIUS,
        NEPTUNE_SMA,
        NEPTUNE_ECCENTRICITY,
        NEPTUNE_SOI,
        &sun,
    ));

    catalog
}

fn orbiter(
    name: &str,
    mass: f64,
    radius: f64,
    sma: f64,
    eccentricity: f64,
    soi: f64,
    parent: &Arc<Body>,
) -> Body {
    Body::builder(name, Kilograms::new(mass), Meters::new(radius))
        .sma(Meters::new(sma))
        .eccentricity(eccentricity)
        .soi(Meters::new(soi))
        .parent(Arc::clone(parent))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn system_has_ten_bodies_and_one_root() {
        let system = solar_system();
        assert_eq!(system.len(), 10);
        let roots: Vec<&str> = system.roots().map(|b| b.name()).collect();
        assert_eq!(roots, ["Sun"]);
    }

    #[test]
    fn moon_orbits_earth() {
        let system = solar_system();
        let moon = system.get("Moon").unwrap();
        let chain: Vec<&str> = moon.ancestors().map(|b| b.name()).collect();
        assert_eq!(chain, ["Earth", "Sun"]);
    }

    #[test]
    fn every_orbiter_has_a_period() {
        let system = solar_system();
        for body in system.iter().filter(|b| !b.is_root()) {
            let period = body.orbital_period().unwrap();
            assert!(period.value() > 0.0, "{}", body.name());
        }
    }

    #[test]
    fn periods_increase_with_distance_from_sun() {
        let system = solar_system();
        let planets = ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"];
        let periods: Vec<f64> = planets
            .iter()
            .map(|name| system.get(name).unwrap().orbital_period().unwrap().value())
            .collect();
        assert!(periods.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn earth_year_from_presets() {
        let system = solar_system();
        let year = system.get("Earth").unwrap().orbital_period().unwrap();
        assert_relative_eq!(year.value(), 3.1558e7, max_relative = 1e-4);
    }

    #[test]
    fn preset_records_reassemble() {
        let system = solar_system();
        let rebuilt = Catalog::from_records(system.to_records()).unwrap();
        assert_eq!(rebuilt.len(), system.len());

        let original = system.get("Earth").unwrap().orbital_period().unwrap();
        let reloaded = rebuilt.get("Earth").unwrap().orbital_period().unwrap();
        assert_eq!(original.value().to_bits(), reloaded.value().to_bits());
    }
}
