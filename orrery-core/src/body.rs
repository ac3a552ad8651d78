//! Celestial bodies and their orbital quantities.
//!
//! A [`Body`] bundles the physical parameters of a star, planet or moon with
//! an optional circular orbit around a parent body. Orbits are deliberately
//! minimal: one radius, one parent. The stored eccentricity is descriptive
//! data and never enters a computation.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use qtty::velocity::Velocity;
use qtty::{Kilograms, Meter, Meters, Second, Seconds};

use crate::constants::G;
use crate::error::{Error, Result};

/// A celestial body: physical parameters plus an optional circular orbit.
///
/// Bodies are immutable once built. Parents are shared through [`Arc`], so a
/// moon holds the same `Sun -> Earth` chain its siblings do, and parent chains
/// cannot form cycles: a body can only reference parents that already exist.
///
/// Construction performs **no validation**. A negative mass or an
/// eccentricity of 2.0 is stored as given and produces correspondingly
/// meaningless results downstream. Validation belongs to the record boundary
/// (see [`BodyRecord::validate`](crate::records::BodyRecord::validate)),
/// where untrusted data enters.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use orrery_core::Body;
/// use qtty::{Kilograms, Meters};
///
/// let sun = Arc::new(Body::new("Sun", Kilograms::new(1.98847e30), Meters::new(6.957e8)));
/// let earth = Body::builder("Earth", Kilograms::new(5.9722e24), Meters::new(6.371e6))
///     .sma(Meters::new(1.496e11))
///     .eccentricity(0.0167)
///     .parent(sun)
///     .build();
///
/// let year = earth.orbital_period()?;
/// assert!((year.value() - 3.1558e7).abs() / 3.1558e7 < 1e-3);
/// # Ok::<(), orrery_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    mass: Kilograms,
    radius: Meters,
    orbit_radius: Option<Meters>,
    eccentricity: Option<f64>,
    soi: Option<Meters>,
    parent: Option<Arc<Body>>,
    gm: OnceCell<f64>,
}

impl Body {
    /// Creates a root body: no orbit, no parent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery_core::Body;
    /// use qtty::{Kilograms, Meters};
    ///
    /// let sun = Body::new("Sun", Kilograms::new(1.98847e30), Meters::new(6.957e8));
    /// assert!(sun.is_root());
    /// ```
    pub fn new(name: impl Into<String>, mass: Kilograms, radius: Meters) -> Self {
        Self::builder(name, mass, radius).build()
    }

    /// Starts a builder for a body with optional orbital data.
    ///
    /// The builder names the orbit radius `sma`, matching the field name used
    /// in system definition files; the stored value is read back through
    /// [`orbit_radius`](Self::orbit_radius).
    pub fn builder(name: impl Into<String>, mass: Kilograms, radius: Meters) -> BodyBuilder {
        BodyBuilder {
            name: name.into(),
            mass,
            radius,
            orbit_radius: None,
            eccentricity: None,
            soi: None,
            parent: None,
        }
    }

    /// The body's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mass of the body.
    pub fn mass(&self) -> Kilograms {
        self.mass
    }

    /// Mean physical radius of the body.
    pub fn radius(&self) -> Meters {
        self.radius
    }

    /// Radius of the assumed-circular orbit around the parent, if any.
    pub fn orbit_radius(&self) -> Option<Meters> {
        self.orbit_radius
    }

    /// Orbital eccentricity, if recorded. Stored as descriptive data only;
    /// no computation in this crate reads it.
    pub fn eccentricity(&self) -> Option<f64> {
        self.eccentricity
    }

    /// Sphere-of-influence radius, if recorded. Stored, never computed.
    pub fn soi(&self) -> Option<Meters> {
        self.soi
    }

    /// The body this one orbits, if any.
    pub fn parent(&self) -> Option<&Arc<Body>> {
        self.parent.as_ref()
    }

    /// Whether this body orbits nothing (e.g. the Sun).
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Iterates over the parent chain, nearest first.
    ///
    /// The chain is finite by construction, so the iterator always
    /// terminates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use orrery_core::Body;
    /// use qtty::{Kilograms, Meters};
    ///
    /// let sun = Arc::new(Body::new("Sun", Kilograms::new(1.98847e30), Meters::new(6.957e8)));
    /// let earth = Arc::new(
    ///     Body::builder("Earth", Kilograms::new(5.9722e24), Meters::new(6.371e6))
    ///         .parent(sun)
    ///         .build(),
    /// );
    /// let moon = Body::builder("Moon", Kilograms::new(7.342e22), Meters::new(1.7374e6))
    ///     .parent(earth)
    ///     .build();
    ///
    /// let chain: Vec<&str> = moon.ancestors().map(|b| b.name()).collect();
    /// assert_eq!(chain, ["Earth", "Sun"]);
    /// ```
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.parent.as_deref(),
        }
    }

    /// The standard gravitational parameter GM = G · mass, in m³/s².
    ///
    /// Computed once and cached; later calls return the cached value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery_core::Body;
    /// use qtty::{Kilograms, Meters};
    ///
    /// let sun = Body::new("Sun", Kilograms::new(1.98847e30), Meters::new(6.957e8));
    /// let gm = sun.standard_gravitational_parameter();
    /// assert!((gm - 1.32712e20).abs() / 1.32712e20 < 1e-4);
    /// ```
    pub fn standard_gravitational_parameter(&self) -> f64 {
        *self.gm.get_or_init(|| G * self.mass.value())
    }

    /// The period of the assumed-circular orbit: T = 2π·√(r³ / μ), where r is
    /// the orbit radius and μ the parent's standard gravitational parameter.
    ///
    /// Returns [`Error::MissingOrbitalData`] when the body has no orbit
    /// radius or no parent.
    pub fn orbital_period(&self) -> Result<Seconds> {
        let (radius, parent) = self.orbit()?;
        let mu = parent.standard_gravitational_parameter();
        let r = radius.value();
        Ok(Seconds::new(2.0 * std::f64::consts::PI * (r.powi(3) / mu).sqrt()))
    }

    /// The speed of the assumed-circular orbit: v = √(μ / r).
    ///
    /// Returns [`Error::MissingOrbitalData`] under the same conditions as
    /// [`orbital_period`](Self::orbital_period).
    pub fn orbital_velocity(&self) -> Result<Velocity<Meter, Second>> {
        let (radius, parent) = self.orbit()?;
        let mu = parent.standard_gravitational_parameter();
        Ok(Velocity::new((mu / radius.value()).sqrt()))
    }

    /// Surface area of the body treated as a sphere, in m².
    pub fn surface_area(&self) -> f64 {
        let r = self.radius.value();
        4.0 * std::f64::consts::PI * r * r
    }

    /// Volume of the body treated as a sphere, in m³.
    pub fn volume(&self) -> f64 {
        let r = self.radius.value();
        4.0 / 3.0 * std::f64::consts::PI * r.powi(3)
    }

    /// Mean density, in kg/m³.
    pub fn density(&self) -> f64 {
        self.mass.value() / self.volume()
    }

    /// Gravitational acceleration at the surface: GM / r², in m/s².
    pub fn surface_gravity(&self) -> f64 {
        let r = self.radius.value();
        self.standard_gravitational_parameter() / (r * r)
    }

    /// Escape velocity from the surface: √(2·GM / r).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery_core::Body;
    /// use qtty::{Kilograms, Meters};
    ///
    /// let earth = Body::new("Earth", Kilograms::new(5.9722e24), Meters::new(6.371e6));
    /// let v = earth.escape_velocity();
    /// assert!((v.value() - 1.1186e4).abs() / 1.1186e4 < 1e-3);
    /// ```
    pub fn escape_velocity(&self) -> Velocity<Meter, Second> {
        let r = self.radius.value();
        Velocity::new((2.0 * self.standard_gravitational_parameter() / r).sqrt())
    }

    fn orbit(&self) -> Result<(Meters, &Arc<Body>)> {
        match (self.orbit_radius, self.parent.as_ref()) {
            (Some(radius), Some(parent)) => Ok((radius, parent)),
            _ => Err(Error::MissingOrbitalData {
                body: self.name.clone(),
            }),
        }
    }
}

// The GM cache is an implementation detail, not part of the observable value.
impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.mass == other.mass
            && self.radius == other.radius
            && self.orbit_radius == other.orbit_radius
            && self.eccentricity == other.eccentricity
            && self.soi == other.soi
            && self.parent == other.parent
    }
}

impl fmt::Display for Body {
    /// Formats the body on one line, mass and radius in scientific notation
    /// with two fractional digits, optional fields as their value or `None`.
    ///
    /// ```text
    /// Body(name=Earth, mass=5.97e24, radius=6.37e6, orbit_radius=1.496e11, soi=9.24e8)
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Body(name={}, mass={:.2e}, radius={:.2e}, orbit_radius=",
            self.name,
            self.mass.value(),
            self.radius.value()
        )?;
        match self.orbit_radius {
            Some(radius) => write!(f, "{:e}", radius.value())?,
            None => f.write_str("None")?,
        }
        f.write_str(", soi=")?;
        match self.soi {
            Some(soi) => write!(f, "{:e}", soi.value())?,
            None => f.write_str("None")?,
        }
        f.write_str(")")
    }
}

/// Iterator over a body's parent chain, returned by [`Body::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a Body>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Body;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

/// Builder for [`Body`], returned by [`Body::builder`].
///
/// `build` never fails; see the note on validation in the [`Body`] docs.
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    name: String,
    mass: Kilograms,
    radius: Meters,
    orbit_radius: Option<Meters>,
    eccentricity: Option<f64>,
    soi: Option<Meters>,
    parent: Option<Arc<Body>>,
}

impl BodyBuilder {
    /// Sets the radius of the circular orbit (semi-major axis).
    pub fn sma(mut self, sma: Meters) -> Self {
        self.orbit_radius = Some(sma);
        self
    }

    /// Sets the orbital eccentricity. Descriptive only.
    pub fn eccentricity(mut self, eccentricity: f64) -> Self {
        self.eccentricity = Some(eccentricity);
        self
    }

    /// Sets the sphere-of-influence radius.
    pub fn soi(mut self, soi: Meters) -> Self {
        self.soi = Some(soi);
        self
    }

    /// Sets the parent body.
    pub fn parent(mut self, parent: Arc<Body>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Finishes construction.
    pub fn build(self) -> Body {
        Body {
            name: self.name,
            mass: self.mass,
            radius: self.radius,
            orbit_radius: self.orbit_radius,
            eccentricity: self.eccentricity,
            soi: self.soi,
            parent: self.parent,
            gm: OnceCell::new(),
        }
    }
}
