//! Flat serialization records for bodies and system definitions.
//!
//! Records keep serde off the domain type: quantities are plain numbers in
//! base SI units, parents are names instead of shared handles. This is the
//! one place in the crate where incoming data is validated; [`Body`]
//! construction itself never checks anything.

use std::sync::Arc;

use qtty::{Kilograms, Meters};
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::error::{Error, Result};

/// Flat serialization form of a single body.
///
/// Field names follow the file format: the orbit radius is called `sma`,
/// matching [`BodyBuilder::sma`](crate::BodyBuilder::sma). Unknown fields are
/// rejected so unit mix-ups like `radius_km` fail loudly instead of being
/// dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyRecord {
    /// Body name, unique within a system definition.
    pub name: String,
    /// Mass in kilograms.
    pub mass: f64,
    /// Mean radius in metres.
    pub radius: f64,
    /// Radius of the circular orbit (semi-major axis) in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma: Option<f64>,
    /// Orbital eccentricity in `[0, 1)`. Descriptive only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f64>,
    /// Sphere-of-influence radius in metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soi: Option<f64>,
    /// Name of the parent body within the same system definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl BodyRecord {
    /// Checks the record for physically meaningless values.
    ///
    /// Mass and radius must be finite and positive, `sma` and `soi` too when
    /// present, and `eccentricity` must lie in `[0, 1)`. Parent resolution is
    /// not checked here; that is [`Catalog::from_records`](crate::Catalog::from_records)'s
    /// job.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name is empty"));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(self.invalid("mass must be finite and positive"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(self.invalid("radius must be finite and positive"));
        }
        if let Some(sma) = self.sma {
            if !(sma.is_finite() && sma > 0.0) {
                return Err(self.invalid("sma must be finite and positive"));
            }
        }
        if let Some(eccentricity) = self.eccentricity {
            if !(0.0..1.0).contains(&eccentricity) {
                return Err(self.invalid("eccentricity must lie in [0, 1)"));
            }
        }
        if let Some(soi) = self.soi {
            if !(soi.is_finite() && soi > 0.0) {
                return Err(self.invalid("soi must be finite and positive"));
            }
        }
        Ok(())
    }

    /// Projects a body to its record form, parent by name.
    pub fn from_body(body: &Body) -> Self {
        BodyRecord {
            name: body.name().to_owned(),
            mass: body.mass().value(),
            radius: body.radius().value(),
            sma: body.orbit_radius().map(|r| r.value()),
            eccentricity: body.eccentricity(),
            soi: body.soi().map(|r| r.value()),
            parent: body.parent().map(|p| p.name().to_owned()),
        }
    }

    /// Builds the domain body, attaching the already-resolved parent handle.
    pub(crate) fn into_body(self, parent: Option<Arc<Body>>) -> Body {
        let mut builder = Body::builder(
            self.name,
            Kilograms::new(self.mass),
            Meters::new(self.radius),
        );
        if let Some(sma) = self.sma {
            builder = builder.sma(Meters::new(sma));
        }
        if let Some(eccentricity) = self.eccentricity {
            builder = builder.eccentricity(eccentricity);
        }
        if let Some(soi) = self.soi {
            builder = builder.soi(Meters::new(soi));
        }
        if let Some(parent) = parent {
            builder = builder.parent(parent);
        }
        builder.build()
    }

    fn invalid(&self, reason: &str) -> Error {
        Error::InvalidRecord {
            name: self.name.clone(),
            reason: reason.to_owned(),
        }
    }
}

/// Document root of a system definition, shared by the TOML and JSON formats.
///
/// ```toml
/// [[bodies]]
/// name = "Sun"
/// mass = 1.98847e30
/// radius = 6.957e8
///
/// [[bodies]]
/// name = "Earth"
/// mass = 5.9722e24
/// radius = 6.371e6
/// sma = 1.496e11
/// eccentricity = 0.0167
/// soi = 9.24e8
/// parent = "Sun"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemDef {
    /// The bodies of the system, in any order.
    #[serde(default)]
    pub bodies: Vec<BodyRecord>,
}
