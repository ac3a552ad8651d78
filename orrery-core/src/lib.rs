//! # orrery-core
//!
//! Celestial body catalog with strongly typed two-body orbital quantities.
//!
//! A [`Body`] carries the physical parameters of a star, planet or moon and,
//! optionally, a circular orbit around a parent body. From that it derives
//! the standard gravitational parameter, orbital period and velocity, and a
//! handful of surface quantities. Bodies assemble into a [`Catalog`], which
//! can be loaded from TOML or JSON system definitions.
//!
//! ## Features
//!
//! - Typed quantities (`qtty`): masses in [`qtty::Kilograms`], lengths in
//!   [`qtty::Meters`], periods in [`qtty::Seconds`], convertible to any unit
//!   of the same dimension
//! - Memoized GM and the circular-orbit period/velocity around a parent body
//! - Name-keyed catalogs that are closed forests: unique names, resolvable
//!   parents, no cycles
//! - TOML/JSON system definition loading with validation and SHA-256
//!   checksums
//! - Nominal solar-system presets for examples and tests
//!
//! ## Example
//!
//! ```rust
//! use orrery_core::presets;
//! use qtty::Day;
//!
//! let system = presets::solar_system();
//! let earth = system.get("Earth").unwrap();
//!
//! let year = earth.orbital_period()?;
//! println!("One Earth year is {:.2} days", year.to::<Day>().value());
//!
//! for planet in system.satellites_of("Sun") {
//!     println!("{planet}");
//! }
//! # Ok::<(), orrery_core::Error>(())
//! ```
//!
//! ## Scope
//!
//! Orbits are circular by assumption: one radius, one parent. The stored
//! eccentricity is carried as data and never used in a computation, and
//! there are no orbital elements, epochs or ephemerides. [`Body`]
//! construction does not validate its inputs; validation happens at the
//! record boundary when definitions are loaded.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod body;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod loaders;
pub mod presets;
pub mod records;

pub use body::{Ancestors, Body, BodyBuilder};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use loaders::{SystemLoadResult, SystemLoader, SystemSourceFormat};
pub use records::{BodyRecord, SystemDef};
