//! Loading system definitions from TOML and JSON sources.
//!
//! The loader is the crate's only I/O surface. It reads a definition, parses
//! it into [`SystemDef`] records, and hands assembly to
//! [`Catalog::from_records`]. Alongside the catalog it reports the source
//! format and a SHA-256 checksum of the raw text, so callers can deduplicate
//! definitions and detect changes without re-parsing.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::records::SystemDef;

/// Input format of a system definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemSourceFormat {
    /// A `.toml` definition.
    Toml,
    /// A `.json` definition.
    Json,
}

/// A successfully loaded and assembled system definition.
#[derive(Debug, Clone)]
pub struct SystemLoadResult {
    /// The assembled catalog.
    pub catalog: Catalog,
    /// Format the definition was parsed from.
    pub format: SystemSourceFormat,
    /// SHA-256 of the raw definition text, lowercase hex.
    pub checksum: String,
    /// Number of bodies in the catalog.
    pub num_bodies: usize,
}

/// Loads system definitions from files or strings.
///
/// # Examples
///
/// ```rust
/// use orrery_core::SystemLoader;
///
/// let result = SystemLoader::load_from_toml_str(
///     r#"
///     [[bodies]]
///     name = "Sun"
///     mass = 1.98847e30
///     radius = 6.957e8
///
///     [[bodies]]
///     name = "Earth"
///     mass = 5.9722e24
///     radius = 6.371e6
///     sma = 1.496e11
///     parent = "Sun"
///     "#,
/// )?;
///
/// assert_eq!(result.num_bodies, 2);
/// assert!(result.catalog.get("Earth").is_some());
/// # Ok::<(), orrery_core::Error>(())
/// ```
pub struct SystemLoader;

impl SystemLoader {
    /// Loads a system definition from a file, dispatching on its extension.
    ///
    /// `.toml` and `.json` (case-insensitive) are supported; anything else
    /// fails with [`Error::UnsupportedFormat`] before the file is read.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<SystemLoadResult> {
        let path = path.as_ref();
        let format = Self::detect_format(path)?;
        log::debug!("loading system definition from {}", path.display());
        let content = fs::read_to_string(path)?;
        match format {
            SystemSourceFormat::Toml => Self::load_from_toml_str(&content),
            SystemSourceFormat::Json => Self::load_from_json_str(&content),
        }
    }

    /// Parses and assembles a TOML system definition.
    pub fn load_from_toml_str(content: &str) -> Result<SystemLoadResult> {
        let def: SystemDef = toml::from_str(content)?;
        Self::assemble(def, content, SystemSourceFormat::Toml)
    }

    /// Parses and assembles a JSON system definition.
    pub fn load_from_json_str(content: &str) -> Result<SystemLoadResult> {
        let def: SystemDef = serde_json::from_str(content)?;
        Self::assemble(def, content, SystemSourceFormat::Json)
    }

    fn detect_format(path: &Path) -> Result<SystemSourceFormat> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("toml") => Ok(SystemSourceFormat::Toml),
            Some("json") => Ok(SystemSourceFormat::Json),
            _ => Err(Error::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    fn assemble(
        def: SystemDef,
        raw: &str,
        format: SystemSourceFormat,
    ) -> Result<SystemLoadResult> {
        if def.bodies.is_empty() {
            log::warn!("system definition contains no bodies");
        }
        let catalog = Catalog::from_records(def.bodies)?;
        let result = SystemLoadResult {
            num_bodies: catalog.len(),
            checksum: calculate_checksum(raw),
            catalog,
            format,
        };
        log::info!(
            "loaded system definition: {} bodies, checksum {}",
            result.num_bodies,
            &result.checksum[..8]
        );
        Ok(result)
    }
}

/// SHA-256 of the definition text, for deduplication and change detection.
fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
