//! Error types for orrery-core.

use thiserror::Error;

/// Errors that can occur in orrery-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A body was asked for an orbital quantity it does not carry the data for.
    ///
    /// Raised by [`Body::orbital_period`](crate::Body::orbital_period) and
    /// [`Body::orbital_velocity`](crate::Body::orbital_velocity) when the body
    /// has no orbit radius or no parent.
    #[error("Missing orbital data for body '{body}'")]
    MissingOrbitalData {
        /// Name of the body the quantity was requested for.
        body: String,
    },

    /// A body with the same name is already present in the catalog.
    #[error("Duplicate body name '{name}' in catalog")]
    DuplicateBody {
        /// The offending name.
        name: String,
    },

    /// A body references a parent that cannot be resolved.
    ///
    /// For record sets this means the parent name does not appear anywhere in
    /// the definition; for direct insertion it means the parent instance is
    /// not resident in the catalog.
    #[error("Body '{child}' references unknown parent '{parent}'")]
    UnknownParent {
        /// Name of the referencing body.
        child: String,
        /// Name of the unresolved parent.
        parent: String,
    },

    /// Parent references in a record set form a cycle.
    #[error("Parent references form a cycle among bodies {names:?}")]
    ParentCycle {
        /// Names of the bodies lying on the cycle. Records that merely
        /// descend from one are not listed.
        names: Vec<String>,
    },

    /// A body record failed validation.
    #[error("Invalid body record '{name}': {reason}")]
    InvalidRecord {
        /// Name of the offending record.
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A system definition file has an extension the loader does not handle.
    #[error("Unsupported system definition format: '{path}' (expected .toml or .json)")]
    UnsupportedFormat {
        /// Path of the offending file.
        path: String,
    },

    /// I/O error while reading a system definition.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for orrery-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_orbital_data_names_the_body() {
        let err = Error::MissingOrbitalData {
            body: "Eris".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Eris"));
        assert!(msg.contains("Missing orbital data"));
    }

    #[test]
    fn unknown_parent_names_both_ends() {
        let err = Error::UnknownParent {
            child: "Moon".to_string(),
            parent: "Terra".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Moon"));
        assert!(msg.contains("Terra"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
