//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for docwire
///
/// Every variant is fatal to a resolution pass: the resolver stops at the
/// first error and never returns a partially built registry.
#[derive(Error, Debug)]
pub enum Error {
    /// An explicit default names an entry that was never declared
    #[error("Unknown default {collection} \"{name}\": no such entry is declared")]
    UnknownDefault {
        /// Collection the default was looked up in (`connection`, `document manager`)
        collection: String,
        /// The requested default name
        name: String,
    },

    /// A document manager references a connection that does not exist
    #[error("Document manager \"{manager}\" references unknown connection \"{connection}\"")]
    UnresolvedReference {
        /// The manager holding the reference
        manager: String,
        /// The connection name that could not be resolved
        connection: String,
    },

    /// `auto_mapping` requested while several managers are declared
    #[error(
        "You cannot enable \"auto_mapping\" on document manager \"{manager}\" when {managers} document managers are defined"
    )]
    ConflictingAutoMapping {
        /// The manager requesting auto-mapping
        manager: String,
        /// Number of declared managers
        managers: usize,
    },

    /// Cache driver type outside the recognized set
    #[error("\"{driver_type}\" is an unrecognized cache driver")]
    UnsupportedCacheDriver {
        /// The offending type string
        driver_type: String,
    },

    /// Mapping type outside the recognized set
    #[error("\"{mapping_type}\" is an unrecognized mapping type for mapping \"{mapping}\"")]
    UnsupportedMappingType {
        /// The mapping entry name
        mapping: String,
        /// The offending type string
        mapping_type: String,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an unknown default error
    pub fn unknown_default<C: Into<String>, N: Into<String>>(collection: C, name: N) -> Self {
        Self::UnknownDefault {
            collection: collection.into(),
            name: name.into(),
        }
    }

    /// Create an unresolved reference error
    pub fn unresolved_reference<M: Into<String>, C: Into<String>>(
        manager: M,
        connection: C,
    ) -> Self {
        Self::UnresolvedReference {
            manager: manager.into(),
            connection: connection.into(),
        }
    }

    /// Create a conflicting auto-mapping error
    pub fn conflicting_auto_mapping<S: Into<String>>(manager: S, managers: usize) -> Self {
        Self::ConflictingAutoMapping {
            manager: manager.into(),
            managers,
        }
    }

    /// Create an unsupported cache driver error
    pub fn unsupported_cache_driver<S: Into<String>>(driver_type: S) -> Self {
        Self::UnsupportedCacheDriver {
            driver_type: driver_type.into(),
        }
    }

    /// Create an unsupported mapping type error
    pub fn unsupported_mapping_type<M: Into<String>, T: Into<String>>(
        mapping: M,
        mapping_type: T,
    ) -> Self {
        Self::UnsupportedMappingType {
            mapping: mapping.into(),
            mapping_type: mapping_type.into(),
        }
    }

    /// Whether this error comes from resolving the configuration graph
    /// rather than from loading it
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownDefault { .. }
                | Self::UnresolvedReference { .. }
                | Self::ConflictingAutoMapping { .. }
                | Self::UnsupportedCacheDriver { .. }
                | Self::UnsupportedMappingType { .. }
        )
    }
}

// Basic error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}
