//! Domain layer constants
//!
//! Service id layout and the fixed sets of recognized driver types.
//! Infrastructure-specific constants (file names, env prefixes) remain in
//! the infrastructure crate.

// ============================================================================
// SERVICE ID CONSTANTS
// ============================================================================

/// Prefix shared by every service id and parameter name
pub const SERVICE_PREFIX: &str = "couchdb";

/// Alias pointing at the default connection service
pub const DEFAULT_CONNECTION_ALIAS: &str = "couchdb_connection";

/// Alias pointing at the default document manager service
pub const DEFAULT_MANAGER_ALIAS: &str = "couchdb.odm.document_manager";

/// Tag prepended to every generated cache namespace
pub const CACHE_NAMESPACE_TAG: &str = "couchdb_";

/// Number of hex characters of the seed digest kept in a cache namespace
pub const CACHE_NAMESPACE_DIGEST_LEN: usize = 32;

// ============================================================================
// DRIVER TYPE CONSTANTS
// ============================================================================

/// Cache driver types the resolver knows how to describe
pub const CACHE_DRIVER_TYPES: &[&str] = &["memcache", "apc", "array", "xcache"];

/// Cache driver used when a manager does not configure one
pub const DEFAULT_CACHE_DRIVER: &str = "array";

/// Mapping driver types the default mapping loader understands
pub const MAPPING_TYPES: &[&str] = &["annotation", "xml", "yml", "php", "staticphp"];

/// Directory (relative to a bundle) holding annotated document classes
pub const MAPPING_OBJECT_DEFAULT_NAME: &str = "CouchDocument";

/// Directory (relative to a bundle) holding mapping resource files
pub const MAPPING_RESOURCE_CONFIG_DIR: &str = "Resources/config/doctrine";

/// File extension of mapping resource files
pub const MAPPING_RESOURCE_EXTENSION: &str = "couch";
