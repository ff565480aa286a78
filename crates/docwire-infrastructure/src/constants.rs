//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Service id layout shared with the domain lives in
//! `docwire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "docwire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "docwire";

/// Environment variable prefix for configuration (`DOCWIRE__LOGGING__LEVEL`)
pub const CONFIG_ENV_PREFIX: &str = "DOCWIRE";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "DOCWIRE_LOG";

/// File name stem used by the rolling file appender
pub const LOG_FILE_STEM: &str = "docwire";

// ============================================================================
// PARAMETER NAMES
// ============================================================================

/// Map of connection name to connection service id
pub const PARAM_CONNECTIONS: &str = "couchdb.connections";

/// Name of the default connection
pub const PARAM_DEFAULT_CONNECTION: &str = "couchdb.default_connection";

/// Map of document manager name to manager service id
pub const PARAM_DOCUMENT_MANAGERS: &str = "couchdb.document_managers";

/// Name of the default document manager
pub const PARAM_DEFAULT_DOCUMENT_MANAGER: &str = "couchdb.default_document_manager";

/// Whether proxy classes are generated at runtime
pub const PARAM_AUTO_GENERATE_PROXY_CLASSES: &str = "couchdb.odm.auto_generate_proxy_classes";

/// Proxy class directory
pub const PARAM_PROXY_DIR: &str = "couchdb.odm.proxy_dir";

/// Proxy class namespace
pub const PARAM_PROXY_NAMESPACE: &str = "couchdb.odm.proxy_namespace";

/// Default memcache host
pub const PARAM_MEMCACHE_HOST: &str = "couchdb.odm.cache.memcache_host";

/// Default memcache port
pub const PARAM_MEMCACHE_PORT: &str = "couchdb.odm.cache.memcache_port";

// ============================================================================
// CLASS PARAMETER NAMES
// ============================================================================

/// Connection class
pub const CLASS_CONNECTION: &str = "couchdb.client.connection.class";

/// ODM configuration class
pub const CLASS_CONFIGURATION: &str = "couchdb.odm.configuration.class";

/// Document manager class
pub const CLASS_DOCUMENT_MANAGER: &str = "couchdb.odm.document_manager.class";

/// Event manager class
pub const CLASS_EVENT_MANAGER: &str = "couchdb.odm.event_manager.class";

/// Memcache cache wrapper class
pub const CLASS_MEMCACHE: &str = "couchdb.odm.cache.memcache.class";

/// Memcache client instance class
pub const CLASS_MEMCACHE_INSTANCE: &str = "couchdb.odm.cache.memcache_instance.class";

/// Metadata driver chain class
pub const CLASS_DRIVER_CHAIN: &str = "couchdb.odm.metadata.driver_chain.class";

/// Annotation reader shared by annotation metadata drivers
pub const ANNOTATION_READER_SERVICE: &str = "couchdb.odm.metadata.annotation_reader";
