//! Configuration Tree Value Objects
//!
//! The typed shape of the `client` and `odm` configuration sections. Serde
//! deserialization doubles as schema validation: types are enforced and
//! unknown keys are rejected everywhere except in connection option bags,
//! which are passed through untouched.
//!
//! Named collections use [`IndexMap`] so the first-declared entry stays
//! first, which is what default selection relies on.

use crate::constants::DEFAULT_CACHE_DRIVER;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default proxy directory, expressed as a parameter placeholder
pub const DEFAULT_PROXY_DIR: &str = "%kernel.cache_dir%/doctrine/CouchDBProxies";

/// Default proxy namespace
pub const DEFAULT_PROXY_NAMESPACE: &str = "CouchDBProxies";

/// Options of a single client connection
///
/// The resolver does not interpret individual options (host, port,
/// credentials, ...). They are handed to the connection service as one
/// opaque argument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Raw option bag
    #[serde(flatten)]
    pub options: IndexMap<String, Value>,
}

impl ConnectionConfig {
    /// Create an empty connection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option
    pub fn with_option<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// The option bag as a single JSON object
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.options
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

/// Client section: named connections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Explicit default connection name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_connection: Option<String>,
    /// Connections in declaration order
    pub connections: IndexMap<String, ConnectionConfig>,
}

impl ClientConfig {
    /// Create an empty client section
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a connection
    pub fn with_connection<S: Into<String>>(mut self, name: S, connection: ConnectionConfig) -> Self {
        self.connections.insert(name.into(), connection);
        self
    }

    /// Set the explicit default connection
    pub fn with_default_connection<S: Into<String>>(mut self, name: S) -> Self {
        self.default_connection = Some(name.into());
        self
    }

    /// Whether the section declares nothing at all
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty() && self.default_connection.is_none()
    }
}

/// Cache driver of a document manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheDriverConfig {
    /// Driver type tag (`memcache`, `apc`, `array`, `xcache`)
    #[serde(rename = "type")]
    pub driver_type: String,
    /// Memcache host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Memcache port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    /// Cache class override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Memcache instance class override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_class: Option<String>,
}

impl CacheDriverConfig {
    /// A driver of the given type with no overrides
    pub fn of_type<S: Into<String>>(driver_type: S) -> Self {
        Self {
            driver_type: driver_type.into(),
            host: None,
            port: None,
            class: None,
            instance_class: None,
        }
    }

    /// A memcache driver connecting to `host:port`
    pub fn memcache<S: Into<String>>(host: S, port: u32) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(port),
            ..Self::of_type("memcache")
        }
    }

    /// Set the cache class override
    pub fn with_class<S: Into<String>>(mut self, class: S) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the instance class override
    pub fn with_instance_class<S: Into<String>>(mut self, class: S) -> Self {
        self.instance_class = Some(class.into());
        self
    }
}

impl Default for CacheDriverConfig {
    fn default() -> Self {
        Self::of_type(DEFAULT_CACHE_DRIVER)
    }
}

fn default_true() -> bool {
    true
}

/// Mapping information entry of a document manager
///
/// Keyed by bundle name when `is_bundle` applies, by an arbitrary label
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingConfig {
    /// Mapping type (`annotation`, `xml`, `yml`, `php`, `staticphp`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mapping_type: Option<String>,
    /// Directory holding the mapping sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Namespace prefix of the mapped document classes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Short alias for the prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Whether the entry names a registered bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bundle: Option<bool>,
    /// Set to `false` to disable the entry
    #[serde(default = "default_true")]
    pub mapping: bool,
}

impl MappingConfig {
    /// An enabled entry with nothing set
    pub fn new() -> Self {
        Self {
            mapping_type: None,
            dir: None,
            prefix: None,
            alias: None,
            is_bundle: None,
            mapping: true,
        }
    }

    /// An explicit, non-bundle mapping
    pub fn directory<T: Into<String>, D: Into<String>, P: Into<String>>(
        mapping_type: T,
        dir: D,
        prefix: P,
    ) -> Self {
        Self {
            mapping_type: Some(mapping_type.into()),
            dir: Some(dir.into()),
            prefix: Some(prefix.into()),
            is_bundle: Some(false),
            ..Self::new()
        }
    }

    /// Set the alias
    pub fn with_alias<S: Into<String>>(mut self, alias: S) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A named document manager
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManagerConfig {
    /// Connection name; the default connection when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    /// Discover mappings from every registered bundle
    pub auto_mapping: bool,
    /// Metadata cache driver
    pub metadata_cache_driver: CacheDriverConfig,
    /// Mapping entries in declaration order
    pub mappings: IndexMap<String, MappingConfig>,
}

impl ManagerConfig {
    /// A manager using the default connection and an array cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a named connection
    pub fn with_connection<S: Into<String>>(mut self, connection: S) -> Self {
        self.connection = Some(connection.into());
        self
    }

    /// Toggle auto-mapping
    pub fn with_auto_mapping(mut self, auto_mapping: bool) -> Self {
        self.auto_mapping = auto_mapping;
        self
    }

    /// Set the metadata cache driver
    pub fn with_metadata_cache_driver(mut self, driver: CacheDriverConfig) -> Self {
        self.metadata_cache_driver = driver;
        self
    }

    /// Add a mapping entry
    pub fn with_mapping<S: Into<String>>(mut self, name: S, mapping: MappingConfig) -> Self {
        self.mappings.insert(name.into(), mapping);
        self
    }
}

/// ODM section: named document managers and proxy options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OdmConfig {
    /// Explicit default document manager name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_document_manager: Option<String>,
    /// Generate proxy classes at runtime; follows the debug flag when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_generate_proxy_classes: Option<bool>,
    /// Directory where proxy classes are written
    pub proxy_dir: String,
    /// Namespace of generated proxy classes
    pub proxy_namespace: String,
    /// Document managers in declaration order
    pub document_managers: IndexMap<String, ManagerConfig>,
}

impl OdmConfig {
    /// Create an ODM section with default proxy options and no managers
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a document manager
    pub fn with_manager<S: Into<String>>(mut self, name: S, manager: ManagerConfig) -> Self {
        self.document_managers.insert(name.into(), manager);
        self
    }

    /// Set the explicit default document manager
    pub fn with_default_manager<S: Into<String>>(mut self, name: S) -> Self {
        self.default_document_manager = Some(name.into());
        self
    }

    /// Whether the section declares nothing at all
    pub fn is_empty(&self) -> bool {
        self.document_managers.is_empty() && self.default_document_manager.is_none()
    }
}

impl Default for OdmConfig {
    fn default() -> Self {
        Self {
            default_document_manager: None,
            auto_generate_proxy_classes: None,
            proxy_dir: DEFAULT_PROXY_DIR.to_string(),
            proxy_namespace: DEFAULT_PROXY_NAMESPACE.to_string(),
            document_managers: IndexMap::new(),
        }
    }
}
