//! Main application configuration

use docwire_domain::ports::Bundle;
use docwire_domain::value_objects::{ClientConfig, OdmConfig};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::kernel::KernelConfig;
use super::logging::LoggingConfig;

/// Main application configuration
///
/// `logging` and `kernel` are ambient settings; `client`, `odm` and
/// `bundles` form the document resolved into a registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Host application settings
    #[serde(default)]
    pub kernel: KernelConfig,
    /// Client connections
    #[serde(default, skip_serializing_if = "ClientConfig::is_empty")]
    pub client: ClientConfig,
    /// Document managers
    #[serde(default, skip_serializing_if = "OdmConfig::is_empty")]
    pub odm: OdmConfig,
    /// Registered bundles available to mapping resolution
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub bundles: IndexMap<String, Bundle>,
}
