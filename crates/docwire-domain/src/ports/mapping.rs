//! Mapping Driver Loader Port
//!
//! Given a document manager's mapping configuration, a loader describes the
//! metadata driver that reads the mappings and reports the short alias of
//! every mapped namespace.

use crate::error::Result;
use crate::value_objects::{ManagerConfig, ServiceDescriptor};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A registered bundle that auto-mapping may scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    /// Root namespace of the bundle's classes
    pub namespace: String,
    /// Directory the bundle lives in
    pub path: PathBuf,
}

impl Bundle {
    /// Create a bundle
    pub fn new<S: Into<String>, P: Into<PathBuf>>(namespace: S, path: P) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }
}

/// Mapping information of one document manager
///
/// Returned by value so each manager starts from empty accumulators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingInformation {
    /// Service id of the metadata driver the configuration should use
    pub metadata_driver: String,
    /// Descriptors the loader contributes (driver chain and per-type drivers)
    pub services: Vec<ServiceDescriptor>,
    /// Short alias to fully-qualified namespace
    pub aliases: IndexMap<String, String>,
}

/// Port: mapping-driver loader
///
/// # Example
///
/// ```ignore
/// let info = loader.load("default", &manager)?;
/// configuration.add_call("setDocumentNamespaces", vec![Argument::value(json!(info.aliases))]);
/// ```
pub trait MappingDriverLoader: Send + Sync {
    /// Describe the metadata driver of `manager_name`
    fn load(&self, manager_name: &str, manager: &ManagerConfig) -> Result<MappingInformation>;

    /// Loader name for logs
    fn loader_name(&self) -> &str;
}
