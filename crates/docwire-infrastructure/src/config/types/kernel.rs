//! Kernel configuration types
//!
//! Facts about the host application that resolution depends on.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Host application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Application root directory
    pub root_dir: PathBuf,

    /// Debug mode; also the default for runtime proxy generation
    pub debug: bool,

    /// Seed for cache namespaces; the root directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_seed: Option<String>,
}

impl KernelConfig {
    /// Value cache namespaces are derived from
    pub fn namespace_seed(&self) -> String {
        self.namespace_seed
            .clone()
            .unwrap_or_else(|| self.root_dir.display().to_string())
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            debug: false,
            namespace_seed: None,
        }
    }
}
