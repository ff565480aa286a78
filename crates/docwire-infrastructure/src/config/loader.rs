//! Configuration loader
//!
//! Ambient settings (`logging`, `kernel`) are layered with Figment:
//! defaults, then the TOML file, then `DOCWIRE__`-prefixed environment
//! variables. The document sections (`client`, `odm`, `bundles`) are read
//! from the same TOML file with an order-preserving parser, because default
//! selection depends on declaration order and Figment dictionaries are
//! sorted.

use crate::config::{AppConfig, KernelConfig, LoggingConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use docwire_domain::error::{Error, Result};
use docwire_domain::ports::Bundle;
use docwire_domain::value_objects::{ClientConfig, OdmConfig};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings merged through Figment
#[derive(Debug, Default, Serialize, Deserialize)]
struct AmbientSettings {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    kernel: KernelConfig,
}

/// Order-sensitive sections of the configuration document
#[derive(Debug, Default, Deserialize)]
struct DocumentSections {
    #[serde(default)]
    client: ClientConfig,
    #[serde(default)]
    odm: OdmConfig,
    #[serde(default)]
    bundles: IndexMap<String, Bundle>,
}

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `DOCWIRE__LOGGING__LEVEL`),
    ///    ambient settings only
    ///
    /// An explicit path that does not name a file is an error; when no path
    /// is set and no default location exists, defaults are used.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AmbientSettings::default()));

        let path = match &self.config_path {
            Some(config_path) if config_path.is_file() => Some(config_path.clone()),
            Some(config_path) => {
                return Err(Error::io(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            None => Self::find_default_config_path(),
        };

        let mut sections = DocumentSections::default();
        if let Some(path) = &path {
            let contents = std::fs::read_to_string(path)
                .io_context(format!("Failed to read config file: {}", path.display()))?;
            figment = figment.merge(Toml::string(&contents));
            sections = parse_sections(&contents)?;
            log_config_loaded(path);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let settings: AmbientSettings = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        let config = assemble(settings, sections);
        validate_app_config(&config)?;
        Ok(config)
    }

    /// Parse a configuration document held in memory
    ///
    /// Environment variables are not consulted.
    pub fn load_from_str(&self, contents: &str) -> Result<AppConfig> {
        let settings: AmbientSettings = Figment::new()
            .merge(Serialized::defaults(AmbientSettings::default()))
            .merge(Toml::string(contents))
            .extract()
            .config_context("Failed to extract configuration")?;

        let config = assemble(settings, parse_sections(contents)?);
        validate_app_config(&config)?;
        Ok(config)
    }

    /// Reload configuration from the same sources
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).with_context(|| {
            format!("Failed to write config file: {}", path.as_ref().display())
        })?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_sections(contents: &str) -> Result<DocumentSections> {
    let sections: DocumentSections =
        toml::from_str(contents).config_context("Failed to parse configuration document")?;
    debug!(
        connections = sections.client.connections.len(),
        document_managers = sections.odm.document_managers.len(),
        bundles = sections.bundles.len(),
        "Parsed configuration document"
    );
    Ok(sections)
}

fn assemble(settings: AmbientSettings, sections: DocumentSections) -> AppConfig {
    AppConfig {
        logging: settings.logging,
        kernel: settings.kernel,
        client: sections.client,
        odm: sections.odm,
        bundles: sections.bundles,
    }
}

/// Validate application configuration
///
/// Checks ambient values only; the document sections are checked while
/// resolving.
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(config)?;
    validate_kernel_config(config)?;
    validate_odm_config(config)?;
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}

fn validate_kernel_config(config: &AppConfig) -> Result<()> {
    if config.kernel.root_dir.as_os_str().is_empty() {
        return Err(Error::configuration("Kernel root directory cannot be empty"));
    }
    if config
        .kernel
        .namespace_seed
        .as_deref()
        .is_some_and(str::is_empty)
    {
        return Err(Error::configuration(
            "Cache namespace seed cannot be empty when set",
        ));
    }
    Ok(())
}

fn validate_odm_config(config: &AppConfig) -> Result<()> {
    if !config.odm.is_empty() && config.odm.proxy_namespace.is_empty() {
        return Err(Error::configuration("Proxy namespace cannot be empty"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set kernel configuration
    pub fn with_kernel(mut self, kernel: KernelConfig) -> Self {
        self.config.kernel = kernel;
        self
    }

    /// Set the client section
    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.config.client = client;
        self
    }

    /// Set the ODM section
    pub fn with_odm(mut self, odm: OdmConfig) -> Self {
        self.config.odm = odm;
        self
    }

    /// Register a bundle
    pub fn with_bundle<S: Into<String>>(mut self, name: S, bundle: Bundle) -> Self {
        self.config.bundles.insert(name.into(), bundle);
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
