//! Command entry points
//!
//! Load a configuration, resolve it and render the resulting registry.

use anyhow::Context;
use clap::ValueEnum;
use docwire_domain::value_objects::Registry;
use docwire_infrastructure::config::{AppConfig, ConfigLoader};
use docwire_infrastructure::di::{ConfiguredMappingLoader, resolve_registry};
use docwire_infrastructure::logging::init_logging;
use std::path::Path;
use tracing::info;

/// Registry output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Load configuration from an optional path
pub fn load_config(config_path: Option<&Path>) -> docwire_domain::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Resolve a configuration with the bundles it registers
pub fn resolve(config: &AppConfig) -> docwire_domain::Result<Registry> {
    let loader = ConfiguredMappingLoader::with_bundles(config.bundles.clone());
    resolve_registry(config, &loader)
}

/// Load and resolve in one step
pub fn resolve_config(config_path: Option<&Path>) -> docwire_domain::Result<Registry> {
    resolve(&load_config(config_path)?)
}

/// Render a registry in the requested format
pub fn render(registry: &Registry, format: OutputFormat) -> docwire_domain::Result<String> {
    match format {
        OutputFormat::Text => Ok(registry.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(registry)?),
    }
}

/// Run the resolver and print the registry to stdout
///
/// Any load or resolution error aborts before anything is printed.
pub fn run(config_path: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let registry = resolve(&config).context("Failed to resolve configuration")?;
    info!(
        services = registry.len(),
        format = ?format,
        "Rendering service registry"
    );

    println!("{}", render(&registry, format)?);
    Ok(())
}
