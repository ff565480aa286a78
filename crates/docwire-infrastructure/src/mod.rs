//! # Infrastructure Layer
//!
//! Configuration loading, logging and registry resolution.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered settings plus order-preserving document sections |
//! | [`constants`] | File names, env prefixes, parameter and class names |
//!
//! ### Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Registry resolver, cache drivers, mapping loaders |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use di::{ConfiguredMappingLoader, NullMappingLoader, RegistryResolver, resolve_registry};
pub use error_ext::ErrorContext;
