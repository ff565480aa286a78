//! Configuration
//!
//! Typed configuration plus the loader that assembles it from defaults, a
//! TOML file and environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
