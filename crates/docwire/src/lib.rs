//! # docwire
//!
//! Resolves the named connections and document managers of a document-store
//! configuration into a registry of service descriptors.
//!
//! ## Example
//!
//! ```ignore
//! use docwire::{OutputFormat, render, resolve_config};
//!
//! let registry = resolve_config(Some(std::path::Path::new("docwire.toml")))?;
//! println!("{}", render(&registry, OutputFormat::Text)?);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - configuration tree, service descriptors, registry, errors
//! - `infrastructure` - config loading, logging, resolver and mapping loaders

/// Domain layer - configuration tree, descriptors and registry
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use docwire_domain::*;
}

/// Infrastructure layer - config, logging and resolution
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use docwire_infrastructure::*;
}

mod init;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export entry points at the crate root
pub use init::{OutputFormat, load_config, render, resolve, resolve_config, run};
