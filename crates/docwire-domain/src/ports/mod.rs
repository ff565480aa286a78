//! Domain Ports
//!
//! Traits for collaborators the resolver consumes but does not implement
//! itself. Infrastructure provides the concrete implementations.

/// Mapping-driver loader port
pub mod mapping;

pub use mapping::{Bundle, MappingDriverLoader, MappingInformation};
