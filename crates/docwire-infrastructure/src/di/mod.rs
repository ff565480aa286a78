//! Registry Resolution
//!
//! Turns the `client` and `odm` configuration sections into a [`Registry`]
//! of service descriptors. Nothing here instantiates a service: the
//! registry is handed to an external container builder.
//!
//! ```text
//! AppConfig ──► resolve_connections ──► resolve_managers ──► Registry
//!                                         │
//!                                         ├─ MappingDriverLoader (metadata drivers, aliases)
//!                                         └─ resolve_cache_driver (metadata cache)
//! ```
//!
//! [`Registry`]: docwire_domain::value_objects::Registry

pub mod builders;
pub mod cache;
pub mod ids;
pub mod mapping;
pub mod resolver;

pub use cache::{CacheDefinition, CacheDriverKind, cache_namespace, resolve_cache_driver};
pub use mapping::{ConfiguredMappingLoader, NullMappingLoader};
pub use resolver::{
    ManagerServices, RegistryResolver, ResolvedConnections, ResolvedManagers, resolve_connections,
    resolve_managers, resolve_registry,
};
