//! Domain Value Objects
//!
//! Immutable value objects consumed and produced by registry resolution.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ClientConfig`] | Named client connections plus the optional default |
//! | [`OdmConfig`] | Named document managers and proxy options |
//! | [`ServiceDescriptor`] | How to construct one service, without constructing it |
//! | [`Registry`] | Resolved descriptors, aliases, parameters and defaults |

/// Configuration tree value objects
pub mod config;
/// Resolved registry
pub mod registry;
/// Service descriptor value objects
pub mod service;

pub use config::{
    CacheDriverConfig, ClientConfig, ConnectionConfig, ManagerConfig, MappingConfig, OdmConfig,
};
pub use registry::{Registry, RegistryBuilder};
pub use service::{Argument, ClassRef, MethodCall, ServiceDescriptor, ServiceKind};
