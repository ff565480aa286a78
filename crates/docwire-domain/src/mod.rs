//! # docwire Domain Layer
//!
//! Types shared by the resolver and its collaborators.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Configuration tree, service descriptors, registry |
//! | [`ports`] | Collaborator traits consumed by the resolver |
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`constants`] | Service id prefixes and recognized driver types |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    Argument, CacheDriverConfig, ClassRef, ClientConfig, ConnectionConfig, ManagerConfig,
    MappingConfig, MethodCall, OdmConfig, Registry, ServiceDescriptor, ServiceKind,
};
