//! Descriptor builders
//!
//! One function per service template. Each returns a fresh descriptor
//! parameterized by the entry name instead of extending a shared base
//! definition.

use crate::constants::{
    CLASS_CONFIGURATION, CLASS_CONNECTION, CLASS_DOCUMENT_MANAGER, CLASS_EVENT_MANAGER,
};
use crate::di::ids;
use docwire_domain::value_objects::{
    Argument, ClassRef, ConnectionConfig, ServiceDescriptor, ServiceKind,
};

/// Connection service; the option bag is its only constructor argument
pub fn connection_descriptor(name: &str, connection: &ConnectionConfig) -> ServiceDescriptor {
    ServiceDescriptor::new(ids::connection_id(name), ServiceKind::Connection)
        .with_class(ClassRef::parameter(CLASS_CONNECTION))
        .with_argument(Argument::Value(connection.to_value()))
}

/// ODM configuration service, without method calls
pub fn configuration_descriptor(manager: &str) -> ServiceDescriptor {
    ServiceDescriptor::new(ids::configuration_id(manager), ServiceKind::Configuration)
        .with_class(ClassRef::parameter(CLASS_CONFIGURATION))
}

/// Fresh event manager with no arguments
pub fn event_manager_descriptor(manager: &str) -> ServiceDescriptor {
    ServiceDescriptor::new(ids::event_manager_id(manager), ServiceKind::EventManager)
        .with_class(ClassRef::parameter(CLASS_EVENT_MANAGER))
}

/// Document manager wired to its connection, configuration and event manager
pub fn manager_descriptor(manager: &str, connection: &str) -> ServiceDescriptor {
    ServiceDescriptor::new(ids::document_manager_id(manager), ServiceKind::Manager)
        .with_class(ClassRef::parameter(CLASS_DOCUMENT_MANAGER))
        .with_argument(Argument::service(ids::connection_id(connection)))
        .with_argument(Argument::service(ids::configuration_id(manager)))
        .with_argument(Argument::service(ids::event_manager_id(manager)))
}
