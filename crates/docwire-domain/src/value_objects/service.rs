//! Service Descriptor Value Objects
//!
//! A [`ServiceDescriptor`] records how to construct and initialize one named
//! service without constructing it. Arguments may be literal values,
//! references to container parameters, or references to other descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Kind of service a descriptor produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Client connection to the document store
    Connection,
    /// ODM configuration object of a document manager
    Configuration,
    /// Metadata cache
    Cache,
    /// Backend instance wrapped by a cache (memcache)
    CacheInstance,
    /// Mapping metadata driver
    MetadataDriver,
    /// Event manager of a document manager
    EventManager,
    /// Document manager
    Manager,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connection => "connection",
            Self::Configuration => "configuration",
            Self::Cache => "cache",
            Self::CacheInstance => "cache_instance",
            Self::MetadataDriver => "metadata_driver",
            Self::EventManager => "event_manager",
            Self::Manager => "manager",
        };
        f.write_str(name)
    }
}

/// Class of a service: a literal name or a parameter holding the name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ClassRef {
    /// Class given verbatim
    Literal(String),
    /// Class read from a container parameter
    Parameter(String),
}

impl ClassRef {
    /// A literal class name
    pub fn literal<S: Into<String>>(name: S) -> Self {
        Self::Literal(name.into())
    }

    /// A class held by the named parameter
    pub fn parameter<S: Into<String>>(name: S) -> Self {
        Self::Parameter(name.into())
    }

    /// The override when it is set and non-empty, the parameter otherwise
    pub fn or_parameter<S: Into<String>>(class_override: Option<&str>, parameter: S) -> Self {
        match class_override.filter(|class| !class.is_empty()) {
            Some(class) => Self::literal(class),
            None => Self::parameter(parameter),
        }
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(name) => f.write_str(name),
            Self::Parameter(name) => write!(f, "%{name}%"),
        }
    }
}

/// Constructor or method-call argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Argument {
    /// Literal value
    Value(Value),
    /// Reference to a container parameter
    Parameter(String),
    /// Reference to another service descriptor
    Service(String),
}

impl Argument {
    /// A literal value
    pub fn value<V: Into<Value>>(value: V) -> Self {
        Self::Value(value.into())
    }

    /// A parameter reference
    pub fn parameter<S: Into<String>>(name: S) -> Self {
        Self::Parameter(name.into())
    }

    /// A service reference
    pub fn service<S: Into<String>>(id: S) -> Self {
        Self::Service(id.into())
    }

    /// The referenced service id, if this is a service reference
    pub fn as_service(&self) -> Option<&str> {
        match self {
            Self::Service(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Parameter(name) => write!(f, "%{name}%"),
            Self::Service(id) => write!(f, "@{id}"),
        }
    }
}

/// Post-construction method call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Method name
    pub method: String,
    /// Ordered arguments
    pub arguments: Vec<Argument>,
}

impl MethodCall {
    /// Create a method call
    pub fn new<S: Into<String>>(method: S, arguments: Vec<Argument>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

impl fmt::Display for MethodCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.method)?;
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        f.write_str(")")
    }
}

/// Value Object: Service Descriptor
///
/// Describes one service of the resolved graph.
///
/// ## Business Rules
///
/// - `id` is unique within a registry
/// - `arguments` and `calls` keep the order they were added in
/// - private descriptors (`public == false`) are only reachable through
///   references from other descriptors
///
/// ## Example
///
/// ```rust
/// use docwire_domain::value_objects::{Argument, ClassRef, ServiceDescriptor, ServiceKind};
///
/// let cache = ServiceDescriptor::new("couchdb.odm.default_metadata_cache", ServiceKind::Cache)
///     .with_class(ClassRef::parameter("couchdb.odm.cache.array.class"))
///     .with_call("setNamespace", vec![Argument::value("couchdb_default_0123")])
///     .private();
///
/// assert!(!cache.public);
/// assert_eq!(cache.calls.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Logical service id
    pub id: String,
    /// Service kind
    pub kind: ServiceKind,
    /// Class to instantiate; left to the container when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ClassRef>,
    /// Ordered constructor arguments
    #[serde(default)]
    pub arguments: Vec<Argument>,
    /// Ordered post-construction method calls
    #[serde(default)]
    pub calls: Vec<MethodCall>,
    /// Whether the service may be fetched directly from the container
    pub public: bool,
}

impl ServiceDescriptor {
    /// Create a public descriptor with no class, arguments or calls
    pub fn new<S: Into<String>>(id: S, kind: ServiceKind) -> Self {
        Self {
            id: id.into(),
            kind,
            class: None,
            arguments: Vec::new(),
            calls: Vec::new(),
            public: true,
        }
    }

    /// Set the class
    pub fn with_class(mut self, class: ClassRef) -> Self {
        self.class = Some(class);
        self
    }

    /// Append a constructor argument
    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Append a method call
    pub fn with_call<S: Into<String>>(mut self, method: S, arguments: Vec<Argument>) -> Self {
        self.add_call(method, arguments);
        self
    }

    /// Append a method call in place
    pub fn add_call<S: Into<String>>(&mut self, method: S, arguments: Vec<Argument>) {
        self.calls.push(MethodCall::new(method, arguments));
    }

    /// Mark the descriptor private to the graph
    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }

    /// First call of the given method
    pub fn call(&self, method: &str) -> Option<&MethodCall> {
        self.calls.iter().find(|call| call.method == method)
    }

    /// Every service id this descriptor references, in argument order
    pub fn service_references(&self) -> impl Iterator<Item = &str> {
        self.arguments
            .iter()
            .chain(self.calls.iter().flat_map(|call| call.arguments.iter()))
            .filter_map(Argument::as_service)
    }
}
