//! Resolved Registry
//!
//! The sole output of resolution. A [`Registry`] is assembled through a
//! [`RegistryBuilder`] and is read-only afterwards; configuration changes
//! produce a new registry instead of patching an existing one.

use crate::error::{Error, Result};
use crate::value_objects::service::{ServiceDescriptor, ServiceKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Value Object: resolved service graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    services: IndexMap<String, ServiceDescriptor>,
    aliases: IndexMap<String, String>,
    parameters: IndexMap<String, Value>,
    default_connection: Option<String>,
    default_manager: Option<String>,
}

impl Registry {
    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// All descriptors in insertion order
    pub fn services(&self) -> &IndexMap<String, ServiceDescriptor> {
        &self.services
    }

    /// Descriptor with the given id
    pub fn service(&self, id: &str) -> Option<&ServiceDescriptor> {
        self.services.get(id)
    }

    /// Descriptor with the given id, following aliases
    pub fn resolve(&self, id_or_alias: &str) -> Option<&ServiceDescriptor> {
        let id = self
            .aliases
            .get(id_or_alias)
            .map_or(id_or_alias, String::as_str);
        self.services.get(id)
    }

    /// Whether a descriptor with the given id exists
    pub fn contains(&self, id: &str) -> bool {
        self.services.contains_key(id)
    }

    /// Descriptors of one kind, in insertion order
    pub fn services_of_kind(&self, kind: ServiceKind) -> impl Iterator<Item = &ServiceDescriptor> {
        self.services.values().filter(move |service| service.kind == kind)
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry holds no descriptors
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Alias name to service id
    pub fn aliases(&self) -> &IndexMap<String, String> {
        &self.aliases
    }

    /// Target of an alias
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Resolved container parameters
    pub fn parameters(&self) -> &IndexMap<String, Value> {
        &self.parameters
    }

    /// One resolved parameter
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Name of the default connection
    pub fn default_connection(&self) -> Option<&str> {
        self.default_connection.as_deref()
    }

    /// Name of the default document manager
    pub fn default_manager(&self) -> Option<&str> {
        self.default_manager.as_deref()
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Services ({}):", self.services.len())?;
        for (id, service) in &self.services {
            let visibility = if service.public { "" } else { " (private)" };
            match &service.class {
                Some(class) => writeln!(f, "  {id} [{}] {class}{visibility}", service.kind)?,
                None => writeln!(f, "  {id} [{}]{visibility}", service.kind)?,
            }
            for argument in &service.arguments {
                writeln!(f, "    arg {argument}")?;
            }
            for call in &service.calls {
                writeln!(f, "    call {call}")?;
            }
        }

        if !self.aliases.is_empty() {
            writeln!(f)?;
            writeln!(f, "Aliases:")?;
            for (alias, id) in &self.aliases {
                writeln!(f, "  {alias} -> {id}")?;
            }
        }

        if !self.parameters.is_empty() {
            writeln!(f)?;
            writeln!(f, "Parameters:")?;
            for (name, value) in &self.parameters {
                writeln!(f, "  {name} = {value}")?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Default connection: {}",
            self.default_connection.as_deref().unwrap_or("-")
        )?;
        write!(
            f,
            "Default document manager: {}",
            self.default_manager.as_deref().unwrap_or("-")
        )
    }
}

/// Builder for [`Registry`]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Add a descriptor; ids must be unique
    pub fn insert_service(&mut self, service: ServiceDescriptor) -> Result<()> {
        if self.registry.services.contains_key(&service.id) {
            return Err(Error::internal(format!(
                "Service \"{}\" is already defined",
                service.id
            )));
        }
        self.registry.services.insert(service.id.clone(), service);
        Ok(())
    }

    /// Add every descriptor of an iterator
    pub fn extend_services<I>(&mut self, services: I) -> Result<()>
    where
        I: IntoIterator<Item = ServiceDescriptor>,
    {
        for service in services {
            self.insert_service(service)?;
        }
        Ok(())
    }

    /// Point an alias at a service id
    pub fn set_alias<A: Into<String>, S: Into<String>>(&mut self, alias: A, id: S) {
        self.registry.aliases.insert(alias.into(), id.into());
    }

    /// Set a container parameter
    pub fn set_parameter<S: Into<String>, V: Into<Value>>(&mut self, name: S, value: V) {
        self.registry.parameters.insert(name.into(), value.into());
    }

    /// Record the default connection name
    pub fn set_default_connection<S: Into<String>>(&mut self, name: S) {
        self.registry.default_connection = Some(name.into());
    }

    /// Record the default document manager name
    pub fn set_default_manager<S: Into<String>>(&mut self, name: S) {
        self.registry.default_manager = Some(name.into());
    }

    /// Whether a descriptor with the given id was already added
    pub fn contains(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    /// Finish building
    pub fn build(self) -> Registry {
        self.registry
    }
}
