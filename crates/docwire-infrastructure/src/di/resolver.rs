//! Registry Resolver
//!
//! Resolves the named collections of the configuration into a [`Registry`].
//!
//! ## Architecture
//!
//! ```text
//! client.connections ──► resolve_connections ──► ResolvedConnections
//!                                                     │
//! odm.document_managers ──► resolve_managers ◄────────┘
//!                               │  per manager:
//!                               │  configuration ─ mapping drivers ─ metadata cache
//!                               │  ─ event manager ─ document manager
//!                               ▼
//!                           ResolvedManagers ──► Registry
//! ```
//!
//! The pass is linear and fails fast: the first error aborts resolution and
//! no partial registry is returned.
//!
//! ## Usage
//!
//! ```ignore
//! let config = ConfigLoader::new().load()?;
//! let loader = ConfiguredMappingLoader::with_bundles(config.bundles.clone());
//! let registry = resolve_registry(&config, &loader)?;
//! ```

use crate::config::AppConfig;
use crate::constants::{
    PARAM_AUTO_GENERATE_PROXY_CLASSES, PARAM_CONNECTIONS, PARAM_DEFAULT_CONNECTION,
    PARAM_DEFAULT_DOCUMENT_MANAGER, PARAM_DOCUMENT_MANAGERS, PARAM_PROXY_DIR,
    PARAM_PROXY_NAMESPACE,
};
use crate::di::builders::{
    configuration_descriptor, connection_descriptor, event_manager_descriptor, manager_descriptor,
};
use crate::di::cache::resolve_cache_driver;
use crate::di::ids;
use docwire_domain::constants::{DEFAULT_CONNECTION_ALIAS, DEFAULT_MANAGER_ALIAS};
use docwire_domain::error::{Error, Result};
use docwire_domain::ports::MappingDriverLoader;
use docwire_domain::value_objects::{
    Argument, ClientConfig, ManagerConfig, OdmConfig, Registry, RegistryBuilder,
    ServiceDescriptor,
};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};

/// Connection descriptors keyed by connection name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConnections {
    /// Connection descriptors in declaration order
    pub connections: IndexMap<String, ServiceDescriptor>,
    /// Selected default connection name
    pub default_connection: Option<String>,
}

impl ResolvedConnections {
    /// Whether a connection with the given name was declared
    pub fn contains(&self, name: &str) -> bool {
        self.connections.contains_key(name)
    }
}

/// Everything resolved for one document manager
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerServices {
    /// Name of the connection the manager uses
    pub connection: String,
    /// Supporting descriptors in registration order
    pub supporting: Vec<ServiceDescriptor>,
    /// The document manager descriptor itself
    pub manager: ServiceDescriptor,
    /// Short alias to namespace map reported by the mapping loader
    pub aliases: IndexMap<String, String>,
}

impl ManagerServices {
    /// Supporting descriptors followed by the manager
    pub fn into_services(self) -> impl Iterator<Item = ServiceDescriptor> {
        self.supporting
            .into_iter()
            .chain(std::iter::once(self.manager))
    }

    /// Supporting descriptor with the given id
    pub fn supporting(&self, id: &str) -> Option<&ServiceDescriptor> {
        self.supporting.iter().find(|service| service.id == id)
    }
}

/// Manager services keyed by manager name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedManagers {
    /// Per-manager services in declaration order
    pub managers: IndexMap<String, ManagerServices>,
    /// Selected default document manager name
    pub default_manager: Option<String>,
}

/// Explicit default when declared, first-declared entry otherwise
fn select_default<V>(
    collection: &str,
    explicit: Option<&str>,
    entries: &IndexMap<String, V>,
) -> Result<Option<String>> {
    match explicit.filter(|name| !name.is_empty()) {
        Some(name) if entries.contains_key(name) => Ok(Some(name.to_string())),
        Some(name) => Err(Error::unknown_default(collection, name)),
        None => Ok(entries.keys().next().cloned()),
    }
}

/// Describe every declared connection and select the default one
pub fn resolve_connections(client: &ClientConfig) -> Result<ResolvedConnections> {
    let default_connection = select_default(
        "connection",
        client.default_connection.as_deref(),
        &client.connections,
    )?;

    let connections = client
        .connections
        .iter()
        .map(|(name, connection)| {
            let descriptor = connection_descriptor(name, connection);
            debug!(connection = %name, service = %descriptor.id, "Resolved connection");
            (name.clone(), descriptor)
        })
        .collect();

    Ok(ResolvedConnections {
        connections,
        default_connection,
    })
}

/// Describe every declared document manager and select the default one
pub fn resolve_managers(
    odm: &OdmConfig,
    connections: &ResolvedConnections,
    loader: &dyn MappingDriverLoader,
    namespace_seed: &str,
) -> Result<ResolvedManagers> {
    let default_manager = select_default(
        "document manager",
        odm.default_document_manager.as_deref(),
        &odm.document_managers,
    )?;

    let declared = odm.document_managers.len();
    if let Some((name, _)) = odm
        .document_managers
        .iter()
        .find(|(_, manager)| manager.auto_mapping)
    {
        if declared > 1 {
            return Err(Error::conflicting_auto_mapping(name, declared));
        }
    }

    let mut managers = IndexMap::with_capacity(declared);
    for (name, manager) in &odm.document_managers {
        let services = resolve_manager(name, manager, connections, loader, namespace_seed)?;
        managers.insert(name.clone(), services);
    }

    Ok(ResolvedManagers {
        managers,
        default_manager,
    })
}

fn resolve_manager(
    name: &str,
    manager: &ManagerConfig,
    connections: &ResolvedConnections,
    loader: &dyn MappingDriverLoader,
    namespace_seed: &str,
) -> Result<ManagerServices> {
    let connection = match manager.connection.as_deref().filter(|c| !c.is_empty()) {
        Some(connection) if connections.contains(connection) => connection.to_string(),
        Some(connection) => return Err(Error::unresolved_reference(name, connection)),
        None => connections
            .default_connection
            .clone()
            .ok_or_else(|| Error::unresolved_reference(name, "(default)"))?,
    };

    let mapping = loader.load(name, manager)?;
    let cache = resolve_cache_driver(name, &manager.metadata_cache_driver, namespace_seed)?;

    let aliases_value = Value::Object(
        mapping
            .aliases
            .iter()
            .map(|(alias, namespace)| (alias.clone(), Value::String(namespace.clone())))
            .collect(),
    );
    let configuration = configuration_descriptor(name)
        .with_call("setDocumentNamespaces", vec![Argument::Value(aliases_value)])
        .with_call("setMetadataCacheImpl", vec![Argument::service(&cache.cache.id)])
        .with_call(
            "setMetadataDriverImpl",
            vec![Argument::service(&mapping.metadata_driver)],
        )
        .with_call("setProxyDir", vec![Argument::parameter(PARAM_PROXY_DIR)])
        .with_call(
            "setProxyNamespace",
            vec![Argument::parameter(PARAM_PROXY_NAMESPACE)],
        );

    let mut supporting = Vec::with_capacity(mapping.services.len() + 4);
    supporting.push(configuration);
    supporting.extend(mapping.services);
    supporting.extend(cache.into_services());
    supporting.push(event_manager_descriptor(name));

    let descriptor = manager_descriptor(name, &connection);
    debug!(
        manager = name,
        connection = %connection,
        loader = loader.loader_name(),
        services = supporting.len() + 1,
        "Resolved document manager"
    );

    Ok(ManagerServices {
        connection,
        supporting,
        manager: descriptor,
        aliases: mapping.aliases,
    })
}

/// Resolver bound to a mapping loader and a cache namespace seed
pub struct RegistryResolver<'a> {
    loader: &'a dyn MappingDriverLoader,
    namespace_seed: String,
    debug: bool,
}

impl<'a> RegistryResolver<'a> {
    /// Create a resolver
    pub fn new<S: Into<String>>(loader: &'a dyn MappingDriverLoader, namespace_seed: S) -> Self {
        Self {
            loader,
            namespace_seed: namespace_seed.into(),
            debug: false,
        }
    }

    /// Debug flag; the default for runtime proxy generation
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Resolve both sections into a registry
    ///
    /// Empty sections are skipped, so an empty configuration yields an empty
    /// registry with no defaults.
    pub fn resolve(&self, client: &ClientConfig, odm: &OdmConfig) -> Result<Registry> {
        let mut builder = Registry::builder();

        let connections = if client.is_empty() {
            ResolvedConnections::default()
        } else {
            let connections = resolve_connections(client)?;
            register_connections(&mut builder, &connections)?;
            connections
        };

        if !odm.is_empty() {
            let managers = resolve_managers(odm, &connections, self.loader, &self.namespace_seed)?;
            self.register_managers(&mut builder, odm, managers)?;
        }

        let registry = builder.build();
        info!(
            services = registry.len(),
            default_connection = registry.default_connection().unwrap_or("-"),
            default_manager = registry.default_manager().unwrap_or("-"),
            "Resolved service registry"
        );
        Ok(registry)
    }

    fn register_managers(
        &self,
        builder: &mut RegistryBuilder,
        odm: &OdmConfig,
        managers: ResolvedManagers,
    ) -> Result<()> {
        let service_ids: serde_json::Map<String, Value> = managers
            .managers
            .keys()
            .map(|name| (name.clone(), Value::String(ids::document_manager_id(name))))
            .collect();
        builder.set_parameter(PARAM_DOCUMENT_MANAGERS, Value::Object(service_ids));
        builder.set_parameter(
            PARAM_AUTO_GENERATE_PROXY_CLASSES,
            odm.auto_generate_proxy_classes.unwrap_or(self.debug),
        );
        builder.set_parameter(PARAM_PROXY_DIR, odm.proxy_dir.as_str());
        builder.set_parameter(PARAM_PROXY_NAMESPACE, odm.proxy_namespace.as_str());

        if let Some(default_manager) = &managers.default_manager {
            builder.set_parameter(PARAM_DEFAULT_DOCUMENT_MANAGER, default_manager.as_str());
            builder.set_alias(DEFAULT_MANAGER_ALIAS, ids::document_manager_id(default_manager));
            builder.set_default_manager(default_manager);
        }

        for services in managers.managers.into_values() {
            builder.extend_services(services.into_services())?;
        }
        Ok(())
    }
}

fn register_connections(
    builder: &mut RegistryBuilder,
    connections: &ResolvedConnections,
) -> Result<()> {
    let service_ids: serde_json::Map<String, Value> = connections
        .connections
        .iter()
        .map(|(name, descriptor)| (name.clone(), Value::String(descriptor.id.clone())))
        .collect();
    builder.set_parameter(PARAM_CONNECTIONS, Value::Object(service_ids));

    if let Some(default_connection) = &connections.default_connection {
        builder.set_parameter(PARAM_DEFAULT_CONNECTION, default_connection.as_str());
        builder.set_alias(DEFAULT_CONNECTION_ALIAS, ids::connection_id(default_connection));
        builder.set_default_connection(default_connection);
    }

    builder.extend_services(connections.connections.values().cloned())
}

/// Resolve an application configuration into a registry
pub fn resolve_registry(config: &AppConfig, loader: &dyn MappingDriverLoader) -> Result<Registry> {
    RegistryResolver::new(loader, config.kernel.namespace_seed())
        .with_debug(config.kernel.debug)
        .resolve(&config.client, &config.odm)
}
