//! Mapping-driver loaders
//!
//! [`ConfiguredMappingLoader`] turns a manager's `mappings` entries (and,
//! with auto-mapping, every registered bundle) into one metadata driver per
//! mapping type, chained behind a single driver the configuration uses.
//! [`NullMappingLoader`] describes an empty chain.
//!
//! A bundle entry without a `type` is detected from its
//! `Resources/config/doctrine` files, falling back to annotations.

use crate::constants::{ANNOTATION_READER_SERVICE, CLASS_DRIVER_CHAIN};
use crate::di::ids;
use docwire_domain::constants::{
    MAPPING_OBJECT_DEFAULT_NAME, MAPPING_RESOURCE_CONFIG_DIR, MAPPING_RESOURCE_EXTENSION,
    MAPPING_TYPES,
};
use docwire_domain::error::{Error, Result};
use docwire_domain::ports::{Bundle, MappingDriverLoader, MappingInformation};
use docwire_domain::value_objects::{
    Argument, ClassRef, ManagerConfig, MappingConfig, ServiceDescriptor, ServiceKind,
};
use indexmap::IndexMap;
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

/// Mapping type of a bundle with no mapping resources
const DEFAULT_BUNDLE_MAPPING_TYPE: &str = "annotation";

/// Resource-file mapping types, in detection order
const RESOURCE_MAPPING_TYPES: [&str; 3] = ["xml", "yml", "php"];

/// A mapping entry with every default filled in
#[derive(Debug, Clone, PartialEq)]
struct ResolvedMapping {
    mapping_type: String,
    dir: String,
    prefix: String,
    alias: Option<String>,
}

fn chain_descriptor(manager: &str) -> ServiceDescriptor {
    ServiceDescriptor::new(ids::metadata_driver_id(manager), ServiceKind::MetadataDriver)
        .with_class(ClassRef::parameter(CLASS_DRIVER_CHAIN))
}

/// Loader that describes an empty driver chain and no aliases
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMappingLoader;

impl NullMappingLoader {
    /// Create a null loader
    pub fn new() -> Self {
        Self
    }
}

impl MappingDriverLoader for NullMappingLoader {
    fn load(&self, manager_name: &str, _manager: &ManagerConfig) -> Result<MappingInformation> {
        let chain = chain_descriptor(manager_name);
        Ok(MappingInformation {
            metadata_driver: chain.id.clone(),
            services: vec![chain],
            aliases: IndexMap::new(),
        })
    }

    fn loader_name(&self) -> &str {
        "null"
    }
}

/// Loader driven by the `mappings` configuration and the registered bundles
#[derive(Debug, Clone, Default)]
pub struct ConfiguredMappingLoader {
    bundles: IndexMap<String, Bundle>,
}

impl ConfiguredMappingLoader {
    /// Create a loader with no registered bundles
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader over the given bundles
    pub fn with_bundles(bundles: IndexMap<String, Bundle>) -> Self {
        Self { bundles }
    }

    /// Register a bundle
    pub fn with_bundle<S: Into<String>>(mut self, name: S, bundle: Bundle) -> Self {
        self.bundles.insert(name.into(), bundle);
        self
    }

    /// Explicit entries first, then every bundle auto-mapping adds
    fn expand<'a>(&self, manager: &'a ManagerConfig) -> IndexMap<String, Cow<'a, MappingConfig>> {
        let mut entries: IndexMap<String, Cow<'a, MappingConfig>> = manager
            .mappings
            .iter()
            .map(|(name, mapping)| (name.clone(), Cow::Borrowed(mapping)))
            .collect();

        if manager.auto_mapping {
            for name in self.bundles.keys() {
                entries
                    .entry(name.clone())
                    .or_insert_with(|| Cow::Owned(MappingConfig::new()));
            }
        }
        entries
    }

    fn resolve_mapping(
        &self,
        manager_name: &str,
        name: &str,
        mapping: &MappingConfig,
    ) -> Result<ResolvedMapping> {
        let is_bundle = mapping
            .is_bundle
            .unwrap_or_else(|| self.bundles.contains_key(name));

        let resolved = if is_bundle {
            let bundle = self.bundles.get(name).ok_or_else(|| {
                Error::configuration(format!(
                    "Bundle \"{name}\" mapped by document manager \"{manager_name}\" is not registered"
                ))
            })?;
            Self::resolve_bundle_mapping(name, mapping, bundle)
        } else {
            match (&mapping.mapping_type, &mapping.dir, &mapping.prefix) {
                (Some(mapping_type), Some(dir), Some(prefix)) => ResolvedMapping {
                    mapping_type: mapping_type.clone(),
                    dir: dir.clone(),
                    prefix: prefix.clone(),
                    alias: mapping.alias.clone(),
                },
                _ => {
                    return Err(Error::configuration(format!(
                        "Mapping \"{name}\" of document manager \"{manager_name}\" requires the \"type\", \"dir\" and \"prefix\" options"
                    )));
                }
            }
        };

        if !MAPPING_TYPES.contains(&resolved.mapping_type.as_str()) {
            return Err(Error::unsupported_mapping_type(name, &resolved.mapping_type));
        }
        Ok(resolved)
    }

    fn resolve_bundle_mapping(name: &str, mapping: &MappingConfig, bundle: &Bundle) -> ResolvedMapping {
        let mapping_type = mapping
            .mapping_type
            .clone()
            .unwrap_or_else(|| detect_bundle_mapping_type(bundle).to_string());

        let dir = match &mapping.dir {
            Some(dir) => bundle.path.join(dir),
            None if mapping_type == "annotation" => bundle.path.join(MAPPING_OBJECT_DEFAULT_NAME),
            None => bundle.path.join(MAPPING_RESOURCE_CONFIG_DIR),
        };

        let prefix = mapping
            .prefix
            .clone()
            .unwrap_or_else(|| format!("{}\\{MAPPING_OBJECT_DEFAULT_NAME}", bundle.namespace));

        ResolvedMapping {
            mapping_type,
            dir: dir.display().to_string(),
            prefix,
            alias: Some(mapping.alias.clone().unwrap_or_else(|| name.to_string())),
        }
    }

    fn typed_driver_descriptor(
        manager_name: &str,
        mapping_type: &str,
        paths: &IndexMap<String, String>,
    ) -> ServiceDescriptor {
        let descriptor = ServiceDescriptor::new(
            ids::typed_metadata_driver_id(manager_name, mapping_type),
            ServiceKind::MetadataDriver,
        )
        .with_class(ClassRef::parameter(ids::metadata_driver_class_parameter(
            mapping_type,
        )))
        .private();

        let dirs = || Value::Array(paths.keys().cloned().map(Value::String).collect());
        match mapping_type {
            "annotation" => descriptor
                .with_argument(Argument::service(ANNOTATION_READER_SERVICE))
                .with_argument(Argument::Value(dirs())),
            "xml" | "yml" => descriptor
                .with_argument(Argument::Value(Value::Object(
                    paths
                        .iter()
                        .map(|(dir, prefix)| (dir.clone(), Value::String(prefix.clone())))
                        .collect(),
                )))
                .with_call(
                    "setFileExtension",
                    vec![Argument::value(format!(
                        ".{MAPPING_RESOURCE_EXTENSION}.{mapping_type}"
                    ))],
                ),
            _ => descriptor.with_argument(Argument::Value(dirs())),
        }
    }
}

/// Mapping type of a bundle entry that does not set one
///
/// The first of `xml`, `yml`, `php` with a `*.couch.{type}` file under
/// `Resources/config/doctrine` wins; `annotation` otherwise.
fn detect_bundle_mapping_type(bundle: &Bundle) -> &'static str {
    let resource_dir = bundle.path.join(MAPPING_RESOURCE_CONFIG_DIR);
    let Ok(entries) = std::fs::read_dir(&resource_dir) else {
        return DEFAULT_BUNDLE_MAPPING_TYPE;
    };
    let file_names: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();

    RESOURCE_MAPPING_TYPES
        .into_iter()
        .find(|mapping_type| {
            let suffix = format!(".{MAPPING_RESOURCE_EXTENSION}.{mapping_type}");
            file_names
                .iter()
                .any(|name| name.len() > suffix.len() && name.ends_with(&suffix))
        })
        .unwrap_or(DEFAULT_BUNDLE_MAPPING_TYPE)
}

impl MappingDriverLoader for ConfiguredMappingLoader {
    fn load(&self, manager_name: &str, manager: &ManagerConfig) -> Result<MappingInformation> {
        // type -> dir -> prefix, and alias -> prefix; local to this manager
        let mut drivers: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        let mut aliases: IndexMap<String, String> = IndexMap::new();

        for (name, mapping) in self.expand(manager) {
            if !mapping.mapping {
                continue;
            }
            let resolved = self.resolve_mapping(manager_name, &name, &mapping)?;
            debug!(
                manager = manager_name,
                mapping = %name,
                mapping_type = %resolved.mapping_type,
                prefix = %resolved.prefix,
                "Resolved mapping"
            );
            if let Some(alias) = resolved.alias {
                aliases.insert(alias, resolved.prefix.clone());
            }
            drivers
                .entry(resolved.mapping_type)
                .or_default()
                .insert(resolved.dir, resolved.prefix);
        }

        let mut chain = chain_descriptor(manager_name);
        let mut services = Vec::with_capacity(drivers.len() + 1);
        for (mapping_type, paths) in &drivers {
            let driver = Self::typed_driver_descriptor(manager_name, mapping_type, paths);
            for prefix in paths.values() {
                chain.add_call(
                    "addDriver",
                    vec![Argument::service(&driver.id), Argument::value(prefix.as_str())],
                );
            }
            services.push(driver);
        }

        let metadata_driver = chain.id.clone();
        services.push(chain);

        Ok(MappingInformation {
            metadata_driver,
            services,
            aliases,
        })
    }

    fn loader_name(&self) -> &str {
        "configured"
    }
}
