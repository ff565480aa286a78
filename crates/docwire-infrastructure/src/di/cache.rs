//! Cache driver descriptors
//!
//! A manager's metadata cache is described by one descriptor, or two for
//! memcache (the cache wrapper plus the client instance it wraps). Every
//! cache descriptor is private and namespaced per manager and installation.

use crate::constants::{CLASS_MEMCACHE, CLASS_MEMCACHE_INSTANCE, PARAM_MEMCACHE_HOST, PARAM_MEMCACHE_PORT};
use crate::di::ids;
use docwire_domain::constants::{CACHE_NAMESPACE_DIGEST_LEN, CACHE_NAMESPACE_TAG};
use docwire_domain::error::{Error, Result};
use docwire_domain::value_objects::{
    Argument, CacheDriverConfig, ClassRef, ServiceDescriptor, ServiceKind,
};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Recognized cache driver types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheDriverKind {
    /// Memcache server
    Memcache,
    /// APC user cache
    Apc,
    /// Per-request array
    Array,
    /// XCache
    Xcache,
}

impl CacheDriverKind {
    /// Configuration tag of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memcache => "memcache",
            Self::Apc => "apc",
            Self::Array => "array",
            Self::Xcache => "xcache",
        }
    }
}

impl FromStr for CacheDriverKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "memcache" => Ok(Self::Memcache),
            "apc" => Ok(Self::Apc),
            "array" => Ok(Self::Array),
            "xcache" => Ok(Self::Xcache),
            other => Err(Error::unsupported_cache_driver(other)),
        }
    }
}

impl fmt::Display for CacheDriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptors making up one manager's metadata cache
#[derive(Debug, Clone, PartialEq)]
pub struct CacheDefinition {
    /// The cache service referenced by the configuration
    pub cache: ServiceDescriptor,
    /// Backend instance wrapped by the cache (memcache only)
    pub instance: Option<ServiceDescriptor>,
}

impl CacheDefinition {
    /// Descriptors in registration order: instance first
    pub fn into_services(self) -> Vec<ServiceDescriptor> {
        let mut services = Vec::with_capacity(2);
        services.extend(self.instance);
        services.push(self.cache);
        services
    }
}

/// Namespace isolating one manager's cache entries within an installation
///
/// `couchdb_{manager}_{digest}` where the digest covers the manager name and
/// the seed. Same inputs, same namespace.
pub fn cache_namespace(manager: &str, namespace_seed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(manager.as_bytes());
    hasher.update(namespace_seed.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!(
        "{CACHE_NAMESPACE_TAG}{manager}_{}",
        &digest[..CACHE_NAMESPACE_DIGEST_LEN]
    )
}

/// Describe the metadata cache of `manager`
pub fn resolve_cache_driver(
    manager: &str,
    driver: &CacheDriverConfig,
    namespace_seed: &str,
) -> Result<CacheDefinition> {
    let kind: CacheDriverKind = driver.driver_type.parse()?;
    let cache_id = ids::metadata_cache_id(manager);

    let (cache, instance) = match kind {
        CacheDriverKind::Memcache => {
            let instance_id = ids::memcache_instance_id(manager);
            let host = non_empty(driver.host.as_deref())
                .map_or_else(|| Argument::parameter(PARAM_MEMCACHE_HOST), Argument::value);
            let port = driver
                .port
                .filter(|port| *port != 0)
                .map_or_else(|| Argument::parameter(PARAM_MEMCACHE_PORT), Argument::value);

            let instance = ServiceDescriptor::new(&instance_id, ServiceKind::CacheInstance)
                .with_class(ClassRef::or_parameter(
                    driver.instance_class.as_deref(),
                    CLASS_MEMCACHE_INSTANCE,
                ))
                .with_call("connect", vec![host, port]);

            let cache = ServiceDescriptor::new(cache_id, ServiceKind::Cache)
                .with_class(ClassRef::or_parameter(driver.class.as_deref(), CLASS_MEMCACHE))
                .with_call("setMemcache", vec![Argument::service(instance_id)]);

            (cache, Some(instance))
        }
        CacheDriverKind::Apc | CacheDriverKind::Array | CacheDriverKind::Xcache => {
            let cache = ServiceDescriptor::new(cache_id, ServiceKind::Cache)
                .with_class(ClassRef::parameter(ids::cache_class_parameter(kind.as_str())));
            (cache, None)
        }
    };

    let namespace = cache_namespace(manager, namespace_seed);
    debug!(manager, driver = %kind, namespace = %namespace, "Resolved metadata cache");

    Ok(CacheDefinition {
        cache: cache
            .private()
            .with_call("setNamespace", vec![Argument::value(namespace)]),
        instance: instance.map(ServiceDescriptor::private),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
