//! Metadata Cache Driver Tests

use docwire_domain::error::Error;
use docwire_domain::value_objects::{Argument, CacheDriverConfig, ClassRef, ServiceKind};
use docwire_infrastructure::constants::{
    CLASS_MEMCACHE, CLASS_MEMCACHE_INSTANCE, PARAM_MEMCACHE_HOST, PARAM_MEMCACHE_PORT,
};
use docwire_infrastructure::di::{CacheDriverKind, cache_namespace, resolve_cache_driver};

#[test]
fn test_memcache_connects_instance() {
    let definition =
        resolve_cache_driver("default", &CacheDriverConfig::memcache("h", 1), "seed").unwrap();

    let instance = definition.instance.as_ref().unwrap();
    assert_eq!(instance.id, "couchdb.odm.default_memcache_instance");
    assert_eq!(instance.kind, ServiceKind::CacheInstance);
    assert_eq!(
        instance.class,
        Some(ClassRef::parameter(CLASS_MEMCACHE_INSTANCE))
    );
    assert_eq!(
        instance.call("connect").unwrap().arguments,
        vec![Argument::value("h"), Argument::value(1)]
    );
    assert!(!instance.public);

    let cache = &definition.cache;
    assert_eq!(cache.id, "couchdb.odm.default_metadata_cache");
    assert_eq!(cache.class, Some(ClassRef::parameter(CLASS_MEMCACHE)));
    assert_eq!(
        cache.call("setMemcache").unwrap().arguments,
        vec![Argument::service("couchdb.odm.default_memcache_instance")]
    );
    assert!(!cache.public);
}

#[test]
fn test_memcache_without_host_uses_parameters() {
    let definition =
        resolve_cache_driver("default", &CacheDriverConfig::of_type("memcache"), "seed").unwrap();

    assert_eq!(
        definition.instance.unwrap().call("connect").unwrap().arguments,
        vec![
            Argument::parameter(PARAM_MEMCACHE_HOST),
            Argument::parameter(PARAM_MEMCACHE_PORT),
        ]
    );
}

#[test]
fn test_memcache_class_overrides() {
    let driver = CacheDriverConfig::memcache("h", 1)
        .with_class("Acme\\Cache")
        .with_instance_class("Acme\\Memcache");
    let definition = resolve_cache_driver("default", &driver, "seed").unwrap();

    assert_eq!(definition.cache.class, Some(ClassRef::literal("Acme\\Cache")));
    assert_eq!(
        definition.instance.unwrap().class,
        Some(ClassRef::literal("Acme\\Memcache"))
    );
}

#[test]
fn test_instance_registered_before_cache() {
    let definition =
        resolve_cache_driver("default", &CacheDriverConfig::memcache("h", 1), "seed").unwrap();
    let ids: Vec<_> = definition
        .into_services()
        .into_iter()
        .map(|service| service.id)
        .collect();
    assert_eq!(
        ids,
        [
            "couchdb.odm.default_memcache_instance",
            "couchdb.odm.default_metadata_cache",
        ]
    );
}

#[test]
fn test_simple_drivers_use_class_parameter() {
    for driver_type in ["apc", "array", "xcache"] {
        let definition =
            resolve_cache_driver("dm", &CacheDriverConfig::of_type(driver_type), "seed").unwrap();

        assert!(definition.instance.is_none());
        assert_eq!(
            definition.cache.class,
            Some(ClassRef::parameter(format!(
                "couchdb.odm.cache.{driver_type}.class"
            )))
        );
        assert!(definition.cache.call("setNamespace").is_some());
    }
}

#[test]
fn test_unrecognized_driver_is_rejected() {
    let err = resolve_cache_driver("dm", &CacheDriverConfig::of_type("redis"), "seed").unwrap_err();
    assert!(matches!(err, Error::UnsupportedCacheDriver { .. }));
    assert_eq!(err.to_string(), "\"redis\" is an unrecognized cache driver");

    assert!("Array".parse::<CacheDriverKind>().is_err());
}

#[test]
fn test_namespace_is_deterministic() {
    assert_eq!(
        cache_namespace("default", "/srv/app"),
        cache_namespace("default", "/srv/app")
    );
    assert_ne!(
        cache_namespace("default", "/srv/app"),
        cache_namespace("other", "/srv/app")
    );
    assert_ne!(
        cache_namespace("default", "/srv/app"),
        cache_namespace("default", "/srv/other")
    );
}

#[test]
fn test_namespace_is_applied_to_cache() {
    let definition =
        resolve_cache_driver("default", &CacheDriverConfig::default(), "/srv/app").unwrap();
    assert_eq!(
        definition.cache.call("setNamespace").unwrap().arguments,
        vec![Argument::value(cache_namespace("default", "/srv/app"))]
    );
}
