//! Registry Resolver Tests

use docwire_domain::constants::{DEFAULT_CONNECTION_ALIAS, DEFAULT_MANAGER_ALIAS};
use docwire_domain::error::Error;
use docwire_domain::value_objects::{
    Argument, CacheDriverConfig, ClientConfig, ConnectionConfig, ManagerConfig, MappingConfig,
    OdmConfig, ServiceKind,
};
use docwire_infrastructure::config::ConfigBuilder;
use docwire_infrastructure::constants::{
    PARAM_AUTO_GENERATE_PROXY_CLASSES, PARAM_CONNECTIONS, PARAM_DEFAULT_CONNECTION,
    PARAM_DEFAULT_DOCUMENT_MANAGER, PARAM_DOCUMENT_MANAGERS, PARAM_PROXY_DIR,
    PARAM_PROXY_NAMESPACE,
};
use docwire_infrastructure::di::{
    ConfiguredMappingLoader, NullMappingLoader, RegistryResolver, resolve_connections, resolve_managers, resolve_registry,
};
use serde_json::json;

fn client(names: &[&str]) -> ClientConfig {
    names.iter().fold(ClientConfig::new(), |client, name| {
        client.with_connection(*name, ConnectionConfig::new().with_option("host", *name))
    })
}

fn odm(names: &[&str]) -> OdmConfig {
    names
        .iter()
        .fold(OdmConfig::new(), |odm, name| odm.with_manager(*name, ManagerConfig::new()))
}

#[test]
fn test_first_declared_connection_is_default() {
    let resolved = resolve_connections(&client(&["b", "a"])).unwrap();
    assert_eq!(resolved.default_connection.as_deref(), Some("b"));
}

#[test]
fn test_explicit_default_connection_is_kept() {
    let resolved =
        resolve_connections(&client(&["b", "a"]).with_default_connection("a")).unwrap();
    assert_eq!(resolved.default_connection.as_deref(), Some("a"));
}

#[test]
fn test_unknown_default_connection() {
    let err = resolve_connections(&client(&["a"]).with_default_connection("missing")).unwrap_err();
    match err {
        Error::UnknownDefault { collection, name } => {
            assert_eq!(collection, "connection");
            assert_eq!(name, "missing");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unknown_default_manager() {
    let connections = resolve_connections(&client(&["a"])).unwrap();
    let err = resolve_managers(
        &odm(&["x"]).with_default_manager("y"),
        &connections,
        &NullMappingLoader,
        "seed",
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnknownDefault { ref name, .. } if name == "y"));
}

#[test]
fn test_connection_descriptor_carries_options() {
    let resolved = resolve_connections(
        &ClientConfig::new().with_connection(
            "main",
            ConnectionConfig::new()
                .with_option("host", "db.local")
                .with_option("port", 5984),
        ),
    )
    .unwrap();

    let descriptor = &resolved.connections["main"];
    assert_eq!(descriptor.id, "couchdb.client.main_connection");
    assert_eq!(descriptor.kind, ServiceKind::Connection);
    assert_eq!(
        descriptor.arguments,
        vec![Argument::value(json!({"host": "db.local", "port": 5984}))]
    );
}

#[test]
fn test_manager_inherits_default_connection() {
    let connections = resolve_connections(&client(&["a", "b"])).unwrap();
    let managers = resolve_managers(&odm(&["x"]), &connections, &NullMappingLoader, "seed").unwrap();

    let services = &managers.managers["x"];
    assert_eq!(services.connection, "a");
    assert_eq!(
        services.manager.arguments[0],
        Argument::service("couchdb.client.a_connection")
    );
}

#[test]
fn test_manager_uses_named_connection() {
    let connections = resolve_connections(&client(&["a", "b"])).unwrap();
    let config = OdmConfig::new().with_manager("x", ManagerConfig::new().with_connection("b"));
    let managers = resolve_managers(&config, &connections, &NullMappingLoader, "seed").unwrap();

    assert_eq!(managers.managers["x"].connection, "b");
}

#[test]
fn test_undeclared_connection_is_unresolved() {
    let connections = resolve_connections(&client(&["a"])).unwrap();
    let config = OdmConfig::new().with_manager("x", ManagerConfig::new().with_connection("nope"));
    let err = resolve_managers(&config, &connections, &NullMappingLoader, "seed").unwrap_err();

    match err {
        Error::UnresolvedReference {
            manager,
            connection,
        } => {
            assert_eq!(manager, "x");
            assert_eq!(connection, "nope");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_manager_without_any_connection_is_unresolved() {
    let err = RegistryResolver::new(&NullMappingLoader, "seed")
        .resolve(&ClientConfig::new(), &odm(&["x"]))
        .unwrap_err();
    assert!(matches!(err, Error::UnresolvedReference { .. }));
}

#[test]
fn test_auto_mapping_with_several_managers_conflicts() {
    let connections = resolve_connections(&client(&["a"])).unwrap();
    let config = OdmConfig::new()
        .with_manager("x", ManagerConfig::new().with_auto_mapping(true))
        .with_manager("y", ManagerConfig::new());
    let err = resolve_managers(&config, &connections, &NullMappingLoader, "seed").unwrap_err();

    match err {
        Error::ConflictingAutoMapping { manager, managers } => {
            assert_eq!(manager, "x");
            assert_eq!(managers, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_auto_mapping_with_single_manager_succeeds() {
    let connections = resolve_connections(&client(&["a"])).unwrap();
    let config = OdmConfig::new().with_manager("x", ManagerConfig::new().with_auto_mapping(true));
    assert!(resolve_managers(&config, &connections, &NullMappingLoader, "seed").is_ok());
}

#[test]
fn test_unsupported_cache_driver_aborts_resolution() {
    let config = OdmConfig::new().with_manager(
        "x",
        ManagerConfig::new().with_metadata_cache_driver(CacheDriverConfig::of_type("redis")),
    );
    let err = RegistryResolver::new(&NullMappingLoader, "seed")
        .resolve(&client(&["a"]), &config)
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedCacheDriver { ref driver_type } if driver_type == "redis"));
    assert!(err.to_string().contains("redis"));
}

#[test]
fn test_configuration_calls_in_order() {
    let connections = resolve_connections(&client(&["a"])).unwrap();
    let managers = resolve_managers(&odm(&["x"]), &connections, &NullMappingLoader, "seed").unwrap();
    let configuration = managers.managers["x"]
        .supporting("couchdb.odm.x_configuration")
        .unwrap();

    let methods: Vec<_> = configuration.calls.iter().map(|c| c.method.as_str()).collect();
    assert_eq!(
        methods,
        [
            "setDocumentNamespaces",
            "setMetadataCacheImpl",
            "setMetadataDriverImpl",
            "setProxyDir",
            "setProxyNamespace",
        ]
    );
    assert_eq!(
        configuration.call("setMetadataCacheImpl").unwrap().arguments,
        vec![Argument::service("couchdb.odm.x_metadata_cache")]
    );
    assert_eq!(
        configuration.call("setMetadataDriverImpl").unwrap().arguments,
        vec![Argument::service("couchdb.odm.x_metadata_driver")]
    );
}

#[test]
fn test_empty_configuration_yields_empty_registry() {
    let registry = RegistryResolver::new(&NullMappingLoader, "seed")
        .resolve(&ClientConfig::new(), &OdmConfig::new())
        .unwrap();

    assert!(registry.is_empty());
    assert!(registry.aliases().is_empty());
    assert!(registry.parameters().is_empty());
    assert_eq!(registry.default_connection(), None);
    assert_eq!(registry.default_manager(), None);
}

#[test]
fn test_explicit_default_with_no_connections_is_unknown() {
    let err = RegistryResolver::new(&NullMappingLoader, "seed")
        .resolve(
            &ClientConfig::new().with_default_connection("ghost"),
            &OdmConfig::new(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::UnknownDefault { .. }));
}

#[test]
fn test_registry_aliases_and_parameters() {
    let registry = RegistryResolver::new(&NullMappingLoader, "seed")
        .resolve(&client(&["b", "a"]), &odm(&["x", "y"]))
        .unwrap();

    assert_eq!(registry.default_connection(), Some("b"));
    assert_eq!(registry.default_manager(), Some("x"));
    assert_eq!(
        registry.alias(DEFAULT_CONNECTION_ALIAS),
        Some("couchdb.client.b_connection")
    );
    assert_eq!(
        registry.alias(DEFAULT_MANAGER_ALIAS),
        Some("couchdb.odm.x_document_manager")
    );
    assert_eq!(
        registry.resolve(DEFAULT_MANAGER_ALIAS).unwrap().kind,
        ServiceKind::Manager
    );

    assert_eq!(
        registry.parameter(PARAM_CONNECTIONS),
        Some(&json!({
            "b": "couchdb.client.b_connection",
            "a": "couchdb.client.a_connection",
        }))
    );
    assert_eq!(registry.parameter(PARAM_DEFAULT_CONNECTION), Some(&json!("b")));
    assert_eq!(
        registry.parameter(PARAM_DOCUMENT_MANAGERS),
        Some(&json!({
            "x": "couchdb.odm.x_document_manager",
            "y": "couchdb.odm.y_document_manager",
        }))
    );
    assert_eq!(registry.parameter(PARAM_DEFAULT_DOCUMENT_MANAGER), Some(&json!("x")));
    assert_eq!(
        registry.parameter(PARAM_PROXY_NAMESPACE),
        Some(&json!("CouchDBProxies"))
    );
    assert!(registry.parameter(PARAM_PROXY_DIR).is_some());
    assert_eq!(
        registry.parameter(PARAM_AUTO_GENERATE_PROXY_CLASSES),
        Some(&json!(false))
    );
}

#[test]
fn test_registry_holds_one_graph_per_manager() {
    let registry = RegistryResolver::new(&NullMappingLoader, "seed")
        .resolve(&client(&["a"]), &odm(&["x", "y"]))
        .unwrap();

    assert_eq!(registry.services_of_kind(ServiceKind::Manager).count(), 2);
    assert_eq!(registry.services_of_kind(ServiceKind::Connection).count(), 1);
    for manager in ["x", "y"] {
        for id in [
            format!("couchdb.odm.{manager}_configuration"),
            format!("couchdb.odm.{manager}_metadata_cache"),
            format!("couchdb.odm.{manager}_metadata_driver"),
            format!("couchdb.odm.{manager}_connection.event_manager"),
            format!("couchdb.odm.{manager}_document_manager"),
        ] {
            assert!(registry.contains(&id), "{id}");
        }
    }
}

#[test]
fn test_every_reference_points_into_the_registry() {
    let registry = RegistryResolver::new(&NullMappingLoader, "seed")
        .resolve(
            &client(&["a"]),
            &OdmConfig::new().with_manager(
                "x",
                ManagerConfig::new()
                    .with_metadata_cache_driver(CacheDriverConfig::memcache("h", 1)),
            ),
        )
        .unwrap();

    for service in registry.services().values() {
        for reference in service.service_references() {
            assert!(registry.contains(reference), "{} -> {reference}", service.id);
        }
    }
}

#[test]
fn test_resolve_registry_follows_kernel_settings() {
    let config = ConfigBuilder::new()
        .with_kernel(docwire_infrastructure::config::KernelConfig {
            debug: true,
            namespace_seed: Some("install-1".to_string()),
            ..Default::default()
        })
        .with_client(client(&["a"]))
        .with_odm(odm(&["x"]))
        .build();

    let first = resolve_registry(&config, &NullMappingLoader).unwrap();
    let second = resolve_registry(&config, &NullMappingLoader).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.parameter(PARAM_AUTO_GENERATE_PROXY_CLASSES),
        Some(&json!(true))
    );
}

#[test]
fn test_explicit_proxy_generation_overrides_debug() {
    let mut config = odm(&["x"]);
    config.auto_generate_proxy_classes = Some(false);

    let registry = RegistryResolver::new(&NullMappingLoader, "seed")
        .with_debug(true)
        .resolve(&client(&["a"]), &config)
        .unwrap();
    assert_eq!(
        registry.parameter(PARAM_AUTO_GENERATE_PROXY_CLASSES),
        Some(&json!(false))
    );
}

#[test]
fn test_manager_name_suffix_does_not_clash_with_typed_driver() {
    let config = OdmConfig::new()
        .with_manager(
            "a",
            ManagerConfig::new()
                .with_mapping("Models", MappingConfig::directory("xml", "/srv/models", "App")),
        )
        .with_manager("a_xml", ManagerConfig::new());

    let registry = RegistryResolver::new(&ConfiguredMappingLoader::new(), "seed")
        .resolve(&client(&["main"]), &config)
        .unwrap();

    assert!(registry.contains("couchdb.odm.a_metadata_driver.xml"));
    assert!(registry.contains("couchdb.odm.a_xml_metadata_driver"));
    assert_eq!(registry.services_of_kind(ServiceKind::Manager).count(), 2);
}
