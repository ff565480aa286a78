//! Service id layout
//!
//! Every id is derived from the shared prefix and the name of the entry it
//! belongs to, so two resolutions of the same configuration produce the
//! same ids.

use docwire_domain::constants::SERVICE_PREFIX;

/// Connection service of a named connection
pub fn connection_id(name: &str) -> String {
    format!("{SERVICE_PREFIX}.client.{name}_connection")
}

/// ODM configuration service of a document manager
pub fn configuration_id(manager: &str) -> String {
    format!("{SERVICE_PREFIX}.odm.{manager}_configuration")
}

/// Metadata cache service of a document manager
pub fn metadata_cache_id(manager: &str) -> String {
    format!("{SERVICE_PREFIX}.odm.{manager}_metadata_cache")
}

/// Memcache client instance backing a document manager's metadata cache
pub fn memcache_instance_id(manager: &str) -> String {
    format!("{SERVICE_PREFIX}.odm.{manager}_memcache_instance")
}

/// Metadata driver (chain) of a document manager
pub fn metadata_driver_id(manager: &str) -> String {
    format!("{SERVICE_PREFIX}.odm.{manager}_metadata_driver")
}

/// Metadata driver of one mapping type within a document manager
///
/// The type follows a `.` after the chain id. No other id ends in a mapping
/// type, so manager names cannot produce a clash.
pub fn typed_metadata_driver_id(manager: &str, mapping_type: &str) -> String {
    format!("{}.{mapping_type}", metadata_driver_id(manager))
}

/// Event manager of a document manager
pub fn event_manager_id(manager: &str) -> String {
    format!("{SERVICE_PREFIX}.odm.{manager}_connection.event_manager")
}

/// Document manager service
pub fn document_manager_id(manager: &str) -> String {
    format!("{SERVICE_PREFIX}.odm.{manager}_document_manager")
}

/// Class parameter of a single-descriptor cache driver type
pub fn cache_class_parameter(driver_type: &str) -> String {
    format!("{SERVICE_PREFIX}.odm.cache.{driver_type}.class")
}

/// Class parameter of a metadata driver type
pub fn metadata_driver_class_parameter(mapping_type: &str) -> String {
    format!("{SERVICE_PREFIX}.odm.metadata.{mapping_type}.class")
}
