//! Shared fixtures for provider tests

use std::sync::Arc;
use std::time::Duration;

use lectern_catalog::{BookDescriptor, Catalog, Version, VersionRegistry};
use lectern_providers::{TransportConfig, build_client};

pub fn book(name: &str) -> Arc<BookDescriptor> {
    Catalog::standard().unwrap().resolve(name)
}

pub fn version(code: &str) -> Version {
    VersionRegistry::standard().get(code).unwrap().clone()
}

pub fn transport(base_url: &str) -> TransportConfig {
    TransportConfig::default()
        .with_base_url(base_url)
        .with_timeout(Duration::from_millis(500))
}

pub fn client(config: &TransportConfig) -> reqwest::Client {
    build_client(config).unwrap()
}
