//! Integration tests for the version registry

use lectern_catalog::{Version, VersionRegistry};
use lectern_foundation::{ErrorKind, LanguageTrack, ProviderId};

#[test]
fn standard_versions_and_tracks() {
    let registry = VersionRegistry::standard();
    let source: Vec<&str> = registry
        .iter()
        .filter(|v| v.track() == LanguageTrack::Source)
        .map(Version::code)
        .collect();
    assert_eq!(source, vec!["KJV", "WEB", "BBE", "OEB"]);

    let translated: Vec<&str> = registry
        .iter()
        .filter(|v| v.track() == LanguageTrack::Translated)
        .map(Version::code)
        .collect();
    assert_eq!(translated, vec!["ALMEIDA", "RCCV", "CLEMENTINE"]);
}

#[test]
fn lookup_is_case_insensitive() {
    let registry = VersionRegistry::standard();
    let version = registry.get(" almeida ").unwrap();
    assert_eq!(version.code(), "ALMEIDA");
    assert_eq!(version.label(), "João Ferreira de Almeida");
    assert_eq!(version.translation_id(ProviderId::KeyedApi), Some("por-almeida"));
}

#[test]
fn unknown_code_falls_back_to_default() {
    let registry = VersionRegistry::standard();
    assert_eq!(registry.resolve(Some("NIV"), "KJV").unwrap().code(), "KJV");
    assert_eq!(registry.resolve(None, "web").unwrap().code(), "WEB");
}

#[test]
fn unregistered_default_is_an_error() {
    let registry = VersionRegistry::standard();
    let err = registry.resolve(None, "NIV").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidCatalog(_)));
}

#[test]
fn duplicate_codes_rejected() {
    let versions = vec![
        Version::new("KJV", "One", LanguageTrack::Source),
        Version::new("KJV", "Two", LanguageTrack::Source),
    ];
    assert!(VersionRegistry::new(versions).is_err());
    assert!(VersionRegistry::new(Vec::new()).is_err());
}
