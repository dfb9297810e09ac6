//! Integration tests for the keyed API adapter

use lectern_foundation::ProviderId;
use lectern_providers::{ChapterRequest, KeyedApiAdapter, Provider};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::{book, client, transport, version};

fn adapter(server: &MockServer, key: Option<&str>) -> KeyedApiAdapter {
    let config = transport(&server.uri());
    KeyedApiAdapter::new(client(&config), &config, key.map(String::from))
}

#[tokio::test]
async fn sends_key_and_parses_references() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/bibles/por-almeida/chapters/John.3/verses"))
        .and(header("api-key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"verses": [
                {"reference": "John.3:16", "text": "Porque Deus amou o mundo"},
                {"reference": "John.3:17", "text": "Porque Deus enviou o seu Filho"}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (john, almeida) = (book("John"), version("ALMEIDA"));
    let outcome = adapter(&server, Some("secret"))
        .fetch_chapter(&ChapterRequest::new(&john, 3, &almeida))
        .await;

    assert!(outcome.succeeded());
    assert_eq!(outcome.provider, ProviderId::KeyedApi);
    let numbers: Vec<u32> = outcome.verses.iter().map(|v| v.verse).collect();
    assert_eq!(numbers, vec![16, 17]);
    assert!(outcome.verses.iter().all(|v| v.version == "ALMEIDA"));
}

#[tokio::test]
async fn no_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (john, almeida) = (book("John"), version("ALMEIDA"));
    for key in [None, Some("   ")] {
        let adapter = adapter(&server, key);
        assert!(!adapter.has_api_key());
        let outcome = adapter.fetch_chapter(&ChapterRequest::new(&john, 3, &almeida)).await;
        assert_eq!(outcome.failure_reason.as_deref(), Some("no API key configured"));
    }
}

#[tokio::test]
async fn rejected_key_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (john, almeida) = (book("John"), version("ALMEIDA"));
    let outcome = adapter(&server, Some("wrong"))
        .fetch_chapter(&ChapterRequest::new(&john, 3, &almeida))
        .await;
    assert!(!outcome.succeeded());
    assert!(outcome.failure_reason.unwrap().contains("401"));
}

#[tokio::test]
async fn source_versions_are_not_carried() {
    let server = MockServer::start().await;
    let (john, kjv) = (book("John"), version("KJV"));
    let outcome = adapter(&server, Some("secret"))
        .fetch_chapter(&ChapterRequest::new(&john, 3, &kjv))
        .await;
    assert!(!outcome.succeeded());
    assert!(outcome.failure_reason.unwrap().contains("not carried"));
}

#[test]
fn debug_hides_key() {
    let config = lectern_providers::TransportConfig::default();
    let adapter = KeyedApiAdapter::new(client(&config), &config, Some("hunter2".into()));
    assert!(!format!("{adapter:?}").contains("hunter2"));
}
