//! Integration tests for the public endpoint adapter

use std::time::Duration;

use lectern_foundation::ProviderId;
use lectern_providers::{ChapterRequest, Provider, PublicEndpointAdapter};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::{book, client, transport, version};

fn adapter(server: &MockServer) -> PublicEndpointAdapter {
    let config = transport(&server.uri());
    PublicEndpointAdapter::new(client(&config), &config)
}

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn fetches_chapter_by_usfm_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/kjv/JHN/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "verses": [
                {"verse": 1, "text": "There was a man of the Pharisees, named Nicodemus,"},
                {"verse": 2, "text": "The same came to Jesus by night,"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (john, kjv) = (book("John"), version("KJV"));
    let outcome = adapter(&server).fetch_chapter(&ChapterRequest::new(&john, 3, &kjv)).await;

    assert!(outcome.succeeded());
    assert_eq!(outcome.provider, ProviderId::PublicEndpoint);
    assert_eq!(outcome.verses.len(), 2);
    assert_eq!(outcome.verses[1].verse, 2);
    assert_eq!(outcome.verses[0].book, "John");
    assert_eq!(outcome.verses[0].version, "KJV");
}

#[tokio::test]
async fn missing_verse_numbers_follow_position() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/oeb-us/PSA/117"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "verses": [{"text": "first"}, {"text": "second"}]
        })))
        .mount(&server)
        .await;

    let (psalms, oeb) = (book("Psalms"), version("OEB"));
    let outcome = adapter(&server).fetch_chapter(&ChapterRequest::new(&psalms, 117, &oeb)).await;
    let numbers: Vec<u32> = outcome.verses.iter().map(|v| v.verse).collect();
    assert_eq!(numbers, vec![1, 2]);
}

// =============================================================================
// Failures become empty outcomes
// =============================================================================

#[tokio::test]
async fn server_error_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (john, kjv) = (book("John"), version("KJV"));
    let outcome = adapter(&server).fetch_chapter(&ChapterRequest::new(&john, 3, &kjv)).await;
    assert!(!outcome.succeeded());
    assert!(outcome.failure_reason.unwrap().contains("500"));
}

#[tokio::test]
async fn malformed_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let (john, kjv) = (book("John"), version("KJV"));
    let outcome = adapter(&server).fetch_chapter(&ChapterRequest::new(&john, 3, &kjv)).await;
    assert!(!outcome.succeeded());
}

#[tokio::test]
async fn empty_verse_list_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"verses": []})))
        .mount(&server)
        .await;

    let (john, kjv) = (book("John"), version("KJV"));
    let outcome = adapter(&server).fetch_chapter(&ChapterRequest::new(&john, 3, &kjv)).await;
    assert!(!outcome.succeeded());
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"verses": [{"verse": 1, "text": "late"}]}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let (john, kjv) = (book("John"), version("KJV"));
    let outcome = adapter(&server).fetch_chapter(&ChapterRequest::new(&john, 3, &kjv)).await;
    assert!(!outcome.succeeded());
    assert!(outcome.failure_reason.unwrap().contains("timed out"));
}

#[tokio::test]
async fn unlisted_book_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (enoch, kjv) = (book("Enoch"), version("KJV"));
    let outcome = adapter(&server).fetch_chapter(&ChapterRequest::new(&enoch, 1, &kjv)).await;
    assert!(!outcome.succeeded());
}
