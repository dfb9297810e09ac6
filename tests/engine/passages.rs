//! Integration tests for passage assembly

use std::sync::Arc;

use lectern_engine::{EngineConfig, PassageQuery, Resolver, format_reference};
use lectern_foundation::{ErrorKind, ProviderId};
use lectern_providers::Provider;

use crate::support::{Counting, resolver};

fn offline() -> Resolver {
    Resolver::new(EngineConfig::offline()).unwrap()
}

#[tokio::test]
async fn range_is_inclusive() {
    let public = Counting::new(ProviderId::PublicEndpoint, 10);
    let resolver = resolver(EngineConfig::default(), vec![public as Arc<dyn Provider>], vec![]);

    let passage = resolver
        .resolve_passage(&PassageQuery::new("Mark", 4, 5).with_end_verse(7))
        .await
        .unwrap();
    let numbers: Vec<u32> = passage.verses.iter().map(|v| v.verse).collect();
    assert_eq!(numbers, vec![5, 6, 7]);
    assert_eq!(passage.reference, "Mark 4:5-7");
    assert_eq!(passage.translation_label, "King James Version");
}

#[tokio::test]
async fn range_is_clipped_to_chapter() {
    let passage = offline()
        .resolve_passage(&PassageQuery::new("Psalms", 117, 1).with_end_verse(40))
        .await
        .unwrap();
    assert_eq!(passage.verses.len(), 2);
    assert_eq!(passage.reference, "Psalms 117:1-40");
}

#[tokio::test]
async fn backwards_or_malformed_end_is_single_verse() {
    for end in ["3", "abc", "-1"] {
        let passage = offline()
            .resolve_passage(&PassageQuery::new("John", 3, 16).with_end_verse(end))
            .await
            .unwrap();
        assert_eq!(passage.verses.len(), 1, "end {end:?}");
        assert_eq!(passage.reference, "John 3:16");
    }
}

#[tokio::test]
async fn missing_verse_is_not_found() {
    let err = offline()
        .resolve_passage(&PassageQuery::new("John", 3, 999))
        .await
        .unwrap_err();
    match &err.kind {
        ErrorKind::VerseNotFound { reference } => assert_eq!(reference, "John 3:999"),
        other => panic!("expected VerseNotFound, got {other}"),
    }
    assert!(err.is_client_error());
}

#[tokio::test]
async fn curated_verse_text() {
    let passage = offline()
        .resolve_passage(&PassageQuery::new("1 Cor", 13, 13))
        .await
        .unwrap();
    assert!(passage.verses[0].text.contains("faith, hope, charity"));
    assert_eq!(passage.verses[0].book, "1 Corinthians");
}

#[test]
fn reference_formatting() {
    assert_eq!(format_reference("Jude", 1, 3, 3), "Jude 1:3");
    assert_eq!(format_reference("Jude", 1, 3, 5), "Jude 1:3-5");
}
