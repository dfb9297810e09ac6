//! Integration tests for request normalization

use std::sync::Arc;

use lectern_engine::{ChapterQuery, EngineConfig, PassageQuery, Resolver};
use lectern_foundation::{Error, ErrorKind, LanguageTrack, ProviderId};
use lectern_providers::Provider;

use crate::support::{Counting, resolver};

fn field_of(err: &Error) -> &'static str {
    match err.kind {
        ErrorKind::InvalidRequest { field, .. } => field,
        _ => panic!("expected InvalidRequest, got {err}"),
    }
}

#[tokio::test]
async fn malformed_chapters_never_reach_providers() {
    let public = Counting::new(ProviderId::PublicEndpoint, 5);
    let resolver = resolver(EngineConfig::default(), vec![public.clone() as Arc<dyn Provider>], vec![]);

    for chapter in ["abc", "0", "-3", "2.5", "", "NaN", "inf"] {
        let err = resolver
            .resolve_chapter(&ChapterQuery::new("John", chapter))
            .await
            .unwrap_err();
        assert_eq!(field_of(&err), "chapter", "chapter {chapter:?}");
        assert!(err.is_client_error());
    }
    assert_eq!(public.calls(), 0);
}

#[tokio::test]
async fn blank_book_is_rejected() {
    let resolver = Resolver::new(EngineConfig::offline()).unwrap();
    let err = resolver.resolve_chapter(&ChapterQuery::new("  ", 1)).await.unwrap_err();
    assert_eq!(field_of(&err), "book");
}

#[test]
fn integral_floats_are_accepted() {
    let resolver = Resolver::new(EngineConfig::offline()).unwrap();
    let request = resolver
        .normalizer()
        .normalize_passage(&PassageQuery::new("John", "3.0", " 16 "))
        .unwrap();
    assert_eq!(request.chapter(), 3);
    assert_eq!(request.verse(), Some(16));
}

#[test]
fn unknown_version_falls_back_to_default() {
    let resolver = Resolver::new(EngineConfig::offline().with_default_version("web")).unwrap();
    let request = resolver
        .normalizer()
        .normalize_chapter(&ChapterQuery::new("John", 3).with_version("NIV"))
        .unwrap();
    assert_eq!(request.version().code(), "WEB");
    assert_eq!(request.language_track(), LanguageTrack::Source);
}

#[test]
fn unknown_default_version_is_rejected() {
    let err = Resolver::new(EngineConfig::offline().with_default_version("NIV")).unwrap_err();
    assert_eq!(field_of(&err), "default_version");
}

#[tokio::test]
async fn unknown_book_is_synthesized() {
    let public = Counting::new(ProviderId::PublicEndpoint, 5);
    let resolver = resolver(EngineConfig::default(), vec![public.clone() as Arc<dyn Provider>], vec![]);

    let chapter = resolver.resolve_chapter(&ChapterQuery::new("Jasher", 2)).await.unwrap();
    assert_eq!(chapter.book, "Jasher");
    assert!(!chapter.verses.is_empty());
}
