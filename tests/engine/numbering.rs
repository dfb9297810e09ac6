//! Integration tests for provider verse numbers surviving resolution

use std::sync::Arc;

use lectern_engine::{ChapterQuery, EngineConfig, PassageQuery, Resolver};
use lectern_foundation::ProviderId;
use lectern_providers::Provider;

use crate::support::{Scripted, resolver};

fn texts(verses: &[lectern_foundation::Verse]) -> Vec<(u32, &str)> {
    verses.iter().map(|v| (v.verse, v.text.as_str())).collect()
}

// =============================================================================
// Complete chapters in any order
// =============================================================================

#[tokio::test]
async fn out_of_order_chapter_keeps_each_text_on_its_verse() {
    let shuffled = Scripted::new(ProviderId::PublicEndpoint, &[3, 1, 5, 2, 4]);
    let resolver = resolver(EngineConfig::default(), vec![shuffled as Arc<dyn Provider>], vec![]);

    let passage = resolver
        .resolve_passage(&PassageQuery::new("Jude", 1, 2).with_end_verse(4))
        .await
        .unwrap();

    assert_eq!(
        texts(&passage.verses),
        vec![(2, "text of 2"), (3, "text of 3"), (4, "text of 4")]
    );
}

// =============================================================================
// Gapped and partial chapters
// =============================================================================

#[tokio::test]
async fn partial_chapter_is_never_relabelled() {
    let partial = Scripted::new(ProviderId::PublicEndpoint, &[20, 22, 23]);
    let scripted = resolver(EngineConfig::default(), vec![partial as Arc<dyn Provider>], vec![]);
    let offline = Resolver::new(EngineConfig::offline()).unwrap();

    let first = scripted.resolve_passage(&PassageQuery::new("Matthew", 17, 1)).await.unwrap();
    assert!(first.verses.iter().all(|v| v.text != "text of 20"));

    let twenty_two = scripted.resolve_passage(&PassageQuery::new("Matthew", 17, 22)).await.unwrap();
    let expected = offline.resolve_passage(&PassageQuery::new("Matthew", 17, 22)).await.unwrap();
    assert_eq!(twenty_two.verses, expected.verses);
}

#[tokio::test]
async fn omitted_verse_moves_on_to_a_complete_tier() {
    let modern = Scripted::new(ProviderId::KeyedApi, &[19, 20, 22, 23]);
    let complete = Scripted::new(ProviderId::PublicEndpoint, &(1..=27).collect::<Vec<_>>());
    let resolver = resolver(
        EngineConfig::default(),
        vec![],
        vec![modern as Arc<dyn Provider>, complete as Arc<dyn Provider>],
    );

    let passage = resolver
        .resolve_passage(&PassageQuery::new("Matthew", 17, 20).with_end_verse(22).with_version("ALMEIDA"))
        .await
        .unwrap();

    assert_eq!(
        texts(&passage.verses),
        vec![(20, "text of 20"), (21, "text of 21"), (22, "text of 22")]
    );
}

#[tokio::test]
async fn chapter_missing_its_opening_verse_is_synthesized() {
    let late_start = Scripted::new(ProviderId::PublicEndpoint, &[2, 3, 4]);
    let resolver = resolver(EngineConfig::default(), vec![late_start as Arc<dyn Provider>], vec![]);

    let chapter = resolver.resolve_chapter(&ChapterQuery::new("Jude", 1)).await.unwrap();

    assert_eq!(chapter.verses.len(), 25);
    assert_eq!(chapter.verses[0].verse, 1);
    assert!(chapter.verses.iter().all(|v| !v.text.starts_with("text of")));
}
