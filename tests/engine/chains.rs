//! Integration tests for tier ordering, disabled tracks and fallback

use std::sync::Arc;
use std::time::Duration;

use lectern_engine::{ChapterQuery, EngineConfig, Resolver};
use lectern_foundation::{ErrorKind, LanguageTrack, ProviderId, is_canonical_chapter};
use lectern_providers::Provider;
use tokio_util::sync::CancellationToken;

use crate::support::{Counting, Sleeper, resolver};

// =============================================================================
// Standard chains
// =============================================================================

#[test]
fn standard_chain_order() {
    let resolver = Resolver::new(EngineConfig::default()).unwrap();
    assert_eq!(
        resolver.chain(LanguageTrack::Source).ids(),
        vec![ProviderId::PublicEndpoint]
    );
    assert_eq!(
        resolver.chain(LanguageTrack::Translated).ids(),
        vec![ProviderId::KeyedApi, ProviderId::PublicEndpoint, ProviderId::Scrape]
    );
}

// =============================================================================
// Tier walk
// =============================================================================

#[tokio::test]
async fn tiers_run_in_order_until_one_succeeds() {
    let keyed = Counting::new(ProviderId::KeyedApi, 0);
    let public = Counting::new(ProviderId::PublicEndpoint, 21);
    let scrape = Counting::new(ProviderId::Scrape, 21);
    let resolver = resolver(
        EngineConfig::default(),
        vec![],
        vec![keyed.clone() as Arc<dyn Provider>, public.clone(), scrape.clone()],
    );

    let query = ChapterQuery::new("John", 1).with_version("ALMEIDA");
    let request = resolver.normalizer().normalize_chapter(&query).unwrap();
    let report = resolver.resolve(&request, &CancellationToken::new()).await.unwrap();

    assert_eq!(report.provider, Some(ProviderId::PublicEndpoint));
    assert!(!report.synthesized);
    assert_eq!(report.attempts(), 2);
    assert_eq!((keyed.calls(), public.calls(), scrape.calls()), (1, 1, 0));
    assert!(report.verses.iter().all(|v| v.text.starts_with("public")));
}

#[tokio::test]
async fn all_tiers_empty_falls_back_to_synthesis() {
    let keyed = Counting::new(ProviderId::KeyedApi, 0);
    let scrape = Counting::new(ProviderId::Scrape, 0);
    let resolver = resolver(
        EngineConfig::default(),
        vec![],
        vec![keyed.clone() as Arc<dyn Provider>, scrape.clone()],
    );

    let chapter = resolver
        .resolve_chapter(&ChapterQuery::new("Ruth", 1).with_version("RCCV"))
        .await
        .unwrap();
    assert_eq!(chapter.verses.len(), 22);
    assert!(is_canonical_chapter(&chapter.verses));
    assert_eq!(chapter.version, "RCCV");
    assert_eq!((keyed.calls(), scrape.calls()), (1, 1));
}

#[tokio::test]
async fn source_versions_use_the_source_chain() {
    let source = Counting::new(ProviderId::PublicEndpoint, 3);
    let translated = Counting::new(ProviderId::KeyedApi, 3);
    let resolver = resolver(
        EngineConfig::default(),
        vec![source.clone() as Arc<dyn Provider>],
        vec![translated.clone() as Arc<dyn Provider>],
    );

    resolver.resolve_chapter(&ChapterQuery::new("Mark", 2).with_version("WEB")).await.unwrap();
    assert_eq!((source.calls(), translated.calls()), (1, 0));
}

// =============================================================================
// Disabled providers
// =============================================================================

#[tokio::test]
async fn offline_makes_no_provider_calls() {
    let public = Counting::new(ProviderId::PublicEndpoint, 5);
    let resolver = resolver(EngineConfig::offline(), vec![public.clone() as Arc<dyn Provider>], vec![]);

    let chapter = resolver.resolve_chapter(&ChapterQuery::new("Psalms", 23)).await.unwrap();
    assert_eq!(public.calls(), 0);
    assert_eq!(chapter.verses[0].text, "The LORD is my shepherd; I shall not want.");
}

#[tokio::test]
async fn disabled_track_skips_only_that_track() {
    let source = Counting::new(ProviderId::PublicEndpoint, 5);
    let translated = Counting::new(ProviderId::KeyedApi, 5);
    let config = EngineConfig::default().with_disabled_track(LanguageTrack::Translated);
    let resolver = resolver(
        config,
        vec![source.clone() as Arc<dyn Provider>],
        vec![translated.clone() as Arc<dyn Provider>],
    );

    let almeida = resolver
        .resolve_chapter(&ChapterQuery::new("John", 3).with_version("ALMEIDA"))
        .await
        .unwrap();
    assert_eq!(translated.calls(), 0);
    assert_eq!(almeida.verses.len(), 36);

    resolver.resolve_chapter(&ChapterQuery::new("John", 3)).await.unwrap();
    assert_eq!(source.calls(), 1);
}

// =============================================================================
// Deadline and cancellation
// =============================================================================

#[tokio::test]
async fn deadline_falls_back_to_synthesis() {
    let config = EngineConfig::default().with_request_deadline(Some(Duration::from_millis(50)));
    let resolver = resolver(config, vec![Arc::new(Sleeper) as Arc<dyn Provider>], vec![]);

    let request = resolver
        .normalizer()
        .normalize_chapter(&ChapterQuery::new("Jude", 1))
        .unwrap();
    let report = resolver.resolve(&request, &CancellationToken::new()).await.unwrap();
    assert!(report.synthesized);
    assert_eq!(
        report.outcomes.last().and_then(|o| o.failure_reason.as_deref()),
        Some("overall deadline exceeded")
    );
}

#[tokio::test]
async fn cancelled_token_stops_resolution() {
    let public = Counting::new(ProviderId::PublicEndpoint, 5);
    let resolver = resolver(EngineConfig::default(), vec![public.clone() as Arc<dyn Provider>], vec![]);

    let token = CancellationToken::new();
    token.cancel();
    let err = resolver
        .resolve_chapter_with_cancel(&ChapterQuery::new("John", 3), &token)
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Cancelled));
    assert_eq!(public.calls(), 0);
}

#[tokio::test]
async fn cancellation_interrupts_a_slow_tier() {
    let resolver = Arc::new(resolver(
        EngineConfig::default().with_request_deadline(None),
        vec![Arc::new(Sleeper) as Arc<dyn Provider>],
        vec![],
    ));
    let token = CancellationToken::new();

    let task = {
        let resolver = Arc::clone(&resolver);
        let token = token.clone();
        tokio::spawn(async move {
            resolver
                .resolve_chapter_with_cancel(&ChapterQuery::new("John", 3), &token)
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    token.cancel();

    let err = task.await.unwrap().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Cancelled));
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_share_one_resolver() {
    let public = Counting::new(ProviderId::PublicEndpoint, 7);
    let resolver = Arc::new(resolver(
        EngineConfig::default(),
        vec![public.clone() as Arc<dyn Provider>],
        vec![],
    ));

    let tasks: Vec<_> = (1..=16)
        .map(|chapter| {
            let resolver = Arc::clone(&resolver);
            tokio::spawn(async move { resolver.resolve_chapter(&ChapterQuery::new("Genesis", chapter)).await })
        })
        .collect();

    for (task, chapter) in tasks.into_iter().zip(1u32..) {
        let response = task.await.unwrap().unwrap();
        assert_eq!(response.chapter, chapter);
        assert_eq!(response.verses.len(), 7);
    }
    assert_eq!(public.calls(), 16);
}
