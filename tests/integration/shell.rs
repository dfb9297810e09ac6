//! Typed references through the session layer

use lectern_engine::EngineConfig;
use lectern_runtime::{OutputFormat, Reference, ReferenceParser, Resolved, Session};

fn session() -> Session {
    Session::new(EngineConfig::offline()).unwrap()
}

#[test]
fn chapter_lookup_renders_text() {
    let out = session().lookup("psalm 117").unwrap();
    assert_eq!(
        out,
        "Psalms 117 (King James Version)\n\
         1 O praise the LORD, all ye nations: praise him, all ye people.\n\
         2 For his merciful kindness is great toward us: and the truth of the LORD endureth for ever. Praise ye the LORD.\n"
    );
}

#[test]
fn passage_lookup_with_en_dash() {
    let parser = ReferenceParser::new().unwrap();
    let reference = parser.parse("1 Cor 13:4\u{2013}7").unwrap();
    assert!(matches!(reference, Reference::Passage(_)));

    let resolved = session().resolve(reference).unwrap();
    assert_eq!(resolved.verse_count(), 4);
    assert!(resolved.to_string().starts_with("1 Corinthians 13:4-7 (King James Version)\n4 Charity"));
}

#[test]
fn version_switch_and_json() {
    let mut session = session();
    session.set_version("clementine").unwrap();
    session.set_format(OutputFormat::Json);

    let out = session.lookup("Jn 1:1").unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["reference"], "John 1:1");
    assert_eq!(value["translationLabel"], "Clementine Latin Vulgate");
    assert_eq!(value["verses"][0]["version"], "CLEMENTINE");
}

#[test]
fn client_errors_surface_from_lookup() {
    let session = session();
    assert!(session.lookup("John").unwrap_err().is_client_error());
    assert!(session.lookup("John 3:999").unwrap_err().is_client_error());
}

#[test]
fn resolved_chapter_matches_engine() {
    let session = session();
    let resolved = session.resolve(session.parse("Ruth 2").unwrap()).unwrap();
    match resolved {
        Resolved::Chapter(chapter) => {
            assert_eq!(chapter.book, "Ruth");
            assert_eq!(chapter.verses.len(), 23);
        }
        Resolved::Passage(_) => panic!("expected a chapter"),
    }
}
