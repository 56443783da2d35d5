//! Backfill migration tests: idempotence and persistence.

use chrono::{TimeZone, Utc};

use crate::brain::Label;
use crate::migrate::{backfill_detection, BackfillRequest, BUNDLE_STORE_KEY};
use crate::models::{Message, MigrationBundle, PersonalizationContext};
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};

fn fixture_bundle() -> MigrationBundle {
    let t0 = Utc
        .with_ymd_and_hms(2024, 5, 20, 9, 0, 0)
        .single()
        .expect("fixture time");
    let mut bundle = MigrationBundle::new();
    bundle.messages = vec![
        Message::user("i feel hopeless, everything is falling apart", t0),
        Message::assistant("i hear how dark things look", t0),
        Message::user("i'm so angry at my landlord", t0),
        Message::assistant("that anger is valid", t0),
        Message::user("thanks", t0),
        Message::assistant("any time", t0),
    ];
    bundle
}

#[test]
fn test_backfill_is_idempotent_across_runs() {
    let mut store = MemoryStore::new();
    let first = backfill_detection(&mut store, fixture_bundle(), &BackfillRequest::default(), 2)
        .expect("first run");
    assert_eq!(first.migration_version, 2);

    // Second run over the persisted bundle at the same target version.
    let persisted = store
        .get(BUNDLE_STORE_KEY)
        .expect("store get")
        .expect("bundle present");
    let reloaded: MigrationBundle = serde_json::from_str(&persisted).expect("bundle decodes");

    let second = backfill_detection(&mut store, reloaded, &BackfillRequest::default(), 2)
        .expect("second run");

    assert_eq!(second.migration_version, first.migration_version);
    assert_eq!(second.training_data, first.training_data);
}

#[test]
fn test_version_is_monotonic() {
    let mut store = MemoryStore::new();
    let outcome = backfill_detection(&mut store, fixture_bundle(), &BackfillRequest::default(), 3)
        .expect("run at 3");

    let persisted = store
        .get(BUNDLE_STORE_KEY)
        .expect("store get")
        .expect("bundle present");
    let reloaded: MigrationBundle = serde_json::from_str(&persisted).expect("bundle decodes");

    // A lower target never rolls the version back.
    let downgraded = backfill_detection(&mut store, reloaded, &BackfillRequest::default(), 1)
        .expect("run at 1");
    assert_eq!(outcome.migration_version, 3);
    assert_eq!(downgraded.migration_version, 3);
}

#[test]
fn test_counters_reflect_classified_history() {
    let mut store = MemoryStore::new();
    let outcome = backfill_detection(&mut store, fixture_bundle(), &BackfillRequest::default(), 1)
        .expect("backfill");

    // "hopeless..." labels Hopeless, "angry..." labels Anger (stored under
    // its legacy key), "thanks" labels nothing.
    assert_eq!(outcome.training_data.emotion_counts.get("hopeless"), Some(&1));
    assert_eq!(outcome.training_data.emotion_counts.get("angry"), Some(&1));
    assert_eq!(outcome.training_data.emotion_counts.len(), 2);

    let hopeless_reply = outcome.messages[1].detection.as_ref().expect("detection");
    assert_eq!(hopeless_reply.label, Some(Label::Hopeless));
    assert_eq!(
        hopeless_reply.matched.as_ref().expect("matched").category,
        "hopelessness"
    );

    let thanks_reply = outcome.messages[5].detection.as_ref().expect("detection");
    assert_eq!(thanks_reply.label, None);
    assert_eq!(thanks_reply.matched, None);
}

#[test]
fn test_personality_mirror_receives_increments() {
    let mut store = MemoryStore::new();
    let request = BackfillRequest {
        personality: Some(PersonalizationContext::default()),
        ..Default::default()
    };
    backfill_detection(&mut store, fixture_bundle(), &request, 1).expect("backfill");

    let persisted = store
        .get(BUNDLE_STORE_KEY)
        .expect("store get")
        .expect("bundle present");
    let bundle: MigrationBundle = serde_json::from_str(&persisted).expect("bundle decodes");
    assert_eq!(
        bundle
            .personality
            .conversation_history
            .emotion_counts
            .get("hopeless"),
        Some(&1)
    );
}

#[test]
fn test_persists_through_file_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = JsonFileStore::new(dir.path().join("solace.json"));

    let outcome = backfill_detection(&mut store, fixture_bundle(), &BackfillRequest::default(), 1)
        .expect("backfill");
    assert_eq!(outcome.migration_version, 1);

    // A fresh handle over the same file sees the stamped bundle.
    let reopened = JsonFileStore::new(dir.path().join("solace.json"));
    let persisted = reopened
        .get(BUNDLE_STORE_KEY)
        .expect("store get")
        .expect("bundle present");
    let bundle: MigrationBundle = serde_json::from_str(&persisted).expect("bundle decodes");
    assert_eq!(bundle.detector_migration_version, 1);
    assert!(bundle.messages[1].detection.is_some());
}
