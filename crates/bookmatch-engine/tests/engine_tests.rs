// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the matching engine over real SQLite storage.

use std::sync::Arc;
use std::time::Duration;

use bookmatch_config::model::StorageConfig;
use bookmatch_core::{
    DecisionAction, DecisionStore, MatchStore, NewBook, NewUser, UserId, UserStore,
};
use bookmatch_engine::{CandidateSelector, DecisionOutcome, MatchEngine};
use bookmatch_storage::SqliteStorage;
use bookmatch_test_utils::MockTransport;
use tempfile::TempDir;

const ALICE: UserId = UserId(1);
const BOB: UserId = UserId(2);

struct Harness {
    storage: Arc<SqliteStorage>,
    transport: Arc<MockTransport>,
    engine: MatchEngine,
    selector: CandidateSelector,
    _dir: TempDir,
}

async fn setup() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        database_path: dir.path().join("engine.db").to_str().unwrap().to_string(),
        wal_mode: true,
    };
    let storage = Arc::new(SqliteStorage::open(&config).await.unwrap());
    let transport = Arc::new(MockTransport::new());

    let engine = MatchEngine::new(
        storage.clone(),
        storage.clone(),
        storage.clone(),
        transport.clone(),
    );
    let selector = CandidateSelector::new(storage.clone(), storage.clone());

    Harness {
        storage,
        transport,
        engine,
        selector,
        _dir: dir,
    }
}

async fn register(storage: &SqliteStorage, id: UserId, name: &str, username: Option<&str>) {
    storage
        .create_user(&NewUser {
            id,
            username: username.map(str::to_string),
            first_name: name.to_string(),
            language: Default::default(),
        })
        .await
        .unwrap();
    storage
        .add_book(
            id,
            &NewBook {
                title: format!("{name}'s book"),
                author: "An Author".into(),
                condition: None,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn one_sided_like_does_not_match() {
    let h = setup().await;
    register(&h.storage, ALICE, "Alice", Some("alice")).await;
    register(&h.storage, BOB, "Bob", Some("bob")).await;

    let outcome = h
        .engine
        .record_decision(ALICE, BOB, DecisionAction::Like)
        .await
        .unwrap();
    assert_eq!(outcome, DecisionOutcome::NoMatch);
    assert!(h.storage.matches_for(ALICE).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn mutual_like_creates_exactly_one_match_and_notifies() {
    let h = setup().await;
    register(&h.storage, ALICE, "Alice", Some("alice")).await;
    register(&h.storage, BOB, "Bob", None).await;

    h.engine
        .record_decision(ALICE, BOB, DecisionAction::Like)
        .await
        .unwrap();
    let outcome = h
        .engine
        .record_decision(BOB, ALICE, DecisionAction::Like)
        .await
        .unwrap();

    let DecisionOutcome::Matched {
        newly_created: true,
        ..
    } = outcome
    else {
        panic!("expected a fresh match, got {outcome:?}");
    };

    assert_eq!(h.storage.matches_for(ALICE).await.unwrap().len(), 1);
    assert_eq!(h.storage.matches_for(BOB).await.unwrap().len(), 1);

    // The non-initiating party (Alice) is notified from a spawned task.
    tokio::time::sleep(Duration::from_millis(200)).await;
    let direct = h.transport.direct_messages().await;
    assert_eq!(direct.len(), 1);
    assert_eq!(direct[0].0, ALICE);
    assert!(direct[0].1.contains("Bob"), "notification names the liker");
}

#[tokio::test(flavor = "multi_thread")]
async fn match_detection_is_symmetric_in_like_order() {
    let h = setup().await;
    register(&h.storage, ALICE, "Alice", Some("alice")).await;
    register(&h.storage, BOB, "Bob", Some("bob")).await;

    // Reversed order relative to the other test: B likes first.
    h.engine
        .record_decision(BOB, ALICE, DecisionAction::Like)
        .await
        .unwrap();
    let outcome = h
        .engine
        .record_decision(ALICE, BOB, DecisionAction::Like)
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        DecisionOutcome::Matched {
            newly_created: true,
            ..
        }
    ));
    assert_eq!(h.storage.matches_for(ALICE).await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_like_inserts_nothing_and_still_reports_match() {
    let h = setup().await;
    register(&h.storage, ALICE, "Alice", Some("alice")).await;
    register(&h.storage, BOB, "Bob", Some("bob")).await;

    h.engine
        .record_decision(ALICE, BOB, DecisionAction::Like)
        .await
        .unwrap();
    h.engine
        .record_decision(BOB, ALICE, DecisionAction::Like)
        .await
        .unwrap();

    // A repeated like after the match: no new decision row, no new match,
    // but the caller still learns the pair is matched.
    let outcome = h
        .engine
        .record_decision(ALICE, BOB, DecisionAction::Like)
        .await
        .unwrap();
    assert!(matches!(
        outcome,
        DecisionOutcome::Matched {
            newly_created: false,
            ..
        }
    ));

    assert_eq!(h.storage.decided_user_ids(ALICE).await.unwrap(), vec![BOB]);
    assert_eq!(h.storage.matches_for(ALICE).await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn near_simultaneous_likes_create_one_match() {
    let h = setup().await;
    register(&h.storage, ALICE, "Alice", Some("alice")).await;
    register(&h.storage, BOB, "Bob", Some("bob")).await;

    let engine = Arc::new(h.engine);
    let e1 = engine.clone();
    let e2 = engine.clone();
    let t1 = tokio::spawn(async move {
        e1.record_decision(ALICE, BOB, DecisionAction::Like).await
    });
    let t2 = tokio::spawn(async move {
        e2.record_decision(BOB, ALICE, DecisionAction::Like).await
    });
    let outcomes = [t1.await.unwrap().unwrap(), t2.await.unwrap().unwrap()];

    let fresh = outcomes
        .iter()
        .filter(|o| matches!(o, DecisionOutcome::Matched { newly_created: true, .. }))
        .count();
    assert_eq!(fresh, 1, "exactly one side observes the creation");
    assert_eq!(h.storage.matches_for(ALICE).await.unwrap().len(), 1);
}

#[tokio::test]
async fn skips_never_match_and_are_permanent() {
    let h = setup().await;
    register(&h.storage, ALICE, "Alice", Some("alice")).await;
    register(&h.storage, BOB, "Bob", Some("bob")).await;

    let outcome = h
        .engine
        .record_decision(ALICE, BOB, DecisionAction::Skip)
        .await
        .unwrap();
    assert_eq!(outcome, DecisionOutcome::NoMatch);

    // Even a reciprocal like cannot match against a skip.
    let outcome = h
        .engine
        .record_decision(BOB, ALICE, DecisionAction::Like)
        .await
        .unwrap();
    assert_eq!(outcome, DecisionOutcome::NoMatch);

    // The skipped user never reappears for the skipper.
    assert!(h.selector.select(ALICE).await.unwrap().is_none());
}

#[tokio::test]
async fn selector_excludes_self_decided_inactive_and_bookless() {
    let h = setup().await;
    register(&h.storage, ALICE, "Alice", Some("alice")).await;
    register(&h.storage, BOB, "Bob", Some("bob")).await;

    // Only Bob is eligible for Alice at first.
    let candidate = h.selector.select(ALICE).await.unwrap().unwrap();
    assert_eq!(candidate.id, BOB);

    // After liking Bob, nobody is left.
    h.engine
        .record_decision(ALICE, BOB, DecisionAction::Like)
        .await
        .unwrap();
    assert!(h.selector.select(ALICE).await.unwrap().is_none());

    // Bob still sees Alice: he has made no decision about her.
    let candidate = h.selector.select(BOB).await.unwrap().unwrap();
    assert_eq!(candidate.id, ALICE);
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_notification_does_not_roll_back_the_match() {
    let h = setup().await;
    register(&h.storage, ALICE, "Alice", Some("alice")).await;
    register(&h.storage, BOB, "Bob", Some("bob")).await;
    h.transport.fail_direct_sends(true);

    h.engine
        .record_decision(ALICE, BOB, DecisionAction::Like)
        .await
        .unwrap();
    let outcome = h
        .engine
        .record_decision(BOB, ALICE, DecisionAction::Like)
        .await
        .unwrap();

    assert!(matches!(outcome, DecisionOutcome::Matched { .. }));
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(h.transport.direct_messages().await.is_empty());
    assert_eq!(
        h.storage.matches_for(ALICE).await.unwrap().len(),
        1,
        "match survives a failed delivery"
    );
}
