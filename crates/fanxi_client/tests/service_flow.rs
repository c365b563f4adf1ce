//! End-to-end service flow against the in-memory store.

use fanxi_client::{restore_record, MockPredictionStore, SnapshotService};
use fanxi_core::{LineupSession, Member, MoveEvent, Slot, TacticsParameter};

const USER_ID: i64 = 1;

fn squad() -> Vec<Member> {
    vec![
        Member::new("ter_stegen", "Ter Stegen", 1),
        Member::new("van_dijk", "V. van Dijk", 4),
        Member::new("pedri", "Pedri", 8),
        Member::new("haaland", "E. Haaland", 9),
        Member::new("messi", "L. Messi", 10),
    ]
}

fn place(session: &mut LineupSession, member: &str, target: Slot) {
    session
        .dispatch(MoveEvent::PlaceFromRoster {
            member: member.into(),
            target,
        })
        .unwrap();
}

#[tokio::test]
async fn lock_then_history_preserves_order_and_content() {
    let service = SnapshotService::new(MockPredictionStore::new(), USER_ID);
    let mut session = LineupSession::new(squad());

    place(&mut session, "ter_stegen", Slot::GK);
    let first = service.lock(&session).await.unwrap();

    place(&mut session, "haaland", Slot::ST);
    session.tactics_mut().set(TacticsParameter::PressingIntensity, 80);
    let second = service.lock(&session).await.unwrap();

    assert!(first.id < second.id);

    let records = service.history().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, first.id);
    assert_eq!(records[1].id, second.id);
    assert_eq!(records[0].lineup_data.len(), 1);
    assert_eq!(records[1].lineup_data.len(), 2);
    assert_eq!(records[1].tactics_data.pressing_intensity, 80);

    // History is restartable: reading it again yields the same sequence.
    let again = service.history().await.unwrap();
    assert_eq!(records, again);
}

#[tokio::test]
async fn locked_record_restores_into_a_live_session() {
    let service = SnapshotService::new(MockPredictionStore::new(), USER_ID);
    let mut session = LineupSession::new(squad());

    place(&mut session, "ter_stegen", Slot::GK);
    place(&mut session, "messi", Slot::RW);
    session.tactics_mut().set(TacticsParameter::Mentality, 65);
    service.lock(&session).await.unwrap();

    let locked_assignment = session.state().assignment().clone();
    let locked_tactics = *session.tactics();

    // Keep editing after the lock, then pull the record back.
    place(&mut session, "haaland", Slot::RW);
    session.reset();

    let record = service.history().await.unwrap().pop().unwrap();
    restore_record(&mut session, record).unwrap();

    assert_eq!(session.state().assignment(), &locked_assignment);
    assert_eq!(session.tactics(), &locked_tactics);
    session.state().check_injectivity().unwrap();
}

#[tokio::test]
async fn failed_lock_leaves_local_state_alone_and_is_retryable() {
    let store = MockPredictionStore::new();
    let service = SnapshotService::new(store.clone(), USER_ID);
    let mut session = LineupSession::new(squad());
    place(&mut session, "ter_stegen", Slot::GK);

    store.set_offline(true);
    let err = service.lock(&session).await.unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(store.record_count(USER_ID), 0);
    // The selection survives the failure untouched.
    assert_eq!(session.state().assignment().len(), 1);

    // Retry after recovery, without redoing any placements.
    store.set_offline(false);
    service.lock(&session).await.unwrap();
    assert_eq!(store.record_count(USER_ID), 1);
}

#[tokio::test]
async fn history_is_scoped_per_user() {
    let store = MockPredictionStore::new();
    let service = SnapshotService::new(store.clone(), USER_ID);
    let other = SnapshotService::new(store, USER_ID + 1);

    let mut session = LineupSession::new(squad());
    place(&mut session, "pedri", Slot::LCM);
    service.lock(&session).await.unwrap();

    assert_eq!(service.history().await.unwrap().len(), 1);
    assert!(other.history().await.unwrap().is_empty());
}
