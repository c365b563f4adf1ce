//! Snapshot service: orchestrates lock, history, and restore over a store.

use fanxi_core::{HistoryRecord, LineupSession, LockReceipt, Snapshot};

use crate::error::StoreError;
use crate::traits::PredictionStore;

/// Persistence front for one user's lineup sessions.
///
/// Optimistic-update discipline: the session is always the source of
/// truth and the store is a durable mirror. The snapshot is captured
/// synchronously before any await, so a slow or failed call can neither
/// observe later edits nor roll anything back.
pub struct SnapshotService<S: PredictionStore> {
    store: S,
    user_id: i64,
}

impl<S: PredictionStore> SnapshotService<S> {
    pub fn new(store: S, user_id: i64) -> Self {
        Self { store, user_id }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Capture the session's current selection and persist it as a locked
    /// snapshot. On failure the session is untouched and the lock may be
    /// retried without redoing placements.
    pub async fn lock(&self, session: &LineupSession) -> Result<LockReceipt, StoreError> {
        let snapshot = session.snapshot();
        self.lock_snapshot(&snapshot).await
    }

    /// Persist an already-captured snapshot.
    pub async fn lock_snapshot(&self, snapshot: &Snapshot) -> Result<LockReceipt, StoreError> {
        let request = snapshot.to_lock_request();
        match self.store.lock(self.user_id, &request).await {
            Ok(receipt) => Ok(receipt),
            Err(err) => {
                log::warn!("lock failed for user {}: {}", self.user_id, err);
                Err(err)
            }
        }
    }

    /// Previously locked snapshots, oldest first.
    pub async fn history(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        self.store.history(self.user_id).await
    }
}

/// Load a history record back into a live session, reconciling the stored
/// occupants against the session's current member universe.
pub fn restore_record(session: &mut LineupSession, record: HistoryRecord) -> fanxi_core::Result<()> {
    session.restore(&record.into_snapshot())
}
