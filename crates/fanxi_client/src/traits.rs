//! Persistence collaborator boundary.

use async_trait::async_trait;

use fanxi_core::{HistoryRecord, LockReceipt, LockRequest};

use crate::error::StoreError;

/// External store for locked snapshots.
///
/// Implementations do not retry and do not touch local engine state;
/// failures surface to the caller as [`StoreError`]. `history` is
/// restartable: calling it repeatedly neither consumes nor mutates
/// server-side state.
#[async_trait]
pub trait PredictionStore: Send + Sync {
    /// Persist a locked snapshot for the given user, returning the stored
    /// record's identifier.
    async fn lock(&self, user_id: i64, request: &LockRequest) -> Result<LockReceipt, StoreError>;

    /// Previously locked snapshots for the given user, ordered by creation.
    async fn history(&self, user_id: i64) -> Result<Vec<HistoryRecord>, StoreError>;
}
