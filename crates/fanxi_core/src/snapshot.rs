//! Persisted snapshot record and the lock/history wire shapes.
//!
//! A snapshot is created only by an explicit lock action and never mutated
//! afterwards. Field names on the wire structs are part of the backend
//! contract, not incidental.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Member, Slot};
use crate::tactics::TacticsConfig;

/// Lock state of a persisted snapshot. `Locked` is the only state the
/// client ever produces; the enum leaves room for backend-side states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LockStatus {
    Locked,
}

/// Immutable capture of an assignment and its tactics at lock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub assignment: BTreeMap<Slot, Member>,
    pub tactics: TacticsConfig,
    pub created_at: DateTime<Utc>,
    pub status: LockStatus,
}

impl Snapshot {
    /// Wire body for `POST /predictions/lock/{userId}`.
    pub fn to_lock_request(&self) -> LockRequest {
        LockRequest {
            lineup: self.assignment.clone(),
            tactics: self.tactics,
            timestamp: self.created_at,
            status: self.status,
        }
    }
}

/// Request body for `POST /predictions/lock/{userId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockRequest {
    pub lineup: BTreeMap<Slot, Member>,
    pub tactics: TacticsConfig,
    pub timestamp: DateTime<Utc>,
    pub status: LockStatus,
}

/// Acknowledgement returned by a successful lock: the stored record's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockReceipt {
    pub id: i64,
}

/// One record of `GET /predictions/history/{userId}`, ordered by creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub match_id: i64,
    pub lineup_data: BTreeMap<Slot, Member>,
    pub tactics_data: TacticsConfig,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Reconstruct the snapshot this record was persisted from.
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot {
            assignment: self.lineup_data,
            tactics: self.tactics_data,
            created_at: self.created_at,
            status: LockStatus::Locked,
        }
    }
}
