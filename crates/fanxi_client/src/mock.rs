//! In-memory prediction store for testing without a backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use fanxi_core::{HistoryRecord, LockReceipt, LockRequest};

use crate::error::StoreError;
use crate::traits::PredictionStore;

/// Mock store keeping locked records in memory, per user, in insertion
/// order. Cloning shares the underlying storage.
#[derive(Clone)]
pub struct MockPredictionStore {
    records: Arc<Mutex<HashMap<i64, Vec<HistoryRecord>>>>,
    id_counter: Arc<Mutex<i64>>,
    offline: Arc<Mutex<bool>>,
    match_id: i64,
}

impl MockPredictionStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            id_counter: Arc::new(Mutex::new(0)),
            offline: Arc::new(Mutex::new(false)),
            match_id: 1,
        }
    }

    /// Associate subsequently locked records with a match.
    pub fn for_match(match_id: i64) -> Self {
        Self {
            match_id,
            ..Self::new()
        }
    }

    /// Simulate the backend being unreachable.
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    pub fn record_count(&self, user_id: i64) -> usize {
        self.records
            .lock()
            .unwrap()
            .get(&user_id)
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn next_id(&self) -> i64 {
        let mut counter = self.id_counter.lock().unwrap();
        *counter += 1;
        *counter
    }
}

impl Default for MockPredictionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionStore for MockPredictionStore {
    async fn lock(&self, user_id: i64, request: &LockRequest) -> Result<LockReceipt, StoreError> {
        if *self.offline.lock().unwrap() {
            return Err(StoreError::Unavailable("mock store offline".to_string()));
        }

        let record = HistoryRecord {
            id: self.next_id(),
            match_id: self.match_id,
            lineup_data: request.lineup.clone(),
            tactics_data: request.tactics,
            created_at: request.timestamp,
        };
        let receipt = LockReceipt { id: record.id };

        self.records
            .lock()
            .unwrap()
            .entry(user_id)
            .or_default()
            .push(record);

        Ok(receipt)
    }

    async fn history(&self, user_id: i64) -> Result<Vec<HistoryRecord>, StoreError> {
        if *self.offline.lock().unwrap() {
            return Err(StoreError::Unavailable("mock store offline".to_string()));
        }

        Ok(self
            .records
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}
