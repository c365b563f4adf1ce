//! # fanxi_client - Snapshot persistence for the FanXI lineup game
//!
//! Async client side of the lock/history contract: a [`PredictionStore`]
//! collaborator boundary, an HTTP implementation, an in-memory mock for
//! tests, and the [`SnapshotService`] that ties a store to a live
//! [`fanxi_core::LineupSession`]. The engine itself never waits on any of
//! this; persistence mirrors local state, it does not validate it.

pub mod error;
pub mod http;
pub mod mock;
pub mod service;
pub mod submission;
pub mod traits;

pub use error::StoreError;
pub use http::HttpPredictionStore;
pub use mock::MockPredictionStore;
pub use service::{restore_record, SnapshotService};
pub use submission::{PredictionSubmission, SubmissionClient, SubmissionReceipt};
pub use traits::PredictionStore;
