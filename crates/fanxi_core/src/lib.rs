//! # fanxi_core - Lineup Assignment Engine
//!
//! Pure, synchronous core of the FanXI lineup prediction game: the data
//! model for members and positional slots, the assignment reducer
//! (placement, displacement, swap, reset), the bounded tactics sliders,
//! and the snapshot record types shared with the persistence client.
//!
//! Nothing in this crate touches the network; persistence lives in
//! `fanxi_client` and consumes the snapshot types defined here.

pub mod engine;
pub mod error;
pub mod models;
pub mod session;
pub mod snapshot;
pub mod tactics;

pub use engine::{apply, MoveEvent};
pub use error::{LineupError, Result};
pub use models::{LineupState, Member, MemberId, Slot, SlotLine};
pub use session::LineupSession;
pub use snapshot::{HistoryRecord, LockReceipt, LockRequest, LockStatus, Snapshot};
pub use tactics::{TacticsConfig, TacticsParameter, PARAM_MAX, PARAM_MIN};
