//! Data model: members, the closed slot set, and the lineup state pair.

pub mod lineup;
pub mod member;
pub mod slot;

pub use lineup::LineupState;
pub use member::{Member, MemberId};
pub use slot::{Slot, SlotLine};
