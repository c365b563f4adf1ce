use thiserror::Error;

use crate::models::member::MemberId;
use crate::models::slot::Slot;

/// Errors produced by the lineup engine, session, and tactics config.
///
/// Validation errors reference identifiers outside the closed sets
/// (slots, parameter names, member universe). Referential errors reference
/// a known member whose current location does not match the operation's
/// precondition. Both are rejected before any state mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineupError {
    #[error("unknown slot: {id}")]
    UnknownSlot { id: String },

    #[error("unknown tactics parameter: {name}")]
    UnknownParameter { name: String },

    #[error("unknown member: {id}")]
    UnknownMember { id: MemberId },

    #[error("member {id} appears in more than one place")]
    DuplicateMember { id: MemberId },

    #[error("member {id} is not in the roster")]
    NotInRoster { id: MemberId },

    #[error("member {id} is not assigned to any slot")]
    NotAssigned { id: MemberId },

    #[error("member is already assigned to {slot}")]
    SameSlot { slot: Slot },
}

impl LineupError {
    /// True for errors caused by identifiers outside the closed sets,
    /// as opposed to referential precondition failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LineupError::UnknownSlot { .. }
                | LineupError::UnknownParameter { .. }
                | LineupError::UnknownMember { .. }
                | LineupError::DuplicateMember { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
