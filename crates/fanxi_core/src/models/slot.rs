use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LineupError, Result};

/// Positional slot on the pitch board.
///
/// The slot set is closed and fixed at configuration time: one goalkeeper,
/// a back four, three midfielders, and a front three (the board's 4-3-3
/// layout). Slots are never created or destroyed at runtime. Serialized
/// names are part of the persistence wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    GK,
    LB,
    CB1,
    CB2,
    RB,
    CDM,
    LCM,
    RCM,
    LW,
    ST,
    RW,
}

/// Broad pitch line a slot belongs to, for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLine {
    Keeper,
    Defence,
    Midfield,
    Attack,
}

impl Slot {
    /// Every slot, in back-to-front board order.
    pub const ALL: [Slot; 11] = [
        Slot::GK,
        Slot::LB,
        Slot::CB1,
        Slot::CB2,
        Slot::RB,
        Slot::CDM,
        Slot::LCM,
        Slot::RCM,
        Slot::LW,
        Slot::ST,
        Slot::RW,
    ];

    /// Wire identifier for this slot.
    pub fn id(&self) -> &'static str {
        match self {
            Slot::GK => "GK",
            Slot::LB => "LB",
            Slot::CB1 => "CB1",
            Slot::CB2 => "CB2",
            Slot::RB => "RB",
            Slot::CDM => "CDM",
            Slot::LCM => "LCM",
            Slot::RCM => "RCM",
            Slot::LW => "LW",
            Slot::ST => "ST",
            Slot::RW => "RW",
        }
    }

    /// Parse a wire identifier. Unknown identifiers are rejected before any
    /// state is touched.
    pub fn from_id(id: &str) -> Result<Slot> {
        Slot::ALL
            .iter()
            .copied()
            .find(|slot| slot.id() == id)
            .ok_or_else(|| LineupError::UnknownSlot { id: id.to_string() })
    }

    pub fn line(&self) -> SlotLine {
        match self {
            Slot::GK => SlotLine::Keeper,
            Slot::LB | Slot::CB1 | Slot::CB2 | Slot::RB => SlotLine::Defence,
            Slot::CDM | Slot::LCM | Slot::RCM => SlotLine::Midfield,
            Slot::LW | Slot::ST | Slot::RW => SlotLine::Attack,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
