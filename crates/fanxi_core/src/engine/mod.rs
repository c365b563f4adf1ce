//! Lineup Assignment Engine.
//!
//! A pure reducer over [`LineupState`]: each event maps the current
//! (roster, assignment) pair to the next one, leaving the input untouched.
//! There are no internal states beyond the pair itself and no observable
//! mid-transition state; a rejected event returns an error and the caller's
//! state is exactly as it was.

use crate::error::{LineupError, Result};
use crate::models::{LineupState, MemberId, Slot};

/// Abstract move/reset events, as delivered by the input adapter.
///
/// The engine never sees pointer coordinates; the adapter has already
/// resolved the gesture into a member id and a target slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveEvent {
    /// Place an unassigned member onto a slot, displacing any occupant
    /// back to the roster.
    PlaceFromRoster { member: MemberId, target: Slot },
    /// Move an already-assigned member to another slot: relocation when
    /// the target is empty, atomic swap when it is occupied.
    MoveWithinSlots { member: MemberId, target: Slot },
    /// Clear the board, returning every assigned member to the roster.
    ResetAll,
}

/// Apply one event, producing the next state.
///
/// Referential precondition failures (member not in the roster, member not
/// assigned, source equals target) are rejected with a typed error rather
/// than silently ignored; callers wanting drop-and-forget semantics can
/// discard the error and keep their state.
pub fn apply(state: &LineupState, event: &MoveEvent) -> Result<LineupState> {
    match event {
        MoveEvent::PlaceFromRoster { member, target } => place_from_roster(state, member, *target),
        MoveEvent::MoveWithinSlots { member, target } => move_within_slots(state, member, *target),
        MoveEvent::ResetAll => Ok(reset_all(state)),
    }
}

fn place_from_roster(state: &LineupState, member: &MemberId, target: Slot) -> Result<LineupState> {
    let mut next = state.clone();

    let moving = next
        .roster
        .remove(member)
        .ok_or_else(|| LineupError::NotInRoster { id: member.clone() })?;

    // Displacement: the prior occupant goes back to the roster.
    if let Some(displaced) = next.assignment.insert(target, moving) {
        next.roster.insert(displaced.id.clone(), displaced);
    }

    Ok(next)
}

fn move_within_slots(state: &LineupState, member: &MemberId, target: Slot) -> Result<LineupState> {
    let source = state
        .slot_of(member)
        .ok_or_else(|| LineupError::NotAssigned { id: member.clone() })?;
    if source == target {
        return Err(LineupError::SameSlot { slot: source });
    }

    let mut next = state.clone();
    let moving = next.assignment.remove(&source).unwrap_or_else(|| {
        unreachable!("slot_of returned an occupied slot");
    });

    // Occupied target: swap. Empty target: plain relocation.
    if let Some(swapped) = next.assignment.insert(target, moving) {
        next.assignment.insert(source, swapped);
    }

    Ok(next)
}

fn reset_all(state: &LineupState) -> LineupState {
    let mut next = state.clone();
    let cleared = std::mem::take(&mut next.assignment);
    for member in cleared.into_values() {
        next.roster.insert(member.id.clone(), member);
    }
    next
}
