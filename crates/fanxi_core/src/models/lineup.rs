use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{LineupError, Result};
use crate::models::member::{Member, MemberId};
use crate::models::slot::Slot;

/// The (roster, assignment) pair the engine transitions over.
///
/// `roster` holds members not currently placed on the board; `assignment`
/// is the partial slot → member mapping. The two are mutually exclusive:
/// a member id appears in at most one of them, and never under two slots.
/// Mutation goes through the engine reducer only; everything else reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupState {
    pub(crate) roster: BTreeMap<MemberId, Member>,
    pub(crate) assignment: BTreeMap<Slot, Member>,
}

impl LineupState {
    /// Session-start state: every member on the roster, empty board.
    pub fn from_members(members: impl IntoIterator<Item = Member>) -> Self {
        Self {
            roster: members
                .into_iter()
                .map(|member| (member.id.clone(), member))
                .collect(),
            assignment: BTreeMap::new(),
        }
    }

    pub fn roster(&self) -> &BTreeMap<MemberId, Member> {
        &self.roster
    }

    pub fn assignment(&self) -> &BTreeMap<Slot, Member> {
        &self.assignment
    }

    /// Slot currently holding the given member, if any.
    pub fn slot_of(&self, id: &MemberId) -> Option<Slot> {
        self.assignment
            .iter()
            .find(|(_, member)| &member.id == id)
            .map(|(slot, _)| *slot)
    }

    pub fn occupant(&self, slot: Slot) -> Option<&Member> {
        self.assignment.get(&slot)
    }

    /// All members of the session, wherever they currently sit.
    pub fn universe(&self) -> impl Iterator<Item = &Member> {
        self.roster.values().chain(self.assignment.values())
    }

    pub fn contains(&self, id: &MemberId) -> bool {
        self.roster.contains_key(id) || self.slot_of(id).is_some()
    }

    /// Verify the core invariant: no member id occurs twice across the
    /// roster and the assignment values.
    pub fn check_injectivity(&self) -> Result<()> {
        let mut seen = std::collections::BTreeSet::new();
        for member in self.universe() {
            if !seen.insert(&member.id) {
                return Err(LineupError::DuplicateMember {
                    id: member.id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for LineupState {
    fn default() -> Self {
        Self::from_members(std::iter::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, number: u8) -> Member {
        Member::new(id, id.to_uppercase(), number)
    }

    #[test]
    fn session_start_has_full_roster_and_empty_board() {
        let state = LineupState::from_members([member("a", 1), member("b", 2)]);
        assert_eq!(state.roster().len(), 2);
        assert!(state.assignment().is_empty());
        state.check_injectivity().unwrap();
    }

    #[test]
    fn injectivity_check_catches_double_placement() {
        let mut state = LineupState::from_members([member("a", 1)]);
        // Bypass the engine to fabricate a corrupt state.
        state.assignment.insert(Slot::GK, member("a", 1));
        assert_eq!(
            state.check_injectivity().unwrap_err(),
            LineupError::DuplicateMember { id: "a".into() }
        );
    }

    #[test]
    fn slot_of_finds_assigned_member() {
        let mut state = LineupState::from_members([member("a", 1)]);
        let moved = state.roster.remove(&"a".into()).unwrap();
        state.assignment.insert(Slot::ST, moved);
        assert_eq!(state.slot_of(&"a".into()), Some(Slot::ST));
        assert_eq!(state.slot_of(&"b".into()), None);
    }
}
