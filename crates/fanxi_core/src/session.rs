//! Session state: the owned (lineup, tactics) pair for one editing session.
//!
//! The session serializes event delivery — one event is fully applied
//! before the next is accepted — and is the only writer of its state.
//! Collaborators (rendering, persistence) read captures; they never write.

use chrono::Utc;

use crate::engine::{self, MoveEvent};
use crate::error::{LineupError, Result};
use crate::models::{LineupState, Member, MemberId};
use crate::snapshot::{LockStatus, Snapshot};
use crate::tactics::TacticsConfig;

#[derive(Debug, Clone)]
pub struct LineupSession {
    state: LineupState,
    tactics: TacticsConfig,
}

impl LineupSession {
    /// Start a session: the full member list on the roster, empty board,
    /// tactics at defaults.
    pub fn new(members: impl IntoIterator<Item = Member>) -> Self {
        let state = LineupState::from_members(members);
        log::info!("lineup session started with {} members", state.roster().len());
        Self {
            state,
            tactics: TacticsConfig::default(),
        }
    }

    pub fn state(&self) -> &LineupState {
        &self.state
    }

    pub fn tactics(&self) -> &TacticsConfig {
        &self.tactics
    }

    pub fn tactics_mut(&mut self) -> &mut TacticsConfig {
        &mut self.tactics
    }

    /// Apply one event through the reducer and commit the result.
    /// On rejection the session is left exactly as it was.
    pub fn dispatch(&mut self, event: MoveEvent) -> Result<()> {
        self.state = engine::apply(&self.state, &event)?;
        log::debug!("applied {:?}", event);
        Ok(())
    }

    /// Clear the board. Reset has no precondition, so this never fails.
    pub fn reset(&mut self) {
        self.state = engine::apply(&self.state, &MoveEvent::ResetAll)
            .unwrap_or_else(|_| unreachable!("reset has no precondition"));
    }

    /// Capture the current assignment and tactics as a locked snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            assignment: self.state.assignment().clone(),
            tactics: self.tactics,
            created_at: Utc::now(),
            status: LockStatus::Locked,
        }
    }

    /// Replace assignment and tactics with a prior snapshot, reconciled
    /// against the session's member universe.
    ///
    /// Every occupant the snapshot references must exist in this session
    /// (the snapshot may predate roster changes); unknown or duplicated
    /// occupants are rejected and nothing is mutated. On success the
    /// roster is recomputed as universe minus restored occupants, so the
    /// injectivity invariant holds by construction.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<()> {
        let mut universe: std::collections::BTreeMap<MemberId, Member> = self
            .state
            .universe()
            .map(|member| (member.id.clone(), member.clone()))
            .collect();

        let mut assignment = std::collections::BTreeMap::new();
        for (slot, occupant) in &snapshot.assignment {
            let member = universe.remove(&occupant.id).ok_or_else(|| {
                if self.state.contains(&occupant.id) {
                    // Known member, but already taken by an earlier slot
                    // of this same snapshot.
                    LineupError::DuplicateMember {
                        id: occupant.id.clone(),
                    }
                } else {
                    LineupError::UnknownMember {
                        id: occupant.id.clone(),
                    }
                }
            })?;
            assignment.insert(*slot, member);
        }

        self.state = LineupState {
            roster: universe,
            assignment,
        };
        self.tactics = snapshot.tactics.normalized();
        log::info!(
            "restored snapshot from {} ({} slots filled)",
            snapshot.created_at,
            self.state.assignment().len()
        );
        Ok(())
    }
}
