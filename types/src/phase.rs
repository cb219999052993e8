//! Workflow phases of a voting process.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BallotError;

/// The six ordered phases of a voting process.
///
/// Phases only move forward, one step at a time. The numeric codes are part
/// of the external contract and must not be reordered.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum WorkflowPhase {
    /// The owner is building the voter allow-list.
    #[default]
    RegisteringVoters = 0,
    /// Registered voters may submit proposals.
    ProposalsRegistrationStarted = 1,
    /// Proposal submission is closed; voting has not opened yet.
    ProposalsRegistrationEnded = 2,
    /// Registered voters may cast their single vote.
    VotingSessionStarted = 3,
    /// Voting is closed; awaiting the tally.
    VotingSessionEnded = 4,
    /// The winner is known. Terminal, read-only.
    VotesTallied = 5,
}

impl WorkflowPhase {
    /// All phases in workflow order.
    pub const ALL: [Self; 6] = [
        Self::RegisteringVoters,
        Self::ProposalsRegistrationStarted,
        Self::ProposalsRegistrationEnded,
        Self::VotingSessionStarted,
        Self::VotingSessionEnded,
        Self::VotesTallied,
    ];

    /// Numeric phase code.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a numeric phase code.
    pub fn from_u8(code: u8) -> Result<Self, BallotError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(BallotError::UnknownPhase(code))
    }

    /// The phase that follows this one, or `None` for the terminal phase.
    pub fn next(self) -> Option<Self> {
        Self::from_u8(self.as_u8() + 1).ok()
    }

    pub fn is_final(self) -> bool {
        matches!(self, Self::VotesTallied)
    }

    /// Human-readable name of this phase.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RegisteringVoters => "registering_voters",
            Self::ProposalsRegistrationStarted => "proposals_registration_started",
            Self::ProposalsRegistrationEnded => "proposals_registration_ended",
            Self::VotingSessionStarted => "voting_session_started",
            Self::VotingSessionEnded => "voting_session_ended",
            Self::VotesTallied => "votes_tallied",
        }
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.as_u8())
    }
}

impl TryFrom<u8> for WorkflowPhase {
    type Error = BallotError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_u8(code)
    }
}
