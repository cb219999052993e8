//! The workflow state machine.
//!
//! RegisteringVoters → ProposalsRegistrationStarted → ProposalsRegistrationEnded
//! → VotingSessionStarted → VotingSessionEnded → VotesTallied
//!
//! Each owner-triggered [`Transition`] moves the phase forward by exactly one
//! step from a single required predecessor. There is no skipping and no way back.

use crate::error::VotingError;
use ballot_types::WorkflowPhase;
use serde::{Deserialize, Serialize};

/// The five owner-triggered phase transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    StartProposalsRegistering,
    EndProposalsRegistering,
    StartVotingSession,
    EndVotingSession,
    TallyVotes,
}

impl Transition {
    pub const ALL: [Self; 5] = [
        Self::StartProposalsRegistering,
        Self::EndProposalsRegistering,
        Self::StartVotingSession,
        Self::EndVotingSession,
        Self::TallyVotes,
    ];

    /// The phase the process must be in for this transition to apply.
    pub fn required_phase(self) -> WorkflowPhase {
        match self {
            Self::StartProposalsRegistering => WorkflowPhase::RegisteringVoters,
            Self::EndProposalsRegistering => WorkflowPhase::ProposalsRegistrationStarted,
            Self::StartVotingSession => WorkflowPhase::ProposalsRegistrationEnded,
            Self::EndVotingSession => WorkflowPhase::VotingSessionStarted,
            Self::TallyVotes => WorkflowPhase::VotingSessionEnded,
        }
    }

    /// The phase the process is in after this transition.
    pub fn target_phase(self) -> WorkflowPhase {
        match self {
            Self::StartProposalsRegistering => WorkflowPhase::ProposalsRegistrationStarted,
            Self::EndProposalsRegistering => WorkflowPhase::ProposalsRegistrationEnded,
            Self::StartVotingSession => WorkflowPhase::VotingSessionStarted,
            Self::EndVotingSession => WorkflowPhase::VotingSessionEnded,
            Self::TallyVotes => WorkflowPhase::VotesTallied,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::StartProposalsRegistering => "start_proposals_registering",
            Self::EndProposalsRegistering => "end_proposals_registering",
            Self::StartVotingSession => "start_voting_session",
            Self::EndVotingSession => "end_voting_session",
            Self::TallyVotes => "tally_votes",
        }
    }
}

/// Holds the current phase of a voting process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Workflow {
    phase: WorkflowPhase,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    /// Fail unless the current phase is `expected`.
    pub fn require(
        &self,
        expected: WorkflowPhase,
        operation: &'static str,
    ) -> Result<(), VotingError> {
        if self.phase != expected {
            return Err(VotingError::WrongPhase {
                operation,
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Apply a transition, returning `(previous, new)`.
    pub fn apply(
        &mut self,
        transition: Transition,
    ) -> Result<(WorkflowPhase, WorkflowPhase), VotingError> {
        self.require(transition.required_phase(), transition.name())?;
        let previous = self.phase;
        self.phase = transition.target_phase();
        Ok((previous, self.phase))
    }
}
