use ballot_types::{Address, WorkflowPhase};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::proposal::ProposalId;

/// The capability an operation requires from its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The single identity fixed when the process was created.
    Owner,
    /// Any identity the owner has added to the allow-list.
    Voter,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owner => write!(f, "caller is not the owner"),
            Self::Voter => write!(f, "you're not a voter"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VotingError {
    #[error("unauthorized {caller}: {role}")]
    Unauthorized { caller: Address, role: Role },

    #[error("{operation} requires phase {expected}, current phase is {actual}")]
    WrongPhase {
        operation: &'static str,
        expected: WorkflowPhase,
        actual: WorkflowPhase,
    },

    #[error("voter {0} is already registered")]
    AlreadyRegistered(Address),

    #[error("voter {0} has already voted")]
    AlreadyVoted(Address),

    #[error("proposal description must not be empty")]
    EmptyDescription,

    #[error("proposal not found: index {index}, {count} proposals registered")]
    ProposalNotFound { index: ProposalId, count: usize },
}

/// Discriminant of a [`VotingError`], stable across message changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Unauthorized,
    WrongPhase,
    AlreadyRegistered,
    AlreadyVoted,
    EmptyDescription,
    ProposalNotFound,
}

impl VotingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::WrongPhase { .. } => ErrorKind::WrongPhase,
            Self::AlreadyRegistered(_) => ErrorKind::AlreadyRegistered,
            Self::AlreadyVoted(_) => ErrorKind::AlreadyVoted,
            Self::EmptyDescription => ErrorKind::EmptyDescription,
            Self::ProposalNotFound { .. } => ErrorKind::ProposalNotFound,
        }
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn is_phase_error(&self) -> bool {
        matches!(self, Self::WrongPhase { .. })
    }

    /// Whether the call may succeed if resubmitted once the expected phase opens.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::WrongPhase { expected, actual, .. } if expected > actual)
    }
}

pub type Result<T> = std::result::Result<T, VotingError>;
