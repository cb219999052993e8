//! Proposals and the append-only proposal registry.

use crate::error::VotingError;
use serde::{Deserialize, Serialize};

/// Index of a proposal in the registry.
pub type ProposalId = usize;

/// Description of the sentinel proposal seeded at index 0.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u64,
}

impl Proposal {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            vote_count: 0,
        }
    }

    /// The sentinel occupying index 0 once proposal registration opens.
    pub fn genesis() -> Self {
        Self::new(GENESIS_DESCRIPTION)
    }
}

/// Ordered, append-only sequence of proposals.
#[derive(Debug)]
pub struct ProposalRegistry {
    proposals: Vec<Proposal>,
}

impl ProposalRegistry {
    pub fn new() -> Self {
        Self {
            proposals: Vec::new(),
        }
    }

    /// Append the GENESIS sentinel. Only valid on an empty registry.
    pub(crate) fn seed_genesis(&mut self) {
        debug_assert!(self.proposals.is_empty(), "genesis seeded twice");
        self.proposals.push(Proposal::genesis());
    }

    /// Append a proposal, returning its index.
    pub fn push(&mut self, description: String) -> Result<ProposalId, VotingError> {
        if description.is_empty() {
            return Err(VotingError::EmptyDescription);
        }
        self.proposals.push(Proposal::new(description));
        Ok(self.proposals.len() - 1)
    }

    pub fn get(&self, index: ProposalId) -> Result<&Proposal, VotingError> {
        self.proposals.get(index).ok_or(VotingError::ProposalNotFound {
            index,
            count: self.proposals.len(),
        })
    }

    /// Fail unless `index` addresses an existing proposal.
    pub fn ensure_exists(&self, index: ProposalId) -> Result<(), VotingError> {
        self.get(index).map(|_| ())
    }

    /// Add one vote to an existing proposal. The caller must have checked
    /// [`Self::ensure_exists`].
    pub(crate) fn record_vote(&mut self, index: ProposalId) {
        if let Some(proposal) = self.proposals.get_mut(index) {
            proposal.vote_count += 1;
        }
    }

    pub fn as_slice(&self) -> &[Proposal] {
        &self.proposals
    }

    /// Sum of vote counts across all proposals.
    pub fn total_votes(&self) -> u64 {
        self.proposals.iter().map(|p| p.vote_count).sum()
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}

impl Default for ProposalRegistry {
    fn default() -> Self {
        Self::new()
    }
}
