//! Voter allow-list and per-voter ballot state.

use crate::error::VotingError;
use crate::proposal::ProposalId;
use ballot_types::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A voter record. Identities that were never added read as the default record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub is_registered: bool,
    /// Flips to `true` at most once and is never reset.
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set.
    pub voted_proposal_id: ProposalId,
}

/// Maps identities to voter records.
#[derive(Debug)]
pub struct VoterRegistry {
    voters: HashMap<Address, Voter>,
}

impl VoterRegistry {
    pub fn new() -> Self {
        Self {
            voters: HashMap::new(),
        }
    }

    /// Look up a voter, defaulting to the empty record for unknown identities.
    pub fn get(&self, address: &Address) -> Voter {
        self.voters.get(address).copied().unwrap_or_default()
    }

    pub fn is_registered(&self, address: &Address) -> bool {
        self.get(address).is_registered
    }

    /// Add an identity to the allow-list.
    pub fn register(&mut self, address: Address) -> Result<(), VotingError> {
        if self.is_registered(&address) {
            return Err(VotingError::AlreadyRegistered(address));
        }
        self.voters.insert(
            address,
            Voter {
                is_registered: true,
                ..Voter::default()
            },
        );
        Ok(())
    }

    /// Fail if the identity has already cast its vote.
    pub fn ensure_not_voted(&self, address: &Address) -> Result<(), VotingError> {
        if self.get(address).has_voted {
            return Err(VotingError::AlreadyVoted(address.clone()));
        }
        Ok(())
    }

    /// Mark a vote as cast. The caller must have checked [`Self::ensure_not_voted`].
    pub(crate) fn record_vote(&mut self, address: &Address, proposal_id: ProposalId) {
        let voter = self.voters.entry(address.clone()).or_default();
        debug_assert!(!voter.has_voted, "vote recorded twice for {address}");
        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
    }

    /// Number of registered voters.
    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }
}

impl Default for VoterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(name: &str) -> Address {
        Address::new(name)
    }

    #[test]
    fn test_unknown_identity_reads_as_default() {
        let registry = VoterRegistry::new();
        assert_eq!(registry.get(&addr("nobody")), Voter::default());
        assert!(!registry.is_registered(&addr("nobody")));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_marks_voter() {
        let mut registry = VoterRegistry::new();
        registry.register(addr("alice")).unwrap();

        let voter = registry.get(&addr("alice"));
        assert!(voter.is_registered);
        assert!(!voter.has_voted);
        assert_eq!(voter.voted_proposal_id, 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_leaves_record_unchanged() {
        let mut registry = VoterRegistry::new();
        registry.register(addr("alice")).unwrap();
        registry.record_vote(&addr("alice"), 2);

        let err = registry.register(addr("alice")).unwrap_err();
        assert_eq!(err, VotingError::AlreadyRegistered(addr("alice")));

        let voter = registry.get(&addr("alice"));
        assert!(voter.has_voted);
        assert_eq!(voter.voted_proposal_id, 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_ensure_not_voted() {
        let mut registry = VoterRegistry::new();
        registry.register(addr("alice")).unwrap();
        assert!(registry.ensure_not_voted(&addr("alice")).is_ok());

        registry.record_vote(&addr("alice"), 1);
        assert_eq!(
            registry.ensure_not_voted(&addr("alice")),
            Err(VotingError::AlreadyVoted(addr("alice")))
        );
    }
}
