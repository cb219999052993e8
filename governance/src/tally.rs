//! Winner selection.

use crate::proposal::{Proposal, ProposalId};
use serde::{Deserialize, Serialize};

/// Outcome of a completed tally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyResult {
    pub winning_proposal_id: ProposalId,
    pub description: String,
    pub vote_count: u64,
    /// Accepted votes across all proposals.
    pub total_votes: u64,
}

/// Index of the proposal with the most votes.
///
/// Single forward pass; a later proposal only takes the lead with a strictly
/// greater count, so ties go to the lowest index. With every count at zero the
/// sentinel at index 0 wins.
pub fn winning_proposal(proposals: &[Proposal]) -> ProposalId {
    let mut best_index = 0;
    let mut best_count = 0;
    for (index, proposal) in proposals.iter().enumerate() {
        if proposal.vote_count > best_count {
            best_index = index;
            best_count = proposal.vote_count;
        }
    }
    best_index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_counts(counts: &[u64]) -> Vec<Proposal> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &vote_count)| Proposal {
                description: format!("p{i}"),
                vote_count,
            })
            .collect()
    }

    #[test]
    fn test_first_to_reach_max_wins() {
        assert_eq!(winning_proposal(&with_counts(&[0, 1, 3, 3, 2])), 2);
    }

    #[test]
    fn test_tie_at_one_goes_to_lowest_index() {
        assert_eq!(winning_proposal(&with_counts(&[0, 1, 1, 0])), 1);
    }

    #[test]
    fn test_clear_winner_at_end() {
        assert_eq!(winning_proposal(&with_counts(&[0, 1, 2, 5])), 3);
    }

    #[test]
    fn test_all_zero_selects_sentinel() {
        assert_eq!(winning_proposal(&with_counts(&[0, 0, 0])), 0);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(winning_proposal(&[]), 0);
    }
}
