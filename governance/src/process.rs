//! The voting process aggregate. It owns every piece of state and enforces
//! access control, phase guards and one-voter-one-vote.
//!
//! Every operation takes the caller explicitly; the hosting environment is
//! trusted to have authenticated it. Checks run in a fixed order (access,
//! then phase, then operation-specific), and nothing is mutated until all of
//! them pass. Events are emitted last, after the state change is complete.

use crate::error::{Role, VotingError};
use crate::event::{EventBus, EventListener, VotingEvent};
use crate::proposal::{Proposal, ProposalId, ProposalRegistry};
use crate::tally::{self, TallyResult};
use crate::voter::{Voter, VoterRegistry};
use crate::workflow::{Transition, Workflow};
use ballot_types::{Address, WorkflowPhase};
use tracing::{debug, info};

#[derive(Debug)]
pub struct VotingProcess {
    owner: Address,
    workflow: Workflow,
    voters: VoterRegistry,
    proposals: ProposalRegistry,
    winning_proposal_id: ProposalId,
    events: EventBus,
}

impl VotingProcess {
    /// Create a process in `RegisteringVoters` with no voters and no proposals.
    ///
    /// The owner is not implicitly a voter; it must add itself to vote.
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            workflow: Workflow::new(),
            voters: VoterRegistry::new(),
            proposals: ProposalRegistry::new(),
            winning_proposal_id: 0,
            events: EventBus::new(),
        }
    }

    // ── Read-only accessors ─────────────────────────────────────────────

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn workflow_status(&self) -> WorkflowPhase {
        self.workflow.phase()
    }

    /// Index of the winning proposal; 0 until votes are tallied.
    pub fn winning_proposal_id(&self) -> ProposalId {
        self.winning_proposal_id
    }

    /// Number of proposals including the GENESIS sentinel.
    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    pub fn events(&self) -> &[VotingEvent] {
        self.events.log()
    }

    /// Register a listener invoked synchronously for every future event.
    pub fn subscribe(&mut self, listener: EventListener) {
        self.events.subscribe(listener);
    }

    /// Summary of the tally, available once the process reached `VotesTallied`.
    pub fn results(&self) -> Option<TallyResult> {
        if !self.workflow_status().is_final() {
            return None;
        }
        let winner = self.proposals.get(self.winning_proposal_id).ok()?;
        Some(TallyResult {
            winning_proposal_id: self.winning_proposal_id,
            description: winner.description.clone(),
            vote_count: winner.vote_count,
            total_votes: self.proposals.total_votes(),
        })
    }

    // ── Guards ──────────────────────────────────────────────────────────

    fn only_owner(&self, caller: &Address) -> Result<(), VotingError> {
        if caller != &self.owner {
            return Err(VotingError::Unauthorized {
                caller: caller.clone(),
                role: Role::Owner,
            });
        }
        Ok(())
    }

    fn only_voter(&self, caller: &Address) -> Result<(), VotingError> {
        if !self.voters.is_registered(caller) {
            return Err(VotingError::Unauthorized {
                caller: caller.clone(),
                role: Role::Voter,
            });
        }
        Ok(())
    }

    // ── Voters ──────────────────────────────────────────────────────────

    /// Add `voter` to the allow-list. Owner only, during `RegisteringVoters`.
    pub fn add_voter(&mut self, caller: &Address, voter: Address) -> Result<(), VotingError> {
        self.only_owner(caller)?;
        self.workflow
            .require(WorkflowPhase::RegisteringVoters, "add_voter")?;
        self.voters.register(voter.clone())?;

        debug!(voter = %voter, "voter registered");
        self.events
            .emit(VotingEvent::VoterRegistered { voter_address: voter });
        Ok(())
    }

    /// Read any identity's voter record. The caller must itself be a voter;
    /// unknown identities read as the default record.
    pub fn get_voter(&self, caller: &Address, voter: &Address) -> Result<Voter, VotingError> {
        self.only_voter(caller)?;
        Ok(self.voters.get(voter))
    }

    // ── Proposals ───────────────────────────────────────────────────────

    /// Submit a proposal during `ProposalsRegistrationStarted`, returning its index.
    pub fn add_proposal(
        &mut self,
        caller: &Address,
        description: impl Into<String>,
    ) -> Result<ProposalId, VotingError> {
        self.only_voter(caller)?;
        self.workflow
            .require(WorkflowPhase::ProposalsRegistrationStarted, "add_proposal")?;
        let proposal_id = self.proposals.push(description.into())?;

        debug!(proposer = %caller, proposal_id, "proposal registered");
        self.events
            .emit(VotingEvent::ProposalRegistered { proposal_id });
        Ok(proposal_id)
    }

    pub fn get_one_proposal(
        &self,
        caller: &Address,
        index: ProposalId,
    ) -> Result<&Proposal, VotingError> {
        self.only_voter(caller)?;
        self.proposals.get(index)
    }

    // ── Votes ───────────────────────────────────────────────────────────

    /// Cast the caller's single vote during `VotingSessionStarted`.
    ///
    /// The voter record and the proposal count change together or not at all.
    pub fn set_vote(&mut self, caller: &Address, index: ProposalId) -> Result<(), VotingError> {
        self.only_voter(caller)?;
        self.workflow
            .require(WorkflowPhase::VotingSessionStarted, "set_vote")?;
        self.voters.ensure_not_voted(caller)?;
        self.proposals.ensure_exists(index)?;

        self.voters.record_vote(caller, index);
        self.proposals.record_vote(index);

        debug!(voter = %caller, proposal_id = index, "vote cast");
        self.events.emit(VotingEvent::Voted {
            voter: caller.clone(),
            proposal_id: index,
        });
        Ok(())
    }

    // ── Workflow transitions ────────────────────────────────────────────

    /// Open proposal registration and seed the GENESIS proposal at index 0.
    pub fn start_proposals_registering(&mut self, caller: &Address) -> Result<(), VotingError> {
        self.transition(caller, Transition::StartProposalsRegistering)
    }

    pub fn end_proposals_registering(&mut self, caller: &Address) -> Result<(), VotingError> {
        self.transition(caller, Transition::EndProposalsRegistering)
    }

    pub fn start_voting_session(&mut self, caller: &Address) -> Result<(), VotingError> {
        self.transition(caller, Transition::StartVotingSession)
    }

    pub fn end_voting_session(&mut self, caller: &Address) -> Result<(), VotingError> {
        self.transition(caller, Transition::EndVotingSession)
    }

    /// Close the process and pick the winner, returning its index.
    pub fn tally_votes(&mut self, caller: &Address) -> Result<ProposalId, VotingError> {
        self.transition(caller, Transition::TallyVotes)?;
        Ok(self.winning_proposal_id)
    }

    /// Apply one of the five owner-only transitions by value.
    pub fn transition(
        &mut self,
        caller: &Address,
        transition: Transition,
    ) -> Result<(), VotingError> {
        self.only_owner(caller)?;
        let (previous_status, new_status) = self.workflow.apply(transition)?;

        match transition {
            Transition::StartProposalsRegistering => self.proposals.seed_genesis(),
            Transition::TallyVotes => {
                self.winning_proposal_id = tally::winning_proposal(self.proposals.as_slice());
                info!(
                    winning_proposal_id = self.winning_proposal_id,
                    total_votes = self.proposals.total_votes(),
                    "votes tallied"
                );
            }
            _ => {}
        }

        info!(previous = %previous_status, new = %new_status, "workflow status change");
        self.events.emit(VotingEvent::WorkflowStatusChange {
            previous_status,
            new_status,
        });
        Ok(())
    }
}
