//! Replays a [`Scenario`] against a fresh [`VotingProcess`].

use ballot_governance::{ErrorKind, Proposal, ProposalId, Voter, VotingError, VotingProcess};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{Action, Scenario, Step};

/// What an accepted step produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutput {
    Done,
    Voter(Voter),
    Proposal(Proposal),
    ProposalAdded(ProposalId),
    Winner(ProposalId),
}

/// A step whose outcome did not match its expectation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub step: usize,
    pub action: &'static str,
    pub expected: Option<ErrorKind>,
    /// `None` when the step was accepted.
    pub actual: Option<ErrorKind>,
    pub message: String,
}

#[derive(Debug)]
pub struct RunReport {
    pub process: VotingProcess,
    pub executed: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub mismatches: Vec<Mismatch>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Run every step in order. Rejected steps never stop the run unless their
/// rejection was unexpected and `stop_on_error` is set.
pub fn run(scenario: &Scenario, stop_on_error: bool) -> RunReport {
    let mut report = RunReport {
        process: VotingProcess::new(scenario.owner.clone()),
        executed: 0,
        accepted: 0,
        rejected: 0,
        mismatches: Vec::new(),
    };

    for (index, step) in scenario.steps.iter().enumerate() {
        let outcome = apply(&mut report.process, step);
        report.executed += 1;

        let mismatch = match (&outcome, step.expect_error) {
            (Ok(output), None) => {
                report.accepted += 1;
                info!(step = index, caller = %step.caller, action = step.action.name(), ?output, "step accepted");
                None
            }
            (Ok(_), Some(expected)) => {
                report.accepted += 1;
                Some(Mismatch {
                    step: index,
                    action: step.action.name(),
                    expected: Some(expected),
                    actual: None,
                    message: "step was accepted".to_string(),
                })
            }
            (Err(err), expected) => {
                report.rejected += 1;
                if expected == Some(err.kind()) {
                    info!(step = index, caller = %step.caller, action = step.action.name(), %err, "step rejected as expected");
                    None
                } else {
                    Some(Mismatch {
                        step: index,
                        action: step.action.name(),
                        expected,
                        actual: Some(err.kind()),
                        message: err.to_string(),
                    })
                }
            }
        };

        if let Some(mismatch) = mismatch {
            warn!(
                step = mismatch.step,
                action = mismatch.action,
                expected = ?mismatch.expected,
                actual = ?mismatch.actual,
                message = %mismatch.message,
                "unexpected step outcome"
            );
            report.mismatches.push(mismatch);
            if stop_on_error {
                break;
            }
        }
    }

    report
}

fn apply(process: &mut VotingProcess, step: &Step) -> Result<StepOutput, VotingError> {
    let caller = &step.caller;
    match &step.action {
        Action::AddVoter { voter } => process.add_voter(caller, voter.clone()).map(|_| StepOutput::Done),
        Action::GetVoter { voter } => process.get_voter(caller, voter).map(StepOutput::Voter),
        Action::StartProposalsRegistering => process
            .start_proposals_registering(caller)
            .map(|_| StepOutput::Done),
        Action::AddProposal { description } => process
            .add_proposal(caller, description.as_str())
            .map(StepOutput::ProposalAdded),
        Action::GetProposal { index } => process
            .get_one_proposal(caller, *index)
            .map(|p| StepOutput::Proposal(p.clone())),
        Action::EndProposalsRegistering => process
            .end_proposals_registering(caller)
            .map(|_| StepOutput::Done),
        Action::StartVotingSession => process.start_voting_session(caller).map(|_| StepOutput::Done),
        Action::SetVote { index } => process.set_vote(caller, *index).map(|_| StepOutput::Done),
        Action::EndVotingSession => process.end_voting_session(caller).map(|_| StepOutput::Done),
        Action::TallyVotes => process.tally_votes(caller).map(StepOutput::Winner),
    }
}
