//! Events emitted by a voting process after each successful mutation.

use crate::proposal::ProposalId;
use ballot_types::{Address, WorkflowPhase};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Notifications observers receive, in the order the state changes happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum VotingEvent {
    /// The owner added an identity to the allow-list.
    VoterRegistered { voter_address: Address },
    /// A voter submitted a proposal.
    ProposalRegistered { proposal_id: ProposalId },
    /// A voter cast their vote.
    Voted {
        voter: Address,
        proposal_id: ProposalId,
    },
    /// The workflow advanced by one phase.
    WorkflowStatusChange {
        previous_status: WorkflowPhase,
        new_status: WorkflowPhase,
    },
}

pub type EventListener = Box<dyn Fn(&VotingEvent) + Send + Sync>;

/// Synchronous fan-out event bus that also keeps the full event log.
///
/// Listeners are invoked inline by the mutating operation, after its state
/// change is complete; keep handlers fast.
pub struct EventBus {
    listeners: Vec<EventListener>,
    log: Vec<VotingEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            log: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub fn emit(&mut self, event: VotingEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
        self.log.push(event);
    }

    /// Every event emitted so far, oldest first.
    pub fn log(&self) -> &[VotingEvent] {
        &self.log
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .field("log", &self.log)
            .finish()
    }
}
