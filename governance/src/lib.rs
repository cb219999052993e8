//! Phase-gated voting for the ballot workspace.
//!
//! An owner registers voters, opens and closes a proposal window, opens and
//! closes a voting window, then tallies. Six phases, strictly forward:
//! RegisteringVoters → ProposalsRegistrationStarted → ProposalsRegistrationEnded
//! → VotingSessionStarted → VotingSessionEnded → VotesTallied
//!
//! Key principle: one registered voter = one vote, fully attributable.
//! Eligibility is an owner-controlled allow-list.

pub mod error;
pub mod event;
pub mod process;
pub mod proposal;
pub mod tally;
pub mod voter;
pub mod workflow;

pub use error::{ErrorKind, Role, VotingError};
pub use event::{EventBus, EventListener, VotingEvent};
pub use process::VotingProcess;
pub use proposal::{Proposal, ProposalId, ProposalRegistry, GENESIS_DESCRIPTION};
pub use tally::{winning_proposal, TallyResult};
pub use voter::{Voter, VoterRegistry};
pub use workflow::{Transition, Workflow};
