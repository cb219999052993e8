//! Fundamental types for the ballot workspace.
//!
//! This crate defines the types shared by every other crate in the workspace:
//! caller addresses, the workflow phase enumeration, and the common error type.

pub mod address;
pub mod error;
pub mod phase;

pub use address::Address;
pub use error::BallotError;
pub use phase::WorkflowPhase;
