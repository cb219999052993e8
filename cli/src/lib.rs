//! Scenario runner for the ballot voting process.
//!
//! Plays the part of the external caller: loads a TOML scenario, replays its
//! calls against a fresh process and reports which outcomes matched.

pub mod config;
pub mod error;
pub mod runner;

pub use config::{Action, Scenario, Step};
pub use error::ScenarioError;
pub use runner::{run, Mismatch, RunReport, StepOutput};
