//! Scenario configuration with TOML file support.
//!
//! A scenario names the owner of a fresh voting process and an ordered list
//! of calls to replay against it:
//!
//! ```toml
//! owner = "0xowner"
//!
//! [[steps]]
//! caller = "0xowner"
//! action = "add_voter"
//! voter = "0xalice"
//!
//! [[steps]]
//! caller = "0xmallory"
//! action = "start_proposals_registering"
//! expect_error = "unauthorized"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use ballot_governance::{ErrorKind, ProposalId};
use ballot_types::Address;
use ballot_utils::LogFormat;

use crate::ScenarioError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Owner of the voting process under test.
    pub owner: Address,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Stop at the first step whose outcome differs from its expectation.
    #[serde(default)]
    pub stop_on_error: bool,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One call against the process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub caller: Address,

    #[serde(flatten)]
    pub action: Action,

    /// When set, the step must be rejected with this kind of error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect_error: Option<ErrorKind>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    AddVoter { voter: Address },
    GetVoter { voter: Address },
    StartProposalsRegistering,
    AddProposal { description: String },
    GetProposal { index: ProposalId },
    EndProposalsRegistering,
    StartVotingSession,
    SetVote { index: ProposalId },
    EndVotingSession,
    TallyVotes,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddVoter { .. } => "add_voter",
            Self::GetVoter { .. } => "get_voter",
            Self::StartProposalsRegistering => "start_proposals_registering",
            Self::AddProposal { .. } => "add_proposal",
            Self::GetProposal { .. } => "get_proposal",
            Self::EndProposalsRegistering => "end_proposals_registering",
            Self::StartVotingSession => "start_voting_session",
            Self::SetVote { .. } => "set_vote",
            Self::EndVotingSession => "end_voting_session",
            Self::TallyVotes => "tally_votes",
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl Scenario {
    /// Load a scenario from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a scenario from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = toml::from_str(s)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn to_toml_string(&self) -> Result<String, ScenarioError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.steps.is_empty() {
            return Err(ScenarioError::NoSteps);
        }
        self.log_format()?;
        Ok(())
    }

    pub fn log_format(&self) -> Result<LogFormat, ScenarioError> {
        Ok(self.log_format.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        owner = "0xowner"

        [[steps]]
        caller = "0xowner"
        action = "add_voter"
        voter = "0xalice"
    "#;

    #[test]
    fn test_defaults_applied() {
        let scenario = Scenario::from_toml_str(MINIMAL).unwrap();
        assert_eq!(scenario.owner, Address::new("0xowner"));
        assert_eq!(scenario.log_format, "human");
        assert_eq!(scenario.log_level, "info");
        assert!(!scenario.stop_on_error);
        assert_eq!(
            scenario.steps,
            vec![Step {
                caller: Address::new("0xowner"),
                action: Action::AddVoter {
                    voter: Address::new("0xalice")
                },
                expect_error: None,
            }]
        );
    }

    #[test]
    fn test_unit_actions_and_expectations() {
        let scenario = Scenario::from_toml_str(
            r#"
            owner = "0xowner"
            log_format = "json"
            stop_on_error = true

            [[steps]]
            caller = "0xmallory"
            action = "start_proposals_registering"
            expect_error = "unauthorized"

            [[steps]]
            caller = "0xowner"
            action = "set_vote"
            index = 2
            expect_error = "wrong_phase"
            "#,
        )
        .unwrap();

        assert_eq!(scenario.log_format().unwrap(), LogFormat::Json);
        assert!(scenario.stop_on_error);
        assert_eq!(scenario.steps[0].action, Action::StartProposalsRegistering);
        assert_eq!(scenario.steps[0].expect_error, Some(ErrorKind::Unauthorized));
        assert_eq!(scenario.steps[1].action, Action::SetVote { index: 2 });
        assert_eq!(scenario.steps[1].expect_error, Some(ErrorKind::WrongPhase));
    }

    #[test]
    fn test_unknown_action_rejected() {
        let err = Scenario::from_toml_str(
            r#"
            owner = "0xowner"
            [[steps]]
            caller = "0xowner"
            action = "reset_everything"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[test]
    fn test_blank_owner_rejected() {
        let err = Scenario::from_toml_str(
            r#"
            owner = "  "
            [[steps]]
            caller = "0xowner"
            action = "tally_votes"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[test]
    fn test_empty_scenario_rejected() {
        let err = Scenario::from_toml_str(r#"owner = "0xowner""#).unwrap_err();
        assert!(matches!(err, ScenarioError::NoSteps));
    }

    #[test]
    fn test_bad_log_format_rejected() {
        let err = Scenario::from_toml_str(&format!("log_format = \"xml\"\n{MINIMAL}")).unwrap_err();
        assert!(matches!(err, ScenarioError::LogFormat(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let scenario = Scenario::from_toml_str(MINIMAL).unwrap();
        let encoded = scenario.to_toml_string().unwrap();
        let decoded = Scenario::from_toml_str(&encoded).unwrap();
        assert_eq!(decoded.steps, scenario.steps);
        assert_eq!(decoded.owner, scenario.owner);
    }
}
