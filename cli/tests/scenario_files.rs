//! Loading scenarios from disk and replaying them end to end.

use std::io::Write;
use std::path::PathBuf;

use ballot_cli::{run, Scenario, ScenarioError};
use ballot_governance::VotingEvent;
use ballot_types::{Address, WorkflowPhase};

fn bundled(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

#[test]
fn bundled_scenario_runs_cleanly() {
    let scenario = Scenario::from_toml_file(&bundled("three_voters.toml")).unwrap();
    let report = run(&scenario, true);

    assert!(report.is_success(), "{:?}", report.mismatches);
    assert_eq!(report.executed, scenario.steps.len());
    assert_eq!(report.rejected, 6);
    assert_eq!(report.process.workflow_status(), WorkflowPhase::VotesTallied);

    let results = report.process.results().unwrap();
    assert_eq!(results.winning_proposal_id, 2);
    assert_eq!(results.description, "proposal2");
    assert_eq!(results.vote_count, 2);
    assert_eq!(results.total_votes, 3);

    let voted = report
        .process
        .events()
        .iter()
        .filter(|e| matches!(e, VotingEvent::Voted { .. }))
        .count();
    assert_eq!(voted, 3);
}

#[test]
fn scenario_loaded_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
owner = "0xowner"
stop_on_error = true

[[steps]]
caller = "0xowner"
action = "add_voter"
voter = "0xowner"

[[steps]]
caller = "0xowner"
action = "start_proposals_registering"

[[steps]]
caller = "0xowner"
action = "get_proposal"
index = 0
"#
    )
    .unwrap();

    let scenario = Scenario::from_toml_file(file.path()).unwrap();
    assert!(scenario.stop_on_error);
    assert_eq!(scenario.owner, Address::new("0xowner"));

    let report = run(&scenario, scenario.stop_on_error);
    assert!(report.is_success());
    assert_eq!(report.process.proposal_count(), 1);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Scenario::from_toml_file(&path).unwrap_err();
    assert!(matches!(err, ScenarioError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
