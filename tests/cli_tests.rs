//! CLI integration tests using assert_cmd.
//!
//! The heavy full-rectangle scans are covered by unit tests inside the
//! library; here we exercise the argument surface, the verify subcommand,
//! output formatting in both modes, and the fast regimes end to end.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn repcross() -> Command {
    Command::cargo_bin("repcross").unwrap()
}

// --- Help and arg validation ---

#[test]
fn help_shows_all_subcommands() {
    repcross().arg("--help").assert().success().stdout(
        predicate::str::contains("nondiv")
            .and(predicate::str::contains("div-finite"))
            .and(predicate::str::contains("n7"))
            .and(predicate::str::contains("all"))
            .and(predicate::str::contains("verify")),
    );
}

#[test]
fn help_verify_shows_args() {
    repcross()
        .args(["verify", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--x")
                .and(predicate::str::contains("--y"))
                .and(predicate::str::contains("--m"))
                .and(predicate::str::contains("--n")),
        );
}

#[test]
fn help_all_shows_skip_flags() {
    repcross()
        .args(["all", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--skip-nondiv")
                .and(predicate::str::contains("--skip-div-finite"))
                .and(predicate::str::contains("--skip-n7")),
        );
}

#[test]
fn unknown_subcommand_fails() {
    repcross()
        .arg("nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn verify_missing_required_args_fails() {
    repcross()
        .args(["verify", "--x", "2", "--y", "5", "--m", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--n").or(predicate::str::contains("required")));
}

// --- Tuple verification ---

#[test]
fn verify_confirms_the_31_coincidence() {
    repcross()
        .args(["verify", "--x", "2", "--y", "5", "--m", "5", "--n", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("R(2, 5) = R(5, 3) = 31")
                .and(predicate::str::contains("divisibility case")),
        );
}

#[test]
fn verify_confirms_the_8191_coincidence() {
    repcross()
        .args(["verify", "--x", "2", "--y", "90", "--m", "13", "--n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R(2, 13) = R(90, 3) = 8191"));
}

#[test]
fn verify_refutes_an_unequal_tuple() {
    repcross()
        .args(["verify", "--x", "2", "--y", "3", "--m", "4", "--n", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("R(2, 4) = 15")
                .and(predicate::str::contains("R(3, 3) = 13"))
                .and(predicate::str::contains("not equal")),
        );
}

#[test]
fn verify_rejects_bases_below_two() {
    repcross()
        .args(["verify", "--x", "1", "--y", "5", "--m", "5", "--n", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bases must be >= 2"));
}

#[test]
fn verify_rejects_zero_length() {
    repcross()
        .args(["verify", "--x", "2", "--y", "5", "--m", "0", "--n", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lengths must be >= 1"));
}

// --- Regime runs ---

#[test]
fn div_finite_reports_zero_solutions() {
    repcross()
        .arg("div-finite")
        .assert()
        .success()
        .stdout(predicate::str::contains("div-finite").and(predicate::str::contains("0 solution")));
}

#[test]
fn all_respects_skip_flags() {
    repcross()
        .args(["all", "--skip-nondiv", "--skip-n7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("div-finite").and(predicate::str::contains("nondiv").not()),
        );
}

#[test]
fn n7_header_carries_derived_caps() {
    repcross()
        .args(["all", "--skip-nondiv", "--skip-div-finite"])
        .timeout(std::time::Duration::from_secs(120))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("n7")
                .and(predicate::str::contains("y<=5575"))
                .and(predicate::str::contains("m<=78"))
                .and(predicate::str::contains("0 solution")),
        );
}

#[test]
fn threads_flag_is_accepted() {
    repcross()
        .args(["--threads", "2", "div-finite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 solution"));
}

#[test]
fn json_output_is_parseable() {
    let output = repcross().args(["--json", "div-finite"]).output().unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout under --json must be valid JSON");
    assert_eq!(reports[0]["regime"], "div-finite");
    assert!(
        reports[0]["solutions"].as_array().unwrap().is_empty(),
        "configured cases must produce no solutions"
    );
}
