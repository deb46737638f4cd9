#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("shiftplan-cli").unwrap()
}

#[test]
fn demo_prints_weekly_report() {
    cli()
        .args(["demo", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WEEKLY EMPLOYEE SCHEDULE"))
        .stdout(predicate::str::contains("[ MONDAY ]"))
        .stdout(predicate::str::contains("[ SUNDAY ]"));
}

#[test]
fn demo_is_reproducible_with_seed() {
    let first = cli().args(["demo", "--seed", "21"]).output().unwrap();
    let second = cli().args(["demo", "--seed", "21"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn assign_rejects_unknown_shift() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("prefs.csv");
    fs::write(&prefs, "name,day,first\nAlice,Monday,Night\n").unwrap();

    cli()
        .args(["assign", "--csv"])
        .arg(&prefs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shift Night"));
}

#[test]
fn assign_writes_exports() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("prefs.csv");
    fs::write(&prefs, "name,day,first\nAlice,Monday,Morning\nBob,Monday,Morning\n").unwrap();
    let out_csv = dir.path().join("schedule.csv");

    cli()
        .args(["assign", "--seed", "1", "--csv"])
        .arg(&prefs)
        .arg("--out-csv")
        .arg(&out_csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning   : Alice, Bob"));

    let content = fs::read_to_string(&out_csv).unwrap();
    assert!(content.starts_with("day,shift,position,employee"));
}

#[test]
fn check_flags_understaffing_with_exit_code_two() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("prefs.csv");
    fs::write(&prefs, "name,day,first\nAlice,,\n").unwrap();
    let report = dir.path().join("gaps.csv");

    cli()
        .args(["check", "--seed", "3", "--csv"])
        .arg(&prefs)
        .arg("--report")
        .arg(&report)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("understaffed: Monday Morning"));

    let gaps = fs::read_to_string(&report).unwrap();
    assert!(gaps.starts_with("day,shift,assigned,required"));
    assert_eq!(gaps.lines().count(), 1 + 21);
}

#[test]
fn check_passes_when_every_shift_is_covered() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("prefs.csv");
    let rows: String = (0..6).map(|i| format!("emp{i},\n")).collect();
    fs::write(&prefs, format!("name,day\n{rows}")).unwrap();

    cli()
        .args(["check", "--seed", "4", "--max-days", "7", "--csv"])
        .arg(&prefs)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn unseeded_demo_reports_its_seed() {
    let first = cli().arg("demo").output().unwrap();
    assert!(first.status.success());
    let stderr = String::from_utf8(first.stderr).unwrap();
    let seed = stderr
        .lines()
        .find_map(|l| l.strip_prefix("seed: "))
        .expect("seed line on stderr")
        .trim()
        .to_string();

    let replay = cli().args(["demo", "--seed", seed.as_str()]).output().unwrap();
    assert_eq!(first.stdout, replay.stdout);
}
