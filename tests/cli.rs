//! Command-line behavior, each test in its own data directory

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn payday(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("payday").unwrap();
    cmd.env("PAYDAY_PLANNER_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn init_demo(data_dir: &TempDir) {
    payday(data_dir)
        .args(["init", "--demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo profile created"));
}

#[test]
fn init_demo_writes_profile() {
    let data_dir = TempDir::new().unwrap();
    init_demo(&data_dir);

    assert!(data_dir.path().join("data/profile.json").exists());
    assert!(data_dir.path().join("config.json").exists());

    payday(&data_dir)
        .args(["bill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("weekly on Saturday"));
}

#[test]
fn init_demo_twice_requires_force() {
    let data_dir = TempDir::new().unwrap();
    init_demo(&data_dir);

    payday(&data_dir)
        .args(["init", "--demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    payday(&data_dir)
        .args(["init", "--demo", "--force"])
        .assert()
        .success();
}

#[test]
fn plan_demo_paycheck() {
    let data_dir = TempDir::new().unwrap();
    init_demo(&data_dir);

    payday(&data_dir)
        .args(["plan", "--amount", "2500", "--date", "2026-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invest"))
        .stdout(predicate::str::contains("$365.00"))
        .stdout(predicate::str::contains("Plan is fully funded"));

    payday(&data_dir)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-01-05"))
        .stdout(predicate::str::contains("funded"));
}

#[test]
fn plan_json_dry_run_is_not_recorded() {
    let data_dir = TempDir::new().unwrap();
    init_demo(&data_dir);

    let output = payday(&data_dir)
        .args([
            "plan",
            "--amount",
            "2500.00",
            "--date",
            "2026-01-05",
            "--json",
            "--dry-run",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let run: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(run["plan"]["paycheck_amount"], 250000);
    assert_eq!(run["plan"]["bills_due_total"], 36500);
    assert_eq!(run["plan"]["window"]["end"], "2026-01-19");
    assert_eq!(run["plan"]["checks"]["bills_covered_ok"], true);

    payday(&data_dir)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plan runs recorded."));
}

#[test]
fn short_paycheck_reports_gaps() {
    let data_dir = TempDir::new().unwrap();
    init_demo(&data_dir);

    payday(&data_dir)
        .args(["plan", "--amount", "300", "--date", "2026-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries short by $65.00"))
        .stdout(predicate::str::contains("Buffer short by $600.00"))
        .stdout(predicate::str::contains("Plan has funding gaps"));
}

#[test]
fn plan_rejects_bad_input() {
    let data_dir = TempDir::new().unwrap();
    init_demo(&data_dir);

    payday(&data_dir)
        .args(["plan", "--amount", "0", "--date", "2026-01-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));

    payday(&data_dir)
        .args(["plan", "--amount", "2500", "--date", "01/05/2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    payday(&data_dir)
        .args([
            "plan",
            "--amount",
            "2500",
            "--date",
            "2026-01-05",
            "--next-paycheck-date",
            "2026-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("before paycheck date"));
}

#[test]
fn plan_without_amount_or_schedule_fails() {
    let data_dir = TempDir::new().unwrap();

    payday(&data_dir)
        .args(["plan", "--date", "2026-01-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No paycheck amount"));
}

#[test]
fn bill_add_and_remove() {
    let data_dir = TempDir::new().unwrap();

    payday(&data_dir)
        .args(["bill", "add", "Gym", "45", "--cadence", "monthly", "--due-day", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("monthly on day 15"));

    payday(&data_dir)
        .args(["bill", "add", "Gym", "45", "--due-day", "15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    payday(&data_dir)
        .args(["bill", "add", "Lessons", "30", "--cadence", "quarterly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid cadence"));

    payday(&data_dir)
        .args(["bill", "remove", "gym"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed bill: Gym"));

    payday(&data_dir)
        .args(["bill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bills found."));
}

#[test]
fn bill_add_rejects_incomplete_schedule() {
    let data_dir = TempDir::new().unwrap();

    payday(&data_dir)
        .args(["bill", "add", "Water", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Monthly bills need --due-day"));

    payday(&data_dir)
        .args(["bill", "add", "Water", "40", "--due-day", "3", "--weekday", "friday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only applies to weekly bills"));

    payday(&data_dir)
        .args(["bill", "add", "Laundry", "12", "--cadence", "weekly", "--weekday", "friday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weekly on Friday"));
}

#[test]
fn out_of_range_amounts_are_rejected() {
    let data_dir = TempDir::new().unwrap();
    init_demo(&data_dir);

    payday(&data_dir)
        .args(["plan", "--amount", "99999999999999999999", "--date", "2026-01-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    payday(&data_dir)
        .args(["bill", "add", "Yacht", "99999999999999999999", "--due-day", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    payday(&data_dir)
        .args([
            "plan",
            "--amount",
            "2500",
            "--date",
            "2026-01-05",
            "--next-paycheck-date",
            "2030-01-05",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("longer than 366 days"));
}

#[test]
fn prefs_set_and_show() {
    let data_dir = TempDir::new().unwrap();

    payday(&data_dir)
        .args(["prefs", "set", "--buffer", "450", "--surplus", "emergency_fund"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$450.00"))
        .stdout(predicate::str::contains("$2000.00 (default)"))
        .stdout(predicate::str::contains("emergency_fund"));

    payday(&data_dir)
        .args(["prefs", "set", "--surplus", "crypto"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid surplus target"));
}

#[test]
fn history_export_csv() {
    let data_dir = TempDir::new().unwrap();
    init_demo(&data_dir);

    payday(&data_dir)
        .args(["plan", "--amount", "2500", "--date", "2026-01-05"])
        .assert()
        .success();

    let export_path = data_dir.path().join("history.csv");
    payday(&data_dir)
        .args(["history", "export", "--output"])
        .arg(&export_path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&export_path).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("id,created_at,period_start"));
    let row = lines.next().unwrap();
    assert!(row.contains("2026-01-05,2026-01-19,2500.00,365.00"));
    assert!(lines.next().is_none());
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    payday(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("profile.json"))
        .stdout(predicate::str::contains("Default period days:      14"));
}
