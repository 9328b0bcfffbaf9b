use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_LINES_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_list_total_and_duplicate() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "Rent", "1200.00", "Housing", "01/01/2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Line Added"))
        .stdout(predicate::str::contains("Total: $1200.00"));

    budget(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Housing"))
        .stdout(predicate::str::contains("01/01/2024"));

    budget(&dir)
        .args(["add", "Rent", "1200.00", "Housing", "01/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Description already used - please use a different description",
        ));

    budget(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout("$1200.00\n");
}

#[test]
fn remove_updates_total() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "Lunch", "5.00", "Food", "01/02/2024"])
        .assert()
        .success();
    budget(&dir)
        .args(["add", "Coffee", "3.50", "Food", "01/02/2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $8.50"));

    budget(&dir)
        .args(["remove", "Coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Line Removed"))
        .stdout(predicate::str::contains("Total: $5.00"));

    budget(&dir)
        .args(["remove", "Coffee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Coffee"));
}

#[test]
fn rejects_bad_cost_and_date() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "Lunch", "5", "Food", "01/02/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("formatted with 2 decimal points"));

    budget(&dir)
        .args(["add", "Lunch", "5.00", "Food", "13/01/2020"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "please make sure the date is formatted as MM/DD/YYYY",
        ));

    budget(&dir)
        .args(["add", "Lunch", "5.00", "", "01/02/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all fields"));

    budget(&dir).arg("total").assert().success().stdout("$0.00\n");
}

#[test]
fn negative_cost_is_accepted() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "Refund", "-5.5", "Misc", "02/29/2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $-5.50"));
}

#[test]
fn export_csv_to_stdout_and_log() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "Rent", "1200.00", "Housing", "01/01/2024"])
        .assert()
        .success();

    budget(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("description,cost,category,date"))
        .stdout(predicate::str::contains("Rent,1200.00,Housing,01/01/2024"));

    budget(&dir)
        .args(["log", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("\"Rent\""));
}

#[test]
fn export_json_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("lines.json");

    budget(&dir)
        .args(["add", "Rent", "1200.00", "Housing", "01/01/2024"])
        .assert()
        .success();

    budget(&dir)
        .args(["export", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["entry_count"], 1);
    assert_eq!(value["entries"][0]["cost"], "1200.00");
}

#[test]
fn config_writes_default_settings() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: $"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn list_empty() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget lines yet."));
}

#[test]
fn values_may_start_with_a_hyphen() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "-refund", "-5.00", "-misc", "01/01/2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $-5.00"));

    budget(&dir)
        .args(["add", "Lunch", "5.00", "Food", "-01/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "please make sure the date is formatted as MM/DD/YYYY",
        ));

    budget(&dir)
        .args(["remove", "-refund"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $0.00"));
}
