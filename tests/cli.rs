use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "mreport";

fn mreport(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("MREPORT_CONFIG_DIR", config_dir.path());
    cmd.env("MREPORT_LOG", "off");
    cmd
}

#[test]
fn months_prints_five_labels_in_order() {
    let dir = TempDir::new().unwrap();
    mreport(&dir)
        .args(["months", "--date", "2024-03-15"])
        .assert()
        .success()
        .stdout("Apr-24\nMar-24\nFeb-24\nJan-24\nDec-23\n");
}

#[test]
fn months_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    mreport(&dir)
        .args(["months", "--date", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn export_json_writes_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("entries.json");
    std::fs::write(
        &input,
        r#"[
            {"item": "Water Bill", "month": "Mar-24", "amount": 1500, "deadline": "2024-03-10", "status": "paid"},
            {"item": "Lift AMC", "month": "Mar-24", "amount": "2500.50"}
        ]"#,
    )
    .unwrap();
    let out = dir.path().join("out");

    mreport(&dir)
        .arg("export")
        .arg(&input)
        .args(["--title", "March dues"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("MARCH DUES").and(contains("₹1,500")).and(contains("TOTAL")));

    let bytes = std::fs::read(out.join("Maintenance_Report.xls")).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    let html = String::from_utf8_lossy(&bytes[3..]);
    assert!(html.contains("Water Bill"));
    assert!(html.contains("Lift AMC"));
    assert!(html.contains("₹4,001"));
}

#[test]
fn export_csv_reports_rejected_rows() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("entries.csv");
    std::fs::write(
        &input,
        "item,month,amount,deadline,status\nSecurity,Mar-24,123456,,pending\nGarden,,abc,,\n",
    )
    .unwrap();

    mreport(&dir)
        .arg("export")
        .arg(&input)
        .arg("--output")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("₹1,23,456"))
        .stderr(contains("row 2: Billing Month").and(contains("row 2: Amount")));

    assert!(dir.path().join("Maintenance_Report.xls").exists());
}

#[test]
fn export_fails_when_no_row_is_valid() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("entries.json");
    std::fs::write(&input, r#"[{"item": "", "month": "Mar-24", "amount": "0"}]"#).unwrap();

    mreport(&dir)
        .arg("export")
        .arg(&input)
        .arg("--output")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("No valid rows"));

    assert!(!dir.path().join("Maintenance_Report.xls").exists());
}

#[test]
fn config_shows_paths_and_saves() {
    let dir = TempDir::new().unwrap();
    mreport(&dir)
        .args(["config", "--save"])
        .assert()
        .success()
        .stdout(contains("Currency:      INR").and(contains("Settings saved")));

    assert!(dir.path().join("config.json").exists());
}
