use assert_cmd::Command;
use predicates::prelude::*;

const VISA_XML: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<pages>
<page id="1">
<textline y0="750"><text font="MetaBookLF-Roman" x0="10" x1="200">RBC Royal Bank Visa</text></textline>
<textline y0="600">
<text font="MetaBoldLF-Roman" x0="10" x1="40">03/01</text>
<text font="MetaBoldLF-Roman" x0="60" x1="90">03/02</text>
<text font="MetaBoldLF-Roman" x0="100" x1="200">COFFEE SHOP</text>
<text font="MetaBoldLF-Roman" x0="400" x1="450">-4.50</text>
</textline>
<textline y0="580">
<text font="MetaBoldLF-Roman" x0="10" x1="40">03/05</text>
<text font="MetaBoldLF-Roman" x0="60" x1="90">03/06</text>
<text font="MetaBoldLF-Roman" x0="100" x1="200">PAYMENT - THANK YOU</text>
<text font="MetaBoldLF-Roman" x0="400" x1="450">100.00</text>
</textline>
</page>
</pages>
"#;

fn rbcx() -> Command {
    Command::cargo_bin("rbcx").unwrap()
}

fn fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("statement.xml");
    std::fs::write(&path, VISA_XML).unwrap();
    path
}

#[test]
fn parses_layout_xml() {
    let dir = tempfile::tempdir().unwrap();

    let output = rbcx().arg(fixture(&dir)).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], serde_json::Value::Bool(true));
    assert_eq!(value["statement_type"], "credit_card");
    assert_eq!(value["metadata"]["total_transactions"], 2);
    assert_eq!(value["transactions"][0]["description"], "COFFEE SHOP");
    assert_eq!(value["transactions"][0]["type"], "debit");
    assert_eq!(value["transactions"][1]["type"], "credit");
}

#[test]
fn missing_file_fails_with_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.pdf");

    rbcx()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("PDF file not found"));
}

#[test]
fn missing_argument_prints_usage() {
    rbcx()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: rbcx <pdf_path>"));
}

#[test]
fn csv_format() {
    let dir = tempfile::tempdir().unwrap();

    rbcx()
        .arg(fixture(&dir))
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("date,description,amount,type\n"))
        .stdout(predicate::str::contains(",COFFEE SHOP,4.50,debit"));
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");

    rbcx()
        .arg(fixture(&dir))
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("\"parser\": \"rbc-statement-converter\""));
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no-such-dir").join("out.json");

    rbcx()
        .arg(fixture(&dir))
        .arg("--output")
        .arg(&out)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("\"error_type\": \"OutputError\""));

    assert!(!out.exists());
}

#[test]
fn config_sets_transaction_font() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"credit": {"transaction_font": "SomeOtherFont"}}"#).unwrap();

    rbcx()
        .arg(fixture(&dir))
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_transactions\": 0"));
}

#[test]
fn bad_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, "{ nope").unwrap();

    rbcx()
        .arg(fixture(&dir))
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"error_type\": \"ConfigError\""));
}
