use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn cmd() -> Command {
    Command::cargo_bin("mibtab").unwrap()
}

/// Small interface module in the snapshot format the exporter reads.
const IF_MIB: &str = r#"{
  "module": "IF-MIB",
  "nodes": [
    {"name": "ifNumber", "oid": "1.3.6.1.2.1.2.1", "kind": "scalar", "syntax": "Integer32", "description": "Number of interfaces"},
    {"name": "ifTable", "oid": "1.3.6.1.2.1.2.2", "kind": "table", "description": "A list of interface entries"},
    {"name": "ifEntry", "oid": "1.3.6.1.2.1.2.2.1", "kind": "row"},
    {"name": "ifIndex", "oid": "1.3.6.1.2.1.2.2.1.1", "kind": "column", "syntax": "Integer32"},
    {"name": "ifDescr", "oid": "1.3.6.1.2.1.2.2.1.2", "kind": "column", "syntax": "DisplayString", "description": "Interface description"}
  ]
}"#;

fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("IF-MIB.json");
    fs::write(&path, IF_MIB).unwrap();
    path
}

// ===== Help and version =====

#[test]
fn test_help_lists_all_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--mib-dir"))
        .stdout(predicate::str::contains("--module"))
        .stdout(predicate::str::contains("--dump-tables"))
        .stdout(predicate::str::contains("--scalar-mode"))
        .stdout(predicate::str::contains("--group-depth"))
        .stdout(predicate::str::contains("--sql-schema"))
        .stdout(predicate::str::contains("--out"))
        .stdout(predicate::str::contains("--verbosity"));
}

#[test]
fn test_help_shows_defaults() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[default: .]"))
        .stdout(predicate::str::contains("[default: none]"))
        .stdout(predicate::str::contains("[default: 10]"))
        .stdout(predicate::str::contains("[default: info]"));
}

#[test]
fn test_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mibtab"));
}

// ===== Argument and input validation =====

#[test]
fn test_module_flag_is_required() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--module"));
}

#[test]
fn test_missing_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .args(["--mib-dir", dir.path().to_str().unwrap()])
        .args(["--module", "NOT-A-MIB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read snapshot"))
        .stderr(predicate::str::contains("NOT-A-MIB.json"));
}

#[test]
fn test_corrupt_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("BAD-MIB.json"), "{ not json").unwrap();

    cmd()
        .args(["--mib-dir", dir.path().to_str().unwrap()])
        .args(["--module", "BAD-MIB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid snapshot"));
}

#[test]
fn test_invalid_scalar_mode_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    cmd()
        .args(["--mib-dir", dir.path().to_str().unwrap()])
        .args(["--module", "IF-MIB"])
        .args(["--scalar-mode", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scalar mode: sideways"));
}

// ===== Raw node dump =====

#[test]
fn test_raw_dump_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    cmd()
        .args(["--mib-dir", dir.path().to_str().unwrap()])
        .args(["--module", "IF-MIB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"module\": \"IF-MIB\""))
        .stdout(predicate::str::contains("\"ifIndex\""))
        .stdout(predicate::str::contains("\"nodes\""));
}

#[test]
fn test_stdout_is_pure_json() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    // Logs must land on stderr only, even at the default verbosity.
    let output = cmd()
        .args(["--mib-dir", dir.path().to_str().unwrap()])
        .args(["--module", "IF-MIB"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["module"], "IF-MIB");
    assert_eq!(json["nodes"].as_array().unwrap().len(), 5);
}

// ===== Table reconstruction =====

#[test]
fn test_dump_tables() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    cmd()
        .args(["--mib-dir", dir.path().to_str().unwrap()])
        .args(["--module", "IF-MIB"])
        .arg("--dump-tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"table\": \"ifTable\""))
        .stdout(predicate::str::contains("\"snmp_oid_prefix\": \"1.3.6.1.2.1.2.2\""))
        .stdout(predicate::str::contains("\"type\": \"integer\""))
        .stdout(predicate::str::contains("\"ifNumber\"").not());
}

#[test]
fn test_separate_scalar_mode() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    // Scalar modes replace the raw dump; table reconstruction stays off.
    cmd()
        .args(["--mib-dir", dir.path().to_str().unwrap()])
        .args(["--module", "IF-MIB"])
        .args(["--scalar-mode", "separate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"table\": \"scalar_ifNumber\""))
        .stdout(predicate::str::contains("\"table\": \"ifTable\"").not());
}

#[test]
fn test_grouped_scalar_mode() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    cmd()
        .args(["--mib-dir", dir.path().to_str().unwrap()])
        .args(["--module", "IF-MIB"])
        .args(["--scalar-mode", "grouped"])
        .args(["--group-depth", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"table\": \"scalars_1_3_6_1_2_1_2\""));
}

// ===== DDL rendering =====

#[test]
fn test_sql_schema_implies_dump_tables() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    cmd()
        .args(["--mib-dir", dir.path().to_str().unwrap()])
        .args(["--module", "IF-MIB"])
        .arg("--sql-schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE FOREIGN TABLE ifTable"))
        .stdout(predicate::str::contains(
            "ifIndex integer OPTIONS (snmp_oid '1.3.6.1.2.1.2.2.1.1')",
        ))
        .stdout(predicate::str::contains(
            "OPTIONS (updatable 'false', snmp_type 'full_table'",
        ));
}

// ===== Output file =====

#[test]
fn test_out_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let out = dir.path().join("export.json");

    cmd()
        .args(["--mib-dir", dir.path().to_str().unwrap()])
        .args(["--module", "IF-MIB"])
        .arg("--dump-tables")
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("\"table\": \"ifTable\""));
}
