use assert_cmd::Command;
use predicates::prelude::*;
use serde_yaml::Value;

use crate::common::TestProject;

fn yamlgrid(project: &TestProject) -> Command {
    Command::from_std(project.command())
}

#[test]
fn test_config_path_from_environment() {
    let project = TestProject::new().unwrap();

    yamlgrid(&project)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(project.config_path().to_string_lossy().into_owned()));
}

#[test]
fn test_config_flag_overrides_environment() {
    let project = TestProject::new().unwrap();
    let custom = project.project_path().join("custom.toml");
    std::fs::write(&custom, "tables_key = \"items\"\n").unwrap();

    yamlgrid(&project)
        .args(["--config", custom.to_str().unwrap(), "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tables_key = \"items\""))
        .stdout(predicate::str::contains("from --config"));
}

#[test]
fn test_config_show_defaults() {
    let project = TestProject::new().unwrap();

    yamlgrid(&project)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Location:"))
        .stdout(predicate::str::contains("tables_key = \"tables\""))
        .stdout(predicate::str::contains("on_unparsable_latest = \"abort\""))
        .stdout(predicate::str::contains("lock_saves = true"));
}

#[test]
fn test_config_default_location_is_optional() {
    let project = TestProject::new().unwrap();

    yamlgrid(&project)
        .env_remove("YAMLGRID_CONFIG")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"));
}

#[test]
fn test_config_explicit_file_must_exist() {
    let project = TestProject::new().unwrap();

    yamlgrid(&project)
        .args(["--config", "missing.toml", "config", "show"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn test_config_unknown_key_rejected() {
    let project = TestProject::new().unwrap();
    project.write_config("table_key = \"typo\"\n").unwrap();

    yamlgrid(&project)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_custom_tables_key() {
    let project = TestProject::new().unwrap();
    project.write_config("tables_key = \"items\"\n").unwrap();
    project.write_document("items.yaml", "items:\n- sku: a1\nmeta: x\n").unwrap();

    let output = project
        .run_yamlgrid(&["set", "items.yaml", "--row", "1", "--column", "qty", "--value", "4"])
        .unwrap();
    output.assert_success();

    let saved = project.load_document("items.yaml").unwrap();
    assert_eq!(saved["items"][0]["qty"], Value::from(4));
    assert_eq!(saved["meta"], Value::from("x"));
    assert!(saved.get("tables").is_none());
}

#[test]
fn test_config_show_reads_file() {
    let project = TestProject::new().unwrap();
    project
        .write_config("on_unparsable_latest = \"drop-siblings\"\nlock_saves = false\n")
        .unwrap();

    yamlgrid(&project)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from YAMLGRID_CONFIG"))
        .stdout(predicate::str::contains("on_unparsable_latest = \"drop-siblings\""))
        .stdout(predicate::str::contains("lock_saves = false"));
}
