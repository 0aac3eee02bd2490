use serde_json::Value as JsonValue;
use yaml_grid::test_utils::DocumentFixture;

use crate::common::TestProject;

/// Nested values are flattened onto one line and missing cells are blank
#[test]
fn test_show_table() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();

    let output = project.run_yamlgrid(&["show", &doc]).unwrap();
    output.assert_success();

    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(lines[0], "#  name  tags");
    assert!(lines[1].chars().all(|c| c == '-'));
    assert_eq!(lines[2], "1  a     - x⏎- y");
    assert_eq!(lines[3], "2  b");
    assert_eq!(lines[4], "2 rows");
}

#[test]
fn test_show_columns_are_first_seen_union() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::inventory()).unwrap();

    let output = project.run_yamlgrid(&["show", &doc]).unwrap();
    output.assert_success();

    let header = output.stdout.lines().next().unwrap();
    let columns: Vec<&str> = header.split_whitespace().collect();
    assert_eq!(columns, ["#", "name", "count", "price", "active", "tags", "notes"]);
    output.assert_stdout_contains("fragile⏎keep upright");
}

#[test]
fn test_show_sequence_root() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::sequence()).unwrap();

    let output = project.run_yamlgrid(&["show", &doc]).unwrap();
    output.assert_success().assert_stdout_contains("ada").assert_stdout_contains("2 rows");
}

#[test]
fn test_show_filter_keeps_row_numbers() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::inventory()).unwrap();

    let output = project.run_yamlgrid(&["show", &doc, "--filter", "name=GAD"]).unwrap();
    output.assert_success().assert_stdout_contains("1 of 2 rows");
    assert!(output.stdout.lines().any(|line| line.starts_with("2  gadget")));
    assert!(!output.stdout.contains("widget"));
}

#[test]
fn test_show_filters_combine() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::inventory()).unwrap();

    let output = project
        .run_yamlgrid(&["show", &doc, "--filter", "tags=blue", "--filter", "name=gadget"])
        .unwrap();
    output.assert_success().assert_stdout_contains("0 of 2 rows");
}

#[test]
fn test_show_empty_table_placeholder() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::no_table()).unwrap();

    let output = project.run_yamlgrid(&["show", &doc]).unwrap();
    output.assert_success();
    assert_eq!(output.stdout.trim(), "No data");
}

#[test]
fn test_show_empty_document() {
    let project = TestProject::new().unwrap();
    project.write_document("empty.yaml", "").unwrap();

    let output = project.run_yamlgrid(&["show", "empty.yaml"]).unwrap();
    output.assert_success().assert_stdout_contains("No data");
}

#[test]
fn test_show_json_payload() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();

    let output = project.run_yamlgrid(&["show", &doc, "--format", "json"]).unwrap();
    output.assert_success();

    let payload: JsonValue = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(payload["columns"], serde_json::json!(["name", "tags"]));
    assert_eq!(payload["rows"][0]["tags"], "- x\n- y");
    assert_eq!(payload["rows"][1]["tags"], "");
}

#[test]
fn test_show_json_ignores_filters() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();

    let output = project
        .run_yamlgrid(&["show", &doc, "--format", "json", "--filter", "name=a"])
        .unwrap();
    output.assert_success().assert_stderr_contains("Filters are ignored with --format json");

    let payload: JsonValue = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(payload["rows"].as_array().unwrap().len(), 2);
}

#[test]
fn test_show_yaml_records() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::inventory()).unwrap();

    let output = project.run_yamlgrid(&["show", &doc, "-f", "yaml", "--filter", "name=wid"]).unwrap();
    output.assert_success();

    let records: Vec<serde_yaml::Mapping> = serde_yaml::from_str(&output.stdout).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("count").and_then(|v| v.as_str()), Some("3"));
}

#[test]
fn test_show_non_list_table_warns() {
    let project = TestProject::new().unwrap();
    project.write_document("odd.yaml", "tables: not a list\nother: 1\n").unwrap();

    let output = project.run_yamlgrid(&["show", "odd.yaml"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("No data")
        .assert_stderr_contains("is not a list");

    let quiet = project.run_yamlgrid(&["--quiet", "show", "odd.yaml"]).unwrap();
    quiet.assert_success();
    assert!(quiet.stderr.is_empty(), "stderr: {}", quiet.stderr);
}

#[test]
fn test_show_scalar_rows_warn() {
    let project = TestProject::new().unwrap();
    project.write_document("mixed.yaml", "- {name: a}\n- plain\n").unwrap();

    let output = project.run_yamlgrid(&["show", "mixed.yaml"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("2 rows")
        .assert_stderr_contains("Row(s) 2 in mixed.yaml are not mappings");
}
