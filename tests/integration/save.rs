use serde_json::Value as JsonValue;
use serde_yaml::Value;
use yaml_grid::test_utils::DocumentFixture;

use crate::common::TestProject;

fn export(project: &TestProject, doc: &str) -> JsonValue {
    let output = project.run_yamlgrid(&["show", doc, "--format", "json"]).unwrap();
    output.assert_success();
    serde_json::from_str(&output.stdout).unwrap()
}

/// An unedited export saved back keeps every value
#[test]
fn test_save_unedited_round_trip() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();
    let before = project.load_document(&doc).unwrap();

    let payload = export(&project, &doc);
    project.write_document("grid.json", &payload.to_string()).unwrap();

    let output = project.run_yamlgrid(&["save", &doc, "--grid", "grid.json"]).unwrap();
    output.assert_success().assert_stdout_contains("Saved tags.yaml");

    let after = project.load_document(&doc).unwrap();
    assert_eq!(after, before);
    assert!(after["tables"][1].get("tags").is_none(), "padding must not add keys");
}

#[test]
fn test_save_edited_payload_types_cells() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::inventory()).unwrap();

    let mut payload = export(&project, &doc);
    payload["rows"][0]["count"] = "5".into();
    payload["rows"][0]["tags"] = "[red]".into();
    payload["rows"][1]["active"] = "false".into();
    payload["rows"][1]["count"] = "".into();
    project.write_document("grid.json", &payload.to_string()).unwrap();

    project.run_yamlgrid(&["save", &doc, "--grid", "grid.json"]).unwrap().assert_success();

    let saved = project.load_document(&doc).unwrap();
    let rows = &saved["tables"];
    assert_eq!(rows[0]["count"], Value::from(5));
    assert_eq!(rows[0]["tags"], serde_yaml::from_str::<Value>("[red]").unwrap());
    assert_eq!(rows[1]["active"], Value::Bool(false));
    assert!(rows[1].get("count").is_none());

    // Keys outside the table keep their values and order
    let keys: Vec<&str> =
        saved.as_mapping().unwrap().keys().filter_map(Value::as_str).collect();
    assert_eq!(keys, ["title", "tables", "owner"]);
    assert_eq!(saved["owner"]["team"], Value::from("ops"));
}

#[test]
fn test_save_from_stdin() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::sequence()).unwrap();

    let payload = r#"[{"name": "grace", "age": "85"}]"#;
    let output = project
        .run_yamlgrid_with_stdin(&["--quiet", "save", &doc, "--grid", "-"], payload)
        .unwrap();
    output.assert_success();
    assert!(output.stdout.is_empty(), "quiet save printed: {}", output.stdout);

    let saved = project.load_document(&doc).unwrap();
    let rows = saved.as_sequence().expect("root stays a sequence");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], Value::from("grace"));
    assert_eq!(rows[0]["age"], Value::from(85));
}

/// Keys changed on disk after export survive the save
#[test]
fn test_save_merges_into_latest_document() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();

    let mut payload = export(&project, &doc);
    payload["rows"][1]["name"] = "c".into();
    project.write_document("grid.json", &payload.to_string()).unwrap();

    project
        .write_document(&doc, "version: 3\ntables:\n- name: stale\nfooter: kept\n")
        .unwrap();

    project.run_yamlgrid(&["save", &doc, "--grid", "grid.json"]).unwrap().assert_success();

    let saved = project.load_document(&doc).unwrap();
    assert_eq!(saved["version"], Value::from(3));
    assert_eq!(saved["footer"], Value::from("kept"));
    assert_eq!(saved["tables"][0]["name"], Value::from("a"));
    assert_eq!(saved["tables"][1]["name"], Value::from("c"));
}

#[test]
fn test_save_appends_tables_key_when_missing() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::no_table()).unwrap();
    project.write_document("grid.json", r#"{"columns": ["k"], "rows": [{"k": "v"}]}"#).unwrap();

    project.run_yamlgrid(&["save", &doc, "--grid", "grid.json"]).unwrap().assert_success();

    let saved = project.load_document(&doc).unwrap();
    let keys: Vec<&str> =
        saved.as_mapping().unwrap().keys().filter_map(Value::as_str).collect();
    assert_eq!(keys, ["title", "version", "tables"]);
    assert_eq!(saved["tables"][0]["k"], Value::from("v"));
}

#[test]
fn test_save_leaves_no_temp_files() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();
    let payload = export(&project, &doc);
    project.write_document("grid.json", &payload.to_string()).unwrap();

    project.run_yamlgrid(&["save", &doc, "--grid", "grid.json"]).unwrap().assert_success();

    let leftovers: Vec<String> = std::fs::read_dir(project.project_path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left: {leftovers:?}");
}
