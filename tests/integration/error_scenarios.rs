//! Failures must exit with status 1 and leave the document as it was.

use yaml_grid::test_utils::DocumentFixture;

use crate::common::TestProject;

#[test]
fn test_missing_document() {
    let project = TestProject::new().unwrap();

    let output = project.run_yamlgrid(&["show", "nowhere.yaml"]).unwrap();
    output
        .assert_failure()
        .assert_stderr_contains("Document not found")
        .assert_stderr_contains("Check that the file exists");
}

#[test]
fn test_invalid_yaml_at_load() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::invalid_syntax()).unwrap();

    let output = project.run_yamlgrid(&["show", &doc]).unwrap();
    output.assert_failure().assert_stderr_contains("Invalid YAML in broken.yaml");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_scalar_root_rejected() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::scalar_root()).unwrap();
    let before = project.read_document(&doc).unwrap();

    let output = project.run_yamlgrid(&["add-row", &doc, "--cell", "a=1"]).unwrap();
    output.assert_failure().assert_stderr_contains("Unsupported document root");
    assert_eq!(project.read_document(&doc).unwrap(), before);
}

#[test]
fn test_unknown_filter_column() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();

    let output = project.run_yamlgrid(&["show", &doc, "--filter", "colour=red"]).unwrap();
    output.assert_failure().assert_stderr_contains("Unknown column 'colour'");
}

#[test]
fn test_invalid_payload() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();
    let before = project.read_document(&doc).unwrap();

    for payload in ["not json", r#"{"columns": ["a"], "rows": [], "extra": 1}"#, "[1, 2]"] {
        project.write_document("grid.json", payload).unwrap();
        let output = project.run_yamlgrid(&["save", &doc, "--grid", "grid.json"]).unwrap();
        output.assert_failure().assert_stderr_contains("Invalid grid payload in grid.json");
    }
    assert_eq!(project.read_document(&doc).unwrap(), before);
}

#[test]
fn test_missing_payload_file() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();

    let output = project.run_yamlgrid(&["save", &doc, "--grid", "absent.json"]).unwrap();
    output.assert_failure().assert_stderr_contains("Failed to read absent.json");
}

#[test]
fn test_save_without_columns() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();
    let before = project.read_document(&doc).unwrap();
    project.write_document("grid.json", r#"{"columns": [], "rows": []}"#).unwrap();

    let output = project.run_yamlgrid(&["save", &doc, "--grid", "grid.json"]).unwrap();
    output
        .assert_failure()
        .assert_stderr_contains("Failed to save YAML: ")
        .assert_stderr_contains("no columns");
    assert_eq!(project.read_document(&doc).unwrap(), before);
}

#[test]
fn test_broken_document_is_never_overwritten() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();

    let payload = project.run_yamlgrid(&["show", &doc, "--format", "json"]).unwrap();
    payload.assert_success();
    project.write_document("grid.json", &payload.stdout).unwrap();

    let broken = DocumentFixture::invalid_syntax().content;
    project.write_document(&doc, &broken).unwrap();

    let output = project.run_yamlgrid(&["save", &doc, "--grid", "grid.json"]).unwrap();
    output.assert_failure().assert_stderr_contains("Invalid YAML in tags.yaml");
    assert_eq!(project.read_document(&doc).unwrap(), broken);
}
