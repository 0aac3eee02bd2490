use yaml_grid::test_utils::DocumentFixture;

use crate::common::TestProject;

#[test]
fn test_check_clean_document() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::tags()).unwrap();

    let output = project.run_yamlgrid(&["check", &doc]).unwrap();
    output.assert_success().assert_stdout_contains("No cells change on save");
}

/// A multi-line string is folded when read back, and check says so
#[test]
fn test_check_reports_multiline_string() {
    let project = TestProject::new().unwrap();
    let doc = project.write_fixture(&DocumentFixture::inventory()).unwrap();
    let before = project.read_document(&doc).unwrap();

    let output = project.run_yamlgrid(&["check", &doc]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("row 2, notes:")
        .assert_stdout_contains("1 cells would change on save");
    assert_eq!(project.read_document(&doc).unwrap(), before);
}

#[test]
fn test_check_reports_lossy_scalars() {
    let project = TestProject::new().unwrap();
    project
        .write_document("ids.yaml", "tables:\n- id: '42'\n  flag: 'true'\n  gone: null\n  name: plain\n")
        .unwrap();

    let output = project.run_yamlgrid(&["check", "ids.yaml"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains(r#"row 1, id: "42" (string) -> 42 (integer)"#)
        .assert_stdout_contains(r#"row 1, flag: "true" (string) -> true (boolean)"#)
        .assert_stdout_contains("row 1, gone: null (null) -> removed")
        .assert_stdout_contains("3 cells would change on save");
    assert!(!output.stdout.contains("name:"));
}
