//! Projection followed by reconstruction.

use serde_yaml::{Mapping, Value};
use yaml_grid::document::{DocumentRoot, reassemble};
use yaml_grid::grid::{DisplayRecord, Grid};
use yaml_grid::transducer::{Row, project, project_rows, reconstruct, reconstruct_text};

fn yaml(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap()
}

/// Project rows into a grid and read them straight back.
fn round_trip(rows: &[Value]) -> Vec<Row> {
    let grid = Grid::from_projection(project_rows(rows));
    reconstruct(grid.data())
}

#[test]
fn scalars_survive_unchanged() {
    let rows = vec![yaml(
        "{s: hello, words: two words, i: 42, neg: -7, f: 2.75, t: true, off: false, big: 123456789012}",
    )];
    let rebuilt = round_trip(&rows);
    assert_eq!(Value::Mapping(rebuilt[0].clone()), rows[0]);
}

#[test]
fn extreme_numbers_survive_unchanged() {
    let rows = vec![yaml("{big: 1.0e16, tiny: 1.0e-7, huge: 18446744073709551615, whole: 3.0}")];
    let rebuilt = round_trip(&rows);
    assert_eq!(Value::Mapping(rebuilt[0].clone()), rows[0]);
    assert!(rebuilt[0].get("big").is_some_and(Value::is_f64));
    assert_eq!(rebuilt[0].get("huge").and_then(Value::as_u64), Some(u64::MAX));
}

#[test]
fn nested_values_survive_unchanged() {
    let rows = vec![yaml(
        "{name: a, tags: [x, y], owner: {team: ops, members: [ann, bo]}, matrix: [[1, 2], [3]]}",
    )];
    let rebuilt = round_trip(&rows);
    assert_eq!(Value::Mapping(rebuilt[0].clone()), rows[0]);
}

#[test]
fn padding_never_adds_keys() {
    let rows = vec![yaml("{a: 1}"), yaml("{b: 2}"), yaml("{}")];
    let rebuilt = round_trip(&rows);

    assert_eq!(rebuilt[0].len(), 1);
    assert_eq!(rebuilt[1].len(), 1);
    assert!(rebuilt[2].is_empty());
    assert!(rebuilt[0].get("b").is_none());
}

#[test]
fn empty_cells_omit_keys() {
    assert_eq!(reconstruct_text("x", ""), None);
    assert_eq!(reconstruct_text("x", "   \n "), None);

    let record: DisplayRecord = [("a", "1"), ("b", ""), ("c", "  ")].into_iter().collect();
    let rows = reconstruct(&[record]);
    assert_eq!(rows[0].len(), 1);
}

#[test]
fn numeric_inference() {
    assert_eq!(reconstruct_text("n", "12"), Some(Value::from(12)));
    assert_eq!(reconstruct_text("n", " -3 "), Some(Value::from(-3)));
    assert_eq!(reconstruct_text("n", "-3.5"), Some(Value::from(-3.5)));

    for text in ["1e5", "1,000", "12abc", "+4", "3.", ".5", "0x1F"] {
        assert_eq!(reconstruct_text("n", text), Some(Value::from(text)), "{text}");
    }
}

#[test]
fn boolean_inference_is_exact() {
    assert_eq!(reconstruct_text("b", "true"), Some(Value::Bool(true)));
    assert_eq!(reconstruct_text("b", " false "), Some(Value::Bool(false)));

    for text in ["True", "FALSE", "yes", "on"] {
        assert_eq!(reconstruct_text("b", text), Some(Value::from(text)), "{text}");
    }
}

#[test]
fn structured_text_is_parsed() {
    assert_eq!(reconstruct_text("t", "[x, y]"), Some(yaml("[x, y]")));
    assert_eq!(reconstruct_text("t", "{k: v}"), Some(yaml("{k: v}")));
    assert_eq!(reconstruct_text("t", "- x\n- y"), Some(yaml("[x, y]")));
    assert_eq!(reconstruct_text("t", "k: v\nn: 1"), Some(yaml("{k: v, n: 1}")));
}

#[test]
fn malformed_structure_falls_back_to_text() {
    for text in ["[unclosed", "{a: [1, 2}", "- x\n- [y"] {
        let value = reconstruct_text("t", text);
        assert_eq!(value, Some(Value::from(text.trim())), "{text:?}");
    }
}

#[test]
fn plain_text_is_trimmed() {
    assert_eq!(reconstruct_text("s", "  hello world "), Some(Value::from("hello world")));
}

/// Quoted scalars that read as another type are the documented lossy case.
#[test]
fn lossy_scalars_are_retyped() {
    let rows = vec![yaml("{id: '42', flag: 'true', none: null}")];
    let rebuilt = round_trip(&rows);

    assert_eq!(rebuilt[0].get("id"), Some(&Value::from(42)));
    assert_eq!(rebuilt[0].get("flag"), Some(&Value::Bool(true)));
    assert!(rebuilt[0].get("none").is_none());
}

#[test]
fn tags_document_round_trip() {
    let text = "tables:\n- name: a\n  tags:\n  - x\n  - y\n- name: b\n";
    let root = DocumentRoot::parse(text, "tags.yaml").unwrap();

    let grid = Grid::from_projection(project(&root, "tables"));
    assert_eq!(grid.columns().as_slice(), ["name", "tags"]);
    assert_eq!(grid.data()[0].text("tags"), Some("- x\n- y"));
    assert_eq!(grid.data()[1].text("tags"), Some(""));

    let saved = reassemble(root.clone(), reconstruct(grid.data()), "tables");
    assert_eq!(saved, root);
    assert_eq!(saved.to_yaml().unwrap(), text);
}

#[test]
fn mapping_root_keeps_key_order() {
    let root = DocumentRoot::parse("a: 1\ntables: []\nz: 2\n", "doc.yaml").unwrap();
    let mut row = Mapping::new();
    row.insert("k".into(), "v".into());

    let saved = reassemble(root, vec![row], "tables").into_value();
    let keys: Vec<&str> = saved.as_mapping().unwrap().keys().filter_map(Value::as_str).collect();
    assert_eq!(keys, ["a", "tables", "z"]);
}

#[test]
fn sequence_root_stays_a_sequence() {
    let root = DocumentRoot::parse("- {n: 1}\n- {n: 2}\n", "doc.yaml").unwrap();
    let grid = Grid::from_projection(project(&root, "tables"));
    assert_eq!(grid.len(), 2);

    let saved = reassemble(root, reconstruct(grid.data()), "tables");
    assert!(saved.is_sequence());
    assert_eq!(saved.into_value(), yaml("[{n: 1}, {n: 2}]"));
}

#[test]
fn non_mapping_rows_project_as_empty() {
    let grid = Grid::from_projection(project_rows(&[yaml("just text"), yaml("{a: 1}")]));
    assert_eq!(grid.len(), 2);
    assert_eq!(grid.data()[0].text("a"), Some(""));
}
