//! Sample YAML documents for tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A named YAML document.
#[derive(Clone, Debug)]
pub struct DocumentFixture {
    pub name: String,
    pub content: String,
}

impl DocumentFixture {
    fn new(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    /// Mapping root with a `tables` list between two sibling keys.
    pub fn inventory() -> Self {
        Self::new(
            "inventory.yaml",
            r#"title: Inventory
tables:
- name: widget
  count: 3
  price: 2.5
  active: true
  tags:
  - small
  - blue
- name: gadget
  count: 10
  notes: |-
    fragile
    keep upright
owner:
  team: ops
"#,
        )
    }

    /// Bare sequence root.
    pub fn sequence() -> Self {
        Self::new(
            "people.yaml",
            "- name: ada\n  age: 36\n- name: alan\n  age: 41\n  langs:\n  - math\n",
        )
    }

    /// Two rows, only the first with a nested list.
    pub fn tags() -> Self {
        Self::new("tags.yaml", "tables:\n- name: a\n  tags:\n  - x\n  - y\n- name: b\n")
    }

    /// Mapping root without a table.
    pub fn no_table() -> Self {
        Self::new("settings.yaml", "title: Settings\nversion: 2\n")
    }

    pub fn invalid_syntax() -> Self {
        Self::new("broken.yaml", "tables:\n- name: [unclosed\n")
    }

    pub fn scalar_root() -> Self {
        Self::new("scalar.yaml", "just a string\n")
    }

    /// Write the document into `dir` under its name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.name);
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(path)
    }
}
