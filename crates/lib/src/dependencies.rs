//! Engine modules the runtime module depends on.

use serde::{Deserialize, Serialize};

const PUBLIC_MODULES: &[&str] = &["Core"];
const PRIVATE_MODULES: &[&str] = &["CoreUObject", "Engine", "Slate", "SlateCore"];
const EDITOR_MODULES: &[&str] = &["UnrealEd", "Projects"];

/// Module names to link, split by visibility and by build flavour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySet {
  pub public: Vec<String>,
  pub private: Vec<String>,
  pub editor: Vec<String>,
}

impl DependencySet {
  /// Every module name in link order: public, private, then editor-only
  pub fn all(&self) -> impl Iterator<Item = &str> {
    self
      .public
      .iter()
      .chain(&self.private)
      .chain(&self.editor)
      .map(String::as_str)
  }

  pub fn contains(&self, module: &str) -> bool {
    self.all().any(|m| m == module)
  }
}

fn owned(names: &[&str]) -> Vec<String> {
  names.iter().map(|n| n.to_string()).collect()
}

/// Fixed module set; editor builds additionally get the editor-only modules.
pub fn resolve_dependencies(is_editor_build: bool) -> DependencySet {
  DependencySet {
    public: owned(PUBLIC_MODULES),
    private: owned(PRIVATE_MODULES),
    editor: if is_editor_build { owned(EDITOR_MODULES) } else { Vec::new() },
  }
}
