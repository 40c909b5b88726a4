//! The resolved module rules: everything the compiler and linker need for one
//! build of the runtime module.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backend::VmBackend;
use crate::consts::{ENV_BACKEND, ENV_CONFIG, ENV_STRICT, ENV_THIRD_PARTY_DIR};
use crate::definitions::FeatureFlag;
use crate::dependencies::DependencySet;
use crate::platform::Target;
use crate::util::hash::Hashable;

/// Precompiled header policy of the module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PchUsage {
  Default,
  NoPCHs,
  UseSharedPCHs,
  #[default]
  UseExplicitOrSharedPCHs,
}

/// Header search roots exposed to dependents (public) or kept to the module (private)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeRoots {
  pub public: Vec<PathBuf>,
  pub private: Vec<PathBuf>,
}

/// Immutable result of resolving one build configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRules {
  pub backend: VmBackend,
  pub target: Target,
  pub editor: bool,
  pub pch_usage: PchUsage,
  pub definitions: Vec<FeatureFlag>,
  pub includes: IncludeRoots,
  pub dependencies: DependencySet,
  pub dynamically_loaded: Vec<String>,
  pub artifacts: Vec<PathBuf>,
  pub vm_headers: Vec<String>,
}

impl Hashable for ModuleRules {}

impl ModuleRules {
  pub fn has_artifacts(&self) -> bool {
    !self.artifacts.is_empty()
  }

  /// Definitions as `NAME=0|1` compiler arguments
  pub fn definition_args(&self) -> Vec<String> {
    self.definitions.iter().map(ToString::to_string).collect()
  }

  /// Build-script directives that make Cargo link these rules.
  ///
  /// Search paths are emitted once per distinct artifact directory, before any
  /// library, in first-seen order.
  pub fn cargo_directives(&self) -> Vec<String> {
    let mut lines = Vec::new();

    let mut search_dirs: Vec<&Path> = Vec::new();
    for dir in self.artifacts.iter().filter_map(|a| a.parent()) {
      if !search_dirs.contains(&dir) {
        search_dirs.push(dir);
      }
    }
    for dir in search_dirs {
      lines.push(format!("cargo:rustc-link-search=native={}", dir.display()));
    }

    for artifact in &self.artifacts {
      if let Some(name) = link_name(artifact) {
        lines.push(format!("cargo:rustc-link-lib=static={name}"));
      }
    }

    // Every backend cfg is declared, not only the enabled one.
    for flag in &self.definitions {
      lines.push(format!("cargo::rustc-check-cfg=cfg({})", flag.name.to_ascii_lowercase()));
    }

    for flag in &self.definitions {
      lines.push(format!("cargo:rustc-env={}={}", flag.name, flag.value()));
      if flag.enabled {
        lines.push(format!("cargo:rustc-cfg={}", flag.name.to_ascii_lowercase()));
      }
    }

    for include in &self.includes.public {
      lines.push(format!("cargo:include={}", include.display()));
    }

    for var in [ENV_BACKEND, ENV_CONFIG, ENV_STRICT, ENV_THIRD_PARTY_DIR] {
      lines.push(format!("cargo:rerun-if-env-changed={var}"));
    }

    lines
  }
}

/// Library name as the linker expects it: `liblua53_mac.a` -> `lua53_mac`, `Luau.VM.lib` -> `Luau.VM`
fn link_name(artifact: &Path) -> Option<String> {
  let stem = artifact.file_stem()?.to_str()?;
  let is_archive = artifact.extension().is_some_and(|ext| ext == "a");
  match stem.strip_prefix("lib") {
    Some(name) if is_archive => Some(name.to_string()),
    _ => Some(stem.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn link_name_strips_unix_lib_prefix_only_for_archives() {
    assert_eq!(link_name(Path::new("x64/liblua53_linux64.a")).as_deref(), Some("lua53_linux64"));
    assert_eq!(link_name(Path::new("x64/liblua53_win64.lib")).as_deref(), Some("liblua53_win64"));
    assert_eq!(link_name(Path::new("x64/Luau.Compiler.lib")).as_deref(), Some("Luau.Compiler"));
  }
}
