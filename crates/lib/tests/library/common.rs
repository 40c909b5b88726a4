//! Shared helpers for library integration tests.

use std::path::PathBuf;

use luamachine_lib::{BuildRequest, ModuleRules, Platform, ResolverConfig, Target, VmBackend, resolve};

/// Resolve with default (permissive) configuration.
pub fn resolve_default(backend: VmBackend, platform: Platform, editor: bool) -> ModuleRules {
  let request = BuildRequest::new(backend, Target::for_platform(platform), editor);
  resolve(&request, &ResolverConfig::default()).unwrap()
}

/// Artifact file names, without directories.
pub fn artifact_names(rules: &ModuleRules) -> Vec<String> {
  rules
    .artifacts
    .iter()
    .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
    .collect()
}

/// Definitions as `NAME=value` strings.
pub fn definitions(rules: &ModuleRules) -> Vec<String> {
  rules.definition_args()
}

pub fn third_party(relative: &str) -> PathBuf {
  PathBuf::from("ThirdParty").join(relative)
}
