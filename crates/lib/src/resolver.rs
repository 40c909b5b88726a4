//! Backend resolution: maps a build request onto concrete module rules.
//!
//! The primitive operations (`resolve_definitions`, `resolve_artifacts`,
//! `resolve_dependencies`) never fail; a missing library is an empty list.
//! `resolve` composes them and applies the configured `LinkPolicy` to decide
//! whether such a gap is fatal.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::artifacts::resolve_artifacts;
use crate::backend::VmBackend;
use crate::config::{LinkPolicy, ResolverConfig};
use crate::definitions::resolve_definitions;
use crate::dependencies::resolve_dependencies;
use crate::platform::{Platform, Target};
use crate::rules::{ModuleRules, PchUsage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
  #[error("no prebuilt {backend} libraries for {target}; linking would fail with undefined symbols")]
  UnsupportedTarget { backend: VmBackend, target: Target },
}

/// Inputs supplied by the build orchestrator for one build configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildRequest {
  pub backend: VmBackend,
  pub target: Target,
  pub editor: bool,
}

impl BuildRequest {
  pub fn new(backend: VmBackend, target: Target, editor: bool) -> Self {
    Self { backend, target, editor }
  }
}

/// Resolve the complete module rules for `request`.
///
/// With `LinkPolicy::Strict`, a request whose backend has no libraries for the
/// target fails with `ResolveError::UnsupportedTarget`. With
/// `LinkPolicy::Permissive` the rules are returned with an empty artifact list.
pub fn resolve(request: &BuildRequest, config: &ResolverConfig) -> Result<ModuleRules, ResolveError> {
  let BuildRequest { backend, target, editor } = *request;
  debug!(%backend, %target, editor, "resolving module rules");

  let artifacts: Vec<_> = resolve_artifacts(backend, target.platform, target.arch)
    .into_iter()
    .map(|path| config.third_party_dir.join(path))
    .collect();

  if artifacts.is_empty() {
    match config.link_policy {
      LinkPolicy::Strict => return Err(ResolveError::UnsupportedTarget { backend, target }),
      LinkPolicy::Permissive => {
        warn!(%backend, %target, "no prebuilt libraries for this target, the link step will fail")
      }
    }
  }

  Ok(ModuleRules {
    backend,
    target,
    editor,
    pch_usage: PchUsage::default(),
    definitions: resolve_definitions(backend),
    includes: config.includes.clone(),
    dependencies: resolve_dependencies(editor),
    dynamically_loaded: Vec::new(),
    artifacts,
    vm_headers: backend.vm_headers().iter().map(|h| h.to_string()).collect(),
  })
}

/// Number of libraries one backend links on one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageEntry {
  pub backend: VmBackend,
  pub target: Target,
  pub artifacts: usize,
}

impl CoverageEntry {
  pub fn is_supported(&self) -> bool {
    self.artifacts > 0
  }
}

/// Artifact counts for every backend/platform pair, each platform at its default arch.
///
/// Pass a backend to restrict the matrix to it.
pub fn coverage_matrix(only: Option<VmBackend>) -> Vec<CoverageEntry> {
  VmBackend::ALL
    .into_iter()
    .filter(|backend| only.is_none_or(|b| b == *backend))
    .flat_map(|backend| {
      Platform::ALL.into_iter().map(move |platform| {
        let target = Target::for_platform(platform);
        CoverageEntry {
          backend,
          target,
          artifacts: resolve_artifacts(backend, platform, target.arch).len(),
        }
      })
    })
    .collect()
}
