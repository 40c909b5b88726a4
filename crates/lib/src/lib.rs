//! luamachine-lib: link-time backend selection for the LuaMachine plugin
//!
//! Given a target platform/architecture, a VM backend and an editor flag, this
//! crate decides which prebuilt VM libraries, preprocessor definitions, include
//! roots and engine modules the plugin's runtime module needs:
//! - `resolve_definitions`: one `LUAMACHINE_*` flag per recognized backend
//! - `resolve_artifacts`: ordered static libraries for a backend and target
//! - `resolve_dependencies`: engine modules, plus editor-only ones
//! - `resolve`: all of the above as one immutable `ModuleRules`

pub mod artifacts;
pub mod backend;
pub mod config;
pub mod consts;
pub mod definitions;
pub mod dependencies;
pub mod error;
pub mod platform;
pub mod resolver;
pub mod rules;
pub mod util;

pub use artifacts::resolve_artifacts;
pub use backend::VmBackend;
pub use config::{ConfigError, LinkPolicy, ResolverConfig};
pub use definitions::{FeatureFlag, resolve_definitions};
pub use dependencies::{DependencySet, resolve_dependencies};
pub use error::ParseError;
pub use platform::{Arch, Platform, Target};
pub use resolver::{BuildRequest, CoverageEntry, ResolveError, coverage_matrix, resolve};
pub use rules::{IncludeRoots, ModuleRules, PchUsage};
