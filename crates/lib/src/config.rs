//! Resolver configuration.
//!
//! Layers, lowest precedence first: built-in defaults, `luamachine.toml`,
//! `LUAMACHINE_*` environment variables. Command-line flags are applied on top
//! by the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::backend::VmBackend;
use crate::consts::{CONFIG_FILE_NAME, DEFAULT_THIRD_PARTY_DIR, ENV_BACKEND, ENV_CONFIG, ENV_STRICT, ENV_THIRD_PARTY_DIR};
use crate::error::ParseError;
use crate::rules::IncludeRoots;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },

  #[error("invalid {var}: {source}")]
  EnvBackend {
    var: &'static str,
    #[source]
    source: ParseError,
  },

  #[error("invalid {var}='{value}' (expected 1/0, true/false, yes/no)")]
  EnvBool { var: &'static str, value: String },
}

/// What to do when the selected backend has no prebuilt libraries for the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
  /// Return the empty artifact list and let the link step fail
  #[default]
  Permissive,
  /// Fail resolution with `ResolveError::UnsupportedTarget`
  Strict,
}

/// On-disk form of `luamachine.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
  pub backend: Option<VmBackend>,
  pub third_party_dir: Option<PathBuf>,
  pub strict: Option<bool>,
  pub public_include_paths: Vec<PathBuf>,
  pub private_include_paths: Vec<PathBuf>,
}

impl ConfigFile {
  pub fn read(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
  /// Backend used when the caller does not pick one
  pub backend: VmBackend,
  /// Root the artifact paths are joined onto
  pub third_party_dir: PathBuf,
  pub link_policy: LinkPolicy,
  pub includes: IncludeRoots,
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self {
      backend: VmBackend::default(),
      third_party_dir: PathBuf::from(DEFAULT_THIRD_PARTY_DIR),
      link_policy: LinkPolicy::default(),
      includes: IncludeRoots::default(),
    }
  }
}

impl ResolverConfig {
  /// Load defaults, then the config file, then the environment.
  ///
  /// The file is `explicit` if given, else `$LUAMACHINE_CONFIG`, else
  /// `./luamachine.toml` when it exists. A named file that cannot be read is
  /// an error; a missing default file is not.
  pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
    let mut config = Self::default();

    if let Some(path) = locate_config(explicit) {
      debug!(path = ?path, "loading config file");
      let file = ConfigFile::read(&path)?;
      let base = path.parent().unwrap_or_else(|| Path::new(""));
      config.apply_file(file, base);
    }

    config.apply_env()?;
    Ok(config)
  }

  /// Merge a parsed config file. Relative directories are taken relative to `base`.
  pub fn apply_file(&mut self, file: ConfigFile, base: &Path) {
    if let Some(backend) = file.backend {
      self.backend = backend;
    }
    if let Some(dir) = file.third_party_dir {
      self.third_party_dir = base.join(dir);
    }
    if let Some(strict) = file.strict {
      self.link_policy = policy_from_bool(strict);
    }
    self
      .includes
      .public
      .extend(file.public_include_paths.into_iter().map(|p| base.join(p)));
    self
      .includes
      .private
      .extend(file.private_include_paths.into_iter().map(|p| base.join(p)));
  }

  /// Merge `LUAMACHINE_BACKEND`, `LUAMACHINE_THIRD_PARTY_DIR` and `LUAMACHINE_STRICT`
  pub fn apply_env(&mut self) -> Result<(), ConfigError> {
    if let Some(value) = env_var(ENV_BACKEND) {
      self.backend = value.parse().map_err(|source| ConfigError::EnvBackend {
        var: ENV_BACKEND,
        source,
      })?;
    }
    if let Some(value) = env_var(ENV_THIRD_PARTY_DIR) {
      self.third_party_dir = PathBuf::from(value);
    }
    if let Some(value) = env_var(ENV_STRICT) {
      let strict = parse_bool(&value).ok_or(ConfigError::EnvBool { var: ENV_STRICT, value })?;
      self.link_policy = policy_from_bool(strict);
    }
    Ok(())
  }
}

fn locate_config(explicit: Option<&Path>) -> Option<PathBuf> {
  if let Some(path) = explicit {
    return Some(path.to_path_buf());
  }
  if let Some(path) = env_var(ENV_CONFIG) {
    return Some(PathBuf::from(path));
  }
  let default = PathBuf::from(CONFIG_FILE_NAME);
  default.is_file().then_some(default)
}

/// Non-empty value of an environment variable
fn env_var(name: &str) -> Option<String> {
  std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" => Some(false),
    _ => None,
  }
}

fn policy_from_bool(strict: bool) -> LinkPolicy {
  if strict { LinkPolicy::Strict } else { LinkPolicy::Permissive }
}
