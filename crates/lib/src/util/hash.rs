//! Stable fingerprints of resolved build data.
//!
//! Resolution is a pure function of its inputs, so the hash of its JSON form
//! identifies a configuration. Orchestrators compare fingerprints to decide
//! whether cached link inputs are still valid.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::consts::FINGERPRINT_LEN;

pub type HashError = serde_json::Error;

/// A truncated SHA-256 of a JSON-serialized value.
///
/// # Format
///
/// Lowercase hexadecimal, `FINGERPRINT_LEN` characters, e.g. `"a1b2c3d4e5f6789012ab"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub String);

impl std::fmt::Display for Fingerprint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

pub trait Hashable: Serialize {
  fn fingerprint(&self) -> Result<Fingerprint, HashError> {
    let serialized = serde_json::to_string(self)?;
    let mut hasher = Sha256::new();
    hasher.update(serialized.as_bytes());
    let full = format!("{:x}", hasher.finalize());
    Ok(Fingerprint(full[..FINGERPRINT_LEN].to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Serialize)]
  struct Sample {
    name: &'static str,
  }

  impl Hashable for Sample {}

  #[test]
  fn fingerprint_is_truncated_lowercase_hex() {
    let hash = Sample { name: "lua53" }.fingerprint().unwrap();
    assert_eq!(hash.0.len(), FINGERPRINT_LEN);
    assert!(hash.0.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
  }

  #[test]
  fn fingerprint_depends_on_content() {
    let a = Sample { name: "lua53" }.fingerprint().unwrap();
    let b = Sample { name: "luau" }.fingerprint().unwrap();
    assert_ne!(a, b);
    assert_eq!(a, Sample { name: "lua53" }.fingerprint().unwrap());
  }
}
