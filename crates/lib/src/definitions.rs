//! Backend preprocessor definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::backend::VmBackend;

/// Boolean preprocessor symbol passed to every translation unit of the module
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureFlag {
  pub name: String,
  pub enabled: bool,
}

impl FeatureFlag {
  /// `0` or `1`, the value the compiler sees
  pub fn value(&self) -> u8 {
    u8::from(self.enabled)
  }
}

impl fmt::Display for FeatureFlag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}={}", self.name, self.value())
  }
}

/// One definition per recognized backend: 1 for `selected`, 0 for the rest.
///
/// Selecting `VmBackend::Unknown` leaves every flag at 0.
pub fn resolve_definitions(selected: VmBackend) -> Vec<FeatureFlag> {
  VmBackend::RECOGNIZED
    .iter()
    .filter_map(|backend| {
      backend.definition_name().map(|name| FeatureFlag {
        name,
        enabled: *backend == selected,
      })
    })
    .collect()
}
