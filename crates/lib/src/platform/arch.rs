use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// CPU architectures a VM library can be prebuilt for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
  X64,
  Arm64,
  ArmV7,
}

impl Arch {
  pub const ALL: [Arch; 3] = [Arch::X64, Arch::Arm64, Arch::ArmV7];

  /// Detect the host CPU architecture at runtime
  pub fn current() -> Option<Self> {
    match std::env::consts::ARCH {
      "x86_64" => Some(Self::X64),
      "aarch64" => Some(Self::Arm64),
      "arm" => Some(Self::ArmV7),
      _ => None,
    }
  }

  /// Returns the lowercase string identifier for this architecture
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::X64 => "x64",
      Self::Arm64 => "arm64",
      Self::ArmV7 => "armv7",
    }
  }

  /// Name of the third-party subdirectory holding libraries for this architecture
  pub fn lib_dir(&self) -> &'static str {
    match self {
      Self::X64 => "x64",
      Self::Arm64 => "ARM64",
      Self::ArmV7 => "ARMv7",
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Arch {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "x64" | "x86_64" | "amd64" => Ok(Self::X64),
      "arm64" | "aarch64" => Ok(Self::Arm64),
      "armv7" | "arm" => Ok(Self::ArmV7),
      _ => Err(ParseError::Arch { value: s.to_string() }),
    }
  }
}
