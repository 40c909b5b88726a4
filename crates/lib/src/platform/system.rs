use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::arch::Arch;
use crate::error::ParseError;

/// Target platforms the host engine can build the plugin for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
  Win64,
  Mac,
  Linux,
  LinuxArm64,
  Android,
  IOS,
}

impl Platform {
  pub const ALL: [Platform; 6] = [
    Platform::Win64,
    Platform::Mac,
    Platform::Linux,
    Platform::LinuxArm64,
    Platform::Android,
    Platform::IOS,
  ];

  /// Returns the lowercase string identifier for this platform
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Win64 => "win64",
      Self::Mac => "mac",
      Self::Linux => "linux",
      Self::LinuxArm64 => "linuxarm64",
      Self::Android => "android",
      Self::IOS => "ios",
    }
  }

  /// Architecture assumed when the caller names only the platform
  pub fn default_arch(&self) -> Arch {
    match self {
      Self::Win64 | Self::Mac | Self::Linux => Arch::X64,
      Self::LinuxArm64 | Self::Android | Self::IOS => Arch::Arm64,
    }
  }

  /// Fat (multi-ABI) platforms bundle every architecture into a single build
  pub fn is_multi_abi(&self) -> bool {
    matches!(self, Self::Android)
  }

  /// Architectures linked into one build for this platform, in link order
  pub fn architectures(&self) -> &'static [Arch] {
    match self {
      Self::Win64 | Self::Mac | Self::Linux => &[Arch::X64],
      Self::LinuxArm64 | Self::IOS => &[Arch::Arm64],
      Self::Android => &[Arch::ArmV7, Arch::Arm64],
    }
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Platform {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "win64" | "windows" => Ok(Self::Win64),
      "mac" | "macos" | "darwin" => Ok(Self::Mac),
      "linux" => Ok(Self::Linux),
      "linuxarm64" | "linux-arm64" | "linuxaarch64" => Ok(Self::LinuxArm64),
      "android" => Ok(Self::Android),
      "ios" => Ok(Self::IOS),
      _ => Err(ParseError::Platform { value: s.to_string() }),
    }
  }
}
