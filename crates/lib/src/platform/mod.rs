pub mod arch;
pub mod system;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use arch::Arch;
pub use system::Platform;

/// Build target combining the engine platform and CPU architecture (e.g., "android-arm64")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
  pub platform: Platform,
  pub arch: Arch,
}

impl Target {
  /// Create a new target identifier
  pub fn new(platform: Platform, arch: Arch) -> Self {
    Self { platform, arch }
  }

  /// Target for `platform` using its default architecture
  pub fn for_platform(platform: Platform) -> Self {
    Self::new(platform, platform.default_arch())
  }

  /// Detect the host target at runtime
  ///
  /// Returns `None` if the host OS/architecture pair is not an engine platform
  pub fn current() -> Option<Self> {
    let arch = Arch::current()?;
    let platform = match (std::env::consts::OS, arch) {
      ("windows", Arch::X64) => Platform::Win64,
      ("macos", _) => Platform::Mac,
      ("linux", Arch::X64) => Platform::Linux,
      ("linux", Arch::Arm64) => Platform::LinuxArm64,
      ("android", _) => Platform::Android,
      ("ios", _) => Platform::IOS,
      _ => return None,
    };
    Some(Self { platform, arch })
  }

  /// Returns the target triple string (e.g., "win64-x64")
  pub fn triple(&self) -> String {
    format!("{}-{}", self.platform, self.arch)
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.triple())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn target_triple_format() {
    let target = Target::new(Platform::Win64, Arch::X64);
    assert_eq!(target.triple(), "win64-x64");

    let target = Target::new(Platform::Android, Arch::ArmV7);
    assert_eq!(target.triple(), "android-armv7");
  }

  #[test]
  fn for_platform_uses_default_arch() {
    assert_eq!(Target::for_platform(Platform::IOS).arch, Arch::Arm64);
    assert_eq!(Target::for_platform(Platform::Linux).arch, Arch::X64);
  }
}
