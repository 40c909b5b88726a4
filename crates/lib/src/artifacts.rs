//! Prebuilt VM static libraries per backend and target.
//!
//! Paths are relative to the third-party root and laid out as
//! `<arch dir>/<library file>`, e.g. `ARMv7/liblua53_android.a`.

use std::path::PathBuf;

use tracing::debug;

use crate::backend::VmBackend;
use crate::platform::{Arch, Platform};

const LUAU_WIN64: &[&str] = &["Luau.Ast.lib", "Luau.Compiler.lib", "Luau.VM.lib"];

fn lua53_libraries(platform: Platform, arch: Arch) -> &'static [&'static str] {
  match platform {
    Platform::Win64 => match arch {
      Arch::X64 => &["liblua53_win64.lib"],
      Arch::Arm64 | Arch::ArmV7 => &[],
    },
    Platform::Mac => match arch {
      Arch::X64 => &["liblua53_mac.a"],
      Arch::Arm64 | Arch::ArmV7 => &[],
    },
    Platform::Linux => match arch {
      Arch::X64 => &["liblua53_linux64.a"],
      Arch::Arm64 | Arch::ArmV7 => &[],
    },
    Platform::LinuxArm64 => match arch {
      Arch::Arm64 => &["liblua53_linux_aarch64.a"],
      Arch::X64 | Arch::ArmV7 => &[],
    },
    Platform::Android => match arch {
      Arch::ArmV7 => &["liblua53_android.a"],
      Arch::Arm64 => &["liblua53_android64.a"],
      Arch::X64 => &[],
    },
    Platform::IOS => match arch {
      Arch::Arm64 => &["liblua53_ios.a"],
      Arch::X64 | Arch::ArmV7 => &[],
    },
  }
}

fn luau_libraries(platform: Platform, arch: Arch) -> &'static [&'static str] {
  match platform {
    Platform::Win64 => match arch {
      Arch::X64 => LUAU_WIN64,
      Arch::Arm64 | Arch::ArmV7 => &[],
    },
    Platform::Mac | Platform::Linux | Platform::LinuxArm64 | Platform::Android | Platform::IOS => &[],
  }
}

/// Libraries registered for one (backend, platform, arch) slot of the table
fn libraries(backend: VmBackend, platform: Platform, arch: Arch) -> &'static [&'static str] {
  match backend {
    VmBackend::Lua53 => lua53_libraries(platform, arch),
    VmBackend::LuaU => luau_libraries(platform, arch),
    VmBackend::Lua54 | VmBackend::LuaJIT | VmBackend::Unknown => &[],
  }
}

/// Architectures whose libraries go into one build of `platform`.
///
/// Multi-ABI platforms link every architecture they ship, whatever `arch` was requested.
fn linked_architectures(platform: Platform, arch: Arch) -> Vec<Arch> {
  if platform.is_multi_abi() {
    platform.architectures().to_vec()
  } else {
    vec![arch]
  }
}

/// Ordered static-library paths to link for `backend` on `platform`/`arch`.
///
/// An empty result means the combination has no prebuilt libraries. Deciding
/// whether that is fatal is left to the caller.
pub fn resolve_artifacts(backend: VmBackend, platform: Platform, arch: Arch) -> Vec<PathBuf> {
  let artifacts: Vec<PathBuf> = linked_architectures(platform, arch)
    .into_iter()
    .flat_map(|arch| {
      libraries(backend, platform, arch)
        .iter()
        .map(move |lib| PathBuf::from(arch.lib_dir()).join(lib))
    })
    .collect();

  debug!(%backend, %platform, %arch, count = artifacts.len(), "resolved artifacts");
  artifacts
}
