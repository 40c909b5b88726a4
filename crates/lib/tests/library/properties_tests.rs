use luamachine_lib::{
  Arch, Platform, VmBackend, resolve_artifacts, resolve_definitions, resolve_dependencies,
};

use super::common::{artifact_names, definitions, resolve_default, third_party};

// =============================================================================
// Definitions
// =============================================================================

#[test]
fn each_recognized_backend_enables_exactly_one_flag() {
  for backend in VmBackend::RECOGNIZED {
    let flags = resolve_definitions(backend);
    let enabled: Vec<_> = flags.iter().filter(|f| f.enabled).collect();
    assert_eq!(enabled.len(), 1, "{backend}");
    assert_eq!(Some(enabled[0].name.clone()), backend.definition_name());
  }
}

// =============================================================================
// Artifacts
// =============================================================================

#[test]
fn lua53_android_links_two_libraries_other_platforms_one() {
  for platform in Platform::ALL {
    let expected = if platform == Platform::Android { 2 } else { 1 };
    for &arch in platform.architectures() {
      assert_eq!(
        resolve_artifacts(VmBackend::Lua53, platform, arch).len(),
        expected,
        "{platform}-{arch}"
      );
    }
  }
}

#[test]
fn luau_links_three_libraries_only_on_win64() {
  for platform in Platform::ALL {
    let expected = if platform == Platform::Win64 { 3 } else { 0 };
    assert_eq!(
      resolve_artifacts(VmBackend::LuaU, platform, platform.default_arch()).len(),
      expected,
      "{platform}"
    );
  }
}

#[test]
fn artifact_resolution_is_idempotent_and_order_stable() {
  for backend in VmBackend::ALL {
    for platform in Platform::ALL {
      for arch in Arch::ALL {
        assert_eq!(
          resolve_artifacts(backend, platform, arch),
          resolve_artifacts(backend, platform, arch)
        );
      }
    }
  }
}

// =============================================================================
// Dependencies
// =============================================================================

#[test]
fn editor_dependencies_are_a_strict_superset() {
  let runtime = resolve_dependencies(false);
  let editor = resolve_dependencies(true);

  for module in runtime.all() {
    assert!(editor.contains(module), "{module} missing from editor build");
  }
  assert!(editor.all().any(|m| !runtime.contains(m)));
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn lua53_on_win64() {
  let rules = resolve_default(VmBackend::Lua53, Platform::Win64, false);

  assert_eq!(artifact_names(&rules), ["liblua53_win64.lib"]);
  assert_eq!(rules.artifacts, vec![third_party("x64/liblua53_win64.lib")]);

  let defs = definitions(&rules);
  assert!(defs.contains(&"LUAMACHINE_LUA53=1".to_string()));
  assert!(defs.contains(&"LUAMACHINE_LUAU=0".to_string()));
}

#[test]
fn luau_on_linux_is_a_configuration_gap() {
  let rules = resolve_default(VmBackend::LuaU, Platform::Linux, false);

  assert!(rules.artifacts.is_empty());

  let defs = definitions(&rules);
  assert!(defs.contains(&"LUAMACHINE_LUA53=0".to_string()));
  assert!(defs.contains(&"LUAMACHINE_LUAU=1".to_string()));
  assert_eq!(rules.vm_headers.len(), 2);
}

#[test]
fn editor_build_adds_editor_modules() {
  let rules = resolve_default(VmBackend::Lua53, Platform::Mac, true);
  assert_eq!(rules.dependencies.editor, ["UnrealEd", "Projects"]);
  assert!(rules.editor);
}
