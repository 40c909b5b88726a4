use std::path::PathBuf;

use luamachine_lib::util::hash::Hashable;
use luamachine_lib::{Platform, VmBackend};

use super::common::resolve_default;

#[test]
fn cargo_directives_for_android() {
  let rules = resolve_default(VmBackend::Lua53, Platform::Android, false);
  let lines = rules.cargo_directives();

  assert_eq!(lines[0], "cargo:rustc-link-search=native=ThirdParty/ARMv7");
  assert_eq!(lines[1], "cargo:rustc-link-search=native=ThirdParty/ARM64");
  assert_eq!(lines[2], "cargo:rustc-link-lib=static=lua53_android");
  assert_eq!(lines[3], "cargo:rustc-link-lib=static=lua53_android64");
  assert!(lines.contains(&"cargo:rustc-env=LUAMACHINE_LUA53=1".to_string()));
  assert!(lines.contains(&"cargo:rustc-cfg=luamachine_lua53".to_string()));
  assert!(lines.contains(&"cargo:rerun-if-env-changed=LUAMACHINE_BACKEND".to_string()));
}

#[test]
fn every_backend_cfg_is_declared_before_it_is_set() {
  let rules = resolve_default(VmBackend::Lua54, Platform::Linux, false);
  let lines = rules.cargo_directives();
  let position = |line: &str| lines.iter().position(|l| l == line);

  for cfg in ["luamachine_lua53", "luamachine_lua54", "luamachine_luau", "luamachine_luajit"] {
    assert!(position(&format!("cargo::rustc-check-cfg=cfg({cfg})")).is_some(), "{cfg} not declared");
  }
  assert_eq!(lines.iter().filter(|l| l.starts_with("cargo:rustc-cfg=")).count(), 1);

  let declared = position("cargo::rustc-check-cfg=cfg(luamachine_lua54)").unwrap();
  let set = position("cargo:rustc-cfg=luamachine_lua54").unwrap();
  assert!(declared < set);
}

#[test]
fn unknown_backend_declares_cfgs_but_sets_none() {
  let rules = resolve_default(VmBackend::Unknown, Platform::Win64, false);
  let lines = rules.cargo_directives();

  assert_eq!(lines.iter().filter(|l| l.starts_with("cargo::rustc-check-cfg=")).count(), 4);
  assert!(!lines.iter().any(|l| l.starts_with("cargo:rustc-cfg=")));
}

#[test]
fn public_include_roots_become_include_directives() {
  let mut rules = resolve_default(VmBackend::Lua53, Platform::Win64, false);
  rules.includes.public = vec![PathBuf::from("Source/Public"), PathBuf::from("ThirdParty/lua")];
  rules.includes.private = vec![PathBuf::from("Source/Private")];
  let lines = rules.cargo_directives();

  let includes: Vec<_> = lines.iter().filter(|l| l.starts_with("cargo:include=")).collect();
  assert_eq!(includes, ["cargo:include=Source/Public", "cargo:include=ThirdParty/lua"]);
}

#[test]
fn luau_shares_one_search_path() {
  let rules = resolve_default(VmBackend::LuaU, Platform::Win64, false);
  let search: Vec<_> = rules
    .cargo_directives()
    .into_iter()
    .filter(|l| l.starts_with("cargo:rustc-link-search"))
    .collect();
  assert_eq!(search, ["cargo:rustc-link-search=native=ThirdParty/x64"]);
}

#[test]
fn gap_emits_no_link_directives() {
  let rules = resolve_default(VmBackend::Lua54, Platform::IOS, false);
  assert!(
    !rules
      .cargo_directives()
      .iter()
      .any(|l| l.starts_with("cargo:rustc-link"))
  );
}

#[test]
fn fingerprint_is_stable_and_target_specific() {
  let a = resolve_default(VmBackend::Lua53, Platform::Linux, false);
  let b = resolve_default(VmBackend::Lua53, Platform::Linux, false);
  let c = resolve_default(VmBackend::Lua53, Platform::Linux, true);

  assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
  assert_ne!(a.fingerprint().unwrap(), c.fingerprint().unwrap());
}

#[test]
fn rules_serialize_with_lowercase_identifiers() {
  let rules = resolve_default(VmBackend::LuaU, Platform::Win64, false);
  let json = serde_json::to_value(&rules).unwrap();

  assert_eq!(json["backend"], "luau");
  assert_eq!(json["target"]["platform"], "win64");
  assert_eq!(json["target"]["arch"], "x64");
  assert_eq!(json["pch_usage"], "UseExplicitOrSharedPCHs");
}
