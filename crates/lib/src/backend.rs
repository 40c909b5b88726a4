//! Scripting VM backends the plugin can embed.
//!
//! Exactly one backend is selected per build configuration. The four concrete
//! backends each own a preprocessor symbol; `Unknown` stands for "no backend
//! selected" and owns none.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DEFINITION_PREFIX;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmBackend {
  #[default]
  Lua53,
  Lua54,
  LuaU,
  LuaJIT,
  Unknown,
}

impl VmBackend {
  pub const ALL: [VmBackend; 5] = [
    VmBackend::Lua53,
    VmBackend::Lua54,
    VmBackend::LuaU,
    VmBackend::LuaJIT,
    VmBackend::Unknown,
  ];

  /// Backends that own a preprocessor definition, in emission order
  pub const RECOGNIZED: [VmBackend; 4] = [VmBackend::Lua53, VmBackend::Lua54, VmBackend::LuaU, VmBackend::LuaJIT];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Lua53 => "lua53",
      Self::Lua54 => "lua54",
      Self::LuaU => "luau",
      Self::LuaJIT => "luajit",
      Self::Unknown => "unknown",
    }
  }

  pub fn is_recognized(&self) -> bool {
    !matches!(self, Self::Unknown)
  }

  /// Preprocessor symbol gating this backend's glue code (e.g. `LUAMACHINE_LUA53`)
  pub fn definition_name(&self) -> Option<String> {
    match self {
      Self::Unknown => None,
      recognized => Some(format!("{}{}", DEFINITION_PREFIX, recognized.as_str().to_ascii_uppercase())),
    }
  }

  /// Umbrella headers the runtime glue includes when this backend is active
  pub fn vm_headers(&self) -> &'static [&'static str] {
    match self {
      Self::Lua53 => &["ThirdParty/lua/lua.hpp"],
      Self::LuaU => &["ThirdParty/luau/Compiler/luacode.h", "ThirdParty/luau/VM/lualib.h"],
      Self::Lua54 | Self::LuaJIT | Self::Unknown => &[],
    }
  }
}

impl fmt::Display for VmBackend {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for VmBackend {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "lua53" | "lua5.3" => Ok(Self::Lua53),
      "lua54" | "lua5.4" => Ok(Self::Lua54),
      "luau" => Ok(Self::LuaU),
      "luajit" => Ok(Self::LuaJIT),
      "unknown" | "none" => Ok(Self::Unknown),
      _ => Err(ParseError::Backend { value: s.to_string() }),
    }
  }
}
