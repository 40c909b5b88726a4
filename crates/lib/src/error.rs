//! Error types for identifier parsing.

use thiserror::Error;

/// Errors raised when an externally supplied identifier does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("unknown VM backend '{value}' (expected one of: lua53, lua54, luau, luajit, unknown)")]
  Backend { value: String },

  #[error("unknown platform '{value}' (expected one of: win64, mac, linux, linuxarm64, android, ios)")]
  Platform { value: String },

  #[error("unknown architecture '{value}' (expected one of: x64, arm64, armv7)")]
  Arch { value: String },
}
