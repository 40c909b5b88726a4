//! Shared constants.

/// Prefix of every backend preprocessor definition (e.g. `LUAMACHINE_LUA53`).
pub const DEFINITION_PREFIX: &str = "LUAMACHINE_";

/// Default directory holding the prebuilt VM libraries, relative to the module.
pub const DEFAULT_THIRD_PARTY_DIR: &str = "ThirdParty";

/// Default configuration file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "luamachine.toml";

pub const ENV_CONFIG: &str = "LUAMACHINE_CONFIG";
pub const ENV_BACKEND: &str = "LUAMACHINE_BACKEND";
pub const ENV_THIRD_PARTY_DIR: &str = "LUAMACHINE_THIRD_PARTY_DIR";
pub const ENV_STRICT: &str = "LUAMACHINE_STRICT";

/// Length of the truncated rules fingerprint.
pub const FINGERPRINT_LEN: usize = 20;
