//! Engine configuration from environment variables.
//!
//! | Variable                  | Effect                                   |
//! |---------------------------|------------------------------------------|
//! | `LECTERN_OFFLINE`         | `1`/`true`/`yes` disables all providers  |
//! | `LECTERN_API_KEY`         | Credential for the keyed API             |
//! | `LECTERN_DEFAULT_VERSION` | Fallback version code                    |
//! | `LECTERN_DEADLINE_SECS`   | Overall provider budget; `0` disables it |
//! | `LECTERN_VERBOSITY`       | `silent`, `failures` or `attempts`       |

use std::time::Duration;

use lectern_engine::{EngineConfig, LogVerbosity};
use lectern_foundation::{Error, Result};

/// Disables external providers.
pub const OFFLINE_VAR: &str = "LECTERN_OFFLINE";
/// Keyed API credential.
pub const API_KEY_VAR: &str = "LECTERN_API_KEY";
/// Default version code.
pub const DEFAULT_VERSION_VAR: &str = "LECTERN_DEFAULT_VERSION";
/// Overall deadline in seconds.
pub const DEADLINE_VAR: &str = "LECTERN_DEADLINE_SECS";
/// Per-tier log verbosity.
pub const VERBOSITY_VAR: &str = "LECTERN_VERBOSITY";

/// Builds the engine configuration from the process environment.
///
/// # Errors
///
/// Returns `InvalidRequest` naming the variable for malformed values.
pub fn config_from_env() -> Result<EngineConfig> {
    config_from_lookup(|name| std::env::var(name).ok())
}

/// Builds the engine configuration from an arbitrary variable lookup.
///
/// Unset and blank variables keep their defaults.
///
/// # Errors
///
/// Returns `InvalidRequest` naming the variable for malformed values.
pub fn config_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<EngineConfig> {
    let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let mut config = EngineConfig::default();

    if let Some(raw) = get(OFFLINE_VAR) {
        config = config.with_external_providers(!parse_flag(OFFLINE_VAR, &raw)?);
    }
    if let Some(key) = get(API_KEY_VAR) {
        config = config.with_keyed_api_key(key);
    }
    if let Some(code) = get(DEFAULT_VERSION_VAR) {
        config = config.with_default_version(code);
    }
    if let Some(raw) = get(DEADLINE_VAR) {
        let secs: u64 = raw
            .parse()
            .map_err(|_| Error::invalid_request(DEADLINE_VAR, format!("expected whole seconds, got {raw:?}")))?;
        let deadline = (secs > 0).then(|| Duration::from_secs(secs));
        config = config.with_request_deadline(deadline);
    }
    if let Some(raw) = get(VERBOSITY_VAR) {
        let verbosity: LogVerbosity = raw
            .parse()
            .map_err(|_| Error::invalid_request(VERBOSITY_VAR, format!("expected silent, failures or attempts, got {raw:?}")))?;
        config = config.with_log_verbosity(verbosity);
    }

    Ok(config)
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::invalid_request(name, format!("expected a boolean, got {raw:?}"))),
    }
}
