//! Configuration for the resolution engine.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use lectern_foundation::{Error, LanguageTrack, Result};
use lectern_providers::TransportConfig;

/// Default overall budget for the provider tiers of one request.
pub const DEFAULT_REQUEST_DEADLINE: Duration = Duration::from_secs(20);

/// Which per-tier events the orchestrator emits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogVerbosity {
    /// No tier events.
    Silent,
    /// Tier failures and synthesis fallbacks.
    #[default]
    Failures,
    /// Every attempt and success as well.
    Attempts,
}

impl LogVerbosity {
    /// Returns true if tier failures are logged.
    #[must_use]
    pub fn logs_failures(self) -> bool {
        self >= Self::Failures
    }

    /// Returns true if tier attempts are logged.
    #[must_use]
    pub fn logs_attempts(self) -> bool {
        self >= Self::Attempts
    }
}

impl fmt::Display for LogVerbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Silent => "silent",
            Self::Failures => "failures",
            Self::Attempts => "attempts",
        })
    }
}

impl FromStr for LogVerbosity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "failures" => Ok(Self::Failures),
            "attempts" => Ok(Self::Attempts),
            other => Err(Error::invalid_request(
                "log_verbosity",
                format!("expected silent, failures or attempts, got {other:?}"),
            )),
        }
    }
}

/// Configuration for the resolution engine.
///
/// Built once by the host and handed to the resolver; nothing reads
/// ambient settings at call time.
#[derive(Clone)]
pub struct EngineConfig {
    /// Whether external providers are used at all.
    pub external_providers_enabled: bool,

    /// Language tracks whose providers are skipped.
    pub disabled_tracks: Vec<LanguageTrack>,

    /// Credential for the keyed API.
    pub keyed_api_key: Option<String>,

    /// Version used when the requested code is unknown or absent.
    pub default_version: String,

    /// Per-tier logging.
    pub log_verbosity: LogVerbosity,

    /// Overall budget for all provider tiers of one request.
    pub request_deadline: Option<Duration>,

    /// HTTP settings for the adapters.
    pub transport: TransportConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            external_providers_enabled: true,
            disabled_tracks: Vec::new(),
            keyed_api_key: None,
            default_version: "KJV".to_string(),
            log_verbosity: LogVerbosity::default(),
            request_deadline: Some(DEFAULT_REQUEST_DEADLINE),
            transport: TransportConfig::default(),
        }
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("external_providers_enabled", &self.external_providers_enabled)
            .field("disabled_tracks", &self.disabled_tracks)
            .field("keyed_api_key", &self.keyed_api_key.as_ref().map(|_| "<redacted>"))
            .field("default_version", &self.default_version)
            .field("log_verbosity", &self.log_verbosity)
            .field("request_deadline", &self.request_deadline)
            .field("transport", &self.transport)
            .finish()
    }
}

impl EngineConfig {
    /// Creates a configuration that never touches the network.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            external_providers_enabled: false,
            ..Self::default()
        }
    }

    /// Returns true if the providers of `track` may be called.
    #[must_use]
    pub fn track_enabled(&self, track: LanguageTrack) -> bool {
        self.external_providers_enabled && !self.disabled_tracks.contains(&track)
    }

    /// Builder method to enable or disable external providers.
    #[must_use]
    pub fn with_external_providers(mut self, enabled: bool) -> Self {
        self.external_providers_enabled = enabled;
        self
    }

    /// Builder method to disable the providers of one track.
    #[must_use]
    pub fn with_disabled_track(mut self, track: LanguageTrack) -> Self {
        if !self.disabled_tracks.contains(&track) {
            self.disabled_tracks.push(track);
        }
        self
    }

    /// Builder method to set the keyed API credential.
    #[must_use]
    pub fn with_keyed_api_key(mut self, key: impl Into<String>) -> Self {
        self.keyed_api_key = Some(key.into());
        self
    }

    /// Builder method to set the default version code.
    #[must_use]
    pub fn with_default_version(mut self, code: impl Into<String>) -> Self {
        self.default_version = code.into();
        self
    }

    /// Builder method to set log verbosity.
    #[must_use]
    pub fn with_log_verbosity(mut self, verbosity: LogVerbosity) -> Self {
        self.log_verbosity = verbosity;
        self
    }

    /// Builder method to set or clear the overall deadline.
    #[must_use]
    pub fn with_request_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.request_deadline = deadline;
        self
    }

    /// Builder method to set transport settings.
    #[must_use]
    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}
