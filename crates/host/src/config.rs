use std::time::Duration;

use relay_listener::{DEFAULT_POLL_INTERVAL, ListenerMode, TRACKING_ENV_VAR};
use serde::{Deserialize, Serialize};

/// Errors from loading a [`HostConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
	/// The TOML input could not be parsed into a config.
	#[error("invalid host config: {0}")]
	Parse(#[from] toml::de::Error),
	/// A field parsed but holds an unusable value.
	#[error("invalid host config: {0}")]
	Invalid(String),
}

/// Startup configuration for a [`HostContext`](crate::HostContext).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
	/// Operation listener variant.
	pub listener: ListenerMode,
	/// How often listener waiters re-check for pending operations.
	pub poll_interval_ms: u64,
}

impl Default for HostConfig {
	fn default() -> Self {
		Self {
			listener: ListenerMode::NoOp,
			poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
		}
	}
}

impl HostConfig {
	/// Reads the configuration from the process environment.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the configuration from an arbitrary variable lookup.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		Self {
			listener: ListenerMode::from_flag(lookup(TRACKING_ENV_VAR).as_deref()),
			..Self::default()
		}
	}

	/// Parses a TOML table. Missing keys take their defaults.
	pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		if config.poll_interval_ms == 0 {
			return Err(ConfigError::Invalid("poll_interval_ms must be greater than zero".into()));
		}
		Ok(config)
	}

	pub fn poll_interval(&self) -> Duration {
		Duration::from_millis(self.poll_interval_ms)
	}
}
