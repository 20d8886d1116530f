use serde::{Deserialize, Serialize};

/// Environment variable that enables operation tracking.
pub const TRACKING_ENV_VAR: &str = "RUNNING_INTEGRATION_TESTS";

/// Which [`OperationListener`](crate::OperationListener) variant to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListenerMode {
	/// Pass operations through without bookkeeping.
	#[default]
	NoOp,
	/// Record every operation so tests can wait for them to drain.
	Tracking,
}

impl ListenerMode {
	/// Interprets the value of [`TRACKING_ENV_VAR`].
	///
	/// `true` and `1` (case-insensitive, surrounding whitespace ignored) enable
	/// tracking. Anything else, including an unset variable, yields [`Self::NoOp`].
	pub fn from_flag(value: Option<&str>) -> Self {
		match value.map(str::trim) {
			Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Self::Tracking,
			_ => Self::NoOp,
		}
	}

	/// Reads [`TRACKING_ENV_VAR`] from the process environment.
	pub fn from_env() -> Self {
		Self::from_flag(std::env::var(TRACKING_ENV_VAR).ok().as_deref())
	}
}
