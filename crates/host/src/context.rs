use relay_activation::ActivationGate;
use relay_listener::OperationListener;

use crate::HostConfig;

/// Process-lifetime state shared by host components.
///
/// Build one at startup and pass it (or clones of its parts) to every component
/// that defers activation or tracks operations.
#[derive(Debug, Clone)]
pub struct HostContext {
	config: HostConfig,
	gate: ActivationGate,
	listener: OperationListener,
}

impl HostContext {
	pub fn new(config: HostConfig) -> Self {
		Self::with_gate(config, ActivationGate::new())
	}

	/// Uses a caller-built gate, e.g. one with a custom failure sink.
	pub fn with_gate(config: HostConfig, gate: ActivationGate) -> Self {
		let listener = OperationListener::new(config.listener, config.poll_interval());
		tracing::info!(listener = ?config.listener, poll_interval_ms = config.poll_interval_ms, "host context ready");
		Self { config, gate, listener }
	}

	/// Builds a context from [`HostConfig::from_env`].
	pub fn from_env() -> Self {
		Self::new(HostConfig::from_env())
	}

	pub fn config(&self) -> &HostConfig {
		&self.config
	}

	pub fn gate(&self) -> &ActivationGate {
		&self.gate
	}

	pub fn listener(&self) -> &OperationListener {
		&self.listener
	}
}
