//! Host-side wiring for deferred activation and operation tracking.
//!
//! [`HostContext`] is the single construction point: it reads a [`HostConfig`]
//! (from the environment or from TOML), then builds one
//! [`ActivationGate`](relay_activation::ActivationGate) and one
//! [`OperationListener`](relay_listener::OperationListener) for the lifetime of the
//! process.

mod config;
mod context;
mod logging;

pub use config::{ConfigError, HostConfig};
pub use context::HostContext;
pub use logging::{LOG_ENV_VAR, init_tracing};
pub use relay_activation::{Activatable, ActivationError, ActivationGate, ActivationSink, DeferredComponent};
pub use relay_listener::{ListenerError, ListenerMode, OperationListener};
