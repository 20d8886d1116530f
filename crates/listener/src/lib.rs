//! Tracking of in-flight asynchronous operations.
//!
//! Integration tests sometimes need to wait for work that no API hands back to
//! them: a refresh kicked off by a notification, a background request fired from
//! a handler. Code that starts such work wraps it with
//! [`OperationListener::run_operation`], and the test harness calls
//! [`OperationListener::wait_for_all_operations`] to block until every tracked
//! operation has settled.
//!
//! Outside test mode the listener is [`OperationListener::NoOp`] and wrapping costs
//! nothing beyond one `Option` field.

use std::future::Future;
use std::time::Duration;

mod error;
mod mode;
mod operation;
mod tracking;

pub use error::ListenerError;
pub use mode::{ListenerMode, TRACKING_ENV_VAR};
pub use operation::TrackedOperation;
pub use tracking::{MIN_POLL_INTERVAL, TrackingListener};

/// Interval at which waiters re-check for pending operations.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Operation listener, selected once at startup.
///
/// Clones share the same buckets.
#[derive(Debug, Clone, Default)]
pub enum OperationListener {
	/// Forwards operations untouched; waiting always succeeds immediately.
	#[default]
	NoOp,
	/// Records operations by name until they settle.
	Tracking(TrackingListener),
}

impl OperationListener {
	/// Builds the variant matching `mode`.
	pub fn new(mode: ListenerMode, poll_interval: Duration) -> Self {
		match mode {
			ListenerMode::NoOp => Self::NoOp,
			ListenerMode::Tracking => Self::Tracking(TrackingListener::new(poll_interval)),
		}
	}

	/// Builds a tracking listener with [`DEFAULT_POLL_INTERVAL`].
	pub fn tracking() -> Self {
		Self::new(ListenerMode::Tracking, DEFAULT_POLL_INTERVAL)
	}

	/// Returns `true` for the tracking variant.
	pub fn is_tracking(&self) -> bool {
		matches!(self, Self::Tracking(_))
	}

	/// Wraps `operation` so it is tracked under `name` until it settles.
	///
	/// The operation is registered immediately, before the returned future is
	/// first polled. Its output, including any error, is returned unchanged.
	pub fn run_operation<F>(&self, name: impl Into<String>, operation: F) -> TrackedOperation<F>
	where
		F: Future,
	{
		let pending = match self {
			Self::NoOp => None,
			Self::Tracking(listener) => Some(listener.register(name.into())),
		};
		TrackedOperation::new(operation, pending)
	}

	/// Waits until no tracked operation is in flight.
	///
	/// # Errors
	///
	/// Returns [`ListenerError::Timeout`] naming the pending operations if they have
	/// not drained within `timeout`. The no-op variant never fails.
	pub async fn wait_for_all_operations(&self, timeout: Duration) -> Result<(), ListenerError> {
		match self {
			Self::NoOp => Ok(()),
			Self::Tracking(listener) => listener.wait_for_all_operations(timeout).await,
		}
	}

	/// Names with at least one in-flight operation, sorted. Always empty for the
	/// no-op variant.
	pub fn pending_operation_names(&self) -> Vec<String> {
		match self {
			Self::NoOp => Vec::new(),
			Self::Tracking(listener) => listener.pending_operation_names(),
		}
	}
}

#[cfg(test)]
mod tests;
