use crate::ActivationError;

/// Receives deferred activation failures.
pub trait ActivationSink: Send + Sync {
	fn on_failure(&self, error: ActivationError);
}

/// Logs failures at `warn` and drops them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ActivationSink for LogSink {
	fn on_failure(&self, error: ActivationError) {
		tracing::warn!(component = %error.component(), error = %error, "deferred activation failed");
	}
}
