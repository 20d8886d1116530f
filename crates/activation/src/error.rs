use crate::DeferredComponent;

/// Failure of one deferred activation.
///
/// These never propagate to the trigger or to other registrations; they are
/// delivered to the gate's [`ActivationSink`](crate::ActivationSink).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ActivationError {
	/// The activation future resolved to an error.
	#[error("deferred activation of {component} failed: {source:#}")]
	Failed {
		component: DeferredComponent,
		#[source]
		source: anyhow::Error,
	},
	/// The activation panicked.
	#[error("deferred activation of {component} panicked: {message}")]
	Panicked { component: DeferredComponent, message: String },
}

impl ActivationError {
	/// Component whose activation failed.
	pub fn component(&self) -> DeferredComponent {
		match self {
			Self::Failed { component, .. } | Self::Panicked { component, .. } => *component,
		}
	}
}
