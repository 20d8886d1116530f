use std::future::Future;
use std::sync::Arc;

use relay_worker::TaskClass;
use tokio::task::{AbortHandle, JoinHandle};

use crate::{Activatable, ActivationError, ActivationSink, DeferredComponent, Latch, LogSink};

/// Defers component activation until a single process-wide trigger fires.
///
/// The gate owns two latches:
///
/// - the *trigger* latch, resolved by [`Self::trigger_activation`], which releases
///   every registered deferred activation;
/// - the *activated* latch, which no code path resolves. [`Self::wait_for_activated`]
///   therefore never returns. Callers that need a bound must wrap it in their own
///   timeout.
///
/// Clones share both latches and the failure sink.
#[derive(Clone)]
pub struct ActivationGate {
	trigger: Latch,
	activated: Latch,
	sink: Arc<dyn ActivationSink>,
}

impl std::fmt::Debug for ActivationGate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ActivationGate")
			.field("triggered", &self.trigger.is_resolved())
			.field("activated", &self.activated.is_resolved())
			.finish_non_exhaustive()
	}
}

impl Default for ActivationGate {
	fn default() -> Self {
		Self::new()
	}
}

impl ActivationGate {
	/// Creates a gate that logs activation failures.
	pub fn new() -> Self {
		Self::with_sink(Arc::new(LogSink))
	}

	/// Creates a gate that reports activation failures to `sink`.
	pub fn with_sink(sink: Arc<dyn ActivationSink>) -> Self {
		Self {
			trigger: Latch::new(),
			activated: Latch::new(),
			sink,
		}
	}

	/// Fires the trigger, releasing all deferred activations.
	///
	/// Only the first call has an effect.
	pub fn trigger_activation(&self) {
		if self.trigger.resolve() {
			tracing::info!("activation triggered");
		} else {
			tracing::debug!("activation already triggered; ignoring repeat trigger");
		}
	}

	/// Returns `true` once [`Self::trigger_activation`] has been called.
	pub fn is_triggered(&self) -> bool {
		self.trigger.is_resolved()
	}

	/// Returns `true` once the activated latch has resolved. Currently always `false`.
	pub fn is_activated(&self) -> bool {
		self.activated.is_resolved()
	}

	/// Schedules `activation` to run once the trigger fires.
	///
	/// The closure is called at most once, after the trigger, on its own task.
	/// Errors and panics go to the failure sink. Registrations run concurrently and
	/// in no particular order. The returned handle completes after the activation
	/// settles; dropping it does not cancel the activation.
	///
	/// Aborting the handle cancels the registration: before the trigger the closure
	/// never runs, after it the running activation is aborted along with its report,
	/// so nothing reaches the sink.
	pub fn register_deferred_activation<F, Fut>(&self, component: DeferredComponent, activation: F) -> JoinHandle<()>
	where
		F: FnOnce() -> Fut + Send + 'static,
		Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
	{
		tracing::debug!(%component, triggered = self.is_triggered(), "registering deferred activation");
		let trigger = self.trigger.clone();
		let sink = Arc::clone(&self.sink);

		relay_worker::spawn(TaskClass::Background, async move {
			trigger.wait().await;
			tracing::debug!(%component, "running deferred activation");

			let mut task = relay_worker::spawn(TaskClass::Activation, async move { activation().await });
			let _abort = AbortOnDrop(task.abort_handle());
			let outcome = (&mut task).await;
			let error = match outcome {
				Ok(Ok(())) => {
					tracing::trace!(%component, "deferred activation finished");
					return;
				}
				Ok(Err(source)) => ActivationError::Failed { component, source },
				Err(err) if err.is_cancelled() => {
					tracing::debug!(%component, "deferred activation cancelled");
					return;
				}
				Err(err) => ActivationError::Panicked {
					component,
					message: relay_worker::join_error_panic_message(err).unwrap_or_else(|| "<unknown panic>".to_string()),
				},
			};
			sink.on_failure(error);
		})
	}

	/// Runs [`Activatable::activate`] now and defers [`Activatable::deferred_activate`]
	/// until the trigger fires.
	pub fn register_activatable<A>(&self, component: DeferredComponent, activatable: Arc<A>) -> JoinHandle<()>
	where
		A: Activatable + 'static,
	{
		activatable.activate();
		self.register_deferred_activation(component, move || async move { activatable.deferred_activate().await })
	}

	/// Waits until the trigger fires. Returns immediately if it already has.
	pub async fn wait_for_trigger(&self) {
		self.trigger.wait().await;
	}

	/// Waits until the activated latch resolves.
	///
	/// Nothing resolves that latch, so this never returns.
	// TODO: resolve `activated` once the host defines when deferred activation counts as complete.
	pub async fn wait_for_activated(&self) {
		self.activated.wait().await;
	}
}

/// Aborts the activation task if the task awaiting it is cancelled first.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
	fn drop(&mut self) {
		self.0.abort();
	}
}
