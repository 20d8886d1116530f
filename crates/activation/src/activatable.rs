use async_trait::async_trait;

/// A component with eager and deferred activation phases.
///
/// See [`ActivationGate::register_activatable`](crate::ActivationGate::register_activatable).
#[async_trait]
pub trait Activatable: Send + Sync {
	/// Cheap setup run at registration time.
	fn activate(&self);

	/// Expensive setup run after the activation trigger.
	async fn deferred_activate(&self) -> anyhow::Result<()>;
}
