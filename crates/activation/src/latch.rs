use std::sync::Arc;

use tokio::sync::watch;

/// One-shot signal that starts pending and resolves at most once.
///
/// Clones share state. Waiters that arrive after resolution return immediately.
#[derive(Debug, Clone)]
pub struct Latch {
	tx: Arc<watch::Sender<bool>>,
}

impl Default for Latch {
	fn default() -> Self {
		Self::new()
	}
}

impl Latch {
	/// Creates a pending latch.
	pub fn new() -> Self {
		let (tx, _) = watch::channel(false);
		Self { tx: Arc::new(tx) }
	}

	/// Resolves the latch and wakes every waiter.
	///
	/// Returns `true` only for the call that performed the transition.
	pub fn resolve(&self) -> bool {
		self.tx.send_if_modified(|resolved| !std::mem::replace(resolved, true))
	}

	/// Returns `true` once the latch has resolved.
	pub fn is_resolved(&self) -> bool {
		*self.tx.borrow()
	}

	/// Waits until the latch resolves.
	pub async fn wait(&self) {
		let mut rx = self.tx.subscribe();
		// `self` keeps the sender alive for the whole wait, so this cannot fail.
		let _ = rx.wait_for(|resolved| *resolved).await;
	}
}
