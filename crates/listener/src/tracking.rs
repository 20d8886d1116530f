use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::ListenerError;

/// Lower bound on the re-check interval; a zero interval would busy-loop.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Operation ids grouped by operation name.
///
/// A name is present only while at least one of its operations is in flight.
#[derive(Debug, Default)]
struct Buckets {
	next_id: u64,
	by_name: BTreeMap<String, Vec<u64>>,
}

#[derive(Debug, Default)]
struct Shared {
	buckets: Mutex<Buckets>,
	settled: Notify,
}

impl Shared {
	fn pending_names(&self) -> Vec<String> {
		self.buckets.lock().by_name.keys().cloned().collect()
	}

	fn is_idle(&self) -> bool {
		self.buckets.lock().by_name.is_empty()
	}
}

/// Operation tracker backing [`OperationListener::Tracking`](crate::OperationListener::Tracking).
#[derive(Debug, Clone)]
pub struct TrackingListener {
	shared: Arc<Shared>,
	poll_interval: Duration,
}

impl TrackingListener {
	/// Creates an empty tracker that re-checks its buckets every `poll_interval`,
	/// raised to at least [`MIN_POLL_INTERVAL`].
	pub fn new(poll_interval: Duration) -> Self {
		Self {
			shared: Arc::default(),
			poll_interval: poll_interval.max(MIN_POLL_INTERVAL),
		}
	}

	/// Interval at which waiters re-check the buckets.
	pub fn poll_interval(&self) -> Duration {
		self.poll_interval
	}

	/// Records one in-flight operation under `name`.
	pub(crate) fn register(&self, name: String) -> PendingOperation {
		let id = {
			let mut buckets = self.shared.buckets.lock();
			let id = buckets.next_id;
			buckets.next_id = buckets.next_id.wrapping_add(1);
			buckets.by_name.entry(name.clone()).or_default().push(id);
			id
		};
		tracing::trace!(operation = %name, id, "listener.register");
		PendingOperation {
			shared: Arc::clone(&self.shared),
			name,
			id,
		}
	}

	/// Names with at least one in-flight operation, sorted.
	pub fn pending_operation_names(&self) -> Vec<String> {
		self.shared.pending_names()
	}

	/// Waits until no operation is in flight, or fails once `timeout` elapses.
	pub async fn wait_for_all_operations(&self, timeout: Duration) -> Result<(), ListenerError> {
		if tokio::time::timeout(timeout, self.wait_for_completion()).await.is_ok() {
			return Ok(());
		}

		let pending = self.pending_operation_names();
		if pending.is_empty() {
			// Drained on the same tick as the deadline.
			return Ok(());
		}
		tracing::warn!(?pending, ?timeout, "timed out waiting for tracked operations");
		Err(ListenerError::Timeout { pending })
	}

	async fn wait_for_completion(&self) {
		loop {
			// Arm the notification before checking so a settle between the check and
			// the await is not lost.
			let mut settled = std::pin::pin!(self.shared.settled.notified());
			settled.as_mut().enable();
			if self.shared.is_idle() {
				return;
			}
			tokio::select! {
				() = settled => {}
				() = tokio::time::sleep(self.poll_interval) => {}
			}
		}
	}
}

/// Registration of one in-flight operation. Dropping it removes the operation
/// from its bucket.
#[derive(Debug)]
pub(crate) struct PendingOperation {
	shared: Arc<Shared>,
	name: String,
	id: u64,
}

impl Drop for PendingOperation {
	fn drop(&mut self) {
		{
			let mut buckets = self.shared.buckets.lock();
			if let Some(bucket) = buckets.by_name.get_mut(self.name.as_str()) {
				if let Some(pos) = bucket.iter().position(|id| *id == self.id) {
					bucket.remove(pos);
				}
				if bucket.is_empty() {
					buckets.by_name.remove(self.name.as_str());
				}
			}
		}
		tracing::trace!(operation = %self.name, id = self.id, "listener.settle");
		self.shared.settled.notify_waiters();
	}
}
