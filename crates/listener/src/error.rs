/// Errors from waiting on tracked operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ListenerError {
	/// The wait budget elapsed while operations were still in flight.
	#[error("timed out waiting for operations to complete: {}", .pending.join(", "))]
	Timeout {
		/// Names of the buckets that were still non-empty, sorted.
		pending: Vec<String>,
	},
}
