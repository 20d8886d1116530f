//! Shared task spawning primitives.
//!
//! Every task spawned by relay components goes through [`spawn`] so it is
//! classified by [`TaskClass`] in traces and lands on the ambient tokio runtime
//! (or a fallback runtime when none is current).

mod class;
mod spawn;

pub use class::TaskClass;
pub use spawn::spawn;

/// Extracts the panic message from a [`tokio::task::JoinError`].
///
/// Returns `None` when the task was cancelled rather than panicking, or when the
/// panic payload is neither `&str` nor `String`.
pub fn join_error_panic_message(err: tokio::task::JoinError) -> Option<String> {
	let payload = err.try_into_panic().ok()?;
	if let Some(s) = payload.downcast_ref::<&'static str>() {
		return Some((*s).to_string());
	}
	payload.downcast_ref::<String>().cloned()
}
