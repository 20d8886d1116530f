use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use pin_project_lite::pin_project;

use crate::tracking::PendingOperation;

pin_project! {
	/// Future returned by [`OperationListener::run_operation`](crate::OperationListener::run_operation).
	///
	/// Resolves to exactly what the wrapped operation resolves to. Under a tracking
	/// listener the operation leaves its bucket when it completes or when this
	/// future is dropped, whichever happens first.
	#[must_use = "futures do nothing unless you `.await` or poll them"]
	pub struct TrackedOperation<F> {
		#[pin]
		inner: F,
		pending: Option<PendingOperation>,
	}
}

impl<F> TrackedOperation<F> {
	pub(crate) fn new(inner: F, pending: Option<PendingOperation>) -> Self {
		Self { inner, pending }
	}
}

impl<F: Future> Future for TrackedOperation<F> {
	type Output = F::Output;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		let this = self.project();
		let output = ready!(this.inner.poll(cx));
		this.pending.take();
		Poll::Ready(output)
	}
}
