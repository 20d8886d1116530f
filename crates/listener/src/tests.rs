use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{Instant, sleep};

use super::*;

const MS: Duration = Duration::from_millis(1);

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn timeout_names_bucket_still_in_flight() {
	let listener = OperationListener::tracking();
	let start = Instant::now();
	let a = tokio::spawn(listener.run_operation("x", sleep(50 * MS)));
	let b = tokio::spawn(listener.run_operation("x", sleep(150 * MS)));

	let err = listener.wait_for_all_operations(100 * MS).await.unwrap_err();
	assert_eq!(start.elapsed(), 100 * MS);
	assert_eq!(err, ListenerError::Timeout { pending: vec!["x".to_string()] });
	assert_eq!(err.to_string(), "timed out waiting for operations to complete: x");
	assert!(a.is_finished());

	b.await.unwrap();
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn wait_succeeds_when_last_operation_settles() {
	let listener = OperationListener::tracking();
	let start = Instant::now();
	let _a = tokio::spawn(listener.run_operation("x", sleep(50 * MS)));
	let _b = tokio::spawn(listener.run_operation("x", sleep(150 * MS)));

	listener.wait_for_all_operations(200 * MS).await.expect("operations drain before the deadline");
	assert_eq!(start.elapsed(), 150 * MS);
	assert!(listener.pending_operation_names().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn wait_requires_every_bucket_to_drain() {
	let listener = OperationListener::tracking();
	let start = Instant::now();
	tokio::spawn(listener.run_operation("hover", sleep(50 * MS)));
	tokio::spawn(listener.run_operation("symbols", sleep(120 * MS)));
	assert_eq!(listener.pending_operation_names(), ["hover", "symbols"]);

	sleep(60 * MS).await;
	assert_eq!(listener.pending_operation_names(), ["symbols"]);

	listener.wait_for_all_operations(Duration::from_secs(1)).await.unwrap();
	assert_eq!(start.elapsed(), 120 * MS);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn timeout_lists_every_pending_name_sorted() {
	let listener = OperationListener::tracking();
	let _beta = listener.run_operation("beta", std::future::pending::<()>());
	let _alpha = listener.run_operation("alpha", std::future::pending::<()>());

	let err = listener.wait_for_all_operations(250 * MS).await.unwrap_err();
	assert_eq!(err.to_string(), "timed out waiting for operations to complete: alpha, beta");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn duplicate_names_are_removed_independently() {
	let listener = OperationListener::tracking();
	let (first_tx, first_rx) = oneshot::channel::<()>();
	let (second_tx, second_rx) = oneshot::channel::<()>();
	let first = tokio::spawn(listener.run_operation("refresh", first_rx));
	let second = tokio::spawn(listener.run_operation("refresh", second_rx));

	second_tx.send(()).unwrap();
	second.await.unwrap().unwrap();
	assert_eq!(listener.pending_operation_names(), ["refresh"]);

	first_tx.send(()).unwrap();
	first.await.unwrap().unwrap();
	assert!(listener.pending_operation_names().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn failures_pass_through_and_still_settle() {
	let listener = OperationListener::tracking();
	let result = listener.run_operation("request", async { Err::<u32, _>("server crashed") }).await;
	assert_eq!(result, Err("server crashed"));
	assert!(listener.pending_operation_names().is_empty());
	listener.wait_for_all_operations(Duration::ZERO).await.unwrap();
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn dropping_operation_settles_it() {
	let listener = OperationListener::tracking();
	let operation = listener.run_operation("abandoned", std::future::pending::<()>());
	assert_eq!(listener.pending_operation_names(), ["abandoned"]);

	let waiter = tokio::spawn({
		let listener = listener.clone();
		async move { listener.wait_for_all_operations(Duration::from_secs(5)).await }
	});
	sleep(10 * MS).await;
	drop(operation);

	let start = Instant::now();
	waiter.await.unwrap().unwrap();
	assert_eq!(start.elapsed(), Duration::ZERO, "settling wakes waiters without waiting for the next poll");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn no_op_listener_is_transparent() {
	let listener = OperationListener::new(ListenerMode::NoOp, DEFAULT_POLL_INTERVAL);
	assert!(!listener.is_tracking());

	assert_eq!(listener.run_operation("n", async { 42 }).await, 42);
	let failed = listener.run_operation("n", async { Err::<(), _>("nope") }).await;
	assert_eq!(failed, Err("nope"));

	let _forever = listener.run_operation("n", std::future::pending::<()>());
	assert!(listener.pending_operation_names().is_empty());
	let start = Instant::now();
	listener.wait_for_all_operations(Duration::ZERO).await.unwrap();
	assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_operations_drain_across_threads() {
	let listener = OperationListener::tracking();
	let mut handles = Vec::new();
	for i in 0..64u64 {
		let name = format!("op-{}", i % 4);
		handles.push(tokio::spawn(listener.run_operation(name, async move {
			sleep(Duration::from_millis(i % 7)).await;
			i
		})));
	}

	listener.wait_for_all_operations(Duration::from_secs(5)).await.unwrap();
	let mut sum = 0;
	for handle in handles {
		sum += handle.await.unwrap();
	}
	assert_eq!(sum, (0..64).sum::<u64>());
}

#[test]
fn zero_poll_interval_is_raised_to_minimum() {
	let OperationListener::Tracking(listener) = OperationListener::new(ListenerMode::Tracking, Duration::ZERO) else {
		panic!("tracking mode builds a tracking listener");
	};
	assert_eq!(listener.poll_interval(), MIN_POLL_INTERVAL);
	assert_eq!(TrackingListener::new(250 * MS).poll_interval(), 250 * MS);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn zero_poll_interval_still_times_out_on_schedule() {
	let listener = TrackingListener::new(Duration::ZERO);
	let _stuck = OperationListener::Tracking(listener.clone()).run_operation("stuck", std::future::pending::<()>());
	let start = Instant::now();
	let err = listener.wait_for_all_operations(20 * MS).await.unwrap_err();
	assert_eq!(start.elapsed(), 20 * MS);
	assert_eq!(err, ListenerError::Timeout { pending: vec!["stuck".to_string()] });
}
