//! Integration tests for waiting on Cursor termination through the bridge.
//!
//! The poller runs against a scripted daemon on a real socket, with the poll
//! interval shortened to 20ms and the deadline to 200ms.

mod common;

use std::time::{Duration, Instant};

use serde_json::json;
use tokio::time::timeout;

use common::MockBackend;
use cursor_pool_client::IpcReply;

/// Upper bound for a whole waiting scenario.
const TEST_DEADLINE: Duration = Duration::from_secs(2);

/// Scripted liveness answers, one per poll.
fn liveness(states: &[bool]) -> Vec<IpcReply> {
    states
        .iter()
        .map(|running| IpcReply::success(Some(json!(running))))
        .collect()
}

#[tokio::test]
async fn test_wait_resolves_when_cursor_exits() {
    let backend =
        MockBackend::start(vec![("check_cursor_running", liveness(&[true, true, false]))]).await;
    let client = backend.client();

    let start = Instant::now();
    timeout(TEST_DEADLINE, client.wait_for_cursor_close())
        .await
        .expect("wait should not hang")
        .expect("process closing within the deadline must resolve");
    let elapsed = start.elapsed();

    assert_eq!(
        backend.requests().len(),
        3,
        "two busy polls need a third check"
    );
    assert!(
        elapsed >= Duration::from_millis(35),
        "two sleeps of 20ms must have passed, got {elapsed:?}"
    );
    assert!(
        elapsed < Duration::from_millis(200),
        "must resolve before the deadline, got {elapsed:?}"
    );
}

#[tokio::test]
async fn test_wait_immediate_when_already_closed() {
    let backend = MockBackend::start(vec![("check_cursor_running", liveness(&[false]))]).await;
    let client = backend.client();

    let start = Instant::now();
    timeout(TEST_DEADLINE, client.wait_for_cursor_close())
        .await
        .expect("wait should not hang")
        .expect("closed process must resolve");

    assert_eq!(
        backend.requests().len(),
        1,
        "the first check resolves without further polls"
    );
    assert!(
        start.elapsed() < Duration::from_millis(100),
        "no interval sleep before the first check"
    );
}

#[tokio::test]
async fn test_wait_times_out_with_fixed_message() {
    let backend = MockBackend::start(vec![("check_cursor_running", liveness(&[true; 32]))]).await;
    let client = backend.client();

    let start = Instant::now();
    let err = timeout(TEST_DEADLINE, client.wait_for_cursor_close())
        .await
        .expect("wait should not hang")
        .expect_err("never-closing process must time out");

    assert_eq!(
        err.to_string(),
        "operation timed out waiting for process to close"
    );
    assert!(
        start.elapsed() >= Duration::from_millis(200),
        "timeout must not fire before the 200ms deadline"
    );
    assert!(
        backend.requests().len() >= 2,
        "the deadline spans several poll intervals"
    );
}

#[tokio::test]
async fn test_wait_deadline_override_beats_config() {
    let backend = MockBackend::start(vec![("check_cursor_running", liveness(&[true; 32]))]).await;
    let client = backend.client();

    let start = Instant::now();
    let err = timeout(
        TEST_DEADLINE,
        client.wait_for_cursor_close_within(Duration::from_millis(50)),
    )
    .await
    .expect("wait should not hang")
    .expect_err("override deadline must time out");
    let elapsed = start.elapsed();

    assert_eq!(
        err.to_string(),
        "operation timed out waiting for process to close"
    );
    assert!(elapsed >= Duration::from_millis(50));
    assert!(
        elapsed < Duration::from_millis(150),
        "50ms override must beat the configured 200ms, got {elapsed:?}"
    );
}

#[tokio::test]
async fn test_wait_propagates_failed_liveness_check() {
    // Only one poll scripted; the second gets an unscripted rejection.
    let backend = MockBackend::start(vec![("check_cursor_running", liveness(&[true]))]).await;
    let client = backend.client();

    let err = timeout(TEST_DEADLINE, client.wait_for_cursor_close())
        .await
        .expect("wait should not hang")
        .expect_err("failing liveness check must propagate");

    assert!(
        err.to_string().contains("unscripted command"),
        "bridge rejection text must reach the caller, got {err}"
    );
    assert_eq!(
        backend.requests().len(),
        2,
        "no retry after a failed check"
    );
}
