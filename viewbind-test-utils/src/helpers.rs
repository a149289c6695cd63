// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::recording_signal::RecordingSignal;

/// Polls `condition` until it holds, panicking after `timeout_ms`.
///
/// Deliveries happen on spawned tasks, so tests wait for the asynchronous
/// timeline to catch up before asserting on pipe state.
pub async fn wait_until<F>(condition: F, timeout_ms: u64)
where
    F: Fn() -> bool,
{
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    while !condition() {
        assert!(
            Instant::now() < deadline,
            "condition not met within {timeout_ms}ms"
        );
        sleep(Duration::from_millis(2)).await;
    }
}

/// Waits until `signal` has recorded at least `expected` marks.
pub async fn wait_for_marks(signal: &RecordingSignal, expected: usize, timeout_ms: u64) {
    wait_until(|| signal.marks() >= expected, timeout_ms).await;
}

/// Asserts that no further mark arrives within `window_ms`.
pub async fn assert_not_marked(signal: &RecordingSignal, baseline: usize, window_ms: u64) {
    sleep(Duration::from_millis(window_ms)).await;
    assert_eq!(
        signal.marks(),
        baseline,
        "unexpected dirty signal within {window_ms}ms window"
    );
}
