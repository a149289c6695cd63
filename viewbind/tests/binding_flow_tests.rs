// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! End-to-end flow: a host sweep loop driving an async binding.

use std::sync::Arc;

use viewbind::prelude::*;
use viewbind_test_utils::{
    assert_not_marked, pending_single, stream_source, wait_for_marks, RecordingSignal,
};

#[tokio::test]
async fn test_sweep_loop_over_a_single_resolution_binding() -> anyhow::Result<()> {
    // Arrange: a view owning one `value | async` style binding
    let signal = RecordingSignal::new();
    let pipe: AsyncPipe<String> = AsyncPipe::new(Arc::clone(&signal));
    let (resolver, single) = pending_single::<String>();
    let source: AsyncSource<String> = single.into();

    // Sweep 1: bound, nothing resolved yet, view renders empty
    assert!(pipe.transform(Some(&source)).is_none());

    // The source settles between sweeps and requests a re-check
    resolver.resolve("ready".to_string());
    wait_for_marks(&signal, 1, 500).await;

    // Sweep 2: scheduled by the mark; the fresh value is forced-dirty
    let projected = pipe.transform(Some(&source)).expect("value");
    assert!(projected.is_changed());
    assert_eq!(projected.value().as_str(), "ready");

    // Sweeps 3..n: quiescent, reference-stable, no further marks
    let again = pipe.transform(Some(&source)).expect("value");
    assert!(!again.is_changed());
    assert!(Arc::ptr_eq(projected.value(), again.value()));
    assert_not_marked(&signal, 1, 50).await;

    Ok(())
}

#[tokio::test]
async fn test_switching_binding_expression_between_kinds() -> anyhow::Result<()> {
    // Arrange: the expression first evaluates to a stream, later to a single
    let signal = RecordingSignal::new();
    let pipe: AsyncPipe<i32> = AsyncPipe::new(Arc::clone(&signal));
    let (tx, stream) = stream_source::<i32>();
    let stream_bound: AsyncSource<i32> = stream.into();

    assert!(pipe.transform(Some(&stream_bound)).is_none());
    tx.send(10)?;
    wait_for_marks(&signal, 1, 500).await;
    assert_eq!(**pipe.transform(Some(&stream_bound)).expect("value").value(), 10);

    // Act: the expression now yields a single-resolution source
    let single_bound: AsyncSource<i32> = SingleSource::ready(20).into();
    assert!(pipe.transform(Some(&single_bound)).is_none());
    wait_for_marks(&signal, 2, 500).await;

    // Assert: old stream is detached, new value projected
    let baseline = signal.marks();
    let _ = tx.send(11);
    assert_not_marked(&signal, baseline, 100).await;
    assert_eq!(**pipe.transform(Some(&single_bound)).expect("value").value(), 20);

    Ok(())
}
