// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the viewbind binding layer.
//!
//! This crate provides the pieces tests need to drive a binding from both
//! ends of its timeline: channel-backed sources to push values and errors
//! from the producer side, a [`RecordingSignal`] to observe dirty marks on
//! the change-detection side, and polling helpers to wait for the
//! asynchronous delivery tasks in between. It is for development and testing
//! only, not for production code.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod helpers;
pub mod recording_signal;
pub mod sources;

pub use self::helpers::{assert_not_marked, wait_for_marks, wait_until};
pub use self::recording_signal::RecordingSignal;
pub use self::sources::{
    pending_single, stream_source, stream_source_with_errors, SingleResolver,
};
