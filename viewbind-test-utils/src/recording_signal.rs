// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use viewbind_core::ChangeSignal;

/// A change signal that counts every mark, for asserting exactly when a
/// binding requested a re-check.
#[derive(Debug, Default)]
pub struct RecordingSignal {
    marks: AtomicUsize,
}

impl RecordingSignal {
    /// Create a shared recording signal.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of `mark_for_check` calls observed so far.
    pub fn marks(&self) -> usize {
        self.marks.load(Ordering::SeqCst)
    }
}

impl ChangeSignal for RecordingSignal {
    fn mark_for_check(&self) {
        self.marks.fetch_add(1, Ordering::SeqCst);
    }
}
