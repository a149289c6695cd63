// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Change-detection signaling handle.

use std::sync::Arc;

/// Handle used to mark a view dirty when a bound value arrives
/// asynchronously.
///
/// The host's change-detection loop owns the other end: calling
/// [`mark_for_check`](ChangeSignal::mark_for_check) requests that the owning
/// view be re-evaluated on a future sweep. The call is idempotent and
/// side-effect-only; bindings never read or reset the signal. One signal may
/// be shared by any number of bindings.
pub trait ChangeSignal: Send + Sync {
    /// Request that the owning view be scheduled for a re-check.
    ///
    /// May be called from any point in the asynchronous timeline, including
    /// from delivery tasks running outside the change-detection sweep.
    fn mark_for_check(&self);
}

impl<S: ChangeSignal + ?Sized> ChangeSignal for Arc<S> {
    fn mark_for_check(&self) {
        (**self).mark_for_check();
    }
}

/// A change signal that discards every mark.
///
/// Useful for bindings evaluated outside any change-detection loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSignal;

impl ChangeSignal for NoopSignal {
    fn mark_for_check(&self) {}
}
