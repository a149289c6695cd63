// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Attach/detach behavior per source kind.
//!
//! The set of supported source kinds is closed, so strategy dispatch is a
//! two-variant enum selected once at subscribe time and stored alongside the
//! subscription handle, not open-ended dynamic dispatch.

use futures::stream::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};
use viewbind_core::{AsyncSource, SourceItem};

/// How an attachment to an [`AsyncSource`] is made and released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubscribeStrategy {
    /// A continuation registered on a single-resolution source. Cannot be
    /// aborted; late deliveries are screened by the pipe's identity guard.
    SingleResolution,
    /// A stream subscription on a multi-emission source. Detach is
    /// effective immediately via cancellation.
    MultiEmission,
}

/// Opaque token owned by the pipe for the lifetime of one attachment.
#[derive(Debug)]
pub(crate) enum SubscriptionHandle {
    /// Cancels the delivery task of a multi-emission attachment.
    Cancel(CancellationToken),
    /// Single-resolution attachments hold no cancellable resource.
    Inert,
}

impl SubscribeStrategy {
    /// Attach to `source`, spawning a delivery task that feeds each produced
    /// value into `on_value`.
    ///
    /// `on_value` is never invoked synchronously from this call; deliveries
    /// arrive strictly outside the change-detection sweep.
    ///
    /// A `SourceItem::Error` from a multi-emission source is re-raised as a
    /// panic in the delivery task: the strategy does not swallow producer
    /// errors, so they become unhandled faults unless the host's error
    /// boundary intercepts them.
    pub(crate) fn attach<T, F>(source: &AsyncSource<T>, on_value: F) -> (Self, SubscriptionHandle)
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(T) + Send + Sync + 'static,
    {
        match source {
            AsyncSource::Single(single) => {
                debug!(kind = "single_resolution", "attaching to source");
                let resolution = single.resolution();
                tokio::spawn(async move {
                    on_value(resolution.await);
                });
                (Self::SingleResolution, SubscriptionHandle::Inert)
            }
            AsyncSource::Stream(stream_source) => {
                debug!(kind = "multi_emission", "attaching to source");
                let token = CancellationToken::new();
                let task_token = token.clone();
                let mut items = stream_source.connect();
                tokio::spawn(async move {
                    loop {
                        tokio::select! {
                            // Cancellation wins over a ready item.
                            biased;
                            _ = task_token.cancelled() => break,
                            item = items.next() => match item {
                                Some(SourceItem::Value(value)) => on_value(value),
                                Some(SourceItem::Error(e)) => {
                                    error!(error = %e, "unhandled producer error from bound source");
                                    panic!("unhandled producer error from bound source: {e}");
                                }
                                None => break,
                            },
                        }
                    }
                });
                (Self::MultiEmission, SubscriptionHandle::Cancel(token))
            }
        }
    }

    /// Release the resources held by one attachment.
    ///
    /// For a multi-emission attachment no further `on_value` invocation is
    /// delivered once the pipe's state is cleared; the cancellation stops
    /// the delivery task at its next wakeup. For a single-resolution
    /// attachment this is a no-op: a pending resolution cannot be aborted,
    /// and the pipe's identity guard renders a late delivery moot.
    pub(crate) fn detach(self, handle: SubscriptionHandle) {
        debug!(strategy = ?self, "detaching from source");
        if let SubscriptionHandle::Cancel(token) = handle {
            token.cancel();
        }
    }
}
