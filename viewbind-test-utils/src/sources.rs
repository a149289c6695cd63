// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use tokio::sync::{mpsc, oneshot};
use tokio_stream::wrappers::UnboundedReceiverStream;
use viewbind_core::{SingleSource, SourceItem, StreamSource};

/// Resolves the paired [`SingleSource`] at a test-chosen moment.
#[derive(Debug)]
pub struct SingleResolver<T> {
    tx: oneshot::Sender<T>,
}

impl<T> SingleResolver<T> {
    /// Resolve the source with `value`.
    pub fn resolve(self, value: T) {
        let _ = self.tx.send(value);
    }
}

/// Creates a single-resolution source that stays pending until the returned
/// resolver fires. Dropping the resolver leaves the source pending forever,
/// like a promise that never settles.
pub fn pending_single<T: Clone + Send + Sync + 'static>() -> (SingleResolver<T>, SingleSource<T>) {
    let (tx, rx) = oneshot::channel();
    let source = SingleSource::new(async move {
        match rx.await {
            Ok(value) => value,
            Err(_) => futures::future::pending().await,
        }
    });
    (SingleResolver { tx }, source)
}

/// Creates a channel-backed multi-emission source that automatically wraps
/// sent values in [`SourceItem::Value`].
///
/// # Example
///
/// ```
/// use viewbind_test_utils::stream_source;
///
/// let (tx, _source) = stream_source::<i32>();
/// tx.send(1).unwrap();
/// ```
pub fn stream_source<T: Send + 'static>() -> (mpsc::UnboundedSender<T>, StreamSource<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(SourceItem::Value);
    (tx, StreamSource::from_stream(stream))
}

/// Creates a channel-backed multi-emission source that accepts explicit
/// [`SourceItem`]s, for exercising the producer error channel.
pub fn stream_source_with_errors<T: Send + 'static>(
) -> (mpsc::UnboundedSender<SourceItem<T>>, StreamSource<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, StreamSource::from_stream(UnboundedReceiverStream::new(rx)))
}
