// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Asynchronous value sources bindable into a view.
//!
//! A [`AsyncSource`] is a cheap, identity-comparable handle to an
//! asynchronous value producer. Exactly two kinds exist:
//!
//! - **Single-resolution** ([`SingleSource`]): resolves at most once, then
//!   becomes inert. Every attachment observes the same resolution.
//! - **Multi-emission** ([`StreamSource`]): may emit zero or more
//!   [`SourceItem`]s over an unbounded lifetime, including an in-band error
//!   channel.
//!
//! Handles clone by reference; two clones of the same handle compare as the
//! same source via [`AsyncSource::same_source`]. The binding layer relies on
//! that identity to decide between the no-op fast path and a full
//! teardown-then-rebuild when a binding expression is re-evaluated.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use futures::stream::{BoxStream, Stream, StreamExt};
use parking_lot::Mutex;

use crate::error::{BindError, Result};
use crate::source_item::SourceItem;

/// A single-resolution source: resolves at most once, then stays inert.
///
/// The resolution is held behind a shared future, so attaching after the
/// value settled still observes it (and an abandoned attachment costs one
/// cloned future, never a live subscription).
///
/// # Example
///
/// ```
/// use viewbind_core::SingleSource;
///
/// let source = SingleSource::ready(42);
/// let again = source.clone();
/// assert!(source.same_source(&again));
/// ```
pub struct SingleSource<T> {
    inner: Arc<SingleInner<T>>,
}

struct SingleInner<T> {
    resolution: Shared<BoxFuture<'static, T>>,
}

impl<T> Clone for SingleSource<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for SingleSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleSource").finish_non_exhaustive()
    }
}

impl<T> SingleSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a single-resolution source from a future.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            inner: Arc::new(SingleInner {
                resolution: future.boxed().shared(),
            }),
        }
    }

    /// Create an already-settled source.
    pub fn ready(value: T) -> Self {
        Self::new(futures::future::ready(value))
    }

    /// A future observing this source's resolution.
    ///
    /// May be taken any number of times; all observers see the same value.
    pub fn resolution(&self) -> impl Future<Output = T> + Send + 'static {
        self.inner.resolution.clone()
    }
}

impl<T> SingleSource<T> {
    /// Whether `other` is a handle to this same source.
    pub fn same_source(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

type ConnectFn<T> = dyn Fn() -> BoxStream<'static, SourceItem<T>> + Send + Sync;

/// A multi-emission source: may emit zero, one, or many [`SourceItem`]s.
///
/// Attaching connects a fresh item stream via the source's connect closure.
///
/// # Example
///
/// ```
/// use viewbind_core::{SourceItem, StreamSource};
/// use futures::stream;
///
/// // A cold source: every attachment replays the values.
/// let source = StreamSource::from_factory(|| {
///     stream::iter(vec![SourceItem::Value(1), SourceItem::Value(2)])
/// });
/// let again = source.clone();
/// assert!(source.same_source(&again));
/// ```
pub struct StreamSource<T> {
    inner: Arc<StreamInner<T>>,
}

struct StreamInner<T> {
    connect: Box<ConnectFn<T>>,
}

impl<T> Clone for StreamSource<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for StreamSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSource").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> StreamSource<T> {
    /// Create a cold, re-attachable source from a stream factory.
    ///
    /// The factory runs once per attachment.
    pub fn from_factory<F, S>(factory: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: Stream<Item = SourceItem<T>> + Send + 'static,
    {
        Self {
            inner: Arc::new(StreamInner {
                connect: Box::new(move || factory().boxed()),
            }),
        }
    }

    /// Create a single-use source from one stream instance.
    ///
    /// The first attachment consumes the stream; any later attachment
    /// observes an already-ended stream. Use [`from_factory`] when a source
    /// must survive a detach-then-reattach cycle.
    ///
    /// [`from_factory`]: StreamSource::from_factory
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = SourceItem<T>> + Send + 'static,
    {
        let slot: Mutex<Option<BoxStream<'static, SourceItem<T>>>> =
            Mutex::new(Some(stream.boxed()));
        Self {
            inner: Arc::new(StreamInner {
                connect: Box::new(move || {
                    slot.lock()
                        .take()
                        .unwrap_or_else(|| futures::stream::empty().boxed())
                }),
            }),
        }
    }

    /// Connect a fresh item stream for one attachment.
    pub fn connect(&self) -> BoxStream<'static, SourceItem<T>> {
        (self.inner.connect)()
    }
}

impl<T> StreamSource<T> {
    /// Whether `other` is a handle to this same source.
    pub fn same_source(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// An asynchronous value producer bound into a view; exactly one of two
/// variants.
///
/// The set of supported source kinds is closed: template-level expression
/// values that match neither variant fail [`classification`](Self::classify)
/// with [`BindError::InvalidSourceKind`].
#[derive(Debug)]
pub enum AsyncSource<T> {
    /// Resolves at most once ([`SingleSource`]).
    Single(SingleSource<T>),
    /// May emit many values over time ([`StreamSource`]).
    Stream(StreamSource<T>),
}

impl<T> Clone for AsyncSource<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Single(s) => Self::Single(s.clone()),
            Self::Stream(s) => Self::Stream(s.clone()),
        }
    }
}

impl<T> From<SingleSource<T>> for AsyncSource<T> {
    fn from(source: SingleSource<T>) -> Self {
        Self::Single(source)
    }
}

impl<T> From<StreamSource<T>> for AsyncSource<T> {
    fn from(source: StreamSource<T>) -> Self {
        Self::Stream(source)
    }
}

impl<T> AsyncSource<T> {
    /// Whether this source resolves at most once.
    ///
    /// Mutually exclusive with [`is_multi_emission`](Self::is_multi_emission).
    pub const fn is_single_resolution(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// Whether this source may emit many values over time.
    pub const fn is_multi_emission(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    /// Whether `other` is a handle to the same underlying source.
    ///
    /// Handles of different variants are never the same source.
    pub fn same_source(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Single(a), Self::Single(b)) => a.same_source(b),
            (Self::Stream(a), Self::Stream(b)) => a.same_source(b),
            _ => false,
        }
    }
}

impl<T: 'static> AsyncSource<T> {
    /// Classify a dynamically-typed expression value as a source.
    ///
    /// Template binding expressions are dynamically typed at the view layer;
    /// this accepts an [`AsyncSource`], a bare [`SingleSource`] or a bare
    /// [`StreamSource`] and returns a handle sharing the value's identity.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::InvalidSourceKind`] naming `consumer` and the
    /// offending value's type when the value matches neither source kind.
    ///
    /// # Example
    ///
    /// ```
    /// use viewbind_core::{AsyncSource, BindError, SingleSource};
    ///
    /// let single = SingleSource::ready(1);
    /// let source: AsyncSource<i32> = AsyncSource::classify("async", &single).unwrap();
    /// assert!(source.is_single_resolution());
    ///
    /// let err = AsyncSource::<i32>::classify("async", &"not a source").unwrap_err();
    /// assert!(matches!(err, BindError::InvalidSourceKind { .. }));
    /// ```
    pub fn classify<V: Any>(consumer: &str, value: &V) -> Result<Self> {
        let any: &dyn Any = value;
        if let Some(source) = any.downcast_ref::<Self>() {
            return Ok(source.clone());
        }
        if let Some(single) = any.downcast_ref::<SingleSource<T>>() {
            return Ok(Self::Single(single.clone()));
        }
        if let Some(stream) = any.downcast_ref::<StreamSource<T>>() {
            return Ok(Self::Stream(stream.clone()));
        }
        Err(BindError::invalid_source_kind(
            consumer,
            std::any::type_name::<V>(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let single = SingleSource::ready(1);
        let source = AsyncSource::Single(single.clone());
        assert!(source.same_source(&AsyncSource::Single(single)));

        let other = AsyncSource::Single(SingleSource::ready(1));
        assert!(!source.same_source(&other));
    }

    #[test]
    fn variants_are_never_the_same_source() {
        let single: AsyncSource<i32> = SingleSource::ready(1).into();
        let stream: AsyncSource<i32> =
            StreamSource::from_stream(futures::stream::empty()).into();
        assert!(!single.same_source(&stream));
    }

    #[test]
    fn predicates_are_mutually_exclusive() {
        let single: AsyncSource<i32> = SingleSource::ready(1).into();
        assert!(single.is_single_resolution());
        assert!(!single.is_multi_emission());

        let stream: AsyncSource<i32> =
            StreamSource::from_stream(futures::stream::empty()).into();
        assert!(stream.is_multi_emission());
        assert!(!stream.is_single_resolution());
    }

    #[test]
    fn classify_accepts_all_source_shapes() {
        let single = SingleSource::ready(1);
        let classified = AsyncSource::classify("async", &single).unwrap();
        assert!(classified.same_source(&AsyncSource::Single(single.clone())));

        let wrapped: AsyncSource<i32> = single.into();
        assert!(AsyncSource::classify("async", &wrapped)
            .unwrap()
            .same_source(&wrapped));

        let stream: StreamSource<i32> = StreamSource::from_stream(futures::stream::empty());
        assert!(AsyncSource::<i32>::classify("async", &stream)
            .unwrap()
            .is_multi_emission());
    }

    #[test]
    fn classify_rejects_foreign_values() {
        let err = AsyncSource::<i32>::classify("async", &String::from("nope")).unwrap_err();
        match err {
            BindError::InvalidSourceKind {
                consumer,
                type_name,
            } => {
                assert_eq!(consumer, "async");
                assert!(type_name.contains("String"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
