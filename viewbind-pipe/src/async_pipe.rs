// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The async pipe: projects asynchronous sources into a pull-based
//! change-detection model.

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;
use viewbind_core::{AsyncSource, ChangeSignal, Result};

use crate::projection::Projected;
use crate::strategy::{SubscribeStrategy, SubscriptionHandle};

/// Subscription state of one pipe.
///
/// The five bound fields live and die together: a pipe either holds a
/// source together with its strategy, subscription handle and value cache,
/// or holds nothing at all.
enum PipeState<T> {
    Unbound,
    Bound(BoundState<T>),
}

struct BoundState<T> {
    source: AsyncSource<T>,
    strategy: SubscribeStrategy,
    subscription: SubscriptionHandle,
    latest: Option<Arc<T>>,
    returned: Option<Arc<T>>,
}

/// Projects the latest value of an [`AsyncSource`] into a synchronous
/// change-detection sweep.
///
/// The host calls [`transform`](AsyncPipe::transform) once per sweep with
/// whatever the binding expression currently evaluates to. The pipe keeps at
/// most one active attachment: binding a different source (or `None`) tears
/// the current attachment down before anything else happens. Values arrive
/// asynchronously between sweeps; each delivery caches the value and marks
/// the owning view for a future check through the pipe's [`ChangeSignal`].
///
/// The first read after a new emission is wrapped as
/// [`Projected::Changed`] so that reference-equality-based detectors treat
/// it as dirty; reads with no intervening emission return the same value
/// allocation every time and never re-signal.
///
/// # Example
///
/// ```no_run
/// use viewbind_core::{NoopSignal, SingleSource};
/// use viewbind_pipe::AsyncPipe;
///
/// # #[tokio::main]
/// # async fn main() {
/// let pipe: AsyncPipe<i32> = AsyncPipe::new(NoopSignal);
/// let source = SingleSource::ready(42).into();
///
/// // First bind: subscribes, nothing available synchronously.
/// assert!(pipe.transform(Some(&source)).is_none());
///
/// // A later sweep, after the resolution was delivered, observes 42
/// // wrapped as Projected::Changed.
/// # }
/// ```
pub struct AsyncPipe<T> {
    name: &'static str,
    signal: Arc<dyn ChangeSignal>,
    state: Arc<Mutex<PipeState<T>>>,
}

impl<T> AsyncPipe<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a pipe marking dirtiness through `signal`, under the default
    /// binding name `"async"`.
    pub fn new(signal: impl ChangeSignal + 'static) -> Self {
        Self::named("async", signal)
    }

    /// Create a pipe under an explicit binding name, used in diagnostics.
    pub fn named(name: &'static str, signal: impl ChangeSignal + 'static) -> Self {
        Self {
            name,
            signal: Arc::new(signal),
            state: Arc::new(Mutex::new(PipeState::Unbound)),
        }
    }

    /// The binding name reported in diagnostics.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Project the current binding expression value, called once per
    /// change-detection sweep.
    ///
    /// Returns `None` while no value has been delivered (including every
    /// first call for a newly bound source), the cached value marked
    /// [`Projected::Changed`] on the first read after an emission, and the
    /// reference-stable [`Projected::Unchanged`] on every read thereafter.
    pub fn transform(&self, source: Option<&AsyncSource<T>>) -> Option<Projected<T>> {
        let mut state = self.state.lock();

        // An identity change is always a full teardown; the rebind falls
        // through to the unbound branch below instead of recursing.
        if let PipeState::Bound(bound) = &*state {
            let still_bound = source.is_some_and(|s| bound.source.same_source(s));
            if !still_bound {
                Self::teardown(&mut state);
            }
        }

        if let PipeState::Bound(bound) = &mut *state {
            return match (&bound.latest, &bound.returned) {
                // Nothing delivered yet.
                (None, _) => None,
                // No emission since the last read: reference-stable fast
                // path, no dirty signal.
                (Some(latest), Some(returned)) if Arc::ptr_eq(latest, returned) => {
                    Some(Projected::Unchanged(Arc::clone(returned)))
                }
                // First read after an emission: record it and force the
                // detector to treat the value as changed.
                (Some(latest), _) => {
                    let latest = Arc::clone(latest);
                    bound.returned = Some(Arc::clone(&latest));
                    Some(Projected::Changed(latest))
                }
            };
        }

        if let Some(source) = source {
            *state = PipeState::Bound(self.bind(source));
        }
        // No value is available synchronously on a first bind.
        None
    }

    /// Template-facing entry point for dynamically-typed expression values.
    ///
    /// Classifies `value` as a source, then projects it.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::InvalidSourceKind`] when a non-null value
    /// matches neither source kind.
    ///
    /// [`BindError::InvalidSourceKind`]: viewbind_core::BindError::InvalidSourceKind
    pub fn transform_expr<V: Any>(&self, value: Option<&V>) -> Result<Option<Projected<T>>> {
        match value {
            None => Ok(self.transform(None)),
            Some(value) => {
                let source = AsyncSource::classify(self.name, value)?;
                Ok(self.transform(Some(&source)))
            }
        }
    }

    fn bind(&self, source: &AsyncSource<T>) -> BoundState<T> {
        let weak = Arc::downgrade(&self.state);
        let signal = Arc::clone(&self.signal);
        let guard_source = source.clone();
        let (strategy, subscription) = SubscribeStrategy::attach(source, move |value| {
            let Some(shared) = weak.upgrade() else { return };
            let mut state = shared.lock();
            let mut delivered = false;
            if let PipeState::Bound(bound) = &mut *state {
                // Stale deliveries (the source was detached or replaced
                // since this attachment was made) are silently discarded;
                // identity is the guard here, not cancellation.
                if bound.source.same_source(&guard_source) {
                    bound.latest = Some(Arc::new(value));
                    delivered = true;
                }
            }
            drop(state);
            if delivered {
                signal.mark_for_check();
            }
        });
        BoundState {
            source: source.clone(),
            strategy,
            subscription,
            latest: None,
            returned: None,
        }
    }
}

impl<T> AsyncPipe<T> {
    /// Tear down the active attachment, if any.
    ///
    /// Idempotent; invoked by the owning view's destruction sequence and by
    /// `Drop`.
    pub fn on_destroy(&self) {
        let mut state = self.state.lock();
        if matches!(&*state, PipeState::Bound(_)) {
            debug!(pipe = self.name, "destroying pipe with active attachment");
            Self::teardown(&mut state);
        }
    }

    fn teardown(state: &mut PipeState<T>) {
        if let PipeState::Bound(bound) = std::mem::replace(state, PipeState::Unbound) {
            bound.strategy.detach(bound.subscription);
        }
    }
}

impl<T> Drop for AsyncPipe<T> {
    fn drop(&mut self) {
        Self::teardown(&mut self.state.lock());
    }
}
