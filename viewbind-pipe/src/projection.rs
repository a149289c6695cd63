// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

/// A value returned from one projection pass, marked for the change
/// detector.
///
/// Reference-equality-based change detectors treat a value that compares
/// equal to the previous render as unchanged. A pipe that caches emissions
/// would therefore starve the detector, so the first read after a new
/// emission is wrapped as [`Changed`](Projected::Changed): the detector must
/// treat it as dirty even when it equals the prior value. Subsequent reads
/// with no intervening emission return [`Unchanged`](Projected::Unchanged)
/// with the very same allocation, so re-evaluating the binding every sweep
/// causes no churn.
#[derive(Debug)]
pub enum Projected<T> {
    /// A new emission since the last read; must be treated as changed
    /// regardless of value equality with the prior render.
    Changed(Arc<T>),
    /// No emission since the last read; reference-stable across sweeps.
    Unchanged(Arc<T>),
}

impl<T> Clone for Projected<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Changed(v) => Self::Changed(Arc::clone(v)),
            Self::Unchanged(v) => Self::Unchanged(Arc::clone(v)),
        }
    }
}

impl<T> Projected<T> {
    /// The projected value.
    pub fn value(&self) -> &Arc<T> {
        match self {
            Self::Changed(v) | Self::Unchanged(v) => v,
        }
    }

    /// Consume the marker, yielding the projected value.
    pub fn into_value(self) -> Arc<T> {
        match self {
            Self::Changed(v) | Self::Unchanged(v) => v,
        }
    }

    /// Whether this read must be treated as a change.
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

impl<T: PartialEq> PartialEq for Projected<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Changed(a), Self::Changed(b)) => a == b,
            (Self::Unchanged(a), Self::Unchanged(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let changed = Projected::Changed(Arc::new(3));
        assert!(changed.is_changed());
        assert_eq!(**changed.value(), 3);
        assert_eq!(*changed.into_value(), 3);

        let unchanged = Projected::Unchanged(Arc::new(3));
        assert!(!unchanged.is_changed());
    }

    #[test]
    fn equality_respects_the_marker() {
        assert_eq!(Projected::Changed(Arc::new(1)), Projected::Changed(Arc::new(1)));
        assert_ne!(
            Projected::Changed(Arc::new(1)),
            Projected::Unchanged(Arc::new(1))
        );
    }
}
