// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::BindError;

/// An item produced by a multi-emission source: either a value or an error
/// on the source's error channel.
///
/// Errors travel in-band so a source stream can carry both channels through
/// one `Stream` item type. The binding layer treats an error item as fatal
/// for the emitting source.
#[derive(Debug)]
pub enum SourceItem<T> {
    /// A successfully produced value.
    Value(T),
    /// A producer error; terminates the emission sequence.
    Error(BindError),
}

impl<T: PartialEq> PartialEq for SourceItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SourceItem::Value(a), SourceItem::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> SourceItem<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, SourceItem::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, SourceItem::Error(_))
    }

    /// Converts from `SourceItem<T>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            SourceItem::Value(v) => Some(v),
            SourceItem::Error(_) => None,
        }
    }

    /// Converts from `SourceItem<T>` to `Option<BindError>`, discarding values.
    pub fn err(self) -> Option<BindError> {
        match self {
            SourceItem::Value(_) => None,
            SourceItem::Error(e) => Some(e),
        }
    }

    /// Maps a `SourceItem<T>` to `SourceItem<U>` by applying a function to
    /// the contained value. Errors are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> SourceItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            SourceItem::Value(v) => SourceItem::Value(f(v)),
            SourceItem::Error(e) => SourceItem::Error(e),
        }
    }
}
