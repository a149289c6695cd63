// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core traits and types for the viewbind reactive binding layer.
//!
//! This crate defines the vocabulary shared by the binding layer and its
//! host: the two-variant asynchronous [`AsyncSource`] model, the in-band
//! [`SourceItem`] channel for multi-emission sources, the [`ChangeSignal`]
//! handle through which bindings mark their owning view dirty, and the root
//! [`BindError`] type.
//!
//! Higher-level behavior (the async pipe itself, the runtime compiler
//! facade) lives in the `viewbind-pipe` and `viewbind-compiler` crates.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod change_signal;
pub mod error;
pub mod source;
pub mod source_item;

pub use self::change_signal::{ChangeSignal, NoopSignal};
pub use self::error::{BindError, Result};
pub use self::source::{AsyncSource, SingleSource, StreamSource};
pub use self::source_item::SourceItem;
