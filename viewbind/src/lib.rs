// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Viewbind
//!
//! A reactive view-binding layer bridging asynchronous value sources into a
//! synchronous, pull-based change-detection model.
//!
//! ## Overview
//!
//! A host rendering loop re-evaluates every binding once per sweep. Viewbind
//! makes asynchronous sources usable in those bindings:
//!
//! - [`AsyncPipe`] subscribes to a [`SingleSource`] (resolves once) or a
//!   [`StreamSource`] (emits over time), caches the latest value, and marks
//!   the owning view dirty through a [`ChangeSignal`] whenever a value
//!   arrives between sweeps.
//! - [`RuntimeCompiler`] compiles host components on demand through an
//!   external template compiler, memoizing the resulting view handles.
//!
//! ## Quick Start
//!
//! ```no_run
//! use viewbind::prelude::*;
//! use viewbind::NoopSignal;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipe: AsyncPipe<String> = AsyncPipe::new(NoopSignal);
//!     let source: AsyncSource<String> = SingleSource::ready("hello".to_string()).into();
//!
//!     // One change-detection sweep: first bind yields no value yet.
//!     assert!(pipe.transform(Some(&source)).is_none());
//! }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

// Re-export the core vocabulary
pub use viewbind_core::{
    AsyncSource, BindError, ChangeSignal, NoopSignal, Result, SingleSource, SourceItem,
    StreamSource,
};

// Re-export the binding pipe
pub use viewbind_pipe::{AsyncPipe, Projected};

// Re-export the compiler facade
pub use viewbind_compiler::{
    ComponentDescriptor, CompiledTemplate, ProtoViewFactory, ProtoViewRef, RuntimeCompiler,
    TemplateCompiler,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use viewbind_core::{AsyncSource, ChangeSignal, SingleSource, SourceItem, StreamSource};
    pub use viewbind_pipe::{AsyncPipe, Projected};
    pub use viewbind_compiler::{ComponentDescriptor, RuntimeCompiler};
}
