// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime template-compilation facade.
//!
//! [`RuntimeCompiler`] delegates the actual compilation work to an external
//! [`TemplateCompiler`] and the wrapping of compiled templates into view
//! handles to an external [`ProtoViewFactory`]; it adds nothing beyond
//! composition of the two calls and per-component memoization with cache
//! invalidation pass-through.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod runtime_compiler;
pub mod view;

pub use self::runtime_compiler::{ProtoViewFactory, RuntimeCompiler, TemplateCompiler};
pub use self::view::{ComponentDescriptor, CompiledTemplate, ProtoView, ProtoViewRef};
