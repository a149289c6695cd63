// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the viewbind binding layer.
//!
//! This module defines the root [`BindError`] type with specific variants for
//! the failure modes of the binding layer, allowing hosts to handle errors
//! appropriately.
//!
//! # Examples
//!
//! ```
//! use viewbind_core::{BindError, Result};
//!
//! fn bind_expression() -> Result<()> {
//!     Err(BindError::invalid_source_kind("async", "alloc::string::String"))
//! }
//! ```

/// Root error type for all binding-layer operations.
///
/// This enum encompasses all error conditions that can occur while binding
/// asynchronous sources into a view and while compiling host components.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// A non-null expression value was bound that is neither a
    /// single-resolution nor a multi-emission source.
    ///
    /// Raised synchronously from the transform path; fatal to the binding
    /// until a different value is supplied.
    #[error("invalid source bound to '{consumer}': a value of type `{type_name}` is neither a single-resolution nor a multi-emission source")]
    InvalidSourceKind {
        /// Name of the consuming binding (e.g. the pipe name).
        consumer: String,
        /// Type name of the offending expression value.
        type_name: &'static str,
    },

    /// An error emitted on a multi-emission source's error channel.
    ///
    /// The binding layer never retries or suppresses these; they are
    /// re-raised to the surrounding execution context.
    #[error("producer error: {0}")]
    Producer(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The external template compiler failed for a component.
    #[error("template compilation failed for component '{component}': {source}")]
    TemplateCompilation {
        /// Name of the component whose template failed to compile.
        component: String,
        /// The delegate compiler's error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl BindError {
    /// Create an [`BindError::InvalidSourceKind`] error for the given
    /// consumer and expression value type.
    pub fn invalid_source_kind(consumer: impl Into<String>, type_name: &'static str) -> Self {
        Self::InvalidSourceKind {
            consumer: consumer.into(),
            type_name,
        }
    }

    /// Wrap a producer error emitted by a multi-emission source.
    pub fn producer(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Producer(Box::new(error))
    }

    /// Wrap a template-compilation failure from the delegate compiler.
    pub fn template_compilation(
        component: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::TemplateCompilation {
            component: component.into(),
            source: Box::new(source),
        }
    }

    /// Check whether this error is fatal to the binding that raised it.
    ///
    /// All current variants are; the binding layer never retries.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        true
    }
}

/// Specialized `Result` type for binding-layer operations.
pub type Result<T> = std::result::Result<T, BindError>;
