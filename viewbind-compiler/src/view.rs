// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

/// Description of a component whose host template is to be compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Unique component name; the compiler facade memoizes per name.
    pub name: String,
    /// CSS selector the component is mounted under.
    pub selector: String,
    /// The component's template text.
    pub template: String,
}

impl ComponentDescriptor {
    pub fn new(
        name: impl Into<String>,
        selector: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            selector: selector.into(),
            template: template.into(),
        }
    }
}

/// Opaque product of the external template compiler.
///
/// The facade never inspects this beyond handing it to the proto-view
/// factory.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    /// Name of the component this template was compiled for.
    pub component: String,
    /// Compiler-defined render instructions.
    pub render_ops: Vec<String>,
}

/// Cheap handle to an instantiable proto view.
///
/// Clones share the underlying view; [`ptr_eq`](ProtoViewRef::ptr_eq)
/// distinguishes memoized handles from recompiled ones.
#[derive(Debug, Clone)]
pub struct ProtoViewRef {
    inner: Arc<ProtoView>,
}

#[derive(Debug)]
pub struct ProtoView {
    /// Name of the component this view renders.
    pub component: String,
    /// The compiled template backing the view.
    pub template: CompiledTemplate,
}

impl ProtoViewRef {
    pub fn new(view: ProtoView) -> Self {
        Self {
            inner: Arc::new(view),
        }
    }

    /// The proto view behind this handle.
    pub fn view(&self) -> &ProtoView {
        &self.inner
    }

    /// Whether two handles refer to the same proto view.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
