// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Memoizing facade over the external template-compilation subsystem.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;
use viewbind_core::Result;

use crate::view::{ComponentDescriptor, CompiledTemplate, ProtoViewRef};

/// External template compiler (collaborator; not specified here).
#[async_trait]
pub trait TemplateCompiler: Send + Sync {
    /// Compile the host template for `component`.
    ///
    /// # Errors
    ///
    /// Implementations surface failures as
    /// [`BindError::TemplateCompilation`](viewbind_core::BindError::TemplateCompilation).
    async fn compile_host_component(
        &self,
        component: &ComponentDescriptor,
    ) -> Result<CompiledTemplate>;

    /// Invalidate any caches the compiler holds.
    fn clear_cache(&self);
}

/// External proto-view factory (collaborator; not specified here).
pub trait ProtoViewFactory: Send + Sync {
    /// Wrap a compiled template into an instantiable proto view.
    fn create_host_view(&self, template: CompiledTemplate) -> ProtoViewRef;
}

/// Compiles host components at runtime by delegating to an external
/// [`TemplateCompiler`] and wrapping the result through a
/// [`ProtoViewFactory`], memoizing the resulting [`ProtoViewRef`] per
/// component.
pub struct RuntimeCompiler<C, F> {
    template_compiler: C,
    proto_view_factory: F,
    cache: Mutex<HashMap<String, ProtoViewRef>>,
}

impl<C, F> RuntimeCompiler<C, F>
where
    C: TemplateCompiler,
    F: ProtoViewFactory,
{
    pub fn new(template_compiler: C, proto_view_factory: F) -> Self {
        Self {
            template_compiler,
            proto_view_factory,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Compile `component` in a host view, returning a memoized handle when
    /// the component was compiled before.
    ///
    /// # Errors
    ///
    /// Propagates the delegate compiler's failure; failed compilations are
    /// never memoized.
    pub async fn compile_in_host(&self, component: &ComponentDescriptor) -> Result<ProtoViewRef> {
        if let Some(proto) = self.cache.lock().get(&component.name) {
            debug!(component = %component.name, "proto view served from cache");
            return Ok(proto.clone());
        }

        let template = self.template_compiler.compile_host_component(component).await?;
        let proto = self.proto_view_factory.create_host_view(template);
        self.cache
            .lock()
            .insert(component.name.clone(), proto.clone());
        Ok(proto)
    }

    /// Invalidate the memoized proto views and the delegate's caches.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
        self.template_compiler.clear_cache();
    }
}
