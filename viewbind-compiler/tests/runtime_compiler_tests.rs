// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use viewbind_compiler::{
    ComponentDescriptor, CompiledTemplate, ProtoView, ProtoViewFactory, ProtoViewRef,
    RuntimeCompiler, TemplateCompiler,
};
use viewbind_core::{BindError, Result};

#[derive(Default)]
struct StubCompiler {
    compiles: Arc<AtomicUsize>,
    clears: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

#[async_trait]
impl TemplateCompiler for StubCompiler {
    async fn compile_host_component(
        &self,
        component: &ComponentDescriptor,
    ) -> Result<CompiledTemplate> {
        self.compiles.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(BindError::template_compilation(
                component.name.clone(),
                std::io::Error::other("syntax error in template"),
            ));
        }
        Ok(CompiledTemplate {
            component: component.name.clone(),
            render_ops: vec![format!("mount {}", component.selector)],
        })
    }

    fn clear_cache(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct StubFactory {
    creates: Arc<AtomicUsize>,
}

impl ProtoViewFactory for StubFactory {
    fn create_host_view(&self, template: CompiledTemplate) -> ProtoViewRef {
        self.creates.fetch_add(1, Ordering::SeqCst);
        ProtoViewRef::new(ProtoView {
            component: template.component.clone(),
            template,
        })
    }
}

fn task_component() -> ComponentDescriptor {
    ComponentDescriptor::new("task-cmp", "task-cmp", "Time: {{ time | async }}")
}

#[tokio::test]
async fn test_compile_delegates_then_wraps() -> anyhow::Result<()> {
    // Arrange
    let compiler = RuntimeCompiler::new(StubCompiler::default(), StubFactory::default());

    // Act
    let proto = compiler.compile_in_host(&task_component()).await?;

    // Assert
    assert_eq!(proto.view().component, "task-cmp");
    assert_eq!(proto.view().template.render_ops, vec!["mount task-cmp"]);

    Ok(())
}

#[tokio::test]
async fn test_repeat_compilation_is_memoized() -> anyhow::Result<()> {
    // Arrange
    let stub = StubCompiler::default();
    let factory = StubFactory::default();
    let compiles = Arc::clone(&stub.compiles);
    let creates = Arc::clone(&factory.creates);
    let compiler = RuntimeCompiler::new(stub, factory);

    // Act
    let first = compiler.compile_in_host(&task_component()).await?;
    let second = compiler.compile_in_host(&task_component()).await?;

    // Assert: one delegate call, one wrap, identity-stable handle
    assert!(first.ptr_eq(&second));
    assert_eq!(compiles.load(Ordering::SeqCst), 1);
    assert_eq!(creates.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test]
async fn test_distinct_components_compile_independently() -> anyhow::Result<()> {
    // Arrange
    let compiler = RuntimeCompiler::new(StubCompiler::default(), StubFactory::default());
    let other = ComponentDescriptor::new("list-cmp", "list-cmp", "<li>{{ item }}</li>");

    // Act
    let a = compiler.compile_in_host(&task_component()).await?;
    let b = compiler.compile_in_host(&other).await?;

    // Assert
    assert!(!a.ptr_eq(&b));
    assert_eq!(b.view().component, "list-cmp");

    Ok(())
}

#[tokio::test]
async fn test_clear_cache_invalidates_and_passes_through() -> anyhow::Result<()> {
    // Arrange
    let stub = StubCompiler::default();
    let compiles = Arc::clone(&stub.compiles);
    let clears = Arc::clone(&stub.clears);
    let compiler = RuntimeCompiler::new(stub, StubFactory::default());
    let first = compiler.compile_in_host(&task_component()).await?;

    // Act
    compiler.clear_cache();
    let second = compiler.compile_in_host(&task_component()).await?;

    // Assert: own memo dropped, delegate cache cleared, component recompiled
    assert!(!first.ptr_eq(&second));
    assert_eq!(clears.load(Ordering::SeqCst), 1);
    assert_eq!(compiles.load(Ordering::SeqCst), 2);

    Ok(())
}

#[tokio::test]
async fn test_failed_compilation_is_not_memoized() -> anyhow::Result<()> {
    // Arrange
    let stub = StubCompiler::default();
    let compiles = Arc::clone(&stub.compiles);
    let failing = Arc::clone(&stub.failing);
    failing.store(true, Ordering::SeqCst);
    let compiler = RuntimeCompiler::new(stub, StubFactory::default());

    // Act: first attempt fails and must not be cached
    let err = compiler.compile_in_host(&task_component()).await.unwrap_err();
    assert!(matches!(err, BindError::TemplateCompilation { .. }));
    assert!(err.to_string().contains("'task-cmp'"));

    // A later attempt hits the delegate again
    failing.store(false, Ordering::SeqCst);
    let proto = compiler.compile_in_host(&task_component()).await?;

    // Assert
    assert_eq!(proto.view().component, "task-cmp");
    assert_eq!(compiles.load(Ordering::SeqCst), 2);

    Ok(())
}
