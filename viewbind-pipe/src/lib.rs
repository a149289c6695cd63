// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value-projection pipe bridging asynchronous sources into a synchronous
//! change-detection sweep.
//!
//! The host's rendering loop evaluates every binding once per sweep; an
//! [`AsyncPipe`] makes a single-resolution or multi-emission source usable
//! in such a binding by caching the latest delivered value and signaling
//! dirtiness through a [`ChangeSignal`] whenever a new value arrives between
//! sweeps.
//!
//! # Guarantees
//!
//! - **At most one active attachment** per pipe: binding a different source
//!   always detaches the previous one first, never overlapping the two.
//! - **No-op idempotence**: re-evaluating an unchanged binding returns the
//!   same value allocation every sweep and never re-signals.
//! - **Forced dirtiness**: the first read after an emission is wrapped as
//!   [`Projected::Changed`] so reference-equality change detectors cannot
//!   miss it.
//! - **Stale-callback suppression**: deliveries for a source no longer
//!   bound are discarded without touching state or signaling.
//!
//! [`ChangeSignal`]: viewbind_core::ChangeSignal

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod async_pipe;
pub mod projection;
mod strategy;

pub use self::async_pipe::AsyncPipe;
pub use self::projection::Projected;
