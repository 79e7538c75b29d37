// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for pageflow.
//!
//! This crate implements the host traits of `pageflow_core` against browser
//! APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` frame source that stops itself
//! - [`Timeout`], [`Interval`], [`Debounced`]: `setTimeout`/`setInterval`
//!   wrappers
//! - [`WindowHost`]: window scrolling and indicator classes ([`PageHost`])
//! - [`LocalStorage`]: `localStorage` ([`KeyValueStore`])
//! - [`ConsoleSink`]: trace events to the browser console
//! - [`query`] / [`query_all`]: selector helpers
//!
//! [`PageHost`]: pageflow_core::paginator::PageHost
//! [`KeyValueStore`]: pageflow_core::widgets::tags::KeyValueStore

#![no_std]

extern crate alloc;

mod console;
mod host;
mod query;
mod raf;
mod storage;
mod timer;

pub use console::ConsoleSink;
pub use host::WindowHost;
pub use query::{query, query_all, query_all_in};
pub use raf::{LoopControl, RafLoop};
pub use storage::LocalStorage;
pub use timer::{Debounced, Interval, Timeout, debounce};

use pageflow_core::time::HostTime;

/// Returns the current host time from `performance.now()`.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(raf::performance_now())
}
