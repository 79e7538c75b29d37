// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated page environment for pageflow state machines.
//!
//! - [`SimHost`]: a [`PageHost`](pageflow_core::paginator::PageHost) that
//!   records every scroll write and the state of each indicator.
//! - [`MemoryStore`]: an in-memory
//!   [`KeyValueStore`](pageflow_core::widgets::tags::KeyValueStore) with
//!   failure injection.
//! - [`Session`]: a 60 Hz virtual frame clock that feeds wheel, keyboard,
//!   indicator and touch input into a paginator the way the browser glue
//!   does, including the wheel debounce.

#![no_std]

extern crate alloc;

mod host;
mod session;
mod store;

pub use host::SimHost;
pub use session::{FRAME_PERIOD, RequestRecord, Session};
pub use store::MemoryStore;
