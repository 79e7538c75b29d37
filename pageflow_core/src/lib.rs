// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-independent state machines for a full-page scrolling landing page.
//!
//! `pageflow_core` holds every piece of landing-page behavior that can be
//! expressed without touching the DOM. It is `no_std` compatible (with
//! `alloc`); callers pass explicit time stamps and talk back to the page
//! through small traits, so every timing rule can be driven by a simulated
//! clock in tests.
//!
//! # Architecture
//!
//! The scroll paginator is the centre of the crate:
//!
//! ```text
//!   wheel ──► Debouncer ──┐
//!   keyboard ─────────────┤
//!   indicator click ──────┼──► Paginator::handle_input() ──► Request
//!   SwipeTracker ─────────┘                 │
//!                                           ▼
//!   FrameTick ──► Paginator::on_frame() ──► Animator::frame()
//!                        │                        │
//!                        ▼                        ▼
//!              PageHost::set_indicator_active   PageHost::scroll_to
//! ```
//!
//! **[`paginator`]**: the section state machine with its animation lock.
//!
//! **[`animate`]** / **[`easing`]**: cubic ease-out tween with an
//! exactly-once completion callback.
//!
//! **[`debounce`]**: trailing-edge debouncer keyed on host time.
//!
//! **[`input`]**: raw input vocabulary (keys, wheel deltas, swipes).
//!
//! **[`widgets`]**: the smaller page behaviors (scroll reveal, carousel,
//! login popup, tabs, skin switcher, persisted tag collapse).
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and the
//! zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! **[`config`]**: constant timing and threshold tables.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod animate;
pub mod config;
pub mod debounce;
pub mod easing;
pub mod error;
pub mod input;
pub mod paginator;
pub mod time;
pub mod trace;
pub mod widgets;
