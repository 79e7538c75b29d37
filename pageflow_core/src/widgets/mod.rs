// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smaller landing-page behaviors.
//!
//! Each widget is an independent state machine. The browser glue turns DOM
//! events into method calls and applies the returned changes; a widget whose
//! elements are missing is simply never constructed (or constructed inert),
//! so absence is always a silent no-op.

pub mod carousel;
pub mod popup;
pub mod reveal;
pub mod skins;
pub mod tabs;
pub mod tags;
