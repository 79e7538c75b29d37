// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace events to the browser console.

use alloc::format;

use pageflow_core::error::ConfigError;
use pageflow_core::trace::{
    InputEvent, StoreFailureEvent, TraceSink, TransitionCompleteEvent, TransitionRejectEvent,
    TransitionStartEvent,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// A [`TraceSink`] that writes one console line per event.
///
/// Inputs and rejections are chatty, so they are only logged when `verbose`
/// is set; transitions go to `console.debug`, failures to `console.warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Also log inputs and rejected requests.
    pub verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that logs transitions and failures only.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: false }
    }
}

fn ms(ticks: u64) -> f64 {
    ticks as f64 / 1000.0
}

impl TraceSink for ConsoleSink {
    fn on_input(&mut self, e: &InputEvent) {
        if self.verbose {
            let line = format!("[pageflow] {:.1}ms input {:?}", ms(e.at.ticks()), e.source);
            console::debug_1(&JsValue::from_str(&line));
        }
    }

    fn on_transition_start(&mut self, e: &TransitionStartEvent) {
        let line = format!(
            "[pageflow] {:.1}ms section {} -> {} ({:.0}px -> {:.0}px)",
            ms(e.at.ticks()),
            e.from,
            e.to,
            e.start_offset,
            e.end_offset
        );
        console::debug_1(&JsValue::from_str(&line));
    }

    fn on_transition_reject(&mut self, e: &TransitionRejectEvent) {
        if self.verbose {
            let line = format!(
                "[pageflow] {:.1}ms rejected {:?} target={:?}",
                ms(e.at.ticks()),
                e.reason,
                e.target
            );
            console::debug_1(&JsValue::from_str(&line));
        }
    }

    fn on_transition_complete(&mut self, e: &TransitionCompleteEvent) {
        let line = format!(
            "[pageflow] {:.1}ms at section {} after {} frames",
            ms(e.at.ticks()),
            e.index,
            e.frames
        );
        console::debug_1(&JsValue::from_str(&line));
    }

    fn on_store_failure(&mut self, e: &StoreFailureEvent) {
        let line = format!("[pageflow] storage {:?} failed: {}", e.op, e.error);
        console::warn_1(&JsValue::from_str(&line));
    }

    fn on_config_error(&mut self, e: &ConfigError) {
        let line = format!("[pageflow] not paging: {e}");
        console::warn_1(&JsValue::from_str(&line));
    }
}
