// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated paging session that exercises the tracing and diagnostics
//! pipeline.
//!
//! Scrolls a five-section page with every kind of input, toggles a side tag
//! against storage that refuses writes, and records everything to both a
//! [`PrettyPrintSink`] and a [`RecorderSink`]. The recording is then exported
//! as a Chrome trace JSON file.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

use pageflow_core::config::LandingConfig;
use pageflow_core::error::{ConfigError, StoreError};
use pageflow_core::time::Duration;
use pageflow_core::trace::{
    InputEvent, StoreFailureEvent, TraceSink, Tracer, TransitionCompleteEvent,
    TransitionRejectEvent, TransitionStartEvent,
};
use pageflow_core::widgets::tags::{TagCollapse, tag_id};
use pageflow_debug::pretty::PrettyPrintSink;
use pageflow_debug::recorder::RecorderSink;
use pageflow_sim_harness::{MemoryStore, Session};

const SECTIONS: usize = 5;
const VIEWPORT_HEIGHT: f64 = 900.0;

/// Forwards every event to both sinks.
struct Tee {
    pretty: PrettyPrintSink,
    recorder: RecorderSink,
}

impl TraceSink for Tee {
    fn on_input(&mut self, e: &InputEvent) {
        self.pretty.on_input(e);
        self.recorder.on_input(e);
    }

    fn on_transition_start(&mut self, e: &TransitionStartEvent) {
        self.pretty.on_transition_start(e);
        self.recorder.on_transition_start(e);
    }

    fn on_transition_reject(&mut self, e: &TransitionRejectEvent) {
        self.pretty.on_transition_reject(e);
        self.recorder.on_transition_reject(e);
    }

    fn on_transition_complete(&mut self, e: &TransitionCompleteEvent) {
        self.pretty.on_transition_complete(e);
        self.recorder.on_transition_complete(e);
    }

    fn on_store_failure(&mut self, e: &StoreFailureEvent) {
        self.pretty.on_store_failure(e);
        self.recorder.on_store_failure(e);
    }

    fn on_config_error(&mut self, e: &ConfigError) {
        self.pretty.on_config_error(e);
        self.recorder.on_config_error(e);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = LandingConfig::standard();
    let settle = config.paging.transition + Duration::from_millis(100);
    let tee = Tee {
        pretty: PrettyPrintSink::new(Box::new(std::io::stdout())),
        recorder: RecorderSink::new(),
    };
    let mut session =
        Session::with_sink(SECTIONS, SECTIONS, VIEWPORT_HEIGHT, config.paging, tee)?;

    // A wheel burst: only the last event moves the page.
    for _ in 0..3 {
        session.wheel(120.0);
        session.advance(Duration::from_millis(20));
    }
    session.advance(Duration::from_millis(60));
    // Arrives mid-transition and is rejected.
    let _ = session.key("ArrowDown");
    session.settle(settle);

    let _ = session.key("PageDown");
    session.settle(settle);
    let _ = session.click_indicator(4);
    session.settle(settle);
    // Already at the last section.
    let _ = session.key("ArrowDown");

    session.touch_start(600.0);
    let _ = session.touch_end(200.0);
    session.settle(settle);
    session.touch_start(200.0);
    let _ = session.touch_end(700.0);
    session.settle(settle);

    let mut tee = session.into_sink();

    // Side tags against storage that refuses writes.
    let mut store = MemoryStore::new().with_entry(config.tag_storage_key, "{not json");
    store.fail_writes(StoreError::Rejected);
    let ids = (0..2).map(|i| tag_id(None, i));
    let mut tracer = Tracer::new(&mut tee);
    let mut tags = TagCollapse::restore(&store, config.tag_storage_key, ids, &mut tracer);
    let _ = tags.toggle(0, &mut store, &mut tracer);

    let path = "trace.json";
    let mut writer = BufWriter::new(File::create(path)?);
    pageflow_debug::chrome::export(tee.recorder.as_bytes(), &mut writer)?;

    println!("Wrote {path}");
    Ok(())
}
