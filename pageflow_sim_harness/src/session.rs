// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtual-time paging session.
//!
//! A [`Session`] owns a [`Paginator`], a [`SimHost`] and the same input
//! plumbing the browser glue uses: wheel deltas go through a debouncer,
//! touches through a [`SwipeTracker`], keys and indicator clicks straight in.
//! Time only moves when [`advance`](Session::advance) is called; frames fall
//! on a fixed 60 Hz grid and each frame first delivers a due wheel value and
//! then steps the paginator.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use pageflow_core::config::PaginatorConfig;
use pageflow_core::debounce::Debouncer;
use pageflow_core::error::ConfigError;
use pageflow_core::input::{InputSource, Key, PageInput, SwipeTracker};
use pageflow_core::paginator::{FrameOutcome, Paginator, Request};
use pageflow_core::time::{Duration, HostTime};
use pageflow_core::trace::{InputEvent, NoopSink, TraceSink, TransitionCompleteEvent, Tracer};

use crate::host::SimHost;

/// Frame period of the virtual display (60 Hz, rounded to whole µs).
pub const FRAME_PERIOD: Duration = Duration(16_667);

/// One request that reached the paginator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RequestRecord {
    /// When it was handled.
    pub at: HostTime,
    /// Which input produced it.
    pub source: InputSource,
    /// What the paginator answered.
    pub request: Request,
}

/// A paginator wired to a simulated page and clock.
#[derive(Debug)]
pub struct Session<S: TraceSink = NoopSink> {
    now: HostTime,
    next_frame: HostTime,
    frame_index: u64,
    host: SimHost,
    paginator: Paginator,
    wheel: Debouncer<Vec2>,
    swipe: SwipeTracker,
    requests: Vec<RequestRecord>,
    completions: Vec<(HostTime, usize)>,
    sink: S,
}

impl Session {
    /// Creates a session over `sections` sections, each with one indicator,
    /// using browser timing.
    pub fn new(sections: usize, viewport_height: f64) -> Result<Self, ConfigError> {
        Self::with_sink(
            sections,
            sections,
            viewport_height,
            PaginatorConfig::web(),
            NoopSink,
        )
    }
}

impl<S: TraceSink> Session<S> {
    /// Creates a session with explicit counts, configuration and trace sink.
    ///
    /// Indicators start in the state [`Paginator::sync_indicators`] leaves
    /// them in.
    pub fn with_sink(
        sections: usize,
        indicators: usize,
        viewport_height: f64,
        config: PaginatorConfig,
        mut sink: S,
    ) -> Result<Self, ConfigError> {
        let paginator = match Paginator::new(sections, indicators, config) {
            Ok(p) => p,
            Err(e) => {
                Tracer::new(&mut sink).config_error(&e);
                return Err(e);
            }
        };
        let mut host = SimHost::new(indicators, viewport_height);
        paginator.sync_indicators(&mut host);
        Ok(Self {
            now: HostTime(0),
            next_frame: HostTime(0) + FRAME_PERIOD,
            frame_index: 0,
            host,
            paginator,
            wheel: Debouncer::new(config.wheel_debounce),
            swipe: SwipeTracker::new(),
            requests: Vec::new(),
            completions: Vec::new(),
            sink,
        })
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> HostTime {
        self.now
    }

    /// Frames delivered so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frame_index
    }

    /// The simulated page.
    #[must_use]
    pub const fn host(&self) -> &SimHost {
        &self.host
    }

    /// Mutable access to the simulated page (resizes, user scrolling).
    pub fn host_mut(&mut self) -> &mut SimHost {
        &mut self.host
    }

    /// The paginator under test.
    #[must_use]
    pub const fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Every request that reached the paginator, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[RequestRecord] {
        &self.requests
    }

    /// Requests that started a transition.
    pub fn started(&self) -> impl Iterator<Item = &RequestRecord> + '_ {
        self.requests
            .iter()
            .filter(|r| matches!(r.request, Request::Started(_)))
    }

    /// Completed transitions as `(time, new current section)`.
    #[must_use]
    pub fn completions(&self) -> &[(HostTime, usize)] {
        &self.completions
    }

    /// The trace sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the session and returns its trace sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// A wheel event with vertical delta `dy`. Delivered once the debounce
    /// window has passed without another wheel event.
    pub fn wheel(&mut self, dy: f64) {
        let _ = self.wheel.call(self.now, Vec2::new(0.0, dy));
    }

    /// A `keydown` with the given DOM key name.
    pub fn key(&mut self, key: &str) -> Request {
        self.deliver(PageInput::Key(Key::from_dom(key)))
    }

    /// A click on indicator `index`.
    pub fn click_indicator(&mut self, index: usize) -> Request {
        self.deliver(PageInput::Indicator(index))
    }

    /// A `touchstart` at vertical position `y`.
    pub fn touch_start(&mut self, y: f64) {
        self.swipe.touch_start(Point::new(0.0, y));
    }

    /// A `touchend` at vertical position `y`.
    pub fn touch_end(&mut self, y: f64) -> Request {
        let input = self.swipe.touch_end(Point::new(0.0, y));
        self.deliver(input)
    }

    /// Moves virtual time forward by `by`, running every frame on the way.
    pub fn advance(&mut self, by: Duration) {
        let until = self.now.saturating_add(by);
        while self.next_frame <= until {
            self.now = self.next_frame;
            self.next_frame = self.next_frame.saturating_add(FRAME_PERIOD);
            self.frame();
        }
        self.now = until;
    }

    /// Advances frame by frame until no transition runs and no wheel value
    /// is pending, or `limit` has passed. Returns `true` if the page settled.
    pub fn settle(&mut self, limit: Duration) -> bool {
        let until = self.now.saturating_add(limit);
        while self.now < until {
            if !self.paginator.is_animating() && !self.wheel.is_pending() {
                return true;
            }
            self.advance(FRAME_PERIOD);
        }
        !self.paginator.is_animating() && !self.wheel.is_pending()
    }

    fn frame(&mut self) {
        self.frame_index += 1;
        if let Some(delta) = self.wheel.poll(self.now) {
            let _ = self.deliver(PageInput::Wheel { delta });
        }
        if let FrameOutcome::Completed { index, frames } =
            self.paginator.on_frame(&mut self.host, self.now)
        {
            self.completions.push((self.now, index));
            Tracer::new(&mut self.sink).transition_complete(&TransitionCompleteEvent {
                index,
                frames,
                at: self.now,
            });
        }
    }

    fn deliver(&mut self, input: PageInput) -> Request {
        let source = input.source();
        let mut tracer = Tracer::new(&mut self.sink);
        tracer.input(&InputEvent {
            source,
            at: self.now,
        });
        let request = self.paginator.handle_input(&mut self.host, self.now, input);
        tracer.request(&request, self.now);
        self.requests.push(RequestRecord {
            at: self.now,
            source,
            request,
        });
        request
    }
}
