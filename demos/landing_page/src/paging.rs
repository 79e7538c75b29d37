// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-page section scrolling.
//!
//! One [`Paginator`] is shared by the wheel, keyboard, indicator and touch
//! listeners and by the frame loop. Listeners borrow it only for the length
//! of one request; an accepted request starts the [`RafLoop`], which stops
//! itself on the frame the transition completes.

use alloc::rc::Rc;
use alloc::string::ToString as _;
use core::cell::RefCell;

use kurbo::{Point, Vec2};
use pageflow_backend_web::{
    ConsoleSink, LoopControl, RafLoop, WindowHost, debounce, now, query_all,
};
use pageflow_core::config::LandingConfig;
use pageflow_core::input::{Key, PageInput, SwipeTracker};
use pageflow_core::paginator::{FrameOutcome, Paginator};
use pageflow_core::time::FrameTick;
use pageflow_core::trace::{InputEvent, TransitionCompleteEvent, Tracer};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Event, KeyboardEvent, Touch, TouchEvent, WheelEvent};

use crate::listen;

struct Paging {
    paginator: Paginator,
    host: WindowHost,
    swipe: SwipeTracker,
    sink: ConsoleSink,
}

type Shared = Rc<RefCell<Paging>>;

pub(crate) fn init_full_page_scroll(config: &LandingConfig) -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let sections = query_all(".screen");
    let dots = query_all(".dot");

    let mut sink = ConsoleSink::new();
    let paginator = match Paginator::new(sections.len(), dots.len(), config.paging) {
        Ok(p) => p,
        Err(err) => {
            Tracer::new(&mut sink).config_error(&err);
            return Err(JsValue::from_str(&err.to_string()));
        }
    };
    if paginator.is_inert() {
        return Ok(());
    }

    let mut host = WindowHost::new(window.clone(), dots.clone());
    paginator.sync_indicators(&mut host);
    let state: Shared = Rc::new(RefCell::new(Paging {
        paginator,
        host,
        swipe: SwipeTracker::new(),
        sink,
    }));

    let frame_state = Rc::clone(&state);
    let raf = Rc::new(RafLoop::new(move |tick: FrameTick| {
        let mut guard = frame_state.borrow_mut();
        let s = &mut *guard;
        match s.paginator.on_frame(&mut s.host, tick.now) {
            FrameOutcome::Animating { .. } => LoopControl::Continue,
            FrameOutcome::Completed { index, frames } => {
                Tracer::new(&mut s.sink).transition_complete(&TransitionCompleteEvent {
                    index,
                    frames,
                    at: tick.now,
                });
                LoopControl::Stop
            }
            FrameOutcome::Idle => LoopControl::Stop,
        }
    }));

    // Wheel: only the last event of a burst counts.
    let wheel = {
        let state = Rc::clone(&state);
        let raf = Rc::clone(&raf);
        debounce(
            move |delta: Vec2| deliver(&state, &raf, PageInput::Wheel { delta }),
            config.paging.wheel_debounce,
        )
    };
    listen(&window, "wheel", move |e: Event| {
        if let Some(e) = e.dyn_ref::<WheelEvent>() {
            wheel.call(Vec2::new(e.delta_x(), e.delta_y()));
        }
    })?;

    {
        let state = Rc::clone(&state);
        let raf = Rc::clone(&raf);
        listen(&window, "keydown", move |e: Event| {
            let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = Key::from_dom(&e.key());
            if key.direction().is_some() {
                deliver(&state, &raf, PageInput::Key(key));
            }
        })?;
    }

    for (index, dot) in dots.iter().enumerate() {
        let state = Rc::clone(&state);
        let raf = Rc::clone(&raf);
        listen(dot, "click", move |_: Event| {
            deliver(&state, &raf, PageInput::Indicator(index));
        })?;
    }

    {
        let state = Rc::clone(&state);
        listen(&window, "touchstart", move |e: Event| {
            let Some(touch) = e.dyn_ref::<TouchEvent>().and_then(|e| e.touches().get(0)) else {
                return;
            };
            state.borrow_mut().swipe.touch_start(point(&touch));
        })?;
    }
    listen(&window, "touchend", move |e: Event| {
        let Some(touch) = e
            .dyn_ref::<TouchEvent>()
            .and_then(|e| e.changed_touches().get(0))
        else {
            return;
        };
        let input = state.borrow().swipe.touch_end(point(&touch));
        deliver(&state, &raf, input);
    })?;

    Ok(())
}

fn deliver(state: &Shared, raf: &RafLoop, input: PageInput) {
    let at = now();
    let mut guard = state.borrow_mut();
    let s = &mut *guard;
    let mut tracer = Tracer::new(&mut s.sink);
    tracer.input(&InputEvent {
        source: input.source(),
        at,
    });
    let request = s.paginator.handle_input(&mut s.host, at, input);
    tracer.request(&request, at);
    if request.started().is_some() {
        raf.start();
    }
}

fn point(touch: &Touch) -> Point {
    Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()))
}
