// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Landing page behaviors for a full-page scrolling game site.
//!
//! Wires every `pageflow_core` behavior to the page once the DOM is ready:
//! scroll reveal of the nav logo, login popup, news tabs, image carousel,
//! full-page section scrolling, skin gallery, and collapsible side tags.
//! Each behavior looks up its own elements and quietly does nothing when
//! they are not on the page.
//!
//! Build with: `wasm-pack build --target web demos/landing_page`
//! Then load the generated module from the landing page's `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod paging;
mod widgets;

use alloc::boxed::Box;

use pageflow_core::config::LandingConfig;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, HtmlElement};

/// Entry point: runs [`init`] now, or on `DOMContentLoaded` if the document
/// is still loading.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };
    if document.ready_state() != "loading" {
        return init(&LandingConfig::standard());
    }
    let on_ready = Closure::once(move |_: Event| {
        if let Err(err) = init(&LandingConfig::standard()) {
            web_sys::console::error_1(&err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

/// Binds every behavior to the current document.
///
/// A behavior that fails to bind does not stop the others. The first error is
/// returned once all of them have run; later ones go to the console.
pub fn init(config: &LandingConfig) -> Result<(), JsValue> {
    // Behaviors share no state, so binding order does not matter.
    first_error(
        [
            widgets::init_scroll_reveal(config),
            widgets::init_login_popup(),
            widgets::init_news_tabs(),
            {
                widgets::init_carousel(config);
                Ok(())
            },
            paging::init_full_page_scroll(config),
            widgets::init_skin_switcher(config),
            widgets::init_side_tags(config),
        ],
        |err| web_sys::console::error_1(&err),
    )
}

/// Drains `results`, returning the first error and passing every later one to
/// `report`.
fn first_error<E>(
    results: impl IntoIterator<Item = Result<(), E>>,
    mut report: impl FnMut(E),
) -> Result<(), E> {
    let mut first = None;
    for err in results.into_iter().filter_map(Result::err) {
        if first.is_none() {
            first = Some(err);
        } else {
            report(err);
        }
    }
    first.map_or(Ok(()), Err)
}

/// Adds an event listener that lives as long as the page.
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn a_failing_behavior_does_not_stop_the_rest() {
        let ran = Cell::new(0);
        let results = [Ok(()), Err("dots"), Ok(()), Ok(())].into_iter().inspect(|_| {
            ran.set(ran.get() + 1);
        });
        let mut reported = Vec::new();
        assert_eq!(first_error(results, |e| reported.push(e)), Err("dots"));
        assert_eq!(ran.get(), 4, "every behavior after the failure still bound");
        assert!(reported.is_empty());
    }

    #[test]
    fn later_errors_are_reported_not_returned() {
        let mut reported = Vec::new();
        let result = first_error([Err(1), Ok(()), Err(2), Err(3)], |e| reported.push(e));
        assert_eq!(result, Err(1));
        assert_eq!(reported, [2, 3]);
    }

    #[test]
    fn all_bound_is_ok() {
        let mut reported = Vec::new();
        assert_eq!(first_error([Ok::<(), u8>(()); 7], |e| reported.push(e)), Ok(()));
        assert!(reported.is_empty());
    }
}
