// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout` / `setInterval` wrappers.
//!
//! Each handle owns its JS closure and clears the browser timer when dropped.
//! Call `forget` to hand a timer over to the page for its whole lifetime.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use pageflow_core::debounce::Debouncer;
use pageflow_core::time::Duration;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

fn millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// A one-shot `setTimeout`.
pub struct Timeout {
    id: i32,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Timeout {
    /// Schedules `f` to run once after `delay`.
    pub fn new(delay: Duration, f: impl FnOnce() + 'static) -> Self {
        let closure: Closure<dyn FnMut()> = Closure::once(f);
        let id = set_timeout(closure.as_ref().unchecked_ref(), millis(delay));
        Self {
            id,
            closure: Some(closure),
        }
    }

    /// Lets the timeout fire even though the handle goes away.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if self.closure.is_some() {
            clear_timeout(self.id);
        }
    }
}

impl core::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeout").field("id", &self.id).finish()
    }
}

/// A repeating `setInterval`.
pub struct Interval {
    id: i32,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Interval {
    /// Runs `f` every `period` until the handle is dropped.
    pub fn new(period: Duration, f: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = set_interval(closure.as_ref().unchecked_ref(), millis(period));
        Self {
            id,
            closure: Some(closure),
        }
    }

    /// Keeps the interval running for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if self.closure.is_some() {
            clear_interval(self.id);
        }
    }
}

impl core::fmt::Debug for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interval").field("id", &self.id).finish()
    }
}

/// A trailing-edge debounced action backed by `setTimeout`.
///
/// Every [`call`](Self::call) clears the pending timeout and schedules a new
/// one; when a timeout finally fires, the last value passed in is handed to
/// the action. Clones share the same timer.
pub struct Debounced<T> {
    inner: Rc<DebounceInner<T>>,
}

struct DebounceInner<T> {
    debouncer: RefCell<Debouncer<T>>,
    action: RefCell<Box<dyn FnMut(T)>>,
    /// Fires the pending value; built on the first call.
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
    timer: Cell<Option<i32>>,
}

/// Wraps `action` so that bursts of calls collapse into one, `delay` after
/// the last call in the burst.
pub fn debounce<T: 'static>(action: impl FnMut(T) + 'static, delay: Duration) -> Debounced<T> {
    Debounced {
        inner: Rc::new(DebounceInner {
            debouncer: RefCell::new(Debouncer::new(delay)),
            action: RefCell::new(Box::new(action)),
            closure: RefCell::new(None),
            timer: Cell::new(None),
        }),
    }
}

impl<T: 'static> Debounced<T> {
    /// Records `value` and restarts the delay.
    pub fn call(&self, value: T) {
        let inner = &self.inner;
        if let Some(id) = inner.timer.take() {
            clear_timeout(id);
        }
        let delay = inner.debouncer.borrow().delay();
        let _ = inner.debouncer.borrow_mut().call(crate::now(), value);

        let mut slot = inner.closure.borrow_mut();
        let closure = slot.get_or_insert_with(|| {
            let weak: Weak<DebounceInner<T>> = Rc::downgrade(inner);
            Closure::wrap(Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                inner.timer.set(None);
                let value = inner.debouncer.borrow_mut().flush();
                if let Some(value) = value {
                    inner.action.borrow_mut()(value);
                }
            }) as Box<dyn FnMut()>)
        });
        let id = set_timeout(closure.as_ref().unchecked_ref(), millis(delay));
        inner.timer.set(Some(id));
    }

    /// Drops the pending value without running the action.
    pub fn cancel(&self) {
        if let Some(id) = self.inner.timer.take() {
            clear_timeout(id);
        }
        self.inner.debouncer.borrow_mut().cancel();
    }

    /// Returns `true` while a value is waiting for its delay to pass.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.debouncer.borrow().is_pending()
    }
}

impl<T> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> core::fmt::Debug for Debounced<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.inner.debouncer.borrow().delay())
            .field("timer", &self.inner.timer.get())
            .finish_non_exhaustive()
    }
}
