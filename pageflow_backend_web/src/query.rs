// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector helpers.
//!
//! Lookups never fail loudly: a missing window, document or element, and an
//! invalid selector all come back as "nothing found", which is how every
//! behavior expresses "not on this page".

use alloc::vec::Vec;

use wasm_bindgen::JsCast as _;
use web_sys::{Element, NodeList};

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// First element in the document matching `selector`.
#[must_use]
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements in the document matching `selector`, in document order.
#[must_use]
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

/// All descendants of `root` matching `selector`, in document order.
#[must_use]
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
