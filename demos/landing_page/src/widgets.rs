// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM glue for the smaller page behaviors.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use pageflow_backend_web::{ConsoleSink, Interval, LocalStorage, Timeout, query, query_all};
use pageflow_core::config::LandingConfig;
use pageflow_core::time::Duration;
use pageflow_core::trace::Tracer;
use pageflow_core::widgets::carousel::Carousel;
use pageflow_core::widgets::popup::{LoginPopup, PopupClick};
use pageflow_core::widgets::reveal::ScrollReveal;
use pageflow_core::widgets::skins::{STANDARD_SKINS, SkinSwitcher};
use pageflow_core::widgets::tabs::TabSet;
use pageflow_core::widgets::tags::{ClickOrigin, TagChange, TagCollapse, tag_id};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent};

use crate::{listen, set_class, set_style};

// ---------------------------------------------------------------------------
// Scroll reveal
// ---------------------------------------------------------------------------

pub(crate) fn init_scroll_reveal(config: &LandingConfig) -> Result<(), JsValue> {
    let (Some(window), Some(qr), Some(logo), Some(first)) = (
        web_sys::window(),
        query("#qrFixed"),
        query("#nav-logo"),
        query(".first-screen"),
    ) else {
        return Ok(());
    };
    let height = first
        .dyn_ref::<HtmlElement>()
        .map_or(0.0, |el| f64::from(el.offset_height()));
    let mut reveal = ScrollReveal::new(height, config.reveal_ratio);

    let scroll_window = window.clone();
    listen(&window, "scroll", move |_: Event| {
        let y = scroll_window.scroll_y().unwrap_or(0.0);
        if let Some(state) = reveal.update(y) {
            set_class(&qr, "hidden", state.qr_hidden());
            set_style(&logo, "display", state.logo_display());
        }
    })
}

// ---------------------------------------------------------------------------
// Login popup
// ---------------------------------------------------------------------------

pub(crate) fn init_login_popup() -> Result<(), JsValue> {
    let (Some(window), Some(button), Some(popup), Some(close)) = (
        web_sys::window(),
        query("#loginBtn"),
        query("#loginPopup"),
        query("#closePopup"),
    ) else {
        return Ok(());
    };
    let state = Rc::new(RefCell::new(LoginPopup::new()));

    let on_click = |click: PopupClick| {
        let state = Rc::clone(&state);
        let popup = popup.clone();
        move |_: Event| {
            if let Some(display) = state.borrow_mut().click(click) {
                set_style(&popup, "display", display);
            }
        }
    };
    listen(&button, "click", on_click(PopupClick::Open))?;
    listen(&close, "click", on_click(PopupClick::Close))?;

    let backdrop = JsValue::from(popup.clone());
    listen(&window, "click", move |e: Event| {
        let on_backdrop = e.target().is_some_and(|t| JsValue::from(t) == backdrop);
        if let Some(display) = state.borrow_mut().click(PopupClick::Page { on_backdrop }) {
            set_style(&popup, "display", display);
        }
    })
}

// ---------------------------------------------------------------------------
// News tabs
// ---------------------------------------------------------------------------

pub(crate) fn init_news_tabs() -> Result<(), JsValue> {
    let buttons = Rc::new(query_all(".news-tabs button"));
    if buttons.is_empty() {
        return Ok(());
    }
    let panels = Rc::new(query_all(".news-content"));
    let tabs = Rc::new(RefCell::new(TabSet::new(
        buttons.iter().map(|b| b.get_attribute("data-target")),
        panels.iter().map(|p| Some(p.id()).filter(|id| !id.is_empty())),
    )));

    for (index, button) in buttons.iter().enumerate() {
        let buttons = Rc::clone(&buttons);
        let panels = Rc::clone(&panels);
        let tabs = Rc::clone(&tabs);
        listen(button, "click", move |_: Event| {
            let mut tabs = tabs.borrow_mut();
            let Some(selection) = tabs.select(index) else {
                return;
            };
            for b in buttons.iter() {
                set_class(b, "active", false);
            }
            for p in panels.iter() {
                set_style(p, "display", "none");
            }
            set_class(&buttons[index], "active", true);

            let shown = match (selection.panel, selection.target) {
                (Some(panel), _) => panels.get(panel).cloned(),
                (None, Some(id)) => web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(id)),
                (None, None) => None,
            };
            if let Some(el) = shown {
                set_style(&el, "display", "block");
            }
        })?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

pub(crate) fn init_carousel(config: &LandingConfig) {
    let images = query_all(".carousel img");
    let Some(mut carousel) = Carousel::new(images.len()) else {
        return;
    };
    Interval::new(config.carousel_interval, move || {
        let step = carousel.advance();
        set_class(&images[step.previous], "active", false);
        set_class(&images[step.next], "active", true);
    })
    .forget();
}

// ---------------------------------------------------------------------------
// Skin switcher
// ---------------------------------------------------------------------------

struct SkinGallery {
    switcher: RefCell<SkinSwitcher>,
    main_video: Element,
    skin_video: Option<Element>,
    title: Element,
    description: Element,
    thumbs: Vec<Element>,
    screen: Option<Element>,
    fade: Duration,
}

impl SkinGallery {
    fn faded(&self) -> [&Element; 3] {
        [&self.main_video, &self.title, &self.description]
    }

    fn select(self: &Rc<Self>, index: usize) {
        if self.switcher.borrow().request(index).is_none() {
            return;
        }
        for el in self.faded() {
            set_class(el, "fade", true);
        }
        let thumb_src = self.thumbs[index]
            .dyn_ref::<HtmlImageElement>()
            .map(HtmlImageElement::src);
        let gallery = Rc::clone(self);
        Timeout::new(self.fade, move || gallery.commit(index, thumb_src.as_deref())).forget();
    }

    fn commit(&self, index: usize, thumb_src: Option<&str>) {
        let Some(skin) = self.switcher.borrow_mut().commit(index) else {
            return;
        };
        let _ = self.main_video.set_attribute("src", skin.video);
        if let Some(video) = &self.skin_video {
            let _ = video.set_attribute("src", skin.video);
        }
        self.title.set_text_content(Some(skin.title));
        self.description.set_text_content(Some(skin.description));

        if let (Some(screen), Some(src)) = (&self.screen, thumb_src) {
            set_style(screen, "background-image", &background_image(src));
        }
        for (i, thumb) in self.thumbs.iter().enumerate() {
            set_class(thumb, "active", i == index);
        }
        for el in self.faded() {
            set_class(el, "fade", false);
        }
    }
}

/// CSS `background-image` value showing the image at `src`.
fn background_image(src: &str) -> String {
    format!("url('{src}')")
}

pub(crate) fn init_skin_switcher(config: &LandingConfig) -> Result<(), JsValue> {
    let (Some(main_video), Some(title), Some(description)) =
        (query("#main-video"), query("#skin-title"), query("#skin-desc"))
    else {
        return Ok(());
    };
    let thumbs = query_all(".skin-thumbs img");
    let switcher = SkinSwitcher::new(STANDARD_SKINS, thumbs.len());
    let bound = switcher.bound();
    if bound == 0 {
        return Ok(());
    }
    let gallery = Rc::new(SkinGallery {
        switcher: RefCell::new(switcher),
        main_video,
        skin_video: query("#skin-video"),
        title,
        description,
        thumbs,
        screen: query(".second-screen"),
        fade: config.skin_fade,
    });

    for (index, thumb) in gallery.thumbs.iter().take(bound).enumerate() {
        let gallery = Rc::clone(&gallery);
        listen(thumb, "click", move |_: Event| gallery.select(index))?;
    }
    gallery.select(0);
    Ok(())
}

// ---------------------------------------------------------------------------
// Side tags
// ---------------------------------------------------------------------------

struct SideTags {
    collapse: TagCollapse,
    store: LocalStorage,
    sink: ConsoleSink,
}

fn apply(tag: &Element, change: TagChange) {
    set_class(tag, "collapsed", change.collapsed);
    let _ = tag.set_attribute("aria-expanded", change.aria_expanded());
}

pub(crate) fn init_side_tags(config: &LandingConfig) -> Result<(), JsValue> {
    let tags = Rc::new(query_all(".side-tag"));
    if tags.is_empty() {
        return Ok(());
    }

    let mut ids = Vec::with_capacity(tags.len());
    for (index, tag) in tags.iter().enumerate() {
        let id = tag_id(Some(tag.id().as_str()), index);
        tag.set_id(&id);
        tag.set_attribute("role", "button")?;
        tag.set_attribute("tabindex", "0")?;
        ids.push(id);
    }

    let store = LocalStorage::open();
    let mut sink = ConsoleSink::new();
    let collapse = TagCollapse::restore(
        &store,
        config.tag_storage_key,
        ids,
        &mut Tracer::new(&mut sink),
    );
    for change in collapse.states() {
        apply(&tags[change.index], change);
    }
    let state = Rc::new(RefCell::new(SideTags {
        collapse,
        store,
        sink,
    }));

    for (index, tag) in tags.iter().enumerate() {
        {
            let state = Rc::clone(&state);
            let tags = Rc::clone(&tags);
            listen(tag, "click", move |e: Event| {
                let target_tag = e
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .map(|el| el.tag_name())
                    .unwrap_or_default();
                let origin = ClickOrigin::classify(&target_tag, e.default_prevented());
                let mut guard = state.borrow_mut();
                let s = &mut *guard;
                let mut tracer = Tracer::new(&mut s.sink);
                if let Some(change) = s.collapse.click(index, origin, &mut s.store, &mut tracer) {
                    apply(&tags[index], change);
                }
            })?;
        }

        let state = Rc::clone(&state);
        let tags = Rc::clone(&tags);
        let own = JsValue::from(tag.clone());
        listen(tag, "keydown", move |e: Event| {
            // Only when the tag itself has focus, not a link inside it.
            if !e.target().is_some_and(|t| JsValue::from(t) == own) {
                return;
            }
            let Some(key) = e.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            let mut guard = state.borrow_mut();
            let s = &mut *guard;
            let mut tracer = Tracer::new(&mut s.sink);
            if let Some(change) = s.collapse.key(index, &key, &mut s.store, &mut tracer) {
                // Keep Space from scrolling the page.
                e.prevent_default();
                apply(&tags[index], change);
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_uses_the_thumbnail_source() {
        assert_eq!(
            background_image("https://cdn.example/skins/ember.jpg"),
            "url('https://cdn.example/skins/ember.jpg')"
        );
    }
}
