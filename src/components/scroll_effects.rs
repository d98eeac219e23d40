//! Smooth in-page anchors, a scroll-reactive header, and card reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! These effects are independent passive listeners. The pure pieces
//! (fragment parsing, header padding choice, reveal styling) are separated
//! from the `web-sys` wiring in `mount`.

#[cfg(test)]
#[path = "scroll_effects_test.rs"]
mod scroll_effects_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::ElementHandle;

const HIDDEN_OPACITY: &str = "0";
const HIDDEN_TRANSFORM: &str = "translateY(30px)";
const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
const REVEALED_OPACITY: &str = "1";
const REVEALED_TRANSFORM: &str = "translateY(0)";

/// Element id named by an in-page fragment link (`#about` -> `about`).
///
/// A bare `#` names nothing; the click is still intercepted but no scroll
/// happens.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Switches header padding between a compact and a default value based on
/// the vertical scroll offset.
pub struct HeaderEffect {
    header: Option<Rc<dyn ElementHandle>>,
    threshold: f64,
    compact: &'static str,
    default: &'static str,
    // Recorded on every scroll; nothing reads it for behaviour yet.
    last_offset: Cell<f64>,
}

impl HeaderEffect {
    pub fn new(header: Option<Rc<dyn ElementHandle>>, config: &PageConfig) -> Self {
        Self {
            header,
            threshold: config.header_compact_threshold,
            compact: config.header_padding_compact,
            default: config.header_padding_default,
            last_offset: Cell::new(0.0),
        }
    }

    pub fn padding_for(&self, offset: f64) -> &'static str {
        if offset > self.threshold { self.compact } else { self.default }
    }

    pub fn on_scroll(&self, offset: f64) {
        if let Some(header) = &self.header {
            header.set_style("padding", self.padding_for(offset));
        }
        self.last_offset.set(offset);
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset.get()
    }
}

/// Put a card in its pre-reveal state.
pub fn prepare_reveal(card: &dyn ElementHandle) {
    card.set_style("opacity", HIDDEN_OPACITY);
    card.set_style("transform", HIDDEN_TRANSFORM);
    card.set_style("transition", REVEAL_TRANSITION);
}

/// Reveal a card when the observer reports it intersecting. Leaving the
/// viewport never hides it again. Returns whether the card was revealed.
pub fn reveal_on_intersect(card: &dyn ElementHandle, is_intersecting: bool) -> bool {
    if !is_intersecting {
        return false;
    }
    card.set_style("opacity", REVEALED_OPACITY);
    card.set_style("transform", REVEALED_TRANSFORM);
    true
}

/// Wire all three effects against the live document.
#[cfg(feature = "hydrate")]
pub fn mount(document: &web_sys::Document, config: &PageConfig) {
    mount_anchor_scrolling(document);
    mount_header_effect(document, config);
    mount_reveal(document, config);
}

#[cfg(feature = "hydrate")]
fn mount_anchor_scrolling(document: &web_sys::Document) {
    use crate::dom::browser::{listen, query_all};

    let anchors = query_all(document, "a[href^=\"#\"]");
    let count = anchors.len();
    for anchor in anchors {
        let doc = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = fragment_id(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            opts.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
    log::debug!("smooth scrolling attached to {count} anchors");
}

#[cfg(feature = "hydrate")]
fn mount_header_effect(document: &web_sys::Document, config: &PageConfig) {
    use crate::dom::browser::{DomElement, listen, query};

    let Some(window) = web_sys::window() else {
        return;
    };
    let header = query(document, config.header_selector).map(|el| Rc::new(DomElement::new(el)) as Rc<dyn ElementHandle>);
    if header.is_none() {
        log::debug!("header effect: no <{}> element", config.header_selector);
    }
    let effect = HeaderEffect::new(header, config);
    let win = window.clone();
    listen(&window, "scroll", move |_| {
        effect.on_scroll(win.scroll_y().unwrap_or(0.0));
    });
}

#[cfg(feature = "hydrate")]
fn mount_reveal(document: &web_sys::Document, config: &PageConfig) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::dom::browser::{DomElement, query_all};

    let cards = query_all(document, config.reveal_selector);
    if cards.is_empty() {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if reveal_on_intersect(&DomElement::new(target.clone()), entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(config.reveal_threshold));
    init.set_root_margin(config.reveal_root_margin);
    let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("reveal effect disabled: {err:?}");
            return;
        }
    };
    callback.forget();

    for card in &cards {
        prepare_reveal(&DomElement::new(card.clone()));
        observer.observe(card);
    }
    log::debug!("reveal effect observing {} cards", cards.len());
}
