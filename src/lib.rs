//! # educare-web
//!
//! WASM behaviour layer for the Fairview/Educare landing page: smooth
//! in-page scrolling, a scroll-reactive header, card reveal on scroll, a
//! collapsible sidebar with a persisted flag, login, and the registration
//! modal.
//!
//! The page's HTML is served statically; this crate attaches to it. Pure
//! logic lives in `state` and the `components` controllers, which are built
//! against the capability traits in `dom`, `net::http`, and `util`. Browser
//! implementations and the entry point compile only with `hydrate`.

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// Module entry point: install logging and attach every component once the
/// document has been parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; page behaviour not attached");
        return;
    };
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::browser::listen(&document, "DOMContentLoaded", move |_| mount_all(&doc));
    } else {
        mount_all(&document);
    }
}

#[cfg(feature = "hydrate")]
fn mount_all(document: &web_sys::Document) {
    let config = config::PageConfig::from_document();
    components::scroll_effects::mount(document, &config);
    if components::registration_modal::mount(document, &config).is_none() {
        log::warn!("registration modal not mounted: required elements missing");
    }
    components::sidebar::mount(document, &config);
    log::info!("page behaviour attached");
}

/// Toggle the sidebar. Exposed for inline `onclick` handlers.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = toggleSidebar)]
pub fn toggle_sidebar() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(toggle) = components::sidebar::from_document(&document, &config::PageConfig::from_document()) {
        toggle.toggle();
    }
}

/// Re-apply the persisted sidebar state. Exposed for inline handlers.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = initSidebarState)]
pub fn init_sidebar_state() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(toggle) = components::sidebar::from_document(&document, &config::PageConfig::from_document()) {
        toggle.restore_on_load();
    }
}

/// Log in with an email and password via the token endpoint.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub async fn login(email: String, password: String) {
    use std::rc::Rc;

    let flow = components::login::LoginFlow::new(
        Rc::new(net::browser::GlooHttpClient),
        Rc::new(dom::browser::WindowNotifier),
        &config::PageConfig::from_document(),
    );
    let _ = flow.login(&email, &password).await;
}
