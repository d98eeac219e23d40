//! Collapsible sidebar with a timed transition and a persisted flag.
//!
//! The collapsed/expanded target is written to storage immediately on each
//! toggle; the terminal class swap happens after the transition delay.
//! Storage failures only cost persistence across reloads.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::ElementHandle;
use crate::state::sidebar::{COLLAPSED_CLASS, COLLAPSING_CLASS, EXPANDING_CLASS, SidebarState};
use crate::util::scheduler::Scheduler;
use crate::util::storage::{KeyValueStore, read_flag, write_flag};

pub struct SidebarToggle {
    sidebar: Rc<dyn ElementHandle>,
    content: Rc<dyn ElementHandle>,
    store: Rc<dyn KeyValueStore>,
    scheduler: Rc<dyn Scheduler>,
    storage_key: String,
    transition_ms: u32,
}

impl SidebarToggle {
    pub fn new(
        sidebar: Rc<dyn ElementHandle>,
        content: Rc<dyn ElementHandle>,
        store: Rc<dyn KeyValueStore>,
        scheduler: Rc<dyn Scheduler>,
        config: &PageConfig,
    ) -> Self {
        Self {
            sidebar,
            content,
            store,
            scheduler,
            storage_key: config.sidebar_storage_key.clone(),
            transition_ms: config.sidebar_transition_ms,
        }
    }

    /// Current state, decoded from the sidebar's classes.
    pub fn state(&self) -> SidebarState {
        SidebarState::from_markers(
            self.sidebar.has_class(COLLAPSED_CLASS),
            self.sidebar.has_class(COLLAPSING_CLASS),
            self.sidebar.has_class(EXPANDING_CLASS),
        )
    }

    /// Start a transition toward the opposite state and persist the target.
    ///
    /// Returns the transient state entered.
    pub fn toggle(&self) -> SidebarState {
        let next = self.state().toggled();
        let collapse = next.target_collapsed();

        self.sidebar.remove_class(COLLAPSING_CLASS);
        self.sidebar.remove_class(EXPANDING_CLASS);
        if let Some(marker) = next.transient_class() {
            self.sidebar.add_class(marker);
        }
        if collapse {
            self.content.add_class(COLLAPSED_CLASS);
        } else {
            self.content.remove_class(COLLAPSED_CLASS);
        }

        let sidebar = Rc::clone(&self.sidebar);
        self.scheduler
            .schedule(self.transition_ms, Box::new(move || finish_transition(sidebar.as_ref(), next)));

        if let Err(err) = write_flag(self.store.as_ref(), &self.storage_key, collapse) {
            log::debug!("sidebar state not persisted: {err}");
        }
        next
    }

    /// Apply the persisted state without animating. Returns whether the
    /// sidebar was restored collapsed.
    pub fn restore_on_load(&self) -> bool {
        match read_flag(self.store.as_ref(), &self.storage_key) {
            Ok(true) => {
                self.sidebar.add_class(COLLAPSED_CLASS);
                self.content.add_class(COLLAPSED_CLASS);
                true
            }
            Ok(false) => false,
            Err(err) => {
                log::debug!("sidebar state not restored: {err}");
                false
            }
        }
    }
}

/// Swap the transient marker for the terminal state, unless a later toggle
/// has already replaced it.
fn finish_transition(sidebar: &dyn ElementHandle, pending: SidebarState) {
    let Some(marker) = pending.transient_class() else {
        return;
    };
    if !sidebar.has_class(marker) {
        return;
    }
    match pending.finalized() {
        SidebarState::Collapsed => sidebar.add_class(COLLAPSED_CLASS),
        SidebarState::Expanded => sidebar.remove_class(COLLAPSED_CLASS),
        SidebarState::Collapsing | SidebarState::Expanding => {}
    }
    sidebar.remove_class(marker);
}

/// Build a toggle against the live `.sidebar` and `.content` elements.
///
/// Returns `None` unless both exist.
#[cfg(feature = "hydrate")]
pub fn from_document(document: &web_sys::Document, config: &PageConfig) -> Option<SidebarToggle> {
    use crate::dom::browser::{DomElement, query};
    use crate::util::scheduler::TimeoutScheduler;
    use crate::util::storage::LocalStorage;

    let sidebar = query(document, config.sidebar_selector)?;
    let content = query(document, config.content_selector)?;
    Some(SidebarToggle::new(
        Rc::new(DomElement::new(sidebar)),
        Rc::new(DomElement::new(content)),
        Rc::new(LocalStorage),
        Rc::new(TimeoutScheduler),
        config,
    ))
}

/// Restore persisted state and delegate clicks on any toggle control.
#[cfg(feature = "hydrate")]
pub fn mount(document: &web_sys::Document, config: &PageConfig) {
    use wasm_bindgen::JsCast;

    use crate::dom::browser::listen;

    if let Some(toggle) = from_document(document, config) {
        toggle.restore_on_load();
    }

    let Some(body) = document.body() else {
        log::warn!("sidebar toggle delegation skipped: no <body>");
        return;
    };
    let doc = document.clone();
    let config = config.clone();
    listen(&body, "click", move |ev| {
        let trigger = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(config.sidebar_toggle_selector).ok().flatten());
        if trigger.is_none() {
            return;
        }
        ev.prevent_default();
        if let Some(toggle) = from_document(&doc, &config) {
            toggle.toggle();
        }
    });
    log::debug!("sidebar toggle mounted");
}
