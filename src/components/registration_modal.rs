//! Registration modal: visibility, form reset, and async account creation.
//!
//! DESIGN
//! ======
//! The controller is `Clone` and every clone shares the same handles and
//! state, so a clone can be moved into the deferred auto-close task. The
//! submit control is restored by a drop guard, which covers the success,
//! rejection, and fault paths as well as a dropped future.

#[cfg(test)]
#[path = "registration_modal_test.rs"]
mod registration_modal_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::{ElementHandle, FormHandle};
use crate::error::RegistrationError;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::RegistrationForm;
use crate::state::message::{MessageBanner, SUCCESS_MESSAGE};
use crate::state::submission::{SUBMIT_LABEL, SubmissionState};
use crate::util::scheduler::Scheduler;

pub const ACTIVE_CLASS: &str = "active";

/// Element handles the modal controller operates on.
#[derive(Clone)]
pub struct ModalElements {
    pub modal: Rc<dyn ElementHandle>,
    pub form: Rc<dyn FormHandle>,
    pub submit_button: Rc<dyn ElementHandle>,
    pub message: Rc<dyn ElementHandle>,
}

#[derive(Clone)]
pub struct RegistrationModal {
    elements: ModalElements,
    http: Rc<dyn HttpClient>,
    scheduler: Rc<dyn Scheduler>,
    register_url: Rc<str>,
    close_delay_ms: u32,
    state: Rc<Cell<SubmissionState>>,
    banner: Rc<RefCell<MessageBanner>>,
}

impl RegistrationModal {
    pub fn new(
        elements: ModalElements,
        http: Rc<dyn HttpClient>,
        scheduler: Rc<dyn Scheduler>,
        config: &PageConfig,
    ) -> Self {
        Self {
            elements,
            http,
            scheduler,
            register_url: config.register_url().into(),
            close_delay_ms: config.success_close_delay_ms,
            state: Rc::new(Cell::new(SubmissionState::Idle)),
            banner: Rc::new(RefCell::new(MessageBanner::hidden())),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn banner(&self) -> MessageBanner {
        self.banner.borrow().clone()
    }

    pub fn is_open(&self) -> bool {
        self.elements.modal.has_class(ACTIVE_CLASS)
    }

    pub fn open(&self) {
        self.elements.modal.add_class(ACTIVE_CLASS);
    }

    pub fn close(&self) {
        self.elements.modal.remove_class(ACTIVE_CLASS);
        self.reset_form();
    }

    /// Clear every field and hide the message banner.
    pub fn reset_form(&self) {
        self.elements.form.reset();
        self.show_message(MessageBanner::hidden());
        self.state.set(self.state.get().after_reset());
    }

    /// Clicks on the backdrop itself close the modal; clicks that land on
    /// the modal's content do not.
    pub fn handle_click(&self, target_is_backdrop: bool) {
        if target_is_backdrop {
            self.close();
        }
    }

    /// Submit one registration attempt.
    ///
    /// On success the modal closes itself after the configured delay.
    ///
    /// # Errors
    ///
    /// Returns the attempt's [`RegistrationError`] after it has been shown in
    /// the message banner. [`RegistrationError::InFlight`] is returned
    /// without touching the UI when an attempt is already outstanding.
    pub async fn submit(&self, form: RegistrationForm) -> Result<(), RegistrationError> {
        if self.state.get().in_flight() {
            log::warn!("registration submit ignored: attempt already in flight");
            return Err(RegistrationError::InFlight);
        }

        let _restore = SubmitControlGuard { modal: self };
        self.state.set(SubmissionState::Submitting);
        self.apply_submit_control();
        self.show_message(MessageBanner::hidden());
        log::info!("submitting registration");

        let outcome = api::register(self.http.as_ref(), &self.register_url, &form).await;
        self.state.set(SubmissionState::settle(outcome.is_ok()));
        match &outcome {
            Ok(()) => {
                log::info!("registration succeeded");
                self.show_message(MessageBanner::success(SUCCESS_MESSAGE));
                let modal = self.clone();
                self.scheduler
                    .schedule(self.close_delay_ms, Box::new(move || modal.close()));
            }
            Err(err @ RegistrationError::ServerRejected { .. }) => {
                log::warn!("registration rejected: {err}");
                self.show_message(MessageBanner::error(err.user_message()));
            }
            Err(err) => {
                log::error!("registration request failed: {err}");
                self.show_message(MessageBanner::error(err.user_message()));
            }
        }
        outcome
    }

    fn apply_submit_control(&self) {
        let state = self.state.get();
        self.elements.submit_button.set_disabled(state.submit_disabled());
        self.elements.submit_button.set_text(state.submit_label());
    }

    fn show_message(&self, banner: MessageBanner) {
        self.elements.message.set_text(banner.text());
        self.elements.message.set_class_name(&banner.class_name());
        *self.banner.borrow_mut() = banner;
    }
}

/// Re-enables the submit control exactly once when an attempt ends.
struct SubmitControlGuard<'a> {
    modal: &'a RegistrationModal,
}

impl Drop for SubmitControlGuard<'_> {
    fn drop(&mut self) {
        if self.modal.state.get().in_flight() {
            self.modal.state.set(SubmissionState::Failed);
        }
        self.modal.elements.submit_button.set_disabled(false);
        self.modal.elements.submit_button.set_text(SUBMIT_LABEL);
    }
}

/// Attach the modal to the live document.
///
/// Returns `None` (and wires nothing) when any required element is missing.
#[cfg(feature = "hydrate")]
pub fn mount(document: &web_sys::Document, config: &PageConfig) -> Option<RegistrationModal> {
    use crate::dom::browser::{DomElement, DomForm, element_by_id, listen};
    use crate::net::browser::GlooHttpClient;
    use crate::util::scheduler::TimeoutScheduler;

    let ids = &config.modal_ids;
    let open_button = element_by_id(document, ids.open_button)?;
    let modal_el = element_by_id(document, ids.modal)?;
    let close_button = element_by_id(document, ids.close_button)?;
    let form_el = element_by_id(document, ids.form)?;
    let submit_el = element_by_id(document, ids.submit_button)?;
    let message_el = element_by_id(document, ids.message)?;
    let form = DomForm::new(document, form_el.clone(), *ids)?;

    let elements = ModalElements {
        modal: Rc::new(DomElement::new(modal_el.clone())),
        form: Rc::new(form),
        submit_button: Rc::new(DomElement::new(submit_el)),
        message: Rc::new(DomElement::new(message_el)),
    };
    let controller = RegistrationModal::new(elements, Rc::new(GlooHttpClient), Rc::new(TimeoutScheduler), config);

    let modal = controller.clone();
    listen(&open_button, "click", move |ev| {
        ev.prevent_default();
        modal.open();
    });

    let modal = controller.clone();
    listen(&close_button, "click", move |_| modal.close());

    let modal = controller.clone();
    let backdrop: web_sys::EventTarget = modal_el.clone().into();
    listen(&modal_el, "click", move |ev| {
        modal.handle_click(ev.target().is_some_and(|t| t == backdrop));
    });

    let modal = controller.clone();
    let form_handle = controller.elements.form.clone();
    listen(&form_el, "submit", move |ev| {
        ev.prevent_default();
        let modal = modal.clone();
        let values = form_handle.values();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = modal.submit(values).await;
        });
    });

    log::debug!("registration modal mounted");
    Some(controller)
}
