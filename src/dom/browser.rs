//! `web-sys` adapters for the DOM capability traits, plus listener helpers.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlButtonElement, HtmlElement, HtmlFormElement};

use super::{ElementHandle, FormHandle, Notifier};
use crate::config::ModalIds;
use crate::net::types::RegistrationForm;

/// Look up `#id`, logging when it is absent.
pub fn element_by_id(document: &Document, id: &str) -> Option<Element> {
    let found = document.get_element_by_id(id);
    if found.is_none() {
        log::debug!("element #{id} not found");
    }
    found
}

/// First element matching `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Every element matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<T, F>(target: &T, event: &str, handler: F)
where
    T: AsRef<EventTarget>,
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(err) = target
        .as_ref()
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
    {
        log::warn!("failed to attach {event} listener: {err:?}");
        return;
    }
    cb.forget();
}

pub struct DomElement(Element);

impl DomElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl ElementHandle for DomElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_class_name(&self, class_name: &str) {
        self.0.set_class_name(class_name);
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            let _ = self.0.set_attribute("disabled", "");
        } else {
            let _ = self.0.remove_attribute("disabled");
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(el) = self.0.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }
}

/// The registration form. Field values are read by id at call time.
pub struct DomForm {
    document: Document,
    form: HtmlFormElement,
    ids: ModalIds,
}

impl DomForm {
    pub fn new(document: &Document, form: Element, ids: ModalIds) -> Option<Self> {
        let form = form.dyn_into::<HtmlFormElement>().ok()?;
        Some(Self { document: document.clone(), form, ids })
    }

    fn field(&self, id: &str) -> String {
        let Some(el) = self.document.get_element_by_id(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
            return input.value();
        }
        if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
            return select.value();
        }
        el.get_attribute("value").unwrap_or_default()
    }
}

impl FormHandle for DomForm {
    fn values(&self) -> RegistrationForm {
        RegistrationForm {
            full_name: self.field(self.ids.full_name),
            email: self.field(self.ids.email),
            phone: self.field(self.ids.phone),
            password: self.field(self.ids.password),
            role: self.field(self.ids.role),
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNotifier;

impl Notifier for WindowNotifier {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
