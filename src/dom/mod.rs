//! DOM capabilities the controllers are built against.
//!
//! DESIGN
//! ======
//! Controllers own trait objects rather than `web_sys` nodes so they can be
//! constructed against fakes in host tests. `browser` adapts real elements
//! and is only compiled with `hydrate`.

#[cfg(feature = "hydrate")]
pub mod browser;

use crate::net::types::RegistrationForm;

/// The subset of element behaviour the page scripts rely on.
pub trait ElementHandle {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Replace the whole `class` attribute.
    fn set_class_name(&self, class_name: &str);
    fn set_text(&self, text: &str);
    fn set_disabled(&self, disabled: bool);
    fn set_style(&self, property: &str, value: &str);
}

/// The registration form: read all fields, or clear them.
pub trait FormHandle {
    fn values(&self) -> RegistrationForm;
    fn reset(&self);
}

/// Blocking user notification (`window.alert` in the browser).
pub trait Notifier {
    fn alert(&self, message: &str);
}
