//! Page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller is independent and communicates with the others only
//! through the document and the persisted key-value store. Controllers are
//! constructed against capability traits; each module's `mount` builds one
//! against the live page under `hydrate`.

pub mod login;
pub mod registration_modal;
pub mod scroll_effects;
pub mod sidebar;
