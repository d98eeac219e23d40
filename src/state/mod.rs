//! Pure UI state machines driving the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers in `components` translate these states into DOM mutations.
//! Nothing here touches the browser, so every transition is unit-testable.

pub mod message;
pub mod sidebar;
pub mod submission;
