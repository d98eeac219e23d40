//! Browser capability abstractions shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` wraps `localStorage`, `scheduler` wraps one-shot timers. Both are
//! traits with a hydrate-only browser implementation so component logic stays
//! testable on the host.

pub mod scheduler;
pub mod storage;
