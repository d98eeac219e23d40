//! Networking for the page's two backend calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the injectable client capability, `api` issues the
//! registration and login requests over it, `types` holds the wire schema,
//! and `browser` is the `gloo-net` client used in the live page.

pub mod api;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod http;
pub mod types;
