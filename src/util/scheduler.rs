//! One-shot deferred callbacks.
//!
//! Scheduled tasks have no cancellation handle. Everything scheduled through
//! here must be safe to run after the state it touches has moved on.

/// Runs `task` once, `delay_ms` milliseconds from now.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// `setTimeout`-backed scheduler via `gloo-timers`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}
