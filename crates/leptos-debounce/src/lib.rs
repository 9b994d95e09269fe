//! Leptos Debounce Utilities
//!
//! Timer helpers for Leptos CSR apps: trailing-edge debouncing with
//! cancellation, and short-lived "flash" state.
//! A generation counter stands in for clearTimeout: a pending call only fires
//! if no newer call has been made since it was scheduled.

use std::future::Future;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Ticket handed out by [`DebounceGate::arm`]
pub type Ticket = u64;

/// Generation counter shared by every call of one debounced action.
#[derive(Clone, Copy)]
pub struct DebounceGate {
    generation: RwSignal<u64>,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self {
            generation: RwSignal::new(0),
        }
    }

    /// Issue a new ticket, invalidating all earlier ones
    pub fn arm(&self) -> Ticket {
        self.generation
            .try_update(|g| {
                *g += 1;
                *g
            })
            .unwrap_or(0)
    }

    /// True if no newer ticket was issued and nothing was cancelled.
    /// A disposed gate (owner unmounted) is never current.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.try_get_untracked() == Some(ticket)
    }

    /// Drop any pending call
    pub fn cancel(&self) {
        self.arm();
    }

    /// Arm now and resolve to `fut`'s output only if still current once it
    /// completes; `None` if a newer call or a cancel came in meanwhile.
    pub fn latest<F>(&self, fut: F) -> impl Future<Output = Option<F::Output>>
    where
        F: Future,
    {
        let ticket = self.arm();
        let gate = *self;
        async move {
            let out = fut.await;
            gate.is_current(ticket).then_some(out)
        }
    }
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap `f` so it runs `delay_ms` after the most recent call.
///
/// Calls made while a previous one is pending replace it; only the latest
/// argument is delivered.
pub fn debounce<T, F>(gate: DebounceGate, delay_ms: u32, f: F) -> impl Fn(T) + Clone + 'static
where
    T: 'static,
    F: Fn(T) + Clone + 'static,
{
    move |arg: T| {
        let ticket = gate.arm();
        let f = f.clone();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if gate.is_current(ticket) {
                f(arg);
            }
        });
    }
}

/// Run `on` now and `off` after `duration_ms`.
pub fn flash(duration_ms: u32, on: impl FnOnce(), off: impl FnOnce() + 'static) {
    on();
    Timeout::new(duration_ms, off).forget();
}
