//! Timer behaviour, run in a real browser event loop.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::Executor;
use leptos_debounce::{debounce, flash, DebounceGate};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(T) + Clone + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |value: T| sink.borrow_mut().push(value))
}

#[wasm_bindgen_test]
async fn burst_fires_once_with_last_value() {
    let _ = Executor::init_wasm_bindgen();
    let (seen, sink) = recorder::<&'static str>();
    let on_quiet = debounce(DebounceGate::new(), 40, sink);

    on_quiet("bo");
    on_quiet("bol");
    on_quiet("bolt");

    TimeoutFuture::new(10).await;
    assert!(seen.borrow().is_empty(), "fired before the input went quiet");

    TimeoutFuture::new(100).await;
    assert_eq!(*seen.borrow(), vec!["bolt"]);
}

#[wasm_bindgen_test]
async fn calls_spaced_beyond_delay_each_fire() {
    let _ = Executor::init_wasm_bindgen();
    let (seen, sink) = recorder::<u32>();
    let on_quiet = debounce(DebounceGate::new(), 20, sink);

    on_quiet(1);
    TimeoutFuture::new(80).await;
    on_quiet(2);
    TimeoutFuture::new(80).await;

    assert_eq!(*seen.borrow(), vec![1, 2]);
}

#[wasm_bindgen_test]
async fn cancel_drops_pending_call() {
    let _ = Executor::init_wasm_bindgen();
    let (seen, sink) = recorder::<u32>();
    let gate = DebounceGate::new();
    let on_quiet = debounce(gate, 20, sink);

    on_quiet(7);
    gate.cancel();
    TimeoutFuture::new(80).await;

    assert!(seen.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn superseded_result_is_dropped() {
    let gate = DebounceGate::new();
    let slow = gate.latest(async {
        TimeoutFuture::new(40).await;
        "old"
    });
    let fast = gate.latest(async { "new" });

    assert_eq!(fast.await, Some("new"));
    assert_eq!(slow.await, None);
}

#[wasm_bindgen_test]
async fn cancelled_result_is_dropped() {
    let gate = DebounceGate::new();
    let pending = gate.latest(async { 5 });
    gate.cancel();
    assert_eq!(pending.await, None);
}

#[wasm_bindgen_test]
async fn flash_turns_off_after_duration() {
    let state = Rc::new(RefCell::new(false));
    let on = state.clone();
    let off = state.clone();
    flash(30, move || *on.borrow_mut() = true, move || *off.borrow_mut() = false);

    assert!(*state.borrow());
    TimeoutFuture::new(80).await;
    assert!(!*state.borrow());
}
