//! Button edge watchers
//!
//! One task per button, running on the interrupt-priority executor: wait
//! for the falling edge, run the refractory debounce gate, raise the
//! matching binary signal. Nothing on this path blocks, allocates or
//! touches the display.
//!
//! Each gate is owned by its watcher task, so the debounce timestamps
//! have a single writer by construction. That only holds while all
//! button handling stays on one core; multi-core interrupt delivery
//! would need a gate-level lock.

use defmt::info;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::Instant;
use occupancy_core::DebounceGate;

use crate::system::event;
use crate::system::resources::{EntryButtonResources, ExitButtonResources, ResetButtonResources};
use crate::system::store;

/// Refractory window for mechanical bounce (ms)
const DEBOUNCE_WINDOW_MS: u64 = 200;

/// Entry button watcher
#[embassy_executor::task]
pub async fn watch_entry_button(r: EntryButtonResources) {
    let mut button = Input::new(r.pin, Pull::Up);
    let mut gate = DebounceGate::new(DEBOUNCE_WINDOW_MS);

    loop {
        button.wait_for_falling_edge().await;
        if gate.accept(Instant::now().as_millis()) {
            info!("entry edge accepted");
            event::signal_entry();
        }
    }
}

/// Exit button watcher
///
/// Skips the signal when the room already reads empty. The non-blocking
/// count read can be stale, but a wrong answer only raises a no-op event
/// that the exit task re-checks under the store's guard.
#[embassy_executor::task]
pub async fn watch_exit_button(r: ExitButtonResources) {
    let mut button = Input::new(r.pin, Pull::Up);
    let mut gate = DebounceGate::new(DEBOUNCE_WINDOW_MS);

    loop {
        button.wait_for_falling_edge().await;
        if gate.accept(Instant::now().as_millis()) && store::peek() > 0 {
            info!("exit edge accepted");
            event::signal_exit();
        }
    }
}

/// Reset button watcher
#[embassy_executor::task]
pub async fn watch_reset_button(r: ResetButtonResources) {
    let mut button = Input::new(r.pin, Pull::Up);
    let mut gate = DebounceGate::new(DEBOUNCE_WINDOW_MS);

    loop {
        button.wait_for_falling_edge().await;
        if gate.accept(Instant::now().as_millis()) {
            info!("reset edge accepted");
            event::signal_reset();
        }
    }
}
