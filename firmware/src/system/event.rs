//! Button and capacity event signals
//!
//! One binary signal per event kind. Raising a signal is non-blocking
//! and callable from the interrupt-priority watcher path; a second
//! occurrence before the consumer runs coalesces into the already
//! pending state, so there is no queue and nothing to overflow. Each
//! kind has exactly one consuming task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Entry button accepted an edge
static ENTRY_DETECTED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Exit button accepted an edge while the room was occupied
static EXIT_DETECTED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Reset button accepted an edge
static RESET_REQUESTED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// An admission attempt was refused because the room is full
static CAPACITY_REACHED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Raises the entry event. Non-blocking, coalescing.
pub fn signal_entry() {
    ENTRY_DETECTED.signal(());
}

/// Suspends until an entry event is pending, then consumes it.
pub async fn wait_entry() {
    ENTRY_DETECTED.wait().await
}

/// Raises the exit event. Non-blocking, coalescing.
pub fn signal_exit() {
    EXIT_DETECTED.signal(());
}

/// Suspends until an exit event is pending, then consumes it.
pub async fn wait_exit() {
    EXIT_DETECTED.wait().await
}

/// Raises the reset request. Non-blocking, coalescing.
pub fn signal_reset() {
    RESET_REQUESTED.signal(());
}

/// Suspends until a reset request is pending, then consumes it.
pub async fn wait_reset() {
    RESET_REQUESTED.wait().await
}

/// Flags a refused admission for the alert task. Non-blocking, coalescing.
pub fn signal_capacity_reached() {
    CAPACITY_REACHED.signal(());
}

/// Suspends until a capacity alert is pending, then consumes it.
pub async fn wait_capacity_reached() {
    CAPACITY_REACHED.wait().await
}
