//! Shared occupancy store
//!
//! The one mutex-guarded `OccupancyCounter` every task works against.
//! All mutation goes through the bounded operations here; the guard is
//! only ever held for a single arithmetic step, never across another
//! await, and never together with the display or buzzer lock.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use occupancy_core::{OccupancyCounter, OccupancyLevel};

/// Maximum number of people allowed inside at once
pub const ROOM_CAPACITY: u8 = 5;

/// Global occupancy counter, starting from an empty room.
static OCCUPANCY: Mutex<CriticalSectionRawMutex, OccupancyCounter> =
    Mutex::new(OccupancyCounter::new(ROOM_CAPACITY));

/// Admits one person. False means the room is full and the caller routes
/// the refusal to the capacity alert.
pub async fn try_admit() -> bool {
    OCCUPANCY.lock().await.try_admit()
}

/// Releases one person. False means the room was already empty (a stale
/// exit signal racing a reset) and nothing changed.
pub async fn try_release() -> bool {
    OCCUPANCY.lock().await.try_release()
}

/// Empties the room unconditionally.
pub async fn reset() {
    OCCUPANCY.lock().await.reset()
}

/// Copy of the current count, read under the guard.
pub async fn snapshot() -> u8 {
    OCCUPANCY.lock().await.count()
}

/// Current occupancy level, read under the guard.
pub async fn level() -> OccupancyLevel {
    OCCUPANCY.lock().await.level()
}

/// Non-blocking count read for the watcher path. Reports 0 when the
/// guard is momentarily held; callers only use this to suppress no-op
/// wakeups, the consuming task re-checks under the guard regardless.
pub fn peek() -> u8 {
    OCCUPANCY.try_lock().map(|counter| counter.count()).unwrap_or(0)
}
