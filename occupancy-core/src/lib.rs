//! Portable core logic for the room occupancy monitor.
//!
//! Everything in this crate is hardware-free so it can be exercised by
//! host-run tests; the firmware crate wraps these types in its
//! synchronization primitives and drives the actual peripherals.

#![no_std]

pub mod counter;
pub mod debounce;

pub use counter::{OccupancyCounter, OccupancyLevel};
pub use debounce::DebounceGate;
