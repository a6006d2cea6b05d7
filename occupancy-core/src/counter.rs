//! Bounded occupancy counting
//!
//! The counter is the single source of truth for how many people are in
//! the room. All mutations go through the bounded operations here; no
//! caller ever works with the raw integer. The firmware owns exactly one
//! instance behind a mutex, but the logic itself is free of any
//! synchronization so it can be tested on the host.

use defmt::Format;

/// People counter bounded by a fixed room capacity.
///
/// Invariant: `0 <= count <= capacity` after every operation. Operations
/// that would violate the bound refuse and leave the count untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyCounter {
    count: u8,
    capacity: u8,
}

impl OccupancyCounter {
    /// Creates an empty counter for a room of the given capacity.
    pub const fn new(capacity: u8) -> Self {
        Self { count: 0, capacity }
    }

    /// Admits one person if the room is not full.
    ///
    /// Returns false without mutating when the room is at capacity; the
    /// caller routes that refusal to the capacity-reached feedback path.
    pub fn try_admit(&mut self) -> bool {
        if self.count < self.capacity {
            self.count += 1;
            true
        } else {
            false
        }
    }

    /// Releases one person if anyone is inside.
    ///
    /// Returns false without mutating when the count is already zero,
    /// which happens when a stale exit signal races a concurrent reset.
    pub fn try_release(&mut self) -> bool {
        if self.count > 0 {
            self.count -= 1;
            true
        } else {
            false
        }
    }

    /// Unconditionally empties the room. Idempotent.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Current number of people inside.
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Room capacity this counter was created with.
    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    /// Discrete occupancy level for the current count.
    pub fn level(&self) -> OccupancyLevel {
        OccupancyLevel::classify(self.count, self.capacity)
    }
}

/// Discrete occupancy bands driving the tri-color indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum OccupancyLevel {
    /// Nobody inside
    Empty,
    /// Room has comfortable headroom
    Available,
    /// One admission left
    NearFull,
    /// At capacity, further admissions are refused
    Full,
}

impl OccupancyLevel {
    /// Maps a count to its occupancy band. Pure and deterministic.
    pub fn classify(count: u8, capacity: u8) -> Self {
        if count == 0 {
            OccupancyLevel::Empty
        } else if count >= capacity {
            OccupancyLevel::Full
        } else if count + 1 == capacity {
            OccupancyLevel::NearFull
        } else {
            OccupancyLevel::Available
        }
    }

    /// Indicator line states as `(red, green, blue)`.
    ///
    /// Empty shows blue, Available green, NearFull red+green (amber),
    /// Full red only.
    pub fn indicator_lines(self) -> (bool, bool, bool) {
        match self {
            OccupancyLevel::Empty => (false, false, true),
            OccupancyLevel::Available => (false, true, false),
            OccupancyLevel::NearFull => (true, true, false),
            OccupancyLevel::Full => (true, false, false),
        }
    }
}
