use occupancy_core::OccupancyCounter;

const ROOM_CAPACITY: u8 = 5;

#[test]
fn admission_increments_until_capacity() {
    let mut counter = OccupancyCounter::new(ROOM_CAPACITY);

    for expected in 1..=ROOM_CAPACITY {
        assert!(counter.try_admit());
        assert_eq!(counter.count(), expected);
    }
    assert_eq!(counter.count(), ROOM_CAPACITY);
}

#[test]
fn admission_at_capacity_is_refused_without_mutation() {
    let mut counter = OccupancyCounter::new(ROOM_CAPACITY);

    let mut refusals = 0;
    for _ in 0..ROOM_CAPACITY {
        assert!(counter.try_admit());
    }

    // The sixth attempt must refuse exactly once and leave the count alone.
    if !counter.try_admit() {
        refusals += 1;
    }
    assert_eq!(refusals, 1);
    assert_eq!(counter.count(), ROOM_CAPACITY);
}

#[test]
fn release_decrements_and_refuses_at_zero() {
    let mut counter = OccupancyCounter::new(ROOM_CAPACITY);

    assert!(counter.try_admit());
    assert!(counter.try_release());
    assert_eq!(counter.count(), 0);

    // Release on an empty room is a refused no-op, not an underflow.
    assert!(!counter.try_release());
    assert_eq!(counter.count(), 0);
}

#[test]
fn reset_zeroes_from_any_state_and_is_idempotent() {
    let mut counter = OccupancyCounter::new(ROOM_CAPACITY);

    counter.reset();
    assert_eq!(counter.count(), 0);

    for _ in 0..3 {
        counter.try_admit();
    }
    counter.reset();
    assert_eq!(counter.count(), 0);

    counter.reset();
    assert_eq!(counter.count(), 0);
}

#[test]
fn full_room_then_releases_then_reset() {
    let mut counter = OccupancyCounter::new(ROOM_CAPACITY);

    for _ in 0..ROOM_CAPACITY {
        assert!(counter.try_admit());
    }
    for _ in 0..3 {
        assert!(counter.try_release());
    }
    assert_eq!(counter.count(), 2);

    counter.reset();
    assert_eq!(counter.count(), 0);
}

#[test]
fn count_stays_within_bounds_across_mixed_traffic() {
    let mut counter = OccupancyCounter::new(ROOM_CAPACITY);

    // A deterministic burst of mismatched traffic: more admissions than
    // capacity, more releases than occupants, resets in between.
    // '+' admits, '-' releases, '0' resets.
    for op in "++-++++++0--+0-+".chars() {
        match op {
            '+' => {
                counter.try_admit();
            }
            '-' => {
                counter.try_release();
            }
            _ => counter.reset(),
        }
        assert!(counter.count() <= counter.capacity());
    }
    assert_eq!(counter.count(), 1);
}
