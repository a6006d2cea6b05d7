use occupancy_core::{OccupancyCounter, OccupancyLevel};

const ROOM_CAPACITY: u8 = 5;

#[test]
fn level_mapping_matches_occupancy_bands() {
    assert_eq!(
        OccupancyLevel::classify(0, ROOM_CAPACITY),
        OccupancyLevel::Empty
    );
    for count in 1..=3 {
        assert_eq!(
            OccupancyLevel::classify(count, ROOM_CAPACITY),
            OccupancyLevel::Available,
            "count {count} should be Available"
        );
    }
    assert_eq!(
        OccupancyLevel::classify(4, ROOM_CAPACITY),
        OccupancyLevel::NearFull
    );
    assert_eq!(
        OccupancyLevel::classify(5, ROOM_CAPACITY),
        OccupancyLevel::Full
    );
}

#[test]
fn counter_reports_its_own_level() {
    let mut counter = OccupancyCounter::new(ROOM_CAPACITY);
    assert_eq!(counter.level(), OccupancyLevel::Empty);

    counter.try_admit();
    counter.try_admit();
    assert_eq!(counter.level(), OccupancyLevel::Available);

    counter.try_admit();
    counter.try_admit();
    assert_eq!(counter.level(), OccupancyLevel::NearFull);

    counter.try_admit();
    assert_eq!(counter.level(), OccupancyLevel::Full);
}

#[test]
fn indicator_lines_encode_each_level() {
    // (red, green, blue)
    assert_eq!(
        OccupancyLevel::Empty.indicator_lines(),
        (false, false, true)
    );
    assert_eq!(
        OccupancyLevel::Available.indicator_lines(),
        (false, true, false)
    );
    assert_eq!(
        OccupancyLevel::NearFull.indicator_lines(),
        (true, true, false)
    );
    assert_eq!(OccupancyLevel::Full.indicator_lines(), (true, false, false));
}

#[test]
fn small_rooms_skip_the_available_band() {
    // With capacity 2 a single occupant already means one admission left.
    assert_eq!(OccupancyLevel::classify(0, 2), OccupancyLevel::Empty);
    assert_eq!(OccupancyLevel::classify(1, 2), OccupancyLevel::NearFull);
    assert_eq!(OccupancyLevel::classify(2, 2), OccupancyLevel::Full);
}
