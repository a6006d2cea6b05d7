//! Tri-color occupancy indicator
//!
//! Pure observer: polls the store on a fixed period and drives the three
//! LED lines from the derived occupancy level. Never mutates the count;
//! what it shows is at most one poll period stale.

use defmt::info;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Timer};

use crate::system::resources::IndicatorResources;
use crate::system::store;

/// Indicator poll period (ms)
const POLL_PERIOD: Duration = Duration::from_millis(50);

/// Indicator refresh task
#[embassy_executor::task]
pub async fn indicator(r: IndicatorResources) {
    let mut red = Output::new(r.red_pin, Level::Low);
    let mut green = Output::new(r.green_pin, Level::Low);
    let mut blue = Output::new(r.blue_pin, Level::Low);
    let mut last_level = None;

    loop {
        let level = store::level().await;
        if last_level != Some(level) {
            info!("occupancy level now {}", level);
            last_level = Some(level);
        }

        let (red_on, green_on, blue_on) = level.indicator_lines();
        red.set_level(Level::from(red_on));
        green.set_level(Level::from(green_on));
        blue.set_level(Level::from(blue_on));

        Timer::after(POLL_PERIOD).await;
    }
}
