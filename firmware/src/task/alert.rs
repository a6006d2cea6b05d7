//! Capacity alert
//!
//! Sounds once per refused admission. Decoupled from the entry task and
//! placed on the highest band, so alert latency stays bounded no matter
//! how long another task dwells on the display.

use defmt::info;
use embassy_time::Duration;

use crate::system::{event, tone};

/// Alert tone frequency (Hz)
const ALERT_TONE_HZ: u32 = 750;
/// Alert tone length (ms)
const ALERT_TONE_LEN: Duration = Duration::from_millis(150);

/// Capacity alert task
#[embassy_executor::task]
pub async fn alert() {
    loop {
        event::wait_capacity_reached().await;
        info!("capacity alert");

        let mut guard = tone::acquire().await;
        if let Some(buzzer) = guard.as_mut() {
            buzzer.beep(ALERT_TONE_HZ, ALERT_TONE_LEN).await;
        }
    }
}
