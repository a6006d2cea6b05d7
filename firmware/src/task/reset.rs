//! Count reset servicing
//!
//! Runs on the middle priority band so a reset request preempts routine
//! entry/exit handling. Store, buzzer and display locks are taken
//! strictly one after another; no task in the system ever holds two.

use defmt::info;
use embassy_time::{Duration, Timer};

use crate::system::{display, event, store, tone};

/// Confirmation tone frequency (Hz)
const CONFIRM_TONE_HZ: u32 = 600;
/// Confirmation tone pulse length (ms)
const CONFIRM_TONE_LEN: Duration = Duration::from_millis(200);
/// Gap between the two confirmation pulses (ms)
const CONFIRM_TONE_GAP: Duration = Duration::from_millis(250);
/// Exclusive display time for the confirmation message (ms)
const MESSAGE_DWELL: Duration = Duration::from_millis(500);

/// Reset servicing task
#[embassy_executor::task]
pub async fn reset() {
    loop {
        event::wait_reset().await;

        store::reset().await;
        info!("count reset to zero");

        {
            let mut guard = tone::acquire().await;
            if let Some(buzzer) = guard.as_mut() {
                buzzer.beep(CONFIRM_TONE_HZ, CONFIRM_TONE_LEN).await;
                Timer::after(CONFIRM_TONE_GAP).await;
                buzzer.beep(CONFIRM_TONE_HZ, CONFIRM_TONE_LEN).await;
            }
        }

        let mut guard = display::acquire().await;
        if let Some(screen) = guard.as_mut() {
            screen.clear();
            screen.centered_line("Reset", 14);
            screen.centered_line("complete", 36);
            screen.flush().await;
        }
        Timer::after(MESSAGE_DWELL).await;
    }
}
