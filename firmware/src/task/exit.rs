//! Exit handling
//!
//! This task has nothing to do between exits, so it blocks on the exit
//! signal instead of polling.

use defmt::info;
use embassy_time::{Duration, Timer};

use crate::system::{display, event, store};

/// Exclusive display time for the exit message (ms)
const MESSAGE_DWELL: Duration = Duration::from_millis(500);

/// Exit handling task
#[embassy_executor::task]
pub async fn exit() {
    loop {
        event::wait_exit().await;

        // A refused release means a stale signal raced a reset; the room
        // is already empty and there is nothing to show.
        if !store::try_release().await {
            continue;
        }
        info!("released, count now {}", store::snapshot().await);

        let mut guard = display::acquire().await;
        if let Some(screen) = guard.as_mut() {
            screen.clear();
            screen.centered_line("Exit", 14);
            screen.centered_line("registered", 36);
            screen.flush().await;
        }
        Timer::after(MESSAGE_DWELL).await;
    }
}
