//! Entry admission and status display
//!
//! Waits for entry events with a refresh timeout, so the same task that
//! admits people also owns the routine idle/status screen. Both duties
//! are low-frequency, human-speed work and share the lowest priority
//! band. A refused admission is handed to the alert task instead of
//! sounding the buzzer here, so tone duration never stalls admissions.

use core::fmt::Write;

use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Timer};
use heapless::String;

use crate::system::{display, event, store};

/// Idle/status refresh period (ms)
const STATUS_REFRESH: Duration = Duration::from_millis(50);
/// Exclusive display time for a feedback message (ms)
const MESSAGE_DWELL: Duration = Duration::from_millis(500);

/// Entry handling task
#[embassy_executor::task]
pub async fn entry() {
    loop {
        match select(event::wait_entry(), Timer::after(STATUS_REFRESH)).await {
            Either::First(()) => {
                if store::try_admit().await {
                    info!("admitted, count now {}", store::snapshot().await);
                    show_admitted().await;
                } else {
                    info!("room full, admission refused");
                    event::signal_capacity_reached();
                }
            }
            Either::Second(()) => refresh_status().await,
        }
    }
}

/// Shows the entry confirmation, holding the display through the dwell
/// window so the message is guaranteed screen time.
async fn show_admitted() {
    let mut guard = display::acquire().await;
    if let Some(screen) = guard.as_mut() {
        screen.clear();
        screen.centered_line("Entry", 14);
        screen.centered_line("registered", 36);
        screen.flush().await;
    }
    Timer::after(MESSAGE_DWELL).await;
}

/// Routine status screen: waiting message while empty, otherwise the
/// current count. The count is read before taking the display lock, so
/// it may run one mutation behind a concurrent admit or release.
async fn refresh_status() {
    let count = store::snapshot().await;

    let mut guard = display::acquire().await;
    if let Some(screen) = guard.as_mut() {
        screen.clear();
        if count == 0 {
            screen.centered_line("Waiting", 14);
            screen.centered_line("...", 36);
        } else {
            let mut line: String<16> = String::new();
            let _ = write!(line, "{} of {}", count, store::ROOM_CAPACITY);
            screen.centered_line("People inside", 14);
            screen.centered_line(&line, 36);
        }
        screen.flush().await;
    }
}
