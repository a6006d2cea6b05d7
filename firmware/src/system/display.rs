//! Shared OLED status display
//!
//! The 128x64 SSD1306 panel is a shared output: entry, exit and reset all
//! write messages to it, and a writer may hold the lock across a message
//! dwell window so its text is guaranteed screen time. Writers that lose
//! the race simply wait their turn; dwell windows are bounded, so nobody
//! starves. The panel itself is brought up lazily on first acquisition
//! because init has to await the I2C bus.

use defmt::warn;
use embassy_rp::i2c::{Async as I2cAsync, Config as I2cConfig, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embedded_graphics::{
    mono_font::{ascii::FONT_9X18_BOLD, MonoTextStyleBuilder},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use ssd1306::mode::{BufferedGraphicsModeAsync, DisplayConfigAsync};
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306Async};

use crate::system::resources::{DisplayResources, Irqs};

/// Panel width (px)
const WIDTH: i32 = 128;
/// Horizontal glyph advance of the panel font (px)
const GLYPH_WIDTH: i32 = 9;

type Oled = Ssd1306Async<
    I2CInterface<I2c<'static, I2C1, I2cAsync>>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// Text surface over the buffered OLED driver: clear to the background
/// polarity, draw centered lines, flush to the panel.
pub struct Screen {
    oled: Oled,
    /// Background polarity; text renders in the opposite color.
    inverted: bool,
    initialized: bool,
}

impl Screen {
    /// Clears the draw buffer to the background polarity.
    pub fn clear(&mut self) {
        let background = if self.inverted {
            BinaryColor::On
        } else {
            BinaryColor::Off
        };
        let _ = self.oled.clear(background);
    }

    /// Draws one horizontally centered text line with its top edge at `y`.
    pub fn centered_line(&mut self, text: &str, y: i32) {
        let foreground = if self.inverted {
            BinaryColor::Off
        } else {
            BinaryColor::On
        };
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_9X18_BOLD)
            .text_color(foreground)
            .build();
        let x = (WIDTH - text.len() as i32 * GLYPH_WIDTH).max(0) / 2;
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.oled);
    }

    /// Pushes the draw buffer to the panel. A failed transfer is logged
    /// and dropped; the next refresh simply tries again.
    pub async fn flush(&mut self) {
        if self.oled.flush().await.is_err() {
            warn!("display flush failed");
        }
    }
}

/// Shared display slot. A writer may keep the lock through its dwell window.
static SCREEN: Mutex<CriticalSectionRawMutex, Option<Screen>> = Mutex::new(None);

/// Builds the I2C bus and the driver and parks them in the shared slot.
///
/// Called once from bring-up, before any task is spawned. The panel
/// answers on the stock 0x3C address at 400kHz fast mode.
pub fn init(r: DisplayResources) {
    let mut config = I2cConfig::default();
    config.frequency = 400_000;
    let i2c = I2c::new_async(r.i2c, r.scl_pin, r.sda_pin, Irqs, config);
    let interface = I2CDisplayInterface::new(i2c);
    let oled = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    critical_section::with(|_| {
        *SCREEN.try_lock().unwrap() = Some(Screen {
            oled,
            inverted: false,
            initialized: false,
        });
    });
}

/// Locks the display, bringing the panel up on first use.
pub async fn acquire() -> MutexGuard<'static, CriticalSectionRawMutex, Option<Screen>> {
    let mut guard = SCREEN.lock().await;
    if let Some(screen) = guard.as_mut() {
        if !screen.initialized {
            match screen.oled.init().await {
                Ok(()) => screen.initialized = true,
                Err(_) => warn!("display init failed, will retry on next acquire"),
            }
        }
    }
    guard
}
