//! Hardware resource allocation
//!
//! Splits the board's pins and peripherals into per-task groups so each
//! task owns exactly the hardware it drives. Pin assignments follow the
//! BitDogLab board layout: buttons on 5/6/22, tri-color LED on 13/11/12,
//! buzzer on 10, OLED on I2C1 (SDA 14, SCL 15).

use assign_resources::assign_resources;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::InterruptHandler as I2cInterruptHandler;
use embassy_rp::peripherals::{self, I2C1};

assign_resources! {
    /// Entry button, falling edge on press
    entry_button: EntryButtonResources {
        pin: PIN_5,
    },
    /// Exit button, falling edge on press
    exit_button: ExitButtonResources {
        pin: PIN_6,
    },
    /// Reset button (joystick press), falling edge
    reset_button: ResetButtonResources {
        pin: PIN_22,
    },
    /// Tri-color indicator LED lines
    indicator: IndicatorResources {
        red_pin: PIN_13,
        green_pin: PIN_11,
        blue_pin: PIN_12,
    },
    /// Piezo buzzer PWM output
    buzzer: BuzzerResources {
        slice: PWM_SLICE5,
        pin: PIN_10,
    },
    /// SSD1306 OLED on the I2C1 bus
    display: DisplayResources {
        i2c: I2C1,
        sda_pin: PIN_14,
        scl_pin: PIN_15,
    },
}

bind_interrupts!(pub struct Irqs {
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
});
