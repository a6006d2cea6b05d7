//! Executor wiring and system bring-up
//!
//! Three executors form the priority ladder the control design relies on:
//! button watchers and the capacity alert run on the highest band so an
//! edge or an alert is never delayed by display traffic, reset servicing
//! preempts routine entry/exit handling, and everything else shares the
//! thread-mode executor. The GPIO edge interrupt itself preempts all of
//! them. If the executors ever return, the panic path is the only exit.

use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::system::resources::{
    AssignedResources, BuzzerResources, DisplayResources, EntryButtonResources,
    ExitButtonResources, IndicatorResources, ResetButtonResources,
};
use crate::system::{display, store, tone};
use crate::task::alert::alert;
use crate::task::buttons::{watch_entry_button, watch_exit_button, watch_reset_button};
use crate::task::entry::entry;
use crate::task::exit::exit;
use crate::task::indicator::indicator;
use crate::task::reset::reset;

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Button watchers and the capacity alert preempt everything else.
static EXECUTOR_BUTTONS: InterruptExecutor = InterruptExecutor::new();
/// Reset servicing preempts routine entry/exit traffic.
static EXECUTOR_RESET: InterruptExecutor = InterruptExecutor::new();
/// Entry, exit and the indicator share thread mode.
static EXECUTOR_ROUTINE: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_BUTTONS.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_RESET.on_interrupt()
}

/// Firmware entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let p = embassy_rp::init(Config::default());

    // Split the peripherals into per-task resource groups.
    let r = crate::split_resources!(p);

    // Shared device wrappers must be parked in their slots before any
    // consumer task is spawned.
    display::init(r.display);
    tone::init(r.buzzer);

    defmt::info!(
        "occupancy monitor up, room capacity {}",
        store::ROOM_CAPACITY
    );

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_BUTTONS.start(interrupt::SWI_IRQ_1);
    spawner.spawn(watch_entry_button(r.entry_button)).unwrap();
    spawner.spawn(watch_exit_button(r.exit_button)).unwrap();
    spawner.spawn(watch_reset_button(r.reset_button)).unwrap();
    spawner.spawn(alert()).unwrap();

    interrupt::SWI_IRQ_0.set_priority(Priority::P3);
    let spawner = EXECUTOR_RESET.start(interrupt::SWI_IRQ_0);
    spawner.spawn(reset()).unwrap();

    let executor = EXECUTOR_ROUTINE.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(entry()).unwrap();
        spawner.spawn(exit()).unwrap();
        spawner.spawn(indicator(r.indicator)).unwrap();
    })
}
