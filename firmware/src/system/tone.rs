//! Buzzer tone output
//!
//! Square wave on the buzzer pin via PWM at 50% duty. The reset
//! confirmation and the capacity alert share the pin, so the driver sits
//! behind its own lock; a tone sequence owns the buzzer until it ends.

use embassy_rp::pwm::{self, Pwm, SetDutyCycle};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embassy_time::{Duration, Timer};

use crate::system::resources::BuzzerResources;

/// PWM-driven piezo buzzer.
pub struct Buzzer {
    pwm: Pwm<'static>,
}

impl Buzzer {
    /// PWM config for a given tone frequency.
    ///
    /// Picks the smallest divider that keeps the period under the 16-bit
    /// counter limit, then derives the wrap value from it.
    fn config_for(freq_hz: u32) -> pwm::Config {
        let clock_freq_hz = embassy_rp::clocks::clk_sys_freq();
        let divider = ((clock_freq_hz / freq_hz) / 65535 + 1) as u8;
        let period = (clock_freq_hz / (freq_hz * divider as u32)) as u16 - 1;

        let mut config = pwm::Config::default();
        config.divider = divider.into();
        config.top = period;
        config
    }

    /// Emits `freq_hz` for `duration`, then silences the pin.
    pub async fn beep(&mut self, freq_hz: u32, duration: Duration) {
        self.pwm.set_config(&Self::config_for(freq_hz));
        let _ = self.pwm.set_duty_cycle_percent(50);
        Timer::after(duration).await;
        let _ = self.pwm.set_duty_cycle_fully_off();
    }
}

/// Shared buzzer slot.
static BUZZER: Mutex<CriticalSectionRawMutex, Option<Buzzer>> = Mutex::new(None);

/// Sets up the buzzer PWM silenced and parks it in the shared slot.
/// Called once from bring-up, before any task is spawned.
pub fn init(r: BuzzerResources) {
    let mut pwm = Pwm::new_output_a(r.slice, r.pin, Buzzer::config_for(440));
    let _ = pwm.set_duty_cycle_fully_off();
    critical_section::with(|_| {
        *BUZZER.try_lock().unwrap() = Some(Buzzer { pwm });
    });
}

/// Locks the buzzer for a tone sequence.
pub async fn acquire() -> MutexGuard<'static, CriticalSectionRawMutex, Option<Buzzer>> {
    BUZZER.lock().await
}
