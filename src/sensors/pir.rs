//! HC-SR501 PIR motion sensor.
//!
//! Digital output, HIGH while the element senses movement.  The raw level
//! is noisy around transitions — the debounce filter upstream owns all
//! cleanup; this driver only reports the instantaneous level.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the PIR GPIO via hw_init.
//! On host/test: reads from a static AtomicBool for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_PIR_LEVEL: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_level(high: bool) {
    SIM_PIR_LEVEL.store(high, Ordering::Relaxed);
}

pub struct PirSensor {
    _gpio: i32,
}

impl PirSensor {
    pub fn new(gpio: i32) -> Self {
        Self { _gpio: gpio }
    }

    /// Instantaneous raw level; no filtering, no retention.
    pub fn level(&self) -> bool {
        self.read_gpio()
    }

    #[cfg(target_os = "espidf")]
    fn read_gpio(&self) -> bool {
        hw_init::gpio_read(self._gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_gpio(&self) -> bool {
        SIM_PIR_LEVEL.load(Ordering::Relaxed)
    }
}
