//! Hardware initialisation and peripheral helper drivers.

pub mod hw_init;
pub mod status_led;
pub mod watchdog;
