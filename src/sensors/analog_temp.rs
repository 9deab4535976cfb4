//! Analog temperature front-end, read via the ESP32-S3 ADC.
//!
//! The probe drives a plain voltage output; this driver reports the raw
//! ADC counts and leaves the unit conversion to the configured linear
//! calibration (`raw * scale / divisor + offset`).  Readings pinned to
//! either rail mean a disconnected or shorted probe and surface as
//! [`SensorError::OutOfRange`] — never as a fabricated value.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the temperature ADC channel via the oneshot API
//! (initialised by hw_init).  On host/test: reads a static AtomicU16,
//! with a separate fault-injection flag.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::error::SensorError;

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_ADC: AtomicU16 = AtomicU16::new(1229);
#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_FAULT: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc(raw: u16) {
    SIM_TEMP_ADC.store(raw, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_fault(fault: bool) {
    SIM_TEMP_FAULT.store(fault, Ordering::Relaxed);
}

const ADC_MAX: u16 = 4095;

pub struct AnalogTempSensor {
    _adc_gpio: i32,
}

impl AnalogTempSensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self {
            _adc_gpio: adc_gpio,
        }
    }

    /// One synchronous raw sample, in ADC counts.
    pub fn read_raw(&self) -> Result<f32, SensorError> {
        let raw = self.read_adc()?;
        // Rail readings: open probe reads full-scale through the pull-up,
        // a short reads zero.
        if raw == 0 || raw >= ADC_MAX {
            return Err(SensorError::OutOfRange);
        }
        Ok(f32::from(raw))
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> Result<u16, SensorError> {
        hw_init::adc1_read(hw_init::ADC1_CH_TEMP).ok_or(SensorError::AdcReadFailed)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> Result<u16, SensorError> {
        if SIM_TEMP_FAULT.load(Ordering::Relaxed) {
            return Err(SensorError::AdcReadFailed);
        }
        Ok(SIM_TEMP_ADC.load(Ordering::Relaxed))
    }
}
