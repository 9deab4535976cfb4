//! MLX90614 infrared thermometer (I2C/SMBus variant of the probe).
//!
//! Some units in the fleet carry this digital sensor instead of the
//! analog front-end.  The object-temperature register (RAM 0x07) holds
//! the reading in units of 0.02 K, which the standard calibration config
//! expresses as `scale = 2, divisor = 100, offset = -273.15` — the driver
//! itself only reports raw register counts.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: SMBus word read via the hw_init I2C master.
//! On host/test: reads a static AtomicU16, with a fault-injection flag.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::error::SensorError;

/// RAM address of the object temperature register.
const REG_TOBJ1: u8 = 0x07;

#[cfg(not(target_os = "espidf"))]
static SIM_MLX_RAW: AtomicU16 = AtomicU16::new(14_900);
#[cfg(not(target_os = "espidf"))]
static SIM_MLX_FAULT: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_raw(raw: u16) {
    SIM_MLX_RAW.store(raw, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_fault(fault: bool) {
    SIM_MLX_FAULT.store(fault, Ordering::Relaxed);
}

pub struct Mlx90614 {
    addr: u8,
}

impl Mlx90614 {
    pub fn new(addr: u8) -> Self {
        Self { addr }
    }

    /// One synchronous raw sample, in register counts (0.02 K units).
    pub fn read_raw(&self) -> Result<f32, SensorError> {
        let raw = self.read_word(REG_TOBJ1)?;
        // The device sets the MSB to flag an invalid measurement.
        if raw & 0x8000 != 0 {
            return Err(SensorError::OutOfRange);
        }
        Ok(f32::from(raw))
    }

    #[cfg(target_os = "espidf")]
    fn read_word(&self, reg: u8) -> Result<u16, SensorError> {
        hw_init::i2c_read_word(self.addr, reg).ok_or(SensorError::I2cReadFailed)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_word(&self, _reg: u8) -> Result<u16, SensorError> {
        if SIM_MLX_FAULT.load(Ordering::Relaxed) {
            return Err(SensorError::I2cReadFailed);
        }
        Ok(SIM_MLX_RAW.load(Ordering::Relaxed))
    }
}
