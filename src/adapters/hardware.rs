//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the PIR, the installed temperature probe, and the indicator LED,
//! exposing them through [`MotionSense`], [`SensorReader`] and
//! [`IndicatorPort`].  Together with the serial link adapter this is the
//! only layer that touches actual hardware; on non-espidf targets the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{IndicatorPort, MotionSense, SensorReader};
use crate::drivers::status_led::StatusLed;
use crate::error::SensorError;
use crate::sensors::analog_temp::AnalogTempSensor;
use crate::sensors::mlx90614::Mlx90614;
use crate::sensors::pir::PirSensor;

/// The temperature probe installed on this unit (set per deployment in
/// [`SystemConfig::probe`](crate::config::SystemConfig)).
pub enum TempProbe {
    Analog(AnalogTempSensor),
    Infrared(Mlx90614),
}

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    pir: PirSensor,
    probe: TempProbe,
    led: StatusLed,
}

impl HardwareAdapter {
    pub fn new(pir: PirSensor, probe: TempProbe, led: StatusLed) -> Self {
        Self { pir, probe, led }
    }
}

impl MotionSense for HardwareAdapter {
    fn read_level(&mut self) -> bool {
        self.pir.level()
    }
}

impl SensorReader for HardwareAdapter {
    fn read(&mut self) -> Result<f32, SensorError> {
        match &self.probe {
            TempProbe::Analog(s) => s.read_raw(),
            TempProbe::Infrared(s) => s.read_raw(),
        }
    }
}

impl IndicatorPort for HardwareAdapter {
    fn set_indicator(&mut self, on: bool) {
        self.led.set(on);
    }
}
