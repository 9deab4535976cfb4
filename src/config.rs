//! System configuration parameters
//!
//! All tunable parameters for the RoomWatch node.  The calibration constants
//! were compiled-in literals in earlier deployments (and disagreed between
//! units); they are named, validated fields here and must be set per
//! physical sensor.

use serde::{Deserialize, Serialize};

/// Linear calibration transform applied to a raw sensor reading:
/// `value = raw * scale / divisor + offset`.
///
/// Defaults match the fleet's analog front-end wiring.  Some units in the
/// field were commissioned with `scale = 450.0` — the correct factor is a
/// per-sensor decision made at install time, not a firmware constant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Calibration {
    pub scale: f32,
    pub divisor: f32,
    pub offset: f32,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            scale: 340.0,
            divisor: 614.4,
            offset: -70.0,
        }
    }
}

impl Calibration {
    /// Apply the transform to a raw reading.
    pub fn apply(&self, raw: f32) -> f32 {
        raw * self.scale / self.divisor + self.offset
    }

    /// Reject parameter sets that cannot produce a meaningful reading.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.divisor == 0.0 {
            return Err("calibration divisor must be non-zero");
        }
        if !self.scale.is_finite() || !self.divisor.is_finite() || !self.offset.is_finite() {
            return Err("calibration fields must be finite");
        }
        Ok(())
    }
}

/// Which temperature probe this unit carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeKind {
    /// Voltage-output front-end on the ADC.
    Analog,
    /// MLX90614 IR thermometer on the I2C bus.
    Infrared,
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Motion ---
    /// Minimum duration the raw PIR level must hold before it is accepted
    /// as the true state (milliseconds).
    pub debounce_window_ms: u32,
    /// One-time settling period after power-on before the motion path goes
    /// live (seconds).  The PIR output is unreliable during warm-up.
    pub settle_secs: u16,

    // --- Timing ---
    /// Main loop cadence: one raw sample and at most one telemetry dispatch
    /// per pass (milliseconds).
    pub sample_interval_ms: u32,

    // --- Telemetry ---
    /// Decimal places in the reply wire format.
    pub reply_decimals: u8,
    /// Raw-to-unit transform for the temperature sensor.
    pub calibration: Calibration,
    /// Installed temperature probe variant.
    pub probe: ProbeKind,

    // --- Safety ---
    /// Temperature (Celsius) above which an overheat event is raised.
    pub max_temperature_c: f32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Motion
            debounce_window_ms: 200,
            settle_secs: 30, // HC-SR501 warm-up

            // Timing
            sample_interval_ms: 20, // 50 Hz poll

            // Telemetry
            reply_decimals: 2,
            calibration: Calibration::default(),
            probe: ProbeKind::Analog,

            // Safety
            max_temperature_c: 180.0,
        }
    }
}

impl SystemConfig {
    /// Range-check every field.  Invalid configs are rejected, not clamped.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.debounce_window_ms == 0 {
            return Err("debounce window must be non-zero");
        }
        if self.sample_interval_ms == 0 {
            return Err("sample interval must be non-zero");
        }
        if self.sample_interval_ms > self.debounce_window_ms {
            return Err("sample interval must not exceed the debounce window");
        }
        if self.reply_decimals > 6 {
            return Err("reply precision above 6 decimals is meaningless");
        }
        if !self.max_temperature_c.is_finite() {
            return Err("max temperature must be finite");
        }
        self.calibration.validate()
    }
}
