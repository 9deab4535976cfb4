//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (PIR input, temperature sensor, UART link, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly and every test runs against mocks.

use crate::error::{LinkError, SensorError};

// ───────────────────────────────────────────────────────────────
// Motion input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Instantaneous, unfiltered read of the binary motion input.  One sample
/// per loop pass; the sample is not retained anywhere downstream of the
/// debounce filter.
pub trait MotionSense {
    fn read_level(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Sensor reader port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// One numeric measurement per invocation, independent of sensing
/// technology — the analog front-end and the I2C IR thermometer both
/// implement this.  Returns raw counts; calibration is the domain's job.
///
/// A fault must surface as `Err`, never as a substituted default value.
pub trait SensorReader {
    fn read(&mut self) -> Result<f32, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Byte link port (driven adapter: domain ↔ serial transport)
// ───────────────────────────────────────────────────────────────

/// Byte-oriented point-to-point link to the polling host.  The domain only
/// ever consumes single bytes and writes one short reply; buffering,
/// baud rates, and transport errors are the adapter's concern.
pub trait ByteLink {
    /// Number of inbound bytes ready to read without blocking.
    fn available(&self) -> usize;

    /// Read one byte; `None` when nothing is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Write a complete reply.
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), LinkError>;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → status LED)
// ───────────────────────────────────────────────────────────────

/// Visual motion indicator.  Driven on every edge, not every sample.
pub trait IndicatorPort {
    fn set_indicator(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / reporting)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, message
/// bus, host notification).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
