//! Mock adapters for integration tests.
//!
//! Record every port interaction so tests can assert on the full history
//! without touching real GPIO/ADC/UART registers.

use std::collections::VecDeque;

use roomwatch::app::events::AppEvent;
use roomwatch::app::ports::{ByteLink, EventSink, IndicatorPort, MotionSense, SensorReader};
use roomwatch::error::{LinkError, SensorError};

// ── MockHardware ──────────────────────────────────────────────

/// PIR level + temperature probe + indicator LED in one adapter, the same
/// shape the service sees in production.
pub struct MockHardware {
    /// Raw PIR level returned by the next `read_level()`.
    pub level: bool,
    /// Next probe result.
    pub reading: Result<f32, SensorError>,
    /// Number of probe reads — asserts that junk bytes never touch the sensor.
    pub reads: usize,
    /// Indicator state history (one entry per change command).
    pub indicator: Vec<bool>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            level: false,
            reading: Ok(614.4),
            reads: 0,
            indicator: Vec::new(),
        }
    }

    pub fn indicator_on(&self) -> bool {
        self.indicator.last().copied().unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionSense for MockHardware {
    fn read_level(&mut self) -> bool {
        self.level
    }
}

impl SensorReader for MockHardware {
    fn read(&mut self) -> Result<f32, SensorError> {
        self.reads += 1;
        self.reading
    }
}

impl IndicatorPort for MockHardware {
    fn set_indicator(&mut self, on: bool) {
        self.indicator.push(on);
    }
}

// ── MockLink ──────────────────────────────────────────────────

/// In-memory byte link: inbound queue plus a capture of everything written.
pub struct MockLink {
    pub inbound: VecDeque<u8>,
    pub written: Vec<u8>,
    pub fail_writes: bool,
}

#[allow(dead_code)]
impl MockLink {
    pub fn new() -> Self {
        Self {
            inbound: VecDeque::new(),
            written: Vec::new(),
            fail_writes: false,
        }
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.inbound.extend(bytes.iter().copied());
    }

    pub fn written_str(&self) -> &str {
        std::str::from_utf8(&self.written).expect("reply must be ASCII")
    }
}

impl Default for MockLink {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteLink for MockLink {
    fn available(&self) -> usize {
        self.inbound.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.inbound.pop_front()
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), LinkError> {
        if self.fail_writes {
            return Err(LinkError::WriteFailed);
        }
        self.written.extend_from_slice(data);
        Ok(())
    }
}

// ── CaptureSink ───────────────────────────────────────────────

/// Event sink that records every emitted event in order.
pub struct CaptureSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl CaptureSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count_motion_started(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::MotionStarted { .. }))
            .count()
    }

    pub fn count_motion_ended(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::MotionEnded { .. }))
            .count()
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for CaptureSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
