//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! Host-side collectors that ship these lines onward key off the
//! `MOTION |` / `TELEM |` prefixes.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { settle_secs } => {
                info!("START | settling {}s before motion goes live", settle_secs);
            }
            AppEvent::MotionStarted { at_ms } => {
                info!("MOTION | detected at t={}ms", at_ms);
            }
            AppEvent::MotionEnded { at_ms } => {
                info!("MOTION | ended at t={}ms", at_ms);
            }
            AppEvent::ReadingServed { value } => {
                info!("TELEM | reading served: {:.2}", value);
            }
            AppEvent::SensorFault => {
                warn!("TELEM | sensor fault, ERR reply sent");
            }
            AppEvent::OverTemperature { value } => {
                warn!("TELEM | OVERHEAT {:.1}", value);
            }
        }
    }
}
