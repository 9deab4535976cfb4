//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to serial, wall-message a user,
//! ship to a collector.  How an event is displayed is the adapter's
//! concern; the core only guarantees exactly one event per motion edge.

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// The application service has started; motion path still settling.
    Started { settle_secs: u16 },

    /// Debounced motion began (Idle → Active edge).
    MotionStarted { at_ms: u64 },

    /// Debounced motion ceased (Active → Idle edge).
    MotionEnded { at_ms: u64 },

    /// A telemetry request was answered with a calibrated reading.
    ReadingServed { value: f32 },

    /// A telemetry request hit a sensor fault; `ERR` went on the wire.
    SensorFault,

    /// A served reading exceeded the configured temperature ceiling.
    OverTemperature { value: f32 },
}
