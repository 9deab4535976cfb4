//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the startup gate, the debounce filter, the motion
//! detector, and the telemetry protocol handler.  It exposes a clean,
//! hardware-agnostic API; all I/O flows through port traits injected at
//! call sites, making the entire service testable with mock adapters.
//!
//! ```text
//!  MotionSense ──▶ ┌─────────────────────────────┐ ──▶ EventSink
//!  SensorReader ─▶ │         AppService          │
//!  ByteLink ◀────▶ │  Gate · Debounce · Detector │
//!                  │      · Protocol             │ ──▶ IndicatorPort
//!                  └─────────────────────────────┘
//! ```
//!
//! One call to [`tick`](AppService::tick) is one loop pass: at most one
//! raw motion sample, one debounce update, one detector evaluation, and
//! one telemetry dispatch.  The two subsystems share nothing but the
//! cadence — telemetry is live from the first pass, the motion path only
//! after the settling gate elapses.

use log::{info, warn};

use crate::config::SystemConfig;
use crate::motion::{DebounceFilter, MotionDetector, MotionEvent, MotionState, StartupGate};
use crate::telemetry::{ProtocolHandler, Reply};

use super::events::AppEvent;
use super::ports::{ByteLink, EventSink, IndicatorPort, MotionSense, SensorReader};

/// The application service orchestrates all domain logic.
pub struct AppService {
    gate: StartupGate,
    filter: DebounceFilter,
    detector: MotionDetector,
    protocol: ProtocolHandler,
    max_temperature_c: f32,
    settle_secs: u16,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration.  `now_ms` anchors the
    /// settling gate and the debounce clock; pass the same monotonic
    /// source that will drive [`tick`](Self::tick).
    pub fn new(config: &SystemConfig, now_ms: u64) -> Self {
        Self {
            gate: StartupGate::new(config.settle_secs, now_ms),
            filter: DebounceFilter::new(u64::from(config.debounce_window_ms), now_ms),
            detector: MotionDetector::new(),
            protocol: ProtocolHandler::new(config.calibration, config.reply_decimals),
            max_temperature_c: config.max_temperature_c,
            settle_secs: config.settle_secs,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce startup.  Telemetry is available immediately; the motion
    /// path goes live once the gate elapses.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            settle_secs: self.settle_secs,
        });
        info!(
            "AppService started (motion path settling for {}s)",
            self.settle_secs
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full loop pass.
    ///
    /// The `hw` parameter satisfies [`MotionSense`], [`SensorReader`] and
    /// [`IndicatorPort`] at once — this avoids a double mutable borrow
    /// while keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut (impl MotionSense + SensorReader + IndicatorPort),
        link: &mut impl ByteLink,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Motion path — raw sample → debounce → edge detection.
        //    Held off entirely while the gate is settling: the PIR output
        //    is garbage during warm-up and must not seed the filter.
        if self.gate.poll(now_ms) {
            let raw = hw.read_level();
            let stable = self.filter.update(raw, now_ms);
            match self.detector.update(stable) {
                Some(MotionEvent::Started) => {
                    hw.set_indicator(true);
                    sink.emit(&AppEvent::MotionStarted { at_ms: now_ms });
                }
                Some(MotionEvent::Ended) => {
                    hw.set_indicator(false);
                    sink.emit(&AppEvent::MotionEnded { at_ms: now_ms });
                }
                None => {}
            }
        }

        // 2. Telemetry path — at most one command byte per pass.
        match self.protocol.try_dispatch(link, hw) {
            Some(Reply::Reading(value)) => {
                sink.emit(&AppEvent::ReadingServed { value });
                if value > self.max_temperature_c {
                    warn!(
                        "temperature {value:.1} exceeds ceiling {:.1}",
                        self.max_temperature_c
                    );
                    sink.emit(&AppEvent::OverTemperature { value });
                }
            }
            Some(Reply::Fault) => sink.emit(&AppEvent::SensorFault),
            None => {}
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current motion state.
    pub fn motion_state(&self) -> MotionState {
        self.detector.state()
    }

    /// Whether the settling gate has elapsed.
    pub fn motion_live(&self) -> bool {
        self.gate.is_ready()
    }

    /// Total loop passes executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
