//! RoomWatch Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single cooperative loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter       SerialLink      LogEventSink          │
//! │  (PIR + probe + LED)   (ByteLink)      (EventSink)           │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                 │    │
//! │  │  Gate · Debounce · Detector · Protocol               │    │
//! │  └──────────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each loop pass: one raw PIR sample → debounce → edge detection, then
//! at most one telemetry dispatch, then sleep one sample interval.  The
//! only full-loop block is the implicit settling window handled by the
//! startup gate — and even that only holds off the motion path.
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
pub mod error;
mod pins;

pub mod app;
mod adapters;
mod drivers;
pub mod motion;
mod sensors;
pub mod telemetry;

// ── Imports ───────────────────────────────────────────────────
use anyhow::{Context, Result};
use log::info;

use adapters::hardware::{HardwareAdapter, TempProbe};
use adapters::log_sink::LogEventSink;
use adapters::serial_link::SerialLink;
use adapters::time::Esp32TimeAdapter;
use app::service::AppService;
use config::{ProbeKind, SystemConfig};
use drivers::status_led::StatusLed;
use sensors::analog_temp::AnalogTempSensor;
use sensors::mlx90614::Mlx90614;
use sensors::pir::PirSensor;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("RoomWatch v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — the node must never run
        // against an unread/garbage input.  Log and halt; the watchdog
        // resets the device after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = drivers::watchdog::Watchdog::new();

    // ── 3. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!(e))
        .context("configuration rejected")?;

    // ── 4. Construct adapters ─────────────────────────────────
    let probe = match config.probe {
        ProbeKind::Analog => TempProbe::Analog(AnalogTempSensor::new(pins::TEMP_ADC_GPIO)),
        ProbeKind::Infrared => TempProbe::Infrared(Mlx90614::new(pins::MLX90614_ADDR)),
    };
    let mut hw = HardwareAdapter::new(PirSensor::new(pins::PIR_GPIO), probe, StatusLed::new());
    let mut link = SerialLink::new();
    let mut log_sink = LogEventSink::new();
    let time = Esp32TimeAdapter::new();

    // ── 5. Construct app service ──────────────────────────────
    let mut app = AppService::new(&config, time.uptime_ms());
    app.start(&mut log_sink);

    info!("System ready. Entering sample loop.");

    // ── 6. Sample loop ────────────────────────────────────────
    loop {
        app.tick(time.uptime_ms(), &mut hw, &mut link, &mut log_sink);

        // Feed watchdog on every iteration.
        watchdog.feed();

        std::thread::sleep(std::time::Duration::from_millis(u64::from(
            config.sample_interval_ms,
        )));
    }
}
