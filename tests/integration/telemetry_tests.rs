//! Integration tests: AppService → telemetry path → wire replies.

use roomwatch::app::events::AppEvent;
use roomwatch::app::ports::ByteLink;
use roomwatch::app::service::AppService;
use roomwatch::config::{Calibration, SystemConfig};
use roomwatch::error::SensorError;

use crate::mock_hw::{CaptureSink, MockHardware, MockLink};

fn config() -> SystemConfig {
    SystemConfig {
        settle_secs: 0,
        ..SystemConfig::default()
    }
}

#[test]
fn request_served_during_settling_window() {
    // Telemetry has no warm-up: a request in the first second is served
    // even though the motion path is still gated.
    let cfg = SystemConfig {
        settle_secs: 30,
        ..SystemConfig::default()
    };
    let mut app = AppService::new(&cfg, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    hw.reading = Ok(614.4);
    link.push_bytes(b"R");
    app.tick(100, &mut hw, &mut link, &mut sink);

    assert!(!app.motion_live());
    assert_eq!(link.written_str(), "270.00\n");
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::ReadingServed { .. })));
}

#[test]
fn reply_uses_calibration_and_precision_from_config() {
    let cfg = SystemConfig {
        calibration: Calibration {
            scale: 450.0,
            divisor: 614.4,
            offset: -70.0,
        },
        reply_decimals: 1,
        ..config()
    };
    let mut app = AppService::new(&cfg, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    // 614.4 * 450 / 614.4 - 70 = 380.0
    hw.reading = Ok(614.4);
    link.push_bytes(b"R");
    app.tick(0, &mut hw, &mut link, &mut sink);
    assert_eq!(link.written_str(), "380.0\n");
}

#[test]
fn junk_bytes_never_touch_the_sensor() {
    let cfg = config();
    let mut app = AppService::new(&cfg, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    link.push_bytes(b"\nTZ\x00\xff");
    for t in 0..5u64 {
        app.tick(t * 20, &mut hw, &mut link, &mut sink);
    }

    assert_eq!(hw.reads, 0);
    assert!(link.written.is_empty());
    assert!(sink.events.is_empty());
}

#[test]
fn at_most_one_request_per_pass() {
    let cfg = config();
    let mut app = AppService::new(&cfg, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    link.push_bytes(b"RR");
    app.tick(0, &mut hw, &mut link, &mut sink);
    assert_eq!(hw.reads, 1);
    app.tick(20, &mut hw, &mut link, &mut sink);
    assert_eq!(hw.reads, 2);
    assert_eq!(link.written_str(), "270.00\n270.00\n");
}

#[test]
fn sensor_fault_surfaces_as_err_reply_and_event() {
    let cfg = config();
    let mut app = AppService::new(&cfg, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    hw.reading = Err(SensorError::AdcReadFailed);
    link.push_bytes(b"R");
    app.tick(0, &mut hw, &mut link, &mut sink);

    assert_eq!(link.written_str(), "ERR\n");
    assert!(sink.events.contains(&AppEvent::SensorFault));
    // At-most-once: the failed request is consumed, not retried.
    app.tick(20, &mut hw, &mut link, &mut sink);
    assert_eq!(hw.reads, 1);
}

#[test]
fn overheat_reading_raises_event() {
    let cfg = config();
    let mut app = AppService::new(&cfg, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    // 614.4 raw → 270.0, past the 180.0 default ceiling.
    hw.reading = Ok(614.4);
    link.push_bytes(b"R");
    app.tick(0, &mut hw, &mut link, &mut sink);
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::OverTemperature { .. })));

    // A cool reading raises none.
    sink.events.clear();
    hw.reading = Ok(250.0);
    link.push_bytes(b"R");
    app.tick(20, &mut hw, &mut link, &mut sink);
    assert!(sink
        .events
        .iter()
        .all(|e| !matches!(e, AppEvent::OverTemperature { .. })));
}

#[test]
fn link_write_failure_still_consumes_the_request() {
    let cfg = config();
    let mut app = AppService::new(&cfg, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    link.fail_writes = true;
    link.push_bytes(b"R");
    app.tick(0, &mut hw, &mut link, &mut sink);
    assert_eq!(link.available(), 0);
    assert_eq!(hw.reads, 1);
    // The reading still counts as served domain-side.
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::ReadingServed { .. })));
}
