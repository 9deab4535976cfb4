//! Integration tests: AppService → motion path → events.
//!
//! All tests drive the service with a virtual clock — no real delays.

use roomwatch::app::events::AppEvent;
use roomwatch::app::service::AppService;
use roomwatch::config::SystemConfig;
use roomwatch::motion::MotionState;

use crate::mock_hw::{CaptureSink, MockHardware, MockLink};

/// Config with no settling delay and the scenario timing: samples every
/// 100 ms, debounce window 250 ms.
fn live_config() -> SystemConfig {
    SystemConfig {
        settle_secs: 0,
        debounce_window_ms: 250,
        sample_interval_ms: 100,
        ..SystemConfig::default()
    }
}

#[test]
fn start_announces_settling_window() {
    let config = SystemConfig::default();
    let mut app = AppService::new(&config, 0);
    let mut sink = CaptureSink::new();
    app.start(&mut sink);
    assert_eq!(
        sink.events,
        vec![AppEvent::Started {
            settle_secs: config.settle_secs
        }]
    );
}

#[test]
fn motion_path_held_off_while_settling() {
    let config = SystemConfig {
        settle_secs: 30,
        ..live_config()
    };
    let mut app = AppService::new(&config, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    // Raw input is garbage-high throughout warm-up; nothing may leak out.
    hw.level = true;
    for t in (0..30_000u64).step_by(100) {
        app.tick(t, &mut hw, &mut link, &mut sink);
    }
    assert!(!app.motion_live());
    assert_eq!(sink.count_motion_started(), 0);
    assert_eq!(app.motion_state(), MotionState::Idle);
    assert!(hw.indicator.is_empty());
}

#[test]
fn settled_input_still_needs_full_window_after_gate() {
    let config = SystemConfig {
        settle_secs: 1,
        ..live_config()
    };
    let mut app = AppService::new(&config, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    hw.level = true;
    // Gate opens at t=1000; the high level must still persist a full
    // window past the first live sample before an event fires.
    app.tick(1_000, &mut hw, &mut link, &mut sink);
    assert!(app.motion_live());
    assert_eq!(sink.count_motion_started(), 0);

    app.tick(1_100, &mut hw, &mut link, &mut sink);
    app.tick(1_200, &mut hw, &mut link, &mut sink);
    assert_eq!(sink.count_motion_started(), 0);
    // 1300 - 1000 = 300 > 250 — now it latches.
    app.tick(1_300, &mut hw, &mut link, &mut sink);
    assert_eq!(sink.count_motion_started(), 1);
}

#[test]
fn scenario_one_started_on_sixth_sample() {
    // Samples every 100 ms, window 250 ms, raw [f,f,t,t,t,t]:
    // the level change lands at t=200, so 300 ms have elapsed at t=500 —
    // exactly one Started, on the sixth sample.
    let config = live_config();
    let mut app = AppService::new(&config, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    let raw = [false, false, true, true, true, true];
    for (i, &level) in raw.iter().enumerate() {
        hw.level = level;
        app.tick(i as u64 * 100, &mut hw, &mut link, &mut sink);
    }

    assert_eq!(sink.count_motion_started(), 1);
    assert_eq!(sink.count_motion_ended(), 0);
    assert!(sink
        .events
        .contains(&AppEvent::MotionStarted { at_ms: 500 }));
    assert!(hw.indicator_on());
}

#[test]
fn scenario_shorter_window_fires_on_fifth_sample() {
    // Same sequence with a 199 ms window: 200 ms elapsed at t=400.
    let config = SystemConfig {
        debounce_window_ms: 199,
        ..live_config()
    };
    let mut app = AppService::new(&config, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    let raw = [false, false, true, true, true, true];
    for (i, &level) in raw.iter().enumerate() {
        hw.level = level;
        app.tick(i as u64 * 100, &mut hw, &mut link, &mut sink);
    }

    assert_eq!(sink.count_motion_started(), 1);
    assert!(sink
        .events
        .contains(&AppEvent::MotionStarted { at_ms: 400 }));
}

#[test]
fn full_motion_cycle_emits_one_event_per_edge() {
    let config = live_config();
    let mut app = AppService::new(&config, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    let mut t = 0u64;
    let run = |app: &mut AppService,
                   hw: &mut MockHardware,
                   link: &mut MockLink,
                   sink: &mut CaptureSink,
                   level: bool,
                   samples: usize,
                   t: &mut u64| {
        hw.level = level;
        for _ in 0..samples {
            app.tick(*t, hw, link, sink);
            *t += 100;
        }
    };

    run(&mut app, &mut hw, &mut link, &mut sink, false, 5, &mut t);
    run(&mut app, &mut hw, &mut link, &mut sink, true, 10, &mut t);
    assert_eq!(app.motion_state(), MotionState::Active);
    run(&mut app, &mut hw, &mut link, &mut sink, false, 10, &mut t);
    assert_eq!(app.motion_state(), MotionState::Idle);

    // One edge each way, regardless of how long the level was sustained.
    assert_eq!(sink.count_motion_started(), 1);
    assert_eq!(sink.count_motion_ended(), 1);
    assert_eq!(hw.indicator, vec![true, false]);
}

#[test]
fn chatter_faster_than_window_stays_silent() {
    let config = live_config();
    let mut app = AppService::new(&config, 0);
    let mut hw = MockHardware::new();
    let mut link = MockLink::new();
    let mut sink = CaptureSink::new();

    // Toggle on every sample: the 100 ms chatter never survives 250 ms.
    for i in 0..100u64 {
        hw.level = i % 2 == 0;
        app.tick(i * 100, &mut hw, &mut link, &mut sink);
    }
    assert_eq!(sink.count_motion_started(), 0);
    assert_eq!(sink.count_motion_ended(), 0);
}
