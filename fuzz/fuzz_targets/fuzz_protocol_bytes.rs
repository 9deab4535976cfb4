//! Fuzz target: `ProtocolHandler::try_dispatch`
//!
//! Drives arbitrary byte streams into the command dispatcher and asserts
//! that it never panics, drains the stream exactly one byte per call, and
//! only ever writes well-formed newline-terminated replies.
//!
//! cargo fuzz run fuzz_protocol_bytes

#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use roomwatch::app::ports::{ByteLink, SensorReader};
use roomwatch::config::Calibration;
use roomwatch::error::{LinkError, SensorError};
use roomwatch::telemetry::ProtocolHandler;

struct FuzzLink {
    inbound: VecDeque<u8>,
    written: Vec<u8>,
}

impl ByteLink for FuzzLink {
    fn available(&self) -> usize {
        self.inbound.len()
    }
    fn read_byte(&mut self) -> Option<u8> {
        self.inbound.pop_front()
    }
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), LinkError> {
        self.written.extend_from_slice(data);
        Ok(())
    }
}

/// Sensor whose result flips between ok and fault, seeded by the input.
struct FlakyReader {
    calls: usize,
    fault_every: usize,
}

impl SensorReader for FlakyReader {
    fn read(&mut self) -> Result<f32, SensorError> {
        self.calls += 1;
        if self.fault_every != 0 && self.calls % self.fault_every == 0 {
            Err(SensorError::AdcReadFailed)
        } else {
            Ok((self.calls as f32).mul_add(7.3, 1.0))
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let handler = ProtocolHandler::new(Calibration::default(), 2);
    let mut link = FuzzLink {
        inbound: data.iter().copied().collect(),
        written: Vec::new(),
    };
    let mut reader = FlakyReader {
        calls: 0,
        fault_every: data.first().map(|b| usize::from(*b)).unwrap_or(0),
    };

    let mut remaining = link.available();
    while link.available() > 0 {
        let _ = handler.try_dispatch(&mut link, &mut reader);
        assert_eq!(link.available(), remaining - 1, "must consume one byte");
        remaining -= 1;
    }

    // Every reply on the wire is a parseable decimal or the fault marker,
    // newline-terminated.
    let text = core::str::from_utf8(&link.written).expect("replies are ASCII");
    for line in text.lines() {
        assert!(
            line == "ERR" || line.parse::<f32>().is_ok(),
            "malformed reply: {line:?}"
        );
    }
    if !text.is_empty() {
        assert!(text.ends_with('\n'));
    }
});
