//! Single-byte command / single-line reply telemetry protocol.
//!
//! The inbound channel is a raw byte stream with no framing: the only
//! recognised command is [`REQUEST_READING`]; every other byte (including
//! the `\n` that line-oriented hosts send after the command letter) is
//! silently discarded.  On a recognised command the handler synchronously
//! reads the sensor, applies the calibration transform, and writes exactly
//! one newline-terminated ASCII-decimal reply.
//!
//! Fire-and-forget: no acknowledgement, no retry, no checksum.  A failed
//! sensor read is reported once as a distinguished [`Reply::Fault`]
//! (`ERR\n` on the wire) — never substituted with a default numeric value.
//! The host re-issues the command if it wants another attempt.

use core::fmt::Write as _;

use log::warn;

use crate::app::ports::{ByteLink, SensorReader};
use crate::config::Calibration;

/// The one recognised command byte.  Host-side pollers send `"R\n"`.
pub const REQUEST_READING: u8 = b'R';

/// Wire text of a fault reply.
const FAULT_REPLY: &str = "ERR\n";

/// Outcome of a dispatched request, returned for event reporting and
/// assertion in tests.  The wire bytes have already been written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reply {
    /// Calibrated reading, in reporting units.
    Reading(f32),
    /// The sensor could not produce a value.
    Fault,
}

/// Stateless command dispatcher; calibration and precision come from the
/// system config at construction.
pub struct ProtocolHandler {
    calibration: Calibration,
    decimals: u8,
}

impl ProtocolHandler {
    pub fn new(calibration: Calibration, decimals: u8) -> Self {
        Self {
            calibration,
            decimals,
        }
    }

    /// Consume at most one inbound byte; dispatch if it is a command.
    ///
    /// Returns `None` when no byte was pending or the byte was not a
    /// recognised command — in both cases nothing is read from the sensor
    /// and nothing is written to the link.
    pub fn try_dispatch(
        &self,
        link: &mut impl ByteLink,
        reader: &mut impl SensorReader,
    ) -> Option<Reply> {
        if link.available() == 0 {
            return None;
        }
        let byte = link.read_byte()?;
        if byte != REQUEST_READING {
            return None;
        }

        let reply = match reader.read() {
            Ok(raw) => Reply::Reading(self.calibration.apply(raw)),
            Err(e) => {
                warn!("telemetry: sensor fault, sending ERR reply: {e}");
                Reply::Fault
            }
        };

        let wire = self.encode(&reply);
        if let Err(e) = link.write_bytes(wire.as_bytes()) {
            // Transport health is the collaborator's problem; the request
            // is still consumed (at-most-once).
            warn!("telemetry: reply write failed: {e}");
        }
        Some(reply)
    }

    /// Render a reply in wire format: fixed-precision decimal or `ERR`,
    /// newline-terminated, no label.
    pub fn encode(&self, reply: &Reply) -> heapless::String<64> {
        let mut out = heapless::String::new();
        match reply {
            Reply::Reading(value) => {
                if write!(out, "{:.*}\n", usize::from(self.decimals), value).is_err() {
                    // Only reachable if the value formats wider than the
                    // buffer; report it as a fault rather than truncating.
                    out.clear();
                    let _ = out.push_str(FAULT_REPLY);
                }
            }
            Reply::Fault => {
                let _ = out.push_str(FAULT_REPLY);
            }
        }
        out
    }
}
