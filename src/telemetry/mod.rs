//! Telemetry subsystem — the on-demand temperature query/response exchange.
//!
//! Independent of the continuous motion path: the two share only the main
//! loop's cadence.  Available immediately at startup (a synchronous pull
//! has no power-on transient to wait out, unlike the PIR).

pub mod protocol;

pub use protocol::{ProtocolHandler, Reply, REQUEST_READING};
