//! Driven adapters — implementations of the port traits against real
//! peripherals (or their host-side simulation stubs) plus the log sink
//! and monotonic clock.

pub mod hardware;
pub mod log_sink;
pub mod serial_link;
pub mod time;
