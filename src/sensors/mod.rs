//! Sensor drivers — external collaborators behind the port traits.
//!
//! Each driver reports instantaneous raw values; filtering, calibration,
//! and fault policy live in the domain core.  Every driver is dual-target:
//! real peripherals on ESP-IDF, injectable atomics on the host.

pub mod analog_temp;
pub mod mlx90614;
pub mod pir;
