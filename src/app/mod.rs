//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the RoomWatch node:
//! startup gating, debounced motion detection, and telemetry dispatch.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
