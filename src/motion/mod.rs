//! Motion subsystem — debounce filter, edge-triggered detector, and the
//! one-time startup settling gate.
//!
//! ```text
//! raw PIR level ──▶ DebounceFilter ──▶ MotionDetector ──▶ MotionEvent
//!                        ▲
//!                   StartupGate (holds the whole path off until settled)
//! ```
//!
//! All three are pure state owned by the application service and driven
//! with the caller's monotonic clock, one update per loop pass.

pub mod debounce;
pub mod detector;
pub mod gate;

pub use debounce::DebounceFilter;
pub use detector::{MotionDetector, MotionEvent, MotionState};
pub use gate::StartupGate;
