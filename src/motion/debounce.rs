//! Temporal debounce filter for the raw PIR level.
//!
//! The PIR output chatters around transitions (and picks up mains noise on
//! long cable runs), so the raw level is only accepted once it has held
//! constant for longer than the configured window.
//!
//! The window is measured from the *last raw change*, not from the last
//! accepted value: a glitch shorter than the window restarts the clock and
//! is never latched, while two legitimate back-to-back transitions each
//! get through once they individually persist past the window.

/// Debounce state.  Owned by the motion path; updated once per loop pass
/// with the caller's monotonic clock — no hardware timing is baked in, so
/// tests drive it with a virtual clock.
#[derive(Debug, Clone, Copy)]
pub struct DebounceFilter {
    window_ms: u64,
    last_raw: bool,
    last_change_ms: u64,
    stable: bool,
}

impl DebounceFilter {
    /// `now_ms` seeds the change timestamp so the initial inactive level
    /// must also survive a full window before anything is accepted.
    pub fn new(window_ms: u64, now_ms: u64) -> Self {
        Self {
            window_ms,
            last_raw: false,
            last_change_ms: now_ms,
            stable: false,
        }
    }

    /// Feed one raw sample at time `now_ms`; returns the stabilised level.
    ///
    /// Total over all inputs.  A raw level oscillating faster than the
    /// window never updates the stable value — that is noise, not failure.
    pub fn update(&mut self, raw: bool, now_ms: u64) -> bool {
        if raw != self.last_raw {
            self.last_change_ms = now_ms;
            self.last_raw = raw;
        }
        if now_ms.wrapping_sub(self.last_change_ms) > self.window_ms {
            self.stable = raw;
        }
        self.stable
    }

    /// Current stabilised level without feeding a sample.
    pub fn stable(&self) -> bool {
        self.stable
    }
}
