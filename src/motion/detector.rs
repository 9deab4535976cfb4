//! Edge-triggered motion state machine.
//!
//! Consumes the stabilised level from the debounce filter and reports
//! transitions only — sustained presence produces a single `Started`, no
//! matter how many identical samples follow.  Runs for the lifetime of
//! the process; there is no terminal state.

/// The two motion states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Idle,
    Active,
}

/// Events emitted on state transition, handed to the event sink by the
/// application service.  Exactly one per edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEvent {
    Started,
    Ended,
}

pub struct MotionDetector {
    state: MotionState,
}

impl MotionDetector {
    pub fn new() -> Self {
        Self {
            state: MotionState::Idle,
        }
    }

    /// Evaluate one stabilised sample.  Returns an event only on an edge.
    pub fn update(&mut self, stable: bool) -> Option<MotionEvent> {
        match (self.state, stable) {
            (MotionState::Idle, true) => {
                self.state = MotionState::Active;
                Some(MotionEvent::Started)
            }
            (MotionState::Active, false) => {
                self.state = MotionState::Idle;
                Some(MotionEvent::Ended)
            }
            _ => None,
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }
}

impl Default for MotionDetector {
    fn default() -> Self {
        Self::new()
    }
}
