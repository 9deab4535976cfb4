//! Startup settling gate.
//!
//! The PIR element needs tens of seconds after power-on before its output
//! means anything, so the motion path is held off until the gate elapses.
//! Earlier deployments blocked the whole process in a sleep for this;
//! here it is explicit timed state polled from the loop, so the telemetry
//! path stays responsive from the first iteration.

use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Settling { until_ms: u64 },
    Ready,
}

pub struct StartupGate {
    state: GateState,
}

impl StartupGate {
    pub fn new(settle_secs: u16, now_ms: u64) -> Self {
        Self {
            state: GateState::Settling {
                until_ms: now_ms + u64::from(settle_secs) * 1000,
            },
        }
    }

    /// Non-blocking readiness check.  Logs once on the transition.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.state {
            GateState::Settling { until_ms } => {
                if now_ms >= until_ms {
                    self.state = GateState::Ready;
                    info!("Startup gate elapsed — motion path live");
                    true
                } else {
                    false
                }
            }
            GateState::Ready => true,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state == GateState::Ready
    }
}
