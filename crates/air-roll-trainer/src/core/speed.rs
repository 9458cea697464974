//! Game-speed slowdown while the trainer is active.
//!
//! The applied rate is 1.0 whenever the trainer is inactive and
//! `clamp(slowdown, 5, 100) / 100` while it is active.

use crate::api::host::Host;
use crate::core::run_state::RunState;

pub const NORMAL_RATE: f32 = 1.0;
pub const MIN_SLOWDOWN_PERCENT: f32 = 5.0;
pub const MAX_SLOWDOWN_PERCENT: f32 = 100.0;

/// Game-time rate for a slowdown percentage, clamped into [5, 100] first.
pub fn slowdown_rate(percent: f32) -> f32 {
    percent.clamp(MIN_SLOWDOWN_PERCENT, MAX_SLOWDOWN_PERCENT) / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedState {
    /// Game runs at [`NORMAL_RATE`].
    Normal,
    /// Game runs at `rate`, last applied successfully.
    Slowed { rate: f32 },
}

#[derive(Debug, Clone)]
pub struct SpeedControl {
    state: SpeedState,
}

impl SpeedControl {
    pub fn new() -> Self {
        Self {
            state: SpeedState::Normal,
        }
    }

    pub fn state(&self) -> SpeedState {
        self.state
    }

    pub fn is_slowed(&self) -> bool {
        matches!(self.state, SpeedState::Slowed { .. })
    }

    /// Per-tick transition. Active ticks (re)apply the slowdown rate,
    /// inactive ticks restore normal speed if it is currently reduced.
    pub fn update(&mut self, host: &mut dyn Host, run: RunState, slowdown_percent: f32) {
        if run.is_active() {
            self.apply(host, slowdown_percent);
        } else {
            self.deactivate(host);
        }
    }

    /// Set the slowdown rate on the host. Stays in the current state when
    /// there is no session to apply it to.
    pub fn apply(&mut self, host: &mut dyn Host, slowdown_percent: f32) {
        let rate = slowdown_rate(slowdown_percent);
        if !host.set_game_time_rate(rate) {
            log::trace!("no game session, slowdown to {rate} skipped");
            return;
        }
        match self.state {
            SpeedState::Normal => log::info!("game speed slowed to {rate}"),
            SpeedState::Slowed { rate: previous } if previous != rate => {
                log::info!("game speed changed from {previous} to {rate}")
            }
            SpeedState::Slowed { .. } => {}
        }
        self.state = SpeedState::Slowed { rate };
    }

    /// Restore normal speed once, if it is currently reduced.
    pub fn deactivate(&mut self, host: &mut dyn Host) {
        if self.is_slowed() {
            self.reset(host);
        }
    }

    /// Unconditionally restore normal speed. Safe to call in any state;
    /// a missing session makes it a no-op.
    pub fn reset(&mut self, host: &mut dyn Host) {
        if !host.set_game_time_rate(NORMAL_RATE) {
            log::trace!("no game session, speed reset skipped");
        }
        if self.is_slowed() {
            log::info!("game speed restored to {NORMAL_RATE}");
        }
        self.state = SpeedState::Normal;
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::new()
    }
}
