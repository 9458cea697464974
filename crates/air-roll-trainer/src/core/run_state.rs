/// Why the trainer is not acting this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InactiveReason {
    Disabled,
    IneligibleMode,
    NoVehicle,
    NoBall,
}

/// Derived each tick from the config snapshot and what the host reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Active,
    Inactive(InactiveReason),
}

impl RunState {
    pub fn is_active(self) -> bool {
        self == RunState::Active
    }
}

impl Default for RunState {
    fn default() -> Self {
        RunState::Inactive(InactiveReason::Disabled)
    }
}
