//! Runner state shared by the player and the crowd.

/// Visible state of a runner (the player or a crowd member).
///
/// `Dead` and `Success` are terminal for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunnerState {
    #[default]
    Idle,
    Move,
    Dead,
    Success,
}

impl RunnerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunnerState::Dead | RunnerState::Success)
    }
}
