//! Start/stop toggle for the animation.
//!
//! While paused the tick source keeps running but no update is applied, so
//! the last drawn frame stays on screen.

use std::fmt;

/// Whether ticks advance the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// Ticks advance particles.
    #[default]
    Running,
    /// Ticks are ignored; particle state is preserved.
    Paused,
}

impl AnimationState {
    pub fn from_running(running: bool) -> Self {
        if running {
            Self::Running
        } else {
            Self::Paused
        }
    }

    pub fn is_running(self) -> bool {
        self == Self::Running
    }

    /// Flip the state and return the new value
    pub fn toggle(&mut self) -> Self {
        *self = Self::from_running(toggle(self.is_running()));
        tracing::info!(state = %self, "animation toggled");
        *self
    }
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Paused => f.write_str("paused"),
        }
    }
}

/// Flip a running flag
pub fn toggle(running: bool) -> bool {
    !running
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        assert!(AnimationState::default().is_running());
    }

    #[test]
    fn toggle_flips_flag() {
        assert!(!toggle(true));
        assert!(toggle(false));
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut state = AnimationState::Running;
        assert_eq!(state.toggle(), AnimationState::Paused);
        assert!(!state.is_running());
        assert_eq!(state.toggle(), AnimationState::Running);
        assert!(state.is_running());
    }

    #[test]
    fn display_names() {
        assert_eq!(AnimationState::Running.to_string(), "running");
        assert_eq!(AnimationState::Paused.to_string(), "paused");
    }
}
