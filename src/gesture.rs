//! Idle/Active state machine shared by the drag and lasso controllers.
//!
//! A gesture is one pointer-down → move* → pointer-up cycle. While Active the
//! gesture owns an accumulator (the dragged node, the recorded lasso path).
//! Only one gesture can be Active per controller; a second `begin` is
//! rejected without touching the running accumulator.

use crate::error::GestureError;

#[derive(Debug, Clone, PartialEq)]
pub enum GestureState<T> {
    Idle,
    Active(T),
}

impl<T> Default for GestureState<T> {
    fn default() -> Self {
        GestureState::Idle
    }
}

impl<T> GestureState<T> {
    pub fn is_active(&self) -> bool {
        matches!(self, GestureState::Active(_))
    }

    /// Idle → Active. Rejected while a gesture is already running.
    pub fn begin(&mut self, accumulator: T) -> Result<(), GestureError> {
        if self.is_active() {
            return Err(GestureError::AlreadyActive);
        }
        *self = GestureState::Active(accumulator);
        Ok(())
    }

    pub fn accumulator(&self) -> Option<&T> {
        match self {
            GestureState::Active(acc) => Some(acc),
            GestureState::Idle => None,
        }
    }

    pub fn accumulator_mut(&mut self) -> Option<&mut T> {
        match self {
            GestureState::Active(acc) => Some(acc),
            GestureState::Idle => None,
        }
    }

    /// Active → Idle, handing back the accumulator.
    pub fn finish(&mut self) -> Option<T> {
        match std::mem::replace(self, GestureState::Idle) {
            GestureState::Active(acc) => Some(acc),
            GestureState::Idle => None,
        }
    }

    /// Drop any running gesture. Returns whether one was running.
    pub fn abort(&mut self) -> bool {
        self.finish().is_some()
    }
}
