use log::trace;
use serde::Serialize;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit `(dx, dy)` offset; `y` grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    TogglePause,
    /// Starts a fresh session, or restarts a finished one.
    Confirm,
    Reset,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Holds the pending direction between ticks.
///
/// Reversal checks run against the direction the simulation last applied,
/// not the last one submitted, so two quick turns between ticks can never
/// fold the head back into the neck.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct InputController {
    pending: Direction,
    last_applied: Direction,
}

impl InputController {
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            pending: direction,
            last_applied: direction,
        }
    }

    /// Accepts `direction` as pending unless it reverses the last applied one.
    ///
    /// Returns `false` when the request was ignored. Later submissions
    /// overwrite earlier ones; nothing is queued.
    pub fn submit(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.last_applied, direction) {
            trace!("ignoring reversal {direction:?} of {:?}", self.last_applied);
            return false;
        }

        self.pending = direction;
        true
    }

    /// Direction the next tick will move in.
    #[must_use]
    pub fn pending(&self) -> Direction {
        self.pending
    }

    /// Direction the previous tick moved in.
    #[must_use]
    pub fn last_applied(&self) -> Direction {
        self.last_applied
    }

    /// Records that the simulation moved in `direction`.
    pub fn mark_applied(&mut self, direction: Direction) {
        self.last_applied = direction;
    }
}
