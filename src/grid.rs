use serde::Serialize;

use crate::input::Direction;

/// Logical grid dimensions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < i32::from(self.width)
            && position.y < i32::from(self.height)
    }
}

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap(self.x, i32::from(bounds.width)),
            y: wrap(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighbouring cell in `direction`, wrapping at the edges.
    #[must_use]
    pub fn stepped(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
        .wrapped(bounds)
    }
}

/// Maps `value` into `[0, extent)` using Euclidean modulo.
///
/// Negative values wrap from the far edge, so `wrap(-1, 20) == 19`.
#[must_use]
pub fn wrap(value: i32, extent: i32) -> i32 {
    debug_assert!(extent > 0);
    value.rem_euclid(extent)
}
