use std::collections::{HashSet, VecDeque};

use crate::grid::Position;

/// Snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Self {
        let body: VecDeque<Position> = segments.into_iter().collect();
        debug_assert!(!body.is_empty(), "snake needs at least one segment");

        Self { body }
    }

    /// Pushes `head` on the front, dropping the tail unless `grow` is set.
    pub fn advance(&mut self, head: Position, grow: bool) {
        self.body.push_front(head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment, tail included, occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Collects every occupied cell.
    #[must_use]
    pub fn cells(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
