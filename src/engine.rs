use log::{debug, trace};
use rand::Rng;

use crate::config::{
    FOOD_REWARD, INITIAL_FOOD, INITIAL_SNAKE, INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
    TICK_INTERVAL_STEP_MS,
};
use crate::food;
use crate::grid::{GridSize, Position};
use crate::input::InputController;
use crate::snake::Snake;

/// Board contents and counters advanced by [`step`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct World {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
    pub tick_interval_ms: u64,
}

impl World {
    /// Starting board for a fresh game, carrying over `high_score`.
    #[must_use]
    pub fn initial(high_score: u32) -> Self {
        Self {
            snake: Snake::from_segments(INITIAL_SNAKE),
            food: INITIAL_FOOD,
            score: 0,
            high_score,
            tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
        }
    }
}

/// What a single tick did to the world.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// Head advanced and the tail followed.
    Moved,
    /// Head landed on food; the snake grew and new food was placed.
    Ate { next_food: Position },
    /// Head would have entered an occupied cell. The world is untouched.
    Collided { at: Position },
    /// Snake grew into the last free cell, so no food could be placed.
    BoardFull,
}

impl StepOutcome {
    /// Returns true when this tick ends the game.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Collided { .. } | Self::BoardFull)
    }
}

/// Advances `world` by one tick in the controller's pending direction.
///
/// The collision test runs against the whole pre-move body, tail included,
/// so chasing the tail into the cell it is about to leave still counts as a
/// hit.
pub fn step<R: Rng + ?Sized>(
    world: &mut World,
    controller: &mut InputController,
    bounds: GridSize,
    rng: &mut R,
) -> StepOutcome {
    let direction = controller.pending();
    let next_head = world.snake.head().stepped(direction, bounds);

    if world.snake.occupies(next_head) {
        return StepOutcome::Collided { at: next_head };
    }

    let ate = next_head == world.food;
    world.snake.advance(next_head, ate);
    controller.mark_applied(direction);
    trace!("head -> ({}, {}) moving {direction:?}", next_head.x, next_head.y);

    if !ate {
        return StepOutcome::Moved;
    }

    world.score += FOOD_REWARD;
    world.high_score = world.high_score.max(world.score);
    world.tick_interval_ms = next_tick_interval_ms(world.tick_interval_ms);
    debug!(
        "food eaten: score {}, length {}, interval {}ms",
        world.score,
        world.snake.len(),
        world.tick_interval_ms
    );

    match food::place(rng, bounds, &world.snake.cells()) {
        Ok(next_food) => {
            world.food = next_food;
            StepOutcome::Ate { next_food }
        }
        Err(error) => {
            debug!("{error}");
            StepOutcome::BoardFull
        }
    }
}

/// Interval after one more food, clamped to [`MIN_TICK_INTERVAL_MS`].
#[must_use]
pub fn next_tick_interval_ms(current_ms: u64) -> u64 {
    current_ms
        .saturating_sub(TICK_INTERVAL_STEP_MS)
        .max(MIN_TICK_INTERVAL_MS)
}
