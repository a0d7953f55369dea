use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::config::{GRID, INITIAL_DIRECTION};
use crate::engine::{self, StepOutcome, World};
use crate::grid::{GridSize, Position};
use crate::input::{Direction, GameInput, InputController};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum GameStatus {
    /// Fresh session waiting for its first move.
    Ready,
    Running,
    Paused,
    GameOver,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum GameOverReason {
    SelfCollision,
    BoardFull,
}

/// Read-only view of a session for renderers and the snapshot feed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub snake: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
    pub tick_interval_ms: u64,
    pub direction: Direction,
    pub status: GameStatus,
    pub is_paused: bool,
    pub is_game_over: bool,
    pub game_over_reason: Option<GameOverReason>,
}

/// Complete mutable state of one play session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub world: World,
    pub status: GameStatus,
    pub game_over_reason: Option<GameOverReason>,
    pub tick_count: u64,
    controller: InputController,
    bounds: GridSize,
    rng: StdRng,
}

impl GameSession {
    /// Creates a ready session with an entropy-seeded food RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible play.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        info!("new session on a {}x{} board", GRID.width, GRID.height);
        Self {
            world: World::initial(0),
            status: GameStatus::Ready,
            game_over_reason: None,
            tick_count: 0,
            controller: InputController::new(INITIAL_DIRECTION),
            bounds: GRID,
            rng,
        }
    }

    /// Reinitializes everything except the high score and the RNG.
    pub fn reset(&mut self) {
        info!(
            "session reset (score {}, high score {})",
            self.world.score, self.world.high_score
        );
        self.world = World::initial(self.world.high_score);
        self.status = GameStatus::Ready;
        self.game_over_reason = None;
        self.tick_count = 0;
        self.controller = InputController::new(INITIAL_DIRECTION);
    }

    /// Advances simulation by one tick. Does nothing unless running.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if self.status != GameStatus::Running {
            return None;
        }

        self.tick_count += 1;
        let outcome = engine::step(
            &mut self.world,
            &mut self.controller,
            self.bounds,
            &mut self.rng,
        );

        if outcome.is_terminal() {
            let reason = match outcome {
                StepOutcome::BoardFull => GameOverReason::BoardFull,
                _ => GameOverReason::SelfCollision,
            };
            info!(
                "game over after {} ticks: {reason:?}, score {}",
                self.tick_count, self.world.score
            );
            self.status = GameStatus::GameOver;
            self.game_over_reason = Some(reason);
        }

        Some(outcome)
    }

    /// Forwards a direction request to the reversal guard.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.controller.submit(direction)
    }

    /// Starts or resumes a waiting session, pauses a running one.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Ready | GameStatus::Paused => GameStatus::Running,
            GameStatus::Running => GameStatus::Paused,
            GameStatus::GameOver => return,
        };
        debug!("status -> {:?}", self.status);
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                self.set_direction(direction);
            }
            GameInput::TogglePause => self.toggle_pause(),
            GameInput::Confirm => match self.status {
                GameStatus::Ready => self.toggle_pause(),
                GameStatus::GameOver => self.reset(),
                GameStatus::Running | GameStatus::Paused => {}
            },
            GameInput::Reset => self.reset(),
            GameInput::Quit => {}
        }
    }

    /// Returns true while ticks should be scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self.status, GameStatus::Ready | GameStatus::Paused)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Delay before the next tick at the current speed.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.world.tick_interval_ms)
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Copies the current state into an immutable [`Snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.world.snake.segments().copied().collect(),
            food: self.world.food,
            score: self.world.score,
            high_score: self.world.high_score,
            tick_interval_ms: self.world.tick_interval_ms,
            direction: self.controller.last_applied(),
            status: self.status,
            is_paused: self.is_paused(),
            is_game_over: self.is_game_over(),
            game_over_reason: self.game_over_reason,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{GameOverReason, GameSession, GameStatus};
    use crate::config::{
        INITIAL_FOOD, INITIAL_SNAKE, INITIAL_TICK_INTERVAL_MS, TICK_INTERVAL_STEP_MS,
    };
    use crate::engine::StepOutcome;
    use crate::grid::Position;
    use crate::input::{Direction, GameInput};
    use crate::snake::Snake;

    #[test]
    fn new_session_is_ready_and_paused() {
        let session = GameSession::new_with_seed(1);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.status, GameStatus::Ready);
        assert!(snapshot.is_paused);
        assert!(!snapshot.is_game_over);
        assert_eq!(snapshot.snake, INITIAL_SNAKE.to_vec());
        assert_eq!(snapshot.food, INITIAL_FOOD);
        assert_eq!(snapshot.direction, Direction::Up);
        assert_eq!(snapshot.tick_interval_ms, INITIAL_TICK_INTERVAL_MS);
    }

    #[test]
    fn step_is_a_no_op_while_paused() {
        let mut session = GameSession::new_with_seed(2);
        let before = session.snapshot();

        assert_eq!(session.step(), None);
        assert_eq!(session.snapshot(), before);

        session.toggle_pause();
        session.toggle_pause();
        assert_eq!(session.status, GameStatus::Paused);
        assert_eq!(session.step(), None);
    }

    #[test]
    fn toggle_pause_cycles_running_and_paused() {
        let mut session = GameSession::new_with_seed(3);

        session.toggle_pause();
        assert!(session.is_running());

        session.toggle_pause();
        assert_eq!(session.status, GameStatus::Paused);

        session.toggle_pause();
        assert!(session.is_running());
    }

    #[test]
    fn self_collision_ends_the_game_and_blocks_resume() {
        let mut session = GameSession::new_with_seed(4);
        // Turning Left runs into the tail at (4,5).
        session.world.snake = Snake::from_segments([
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(4, 6),
            Position::new(4, 5),
        ]);
        assert!(session.set_direction(Direction::Left));
        session.toggle_pause();

        let outcome = session.step();

        assert!(matches!(outcome, Some(StepOutcome::Collided { .. })));
        assert!(session.is_game_over());
        assert_eq!(session.game_over_reason, Some(GameOverReason::SelfCollision));
        assert_eq!(session.world.snake.len(), 4);
        assert_eq!(session.world.score, 0);

        session.toggle_pause();
        assert!(session.is_game_over());
        assert_eq!(session.step(), None);
    }

    #[test]
    fn reset_keeps_high_score_only() {
        let mut session = GameSession::new_with_seed(5);
        session.toggle_pause();
        session.step();
        session.world.score = 50;
        session.world.high_score = 30;
        session.status = GameStatus::GameOver;

        session.reset();
        let snapshot = session.snapshot();

        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.high_score, 30);
        assert!(!snapshot.is_game_over);
        assert!(snapshot.is_paused);
        assert_eq!(snapshot.status, GameStatus::Ready);
        assert_eq!(snapshot.snake, INITIAL_SNAKE.to_vec());
        assert_eq!(snapshot.food, INITIAL_FOOD);
        assert_eq!(snapshot.direction, Direction::Up);
        assert_eq!(snapshot.game_over_reason, None);
        assert_eq!(session.tick_count, 0);
    }

    fn assert_fresh(session: &GameSession, high_score: u32) {
        let snapshot = session.snapshot();

        assert_eq!(snapshot.status, GameStatus::Ready);
        assert_eq!(snapshot.snake, INITIAL_SNAKE.to_vec());
        assert_eq!(snapshot.food, INITIAL_FOOD);
        assert_eq!(snapshot.direction, Direction::Up);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.high_score, high_score);
    }

    #[test]
    fn reset_input_works_mid_game_and_while_paused() {
        let mut session = GameSession::new_with_seed(9);
        session.world.food = Position::new(10, 9);
        session.toggle_pause();
        session.step();
        session.world.food = Position::new(0, 0);
        assert!(session.set_direction(Direction::Left));
        session.step();
        assert_eq!(session.snapshot().direction, Direction::Left);
        assert!(session.is_running());

        session.apply_input(GameInput::Reset);
        assert_fresh(&session, 10);

        session.toggle_pause();
        session.step();
        session.toggle_pause();
        assert_eq!(session.status, GameStatus::Paused);

        session.apply_input(GameInput::Reset);
        assert_fresh(&session, 10);
    }

    #[test]
    fn confirm_starts_then_restarts() {
        let mut session = GameSession::new_with_seed(6);

        session.apply_input(GameInput::Confirm);
        assert!(session.is_running());

        session.apply_input(GameInput::Confirm);
        assert!(session.is_running());

        session.status = GameStatus::GameOver;
        session.apply_input(GameInput::Confirm);
        assert_eq!(session.status, GameStatus::Ready);
    }

    #[test]
    fn direction_input_rejects_reversal_until_applied() {
        let mut session = GameSession::new_with_seed(7);
        session.apply_input(GameInput::Direction(Direction::Down));
        session.apply_input(GameInput::TogglePause);
        session.step();

        assert_eq!(session.world.snake.head(), Position::new(10, 9));
    }

    #[test]
    fn high_score_follows_score_upwards() {
        let mut session = GameSession::new_with_seed(8);
        session.world.food = Position::new(10, 9);
        session.toggle_pause();

        session.step();

        assert_eq!(session.world.score, 10);
        assert_eq!(session.world.high_score, 10);
        assert_eq!(
            session.tick_interval().as_millis(),
            u128::from(INITIAL_TICK_INTERVAL_MS - TICK_INTERVAL_STEP_MS)
        );
    }
}
