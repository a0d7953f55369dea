use ratatui::style::Color;

use crate::grid::{GridSize, Position};
use crate::input::Direction;

/// Side length of the square board.
pub const GRID_SIZE: u16 = 20;

/// The fixed board every session plays on.
pub const GRID: GridSize = GridSize {
    width: GRID_SIZE,
    height: GRID_SIZE,
};

/// Starting body, head first.
pub const INITIAL_SNAKE: [Position; 3] = [
    Position::new(10, 10),
    Position::new(10, 11),
    Position::new(10, 12),
];

pub const INITIAL_DIRECTION: Direction = Direction::Up;

pub const INITIAL_FOOD: Position = Position::new(5, 5);

/// Tick interval of a fresh session in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 150;

/// Milliseconds shaved off the tick interval per food eaten.
pub const TICK_INTERVAL_STEP_MS: u64 = 5;

/// Fastest allowed tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Score awarded per food.
pub const FOOD_REWARD: u32 = 10;

/// Above this share of occupied cells food placement scans for free cells
/// instead of sampling.
pub const FULL_SCAN_OCCUPANCY_PERCENT: usize = 80;

/// Upper bound on one input poll so the frame keeps redrawing.
pub const FRAME_POLL_MS: u64 = 16;

/// Terminal columns used for one grid cell.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶▶";
pub const GLYPH_SNAKE_BODY: &str = "██";
pub const GLYPH_SNAKE_TAIL: &str = "▓▓";
pub const GLYPH_FOOD: &str = "◆◆";

/// Colours applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

pub const THEME: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border: Color::White,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};
