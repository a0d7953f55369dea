use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{
    CELL_WIDTH, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, THEME,
};
use crate::game::{GameStatus, Snapshot};
use crate::grid::{GridSize, Position};
use crate::input::Direction;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

const HUD_HEIGHT: u16 = 1;

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, bounds: GridSize) {
    let area = frame.area();
    let field_width = bounds.width * CELL_WIDTH + 2;
    let field_height = bounds.height + 2;

    if area.width < field_width || area.height < field_height + HUD_HEIGHT {
        render_too_small(frame, area, field_width, field_height + HUD_HEIGHT);
        return;
    }

    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(field_width),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, play_area, hud_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(field_height),
        Constraint::Length(HUD_HEIGHT),
        Constraint::Fill(1),
    ])
    .areas(column);

    let block = Block::bordered().border_style(Style::new().fg(THEME.border));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, bounds, snapshot.food);
    render_snake(frame, inner, bounds, snapshot);
    render_hud(frame, hud_area, snapshot);

    match snapshot.status {
        GameStatus::Ready => render_start_menu(frame, play_area, snapshot.high_score),
        GameStatus::Paused => render_pause_menu(frame, play_area),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            snapshot.score,
            snapshot.high_score,
            snapshot.game_over_reason,
        ),
        GameStatus::Running => {}
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {width}x{height}, have {}x{}", area.width, area.height)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, food: Position) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(THEME.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, snapshot: &Snapshot) {
    let last = snapshot.snake.len().saturating_sub(1);

    let buffer = frame.buffer_mut();
    for (index, segment) in snapshot.snake.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, bounds, *segment) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (
                head_glyph(snapshot.direction),
                Style::new()
                    .fg(THEME.snake_head)
                    .add_modifier(Modifier::BOLD),
            )
        } else if index == last {
            (GLYPH_SNAKE_TAIL, Style::new().fg(THEME.snake_tail))
        } else {
            (GLYPH_SNAKE_BODY, Style::new().fg(THEME.snake_body))
        };

        buffer.set_string(x, y, glyph, style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !bounds.contains(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use super::{logical_to_terminal, render};
    use crate::config::{GLYPH_FOOD, GLYPH_SNAKE_HEAD_UP, GRID};
    use crate::game::{GameSession, Snapshot};
    use crate::grid::Position;

    fn draw(snapshot: &Snapshot, width: u16, height: u16) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        terminal
            .draw(|frame| render(frame, snapshot, GRID))
            .expect("drawing to test backend");
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn ready_session_shows_start_menu() {
        let session = GameSession::new_with_seed(1);

        let text = draw(&session.snapshot(), 60, 30);

        assert!(text.contains("SNAKE"));
        assert!(text.contains("Length 3"));
    }

    #[test]
    fn running_session_draws_snake_and_food() {
        let mut session = GameSession::new_with_seed(2);
        session.toggle_pause();

        let text = draw(&session.snapshot(), 60, 30);

        assert!(text.contains(GLYPH_SNAKE_HEAD_UP));
        assert!(text.contains(GLYPH_FOOD));
        assert!(!text.contains("PAUSED"));
    }

    #[test]
    fn small_terminal_gets_a_size_hint() {
        let session = GameSession::new_with_seed(3);

        let text = draw(&session.snapshot(), 30, 10);

        assert!(text.contains("Terminal too small"));
    }

    #[test]
    fn cells_map_to_two_columns_each() {
        let inner = Rect::new(1, 1, 40, 20);

        assert_eq!(
            logical_to_terminal(inner, GRID, Position::new(0, 0)),
            Some((1, 1))
        );
        assert_eq!(
            logical_to_terminal(inner, GRID, Position::new(19, 19)),
            Some((39, 20))
        );
        assert_eq!(logical_to_terminal(inner, GRID, Position::new(20, 0)), None);
    }
}
