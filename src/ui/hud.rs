use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::THEME;
use crate::game::Snapshot;

/// Renders the single status row under the play field.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) {
    frame.render_widget(
        Paragraph::new(hud_line(snapshot)).alignment(Alignment::Center),
        area,
    );
}

/// Length | Speed | Score | Hi
#[must_use]
pub fn hud_line(snapshot: &Snapshot) -> Line<'static> {
    let fields = [
        ("Length", snapshot.snake.len().to_string()),
        ("Speed", format!("{}ms", snapshot.tick_interval_ms)),
        ("Score", snapshot.score.to_string()),
        ("Hi", snapshot.high_score.to_string()),
    ];

    let label = Style::default().fg(THEME.hud_label);
    let value = Style::default()
        .fg(THEME.hud_value)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(fields.len() * 3);
    for (index, (name, text)) in fields.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", label));
        }
        spans.push(Span::styled(format!("{name} "), label));
        spans.push(Span::styled(text, value));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::hud_line;
    use crate::game::GameSession;

    #[test]
    fn hud_shows_length_speed_and_scores() {
        let mut session = GameSession::new_with_seed(1);
        session.world.score = 40;
        session.world.high_score = 90;

        let line = hud_line(&session.snapshot());
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();

        assert_eq!(text, "Length 3  Speed 150ms  Score 40  Hi 90");
    }
}
