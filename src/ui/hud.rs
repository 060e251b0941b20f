use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::Snapshot;
use crate::renderer::palette_color;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let [score_area, stats_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Min(0)]).areas(hud_area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" Score: {}", snapshot.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))),
        score_area,
    );

    frame.render_widget(
        Paragraph::new(stats_line(snapshot))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        stats_area,
    );

    play_area
}

fn stats_line(snapshot: &Snapshot) -> Line<'static> {
    Line::from(vec![
        Span::raw("Length: "),
        Span::styled(
            snapshot.cells.len().to_string(),
            Style::default().fg(palette_color(snapshot.color)),
        ),
        Span::raw(" │ "),
        Span::raw(format!("Tick: {} ms ", snapshot.tick_interval_ms)),
    ])
}
