use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::collision::DeathReason;

const MENU_BG: Color = Color::Rgb(0x26, 0x14, 0x47);
const START_ACCENT: Color = Color::Rgb(0x07, 0xb5, 0x31);
const BUTTON_ACCENT: Color = Color::Rgb(0xff, 0xbe, 0x0b);

const INSTRUCTIONS: [&str; 6] = [
    "INSTRUCTIONS:",
    "• Use Arrow Keys or W, A, S, D to move.",
    "• Press SPACEBAR to Pause/Unpause.",
    "• Eat the red orbs to grow (and speed up!).",
    "• The snake changes color each time it eats!",
    "• Don't crash into walls or yourself.",
];

/// Draws the start screen over the whole area.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect) {
    frame.render_widget(Block::new().style(Style::new().bg(MENU_BG)), area);

    let body_width = widest(&INSTRUCTIONS);
    let [title_row, _, body_row, _, button_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(INSTRUCTIONS.len() as u16),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE GAME"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::bordered().border_style(Style::new().fg(Color::White))),
        centered_rect(title_row, 20, 3),
    );

    let body: Vec<Line> = INSTRUCTIONS.iter().map(|line| Line::from(*line)).collect();
    frame.render_widget(
        Paragraph::new(body).style(Style::default().fg(Color::White)),
        centered_rect(body_row, body_width, body_row.height),
    );

    let button = "[Enter] ENTER THE WORLD OF SNAKE";
    frame.render_widget(
        Paragraph::new(Line::from(button))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(START_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::bordered().border_style(Style::new().fg(START_ACCENT))),
        centered_rect(button_row, widest(&[button]) + 4, 3),
    );

    frame.render_widget(
        Paragraph::new(Line::from("[Q] Quit"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        footer_row,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let lines = [
        "PAUSED",
        "",
        "[Space] Resume",
        "[M] Back to Menu",
        "[Q] Quit",
    ];
    render_popup(frame, area, " pause ", &lines, Color::White);
}

/// Draws the game-over screen with the cause and the number of orbs eaten.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
) {
    let orbs = format!("You ate {score} orbs!");
    let lines = [
        "Game Over!",
        death_message(death_reason),
        orbs.as_str(),
        "",
        "[Enter] Play Again",
        "[M] Back to Menu",
        "[Q] Quit",
    ];
    render_popup(frame, area, " game over ", &lines, BUTTON_ACCENT);
}

/// Draws the board-full screen.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, score: u32) {
    let orbs = format!("You ate {score} orbs!");
    let lines = [
        "You Win!",
        "The snake fills the whole board.",
        orbs.as_str(),
        "",
        "[Enter] Play Again",
        "[M] Back to Menu",
        "[Q] Quit",
    ];
    render_popup(frame, area, " victory ", &lines, START_ACCENT);
}

/// Player-facing text for why the round ended.
#[must_use]
pub fn death_message(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "You hit the wall!",
        Some(DeathReason::SelfCollision) => "You ran into yourself!",
        None => "",
    }
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: &[&str], accent: Color) {
    let width = widest(lines).max(title.width() as u16) + 6;
    let height = lines.len() as u16 + 2;
    let popup = centered_rect(area, width, height);
    frame.render_widget(Clear, popup);

    let text: Vec<Line> = lines.iter().map(|line| Line::from(*line)).collect();
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::new().fg(accent)),
            ),
        popup,
    );
}

fn widest(lines: &[&str]) -> u16 {
    let width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
