use std::collections::HashSet;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::config::GLYPH_HALF_UPPER;
use crate::game::{GamePhase, Snapshot};
use crate::grid::{Cell, Grid};
use crate::palette::PaletteColor;
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    centered_rect, render_game_over_menu, render_pause_menu, render_start_menu,
    render_victory_menu,
};

const PLAY_BG: Color = Color::Black;
const FOOD_COLOR: Color = Color::Red;
const BORDER_COLOR: Color = Color::Gray;

/// Renders the full frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot) {
    let area = frame.area();

    if snapshot.phase == GamePhase::Menu {
        render_start_menu(frame, area);
        return;
    }

    let play_area = render_hud(frame, area, snapshot);
    render_board(frame, play_area, snapshot);

    match snapshot.phase {
        GamePhase::Playing if snapshot.paused => render_pause_menu(frame, play_area),
        GamePhase::GameOver => {
            render_game_over_menu(frame, play_area, snapshot.score, snapshot.death_reason);
        }
        GamePhase::Victory => render_victory_menu(frame, play_area, snapshot.score),
        _ => {}
    }
}

/// Terminal size of the bordered board: two grid rows per terminal row.
#[must_use]
pub fn board_size(grid: Grid) -> (u16, u16) {
    (
        grid.width.saturating_add(2),
        grid.height.div_ceil(2).saturating_add(2),
    )
}

fn render_board(frame: &mut Frame<'_>, play_area: Rect, snapshot: &Snapshot) {
    let (width, height) = board_size(snapshot.grid);
    if width > play_area.width || height > play_area.height {
        render_too_small(frame, play_area, width, height);
        return;
    }

    let board = centered_rect(play_area, width, height);
    let block = Block::bordered().border_style(Style::new().fg(BORDER_COLOR).bg(PLAY_BG));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    let snake: HashSet<Cell> = snapshot.cells.iter().copied().collect();
    let snake_color = palette_color(snapshot.color);
    let color_at = |cell: Cell| {
        if snake.contains(&cell) {
            snake_color
        } else if snapshot.food == Some(cell) {
            FOOD_COLOR
        } else {
            PLAY_BG
        }
    };

    let buffer = frame.buffer_mut();
    for row in 0..inner.height {
        for column in 0..inner.width {
            let x = i32::from(column);
            let y = i32::from(row) * 2;
            let upper = color_at(Cell::new(x, y));
            let lower = if y + 1 < i32::from(snapshot.grid.height) {
                color_at(Cell::new(x, y + 1))
            } else {
                PLAY_BG
            };

            buffer.set_string(
                inner.x + column,
                inner.y + row,
                GLYPH_HALF_UPPER,
                Style::new().fg(upper).bg(lower),
            );
        }
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {width}x{height}, have {}x{}", area.width, area.height)),
        Line::from("Resize, or start with a smaller --width/--height"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow)),
        area,
    );
}

/// Terminal color for a palette entry.
#[must_use]
pub fn palette_color(color: PaletteColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;
    use ratatui::Terminal;

    use super::{board_size, render};
    use crate::config::GameConfig;
    use crate::game::Session;
    use crate::grid::{Cell, Grid};
    use crate::input::GameInput;

    fn draw(session: &Session, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, &session.snapshot()))
            .expect("draw should succeed");
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn board_packs_two_rows_per_line() {
        assert_eq!(board_size(Grid::new(80, 80)), (82, 42));
        assert_eq!(board_size(Grid::new(10, 7)), (12, 6));
    }

    #[test]
    fn menu_shows_title_and_instructions() {
        let session = Session::new_with_seed(GameConfig::default(), 1);
        let terminal = draw(&session, 90, 30);
        let text = screen_text(&terminal);

        assert!(text.contains("SNAKE GAME"));
        assert!(text.contains("SPACEBAR"));
    }

    #[test]
    fn snake_cells_use_palette_color() {
        let config = GameConfig {
            initial_snake_length: 3,
            ..GameConfig::with_grid(10, 10)
        };
        let mut session = Session::new_with_seed(config, 2);
        session.apply_input(GameInput::StartGame);
        let terminal = draw(&session, 30, 12);

        let (width, height) = board_size(session.grid());
        let origin_x = (30 - width) / 2 + 1;
        let origin_y = (11 - height) / 2 + 1;
        let head = session.snake.head();
        assert_eq!(head, Cell::new(5, 5));

        // Row 5 is the lower half of terminal row 2.
        let cell = &terminal.backend().buffer()[(origin_x + 5, origin_y + 2)];
        assert_eq!(cell.bg, Color::Rgb(0, 255, 0));
    }

    #[test]
    fn small_terminal_gets_a_notice() {
        let mut session = Session::new_with_seed(GameConfig::default(), 3);
        session.apply_input(GameInput::StartGame);
        let text = screen_text(&draw(&session, 40, 10));

        assert!(text.contains("Terminal too small"));
    }
}
