use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{error, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::Snapshot;
use crate::renderer;

type GameTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// The raw-mode, alternate-screen terminal the board is drawn on.
///
/// Keys arrive unbuffered and unechoed while this is alive. Dropping it puts
/// the shell back the way it was, whether the loop quit, returned an error
/// or is unwinding.
pub struct GameScreen {
    terminal: GameTerminal,
}

impl GameScreen {
    /// Switches the terminal into game mode. Raw mode is undone again if any
    /// later step fails.
    pub fn open() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        Terminal::new(CrosstermBackend::new(stdout))
            .map(|terminal| Self { terminal })
            .inspect_err(|_| {
                let _ = restore_terminal();
            })
    }

    /// Draws one frame of `snapshot`.
    pub fn draw(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, snapshot))
            .map(|_| ())
    }
}

impl Drop for GameScreen {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            warn!("could not restore terminal: {err}");
        }
    }
}

/// Installs a panic hook that leaves game mode first, so the panic message
/// lands on a normal screen instead of the alternate one.
///
/// The message also goes to the log file, which is flushed before the
/// process can abort.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        error!("panic: {info}");
        log::logger().flush();
        default_hook(info);
    }));
}

/// Leaves raw mode, shows the cursor and returns to the main screen. Safe to
/// call when game mode was never entered.
pub fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), Show, LeaveAlternateScreen);
    raw.and(screen)
}
