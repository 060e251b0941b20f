use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use grid_snake::app::App;
use grid_snake::config::GameConfig;
use grid_snake::error::AppError;
use grid_snake::game::Session;
use grid_snake::input::{map_key, GameInput};
use grid_snake::logging;
use grid_snake::terminal_runtime::{install_panic_hook, GameScreen};
use log::{info, LevelFilter};

/// Upper bound on one input wait, so resizes redraw promptly.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(
    version,
    about,
    after_help = "The default 80x80 grid needs a terminal of at least 82 columns by 43 rows.\n\
                  On smaller terminals pass --width/--height, e.g. `--width 30 --height 20`."
)]
struct Cli {
    /// JSON file with game tunables; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells (default 80). Each cell is one column, plus two for the border.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells (default 80). Each cell is half a row, plus two border rows and one for the HUD.
    #[arg(long)]
    height: Option<u16>,

    /// Seed food placement for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long = "log-level", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, cli.log_level)?;

    let config = load_config(&cli)?;
    info!(
        "starting with {}x{} grid, snake length {}",
        config.grid_width, config.grid_height, config.initial_snake_length
    );

    let session = match cli.seed {
        Some(seed) => Session::new_with_seed(config, seed),
        None => Session::new(config),
    };
    let mut app = App::new(session);

    install_panic_hook();
    let mut screen = GameScreen::open()?;

    loop {
        screen.draw(&app.snapshot())?;

        let wait = app
            .time_until_tick(Instant::now())
            .map_or(FRAME_INTERVAL, |until| until.min(FRAME_INTERVAL));

        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key, app.session().phase) {
                    Some(GameInput::Quit) => break,
                    Some(input) => app.handle_input(input, Instant::now()),
                    None => {}
                }
            }
        }

        app.update(Instant::now());
    }

    info!("quit with score {}", app.session().score);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig, AppError> {
    let mut config = match &cli.config {
        Some(path) => {
            let config = GameConfig::load(path)?;
            info!("loaded config from {}", path.display());
            config
        }
        None => GameConfig::default(),
    };

    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }

    config.validate()?;
    Ok(config)
}
