mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use serpent::app::App;
use serpent::core::config::GameConfig;
use serpent::core::constants::{FRAME_MS, LOG_FILE};
use serpent::game::{Difficulty, GameMode};
use serpent::input::{handle_key, InputResult};
use serpent::menu::Menu;
use serpent::scores::{load_high_score, Leaderboard};
use serpent::utils::{build_info, persistence};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

/// Options taken from the command line.
struct CliOptions {
    mode: GameMode,
    difficulty: Difficulty,
}

fn print_help() {
    println!("Serpent - Terminal Snake\n");
    println!("Usage: serpent [options]\n");
    println!("Options:");
    println!("  --mode <classic|modern|campaign>  Preselect the game mode");
    println!("  --difficulty <1-8>                Preselect the difficulty");
    println!("  --version                         Show version information");
    println!("  --help                            Show this help message");
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'serpent --help' for usage.");
    std::process::exit(1);
}

fn parse_args() -> CliOptions {
    let mut options = CliOptions {
        mode: GameMode::default(),
        difficulty: Difficulty::default(),
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--mode" => {
                let value = args.next().unwrap_or_default();
                options.mode = GameMode::from_arg(&value)
                    .unwrap_or_else(|| fail(&format!("Unknown game mode: {}", value)));
            }
            "--difficulty" => {
                let value = args.next().unwrap_or_default();
                options.difficulty = Difficulty::from_arg(&value)
                    .unwrap_or_else(|| fail(&format!("Difficulty must be 1-8, got: {}", value)));
            }
            other => fail(&format!("Unknown option: {}", other)),
        }
    }
    options
}

/// Log to ~/.serpent/serpent.log; the terminal UI owns stdout.
fn init_logging() {
    let Ok(path) = persistence::save_path(LOG_FILE) else {
        return;
    };
    if let Ok(file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
    }
}

fn main() -> io::Result<()> {
    let options = parse_args();
    init_logging();
    log::info!("Starting {}", build_info::version_line());

    let config = GameConfig::load();
    let menu = Menu::new(options.difficulty, options.mode);
    let mut app = App::new(config, menu, Leaderboard::load(), load_high_score());
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let frame_time = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &app))?;

        if event::poll(frame_time.saturating_sub(last_frame.elapsed()))? {
            if let Event::Key(key_event) = event::read()? {
                if handle_key(key_event, &mut app, &mut rng) == InputResult::Quit {
                    break;
                }
            }
        }

        let dt_ms = last_frame.elapsed().as_millis() as u64;
        if dt_ms >= FRAME_MS {
            last_frame = Instant::now();
            if let Some(summary) = app.update(dt_ms, &mut rng) {
                app.save_scores(&summary);
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    log::info!("Exiting");
    println!("Thanks for playing! High score: {}", app.high_score);

    Ok(())
}
