use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::logging;
use connect_four::ui::App;

/// Play Connect Four in the terminal against a simple AI.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a heuristic AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the pause before the AI's move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed the AI's tie-break RNG for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = logging::init().context("starting logger")?;

    // Load configuration and apply CLI overrides
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(delay_ms) = cli.delay_ms {
        config.ai.delay_ms = delay_ms;
    }
    if let Some(seed) = cli.seed {
        config.ai.seed = Some(seed);
    }
    config.validate().context("validating config")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running the game loop")
}
