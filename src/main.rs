use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, LoggingConfig};
use connect_four::game::GameEngine;
use connect_four::ui::{replay, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override player 1 label (also used as piece colour)
    #[arg(long)]
    player1: Option<String>,

    /// Override player 2 label (also used as piece colour)
    #[arg(long)]
    player2: Option<String>,

    /// Play these columns without the TUI, e.g. "3 3 4 2"
    #[arg(long)]
    replay: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(label) = cli.player1 {
        config.players.player1 = label;
    }
    if let Some(label) = cli.player2 {
        config.players.player2 = label;
    }
    config.validate().context("invalid configuration")?;

    let engine = GameEngine::new(
        config.board.width,
        config.board.height,
        config.players.player1.clone(),
        config.players.player2.clone(),
    )?;

    match cli.replay {
        Some(script) => run_replay(engine, &script, &config.logging),
        None => run_tui(engine, &config.logging),
    }
}

fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter))
}

fn run_replay(mut engine: GameEngine, script: &str, logging: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_writer(io::stderr)
        .init();

    let transcript = replay::replay(&mut engine, script);
    for line in &transcript.lines {
        println!("{line}");
    }
    println!();
    println!("{}", engine.board());

    if let Some((index, err)) = transcript.rejected {
        bail!("move {index} rejected: {err}");
    }
    Ok(())
}

fn run_tui(engine: GameEngine, logging: &LoggingConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    if let Some(path) = &logging.file {
        let log_file = std::fs::File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(logging))
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .init();
    }

    info!(
        width = engine.board().width(),
        height = engine.board().height(),
        "starting game"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(engine);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
