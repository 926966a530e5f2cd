//! Terminal memory game.
//!
//! Type a card number to flip it, `r` to restart, `q` to quit. An empty
//! line refreshes the timer.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use memory_match::{Deck, GameConfig, Session, SystemClock};

const DEFAULT_FLIP_DELAY_MS: f64 = 1000.0;

/// Play the memory game in the terminal
#[derive(Parser)]
#[command(name = "memory")]
#[command(about = "Flip cards two at a time and find every pair", long_about = None)]
#[command(version)]
struct Cli {
    /// Pause in ms before a flipped pair is compared (350-3000) [default: 1000]
    #[arg(long)]
    flip_delay: Option<String>,

    /// Shuffle seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file; --flip-delay and --seed override it
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut session = Session::start(&Deck::languages(), &config, SystemClock::new());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    show(&mut session, &mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        match line.trim() {
            "q" | "quit" => break,
            "r" | "restart" => session.game_mut().reset(),
            "" => {}
            other => match other.parse::<usize>() {
                Ok(position) => {
                    session.game_mut().click_position(position);
                    wait_for_resolution(&mut session, &mut stdout)?;
                }
                Err(_) => writeln!(stdout, "unknown command: {other}")?,
            },
        }
        session.game_mut().poll();
        show(&mut session, &mut stdout)?;
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            GameConfig::from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    config = match (&cli.flip_delay, &cli.config) {
        (Some(text), _) => config.with_flip_delay_text(text),
        (None, None) => config.with_flip_delay(DEFAULT_FLIP_DELAY_MS),
        (None, Some(_)) => config,
    };
    let seed = match cli.seed {
        Some(seed) => seed,
        None if cli.config.is_some() => config.seed,
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(config.seed),
    };
    Ok(config.with_seed(seed))
}

/// Show both faces for the flip delay, then let the game compare them.
fn wait_for_resolution(session: &mut Session<SystemClock>, out: &mut impl Write) -> Result<()> {
    let Some(due) = session.game().resolution_due() else {
        return Ok(());
    };
    show(session, out)?;
    let now = session.game().now();
    thread::sleep(Duration::from_millis(due.saturating_sub(now)));
    Ok(())
}

fn show(session: &mut Session<SystemClock>, out: &mut impl Write) -> Result<()> {
    for notice in session.take_notices() {
        writeln!(out, "warning: {notice}")?;
    }
    write!(out, "\n{}", session.render())?;
    if session.game().is_won() {
        writeln!(out, "r to play again, q to quit")?;
    }
    out.flush()?;
    Ok(())
}
