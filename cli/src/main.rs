//! Headless driver for the fibtile engine.
//!
//! Reads one command per line from stdin (or from `--moves`) and prints the resulting state after
//! each one, either as a text grid or as JSON lines for another program to render.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use fibtile_core::{Command, GameConfig, GameError, LateSpawnPolicy, PlayEngine};

use crate::input::{Input, parse_input, split_moves};

mod input;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read the game configuration from a JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cells along one side of the grid, overrides the config file
    #[arg(long)]
    size: Option<u8>,

    /// Keep spawning the initial value after continuing past a win
    #[arg(long)]
    fixed_late_spawns: bool,

    /// Print every state as a JSON line instead of a text grid
    #[arg(long)]
    json: bool,

    /// Play these comma separated commands instead of reading stdin
    #[arg(short, long)]
    moves: Option<String>,
}

struct Session<W: Write> {
    engine: PlayEngine,
    out: W,
    json: bool,
}

impl<W: Write> Session<W> {
    fn print(&mut self) -> anyhow::Result<()> {
        let snapshot = self.engine.snapshot();
        if self.json {
            render::write_json(&mut self.out, &snapshot, self.engine.config())
        } else {
            render::write_text(&mut self.out, &snapshot, self.engine.config())?;
            Ok(())
        }
    }

    fn handle(&mut self, token: &str) -> anyhow::Result<ControlFlow<()>> {
        let command = match parse_input(token) {
            Some(Input::Command(command)) => command,
            Some(Input::Quit) => return Ok(ControlFlow::Break(())),
            None => {
                log::debug!("Ignore unrecognized input {:?}", token);
                return Ok(ControlFlow::Continue(()));
            }
        };

        let before = self.engine.snapshot();
        let after = match self.engine.dispatch(command) {
            Ok(snapshot) => snapshot,
            Err(GameError::NotPaused) => {
                log::warn!("Nothing to continue, the game is not paused on a win");
                return Ok(ControlFlow::Continue(()));
            }
            Err(err) => return Err(err).with_context(|| format!("{command:?} failed")),
        };

        // blocked moves leave nothing new to show
        if after != before || !matches!(command, Command::Move(_)) {
            self.print()?;
        }
        if after.phase.is_finished() && !before.phase.is_finished() {
            log::info!(
                "Game over at score {} with best tile {}",
                after.score,
                self.engine.max_tile()
            );
        }
        Ok(ControlFlow::Continue(()))
    }
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if args.fixed_late_spawns {
        config.late_spawn = LateSpawnPolicy::Fixed;
    }
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = load_config(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let engine = PlayEngine::with_seed(config, seed).context("could not start a game")?;
    let mut session = Session {
        engine,
        out: io::stdout().lock(),
        json: args.json,
    };
    session.print()?;

    if let Some(moves) = &args.moves {
        for token in split_moves(moves) {
            if session.handle(token)?.is_break() {
                break;
            }
        }
    } else {
        for line in io::stdin().lock().lines() {
            if session.handle(&line?)?.is_break() {
                break;
            }
        }
    }

    log::info!(
        "Finished with score {} and best tile {} in phase {:?}",
        session.engine.score(),
        session.engine.max_tile(),
        session.engine.phase()
    );
    Ok(())
}
