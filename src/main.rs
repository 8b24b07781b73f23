//! Terminal blockfall runner (default binary).
//!
//! The driver owns everything the engine deliberately does not: the title
//! sequence, the drop-timer cadence, input polling, rendering, and the
//! audible cue. The engine is pure and is only called with discrete commands.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::debug;

use blockfall::core::{EngineConfig, GameEngine, SpawnPolicy};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, TitleScreen};
use blockfall::types::{StepOutcome, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DROP_INTERVAL_MS};

/// Title-screen frame cadence (blink granularity).
const TITLE_FRAME_MS: u64 = 50;

#[derive(Debug, Parser)]
#[command(name = "blockfall", about = "Terminal falling-block puzzle")]
struct Args {
    /// Board columns.
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u8,

    /// Board rows.
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u8,

    /// Seed for a reproducible piece sequence.
    #[arg(long)]
    seed: Option<u32>,

    /// Reset the board instead of ending the game when a spawned piece
    /// collides (the legacy behavior).
    #[arg(long)]
    legacy_reset: bool,

    /// Skip the title sequence and start playing immediately.
    #[arg(long)]
    skip_title: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = EngineConfig {
        width: args.width,
        height: args.height,
        rng_seed: args.seed,
        spawn_policy: if args.legacy_reset {
            SpawnPolicy::ResetBoard
        } else {
            SpawnPolicy::GameOver
        },
    };
    let mut engine = GameEngine::new(config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, args.skip_title);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut GameEngine, skip_title: bool) -> Result<()> {
    if !skip_title && !run_title(term)? {
        return Ok(());
    }
    run_game(term, engine)
}

/// Drive the scripted title sequence. Returns false when the player quit.
fn run_title(term: &mut TerminalRenderer) -> Result<bool> {
    let mut title = TitleScreen::new();
    let mut last_frame = Instant::now();

    loop {
        term.draw(&title.lines())?;

        if event::poll(Duration::from_millis(TITLE_FRAME_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(false);
                    }
                    if key.code == KeyCode::Enter && title.confirm() {
                        term.bell()?;
                        return Ok(true);
                    }
                }
            }
        }

        let now = Instant::now();
        title.advance(now.duration_since(last_frame).as_millis() as u64);
        last_frame = now;
    }
}

fn run_game(term: &mut TerminalRenderer, engine: &mut GameEngine) -> Result<()> {
    let view = GameView;
    let drop_interval = Duration::from_millis(DROP_INTERVAL_MS);
    let mut last_drop = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            term.draw(&view.render(&engine.snapshot()))?;
            dirty = false;
        }

        // Input with timeout until the next drop tick.
        let timeout = drop_interval
            .checked_sub(last_drop.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let outcome = engine.apply(action);
                        debug!("{action:?} -> {outcome:?}");
                        // Sound and redraw fire once per real state change,
                        // not once per keypress.
                        if outcome.is_meaningful() {
                            term.bell()?;
                            dirty = true;
                        }
                    }
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        // Automatic drop.
        if last_drop.elapsed() >= drop_interval {
            last_drop = Instant::now();
            let outcome = engine.tick();
            if outcome.is_meaningful() {
                dirty = true;
            }
            if matches!(outcome, StepOutcome::Locked { lines_cleared } if lines_cleared > 0) {
                term.bell()?;
            }
        }
    }
}
