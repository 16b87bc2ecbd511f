//! Terminal Tetris runner (default binary).
//!
//! Fixed-tick host loop: poll crossterm input until the next tick is due, advance
//! the engine, drain its events, render.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{debug, info, warn};

use tetris_classic::core::{Engine, EngineEvent, GameSnapshot};
use tetris_classic::input::{handle_key_event, should_quit};
use tetris_classic::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_classic::{logging, HighScoreStore, HostConfig};

/// Upper bound on ticks replayed after a stall (e.g. a suspended terminal)
const MAX_CATCH_UP_TICKS: u32 = 8;

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(?config, "starting");

    let store = HighScoreStore::new(config.highscore_path.clone());
    let mut engine = Engine::new(config.seed, store.load());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, &store, config.tick_duration());

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    info!(score = engine.score(), high_score = engine.high_score(), "exiting");
    result
}

fn run(
    term: &mut TerminalRenderer,
    engine: &mut Engine,
    store: &HighScoreStore,
    tick: Duration,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut next_tick = Instant::now() + tick;

    loop {
        // Render.
        engine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let accepted = engine.apply_action(action);
                        debug!(action = action.as_str(), accepted, "input");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        let mut ticks = 0;
        while next_tick <= now {
            if ticks < MAX_CATCH_UP_TICKS {
                engine.advance();
                ticks += 1;
            }
            next_tick += tick;
        }

        drain_events(engine, store);
    }
}

fn drain_events(engine: &mut Engine, store: &HighScoreStore) {
    for event in engine.take_events() {
        match event {
            EngineEvent::NewHighScore(score) => {
                if let Err(err) = store.persist(&event) {
                    warn!(score, error = %err, "failed to save high score");
                }
            }
            other => debug!(event = ?other, "engine event"),
        }
    }
}
