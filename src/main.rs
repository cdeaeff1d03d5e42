//! Terminal tile puzzle runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and a framebuffer-based
//! renderer. Tiles are moved by dragging with the left mouse button.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use structopt::StructOpt;

use tile_puzzle::app::App;
use tile_puzzle::config::Opt;
use tile_puzzle::input::pointer_event;
use tile_puzzle::term::{FrameBuffer, RedrawGate, TerminalRenderer, Viewport};
use tile_puzzle::types::TICK_MS;

/// Redraw at least this often even when nothing changed.
const IDLE_REDRAW_MS: u64 = 1000;

fn main() -> Result<()> {
    let opt = Opt::from_args();
    opt.init_logging()?;

    let mut app = App::new(opt.seed);
    if let Some(path) = opt.image.as_deref() {
        if let Err(err) = app.load_image(path) {
            warn!("starting without image ({}): {}", err.code(), err);
        }
    }
    info!("starting (seed: {:?})", opt.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut gate = RedrawGate::new(IDLE_REDRAW_MS);
    let started = Instant::now();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if gate.should_draw(started.elapsed().as_millis() as u64, app.fingerprint(), w, h) {
            app.render_into(viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => {
                    if let Some(ev) = pointer_event(mouse) {
                        app.handle_pointer(ev, viewport);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    gate.invalidate();
                }
                _ => {}
            }
            if app.should_quit() {
                info!("quit");
                return Ok(());
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}
