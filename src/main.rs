//! Terminal runner (default binary).
//!
//! Polls crossterm for key presses at a fixed period, feeds them to the
//! session together with the elapsed time, and redraws through the
//! framebuffer renderer whenever something changed.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::event;

use blockfall::core::{GameSnapshot, Randomizer};
use blockfall::engine::{EngineConfig, PollClock, Session};
use blockfall::input::{translate_event, Input};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{HARD_DROP_LOCK_MS, POLL_MS};

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle in the terminal. Clear full rows to score.",
    long_about = "Blockfall is a falling-block puzzle on a 10x20 well.\n\n\
        CONTROLS:\n  Left/Right h/l  Move      Up k       Rotate CW\n  \
        Down j          Soft drop Space      Hard drop\n  \
        p / Esc         Pause     r          Restart    q / Ctrl-C  Quit"
)]
struct Args {
    /// Seed for the piece generator; random when omitted.
    #[arg(short, long)]
    seed: Option<u32>,

    /// How the next piece is chosen.
    #[arg(short, long, default_value = "uniform")]
    randomizer: RandomizerArg,

    /// Input polling period.
    #[arg(long, default_value_t = POLL_MS, value_name = "MS")]
    poll_ms: u32,

    /// Delay between a hard drop and the lock that follows it.
    #[arg(long, default_value_t = HARD_DROP_LOCK_MS, value_name = "MS")]
    lock_delay_ms: u32,

    /// Hide the key help under the side panel.
    #[arg(long)]
    no_help: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum RandomizerArg {
    /// Every kind equally likely on every draw.
    #[default]
    Uniform,
    /// Shuffled bags of all seven kinds.
    #[value(alias = "7bag", alias = "sevenbag")]
    Bag,
}

impl From<RandomizerArg> for Randomizer {
    fn from(value: RandomizerArg) -> Self {
        match value {
            RandomizerArg::Uniform => Randomizer::Uniform,
            RandomizerArg::Bag => Randomizer::SevenBag,
        }
    }
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_seed(self.seed.unwrap_or_else(rand::random))
            .with_randomizer(self.randomizer.into())
            .with_poll_ms(self.poll_ms)
            .with_hard_drop_lock_ms(self.lock_delay_ms)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.engine_config();
    let view = GameView::default().with_help(!args.no_help);
    let mut session = Session::new(config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &view);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        eprintln!("[blockfall] failed to restore terminal: {err}");
    }

    let state = session.state();
    println!(
        "score {}  lines {}  level {}  (seed {}, {})",
        state.score(),
        state.lines(),
        state.level(),
        config.seed,
        config.randomizer.as_str()
    );
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session, view: &GameView) -> Result<()> {
    let mut clock = PollClock::new(session.config().poll_ms);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if event::poll(clock.timeout())? {
            match translate_event(&event::read()?) {
                Some(Input::Quit) => return Ok(()),
                Some(Input::Action(action)) => {
                    session.push_input(action);
                    dirty |= session.advance(clock.sample_ms());
                }
                Some(Input::Resize) => {
                    term.invalidate();
                    dirty = true;
                }
                None => {}
            }
        }

        if clock.is_due() {
            dirty |= session.advance(clock.sample_ms());
        }
    }
}
