//! Timing controller - owns the game, its timers and the pending input queue
//!
//! The session is advanced with elapsed milliseconds. Each advance drains the
//! queued inputs in arrival order, then runs the deferred hard-drop step and
//! finally the gravity timer. After every change the timers are brought back
//! in line with the phase: armed while playing, cancelled otherwise.

use std::collections::VecDeque;

use crate::config::EngineConfig;
use crate::core::{GameSnapshot, GameState, PieceGenerator, RandomSource, SimpleRng, StepOutcome};
use crate::dispatch::{dispatch, TimerEffect};
use crate::timer::{DeferredStep, GravityTimer};
use crate::types::{GameAction, Phase};

/// Upper bound on queued inputs between two advances.
pub const INPUT_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    state: GameState<R>,
    gravity: GravityTimer,
    deferred: DeferredStep,
    queue: VecDeque<GameAction>,
    config: EngineConfig,
    last_step: Option<StepOutcome>,
}

impl Session<SimpleRng> {
    pub fn new(config: EngineConfig) -> Self {
        let generator = PieceGenerator::new(SimpleRng::new(config.seed), config.randomizer);
        Self::with_state(GameState::with_generator(generator), config)
    }
}

impl<R: RandomSource> Session<R> {
    /// Wrap an existing game. The gravity timer is armed if it is playing.
    pub fn with_state(state: GameState<R>, config: EngineConfig) -> Self {
        let mut session = Self {
            state,
            gravity: GravityTimer::new(),
            deferred: DeferredStep::new(),
            queue: VecDeque::with_capacity(INPUT_QUEUE_CAPACITY),
            config,
            last_step: None,
        };
        session.sync_timers();
        session
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    pub fn lock_pending(&self) -> bool {
        self.deferred.is_pending()
    }

    /// Outcome of the most recent gravity step, from any source.
    pub fn last_step(&self) -> Option<StepOutcome> {
        self.last_step
    }

    /// Queue an action for the next [`Session::advance`].
    ///
    /// Returns `false` if the queue is full and the action was dropped.
    pub fn push_input(&mut self, action: GameAction) -> bool {
        if self.queue.len() >= INPUT_QUEUE_CAPACITY {
            return false;
        }
        self.queue.push_back(action);
        true
    }

    pub fn pending_inputs(&self) -> usize {
        self.queue.len()
    }

    /// Apply an action immediately. Returns `true` if the game changed.
    pub fn dispatch(&mut self, action: GameAction) -> bool {
        let result = dispatch(&mut self.state, action);
        if let Some(step) = result.step {
            self.record_step(step);
        }
        match result.effect {
            TimerEffect::None => {}
            TimerEffect::ResetGravity => self.gravity.reset_elapsed(),
            TimerEffect::ScheduleLock => self.deferred.schedule(self.config.hard_drop_lock_ms),
            TimerEffect::Rearm => {
                self.gravity.cancel();
                self.deferred.cancel();
                self.last_step = None;
            }
        }
        self.sync_timers();
        result.changed
    }

    /// Drain queued inputs, then let `elapsed_ms` of time pass.
    ///
    /// Returns `true` if anything visible changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;
        while let Some(action) = self.queue.pop_front() {
            changed |= self.dispatch(action);
        }

        if self.deferred.advance(elapsed_ms) {
            changed |= self.step();
        }
        if self.gravity.advance(elapsed_ms) {
            changed |= self.step();
        }
        changed
    }

    pub fn restart(&mut self) {
        self.dispatch(GameAction::Restart);
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.dispatch(GameAction::PauseToggle)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    fn step(&mut self) -> bool {
        let outcome = self.state.gravity_step();
        self.record_step(outcome);
        self.sync_timers();
        outcome != StepOutcome::Ignored
    }

    /// A lock by any route retires the pending hard-drop step.
    fn record_step(&mut self, outcome: StepOutcome) {
        if outcome.locked() {
            self.deferred.cancel();
        }
        self.last_step = Some(outcome);
    }

    /// Keep the timers consistent with the phase and the current level.
    fn sync_timers(&mut self) {
        if self.state.phase() != Phase::Playing {
            self.gravity.cancel();
            self.deferred.cancel();
            return;
        }

        let interval = self.state.drop_interval_ms();
        if !self.gravity.is_armed() {
            self.gravity.arm(interval);
        } else if self.gravity.interval_ms() != interval {
            self.gravity.set_interval(interval);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
