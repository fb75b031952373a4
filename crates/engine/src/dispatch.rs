//! Input dispatcher - maps actions to game state transitions
//!
//! Dispatching never touches timers itself. It reports the timer side effect
//! an action needs and leaves applying it to the session.

use crate::core::{GameState, RandomSource, StepOutcome};
use crate::types::GameAction;

/// Timer work requested by a dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEffect {
    None,
    /// Restart the gravity interval from zero (soft drop).
    ResetGravity,
    /// Schedule the deferred lock step (hard drop).
    ScheduleLock,
    /// Drop all timers and re-arm from scratch (restart).
    Rearm,
}

/// Result of one dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// Whether the game state changed.
    pub changed: bool,
    /// Gravity step performed by a soft drop, if any.
    pub step: Option<StepOutcome>,
    pub effect: TimerEffect,
}

impl Dispatch {
    fn ignored() -> Self {
        Self {
            changed: false,
            step: None,
            effect: TimerEffect::None,
        }
    }

    fn changed(changed: bool) -> Self {
        Self {
            changed,
            ..Self::ignored()
        }
    }
}

/// Apply one action to the game.
///
/// Movement, rotation and drops only act while playing; pause toggles act
/// unless the game is over; restart always acts.
pub fn dispatch<R: RandomSource>(state: &mut GameState<R>, action: GameAction) -> Dispatch {
    match action {
        GameAction::MoveLeft => Dispatch::changed(state.try_move(-1, 0)),
        GameAction::MoveRight => Dispatch::changed(state.try_move(1, 0)),
        GameAction::RotateCw => Dispatch::changed(state.try_rotate()),
        GameAction::SoftDrop => {
            if !state.phase().accepts_moves() {
                return Dispatch::ignored();
            }
            let step = state.gravity_step();
            Dispatch {
                changed: step != StepOutcome::Ignored,
                step: Some(step),
                effect: TimerEffect::ResetGravity,
            }
        }
        GameAction::HardDrop => {
            if state.hard_drop() == 0 {
                return Dispatch::ignored();
            }
            Dispatch {
                changed: true,
                step: None,
                effect: TimerEffect::ScheduleLock,
            }
        }
        GameAction::PauseToggle => Dispatch::changed(state.toggle_pause()),
        GameAction::Restart => {
            state.restart();
            Dispatch {
                changed: true,
                step: None,
                effect: TimerEffect::Rearm,
            }
        }
    }
}
