//! Timing and input control for a blockfall game
//!
//! [`Session`] wraps a [`core::GameState`] with the gravity timer, the
//! deferred lock that follows a hard drop, and an ordered queue of pending
//! inputs. It is driven purely by elapsed milliseconds, so a front-end only
//! has to sample its clock and call [`Session::advance`].
//!
//! ```
//! use blockfall_engine::{EngineConfig, Session};
//! use blockfall_engine::types::GameAction;
//!
//! let mut session = Session::new(EngineConfig::default().with_seed(7));
//! session.push_input(GameAction::HardDrop);
//! session.advance(50);
//! assert_eq!(session.state().pieces_locked(), 1);
//! ```

pub mod config;
pub mod dispatch;
pub mod session;
pub mod timer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::EngineConfig;
pub use dispatch::{dispatch, Dispatch, TimerEffect};
pub use session::{Session, INPUT_QUEUE_CAPACITY};
pub use timer::{DeferredStep, GravityTimer, PollClock};
