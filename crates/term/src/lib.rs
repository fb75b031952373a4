//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. It avoids widget/layout libraries
//! and instead renders a [`core::GameSnapshot`] into a framebuffer that is
//! diffed and flushed to the terminal through crossterm.
//!
//! - [`fb`]: styled cell buffer and drawing primitives
//! - [`game_view`]: well, side panel and overlays (pure, no I/O)
//! - [`renderer`]: terminal setup/teardown and diff encoding

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
