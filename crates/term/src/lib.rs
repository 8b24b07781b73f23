//! Terminal presentation layer.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay:
//! a pure text view of the board, a renderer that owns raw mode and the
//! alternate screen, and the scripted title sequence. All game rules live in
//! `blockfall-core`; nothing here mutates engine state.

pub mod game_view;
pub mod renderer;
pub mod title;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
pub use title::TitleScreen;
