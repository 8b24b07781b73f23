//! Engine configuration and its error type.

use blockfall_types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use thiserror::Error;

/// The only fatal error in the core: bad construction input.
///
/// Everything that can go wrong during play (blocked moves, rejected
/// rotations, game over) is an ordinary [`StepOutcome`](blockfall_types::StepOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u8, height: u8 },
}

/// What to do when a freshly spawned piece immediately collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnPolicy {
    /// Enter the terminal game-over state; only `initialize()` resets.
    #[default]
    GameOver,
    /// Silently clear the board and keep playing.
    ///
    /// This emulates the legacy behavior of the game this engine was ported
    /// from. Off by default.
    ResetBoard,
}

/// Options accepted by [`GameEngine::new`](crate::GameEngine::new).
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Board columns.
    pub width: u8,
    /// Board rows.
    pub height: u8,
    /// Seed for the piece generator. `None` seeds from the system clock;
    /// set it for reproducible piece sequences.
    pub rng_seed: Option<u32>,
    pub spawn_policy: SpawnPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            rng_seed: None,
            spawn_policy: SpawnPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Default-sized board with a fixed seed.
    pub fn seeded(seed: u32) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Self::default()
        }
    }
}
