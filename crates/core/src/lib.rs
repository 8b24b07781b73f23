//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains all the game rules and state management. It has no
//! dependencies on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the identical piece sequence
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: the driver decides when to tick and how to render
//!
//! # Module structure
//!
//! - [`board`]: the cell grid with sequential line clearing
//! - [`pieces`]: 4x4 piece masks and the canonical 7-shape catalog
//! - [`engine`]: spawn, movement, rotation, collision, locking, game over
//! - [`rng`]: seedable uniform piece generation
//! - [`config`]: construction options and the configuration error
//! - [`snapshot`]: owned copies of render state
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, GameEngine};
//! use blockfall_types::StepOutcome;
//!
//! let mut game = GameEngine::new(EngineConfig::seeded(12345)).unwrap();
//! assert_eq!(game.move_right(), StepOutcome::Moved);
//!
//! // Drive gravity until the first piece locks.
//! let mut outcome = game.tick();
//! while outcome == StepOutcome::Moved {
//!     outcome = game.tick();
//! }
//! assert!(matches!(outcome, StepOutcome::Locked { .. }));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience.
pub use board::Board;
pub use config::{ConfigError, EngineConfig, SpawnPolicy};
pub use engine::{ActivePiece, GameEngine, QueuedPiece};
pub use pieces::{mask_of, Mask};
pub use rng::{PieceRng, SimpleRng};
pub use snapshot::{ActiveCells, GameSnapshot};
