//! Puzzle engine - pure, deterministic, and testable
//!
//! This crate contains the sliding-tile rules, shuffle generation, and
//! session state management. It has **zero dependencies** on UI, networking,
//! or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Testable**: Unit tests for every rule, including solvability
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: N×N board with neighbor lookup and immutable move application
//! - [`shuffle`]: legal-move random walks with difficulty band rejection
//! - [`hint`]: greedy next-move suggestion
//! - [`session`]: per-game state machine, move counter, hint allowance
//! - [`rng`]: seeded LCG for deterministic shuffling
//!
//! # Key invariant
//!
//! Shuffles only ever apply legal moves starting from the solved board, so
//! every board this crate hands out is solvable. Boards built by arbitrary
//! permutation would not be, half the time.
//!
//! # Example
//!
//! ```
//! use slidepuzzle_core::GameSession;
//! use slidepuzzle_types::{Difficulty, GameAction, Phase, SlideDir};
//!
//! let mut session = GameSession::new(12345);
//! session.apply_action(GameAction::Select(Difficulty::Easy));
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! session.apply_action(GameAction::Slide(SlideDir::Left));
//! ```

pub mod board;
pub mod hint;
pub mod rng;
pub mod session;
pub mod shuffle;

pub use slidepuzzle_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveResult};
pub use hint::find_hint_move;
pub use rng::SimpleRng;
pub use session::{GameSession, SlideOutcome};
pub use shuffle::{shuffle, ShufflePolicy};
