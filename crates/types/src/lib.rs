//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default grid edge length (3 gives the classic 8-puzzle).
pub const DEFAULT_GRID_SIZE: usize = 3;

/// Supported grid edge lengths. Tile ids are stored as `u8`, which caps
/// the grid at 15 (15*15 - 1 = 224 tiles).
pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 15;

/// Hints granted per session.
pub const HINT_ALLOWANCE: u8 = 3;

/// Bounded retry count for the shuffle's rejection sampling.
pub const SHUFFLE_MAX_ATTEMPTS: u32 = 1000;

/// Leaderboard retention per difficulty.
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Longest accepted player name, in characters.
pub const PLAYER_NAME_MAX_LEN: usize = 10;

/// A board cell: `Some(tile)` with tile ids `1..n*n-1`, `None` is the
/// empty-cell sentinel. Exactly one cell holds `None` at all times.
pub type Cell = Option<u8>;

/// Puzzle difficulty, a proxy for how scrambled the shuffled board is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

/// The direction a tile slides into the blank cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDir {
    Up,
    Down,
    Left,
    Right,
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Slide(SlideDir),
    Hint,
    Restart,
    Select(Difficulty),
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slideup" => Some(GameAction::Slide(SlideDir::Up)),
            "slidedown" => Some(GameAction::Slide(SlideDir::Down)),
            "slideleft" => Some(GameAction::Slide(SlideDir::Left)),
            "slideright" => Some(GameAction::Slide(SlideDir::Right)),
            "hint" => Some(GameAction::Hint),
            "restart" => Some(GameAction::Restart),
            "selecteasy" => Some(GameAction::Select(Difficulty::Easy)),
            "selecthard" => Some(GameAction::Select(Difficulty::Hard)),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Slide(SlideDir::Up) => "slideUp",
            GameAction::Slide(SlideDir::Down) => "slideDown",
            GameAction::Slide(SlideDir::Left) => "slideLeft",
            GameAction::Slide(SlideDir::Right) => "slideRight",
            GameAction::Hint => "hint",
            GameAction::Restart => "restart",
            GameAction::Select(Difficulty::Easy) => "selectEasy",
            GameAction::Select(Difficulty::Hard) => "selectHard",
        }
    }
}

/// Session lifecycle phase.
///
/// `Playing` self-loops on each legal move; `Won` is terminal until an
/// explicit restart returns to `SelectingDifficulty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SelectingDifficulty,
    Playing,
    Won,
}
