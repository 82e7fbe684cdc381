//! Session module - per-game state machine
//!
//! Ties the board, shuffle, and hint modules together behind a single
//! owned state value: `SelectingDifficulty -> Playing -> Won`, where
//! `Playing` self-loops on each legal move and `Won` is terminal until an
//! explicit restart.
//!
//! Nothing here fails: actions that make no sense in the current phase are
//! ignored and reported as such through the return value.

use crate::board::Board;
use crate::hint::find_hint_move;
use crate::rng::SimpleRng;
use crate::shuffle::{shuffle, ShufflePolicy};
use crate::types::{Difficulty, GameAction, Phase, SlideDir, DEFAULT_GRID_SIZE, HINT_ALLOWANCE};

/// What a slide attempt did, for caller feedback (sound, flash, overlay).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOutcome {
    /// Not playing, or no tile on that side of the blank.
    Ignored,
    Moved { placed_correct: bool },
    Won,
}

/// Transient per-game state. Created once, restarted in place.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    difficulty: Option<Difficulty>,
    moves: u32,
    hints_remaining: u8,
    /// Highlighted hint target, cleared by the next move.
    hint_target: Option<usize>,
    rng: SimpleRng,
}

impl GameSession {
    /// Create a session in the difficulty menu with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::solved(DEFAULT_GRID_SIZE),
            phase: Phase::SelectingDifficulty,
            difficulty: None,
            moves: 0,
            hints_remaining: HINT_ALLOWANCE,
            hint_target: None,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    pub fn hint_target(&self) -> Option<usize> {
        self.hint_target
    }

    pub fn won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Percentage of tiles in their goal position
    pub fn progress(&self) -> u8 {
        self.board.progress()
    }

    /// Leave the menu: shuffle a fresh board for `difficulty` and start
    /// counting moves. No-op while a game is in progress.
    pub fn start(&mut self, difficulty: Difficulty) -> bool {
        if self.phase != Phase::SelectingDifficulty {
            return false;
        }
        let policy = ShufflePolicy::for_difficulty(difficulty);
        self.board = shuffle(&Board::solved(DEFAULT_GRID_SIZE), policy, &mut self.rng);
        self.phase = Phase::Playing;
        self.difficulty = Some(difficulty);
        self.moves = 0;
        self.hints_remaining = HINT_ALLOWANCE;
        self.hint_target = None;
        true
    }

    /// Move the tile at `clicked` into the blank cell, if adjacent.
    ///
    /// Counts the move, clears any hint highlight, and transitions to
    /// `Won` when the board reaches the goal state.
    pub fn click(&mut self, clicked: usize) -> SlideOutcome {
        if self.phase != Phase::Playing {
            return SlideOutcome::Ignored;
        }

        let result = self.board.apply_move(clicked);
        if !result.moved {
            return SlideOutcome::Ignored;
        }

        self.board = result.board;
        self.moves += 1;
        self.hint_target = None;

        if self.board.is_solved() {
            self.phase = Phase::Won;
            return SlideOutcome::Won;
        }
        SlideOutcome::Moved {
            placed_correct: result.placed_correct,
        }
    }

    /// Slide the tile on the given side of the blank into the blank.
    ///
    /// Pressing `Left` moves the tile to the blank's right leftwards, and
    /// so on. A no-op when the blank sits on that edge.
    pub fn slide(&mut self, dir: SlideDir) -> SlideOutcome {
        if self.phase != Phase::Playing {
            return SlideOutcome::Ignored;
        }

        let n = self.board.n();
        let blank = self.board.blank_index();
        let row = blank / n;
        let col = blank % n;

        let clicked = match dir {
            SlideDir::Up if row < n - 1 => Some(blank + n),
            SlideDir::Down if row > 0 => Some(blank - n),
            SlideDir::Left if col < n - 1 => Some(blank + 1),
            SlideDir::Right if col > 0 => Some(blank - 1),
            _ => None,
        };

        match clicked {
            Some(i) => self.click(i),
            None => SlideOutcome::Ignored,
        }
    }

    /// Spend one hint and highlight a suggested tile to move.
    ///
    /// Returns the suggested index, or `None` when not playing or the
    /// allowance is used up.
    pub fn request_hint(&mut self) -> Option<usize> {
        if self.phase != Phase::Playing || self.hints_remaining == 0 {
            return None;
        }
        let target = find_hint_move(&self.board)?;
        self.hints_remaining -= 1;
        self.hint_target = Some(target);
        Some(target)
    }

    /// Back to the difficulty menu, reseeding from the RNG's current state
    /// so a restarted game gets a fresh shuffle rather than a replay.
    pub fn reset(&mut self) {
        *self = Self::new(self.rng.state());
    }

    /// Apply a game action; returns whether it changed anything
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(difficulty) => self.start(difficulty),
            GameAction::Slide(dir) => self.slide(dir) != SlideOutcome::Ignored,
            GameAction::Hint => self.request_hint().is_some(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_in_menu() {
        let session = GameSession::new(12345);
        assert_eq!(session.phase(), Phase::SelectingDifficulty);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.hints_remaining(), HINT_ALLOWANCE);
        assert!(session.difficulty().is_none());
    }

    #[test]
    fn test_start_shuffles_and_enters_playing() {
        let mut session = GameSession::new(12345);
        assert!(session.start(Difficulty::Easy));
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.difficulty(), Some(Difficulty::Easy));
        assert!(!session.board().is_solved());

        // Already playing: selecting again is ignored.
        assert!(!session.start(Difficulty::Hard));
        assert_eq!(session.difficulty(), Some(Difficulty::Easy));
    }

    #[test]
    fn test_moves_are_counted_and_illegal_ones_ignored() {
        let mut session = GameSession::new(7);
        session.start(Difficulty::Hard);

        let blank = session.board().blank_index();
        let legal = session.board().neighbors(blank)[0];

        assert_ne!(session.click(legal), SlideOutcome::Ignored);
        assert_eq!(session.moves(), 1);

        // Out of range index changes nothing.
        assert_eq!(session.click(999), SlideOutcome::Ignored);
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn test_click_before_start_is_ignored() {
        let mut session = GameSession::new(7);
        assert_eq!(session.click(7), SlideOutcome::Ignored);
        assert_eq!(session.slide(SlideDir::Left), SlideOutcome::Ignored);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_slide_direction_maps_to_blank_neighbor() {
        let mut session = GameSession::new(3);
        session.start(Difficulty::Easy);

        let n = session.board().n();
        let blank = session.board().blank_index();
        let col = blank % n;

        if col < n - 1 {
            // A tile exists to the blank's right; sliding it left must work.
            assert_ne!(session.slide(SlideDir::Left), SlideOutcome::Ignored);
            assert_eq!(session.board().blank_index(), blank + 1);
        } else {
            assert_eq!(session.slide(SlideDir::Left), SlideOutcome::Ignored);
        }
    }

    #[test]
    fn test_winning_move_transitions_to_won() {
        let mut session = GameSession::new(1);
        session.start(Difficulty::Easy);

        // Drive the session to one-move-from-solved by hand.
        session.board = Board::solved(3).apply_move(7).board;

        assert_eq!(session.click(7), SlideOutcome::Won);
        assert!(session.won());
        assert_eq!(session.progress(), 100);

        // Won is terminal: further moves are ignored.
        assert_eq!(session.click(8), SlideOutcome::Ignored);
    }

    #[test]
    fn test_hint_allowance_is_bounded() {
        let mut session = GameSession::new(11);
        session.start(Difficulty::Hard);

        for _ in 0..HINT_ALLOWANCE {
            assert!(session.request_hint().is_some());
        }
        assert!(session.request_hint().is_none());
        assert_eq!(session.hints_remaining(), 0);
    }

    #[test]
    fn test_hint_highlight_cleared_by_next_move() {
        let mut session = GameSession::new(11);
        session.start(Difficulty::Easy);

        let target = session.request_hint().unwrap();
        assert_eq!(session.hint_target(), Some(target));

        // The hinted move is legal by construction.
        assert_ne!(session.click(target), SlideOutcome::Ignored);
        assert_eq!(session.hint_target(), None);
    }

    #[test]
    fn test_reset_returns_to_menu_and_advances_rng() {
        let mut session = GameSession::new(99);
        session.start(Difficulty::Easy);
        let first_board = session.board().clone();

        session.reset();
        assert_eq!(session.phase(), Phase::SelectingDifficulty);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.hints_remaining(), HINT_ALLOWANCE);

        // Restarting yields a different shuffle, not a replay.
        session.start(Difficulty::Easy);
        assert_ne!(session.board(), &first_board);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut session = GameSession::new(5);

        assert!(session.apply_action(GameAction::Select(Difficulty::Hard)));
        assert_eq!(session.phase(), Phase::Playing);

        // Hints work through the action path too.
        assert!(session.apply_action(GameAction::Hint));

        assert!(session.apply_action(GameAction::Restart));
        assert_eq!(session.phase(), Phase::SelectingDifficulty);

        // Sliding in the menu does nothing.
        assert!(!session.apply_action(GameAction::Slide(SlideDir::Up)));
    }

    #[test]
    fn test_won_allows_only_restart() {
        let mut session = GameSession::new(2);
        session.start(Difficulty::Easy);
        session.board = Board::solved(3).apply_move(7).board;
        session.click(7);
        assert!(session.won());

        assert!(session.request_hint().is_none());
        assert!(!session.apply_action(GameAction::Slide(SlideDir::Left)));
        assert!(session.apply_action(GameAction::Restart));
        assert_eq!(session.phase(), Phase::SelectingDifficulty);
    }
}
