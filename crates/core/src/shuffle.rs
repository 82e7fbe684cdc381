//! Shuffle module - solvable board generation
//!
//! Boards are scrambled by walking the blank cell through a fixed number of
//! random legal moves starting from the solved state. Every intermediate
//! state is reachable by legal moves, so the result is always solvable.
//!
//! Difficulty is enforced by rejection sampling: after a walk, the number
//! of tiles already in their goal position must fall inside the policy's
//! band, otherwise the walk is redone. The retry count is bounded; if no
//! walk lands in the band, the candidate closest to it is returned instead
//! of looping forever. Solved boards are rejected unconditionally, so a
//! shuffle never hands back the goal state.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{Difficulty, SHUFFLE_MAX_ATTEMPTS};

/// How scrambled a generated board must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShufflePolicy {
    /// Number of random legal moves per walk.
    pub walk_len: u32,
    /// Inclusive bounds on tiles already in their goal position.
    pub min_correct: usize,
    pub max_correct: usize,
}

impl ShufflePolicy {
    /// Policy for a difficulty level: easy boards keep a tile or two in
    /// place, hard boards start fully misplaced.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                walk_len: 20,
                min_correct: 1,
                max_correct: 2,
            },
            Difficulty::Hard => Self {
                walk_len: 50,
                min_correct: 0,
                max_correct: 0,
            },
        }
    }

    /// Unconstrained maximum-entropy policy (any non-solved walk result).
    pub fn unconstrained(board_len: usize) -> Self {
        Self {
            walk_len: 1000,
            min_correct: 0,
            max_correct: board_len.saturating_sub(1),
        }
    }

    fn band_distance(&self, correct: usize) -> usize {
        if correct < self.min_correct {
            self.min_correct - correct
        } else if correct > self.max_correct {
            correct - self.max_correct
        } else {
            0
        }
    }
}

/// One random legal-move walk from `start`.
fn random_walk(start: &Board, walk_len: u32, rng: &mut SimpleRng) -> Board {
    let mut board = start.clone();
    for _ in 0..walk_len {
        let blank = board.blank_index();
        let neighbors = board.neighbors(blank);
        // Walks always have 2+ neighbors to choose from (n >= 2).
        if let Some(&pick) = rng.choose(&neighbors) {
            board = board.apply_move(pick).board;
        }
    }
    board
}

/// Generate a shuffled, solvable board satisfying `policy`.
///
/// Rejection sampling over legal-move walks from `start` (normally the
/// solved board). Bounded by [`SHUFFLE_MAX_ATTEMPTS`]; on exhaustion the
/// non-solved candidate closest to the band is returned.
pub fn shuffle(start: &Board, policy: ShufflePolicy, rng: &mut SimpleRng) -> Board {
    let mut fallback: Option<(usize, Board)> = None;

    for _ in 0..SHUFFLE_MAX_ATTEMPTS {
        let candidate = random_walk(start, policy.walk_len, rng);
        if candidate.is_solved() {
            continue;
        }

        let distance = policy.band_distance(candidate.correct_count());
        if distance == 0 {
            return candidate;
        }

        match &fallback {
            Some((best, _)) if *best <= distance => {}
            _ => fallback = Some((distance, candidate)),
        }
    }

    match fallback {
        Some((_, board)) => board,
        // Every walk returned to the solved state. Only plausible for the
        // 2x2 grid with tiny walk lengths; one forced move is still a
        // legal non-solved board.
        None => {
            let blank = start.blank_index();
            let neighbors = start.neighbors(blank);
            start.apply_move(neighbors[0]).board
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_policy_band() {
        let policy = ShufflePolicy::for_difficulty(Difficulty::Easy);
        let mut rng = SimpleRng::new(42);
        for _ in 0..20 {
            let board = shuffle(&Board::solved(3), policy, &mut rng);
            let correct = board.correct_count();
            assert!(
                (1..=2).contains(&correct),
                "easy shuffle left {} correct tiles",
                correct
            );
            assert!(!board.is_solved());
        }
    }

    #[test]
    fn test_hard_policy_zero_correct() {
        let policy = ShufflePolicy::for_difficulty(Difficulty::Hard);
        let mut rng = SimpleRng::new(1);
        for _ in 0..20 {
            let board = shuffle(&Board::solved(3), policy, &mut rng);
            assert_eq!(board.correct_count(), 0);
            assert!(!board.is_solved());
        }
    }

    #[test]
    fn test_hard_never_returns_solved_board() {
        let policy = ShufflePolicy::for_difficulty(Difficulty::Hard);
        for seed in 1..200 {
            let mut rng = SimpleRng::new(seed);
            let board = shuffle(&Board::solved(3), policy, &mut rng);
            assert!(!board.is_solved(), "seed {} produced the goal state", seed);
        }
    }

    #[test]
    fn test_unconstrained_never_returns_solved_board() {
        let start = Board::solved(3);
        let policy = ShufflePolicy::unconstrained(start.len());
        for seed in 1..50 {
            let mut rng = SimpleRng::new(seed);
            assert!(!shuffle(&start, policy, &mut rng).is_solved());
        }
    }

    #[test]
    fn test_shuffle_deterministic_per_seed() {
        let policy = ShufflePolicy::for_difficulty(Difficulty::Easy);
        let a = shuffle(&Board::solved(3), policy, &mut SimpleRng::new(77));
        let b = shuffle(&Board::solved(3), policy, &mut SimpleRng::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_preserves_permutation() {
        let policy = ShufflePolicy::for_difficulty(Difficulty::Hard);
        let mut rng = SimpleRng::new(5);
        let board = shuffle(&Board::solved(4), policy, &mut rng);

        let mut seen: Vec<_> = board.cells().to_vec();
        seen.sort_unstable();
        let mut expect: Vec<_> = (1..16).map(|t| Some(t as u8)).collect();
        expect.push(None);
        expect.sort_unstable();
        assert_eq!(seen, expect);
    }

    #[test]
    fn test_impossible_band_falls_back_to_closest() {
        // No 3x3 board can have all 8 tiles correct without being solved,
        // so this band is unsatisfiable and the fallback must kick in.
        let policy = ShufflePolicy {
            walk_len: 30,
            min_correct: 8,
            max_correct: 8,
        };
        let mut rng = SimpleRng::new(3);
        let board = shuffle(&Board::solved(3), policy, &mut rng);
        assert!(!board.is_solved());
    }

    #[test]
    fn test_2x2_shuffle_is_never_solved() {
        let policy = ShufflePolicy::for_difficulty(Difficulty::Hard);
        for seed in 1..50 {
            let mut rng = SimpleRng::new(seed);
            let board = shuffle(&Board::solved(2), policy, &mut rng);
            assert!(!board.is_solved());
        }
    }
}
