//! Store module - in-memory leaderboard
//!
//! Keeps the best [`LEADERBOARD_CAPACITY`] scores per difficulty, ordered
//! by move count (fewer is better) with submission order breaking ties.
//! Duplicate player names are rejected per difficulty; a submission to a
//! full board must beat the worst retained entry, which it then evicts.
//!
//! Pure and synchronous so it can be tested without the server around it.

use crate::protocol::ScoreRow;
use slidepuzzle_types::{Difficulty, LEADERBOARD_CAPACITY, PLAYER_NAME_MAX_LEN};

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted {
        /// 1-based rank within the difficulty's board.
        rank: u32,
        /// The updated board for that difficulty.
        scores: Vec<ScoreRow>,
    },
    Rejected {
        message: String,
    },
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    moves: u32,
    difficulty: Difficulty,
    /// Monotonic submission counter; stands in for a wall-clock timestamp
    /// and keeps ordering deterministic.
    stamp: u64,
}

/// Per-difficulty top-N score board.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    entries: Vec<Entry>,
    next_stamp: u64,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and record a score.
    ///
    /// `difficulty_raw` values other than "easy"/"hard" fall back to easy.
    pub fn submit(
        &mut self,
        raw_name: &str,
        moves: u32,
        difficulty_raw: Option<&str>,
    ) -> SubmitOutcome {
        let name = raw_name.trim();

        if name.is_empty() {
            return SubmitOutcome::Rejected {
                message: "Player name is required".to_string(),
            };
        }
        if name.chars().count() > PLAYER_NAME_MAX_LEN {
            return SubmitOutcome::Rejected {
                message: format!("Player name must be max {} characters", PLAYER_NAME_MAX_LEN),
            };
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' '))
        {
            return SubmitOutcome::Rejected {
                message: "Player name can only contain letters, numbers, spaces, _ and -"
                    .to_string(),
            };
        }
        if moves < 1 {
            return SubmitOutcome::Rejected {
                message: "Invalid moves count".to_string(),
            };
        }

        let difficulty = difficulty_raw
            .and_then(Difficulty::from_str)
            .unwrap_or(Difficulty::Easy);

        if self
            .entries
            .iter()
            .any(|e| e.difficulty == difficulty && e.name == name)
        {
            return SubmitOutcome::Rejected {
                message: "This name is already taken for this difficulty".to_string(),
            };
        }

        // A full board only admits scores that beat its worst entry.
        let count = self
            .entries
            .iter()
            .filter(|e| e.difficulty == difficulty)
            .count();
        if count >= LEADERBOARD_CAPACITY {
            let worst = self
                .entries
                .iter()
                .filter(|e| e.difficulty == difficulty)
                .max_by(|a, b| a.moves.cmp(&b.moves).then(b.stamp.cmp(&a.stamp)))
                .map(|e| (e.moves, e.stamp));

            if let Some((worst_moves, worst_stamp)) = worst {
                if moves >= worst_moves {
                    return SubmitOutcome::Rejected {
                        message: format!(
                            "Score not in the top {}. Best score to beat: {} moves",
                            LEADERBOARD_CAPACITY, worst_moves
                        ),
                    };
                }
                self.entries
                    .retain(|e| !(e.difficulty == difficulty && e.stamp == worst_stamp));
            }
        }

        let stamp = self.next_stamp;
        self.next_stamp += 1;
        self.entries.push(Entry {
            name: name.to_string(),
            moves,
            difficulty,
            stamp,
        });

        let scores = self.top(Some(difficulty));
        let rank = scores
            .iter()
            .position(|s| s.player_name == name)
            .map(|i| i as u32 + 1)
            .unwrap_or(1);

        SubmitOutcome::Accepted { rank, scores }
    }

    /// Top scores ordered by (moves asc, submission asc), capped at the
    /// retention limit. `None` queries across both difficulties.
    pub fn top(&self, difficulty: Option<Difficulty>) -> Vec<ScoreRow> {
        let mut rows: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| difficulty.map_or(true, |d| e.difficulty == d))
            .collect();
        rows.sort_by(|a, b| a.moves.cmp(&b.moves).then(a.stamp.cmp(&b.stamp)));
        rows.truncate(LEADERBOARD_CAPACITY);
        rows.into_iter()
            .map(|e| ScoreRow {
                player_name: e.name.clone(),
                moves: e.moves,
                difficulty: e.difficulty.as_str().to_string(),
            })
            .collect()
    }
}
