//! Hint module - greedy next-move suggestion
//!
//! Picks a blank-adjacent index to highlight. Preference order:
//!
//! 1. a neighbor whose tile becomes correct once moved into the blank slot
//! 2. any neighbor whose tile is not already in its goal position
//! 3. the first neighbor
//!
//! This is a greedy, locally plausible suggestion, not a solver: it does
//! not guarantee progress toward the solution.

use crate::board::Board;

/// Suggest a tile index to move into the blank cell.
///
/// Returns `None` only for boards with no neighbors, which cannot occur
/// for any supported grid size.
pub fn find_hint_move(board: &Board) -> Option<usize> {
    let blank = board.blank_index();
    let neighbors = board.neighbors(blank);

    // A tile that completes its goal cell by sliding into the blank.
    // Neighbor cells always hold a tile (the one blank is at `blank`).
    let goal_here = board.goal_value(blank);
    if goal_here.is_some() {
        let completing = neighbors.iter().find(|&&i| board.get(i) == Some(goal_here));
        if let Some(&i) = completing {
            return Some(i);
        }
    }

    // Otherwise avoid disturbing tiles that already sit correctly.
    let misplaced = neighbors
        .iter()
        .find(|&&i| board.get(i).map_or(false, |c| c != board.goal_value(i)));
    if let Some(&i) = misplaced {
        return Some(i);
    }

    neighbors.first().copied()
}
