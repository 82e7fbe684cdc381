//! Board module - manages the puzzle grid
//!
//! The board is an N×N grid stored as a flat array in row-major order.
//! Each cell holds a tile id (1..n²-1) or `None` for the empty cell.
//! Invariant: the cells are always a permutation of {None, 1, .., n²-1},
//! with exactly one `None`.
//!
//! Every mutating operation takes `&self` and returns a new board value.
//! Illegal input (a non-neighbor or out-of-range index) is a no-op rather
//! than an error; callers that need to pre-check use [`Board::neighbors`].

use arrayvec::ArrayVec;

use crate::types::{Cell, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Result of attempting a move via [`Board::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// The board after the move (identical to the input when `moved` is false).
    pub board: Board,
    /// Whether the clicked index was a legal move and a swap happened.
    pub moved: bool,
    /// Whether the moved tile landed in its goal position (for feedback).
    pub placed_correct: bool,
}

/// The puzzle board - N×N cells using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    n: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create the solved board: tiles 1..n²-1 in row-major order, the
    /// empty cell last. This is the goal state and trivially solvable.
    pub fn solved(n: usize) -> Self {
        assert!(
            (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&n),
            "grid size out of range"
        );
        let len = n * n;
        let mut cells: Vec<Cell> = (1..len).map(|t| Some(t as u8)).collect();
        cells.push(None);
        Self { n, cells }
    }

    /// Grid edge length
    pub fn n(&self) -> usize {
        self.n
    }

    /// Total cell count (n²)
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `index`, or `None` if out of range.
    ///
    /// Note the double `Option`: `Some(None)` is the in-bounds empty cell.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Index of the empty cell
    pub fn blank_index(&self) -> usize {
        // The permutation invariant guarantees exactly one None.
        self.cells
            .iter()
            .position(|c| c.is_none())
            .unwrap_or(self.cells.len() - 1)
    }

    /// The tile id that belongs at `index` in the solved board, or `None`
    /// for the last cell.
    pub fn goal_value(&self, index: usize) -> Cell {
        if index + 1 == self.cells.len() {
            None
        } else {
            Some((index + 1) as u8)
        }
    }

    /// Orthogonally adjacent indices of `index`, respecting grid edges
    /// (no wraparound). At most 4 entries; corners get 2, edges 3.
    pub fn neighbors(&self, index: usize) -> ArrayVec<usize, 4> {
        let mut out = ArrayVec::new();
        if index >= self.cells.len() {
            return out;
        }
        let n = self.n;
        let row = index / n;
        let col = index % n;

        if row > 0 {
            out.push(index - n);
        }
        if row < n - 1 {
            out.push(index + n);
        }
        if col > 0 {
            out.push(index - 1);
        }
        if col < n - 1 {
            out.push(index + 1);
        }
        out
    }

    /// Try to move the tile at `clicked` into the empty cell.
    ///
    /// Legal only when `clicked` is a neighbor of the empty cell; anything
    /// else returns the board unchanged with `moved == false`.
    pub fn apply_move(&self, clicked: usize) -> MoveResult {
        let blank = self.blank_index();
        if !self.neighbors(blank).contains(&clicked) {
            return MoveResult {
                board: self.clone(),
                moved: false,
                placed_correct: false,
            };
        }

        let mut next = self.clone();
        next.cells.swap(blank, clicked);

        // The moved tile now sits where the blank was.
        let placed_correct =
            next.cells[blank].is_some() && next.cells[blank] == next.goal_value(blank);

        MoveResult {
            board: next,
            moved: true,
            placed_correct,
        }
    }

    /// True iff every cell matches the solved board of the same size
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(i, &c)| c == self.goal_value(i))
    }

    /// Number of non-empty tiles sitting in their goal position
    pub fn correct_count(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(i, &c)| c.is_some() && c == self.goal_value(i))
            .count()
    }

    /// Percentage of tiles in their goal position, rounded to nearest integer
    pub fn progress(&self) -> u8 {
        let total = self.cells.len() - 1;
        let correct = self.correct_count();
        ((correct * 200 + total) / (2 * total)) as u8
    }

    /// Build a board from explicit cells, for tests
    #[cfg(test)]
    pub fn from_cells(n: usize, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), n * n);
        assert_eq!(cells.iter().filter(|c| c.is_none()).count(), 1);
        Self { n, cells }
    }
}
