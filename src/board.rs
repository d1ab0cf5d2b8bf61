//! Queen occupancy board for the N-Queens puzzle.
//!
//! This module provides the [`QueensBoard`] struct which owns a square grid of queen
//! occupancy along with the evaluation queries a front end needs: safety checks for the
//! row-by-row search, a conflict count over the placed queens, and a goal-state test.

use std::{fmt, str::FromStr};

/// An N×N grid of queen occupancy, stored in row-major order.
///
/// The board size is fixed at construction. Callers seed it with [`set_columns`]
/// (one queen per row) or mutate single cells with [`place`] and [`remove`], and read
/// it back for rendering with [`has_queen`] or [`queens`].
///
/// [`set_columns`]: QueensBoard::set_columns
/// [`place`]: QueensBoard::place
/// [`remove`]: QueensBoard::remove
/// [`has_queen`]: QueensBoard::has_queen
/// [`queens`]: QueensBoard::queens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueensBoard {
    size: usize,
    cells: Vec<bool>,
}

impl QueensBoard {
    /// Creates an empty board (no queens placed) with the given side length.
    pub fn new(size: usize) -> QueensBoard {
        QueensBoard {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the total number of cells on the board.
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of queens currently placed.
    pub fn num_queens(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Returns true if the given cell holds a queen.
    pub fn has_queen(&self, row: usize, column: usize) -> bool {
        self.cells[self.index_of(row, column)]
    }

    /// Places a queen on the given cell.
    pub fn place(&mut self, row: usize, column: usize) {
        let index = self.index_of(row, column);
        self.cells[index] = true;
    }

    /// Removes any queen from the given cell.
    pub fn remove(&mut self, row: usize, column: usize) {
        let index = self.index_of(row, column);
        self.cells[index] = false;
    }

    /// Clears every cell, returning the board to its empty initial state.
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    /// Iterator over the (row, column) positions that currently hold queens.
    pub fn queens(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, &occupied)| {
            if occupied {
                Some((index / self.size, index % self.size))
            } else {
                None
            }
        })
    }

    /// Returns the column of the leftmost queen in the given row, if any.
    pub fn column_in_row(&self, row: usize) -> Option<usize> {
        (0..self.size).find(|&column| self.has_queen(row, column))
    }

    /// Replaces the board contents with one queen per row at the supplied column
    /// indices. The slice must contain exactly one entry per row, each within
    /// `0..size`. On failure the board is left untouched.
    pub fn set_columns(&mut self, columns: &[usize]) -> Result<(), String> {
        if columns.len() != self.size {
            return Err(format!(
                "expected {} positions, found {}",
                self.size,
                columns.len()
            ));
        }
        for (row, &column) in columns.iter().enumerate() {
            if column >= self.size {
                return Err(format!(
                    "column index {column} in row {row} is outside the allowed range 0-{}",
                    self.size - 1
                ));
            }
        }

        self.reset();
        for (row, &column) in columns.iter().enumerate() {
            self.place(row, column);
        }
        Ok(())
    }

    // ===== Evaluation =====

    /// Returns true if a queen placed at (`row`, `column`) would not be attacked by any
    /// queen in a strictly earlier row.
    ///
    /// Only the column above the cell and the two upward diagonals are examined, so the
    /// check is meaningful while queens are placed one row at a time from the top of the
    /// board with all later rows still empty. It is not a full-board conflict test; use
    /// [`heuristic_value`](QueensBoard::heuristic_value) for that.
    pub fn is_safe(&self, row: usize, column: usize) -> bool {
        // A queen anywhere above in the same column attacks the candidate cell.
        for earlier_row in 0..row {
            if self.has_queen(earlier_row, column) {
                return false;
            }
        }

        // Walk the upper-left diagonal toward the top edge.
        let mut r = row;
        let mut c = column;
        while r > 0 && c > 0 {
            r -= 1;
            c -= 1;
            if self.has_queen(r, c) {
                return false;
            }
        }

        // Walk the upper-right diagonal toward the top edge.
        let mut r = row;
        let mut c = column;
        while r > 0 && c + 1 < self.size {
            r -= 1;
            c += 1;
            if self.has_queen(r, c) {
                return false;
            }
        }

        true
    }

    /// Returns the number of unordered pairs of placed queens that attack each other,
    /// i.e. share a row, a column, or a diagonal. An empty or conflict-free board
    /// scores 0.
    pub fn heuristic_value(&self) -> usize {
        let queens: Vec<(usize, usize)> = self.queens().collect();

        let mut attacking_pairs = 0;
        for (i, &(row_a, col_a)) in queens.iter().enumerate() {
            for &(row_b, col_b) in &queens[i + 1..] {
                if row_a == row_b
                    || col_a == col_b
                    || row_a.abs_diff(row_b) == col_a.abs_diff(col_b)
                {
                    attacking_pairs += 1;
                }
            }
        }
        attacking_pairs
    }

    /// Returns true when the board holds a complete solution: exactly one queen in
    /// every row, exactly one queen in every column, and no two queens on a shared
    /// diagonal.
    pub fn is_goal_state(&self) -> bool {
        for row in 0..self.size {
            let count = (0..self.size)
                .filter(|&column| self.has_queen(row, column))
                .count();
            if count != 1 {
                return false;
            }
        }

        for column in 0..self.size {
            let count = (0..self.size)
                .filter(|&row| self.has_queen(row, column))
                .count();
            if count != 1 {
                return false;
            }
        }

        let queens: Vec<(usize, usize)> = self.queens().collect();
        for (i, &(row_a, col_a)) in queens.iter().enumerate() {
            for &(row_b, col_b) in &queens[i + 1..] {
                if row_a.abs_diff(row_b) == col_a.abs_diff(col_b) {
                    return false;
                }
            }
        }

        true
    }

    fn index_of(&self, row: usize, column: usize) -> usize {
        assert!(row < self.size);
        assert!(column < self.size);
        row * self.size + column
    }
}

impl fmt::Display for QueensBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row != 0 {
                writeln!(f)?;
            }
            for column in 0..self.size {
                if self.has_queen(row, column) {
                    write!(f, "Q")?;
                } else {
                    write!(f, ".")?;
                }
                if column != self.size - 1 {
                    write!(f, " ")?
                }
            }
        }
        Ok(())
    }
}

impl FromStr for QueensBoard {
    type Err = String;

    /// Parses the comma-separated column list entered in a front end, e.g. `"1,3,0,2"`
    /// for a 4×4 board. The board size is the number of entries.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut columns = Vec::new();
        for part in s.split(',') {
            let trimmed = part.trim();
            let column = trimmed.parse::<usize>().map_err(|_| {
                format!("invalid column index '{trimmed}'; expected a non-negative integer")
            })?;
            columns.push(column);
        }

        let mut board = QueensBoard::new(columns.len());
        board.set_columns(&columns)?;
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = QueensBoard::new(5);
        assert_eq!(board.size(), 5);
        assert_eq!(board.num_cells(), 25);
        assert_eq!(board.num_queens(), 0);

        for row in 0..5 {
            for column in 0..5 {
                assert!(!board.has_queen(row, column));
            }
        }

        assert_eq!(board.heuristic_value(), 0);
    }

    #[test]
    fn place_and_remove_update_occupancy() {
        let mut board = QueensBoard::new(4);

        board.place(2, 3);
        assert!(board.has_queen(2, 3));
        assert_eq!(board.num_queens(), 1);
        assert_eq!(board.column_in_row(2), Some(3));

        board.remove(2, 3);
        assert!(!board.has_queen(2, 3));
        assert_eq!(board.num_queens(), 0);
        assert_eq!(board.column_in_row(2), None);
    }

    #[test]
    fn reset_clears_every_cell() {
        let mut board = QueensBoard::new(4);
        board.set_columns(&[1, 3, 0, 2]).unwrap();
        assert_eq!(board.num_queens(), 4);

        board.reset();
        assert_eq!(board.num_queens(), 0);
        assert_eq!(board.heuristic_value(), 0);
    }

    #[test]
    fn set_columns_validates_input() {
        let mut board = QueensBoard::new(4);

        let err = board.set_columns(&[0, 1]).unwrap_err();
        assert!(err.contains("expected 4 positions"));

        let err = board.set_columns(&[0, 1, 2, 4]).unwrap_err();
        assert!(err.contains("outside the allowed range"));

        // A rejected call must not disturb the board.
        assert_eq!(board.num_queens(), 0);
    }

    #[test]
    fn set_columns_replaces_an_existing_placement() {
        let mut board = QueensBoard::new(4);
        board.set_columns(&[0, 0, 0, 0]).unwrap();
        board.set_columns(&[1, 3, 0, 2]).unwrap();

        assert_eq!(board.num_queens(), 4);
        assert!(board.has_queen(0, 1));
        assert!(!board.has_queen(0, 0));
    }

    #[test]
    fn is_safe_sees_attacks_from_earlier_rows_only() {
        let mut board = QueensBoard::new(4);
        board.place(0, 1);

        assert!(!board.is_safe(2, 1)); // same column
        assert!(!board.is_safe(1, 0)); // upper-right diagonal hits (0, 1)
        assert!(!board.is_safe(1, 2)); // upper-left diagonal hits (0, 1)
        assert!(board.is_safe(1, 3));

        // Rows at or below the candidate are not examined.
        board.place(3, 3);
        assert!(board.is_safe(1, 3));
    }

    #[test]
    fn heuristic_value_counts_attacking_pairs() {
        let mut board = QueensBoard::new(4);
        assert_eq!(board.heuristic_value(), 0);

        // Two queens sharing a column.
        board.place(0, 2);
        board.place(2, 2);
        assert_eq!(board.heuristic_value(), 1);

        // Two queens sharing a diagonal.
        board.reset();
        board.place(0, 0);
        board.place(2, 2);
        assert_eq!(board.heuristic_value(), 1);

        // Two queens sharing a row.
        board.reset();
        board.place(1, 0);
        board.place(1, 3);
        assert_eq!(board.heuristic_value(), 1);

        // Queens that do not attack each other.
        board.reset();
        board.place(0, 1);
        board.place(1, 3);
        assert_eq!(board.heuristic_value(), 0);
    }

    #[test]
    fn heuristic_value_counts_each_pair_once() {
        // Three queens in one column conflict pairwise: three distinct pairs.
        let mut board = QueensBoard::new(4);
        board.place(0, 0);
        board.place(1, 0);
        board.place(2, 0);
        assert_eq!(board.heuristic_value(), 3);
    }

    #[test]
    fn is_goal_state_requires_a_complete_conflict_free_placement() {
        let mut board = QueensBoard::new(4);

        // Empty board.
        assert!(!board.is_goal_state());

        // Two queens in one row.
        board.set_columns(&[1, 3, 0, 2]).unwrap();
        board.place(0, 3);
        assert!(!board.is_goal_state());

        // One queen per row and per column, but on a shared diagonal.
        board.set_columns(&[0, 1, 2, 3]).unwrap();
        assert!(!board.is_goal_state());

        // A known solution.
        board.set_columns(&[1, 3, 0, 2]).unwrap();
        assert!(board.is_goal_state());
    }

    #[test]
    fn board_parses_from_comma_separated_columns() {
        let board: QueensBoard = "1, 3, 0, 2".parse().expect("valid positions");
        assert_eq!(board.size(), 4);
        assert_eq!(board.column_in_row(0), Some(1));
        assert_eq!(board.column_in_row(1), Some(3));
        assert_eq!(board.column_in_row(2), Some(0));
        assert_eq!(board.column_in_row(3), Some(2));
        assert!(board.is_goal_state());
    }

    #[test]
    fn board_from_str_rejects_malformed_input() {
        let err = "1,x,0,2".parse::<QueensBoard>().unwrap_err();
        assert!(err.contains("invalid column index"));

        let err = "1,3,0,4".parse::<QueensBoard>().unwrap_err();
        assert!(err.contains("outside the allowed range"));
    }

    #[test]
    fn display_renders_the_occupancy_grid() {
        let board: QueensBoard = "1,3,0,2".parse().expect("valid positions");
        let expected = ". Q . .\n\
                        . . . Q\n\
                        Q . . .\n\
                        . . Q .";
        assert_eq!(board.to_string(), expected);
    }
}
