//! Row-by-row backtracking search for the N-Queens puzzle.
//!
//! Queens are placed one per row starting from the top of the board. For each row the
//! columns are tried in increasing order, and a placement is undone whenever the rows
//! below it cannot all be completed. The first complete placement found is kept, so the
//! solver always produces the same solution for a given board size.

use crate::board::QueensBoard;

/// Recursively fills `row` and every row below it with non-attacking queens.
///
/// Rows above `row` must already hold a consistent partial placement (at most one queen
/// per row, none attacking another) and rows from `row` down must be empty. Returns true
/// once every row holds a queen, leaving the completed placement on the board. Returns
/// false when no column in `row` can be completed, with every queen this call placed
/// removed again.
pub fn place_queens(board: &mut QueensBoard, row: usize) -> bool {
    // Base case: every row holds a queen.
    if row >= board.size() {
        return true;
    }

    for column in 0..board.size() {
        if board.is_safe(row, column) {
            board.place(row, column);
            if place_queens(board, row + 1) {
                return true;
            }
            // The rows below could not be completed with this queen, so undo the
            // placement and try the next column.
            board.remove(row, column);
        }
    }

    false
}

/// Clears the board and searches for a complete placement starting from the top row.
///
/// Returns true if a solution was found, in which case the board holds it. For sizes
/// with no solution (2 and 3) the search exhausts every branch, leaves the board empty,
/// and returns false.
pub fn solve(board: &mut QueensBoard) -> bool {
    let size = board.size();
    log::debug!("Solving a {size}x{size} board with row-by-row backtracking.");

    board.reset();
    place_queens(board, 0)
}
