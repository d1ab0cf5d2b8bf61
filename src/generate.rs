//! Random generation of solved N-Queens boards.

use rand::{Rng, seq::SliceRandom};

use crate::board::QueensBoard;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueensGenerateError {
    /// No arrangement of non-attacking queens exists for this board size.
    NoSolutionForSize,
}

/// Generates a solved board by running the backtracking search with a shuffled column
/// order in every row, so that repeated calls can produce different solutions.
pub fn generate_solved_board_with_rng<R: Rng>(
    size: usize,
    rng: &mut R,
) -> Result<QueensBoard, QueensGenerateError> {
    log::debug!("Generating a solved {size}x{size} board.");

    let mut board = QueensBoard::new(size);
    if place_queens_shuffled(&mut board, 0, rng) {
        Ok(board)
    } else {
        Err(QueensGenerateError::NoSolutionForSize)
    }
}

/// Generates a solved board using the thread-local random number generator.
pub fn generate_solved_board(size: usize) -> Result<QueensBoard, QueensGenerateError> {
    let mut rng = rand::rng();
    generate_solved_board_with_rng(size, &mut rng)
}

/// Same search as [`place_queens`](crate::solver::place_queens), except that each row
/// tries its candidate columns in a random order.
fn place_queens_shuffled<R: Rng>(board: &mut QueensBoard, row: usize, rng: &mut R) -> bool {
    if row >= board.size() {
        return true;
    }

    let mut columns: Vec<usize> = (0..board.size()).collect();
    columns.shuffle(rng);

    for column in columns {
        if board.is_safe(row, column) {
            board.place(row, column);
            if place_queens_shuffled(board, row + 1, rng) {
                return true;
            }
            board.remove(row, column);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn generator_produces_a_goal_state() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

        let board =
            generate_solved_board_with_rng(8, &mut rng).expect("an 8x8 board has solutions");

        assert_eq!(board.num_queens(), 8);
        assert!(board.is_goal_state());
        assert_eq!(board.heuristic_value(), 0);
    }

    #[test]
    fn generator_is_deterministic_for_a_fixed_seed() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let board_a = generate_solved_board_with_rng(6, &mut rng_a).unwrap();
        let board_b = generate_solved_board_with_rng(6, &mut rng_b).unwrap();
        assert_eq!(board_a, board_b);
    }

    #[test]
    fn generator_fails_for_sizes_without_solutions() {
        let mut rng = StdRng::seed_from_u64(7);

        for size in [2, 3] {
            assert_eq!(
                generate_solved_board_with_rng(size, &mut rng),
                Err(QueensGenerateError::NoSolutionForSize)
            );
        }
    }
}
