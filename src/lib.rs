//! nqueens-rs
//!
//! This crate contains a backtracking solver and board-evaluation routines for the
//! N-Queens placement problem. It is intended to back an external GUI front end, which
//! supplies a board size and an optional initial placement and renders the resulting
//! board state, conflict count, and goal verdict.

#![deny(warnings)]
#![allow(dead_code)]

pub mod board;
pub mod generate;
pub mod solver;

// Re-export main types for convenience
pub use board::QueensBoard;
pub use generate::{generate_solved_board, generate_solved_board_with_rng, QueensGenerateError};
pub use solver::{place_queens, solve};
