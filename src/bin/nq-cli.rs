use clap::{Args, Parser, Subcommand};
use nqueens_rs::generate::{
    generate_solved_board, generate_solved_board_with_rng, QueensGenerateError,
};
use nqueens_rs::{solver, QueensBoard};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;

/// Smallest board size accepted on the command line. Boards of size 2 and 3 have no
/// solutions, and a 1x1 board is not an interesting puzzle.
const MIN_BOARD_SIZE: usize = 4;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        MainCommand::Queens(queens_command) => match queens_command.command {
            QueensSubcommand::Solve(args) => execute_queens_solve(args),
            QueensSubcommand::Check(args) => execute_queens_check(args),
            QueensSubcommand::Generate(args) => execute_queens_generate(args),
        },
    }
}

fn execute_queens_solve(args: QueensSolveArgs) -> Result<(), String> {
    ensure_minimum_size(args.size)?;

    let mut board = QueensBoard::new(args.size);
    if !solver::solve(&mut board) {
        let size = args.size;
        return Err(format!("no solution exists for a {size}x{size} board"));
    }

    println!("{board}");
    println!();
    println!(
        "Heuristic value for the solution state: {}",
        board.heuristic_value()
    );
    Ok(())
}

fn execute_queens_check(args: QueensCheckArgs) -> Result<(), String> {
    let board: QueensBoard = args.positions.parse()?;
    ensure_minimum_size(board.size())?;

    println!("{board}");
    println!();
    println!(
        "Heuristic value for the given state: {}",
        board.heuristic_value()
    );
    if board.is_goal_state() {
        println!("The given state is a goal state.");
    } else {
        println!("The given state is not a goal state.");
    }
    Ok(())
}

fn execute_queens_generate(args: QueensGenerateArgs) -> Result<(), String> {
    ensure_minimum_size(args.size)?;

    let result = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_solved_board_with_rng(args.size, &mut rng)
        }
        None => generate_solved_board(args.size),
    };

    let board = result.map_err(|err| match err {
        QueensGenerateError::NoSolutionForSize => {
            let size = args.size;
            format!("no solution exists for a {size}x{size} board")
        }
    })?;

    println!("{board}");
    Ok(())
}

fn ensure_minimum_size(size: usize) -> Result<(), String> {
    if size < MIN_BOARD_SIZE {
        return Err(format!(
            "board size must be at least {MIN_BOARD_SIZE}, found {size}"
        ));
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "nq-cli", version, about = "N-Queens CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: MainCommand,
}

#[derive(Subcommand)]
enum MainCommand {
    /// Queens-related commands
    Queens(QueensCommand),
}

#[derive(Args)]
struct QueensCommand {
    #[command(subcommand)]
    command: QueensSubcommand,
}

#[derive(Subcommand)]
enum QueensSubcommand {
    /// Find the first solution for an empty board using the backtracking solver
    Solve(QueensSolveArgs),
    /// Evaluate a user-supplied placement for conflicts and goal completion
    Check(QueensCheckArgs),
    /// Generate a random solved board
    Generate(QueensGenerateArgs),
}

#[derive(Args)]
struct QueensSolveArgs {
    /// Board size (at least 4).
    #[arg()]
    size: usize,
}

#[derive(Args)]
struct QueensCheckArgs {
    /// Comma-separated column index for the queen in each row, e.g. "1,3,0,2".
    #[arg()]
    positions: String,
}

#[derive(Args)]
struct QueensGenerateArgs {
    /// Board size (at least 4).
    #[arg()]
    size: usize,

    /// Seed for the random number generator (uses a random seed when omitted)
    #[arg(long)]
    seed: Option<u64>,
}
