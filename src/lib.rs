pub mod puzzle;
pub mod report;
pub mod solvability;
pub mod solver;
pub mod tile;
pub mod traits;
pub mod util;


pub use puzzle::{Direction, Puzzle, PuzzleError};
pub use solvability::is_solvable;
pub use solver::{solve, solve_with, Outcome, SolveOptions, SolveResult};
pub use tile::Tile;
