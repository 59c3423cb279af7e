use serde::{Deserialize, Serialize};
use crate::puzzle::Puzzle;
use crate::solver::{Outcome, SolveResult};
use crate::traits::puzzle::{DebugPrintable, Heuristic};

type Grid = Vec<Vec<Option<u32>>>;

/// Machine readable summary of one search; blanks are `null` in `path`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SolutionReport {
    pub source: String,
    pub size: usize,
    pub outcome: String,
    pub solvable: bool,
    pub moves: Option<usize>,
    pub directions: Option<String>,
    pub states_generated: usize,
    pub elapsed_ms: u64,
    pub start: Grid,
    pub path: Vec<Grid>,
}

fn to_grid(puzzle: &Puzzle) -> Grid {
    puzzle
        .rows()
        .map(|row| row.iter().map(|t| t.value()).collect())
        .collect()
}

impl SolutionReport {
    pub fn new(source: &str, start: &Puzzle, result: &SolveResult) -> Self {
        let path = result.outcome.path().unwrap_or(&[]);
        let solved = result.outcome.path().is_some();

        Self {
            source: source.to_string(),
            size: start.size(),
            outcome: result.outcome.label().to_string(),
            solvable: result.outcome != Outcome::Unsolvable,
            moves: solved.then(|| path.len()),
            directions: solved.then(|| start.moves_str(path)),
            states_generated: result.states,
            elapsed_ms: result.elapsed.as_millis() as u64,
            start: to_grid(start),
            path: path.iter().map(to_grid).collect(),
        }
    }
}

fn summary(result: &SolveResult) -> String {
    match &result.outcome {
        Outcome::Solved(path) => format!("Puzzle solved in {} moves!", path.len()),
        Outcome::Unsolvable | Outcome::Exhausted => "No solution exists for this puzzle.".to_string(),
        Outcome::LimitReached => format!(
            "Search stopped after generating {} states without reaching the goal.",
            result.states
        ),
    }
}

/// Plain listing: every state on the path under a `Move i:` heading.
pub fn render_text(result: &SolveResult) -> String {
    let mut out = summary(result);

    if let Some(path) = result.outcome.path() {
        out.push_str("\nSolution Path:\n");
        for (idx, state) in path.iter().enumerate() {
            out.push_str(&format!("Move {}:\n{}\n\n", idx + 1, state));
        }
    }

    out.trim_end().to_string()
}

/// Box drawn grids with the blank highlighted, headed by the blank's moves.
/// `show_distances` adds the start's per-tile Manhattan distances.
pub fn render_pretty(start: &Puzzle, result: &SolveResult, show_distances: bool) -> String {
    let mut out = start.pretty_print(false);
    if show_distances {
        out.push_str(&format!("\nDistances (total {}):\n{}", start.get_heuristic(), start.pretty_print(true)));
    }
    out.push_str(&format!("\n{}", summary(result)));

    if let Some(path) = result.outcome.path() {
        let directions = start.directions_along(path);
        out.push_str(&format!("\nMoves: {}\n", start.moves_str(path)));
        for (idx, (state, dir)) in path.iter().zip(directions).enumerate() {
            out.push_str(&format!("\n{} {:?}\n{}", idx + 1, dir, state.pretty_print(false)));
        }
    }

    out
}
