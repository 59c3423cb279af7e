use std::fs;
use std::path::Path;
use crate::puzzle::{Puzzle, PuzzleError};
use crate::tile::Tile;

/// Reads a whitespace separated grid, one row per line.
///
/// Tokens that are not numbers become the blank and rows shorter than the
/// widest one are padded with blanks before validation. Blank lines are
/// skipped.
pub fn parse_puzzle(text: &str) -> Result<Puzzle, PuzzleError> {
    let mut rows: Vec<Vec<Tile>> = text
        .lines()
        .map(|line| line.split_whitespace().map(Tile::from_token).collect::<Vec<Tile>>())
        .filter(|row| !row.is_empty())
        .collect();

    let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(max_cols, Tile::Space);
    }

    Puzzle::from_rows(rows)
}

pub fn read_puzzle<P: AsRef<Path>>(path: P) -> Result<Puzzle, PuzzleError> {
    let text = fs::read_to_string(path)?;
    parse_puzzle(&text)
}
