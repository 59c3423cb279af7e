use crate::puzzle::Puzzle;
use crate::tile::Tile;

/// Decides by inversion parity whether the solved arrangement is reachable
/// from `puzzle`.
///
/// Odd widths are solvable exactly when the inversion count is even. For
/// even widths the blank's row, counted from the bottom starting at 1, is
/// read from the same state the inversions were counted on: an odd row
/// needs an even inversion count and an even row needs an odd one.
pub fn is_solvable(puzzle: &Puzzle) -> bool {
    let size = puzzle.size();

    let tiles: Vec<u32> = puzzle.tiles().iter().filter_map(Tile::value).collect();
    let inversions = count_inversions(&tiles);

    if size % 2 == 1 {
        return inversions % 2 == 0;
    }

    let (space_row, _) = puzzle.space_position();
    let space_row_from_bottom = size - space_row;

    match (space_row_from_bottom % 2, inversions % 2) {
        (1, parity) => parity == 0,
        (_, parity) => parity == 1,
    }
}

/// Pairs `i < j` with `tiles[i] > tiles[j]`.
pub fn count_inversions(tiles: &[u32]) -> usize {
    tiles
        .iter()
        .enumerate()
        .map(|(i, value)| tiles[i + 1..].iter().filter(|later| *later < value).count())
        .sum()
}
