use std::fmt;
use std::io;
use std::str::FromStr;
use crate::tile::Tile;


#[derive(Debug)]
pub enum PuzzleError {
    InvalidState(String),
    IllegalMove(String),
    Io(io::Error),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleError::InvalidState(msg) => write!(f, "Invalid puzzle state: {}", msg),
            PuzzleError::IllegalMove(msg) => write!(f, "Illegal move: {}", msg),
            PuzzleError::Io(err) => write!(f, "Could not read puzzle: {}", err),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PuzzleError {
    fn from(err: io::Error) -> Self {
        PuzzleError::Io(err)
    }
}


/// Direction the blank travels. Successors are always generated in the
/// order of `Direction::ALL`, which decides ties between equal-cost nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UP,
    DOWN,
    LEFT,
    RIGHT
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::UP, Direction::DOWN, Direction::LEFT, Direction::RIGHT];

    pub fn to_char(&self) -> char {
        match self {
            Direction::UP => 'U',
            Direction::DOWN => 'D',
            Direction::LEFT => 'L',
            Direction::RIGHT => 'R'
        }
    }
}

/// An n×n arrangement holding every tile in 1..n²-1 plus exactly one blank.
///
/// Only the constructors in this module can produce a `Puzzle`, so the
/// blank index is always in sync with `tiles`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Puzzle {
    size: usize,
    tiles: Vec<Tile>,
    space_idx: usize,
}

impl Puzzle {
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, PuzzleError> {
        let size = rows.len();
        if size == 0 {
            return Err(PuzzleError::InvalidState("puzzle has no rows".into()));
        }

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(PuzzleError::InvalidState(format!(
                    "row {} has {} cells, expected {} for a {}x{} puzzle",
                    row_idx + 1, row.len(), size, size, size
                )));
            }
        }

        Self::from_tiles(size, rows.into_iter().flatten().collect())
    }

    pub fn from_tiles(size: usize, tiles: Vec<Tile>) -> Result<Self, PuzzleError> {
        if size == 0 || tiles.len() != size * size {
            return Err(PuzzleError::InvalidState(format!(
                "expected {} cells for a {}x{} puzzle, got {}",
                size * size, size, size, tiles.len()
            )));
        }

        let mut spaces = tiles.iter().enumerate().filter(|(_, t)| t.is_space()).map(|(idx, _)| idx);
        let space_idx = spaces
            .next()
            .ok_or_else(|| PuzzleError::InvalidState("no blank cell found".into()))?;
        if spaces.next().is_some() {
            return Err(PuzzleError::InvalidState("more than one blank cell".into()));
        }

        let mut values: Vec<u32> = tiles.iter().filter_map(Tile::value).collect();
        values.sort_unstable();
        for (expected, value) in (1..).zip(&values) {
            if *value != expected {
                return Err(PuzzleError::InvalidState(format!(
                    "tiles must be exactly 1..={} without repeats, found {}",
                    size * size - 1, value
                )));
            }
        }

        Ok(Self {
            size,
            tiles,
            space_idx,
        })
    }

    /// Tiles 1..n²-1 in row-major order with the blank in the last cell.
    /// `size` must be at least 1.
    pub fn solved(size: usize) -> Puzzle {
        debug_assert!(size > 0, "solved puzzle needs a size of at least 1");
        let cells = size * size;
        let mut tiles: Vec<Tile> = (1..cells as u32).map(Tile::Value).collect();
        tiles.push(Tile::Space);

        Puzzle {
            size,
            tiles,
            space_idx: cells - 1,
        }
    }

    pub fn is_solved(&self, solved_puzzle: &Puzzle) -> bool {
        self == solved_puzzle
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.size)
    }

    pub fn space_idx(&self) -> usize {
        self.space_idx
    }

    /// Row and column of the blank, both 0-indexed from the top left.
    pub fn space_position(&self) -> (usize, usize) {
        (self.space_idx / self.size, self.space_idx % self.size)
    }

    pub fn legal_moves(&self) -> Vec<Direction> {
        let mut legal_moves: Vec<Direction> = Direction::ALL.to_vec();

        let (row, col) = self.space_position();

        if row == 0 {
            legal_moves.retain(|&d| d != Direction::UP);
        }
        if row == self.size - 1 {
            legal_moves.retain(|&d| d != Direction::DOWN);
        }
        if col == 0 {
            legal_moves.retain(|&d| d != Direction::LEFT);
        }
        if col == self.size - 1 {
            legal_moves.retain(|&d| d != Direction::RIGHT);
        }

        legal_moves
    }

    /// Slides the blank one cell in `dir`, returning the resulting state.
    pub fn move_space(&self, dir: Direction) -> Result<Puzzle, PuzzleError> {
        let (row, col) = self.space_position();

        let target_idx = match dir {
            Direction::UP => {
                if row == 0 {
                    return Err(PuzzleError::IllegalMove("Cannot move up from top edge".into()));
                }
                self.space_idx - self.size
            },
            Direction::DOWN => {
                if row == self.size - 1 {
                    return Err(PuzzleError::IllegalMove("Cannot move down from bottom edge".into()));
                }
                self.space_idx + self.size
            },
            Direction::LEFT => {
                if col == 0 {
                    return Err(PuzzleError::IllegalMove("Cannot move left from left edge".into()));
                }
                self.space_idx - 1
            },
            Direction::RIGHT => {
                if col == self.size - 1 {
                    return Err(PuzzleError::IllegalMove("Cannot move right from right edge".into()));
                }
                self.space_idx + 1
            },
        };

        let mut tiles = self.tiles.clone();
        tiles.swap(self.space_idx, target_idx);

        Ok(Puzzle {
            size: self.size,
            tiles,
            space_idx: target_idx,
        })
    }

    /// Every state one slide away, in `Direction::ALL` order.
    pub fn generate_successors(&self) -> Vec<Puzzle> {
        let mut result: Vec<Puzzle> = Vec::with_capacity(4);

        for move_ in self.legal_moves() {
            if let Ok(successor) = self.move_space(move_) {
                result.push(successor);
            }
        }

        result
    }

    /// The blank move that turns `self` into `next`, if they are adjacent.
    pub fn direction_to(&self, next: &Puzzle) -> Option<Direction> {
        self.legal_moves()
            .into_iter()
            .find(|&dir| self.move_space(dir).map_or(false, |p| &p == next))
    }

    /// Blank moves along `path`, where `path` starts one move after `self`.
    pub fn directions_along(&self, path: &[Puzzle]) -> Vec<Direction> {
        let mut directions = Vec::with_capacity(path.len());
        let mut current = self;

        for next in path {
            match current.direction_to(next) {
                Some(dir) => directions.push(dir),
                None => break,
            }
            current = next;
        }

        directions
    }

    pub fn moves_str(&self, path: &[Puzzle]) -> String {
        self.directions_along(path).iter().map(|d| d.to_char()).collect()
    }

    /// One-line form `n,n,c,c,...` with `0` standing for the blank.
    pub fn serialized(&self) -> String {
        let tiles_str: Vec<String> = self
            .tiles
            .iter()
            .map(|t| t.value().unwrap_or(0).to_string())
            .collect();

        format!("{},{},{}", self.size, self.size, tiles_str.join(","))
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.trim().split(',');

        let mut dimension = |name: &str| -> Result<usize, PuzzleError> {
            fields
                .next()
                .and_then(|f| f.trim().parse::<usize>().ok())
                .ok_or_else(|| PuzzleError::InvalidState(format!("missing or malformed {}", name)))
        };

        let width = dimension("width")?;
        let height = dimension("height")?;
        if width != height {
            return Err(PuzzleError::InvalidState(format!(
                "puzzle must be square, got {}x{}", width, height
            )));
        }

        let tiles: Vec<Tile> = fields.map(Tile::from_token).collect();

        Self::from_tiles(width, tiles)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row_idx, row) in self.rows().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|t| t.to_string()).collect();
            write!(f, "{}", cells.join(" "))?;
        }

        Ok(())
    }
}
