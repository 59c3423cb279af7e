use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Value(u32),
    Space,
}

impl Tile {
    /// Anything that does not parse as a positive number is read as the blank.
    pub fn from_token(token: &str) -> Self {
        match token.trim().parse::<u32>() {
            Ok(0) | Err(_) => Tile::Space,
            Ok(value) => Tile::Value(value),
        }
    }

    pub fn is_space(&self) -> bool {
        matches!(self, Tile::Space)
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            Tile::Value(value) => Some(*value),
            Tile::Space => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tile::Value(value) => write!(f, "{}", value),
            Tile::Space => write!(f, " "),
        }
    }
}
