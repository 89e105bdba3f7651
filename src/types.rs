//! Newtype wrappers for board addressing.

use std::fmt;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A position on the board (0-8, row-major: `row * 3 + col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    /// Create a new position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the position is >= 9.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value < CELL_COUNT {
            Ok(Position(value))
        } else {
            Err(crate::Error::InvalidPosition { position: value })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for Position {
    type Error = crate::Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Position::new(value)
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0).is_ok());
        assert!(Position::new(8).is_ok());
        assert!(matches!(
            Position::new(9),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_conversions() {
        let pos = Position::try_from(7).unwrap();
        assert_eq!(usize::from(pos), 7);
        assert_eq!(pos.to_string(), "7");
        assert!(Position::try_from(9).is_err());
    }
}
