//! Common types for the sea battle engine: cell states, shot results and errors.

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Open water that has not been fired at.
    Empty,
    /// Intact ship segment.
    Ship,
    /// Ship segment that has been fired at.
    Hit,
    /// Open water that has been fired at.
    Miss,
}

impl Cell {
    /// `true` once the cell has been fired at.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on an intact ship segment.
    Hit,
    /// Shot landed on open water.
    Miss,
    /// Cell was already resolved; nothing changed.
    NoOp,
    /// Coordinate lies outside the grid; nothing changed.
    OutOfBounds,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Errors returned by grid and fleet operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate is outside `0..grid_size` on either axis.
    OutOfBounds { x: usize, y: usize },
    /// Ship would extend past the grid edge.
    ShipOutOfBounds,
    /// Ship placement overlaps with another ship.
    ShipOverlaps,
    /// Ship size must be at least one cell.
    InvalidShipSize,
    /// Fleet composition has a zero size, a zero count or a repeated size.
    InvalidComposition,
    /// Grid side must lie in `1..=MAX_GRID_SIZE`.
    InvalidGridSize,
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => write!(f, "Coordinate ({}, {}) is off the grid", x, y),
            GridError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GridError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            GridError::InvalidShipSize => write!(f, "Ship size must be positive"),
            GridError::InvalidComposition => write!(f, "Fleet composition is invalid"),
            GridError::InvalidGridSize => write!(f, "Grid size must be between 1 and {}", crate::config::MAX_GRID_SIZE),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
