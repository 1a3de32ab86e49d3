//! Ship geometry: an axis-aligned run of cells on an N×N grid.

use core::fmt;

use crate::common::GridError;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells run along increasing `x`.
    Horizontal,
    /// Cells run along increasing `y`.
    Vertical,
}

impl Orientation {
    /// Coordinate of the `i`-th cell of a run starting at (`x`, `y`).
    #[inline]
    pub fn step(self, x: usize, y: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        }
    }
}

/// A ship placed on the grid, described by its first cell, size and direction.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    x: usize,
    y: usize,
    size: usize,
    orientation: Orientation,
}

impl Ship {
    /// Place a ship with its first cell at (`x`, `y`).
    ///
    /// Only the shape is validated here; bounds against a particular grid are
    /// checked by [`Ship::fits`].
    pub fn new(x: usize, y: usize, size: usize, orientation: Orientation) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidShipSize);
        }
        Ok(Ship {
            x,
            y,
            size,
            orientation,
        })
    }

    /// Returns `true` if every cell lies inside a `grid_size`×`grid_size` grid.
    pub fn fits(&self, grid_size: usize) -> bool {
        let (along, across) = match self.orientation {
            Orientation::Horizontal => (self.x, self.y),
            Orientation::Vertical => (self.y, self.x),
        };
        across < grid_size && along < grid_size && self.size <= grid_size - along
    }

    /// Occupied cells as `(x, y)`, from the origin outward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).map(move |i| self.orientation.step(self.x, self.y, i))
    }

    /// Returns `true` if (`x`, `y`) is one of this ship's cells.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => y == self.y && x >= self.x && x - self.x < self.size,
            Orientation::Vertical => x == self.x && y >= self.y && y - self.y < self.size,
        }
    }

    /// Number of cells the ship occupies.
    pub fn size(&self) -> usize {
        self.size
    }

    /// First cell of the ship as `(x, y)`.
    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ size: {}, origin: ({}, {}), orientation: {:?} }}",
            self.size, self.x, self.y, self.orientation,
        )
    }
}
