//! Random, non-overlapping fleet placement.
//!
//! Each ship gets a bounded number of random attempts. A ship that cannot be
//! placed within that budget is skipped and the fleet comes back
//! under-populated; callers inspect [`Fleet::skipped`] to notice.

use alloc::vec;
use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::common::GridError;
use crate::config::{FleetComposition, MAX_GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Ships laid out for one game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fleet {
    ships: Vec<Ship>,
    requested: usize,
}

impl Fleet {
    /// Build a fleet from explicit ships, checking bounds and overlap.
    pub fn from_ships<I>(grid_size: usize, ships: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Ship>,
    {
        if grid_size == 0 || grid_size > MAX_GRID_SIZE {
            return Err(GridError::InvalidGridSize);
        }
        let mut occupied = vec![false; grid_size * grid_size];
        let mut placed = Vec::new();
        for ship in ships {
            if !ship.fits(grid_size) {
                return Err(GridError::ShipOutOfBounds);
            }
            if !FleetPlacer::is_legal(&occupied, grid_size, &ship) {
                return Err(GridError::ShipOverlaps);
            }
            mark(&mut occupied, grid_size, &ship);
            placed.push(ship);
        }
        let requested = placed.len();
        Ok(Fleet {
            ships: placed,
            requested,
        })
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships the composition asked for.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of ships actually on the grid.
    pub fn placed(&self) -> usize {
        self.ships.len()
    }

    /// Ships dropped after exhausting their placement attempts.
    pub fn skipped(&self) -> usize {
        self.requested - self.ships.len()
    }

    pub fn is_complete(&self) -> bool {
        self.skipped() == 0
    }

    /// Total cells covered by placed ships.
    pub fn cell_count(&self) -> usize {
        self.ships.iter().map(Ship::size).sum()
    }
}

/// Places a fleet on a square grid using an injected rng.
#[derive(Debug, Clone, Copy)]
pub struct FleetPlacer {
    grid_size: usize,
    max_attempts: usize,
}

impl FleetPlacer {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Override the per-ship attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// A candidate is legal when every cell is on the grid and unoccupied.
    pub fn is_legal(occupied: &[bool], grid_size: usize, ship: &Ship) -> bool {
        ship.fits(grid_size) && ship.cells().all(|(x, y)| !occupied[y * grid_size + x])
    }

    /// Place every ship of `composition`, in order, returning whatever fits.
    pub fn place<R: Rng + ?Sized>(&self, composition: &FleetComposition, rng: &mut R) -> Fleet {
        let n = self.grid_size;
        let mut fleet = Fleet {
            ships: Vec::with_capacity(composition.ship_count()),
            requested: composition.ship_count(),
        };
        if n == 0 {
            warn!("grid has no cells; skipping all {} ships", fleet.requested);
            return fleet;
        }
        let mut occupied = vec![false; n * n];

        for (size, count) in composition.iter() {
            for _ in 0..count {
                match self.random_placement(&occupied, size, rng) {
                    Some(ship) => {
                        debug!("placed {:?}", ship);
                        mark(&mut occupied, n, &ship);
                        fleet.ships.push(ship);
                    }
                    None => warn!(
                        "no room for size-{} ship after {} attempts; skipping",
                        size, self.max_attempts
                    ),
                }
            }
        }
        fleet
    }

    /// Sample origins across the whole grid until a legal candidate turns up.
    fn random_placement<R: Rng + ?Sized>(
        &self,
        occupied: &[bool],
        size: usize,
        rng: &mut R,
    ) -> Option<Ship> {
        let n = self.grid_size;
        for _ in 0..self.max_attempts {
            let x = rng.random_range(0..n);
            let y = rng.random_range(0..n);
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let ship = Ship::new(x, y, size, orientation).ok()?;
            if Self::is_legal(occupied, n, &ship) {
                return Some(ship);
            }
        }
        None
    }
}

/// Convenience wrapper around [`FleetPlacer::place`].
pub fn place<R: Rng + ?Sized>(grid_size: usize, composition: &FleetComposition, rng: &mut R) -> Fleet {
    FleetPlacer::new(grid_size).place(composition, rng)
}

fn mark(occupied: &mut [bool], grid_size: usize, ship: &Ship) {
    for (x, y) in ship.cells() {
        occupied[y * grid_size + x] = true;
    }
}
