//! Authoritative game grid: cell states, the fleet and shot resolution.
//!
//! `GridState` has a single mutator and no interior locking. Hosts that share
//! it between threads must serialize access themselves.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use rand::Rng;

use crate::common::{Cell, GameStatus, GridError, ShotResult};
use crate::config::{FleetComposition, GameConfig};
use crate::placer::{Fleet, FleetPlacer};
use crate::ship::Ship;

/// Shot counters; only shots that changed a cell are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotStats {
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
}

/// N×N grid of [`Cell`]s together with the fleet placed on it.
#[derive(Clone, PartialEq, Eq)]
pub struct GridState {
    grid_size: usize,
    cells: Vec<Cell>,
    fleet: Fleet,
    remaining: usize,
    game_over: bool,
    stats: ShotStats,
}

impl GridState {
    /// An all-`Empty` grid with no fleet.
    pub fn empty(grid_size: usize) -> Self {
        Self {
            grid_size,
            cells: vec![Cell::Empty; grid_size * grid_size],
            fleet: Fleet::default(),
            remaining: 0,
            game_over: false,
            stats: ShotStats::default(),
        }
    }

    /// Create a grid and place a random fleet on it.
    pub fn new<R: Rng + ?Sized>(
        grid_size: usize,
        composition: &FleetComposition,
        rng: &mut R,
    ) -> Self {
        let mut state = Self::empty(grid_size);
        state.reset(grid_size, composition, rng);
        state
    }

    /// Create a grid from a [`GameConfig`].
    pub fn from_config<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self::new(config.grid_size, &config.fleet, rng))
    }

    /// Create a grid with an explicit, validated layout.
    pub fn from_ships<I>(grid_size: usize, ships: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Ship>,
    {
        let fleet = Fleet::from_ships(grid_size, ships)?;
        let mut state = Self::empty(grid_size);
        state.install(fleet);
        Ok(state)
    }

    /// Discard all state and start a new game with a freshly placed fleet.
    ///
    /// Returns the new fleet; a fleet with [`Fleet::skipped`] ships is not an
    /// error.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        grid_size: usize,
        composition: &FleetComposition,
        rng: &mut R,
    ) -> &Fleet {
        *self = Self::empty(grid_size);
        let fleet = FleetPlacer::new(grid_size).place(composition, rng);
        self.install(fleet);
        info!(
            "new game on {}x{} grid: {}/{} ships placed",
            grid_size,
            grid_size,
            self.fleet.placed(),
            self.fleet.requested()
        );
        &self.fleet
    }

    fn install(&mut self, fleet: Fleet) {
        for ship in fleet.ships() {
            for (x, y) in ship.cells() {
                self.cells[y * self.grid_size + x] = Cell::Ship;
            }
        }
        self.remaining = fleet.cell_count();
        self.fleet = fleet;
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.grid_size && y < self.grid_size).then(|| y * self.grid_size + x)
    }

    /// Fire at (`x`, `y`).
    ///
    /// `Empty` becomes `Miss`, `Ship` becomes `Hit`; resolved cells and
    /// off-grid coordinates leave the state untouched.
    pub fn shoot(&mut self, x: usize, y: usize) -> ShotResult {
        let Some(idx) = self.index(x, y) else {
            debug!("shot at ({}, {}) is off the grid", x, y);
            return ShotResult::OutOfBounds;
        };
        let result = match self.cells[idx] {
            Cell::Ship => {
                self.cells[idx] = Cell::Hit;
                self.remaining -= 1;
                self.stats.hits += 1;
                if self.remaining == 0 {
                    self.game_over = true;
                    info!("all ships sunk after {} shots", self.stats.shots + 1);
                }
                ShotResult::Hit
            }
            Cell::Empty => {
                self.cells[idx] = Cell::Miss;
                self.stats.misses += 1;
                ShotResult::Miss
            }
            Cell::Hit | Cell::Miss => ShotResult::NoOp,
        };
        if result != ShotResult::NoOp {
            self.stats.shots += 1;
        }
        debug!("shot at ({}, {}) -> {:?}", x, y, result);
        result
    }

    /// State of the cell at (`x`, `y`).
    pub fn cell_state(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(GridError::OutOfBounds { x, y })
    }

    /// `true` when no cell still holds an intact ship segment.
    pub fn is_won(&self) -> bool {
        self.remaining == 0
    }

    /// `true` once a winning hit has landed; cleared by [`GridState::reset`].
    ///
    /// Unlike [`GridState::is_won`] this stays `false` for a game that
    /// started without any ship cells.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ships(&self) -> &[Ship] {
        self.fleet.ships()
    }

    /// Intact ship cells left on the grid.
    pub fn remaining_ship_cells(&self) -> usize {
        self.remaining
    }

    pub fn stats(&self) -> ShotStats {
        self.stats
    }

    /// Index into [`GridState::ships`] of the ship covering (`x`, `y`).
    pub fn ship_at(&self, x: usize, y: usize) -> Option<usize> {
        self.ships().iter().position(|ship| ship.contains(x, y))
    }

    /// `true` if every cell of ship `index` has been hit.
    pub fn is_sunk(&self, index: usize) -> bool {
        self.ships().get(index).is_some_and(|ship| {
            ship.cells()
                .all(|(x, y)| self.cells[y * self.grid_size + x] == Cell::Hit)
        })
    }

    /// Number of ships with every cell hit.
    pub fn sunk_count(&self) -> usize {
        (0..self.ships().len()).filter(|&i| self.is_sunk(i)).count()
    }

    /// Row-major iterator of `((x, y), cell)`.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        let n = self.grid_size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| ((idx % n, idx / n), cell))
    }
}

impl fmt::Debug for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GridState {{ size: {}, remaining: {}, game_over: {}, stats: {:?}, ships: {:?} }}",
            self.grid_size, self.remaining, self.game_over, self.stats, self.fleet.ships()
        )
    }
}

/// Renders the player's view: ships stay hidden until hit.
impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.grid_size.max(1)) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                let ch = match cell {
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                    Cell::Empty | Cell::Ship => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Orientation;
    use alloc::string::ToString;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn single_destroyer() -> GridState {
        let ship = Ship::new(3, 3, 2, Orientation::Horizontal).unwrap();
        GridState::from_ships(10, [ship]).unwrap()
    }

    #[test]
    fn destroyer_scenario() {
        let mut grid = single_destroyer();
        assert_eq!(grid.shoot(0, 0), ShotResult::Miss);
        assert_eq!(grid.shoot(3, 3), ShotResult::Hit);
        assert!(!grid.is_won());
        assert!(!grid.is_sunk(0));
        assert_eq!(grid.shoot(4, 3), ShotResult::Hit);
        assert!(grid.is_won());
        assert!(grid.is_game_over());
        assert!(grid.is_sunk(0));
        assert_eq!(grid.shoot(3, 3), ShotResult::NoOp);
        assert_eq!(grid.status(), GameStatus::Won);
        assert_eq!(
            grid.stats(),
            ShotStats {
                shots: 3,
                hits: 2,
                misses: 1
            }
        );
    }

    #[test]
    fn off_grid_shot_leaves_state() {
        let mut grid = single_destroyer();
        let before = grid.clone();
        assert_eq!(grid.shoot(10, 5), ShotResult::OutOfBounds);
        assert_eq!(grid.shoot(5, 10), ShotResult::OutOfBounds);
        assert_eq!(grid, before);
        assert_eq!(
            grid.cell_state(10, 5),
            Err(GridError::OutOfBounds { x: 10, y: 5 })
        );
    }

    #[test]
    fn ship_lookup() {
        let grid = single_destroyer();
        assert_eq!(grid.ship_at(4, 3), Some(0));
        assert_eq!(grid.ship_at(5, 3), None);
        assert_eq!(grid.cell_state(4, 3), Ok(Cell::Ship));
        assert!(!grid.is_sunk(1));
    }

    #[test]
    fn empty_fleet_is_won_but_not_over() {
        let mut rng = SmallRng::seed_from_u64(0);
        let grid = GridState::new(5, &FleetComposition::empty(), &mut rng);
        assert!(grid.is_won());
        assert!(!grid.is_game_over());
    }

    #[test]
    fn reset_replaces_everything() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut grid = single_destroyer();
        grid.shoot(3, 3);
        grid.shoot(4, 3);
        let placed = grid.reset(8, &FleetComposition::default(), &mut rng).placed();
        assert_eq!(grid.grid_size(), 8);
        assert!(!grid.is_game_over());
        assert_eq!(grid.stats(), ShotStats::default());
        assert_eq!(grid.ships().len(), placed);
        let ship_cells = grid.cells().filter(|&(_, c)| c == Cell::Ship).count();
        assert_eq!(ship_cells, grid.remaining_ship_cells());
        assert!(grid.cells().all(|(_, c)| !c.is_resolved()));
    }

    #[test]
    fn debug_is_single_line() {
        let text = alloc::format!("{:?}", single_destroyer());
        assert!(text.starts_with("GridState { size: 10, remaining: 2,"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn display_hides_ships() {
        let ship = Ship::new(0, 0, 2, Orientation::Vertical).unwrap();
        let mut grid = GridState::from_ships(3, [ship]).unwrap();
        grid.shoot(0, 0);
        grid.shoot(2, 2);
        assert_eq!(grid.to_string(), "X . .\n. . .\n. . o\n");
    }
}
