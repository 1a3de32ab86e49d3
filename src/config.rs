//! Game configuration: grid size, fleet composition and placement limits.

use alloc::vec::Vec;

use crate::common::GridError;

/// Side length of the default square grid.
pub const GRID_SIZE: usize = 10;

/// Largest accepted grid side; columns are labelled `A`..`Z`.
pub const MAX_GRID_SIZE: usize = 26;

/// Random attempts made for a single ship before it is skipped.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Classic fleet as `(size, count)`: 10 ships covering 20 cells.
pub const DEFAULT_FLEET: [(usize, usize); 4] = [(4, 1), (3, 2), (2, 3), (1, 4)];

/// Required number of ships per size class, kept in insertion order so that
/// placement draws from the rng in a reproducible sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<(usize, usize)>", into = "Vec<(usize, usize)>")
)]
pub struct FleetComposition {
    entries: Vec<(usize, usize)>,
}

impl FleetComposition {
    /// Build a composition from `(size, count)` pairs.
    pub fn new<I>(pairs: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut entries: Vec<(usize, usize)> = Vec::new();
        for (size, count) in pairs {
            if size == 0 || count == 0 || entries.iter().any(|&(s, _)| s == size) {
                return Err(GridError::InvalidComposition);
            }
            entries.push((size, count));
        }
        Ok(Self { entries })
    }

    /// Composition with no ships at all.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// `(size, count)` pairs in placement order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Total number of ships requested.
    pub fn ship_count(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Total number of grid cells the full fleet occupies.
    pub fn cell_count(&self) -> usize {
        self.entries
            .iter()
            .fold(0usize, |acc, &(size, count)| acc.saturating_add(size.saturating_mul(count)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FleetComposition {
    fn default() -> Self {
        Self {
            entries: DEFAULT_FLEET.to_vec(),
        }
    }
}

impl TryFrom<Vec<(usize, usize)>> for FleetComposition {
    type Error = GridError;

    fn try_from(pairs: Vec<(usize, usize)>) -> Result<Self, Self::Error> {
        Self::new(pairs)
    }
}

impl From<FleetComposition> for Vec<(usize, usize)> {
    fn from(fleet: FleetComposition) -> Self {
        fleet.entries
    }
}

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    pub grid_size: usize,
    pub fleet: FleetComposition,
    /// Fixed rng seed; `None` seeds from the thread rng.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            fleet: FleetComposition::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check that the grid side lies in `1..=MAX_GRID_SIZE`.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(GridError::InvalidGridSize);
        }
        Ok(())
    }

    /// Parse a JSON config; missing fields fall back to the defaults.
    #[cfg(feature = "std")]
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}
