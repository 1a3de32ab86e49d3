//! Commonly used types for ease of import.

pub use crate::{Cell, FleetComposition, GameConfig, GridState, Orientation, Ship, ShotResult};
