#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod placer;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use common::*;
pub use config::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placer::{Fleet, FleetPlacer};
pub use ship::*;
