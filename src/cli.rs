#![cfg(feature = "std")]
//! Terminal presentation layer: command parsing, the interactive loop and a
//! random auto-shooter.

use std::io::{BufRead, Write};

use log::info;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::common::ShotResult;
use crate::config::GameConfig;
use crate::grid::{GridState, ShotStats};
use crate::ui::{coord_to_string, parse_coord, render_grid};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Shoot(usize, usize),
    New,
    Show,
    Help,
    Quit,
}

/// Parse `C4`, `2 3`, `new`, `show`, `help` or `quit`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "new" | "n" => return Some(Command::New),
        "show" | "s" => return Some(Command::Show),
        "help" | "h" | "?" => return Some(Command::Help),
        "quit" | "q" | "exit" => return Some(Command::Quit),
        _ => {}
    }
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [coord] => parse_coord(coord).map(|(x, y)| Command::Shoot(x, y)),
        [x, y] => Some(Command::Shoot(x.parse().ok()?, y.parse().ok()?)),
        _ => None,
    }
}

/// Seeded rng, or one seeded from the thread rng.
pub fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

const HELP: &str = "Commands: <col><row> (e.g. C4) or `x y` to fire, new, show, quit";

/// Interactive game over arbitrary input and output streams.
pub fn run_play<I, O>(config: &GameConfig, reveal: bool, input: I, mut out: O) -> anyhow::Result<()>
where
    I: BufRead,
    O: Write,
{
    let mut rng = make_rng(config.seed);
    let mut grid = GridState::from_config(config, &mut rng)?;
    report_fleet(&grid, &mut out)?;
    writeln!(out, "{}", render_grid(&grid, reveal))?;
    writeln!(out, "{}", HELP)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => writeln!(out, "{}", HELP)?,
            Some(Command::Show) => writeln!(out, "{}", render_grid(&grid, reveal))?,
            Some(Command::New) => {
                grid.reset(config.grid_size, &config.fleet, &mut rng);
                report_fleet(&grid, &mut out)?;
                writeln!(out, "{}", render_grid(&grid, reveal))?;
            }
            Some(Command::Shoot(x, y)) => {
                if grid.is_game_over() {
                    writeln!(out, "Game over. Type `new` to play again.")?;
                    continue;
                }
                match grid.shoot(x, y) {
                    ShotResult::OutOfBounds => writeln!(out, "({}, {}) is off the grid", x, y)?,
                    ShotResult::NoOp => {
                        writeln!(out, "{} was already fired at", coord_to_string(x, y))?
                    }
                    result => {
                        writeln!(out, "{} -> {:?}", coord_to_string(x, y), result)?;
                        writeln!(out, "{}", render_grid(&grid, reveal))?;
                        if grid.is_game_over() {
                            let stats = grid.stats();
                            writeln!(
                                out,
                                "Victory! All ships sunk in {} shots ({} hits, {} misses).",
                                stats.shots, stats.hits, stats.misses
                            )?;
                        }
                    }
                }
            }
            None => writeln!(out, "Invalid input. {}", HELP)?,
        }
        out.flush()?;
    }
    Ok(())
}

fn report_fleet<O: Write>(grid: &GridState, out: &mut O) -> anyhow::Result<()> {
    let fleet = grid.fleet();
    writeln!(
        out,
        "New game: {} ships on a {}x{} grid.",
        fleet.placed(),
        grid.grid_size(),
        grid.grid_size()
    )?;
    if !fleet.is_complete() {
        writeln!(out, "Note: {} ships did not fit and were skipped.", fleet.skipped())?;
    }
    Ok(())
}

/// Fire at every cell in a random order until the fleet is sunk.
pub fn auto_play<R: Rng + ?Sized>(grid: &mut GridState, rng: &mut R) -> ShotStats {
    let n = grid.grid_size();
    let mut targets: Vec<(usize, usize)> = (0..n * n).map(|i| (i % n, i / n)).collect();
    targets.shuffle(rng);
    for (x, y) in targets {
        if grid.is_won() {
            break;
        }
        grid.shoot(x, y);
    }
    let stats = grid.stats();
    info!("auto play finished: {:?}", stats);
    stats
}
