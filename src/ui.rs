#![cfg(feature = "std")]
//! Text rendering of a grid and A1-style coordinate helpers.

use std::fmt::Write;

use crate::common::Cell;
use crate::grid::GridState;

/// Column label for `x`: `A`..`Z`, then `#`.
fn column_label(x: usize) -> char {
    if x < 26 {
        (b'A' + x as u8) as char
    } else {
        '#'
    }
}

/// Format (`x`, `y`) as e.g. `C4`.
pub fn coord_to_string(x: usize, y: usize) -> String {
    std::format!("{}{}", column_label(x), y + 1)
}

/// Parse `C4`-style input into (`x`, `y`). Bounds are not checked.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(((col_ch as u8 - b'A') as usize, row - 1))
}

/// Render the grid with row and column labels. With `reveal`, intact ship
/// cells are drawn as `S`.
pub fn render_grid(state: &GridState, reveal: bool) -> String {
    let n = state.grid_size();
    let mut out = String::from("   ");
    for x in 0..n {
        let _ = write!(out, " {}", column_label(x));
    }
    out.push('\n');
    for y in 0..n {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..n {
            let ch = match state.cell_state(x, y) {
                Ok(Cell::Hit) => 'X',
                Ok(Cell::Miss) => 'o',
                Ok(Cell::Ship) if reveal => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::{Orientation, Ship};

    #[test]
    fn coordinates() {
        assert_eq!(parse_coord("a1"), Some((0, 0)));
        assert_eq!(parse_coord("J10"), Some((9, 9)));
        assert_eq!(parse_coord("C4"), Some((2, 3)));
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("4C"), None);
        assert_eq!(parse_coord("B"), None);
        assert_eq!(coord_to_string(2, 3), "C4");
    }

    #[test]
    fn reveal_toggle() {
        let ship = Ship::new(1, 0, 2, Orientation::Horizontal).unwrap();
        let mut grid = GridState::from_ships(3, [ship]).unwrap();
        grid.shoot(1, 0);
        grid.shoot(0, 2);
        assert_eq!(
            render_grid(&grid, true),
            "    A B C\n 1  . X S\n 2  . . .\n 3  o . .\n"
        );
        assert_eq!(
            render_grid(&grid, false),
            "    A B C\n 1  . X .\n 2  . . .\n 3  o . .\n"
        );
    }
}
