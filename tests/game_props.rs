use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{Cell, FleetComposition, GridState, ShotResult, GRID_SIZE};

fn shots(seed: u64, count: usize) -> Vec<(usize, usize)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.random_range(0..=GRID_SIZE), rng.random_range(0..=GRID_SIZE)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn replaying_a_seed_is_reproducible(seed in any::<u64>(), shot_seed in any::<u64>()) {
        let fleet = FleetComposition::default();
        let script = shots(shot_seed, 150);
        let mut a = GridState::new(GRID_SIZE, &fleet, &mut SmallRng::seed_from_u64(seed));
        let mut b = GridState::new(GRID_SIZE, &fleet, &mut SmallRng::seed_from_u64(seed));
        let ra: Vec<ShotResult> = script.iter().map(|&(x, y)| a.shoot(x, y)).collect();
        let rb: Vec<ShotResult> = script.iter().map(|&(x, y)| b.shoot(x, y)).collect();
        prop_assert_eq!(ra, rb);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn second_shot_is_noop(seed in any::<u64>(), x in 0..GRID_SIZE, y in 0..GRID_SIZE) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = GridState::new(GRID_SIZE, &FleetComposition::default(), &mut rng);
        let first = grid.shoot(x, y);
        prop_assert!(matches!(first, ShotResult::Hit | ShotResult::Miss));
        let after = grid.clone();
        prop_assert_eq!(grid.shoot(x, y), ShotResult::NoOp);
        prop_assert_eq!(grid, after);
    }

    #[test]
    fn won_exactly_when_every_ship_cell_is_hit(seed in any::<u64>(), shot_seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = GridState::new(GRID_SIZE, &FleetComposition::default(), &mut rng);
        let ship_cells: Vec<(usize, usize)> = grid
            .cells()
            .filter(|&(_, c)| c == Cell::Ship)
            .map(|(xy, _)| xy)
            .collect();
        for (x, y) in shots(shot_seed, 120) {
            grid.shoot(x, y);
            let all_hit = ship_cells
                .iter()
                .all(|&(sx, sy)| grid.cell_state(sx, sy) == Ok(Cell::Hit));
            prop_assert_eq!(grid.is_won(), all_hit);
        }
        for &(x, y) in &ship_cells {
            grid.shoot(x, y);
        }
        prop_assert!(grid.is_won());
        prop_assert_eq!(grid.sunk_count(), grid.ships().len());
    }
}
