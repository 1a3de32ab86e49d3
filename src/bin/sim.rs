use seabattle::cli::{auto_play, make_rng};
use seabattle::{FleetComposition, GridState, GRID_SIZE};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = make_rng(Some(seed));
    let mut grid = GridState::new(GRID_SIZE, &FleetComposition::default(), &mut rng);
    let stats = auto_play(&mut grid, &mut rng);

    let result = json!({
        "seed": seed,
        "ships_requested": grid.fleet().requested(),
        "ships_placed": grid.fleet().placed(),
        "shots": stats.shots,
        "hits": stats.hits,
        "misses": stats.misses,
        "won": grid.is_won(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
