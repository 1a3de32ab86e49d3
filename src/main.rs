use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use seabattle::cli::{auto_play, make_rng, run_play};
use seabattle::ui::render_grid;
use seabattle::{init_logging, GameConfig, GridState};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Grid side length (overrides the config file)")]
    size: Option<usize>,
    #[arg(long, help = "JSON file with grid_size, fleet and seed")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fire at a hidden fleet from the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Show ship positions on the board")]
        reveal: bool,
    },
    /// Let a random shooter clear the board and report the result.
    Auto {
        #[command(flatten)]
        game: GameArgs,
    },
}

fn load_config(args: &GameArgs) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json(&fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.grid_size = size;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game, reveal } => {
            let config = load_config(&game)?;
            if let Some(s) = config.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let stdin = io::stdin();
            run_play(&config, reveal, stdin.lock(), io::stdout())?;
        }
        Commands::Auto { game } => {
            let config = load_config(&game)?;
            let mut rng = make_rng(config.seed);
            let mut grid = GridState::from_config(&config, &mut rng)?;
            let stats = auto_play(&mut grid, &mut rng);
            print!("{}", render_grid(&grid, true));
            println!(
                "{} ships ({} skipped), {} shots: {} hits, {} misses, won: {}",
                grid.fleet().placed(),
                grid.fleet().skipped(),
                stats.shots,
                stats.hits,
                stats.misses,
                grid.is_won()
            );
        }
    }
    Ok(())
}
