use std::path::PathBuf;

use clap::Parser;
use salvo::{
    cli::run_interactive, init_logging, sim::simulate, Fleet, FleetPreset, GameConfig, GameEngine,
    RngSource,
};

#[derive(Parser)]
#[command(author, version, about = "Battleship against a random AI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, help = "Fleet layout used by both sides [default: standard]")]
    fleet: Option<FleetPreset>,
    #[arg(long, help = "JSON game configuration file")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Play against the AI in the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Let a random shooter play against the AI and print JSON summaries.
    Sim {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, default_value_t = 1)]
        games: u64,
    },
}

/// Config file first, then `--fleet` on top of it.
fn load_config(args: &GameArgs) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(preset) = args.fleet {
        config.fleet = Fleet::preset(preset);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game } => {
            let config = load_config(&game)?;
            let rng = match game.seed {
                Some(s) => {
                    println!("Using fixed seed: {} (game will be reproducible)", s);
                    RngSource::seeded(s)
                }
                None => RngSource::from_entropy(),
            };
            let mut engine = GameEngine::new(config, rng)?;
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            run_interactive(&mut engine, &mut input, &mut output)?;
        }
        Commands::Sim { game, games } => {
            let config = load_config(&game)?;
            let base = game.seed.unwrap_or_else(rand::random);
            for i in 0..games {
                let summary = simulate(config.clone(), base.wrapping_add(i * 2))?;
                println!("{}", serde_json::to_string(&summary)?);
            }
        }
    }
    Ok(())
}
