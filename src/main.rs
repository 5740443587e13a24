use std::io;

use broadside::cli::{print_instructions, ConsoleInput, ConsoleReporter};
use broadside::{init_logging, Game};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Sink the computer's fleet before it sinks yours.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut game = Game::new(rng).map_err(|e| anyhow::anyhow!(e))?;

    print_instructions(&mut io::stdout())?;
    let mut input = ConsoleInput::new(io::stdin().lock(), io::stdout());
    let mut reporter = ConsoleReporter::new(io::stdout());
    game.play(&mut input, &mut reporter)
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
