use broadside::{init_logging, AutoInput, Game, Player};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play a computer-vs-computer game and print the result as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for fleet placement and the opponent's targeting.
    seed1: u64,
    /// Seed for the automated human side's targeting.
    seed2: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut game = Game::new(SmallRng::seed_from_u64(args.seed1))?;
    let mut input = AutoInput::new(SmallRng::seed_from_u64(args.seed2));
    let summary = game.play(&mut input, &mut ())?;

    let winner = summary.winner().map(|p| match p {
        Player::Human => "human",
        Player::Opponent => "opponent",
    });
    let result = json!({
        "human": {
            "shots": summary.human_shots,
            "ships_afloat": game.human().ships_afloat().count(),
        },
        "opponent": {
            "shots": summary.opponent_shots,
            "ships_afloat": game.opponent().ships_afloat().count(),
        },
        "winner": winner,
        "ending": summary.ending,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
