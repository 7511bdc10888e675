use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{Game, RandomAi, Side, BOARD_SIZE};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Game::new(
        BOARD_SIZE,
        Box::new(RandomAi::new()),
        Box::new(RandomAi::new()),
        SmallRng::seed_from_u64(seed),
    );
    let winner = game.run()?;

    let side = |s: Side| {
        json!({
            "shots": game.shots_fired(s),
            "ships_lost": game.board(s).destroyed(),
        })
    };
    let result = json!({
        "seed": seed,
        "winner": winner,
        "turns": game.turn(),
        "first": side(Side::First),
        "second": side(Side::Second),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
