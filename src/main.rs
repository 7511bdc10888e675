#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::prelude::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Copy)]
#[cfg(feature = "std")]
struct SessionArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = BOARD_SIZE,
        value_parser = clap::value_parser!(i32).range(6..=9),
        help = "Edge length of the square board"
    )]
    size: i32,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer (default).
    Play(SessionArgs),
    /// Watch two computer players fight it out.
    Auto(SessionArgs),
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn greet() {
    println!("-------------------");
    println!("    Welcome to     ");
    println!("     sea battle    ");
    println!("-------------------");
    println!(" input format: x y ");
    println!(" x - row number    ");
    println!(" y - column number ");
}

#[cfg(feature = "std")]
fn print_final_boards(game: &Game<'_>, first: &str, second: &str) {
    for (side, name) in [(Side::First, first), (Side::Second, second)] {
        let mut board: Board = game.board(side).clone();
        board.set_concealed(false);
        println!("{}", "-".repeat(20));
        println!("{} board:\n{}", name, board);
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play(SessionArgs {
        seed: None,
        size: BOARD_SIZE,
    })) {
        Commands::Play(args) => {
            greet();
            let rng = make_rng(args.seed);
            log::info!("starting game on a {0}x{0} board", args.size);
            let mut game = Game::new(
                args.size,
                Box::new(HumanPlayer::stdio()),
                Box::new(RandomAi::new()),
                rng,
            );
            let winner = game.run()?;
            print_final_boards(&game, "Your", "Computer");
            println!("{}", "-".repeat(20));
            match winner {
                Side::First => println!("You win!"),
                Side::Second => println!("Computer wins!"),
            }
        }
        Commands::Auto(args) => {
            println!("Starting computer vs computer game...");
            let rng = make_rng(args.seed);
            let mut game = Game::new(
                args.size,
                Box::new(RandomAi::new()),
                Box::new(RandomAi::new()),
                rng,
            );
            loop {
                let report = game.play_turn()?;
                let name = match report.side {
                    Side::First => "Computer 1",
                    Side::Second => "Computer 2",
                };
                println!(
                    "{} fires at {}: {:?}",
                    name, report.shot.target, report.shot.outcome
                );
                if let GameStatus::Finished { winner } = report.status {
                    print_final_boards(&game, "Computer 1", "Computer 2");
                    println!("{}", "-".repeat(20));
                    println!("{:?} side wins after {} turns", winner, game.turn());
                    break;
                }
            }
        }
    }
    Ok(())
}
