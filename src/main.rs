use clap::{Parser, Subcommand};
use digit_duel::{
    init_logging, run_game, Game, GameMode, GameSettings, StdinInput, DEFAULT_DIGIT_COUNT,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_PLAYER_COUNT,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a hidden number within an attempt budget.
    Single {
        #[arg(long, default_value_t = DEFAULT_DIGIT_COUNT)]
        digits: usize,
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        attempts: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the final game state as JSON")]
        json: bool,
    },
    /// Hot-seat game: everyone hides a number, last one standing wins.
    Multi {
        #[arg(long, default_value_t = DEFAULT_DIGIT_COUNT)]
        digits: usize,
        #[arg(long, default_value_t = DEFAULT_PLAYER_COUNT)]
        players: usize,
        #[arg(long, help = "Print the final game state as JSON")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (mut game, json) = match cli.command {
        Commands::Single {
            digits,
            attempts,
            seed,
            json,
        } => {
            let settings = GameSettings::new(digits, attempts, DEFAULT_PLAYER_COUNT)?;
            let game = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (game will be reproducible)", s);
                    Game::with_seed(GameMode::Single, settings, s)
                }
                None => Game::new(GameMode::Single, settings),
            };
            (game, json)
        }
        Commands::Multi {
            digits,
            players,
            json,
        } => {
            let settings = GameSettings::new(digits, DEFAULT_MAX_ATTEMPTS, players)?;
            (Game::new(GameMode::Multi, settings), json)
        }
    };

    run_game(&mut game, &mut StdinInput, &mut std::io::stdout())?;

    if json {
        println!("{}", serde_json::to_string_pretty(game.session())?);
    }
    Ok(())
}
