mod config;
mod human_player;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::config::{ConfigManager, Validate};
use tictactoe_engine::tictactoe::{GameResult, Player, Winner, create_bot, play_the_game};
use tictactoe_engine::{log, logger};

use config::{Config, PlayerKind, get_config_manager};
use human_player::HumanPlayer;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Who plays X
    #[arg(long, value_enum)]
    x: Option<PlayerKind>,

    /// Who plays O
    #[arg(long, value_enum)]
    o: Option<PlayerKind>,

    /// Number of games to play in a row
    #[arg(long)]
    games: Option<u32>,

    /// Seed for the random bots; drawn at random when absent
    #[arg(long)]
    seed: Option<u64>,

    /// YAML config file, defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply(&self, config: Config) -> Config {
        Config {
            player_x: self.x.unwrap_or(config.player_x),
            player_o: self.o.unwrap_or(config.player_o),
            games: self.games.unwrap_or(config.games),
            seed: self.seed.or(config.seed),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Tally {
    fn record(&mut self, winner: Winner) {
        match winner {
            Winner::X => self.x_wins += 1,
            Winner::O => self.o_wins += 1,
            Winner::Draw => self.draws += 1,
        }
    }
}

fn create_player(kind: PlayerKind, seed: u64) -> Box<dyn Player> {
    match kind.bot_type() {
        Some(bot_type) => create_bot(bot_type, seed),
        None => Box::new(HumanPlayer::stdio()),
    }
}

/// Each seat of each game gets its own seed so a run is reproducible.
fn seat_seed(base_seed: u64, game: u32, seat: u64) -> u64 {
    base_seed.wrapping_add(u64::from(game) * 2 + seat)
}

fn print_result(game: u32, result: &GameResult) {
    println!();
    println!("Game {} final board:", game + 1);
    print!("{}", result.board);
    match result.winner {
        Winner::Draw => println!("Cat's game!"),
        winner => println!("{} wins!", winner),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = match args.config {
        Some(ref path) => ConfigManager::from_yaml_file(path.clone()),
        None => get_config_manager(),
    };
    let config = args.apply(config_manager.get_config()?);
    config.validate()?;

    let base_seed = config.seed.unwrap_or_else(rand::random);
    log!(
        "Starting {} game(s): X={:?} O={:?} seed={}",
        config.games,
        config.player_x,
        config.player_o,
        base_seed
    );

    let mut tally = Tally::default();
    for game in 0..config.games {
        let mut player_x = create_player(config.player_x, seat_seed(base_seed, game, 0));
        let mut player_o = create_player(config.player_o, seat_seed(base_seed, game, 1));

        let result = play_the_game(player_x.as_mut(), player_o.as_mut(), None)?;
        log!("Game {} finished: {}", game + 1, result.winner);
        print_result(game, &result);
        tally.record(result.winner);
    }

    if config.games > 1 {
        println!();
        println!(
            "X wins: {}, O wins: {}, draws: {}",
            tally.x_wins, tally.o_wins, tally.draws
        );
    }

    Ok(())
}
