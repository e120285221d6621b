mod config;
mod runner;
mod terminal;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::config::ConfigContentProvider;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{MarkChoice, TicTacToeGameState};
use tictactoe_common::{log, logger};

use config::get_config_manager;
use runner::run_game;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a computer that never loses")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mark you play: x, o or random (x moves first)
    #[arg(long)]
    mark: Option<MarkChoice>,

    /// Seed for the random mark choice
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;

    if let Some(mark) = args.mark {
        config.game.human_mark = mark;
    }
    if args.verbose {
        config.logging.verbose = true;
    }
    if args.use_log_prefix && config.logging.prefix.is_none() {
        config.logging.prefix = Some("Client".to_string());
    }

    logger::init_logger(config.logging.prefix.clone(), config.logging.verbose);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!(
            "Saved config to {}",
            config_manager.content_provider().path().display()
        );
    } else if config_manager.content_provider().get_config_content()?.is_none() {
        log!("No config file found, using defaults");
    }

    let mut rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    let mut state = TicTacToeGameState::new(&config.game, &mut rng)?;
    log!(
        "Starting session (seed {}): human {}, computer {}",
        rng.seed(),
        state.human_mark,
        state.computer_mark
    );

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    run_game(&mut state, &mut input, &mut output)?;

    Ok(())
}
