use anyhow::{Context, Result};
use clap::Parser;
use delve::app_loop::run_session;
use delve::seed::{SeedChoice, choose_seed, generate_runtime_seed};
use delve::terminal::{RawTerminal, TerminalKeys};
use delve::{format_seed, format_snapshot_hash};
use delve_core::{Game, GameConfig, RunState};

/// Turn-based ASCII dungeon crawler.
#[derive(Parser, Debug)]
#[command(name = "delve", version, about)]
struct Args {
    /// Seed for the run; a fresh one is generated when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = choose_seed(args.seed, generate_runtime_seed);
    if let SeedChoice::Generated(value) = seed {
        log::info!("generated run seed {value}");
    }

    let mut game = Game::new(GameConfig::default(), seed.value())
        .with_context(|| format!("failed to start run with seed {}", format_seed(seed.value())))?;

    let summary = {
        let mut terminal = RawTerminal::enter()?;
        run_session(&mut game, &mut TerminalKeys, terminal.out())?
    };

    if summary.final_state == RunState::Dead {
        println!("You died. gg");
    }
    println!(
        "seed {} after {} turns, snapshot {}",
        format_seed(seed.value()),
        game.current_turn(),
        format_snapshot_hash(game.snapshot_hash())
    );
    Ok(())
}
