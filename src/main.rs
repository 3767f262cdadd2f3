use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use toy_robot::{Cli, Simulator, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let config = cli
        .resolve_config()
        .context("failed to load configuration")?;
    let board = config.board().context("invalid table configuration")?;
    tracing::info!(
        width = board.width(),
        height = board.height(),
        origin_x = board.origin().x,
        origin_y = board.origin().y,
        "Toy Robot Simulator started"
    );

    if !cli.quiet {
        println!("Toy Robot Simulator");
        println!("Enter commands (type \"EXIT\" to quit):");
    }

    let mut simulator = Simulator::new(board);
    let stdout = io::stdout();
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            simulator.run(BufReader::new(file), stdout.lock())?;
        }
        None => {
            simulator.run(io::stdin().lock(), stdout.lock())?;
        }
    }

    if !cli.quiet {
        println!("Application terminated.");
    }
    tracing::info!("Application terminated.");
    Ok(())
}
