use std::io::{self, Write};

use clap::Parser;

use counter_store::cli::{Cli, Command};
use counter_store::config::Config;
use counter_store::counter::{self, CounterIntent};
use counter_store::headless;
use counter_store::logging::init_tracing;
use counter_store::store::Store;
use counter_store::ui;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let store = counter::register(Store::builder().notify_policy(config.store.notify))?.build();

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => ui::run(&store, &config.ui),
        Command::Run { actions } => {
            let values =
                headless::observe(&store, actions.into_iter().map(CounterIntent::from))?;
            let mut stdout = io::stdout().lock();
            for value in values {
                writeln!(stdout, "{}", value)?;
            }
            Ok(())
        }
    }
}
