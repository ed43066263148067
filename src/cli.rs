//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::counter::CounterIntent;

#[derive(Debug, Parser)]
#[command(name = "counter-store", version, about = "A counter backed by a feature-slice store")]
pub struct Cli {
    /// Config file (default: <config dir>/counter-store/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive counter in the terminal (default)
    Tui,
    /// Dispatch actions without a UI and print every observed value
    Run {
        #[arg(value_enum, required = true, value_name = "ACTION")]
        actions: Vec<ActionArg>,
    },
}

/// Action names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    #[value(alias = "inc", alias = "+")]
    Increment,
    #[value(alias = "dec", alias = "-")]
    Decrement,
    #[value(alias = "r")]
    Reset,
}

impl From<ActionArg> for CounterIntent {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Increment => CounterIntent::Increment,
            ActionArg::Decrement => CounterIntent::Decrement,
            ActionArg::Reset => CounterIntent::Reset,
        }
    }
}
