use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::cmd::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "housefit",
    about = "Neighborhood housing regression tool",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Path to the housing CSV file
    #[arg(short = 'i', long = "input", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Number of times to repeat the regression pass
    #[arg(short = 'n', long = "iterations", value_name = "N", default_value_t = 100)]
    pub iterations: usize,

    /// Print extra detail while running
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config { input: self.input, iterations: self.iterations, verbose: self.verbose }
    }
}
