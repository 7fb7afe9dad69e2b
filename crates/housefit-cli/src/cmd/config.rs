use housefit_core::fit::{FitError, LinearFit};
use housefit_core::housingdata::{read_housing_csv, LoadError};
use housefit_core::predictor::Predictor;

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub iterations: usize,
    pub verbose: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("failed to load housing data: {0}")]
    Load(#[from] LoadError),
    #[error("regression failed: {0}")]
    Fit(#[from] FitError),
}

impl Config {
    pub fn run(&self) -> Result<(), CmdError> {
        let data = read_housing_csv(&self.input)?;
        if self.verbose {
            println!("Loaded {} rows from {}", data.len(), self.input.display());
        }

        for iteration in 1..=self.iterations {
            println!("Iteration {}:", iteration);
            for predictor in Predictor::all() {
                let fit = LinearFit::from_data(predictor, predictor.series(&data), &data.mv)?;
                println!("{}", fit);
            }
        }
        Ok(())
    }
}
