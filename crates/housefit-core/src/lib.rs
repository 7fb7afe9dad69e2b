pub mod fit;
pub mod housingdata;
pub mod predictor;
pub mod stats;

pub use fit::{FitError, FitOutcome, LinearFit};
pub use housingdata::{read_housing_csv, HousingData, LoadError};
pub use predictor::Predictor;
pub use stats::LinReg;
