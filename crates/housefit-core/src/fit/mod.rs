pub mod fiterror;
pub mod linfit;

pub use fiterror::{FitError, FitOutcome};
pub use linfit::LinearFit;
