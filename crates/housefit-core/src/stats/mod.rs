pub mod linreg;
pub mod stats;

pub use linreg::LinReg;
pub use stats::r2_from_predictions;
