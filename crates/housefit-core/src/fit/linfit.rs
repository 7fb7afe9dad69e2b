use crate::fit::fiterror::{FitError, FitOutcome};
use crate::predictor::Predictor;
use crate::stats::{r2_from_predictions, LinReg};

use std::fmt;

/// One regression result: a predictor fitted against median value.
/// `r2` is `None` when the target has no variance and R² is undefined.
#[derive(Clone, Debug)]
pub struct LinearFit {
    pub predictor: Predictor,
    pub model: LinReg,
    pub r2: Option<f64>,
}

impl fmt::Display for LinearFit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} vs Median Value: {:.2} + {:.2} * {}, R-squared: ",
            self.predictor, self.model.intercept, self.model.slope, self.predictor
        )?;
        match self.r2 {
            Some(r2) => write!(f, "{r2:.2}"),
            None => write!(f, "undefined"),
        }
    }
}

impl LinearFit {
    pub fn from_data(predictor: Predictor, x: &[f64], y: &[f64]) -> FitOutcome<Self> {
        if x.len() != y.len() {
            return Err(FitError::LengthMismatch { len_x: x.len(), len_y: y.len() });
        }
        if x.is_empty() {
            return Err(FitError::Empty);
        }

        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let ss_xx: f64 = x.iter().map(|&xi| (xi - x_mean).powi(2)).sum();

        // no variance in x, no meaningful regression
        if !ss_xx.is_finite() || ss_xx <= f64::EPSILON {
            return Err(FitError::DegenerateX);
        }

        let model = LinReg::train(x, y);
        let y_hat: Vec<f64> = x.iter().map(|&xi| model.calculate(xi)).collect();
        let r2 = r2_from_predictions(y, &y_hat);

        Ok(Self { predictor, model, r2 })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.model.calculate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_line_fits_perfectly() {
        let x = [1., 2., 3., 4., 5.];
        let y: Vec<f64> = x.iter().map(|&xi| 3.0 + 2.0 * xi).collect();

        let fit = LinearFit::from_data(Predictor::Crim, &x, &y).unwrap();
        assert!((fit.model.slope - 2.0).abs() < 1e-9);
        assert!((fit.model.intercept - 3.0).abs() < 1e-9);
        assert!((fit.r2.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn two_point_example() {
        let crim = [1.0, 2.0];
        let mv = [30.0, 35.0];

        let fit = LinearFit::from_data(Predictor::Crim, &crim, &mv).unwrap();
        assert!((fit.model.slope - 5.0).abs() < 1e-9);
        assert!((fit.model.intercept - 25.0).abs() < 1e-9);
        assert!((fit.r2.unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(
            fit.to_string(),
            "Crim vs Median Value: 25.00 + 5.00 * Crim, R-squared: 1.00"
        );
    }

    #[test]
    fn constant_target_reports_undefined() {
        let x = [1., 2., 3.];
        let y = [5.0; 3];

        let fit = LinearFit::from_data(Predictor::Rooms, &x, &y).unwrap();
        assert_eq!(fit.r2, None);
        assert!(fit.to_string().ends_with("R-squared: undefined"));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = LinearFit::from_data(Predictor::Crim, &[1., 2., 3.], &[1., 2.]).unwrap_err();
        assert_eq!(err, FitError::LengthMismatch { len_x: 3, len_y: 2 });
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = LinearFit::from_data(Predictor::Crim, &[], &[]).unwrap_err();
        assert_eq!(err, FitError::Empty);
    }

    #[test]
    fn constant_x_is_rejected() {
        let err = LinearFit::from_data(Predictor::Crim, &[2.0; 4], &[1., 2., 3., 4.]).unwrap_err();
        assert_eq!(err, FitError::DegenerateX);
    }

    #[test]
    fn repeated_fits_are_bit_identical() {
        let x = [0.1, 0.7, 1.3, 2.9, 4.2];
        let y = [21.0, 23.5, 19.8, 30.2, 27.7];

        let first = LinearFit::from_data(Predictor::Crim, &x, &y).unwrap();
        for _ in 0..10 {
            let next = LinearFit::from_data(Predictor::Crim, &x, &y).unwrap();
            assert_eq!(next.model.slope.to_bits(), first.model.slope.to_bits());
            assert_eq!(next.model.intercept.to_bits(), first.model.intercept.to_bits());
            assert_eq!(next.r2.unwrap().to_bits(), first.r2.unwrap().to_bits());
        }
    }
}
