/// Coefficient of determination from observed and predicted values.
/// Returns `None` when the target has no variance, leaving R² undefined.
pub fn r2_from_predictions(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.is_empty() {
        return None;
    }

    let y_mean = y.iter().sum::<f64>() / y.len() as f64;

    let ss_res: f64 = y.iter().zip(y_hat).map(|(&yi, &yhi)| (yi - yhi).powi(2)).sum();
    let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return None;
    }

    Some(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_predictions_give_one() {
        let y = [1., 2., 3., 4.];
        assert_eq!(r2_from_predictions(&y, &y), Some(1.0));
    }

    #[test]
    fn mean_predictions_give_zero() {
        let y = [1., 2., 3., 4.];
        let y_hat = [2.5; 4];
        assert_eq!(r2_from_predictions(&y, &y_hat), Some(0.0));
    }

    #[test]
    fn constant_target_is_undefined() {
        let y = [5.0; 4];
        let y_hat = [5.0; 4];
        assert_eq!(r2_from_predictions(&y, &y_hat), None);
    }

    #[test]
    fn length_mismatch_gives_none() {
        assert_eq!(r2_from_predictions(&[1., 2., 3.], &[1., 2.]), None);
    }
}
