use chrono::NaiveDate;

use stockwatch_analytics::{ArimaOrder, ForecastError, Forecaster};

/// Deterministic random-walk-with-drift forecaster.
///
/// A stand-in collaborator for demos and tests: it honors the full
/// [`Forecaster`] contract (length-exact output, insufficient-data failures
/// on short or constant series) while replacing the model fit with the
/// simplest trend extrapolation: each step ahead adds the mean first
/// difference of the series to the last observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriftForecaster;

impl Forecaster for DriftForecaster {
    fn fit_and_forecast(
        &self,
        series: &[(NaiveDate, f64)],
        order: ArimaOrder,
        horizon: usize,
    ) -> Result<Vec<f64>, ForecastError> {
        let needed = order.min_observations();
        if series.len() < needed {
            return Err(ForecastError::InsufficientData(format!(
                "{} observation(s), order {order} needs at least {needed}",
                series.len()
            )));
        }

        let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
        if is_constant(&values) {
            return Err(ForecastError::InsufficientData(
                "series is constant; differenced model cannot fit".to_string(),
            ));
        }

        let drift = mean_diff(&values);
        let last = *values.last().unwrap_or(&0.0);

        Ok((1..=horizon).map(|k| last + drift * k as f64).collect())
    }
}

fn is_constant(values: &[f64]) -> bool {
    values
        .windows(2)
        .all(|w| (w[0] - w[1]).abs() <= f64::EPSILON)
}

/// Mean of first differences, deterministic.
fn mean_diff(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum: f64 = values.windows(2).map(|w| w[1] - w[0]).sum();
    sum / ((values.len() - 1) as f64)
}
