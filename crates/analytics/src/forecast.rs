use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use stockwatch_core::ProductId;
use stockwatch_ledger::TransactionLedger;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Number of future steps a forecast covers unless configured otherwise.
pub const DEFAULT_HORIZON: usize = 30;

/// (p, d, q) order for the delegated autoregressive-integrated-moving-average
/// fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArimaOrder {
    /// Autoregressive lag.
    pub p: usize,
    /// Differencing degree.
    pub d: usize,
    /// Moving-average lag.
    pub q: usize,
}

impl ArimaOrder {
    pub const fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Fewest observations this order can meaningfully fit: differencing
    /// consumes `d` points, and the AR/MA lags need `max(p, q) + 1` more.
    /// For the default (1, 1, 1) order this is 3.
    pub fn min_observations(&self) -> usize {
        self.d + self.p.max(self.q) + 1
    }
}

impl Default for ArimaOrder {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

impl core::fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.p, self.d, self.q)
    }
}

/// Errors surfaced by a forecasting collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// The series is too short or degenerate (e.g. constant) for the chosen
    /// order. Retrying with identical data cannot succeed.
    #[error("insufficient data for model fit: {0}")]
    InsufficientData(String),

    /// The fit itself failed (numerical breakdown, collaborator fault).
    #[error("model fit failed: {0}")]
    Fit(String),
}

impl From<ForecastError> for AnalyticsError {
    fn from(err: ForecastError) -> Self {
        match err {
            ForecastError::InsufficientData(msg) => AnalyticsError::InsufficientData(msg),
            ForecastError::Fit(msg) => AnalyticsError::Internal(msg),
        }
    }
}

/// External time-series modeling capability.
///
/// Contract: given a chronologically ordered real-valued series and a
/// (p, d, q) order, fit a model and produce an `horizon`-step-ahead forecast
/// as an ordered sequence of exactly `horizon` real numbers. Implementations
/// must fail with [`ForecastError::InsufficientData`] on series too short or
/// degenerate to fit.
///
/// Fitting is the one CPU-bound operation in the pipeline; callers that need
/// a responsive UI offload the call to a worker thread themselves.
pub trait Forecaster {
    fn fit_and_forecast(
        &self,
        series: &[(NaiveDate, f64)],
        order: ArimaOrder,
        horizon: usize,
    ) -> Result<Vec<f64>, ForecastError>;
}

/// An n-step-ahead inventory forecast for one product.
///
/// Produced fresh per request; never cached. `horizon()` always equals the
/// requested step count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub product_id: ProductId,
    pub values: Vec<f64>,
}

impl Forecast {
    pub fn horizon(&self) -> usize {
        self.values.len()
    }
}

/// Prepares a product's historical series from the ledger and delegates the
/// model fit to a [`Forecaster`].
///
/// Series preparation: select the product's records, sum quantity per date
/// (same-day inbound and outbound quantities fold into one value, the
/// daily transaction volume), order chronologically. Calendar gaps stay
/// absent; they are not zero-filled.
#[derive(Debug, Clone)]
pub struct ForecastEngine<F> {
    forecaster: F,
    order: ArimaOrder,
    horizon: usize,
}

impl<F: Forecaster> ForecastEngine<F> {
    pub fn new(forecaster: F) -> Self {
        Self {
            forecaster,
            order: ArimaOrder::default(),
            horizon: DEFAULT_HORIZON,
        }
    }

    pub fn with_order(mut self, order: ArimaOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn order(&self) -> ArimaOrder {
        self.order
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Forecast future inventory levels for one product.
    pub fn forecast(
        &self,
        ledger: &TransactionLedger,
        product_id: &ProductId,
    ) -> AnalyticsResult<Forecast> {
        if self.horizon == 0 {
            return Err(AnalyticsError::InvalidInput(
                "forecast horizon must be >= 1".to_string(),
            ));
        }

        let series = ledger.daily_quantities(product_id);
        if series.is_empty() {
            return Err(AnalyticsError::UnknownProduct(product_id.clone()));
        }

        let needed = self.order.min_observations();
        if series.len() < needed {
            return Err(AnalyticsError::InsufficientData(format!(
                "series for {product_id} has {} observation(s); order {} needs at least {needed}",
                series.len(),
                self.order,
            )));
        }

        let values = self
            .forecaster
            .fit_and_forecast(&series, self.order, self.horizon)?;

        if values.len() != self.horizon {
            return Err(AnalyticsError::Internal(format!(
                "forecaster returned {} value(s) for horizon {}",
                values.len(),
                self.horizon
            )));
        }

        Ok(Forecast {
            product_id: product_id.clone(),
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use stockwatch_ledger::{TransactionRecord, TransactionType};

    fn pid(code: &str) -> ProductId {
        ProductId::new(code).unwrap()
    }

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
    }

    fn record(n: u32, quantity: u32, transaction_type: TransactionType) -> TransactionRecord {
        TransactionRecord::new(day(n), pid("P001"), quantity, transaction_type, 1_000)
    }

    fn four_day_ledger() -> TransactionLedger {
        TransactionLedger::from_records(vec![
            record(4, 8, TransactionType::Out),
            record(1, 10, TransactionType::In),
            record(1, 3, TransactionType::Out),
            record(2, 6, TransactionType::In),
            record(3, 9, TransactionType::Out),
        ])
    }

    /// Test double: records what it was called with, returns a fixed ramp.
    struct SpyForecaster {
        calls: RefCell<Vec<(Vec<(NaiveDate, f64)>, ArimaOrder, usize)>>,
    }

    impl SpyForecaster {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Forecaster for SpyForecaster {
        fn fit_and_forecast(
            &self,
            series: &[(NaiveDate, f64)],
            order: ArimaOrder,
            horizon: usize,
        ) -> Result<Vec<f64>, ForecastError> {
            self.calls
                .borrow_mut()
                .push((series.to_vec(), order, horizon));
            Ok((0..horizon).map(|i| i as f64).collect())
        }
    }

    /// Test double: always fails the same way.
    struct FailingForecaster(ForecastError);

    impl Forecaster for FailingForecaster {
        fn fit_and_forecast(
            &self,
            _series: &[(NaiveDate, f64)],
            _order: ArimaOrder,
            _horizon: usize,
        ) -> Result<Vec<f64>, ForecastError> {
            Err(self.0.clone())
        }
    }

    /// Test double: returns the wrong number of values.
    struct ShortForecaster;

    impl Forecaster for ShortForecaster {
        fn fit_and_forecast(
            &self,
            _series: &[(NaiveDate, f64)],
            _order: ArimaOrder,
            horizon: usize,
        ) -> Result<Vec<f64>, ForecastError> {
            Ok(vec![0.0; horizon.saturating_sub(1)])
        }
    }

    #[test]
    fn output_length_equals_requested_horizon() {
        let engine = ForecastEngine::new(SpyForecaster::new()).with_horizon(7);
        let forecast = engine.forecast(&four_day_ledger(), &pid("P001")).unwrap();
        assert_eq!(forecast.horizon(), 7);
    }

    #[test]
    fn series_is_aggregated_by_date_and_chronological() {
        let engine = ForecastEngine::new(SpyForecaster::new()).with_horizon(5);
        engine.forecast(&four_day_ledger(), &pid("P001")).unwrap();

        let calls = engine.forecaster.calls.borrow();
        let (series, order, horizon) = &calls[0];
        // Day 1 folds IN 10 and OUT 3 into 13 (volume, not signed net).
        assert_eq!(
            series,
            &vec![
                (day(1), 13.0),
                (day(2), 6.0),
                (day(3), 9.0),
                (day(4), 8.0),
            ]
        );
        assert_eq!(*order, ArimaOrder::new(1, 1, 1));
        assert_eq!(*horizon, 5);
    }

    #[test]
    fn defaults_are_order_111_and_horizon_30() {
        let engine = ForecastEngine::new(SpyForecaster::new());
        assert_eq!(engine.order(), ArimaOrder::new(1, 1, 1));
        assert_eq!(engine.horizon(), DEFAULT_HORIZON);
    }

    #[test]
    fn unknown_product_is_reported_distinctly() {
        let engine = ForecastEngine::new(SpyForecaster::new());
        let err = engine.forecast(&four_day_ledger(), &pid("P999")).unwrap_err();
        assert!(matches!(err, AnalyticsError::UnknownProduct(id) if id == pid("P999")));
    }

    #[test]
    fn two_observations_cannot_support_the_default_order() {
        let ledger = TransactionLedger::from_records(vec![
            record(1, 5, TransactionType::In),
            record(2, 5, TransactionType::In),
        ]);
        let engine = ForecastEngine::new(SpyForecaster::new());
        let err = engine.forecast(&ledger, &pid("P001")).unwrap_err();
        assert!(matches!(err, AnalyticsError::InsufficientData(_)));
    }

    #[test]
    fn collaborator_insufficient_data_propagates_distinctly() {
        let engine = ForecastEngine::new(FailingForecaster(ForecastError::InsufficientData(
            "constant series".to_string(),
        )));
        let err = engine.forecast(&four_day_ledger(), &pid("P001")).unwrap_err();
        assert!(matches!(err, AnalyticsError::InsufficientData(_)));
    }

    #[test]
    fn collaborator_fit_failure_is_internal() {
        let engine =
            ForecastEngine::new(FailingForecaster(ForecastError::Fit("diverged".to_string())));
        let err = engine.forecast(&four_day_ledger(), &pid("P001")).unwrap_err();
        assert!(matches!(err, AnalyticsError::Internal(_)));
    }

    #[test]
    fn wrong_length_from_collaborator_is_internal() {
        let engine = ForecastEngine::new(ShortForecaster).with_horizon(10);
        let err = engine.forecast(&four_day_ledger(), &pid("P001")).unwrap_err();
        assert!(matches!(err, AnalyticsError::Internal(_)));
    }

    #[test]
    fn zero_horizon_is_rejected_up_front() {
        let engine = ForecastEngine::new(SpyForecaster::new()).with_horizon(0);
        let err = engine.forecast(&four_day_ledger(), &pid("P001")).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(_)));
    }

    #[test]
    fn min_observations_for_default_order_is_three() {
        assert_eq!(ArimaOrder::default().min_observations(), 3);
        assert_eq!(ArimaOrder::new(2, 1, 1).min_observations(), 4);
        assert_eq!(ArimaOrder::new(0, 0, 0).min_observations(), 1);
    }
}
