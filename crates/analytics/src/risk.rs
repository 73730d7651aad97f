use serde::Serialize;

use stockwatch_catalog::ProductCatalog;
use stockwatch_core::ProductId;
use stockwatch_ledger::TransactionLedger;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::forecast::{Forecast, ForecastEngine, Forecaster};

/// Disruption risk for one product: the share of forecasted points that fall
/// below the minimum stock threshold, as a percentage in [0, 100].
///
/// Ephemeral: computed per request, carrying the forecast it was derived
/// from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisruptionAnalysis {
    pub product_id: ProductId,
    pub risk_percentage: f64,
    pub forecast: Forecast,
}

/// Score a forecast against a minimum-stock threshold.
///
/// `risk = 100 * |{v : v < min_stock}| / horizon`. Deterministic and pure.
/// An empty forecast cannot be scored; the engine never produces one, but
/// hand-built inputs are rejected rather than divided by zero.
pub fn score(forecast: &Forecast, min_stock: u32) -> AnalyticsResult<f64> {
    let horizon = forecast.horizon();
    if horizon == 0 {
        return Err(AnalyticsError::InvalidInput(
            "cannot score an empty forecast (horizon must be >= 1)".to_string(),
        ));
    }

    let threshold = f64::from(min_stock);
    let below = forecast.values.iter().filter(|v| **v < threshold).count();
    Ok(below as f64 * 100.0 / horizon as f64)
}

/// Forecast a product and score the result against its catalog threshold.
///
/// The product must be defined in the catalog; scoring needs `min_stock`,
/// so a ledger/catalog mismatch is an error here rather than a silent drop.
pub fn analyze_disruption<F: Forecaster>(
    engine: &ForecastEngine<F>,
    ledger: &TransactionLedger,
    catalog: &ProductCatalog,
    product_id: &ProductId,
) -> AnalyticsResult<DisruptionAnalysis> {
    let definition = catalog
        .get(product_id)
        .ok_or_else(|| AnalyticsError::CatalogMismatch(product_id.clone()))?;

    let forecast = engine.forecast(ledger, product_id)?;
    let risk_percentage = score(&forecast, definition.min_stock())?;

    tracing::info!(
        product_id = %product_id,
        risk_percentage,
        horizon = forecast.horizon(),
        "disruption analysis computed"
    );

    Ok(DisruptionAnalysis {
        product_id: product_id.clone(),
        risk_percentage,
        forecast,
    })
}
