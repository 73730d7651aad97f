use anyhow::Context;

use stockwatch_alerts::{
    AlertEnvelope, AlertSeverity, AlertSink, CompositeAlertSink, TracingAlertSink,
    WebhookAlertSink, WebhookConfig, render_disruption, render_recommendations,
    render_stock_levels,
};
use stockwatch_analytics::{
    ForecastEngine, analyze_disruption, calculate_current_stock, recommend,
};
use stockwatch_core::ProductId;
use stockwatch_fixtures::{DriftForecaster, SampleData};

fn main() -> anyhow::Result<()> {
    stockwatch_observability::init();

    let data = SampleData::generate();
    tracing::info!(
        records = data.ledger.len(),
        products = data.catalog.len(),
        "sample dataset generated"
    );

    let mut sinks = CompositeAlertSink::new().with_sink(TracingAlertSink);
    match std::env::var("STOCKWATCH_WEBHOOK_URL") {
        Ok(url) => {
            let sink = WebhookAlertSink::new(WebhookConfig::new(url))
                .context("webhook sink configuration")?;
            sinks = sinks.with_sink(sink);
        }
        Err(_) => {
            tracing::info!("STOCKWATCH_WEBHOOK_URL not set; alerts go to the log only");
        }
    }

    // Stock path: ledger + catalog -> current stock -> replenishment.
    let view = calculate_current_stock(&data.ledger, &data.catalog);
    println!("{}", render_stock_levels(&view));

    let recommendations = recommend(&view);
    println!("{}", render_recommendations(&recommendations));
    if !recommendations.is_empty() {
        let alert = AlertEnvelope::new(
            AlertSeverity::Warning,
            "Replenishment recommendations",
            render_recommendations(&recommendations),
        );
        // Best-effort by contract; a delivery failure is already logged.
        let _ = sinks.deliver(&alert);
    }

    // Forecast path: ledger -> forecast -> disruption risk.
    let product_id: ProductId = std::env::var("STOCKWATCH_PRODUCT")
        .unwrap_or_else(|_| "P001".to_string())
        .parse()
        .context("STOCKWATCH_PRODUCT must be a valid product code")?;

    let engine = ForecastEngine::new(DriftForecaster);
    match analyze_disruption(&engine, &data.ledger, &data.catalog, &product_id) {
        Ok(analysis) => {
            println!("{}", render_disruption(&analysis));

            let severity = if analysis.risk_percentage >= 50.0 {
                AlertSeverity::Critical
            } else {
                AlertSeverity::Info
            };
            let alert = AlertEnvelope::new(
                severity,
                format!("Disruption analysis for {product_id}"),
                render_disruption(&analysis),
            );
            let _ = sinks.deliver(&alert);
        }
        Err(err) => {
            tracing::error!(product_id = %product_id, error = %err, "disruption analysis failed");
        }
    }

    Ok(())
}
