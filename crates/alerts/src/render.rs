//! Plain-text rendering of computed results.
//!
//! Collaborators receive finished payloads; none of them should need to
//! re-derive or re-format analytics output.

use core::fmt::Write as _;

use stockwatch_analytics::{DisruptionAnalysis, Recommendation, StockLevel};

/// Render the current-stock view as an aligned text table.
pub fn render_stock_levels(view: &[StockLevel]) -> String {
    if view.is_empty() {
        return "(no products in ledger)".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<16} {:<12} {:>13} {:>9} {:>9}",
        "product_id", "product_name", "category", "current_stock", "min_stock", "max_stock"
    );
    for level in view {
        let _ = writeln!(
            out,
            "{:<10} {:<16} {:<12} {:>13} {:>9} {:>9}",
            level.product_id.as_str(),
            level.product_name,
            level.category,
            level.current_stock,
            level.min_stock,
            level.max_stock
        );
    }
    out
}

/// Render reorder recommendations as an aligned text table.
pub fn render_recommendations(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return "(no products below minimum stock)".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<16} {:>13} {:>17}",
        "product_id", "product_name", "current_stock", "recommended_order"
    );
    for rec in recommendations {
        let _ = writeln!(
            out,
            "{:<10} {:<16} {:>13} {:>17}",
            rec.product_id.as_str(),
            rec.product_name,
            rec.current_stock,
            rec.recommended_order
        );
    }
    out
}

/// Render a disruption analysis: risk headline plus the leading forecast
/// values (long horizons are elided, not dumped).
pub fn render_disruption(analysis: &DisruptionAnalysis) -> String {
    const SHOWN: usize = 10;

    let mut out = String::new();
    let _ = writeln!(out, "Product: {}", analysis.product_id);
    let _ = writeln!(out, "Risk Percentage: {:.1}%", analysis.risk_percentage);

    let values = &analysis.forecast.values;
    let leading: Vec<String> = values
        .iter()
        .take(SHOWN)
        .map(|v| format!("{v:.1}"))
        .collect();
    let _ = write!(out, "Forecasted Values: {}", leading.join(", "));
    if values.len() > SHOWN {
        let _ = write!(out, " (+{} more)", values.len() - SHOWN);
    }
    out
}
