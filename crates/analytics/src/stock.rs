use serde::Serialize;

use stockwatch_catalog::ProductCatalog;
use stockwatch_core::ProductId;
use stockwatch_ledger::TransactionLedger;

/// One row of the derived current-stock view.
///
/// Recomputed on demand from ledger + catalog; never persisted. The view is
/// disposable: throw it away and recompute whenever the ledger changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockLevel {
    pub product_id: ProductId,
    /// Net quantity on hand. Negative when outbound movements exceed
    /// inbound ones; deliberately not clamped.
    pub current_stock: i64,
    pub product_name: String,
    pub category: String,
    pub min_stock: u32,
    pub max_stock: u32,
}

impl StockLevel {
    pub fn is_below_minimum(&self) -> bool {
        self.current_stock < i64::from(self.min_stock)
    }
}

/// Aggregate the ledger into the current-stock view, one row per product
/// present in the ledger, inner-joined with the catalog.
///
/// Ledger products without a catalog definition are dropped from the view
/// (the join stays best-effort) and logged at WARN so the drop is
/// observable. Rows come back sorted by product id.
///
/// An empty ledger yields an empty view; that is not an error.
pub fn calculate_current_stock(
    ledger: &TransactionLedger,
    catalog: &ProductCatalog,
) -> Vec<StockLevel> {
    let mut view = Vec::new();

    for (product_id, totals) in ledger.movement_totals() {
        let Some(definition) = catalog.get(&product_id) else {
            tracing::warn!(
                product_id = %product_id,
                "ledger product missing from catalog; dropped from stock view"
            );
            continue;
        };

        view.push(StockLevel {
            current_stock: totals.net(),
            product_name: definition.product_name().to_string(),
            category: definition.category().to_string(),
            min_stock: definition.min_stock(),
            max_stock: definition.max_stock(),
            product_id,
        });
    }

    view
}
