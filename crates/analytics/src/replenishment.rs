use serde::Serialize;

use stockwatch_core::ProductId;

use crate::stock::StockLevel;

/// A reorder suggestion for a product below its minimum stock threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub product_id: ProductId,
    pub product_name: String,
    pub current_stock: i64,
    pub min_stock: u32,
    pub max_stock: u32,
    /// Quantity that brings the product back up to `max_stock`. Always
    /// positive: `max_stock >= min_stock > current_stock` for every row
    /// that survives the threshold filter.
    pub recommended_order: u64,
}

/// Suggest stock adjustments for every product below its minimum threshold.
///
/// Pure function of the stock view: no side effects, no IO, and the input
/// slice is left untouched (a new owned sequence comes back, never a
/// mutated view). Returns an empty vec when no product is below threshold.
pub fn recommend(view: &[StockLevel]) -> Vec<Recommendation> {
    view.iter()
        .filter(|level| level.is_below_minimum())
        .map(|level| Recommendation {
            product_id: level.product_id.clone(),
            product_name: level.product_name.clone(),
            current_stock: level.current_stock,
            min_stock: level.min_stock,
            max_stock: level.max_stock,
            recommended_order: (i64::from(level.max_stock) - level.current_stock) as u64,
        })
        .collect()
}
