use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockwatch_core::ProductId;

/// Direction of an inventory movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    In,
    Out,
}

/// One inventory movement (immutable once recorded).
///
/// Multiple records per product per date are allowed; they all aggregate.
/// Collection ordering is irrelevant to every derived computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub product_id: ProductId,
    pub quantity: u32,
    pub transaction_type: TransactionType,
    /// Unit price in smallest currency unit (e.g., cents).
    pub unit_price_cents: u64,
}

impl TransactionRecord {
    pub fn new(
        date: NaiveDate,
        product_id: ProductId,
        quantity: u32,
        transaction_type: TransactionType,
        unit_price_cents: u64,
    ) -> Self {
        Self {
            date,
            product_id,
            quantity,
            transaction_type,
            unit_price_cents,
        }
    }
}
