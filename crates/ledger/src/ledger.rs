use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockwatch_core::ProductId;

use crate::record::{TransactionRecord, TransactionType};

/// Aggregated movement totals for one product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementTotals {
    pub inbound: u64,
    pub outbound: u64,
}

impl MovementTotals {
    /// Net quantity on hand: inbound minus outbound. May be negative when
    /// outbound movements exceed inbound ones; callers must not clamp.
    pub fn net(&self) -> i64 {
        self.inbound as i64 - self.outbound as i64
    }
}

/// Append-only set of inventory transaction records for all products.
///
/// The ledger is a plain immutable collection once populated. Derived views
/// (current stock, daily series) are recomputed on demand and never stored
/// back into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionLedger {
    records: Vec<TransactionRecord>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    /// Append a movement record.
    pub fn record(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records for one product, in insertion order.
    pub fn for_product<'a>(
        &'a self,
        product_id: &'a ProductId,
    ) -> impl Iterator<Item = &'a TransactionRecord> {
        self.records
            .iter()
            .filter(move |r| &r.product_id == product_id)
    }

    pub fn has_product(&self, product_id: &ProductId) -> bool {
        self.records.iter().any(|r| &r.product_id == product_id)
    }

    /// Movement totals per product.
    ///
    /// A product with no inbound (or no outbound) records gets a zero total
    /// on that side. Keys are ordered, so iteration is deterministic.
    pub fn movement_totals(&self) -> BTreeMap<ProductId, MovementTotals> {
        let mut totals: BTreeMap<ProductId, MovementTotals> = BTreeMap::new();
        for record in &self.records {
            let entry = totals.entry(record.product_id.clone()).or_default();
            match record.transaction_type {
                TransactionType::In => entry.inbound += u64::from(record.quantity),
                TransactionType::Out => entry.outbound += u64::from(record.quantity),
            }
        }
        totals
    }

    /// Daily transaction quantities for one product, chronologically ordered.
    ///
    /// Same-day quantities are summed together regardless of direction, so
    /// each point is the day's total transaction volume. Calendar days with
    /// no transactions are absent from the series, not zero-filled.
    pub fn daily_quantities(&self, product_id: &ProductId) -> Vec<(NaiveDate, f64)> {
        let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for record in self.for_product(product_id) {
            *by_date.entry(record.date).or_insert(0) += u64::from(record.quantity);
        }
        by_date
            .into_iter()
            .map(|(date, quantity)| (date, quantity as f64))
            .collect()
    }
}

impl FromIterator<TransactionRecord> for TransactionLedger {
    fn from_iter<I: IntoIterator<Item = TransactionRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
