use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stockwatch_catalog::{ProductCatalog, ProductDefinition};
use stockwatch_core::ProductId;
use stockwatch_ledger::{TransactionLedger, TransactionRecord, TransactionType};

/// Seed used by [`SampleData::generate`].
pub const DEFAULT_SEED: u64 = 42;

/// A year of synthetic inventory movements for three demo products, plus
/// the matching catalog.
///
/// One IN or OUT movement per product per day across calendar year 2024,
/// quantities in 10..100 and unit prices in 10.00..100.00 (carried as
/// cents). Generation is deterministic for a fixed seed.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub ledger: TransactionLedger,
    pub catalog: ProductCatalog,
}

impl SampleData {
    pub fn generate() -> Self {
        Self::generate_with_seed(DEFAULT_SEED)
    }

    pub fn generate_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let catalog = Self::demo_catalog();
        let product_ids: Vec<ProductId> =
            catalog.iter().map(|d| d.product_id().clone()).collect();

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let mut ledger = TransactionLedger::new();
        for date in start.iter_days().take_while(|d| *d <= end) {
            for product_id in &product_ids {
                let quantity = rng.gen_range(10..100);
                let transaction_type = if rng.gen_bool(0.5) {
                    TransactionType::In
                } else {
                    TransactionType::Out
                };
                let unit_price_cents = rng.gen_range(1_000..10_000);

                ledger.record(TransactionRecord::new(
                    date,
                    product_id.clone(),
                    quantity,
                    transaction_type,
                    unit_price_cents,
                ));
            }
        }

        Self { ledger, catalog }
    }

    fn demo_catalog() -> ProductCatalog {
        let pid = |code: &str| ProductId::new(code).expect("demo product code");
        ProductCatalog::from_definitions([
            ProductDefinition::new(pid("P001"), "Widgets", "Electronics", 20, 80)
                .expect("demo product"),
            ProductDefinition::new(pid("P002"), "Gadgets", "Electronics", 15, 70)
                .expect("demo product"),
            ProductDefinition::new(pid("P003"), "Tools", "Hardware", 25, 90)
                .expect("demo product"),
        ])
        .expect("demo catalog")
    }
}
