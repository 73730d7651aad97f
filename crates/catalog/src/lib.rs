//! Product catalog domain module.
//!
//! Static reference data defining each product's stocking thresholds,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod catalog;
pub mod product;

pub use catalog::ProductCatalog;
pub use product::ProductDefinition;
