use thiserror::Error;

use stockwatch_core::ProductId;

/// Result type used across the analytics layer.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Analytics-level error.
///
/// All variants are local computation failures; there is no IO in this
/// layer, so none of them is retryable. A failed call leaves no residue.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// The product has no ledger records at all (caller-correctable).
    #[error("unknown product: {0} has no ledger records")]
    UnknownProduct(ProductId),

    /// The historical series is too short or degenerate for the model
    /// order. Retrying with identical data cannot succeed.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// The product appears in the ledger but not in the catalog.
    #[error("product {0} is missing from the catalog")]
    CatalogMismatch(ProductId),

    /// Invalid request parameters (e.g. a zero forecast horizon).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A collaborator broke its contract or an unexpected failure occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
