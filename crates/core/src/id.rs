//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product (short code such as `"P001"`).
///
/// Product identifiers come from the ledger source as opaque codes, so this
/// is a validated string newtype rather than a generated id. Ordering is
/// lexicographic on the code, which gives derived views a deterministic
/// sort order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an identifier from a raw code.
    ///
    /// The code must be non-empty and must not contain whitespace.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty code"));
        }
        if code.chars().any(char::is_whitespace) {
            return Err(DomainError::invalid_id(format!(
                "ProductId: code {code:?} contains whitespace"
            )));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_codes() {
        let id = ProductId::new("P001").unwrap();
        assert_eq!(id.as_str(), "P001");
        assert_eq!(id.to_string(), "P001");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(matches!(ProductId::new(""), Err(DomainError::InvalidId(_))));
        assert!(matches!(
            ProductId::new("P 01"),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn orders_lexicographically() {
        let a: ProductId = "P001".parse().unwrap();
        let b: ProductId = "P002".parse().unwrap();
        assert!(a < b);
    }
}
