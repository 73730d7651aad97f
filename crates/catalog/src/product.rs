use serde::Serialize;

use stockwatch_core::{DomainError, DomainResult, ProductId};

/// Static reference data for one product: naming, categorization, and the
/// stocking thresholds replenishment and risk scoring compare against.
///
/// Fields are private so the `max_stock >= min_stock` invariant, checked at
/// construction, cannot be broken afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDefinition {
    product_id: ProductId,
    product_name: String,
    category: String,
    min_stock: u32,
    max_stock: u32,
}

impl ProductDefinition {
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        category: impl Into<String>,
        min_stock: u32,
        max_stock: u32,
    ) -> DomainResult<Self> {
        let product_name = product_name.into();
        if product_name.trim().is_empty() {
            return Err(DomainError::validation("product_name cannot be empty"));
        }
        if max_stock < min_stock {
            return Err(DomainError::invariant(format!(
                "max_stock ({max_stock}) must be >= min_stock ({min_stock})"
            )));
        }
        Ok(Self {
            product_id,
            product_name,
            category: category.into(),
            min_stock,
            max_stock,
        })
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn min_stock(&self) -> u32 {
        self.min_stock
    }

    pub fn max_stock(&self) -> u32 {
        self.max_stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pid(code: &str) -> ProductId {
        ProductId::new(code).unwrap()
    }

    #[test]
    fn thresholds_are_validated_at_construction() {
        let err = ProductDefinition::new(pid("P001"), "Widgets", "Electronics", 20, 10)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn equal_thresholds_are_allowed() {
        let def = ProductDefinition::new(pid("P001"), "Widgets", "Electronics", 20, 20).unwrap();
        assert_eq!(def.min_stock(), def.max_stock());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = ProductDefinition::new(pid("P001"), "  ", "Electronics", 0, 10).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    proptest! {
        /// Property: construction succeeds iff max_stock >= min_stock.
        #[test]
        fn construction_mirrors_threshold_invariant(min in 0u32..1_000, max in 0u32..1_000) {
            let result = ProductDefinition::new(pid("P001"), "Widgets", "Electronics", min, max);
            prop_assert_eq!(result.is_ok(), max >= min);
        }
    }
}
