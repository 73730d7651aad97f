use std::collections::BTreeMap;

use stockwatch_core::{DomainError, DomainResult, ProductId};

use crate::product::ProductDefinition;

/// Static reference data keyed uniquely by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: BTreeMap<ProductId, ProductDefinition>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions, rejecting duplicate product ids.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ProductDefinition>,
    ) -> DomainResult<Self> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.insert(definition)?;
        }
        Ok(catalog)
    }

    /// Insert a definition; a second definition for the same id is a conflict.
    pub fn insert(&mut self, definition: ProductDefinition) -> DomainResult<()> {
        let product_id = definition.product_id().clone();
        if self.products.contains_key(&product_id) {
            return Err(DomainError::conflict(format!(
                "product {product_id} already defined"
            )));
        }
        self.products.insert(product_id, definition);
        Ok(())
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&ProductDefinition> {
        self.products.get(product_id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.products.contains_key(product_id)
    }

    /// Definitions in product-id order (deterministic).
    pub fn iter(&self) -> impl Iterator<Item = &ProductDefinition> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
