use crate::domain::product::{Product, Slot};
use crate::error::{Result, VendingError};
use serde::Serialize;
use std::collections::BTreeMap;

/// Products keyed by slot. A slot holds at most one product and is never reused.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    products: BTreeMap<Slot, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, slot: Slot, product: Product) -> Result<()> {
        if self.products.contains_key(&slot) {
            return Err(VendingError::PositionOccupied(slot));
        }
        self.products.insert(slot, product);
        Ok(())
    }

    pub fn get(&self, slot: Slot) -> Option<&Product> {
        self.products.get(&slot)
    }

    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.products.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in slot order.
    pub fn products(&self) -> impl Iterator<Item = (Slot, &Product)> {
        self.products.iter().map(|(slot, product)| (*slot, product))
    }

    pub fn snapshot(&self) -> Vec<ProductSnapshot> {
        self.products()
            .map(|(slot, product)| ProductSnapshot {
                position: slot.value(),
                price: product.price.cents(),
                name: product.name.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSnapshot {
    pub position: u32,
    pub price: u32,
    pub name: Option<String>,
}
