//! The inventory: sole owner and mutator of the product catalog.

use std::sync::Arc;

use chrono::Utc;

use stockdesk_core::{DomainError, DomainResult, Entity, ProductId};
use stockdesk_events::{EventBus, InMemoryEventBus, Subscription};

use crate::alert::LowStockAlert;
use crate::product::{Product, ProductUpdate};

/// Stock level below which an adjustment emits a [`LowStockAlert`].
///
/// Fixed policy constant, deliberately not configurable.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Owns the product catalog and enforces its single invariant: at most one
/// product per id.
///
/// Iteration order is insertion order, and replacing a product by id keeps
/// its original position. Adding a product whose id is already present
/// **silently overwrites** the existing record — an explicit policy choice,
/// not an accident (callers wanting reject-on-duplicate can check
/// [`Inventory::get`] first).
#[derive(Debug)]
pub struct Inventory<B = InMemoryEventBus<LowStockAlert>> {
    // Vec keeps insertion order; ids stay unique because every insert goes
    // through `add`. Linear scans are fine at interactive-catalog scale.
    products: Vec<Product>,
    alerts: Arc<B>,
}

impl Inventory<InMemoryEventBus<LowStockAlert>> {
    /// An inventory wired to its own in-memory alert bus.
    pub fn new() -> Self {
        Self::with_alert_bus(Arc::new(InMemoryEventBus::new()))
    }
}

impl Default for Inventory<InMemoryEventBus<LowStockAlert>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Inventory<B>
where
    B: EventBus<LowStockAlert>,
{
    /// An inventory publishing alerts to a caller-provided bus.
    pub fn with_alert_bus(alerts: Arc<B>) -> Self {
        Self {
            products: Vec::new(),
            alerts,
        }
    }

    /// Subscribe to the low-stock side channel.
    pub fn subscribe_alerts(&self) -> Subscription<LowStockAlert> {
        self.alerts.subscribe()
    }

    /// Insert a product keyed by its id, silently overwriting any existing
    /// product with the same id (the replacement keeps the original
    /// insertion position).
    pub fn add(&mut self, product: Product) {
        match self.position(product.id()) {
            Some(idx) => self.products[idx] = product,
            None => self.products.push(product),
        }
    }

    /// Apply a partial update to the product with the given id.
    ///
    /// Only the fields populated in `update` change. Fails with `NotFound`
    /// if the id is absent; an update that would blank the name fails with
    /// `Validation` and leaves the product untouched.
    pub fn update(&mut self, id: &ProductId, update: &ProductUpdate) -> DomainResult<()> {
        update.validate()?;
        let idx = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(id.as_str()))?;
        self.products[idx].apply(update);
        Ok(())
    }

    /// Remove the product with the given id, returning it.
    pub fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        let idx = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(id.as_str()))?;
        Ok(self.products.remove(idx))
    }

    /// All products, in insertion order. Restartable and side-effect free.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Look up a single product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.position(id).map(|idx| &self.products[idx])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Search with OR semantics: a product qualifies when `name` is
    /// non-empty and a case-insensitive substring of its name, **or** when
    /// `category` is non-empty and case-insensitively equal to its
    /// category. Two empty criteria match nothing.
    pub fn search(&self, name: &str, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| {
                (!name.is_empty() && p.name_contains(name))
                    || (!category.is_empty() && p.category_is(category))
            })
            .collect()
    }

    /// Add a signed delta to the product's stock quantity and return the new
    /// level. No floor is enforced: stock may go negative (back-orders).
    ///
    /// If the resulting quantity is below [`LOW_STOCK_THRESHOLD`], a
    /// [`LowStockAlert`] naming the product is published on the alert bus
    /// and logged at WARN. Alert delivery is best-effort and never fails
    /// the adjustment.
    pub fn adjust_stock(&mut self, id: &ProductId, delta: i64) -> DomainResult<i64> {
        let idx = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(id.as_str()))?;

        let product = &mut self.products[idx];
        let new_quantity = product
            .stock_quantity()
            .checked_add(delta)
            .ok_or_else(|| DomainError::validation("stock adjustment overflows"))?;
        product.set_stock(new_quantity);

        if new_quantity < LOW_STOCK_THRESHOLD {
            let alert = LowStockAlert {
                product_id: product.id().clone(),
                name: product.name().to_string(),
                stock_quantity: new_quantity,
                occurred_at: Utc::now(),
            };
            tracing::warn!(
                product_id = %alert.product_id,
                name = %alert.name,
                stock_quantity = alert.stock_quantity,
                "low stock, consider restocking"
            );
            if let Err(err) = self.alerts.publish(alert) {
                tracing::warn!(error = ?err, "failed to publish low-stock alert");
            }
        }

        Ok(new_quantity)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }
}
