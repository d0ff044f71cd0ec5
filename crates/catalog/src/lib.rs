//! Catalog domain module.
//!
//! This crate contains the business rules for the product catalog: the
//! [`Product`] entity, the [`Inventory`] collection that owns it, and the
//! low-stock alerting rule. Deterministic domain logic only — no IO beyond
//! the alert side channel, no storage.

pub mod alert;
pub mod inventory;
pub mod product;

pub use alert::LowStockAlert;
pub use inventory::{Inventory, LOW_STOCK_THRESHOLD};
pub use product::{Product, ProductField, ProductUpdate, format_price_cents};
