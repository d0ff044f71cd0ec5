//! Product entity and its partial-update contract.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, Entity, ProductId};

/// A catalog record.
///
/// The id is the primary key and immutable; every other field is mutable
/// through [`ProductUpdate`]. Price is held in the smallest currency unit
/// (cents), which keeps it non-negative by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    price_cents: u64,
    stock_quantity: i64,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price_cents: u64,
        stock_quantity: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            category: category.into(),
            price_cents,
            stock_quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price_cents(&self) -> u64 {
        self.price_cents
    }

    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }

    /// Case-insensitive substring match against the product name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Case-insensitive equality against the product category.
    pub fn category_is(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    pub(crate) fn apply(&mut self, update: &ProductUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
        if let Some(price_cents) = update.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(stock_quantity) = update.stock_quantity {
            self.stock_quantity = stock_quantity;
        }
    }

    pub(crate) fn set_stock(&mut self, stock_quantity: i64) {
        self.stock_quantity = stock_quantity;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product({}, {}, {}, {}, {})",
            self.id,
            self.name,
            self.category,
            format_price_cents(self.price_cents),
            self.stock_quantity
        )
    }
}

/// Render a minor-unit price as a decimal string ("1234" cents -> "12.34").
pub fn format_price_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Partial update of a product: only the populated fields change.
///
/// The updatable set is enumerated here on purpose — there is no way to
/// inject a field the schema does not have.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price_cents: Option<u64>,
    pub stock_quantity: Option<i64>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price_cents.is_none()
            && self.stock_quantity.is_none()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price_cents(mut self, price_cents: u64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    pub fn stock_quantity(mut self, stock_quantity: i64) -> Self {
        self.stock_quantity = Some(stock_quantity);
        self
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("product name cannot be empty"));
            }
        }
        Ok(())
    }
}

/// The updatable product fields, by external (presentation-facing) name.
///
/// Parsing is the boundary where unknown field names get a typed rejection
/// instead of silently growing the schema.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Category,
    Price,
    StockQuantity,
}

impl ProductField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Category => "category",
            ProductField::Price => "price",
            ProductField::StockQuantity => "stock_quantity",
        }
    }
}

impl FromStr for ProductField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(ProductField::Name),
            "category" => Ok(ProductField::Category),
            "price" => Ok(ProductField::Price),
            "stock_quantity" | "stock" => Ok(ProductField::StockQuantity),
            other => Err(DomainError::unknown_field(other)),
        }
    }
}
