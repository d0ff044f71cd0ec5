//! Low-stock alert event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::ProductId;
use stockdesk_events::Event;

/// Emitted when a stock adjustment leaves a product below the restock
/// threshold. Observability side channel only: the adjustment itself has
/// already succeeded when this fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub product_id: ProductId,
    pub name: String,
    pub stock_quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

impl Event for LowStockAlert {
    fn event_type(&self) -> &'static str {
        "catalog.product.low_stock"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
