//! Order Records

use cafe::orders::Order;
use jiff::Timestamp;

use crate::ids::TypedId;

/// Order Id
pub type OrderId = TypedId<OrderRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    /// Store-assigned identifier.
    pub id: OrderId,

    /// The aggregate as persisted.
    pub order: Order,

    /// Creation timestamp, never changed.
    pub created_at: Timestamp,

    /// Refreshed on every saved mutation.
    pub updated_at: Timestamp,
}
