//! The seeded order book.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use kenyan_beans_core::{OrderId, OrderStatus, Price, ProductId};

/// One product line within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A customer order as shown in the admin orders tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub items: Vec<OrderLine>,
    pub total: Price,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

fn order(
    id: &str,
    customer: &str,
    items: Vec<(&str, u32)>,
    total_cents: i64,
    status: OrderStatus,
    date: (i32, u32, u32),
) -> Order {
    Order {
        id: OrderId::new(id),
        customer: customer.to_owned(),
        items: items
            .into_iter()
            .map(|(product_id, quantity)| OrderLine {
                product_id: ProductId::new(product_id),
                quantity,
            })
            .collect(),
        total: Price::from_cents(total_cents),
        status,
        // Seeded dates are known-valid.
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
    }
}

/// The orders seeded into every demo session.
#[must_use]
pub fn mock_orders() -> Vec<Order> {
    vec![
        order(
            "ORD-7721",
            "Alice Johnson",
            vec![("nyeri-sl28", 2)],
            4800,
            OrderStatus::Shipped,
            (2026, 2, 18),
        ),
        order(
            "ORD-8910",
            "Bob Smith",
            vec![("kiambu-sl34", 1)],
            2600,
            OrderStatus::Pending,
            (2026, 2, 19),
        ),
    ]
}

/// In-memory order list with status updates.
///
/// Updates are session-scoped: the original demo only raised a toast, so an
/// unknown order ID is a logged no-op rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::seeded()
    }
}

impl OrderBook {
    /// An order book holding the seeded demo orders.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            orders: mock_orders(),
        }
    }

    /// All orders, newest last (seeded order).
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn find(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    /// Set an order's status. Returns whether anything changed.
    pub fn update_status(&mut self, id: &OrderId, status: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|order| &order.id == id) {
            Some(order) => {
                info!(order_id = %id, from = %order.status, to = %status, "order status updated");
                order.status = status;
                true
            }
            None => {
                warn!(order_id = %id, "status update for unknown order ignored");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_orders() {
        let book = OrderBook::seeded();
        assert_eq!(book.orders().len(), 2);

        let alice = book.find(&OrderId::new("ORD-7721")).expect("seeded order");
        assert_eq!(alice.customer, "Alice Johnson");
        assert_eq!(alice.status, OrderStatus::Shipped);
        assert_eq!(alice.total.display(), "$48.00");
    }

    #[test]
    fn test_update_status() {
        let mut book = OrderBook::seeded();
        let id = OrderId::new("ORD-8910");

        assert!(book.update_status(&id, OrderStatus::Delivered));
        assert_eq!(
            book.find(&id).map(|o| o.status),
            Some(OrderStatus::Delivered)
        );
    }

    #[test]
    fn test_update_unknown_order_is_noop() {
        let mut book = OrderBook::seeded();
        let before = book.orders().to_vec();

        assert!(!book.update_status(&OrderId::new("ORD-0000"), OrderStatus::Cancelled));
        assert_eq!(book.orders(), before.as_slice());
    }
}
