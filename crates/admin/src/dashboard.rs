//! Dashboard read models for the admin overview and inventory tabs.
//!
//! The overview numbers are static demo figures, not aggregates of the
//! two-order book; they mirror what the reference dashboard displays.

use serde::Serialize;

use kenyan_beans_core::catalog::kenyan_coffees;
use kenyan_beans_core::{Price, ProductId};

/// Stock threshold below which the inventory tab shows a low-stock badge.
const LOW_STOCK_THRESHOLD: u32 = 20;

/// One headline card on the overview tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    /// Period-over-period movement, pre-formatted (e.g., "+12.5%").
    pub trend: &'static str,
}

/// The four headline cards.
#[must_use]
pub const fn stats() -> [StatCard; 4] {
    [
        StatCard {
            label: "Total Revenue",
            value: "$24,450.80",
            trend: "+12.5%",
        },
        StatCard {
            label: "Total Orders",
            value: "452",
            trend: "+8.1%",
        },
        StatCard {
            label: "Coffee Inventory",
            value: "1,240kg",
            trend: "-2.4%",
        },
        StatCard {
            label: "Avg Order Value",
            value: "$54.10",
            trend: "+4.3%",
        },
    ]
}

/// One point on the weekly sales chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesPoint {
    pub day: &'static str,
    pub sales: u32,
    pub orders: u32,
}

/// The Mon..Sun sales series behind the overview chart.
#[must_use]
pub const fn weekly_sales() -> [SalesPoint; 7] {
    [
        SalesPoint { day: "Mon", sales: 4000, orders: 24 },
        SalesPoint { day: "Tue", sales: 3000, orders: 18 },
        SalesPoint { day: "Wed", sales: 5000, orders: 32 },
        SalesPoint { day: "Thu", sales: 4500, orders: 28 },
        SalesPoint { day: "Fri", sales: 6000, orders: 45 },
        SalesPoint { day: "Sat", sales: 7000, orders: 58 },
        SalesPoint { day: "Sun", sales: 5500, orders: 38 },
    ]
}

/// Stock badge shown next to each inventory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockLevel {
    #[must_use]
    pub const fn for_units(units: u32) -> Self {
        match units {
            0 => Self::OutOfStock,
            u if u < LOW_STOCK_THRESHOLD => Self::LowStock,
            _ => Self::InStock,
        }
    }
}

/// One row in the inventory tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    pub product_id: ProductId,
    pub name: String,
    pub region: String,
    pub price: Price,
    pub stock: u32,
    pub level: StockLevel,
}

/// Inventory rows filtered by a case-insensitive name match.
///
/// An empty search returns the whole catalog.
#[must_use]
pub fn inventory(search: &str) -> Vec<InventoryRow> {
    let search = search.to_lowercase();
    kenyan_coffees()
        .iter()
        .filter(|product| search.is_empty() || product.name.to_lowercase().contains(&search))
        .map(|product| InventoryRow {
            product_id: product.id.clone(),
            name: product.name.clone(),
            region: product.region.clone(),
            price: product.price,
            stock: product.stock,
            level: StockLevel::for_units(product.stock),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_cards() {
        let cards = stats();
        assert_eq!(cards[0].label, "Total Revenue");
        assert_eq!(cards[0].value, "$24,450.80");
        assert_eq!(cards.len(), 4);
    }

    #[test]
    fn test_weekly_sales_covers_the_week() {
        let series = weekly_sales();
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].day, "Mon");
        assert_eq!(series[6].day, "Sun");
    }

    #[test]
    fn test_inventory_search() {
        let all = inventory("");
        assert_eq!(all.len(), 4);

        let hits = inventory("peaberry");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_id.as_str(), "kirinyaga-pb");
    }

    #[test]
    fn test_stock_levels() {
        assert_eq!(StockLevel::for_units(0), StockLevel::OutOfStock);
        assert_eq!(StockLevel::for_units(15), StockLevel::LowStock);
        assert_eq!(StockLevel::for_units(45), StockLevel::InStock);

        // kiambu-sl34 is seeded at 15 units.
        let kiambu = inventory("kiambu")
            .into_iter()
            .next()
            .expect("seeded product");
        assert_eq!(kiambu.level, StockLevel::LowStock);
    }
}
