//! Catalog query engine.
//!
//! A pure view over the static catalog: given the product list and the
//! current filter/sort selections, produce the visible products. Safe to
//! recompute on every input change; nothing here mutates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use kenyan_beans_core::{Product, RoastLevel};

/// Sort order for the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Preserves catalog order. The product model has no creation timestamp,
    /// so "newest" is deliberately a no-op rather than an invented ordering.
    #[default]
    Newest,
    /// Ascending by price.
    PriceLow,
    /// Descending by price.
    PriceHigh,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            _ => Err(format!(
                "invalid sort: {s}. Valid sorts: newest, price-low, price-high"
            )),
        }
    }
}

/// Filter and sort criteria for the shop page.
///
/// The default query matches everything in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against product name OR region.
    pub search: String,
    /// Exact roast filter; `None` means no filter.
    pub roast: Option<RoastLevel>,
    /// Exact region filter; `None` means no filter.
    pub region: Option<String>,
    pub sort: SortBy,
}

impl CatalogQuery {
    fn matches(&self, product: &Product) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty()
            || product.name.to_lowercase().contains(&search)
            || product.region.to_lowercase().contains(&search);
        let matches_roast = self.roast.is_none_or(|roast| product.roast_level == roast);
        let matches_region = self
            .region
            .as_ref()
            .is_none_or(|region| &product.region == region);
        matches_search && matches_roast && matches_region
    }
}

/// Apply a query to a product list.
///
/// Filtering is the conjunction of the search, roast, and region criteria;
/// the sort is stable, so products with equal prices keep catalog order.
/// An empty result is a valid outcome, not an error.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = products.iter().filter(|p| query.matches(p)).collect();
    match query.sort {
        SortBy::Newest => {}
        SortBy::PriceLow => visible.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        SortBy::PriceHigh => visible.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
    }
    visible
}
