//! The cart store.
//!
//! An ordered collection of line items with merge-by-identity semantics:
//! a line item is identified by the (product id, bag size) pair, and adding
//! the same pair again merges quantities instead of duplicating the line.
//! Totals are always derived from the lines, never stored.

use serde::{Deserialize, Serialize};
use tracing::debug;

use kenyan_beans_core::{BagSize, Price, Product, ProductId};

/// Flat shipping charged on any non-empty cart, in cents.
const SHIPPING_FLAT_CENTS: i64 = 1200;

/// One (product, bag size) pairing with an associated quantity.
///
/// Carries a snapshot of the product as it was when added; later catalog
/// changes do not rewrite cart lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: Product,
    /// Always >= 1. Lines are removed, never zeroed.
    pub quantity: u32,
    pub bag_size: BagSize,
}

impl CartLineItem {
    /// Line total: unit price x quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }

    fn is(&self, id: &ProductId, bag_size: BagSize) -> bool {
        &self.product.id == id && self.bag_size == bag_size
    }
}

/// The authoritative in-memory cart.
///
/// Insertion order is stable for display. Exactly one logical writer exists
/// per session (the current rendering pass), so every operation commits
/// synchronously; none can fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartStore {
    lines: Vec<CartLineItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` bags of a product to the cart.
    ///
    /// Merges into an existing (product id, bag size) line if one exists,
    /// otherwise appends a new line. A zero quantity is ignored.
    ///
    /// Quantities are intentionally not clamped against `product.stock`;
    /// the demo mirrors the reference storefront, which lets the cart exceed
    /// availability. See the known-gap test in the cart suite.
    pub fn add(&mut self, product: &Product, quantity: u32, bag_size: BagSize) {
        if quantity == 0 {
            debug!(product_id = %product.id, "ignoring zero-quantity add");
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.is(&product.id, bag_size))
        {
            line.quantity = line.quantity.saturating_add(quantity);
            debug!(
                product_id = %product.id,
                %bag_size,
                quantity = line.quantity,
                "merged cart line"
            );
        } else {
            self.lines.push(CartLineItem {
                product: product.clone(),
                quantity,
                bag_size,
            });
            debug!(product_id = %product.id, %bag_size, quantity, "added cart line");
        }
    }

    /// Remove the line matching (id, bag size). Silent no-op when absent.
    pub fn remove(&mut self, id: &ProductId, bag_size: BagSize) {
        let before = self.lines.len();
        self.lines.retain(|line| !line.is(id, bag_size));
        if self.lines.len() < before {
            debug!(product_id = %id, %bag_size, "removed cart line");
        }
    }

    /// Adjust the quantity of the line matching (id, bag size) by a signed
    /// delta, clamped to a minimum of 1. Removing a line is an explicit
    /// [`CartStore::remove`], never a side effect of decrementing.
    /// No-op when no line matches.
    pub fn update_quantity(&mut self, id: &ProductId, bag_size: BagSize, delta: i64) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.is(id, bag_size)) {
            let updated = i64::from(line.quantity).saturating_add(delta).max(1);
            line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
            debug!(product_id = %id, %bag_size, quantity = line.quantity, "updated quantity");
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        debug!("cleared cart");
    }

    /// Total number of bags across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line totals, before shipping.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines
            .iter()
            .fold(Price::zero(), |acc, line| acc + line.line_total())
    }

    /// Flat-rate shipping: charged once on any non-empty cart.
    #[must_use]
    pub fn shipping(&self) -> Price {
        if self.is_empty() {
            Price::zero()
        } else {
            Price::from_cents(SHIPPING_FLAT_CENTS)
        }
    }

    /// Subtotal plus shipping.
    #[must_use]
    pub fn total(&self) -> Price {
        self.subtotal() + self.shipping()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kenyan_beans_core::catalog::{self, kenyan_coffees};

    fn nyeri() -> &'static Product {
        catalog::find(&ProductId::new("nyeri-sl28")).expect("seeded product")
    }

    fn kiambu() -> &'static Product {
        catalog::find(&ProductId::new("kiambu-sl34")).expect("seeded product")
    }

    #[test]
    fn test_add_merges_same_product_and_bag() {
        let mut cart = CartStore::new();
        cart.add(nyeri(), 2, BagSize::G250);
        cart.add(nyeri(), 3, BagSize::G250);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_same_product_different_bag_is_a_new_line() {
        let mut cart = CartStore::new();
        cart.add(nyeri(), 1, BagSize::G250);
        cart.add(nyeri(), 1, BagSize::Kg1);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_zero_quantity_add_is_ignored() {
        let mut cart = CartStore::new();
        cart.add(nyeri(), 0, BagSize::G250);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_merge_saturates_instead_of_overflowing() {
        let mut cart = CartStore::new();
        cart.add(nyeri(), u32::MAX - 1, BagSize::G250);
        cart.add(nyeri(), 5, BagSize::G250);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut cart = CartStore::new();
        cart.add(kiambu(), 1, BagSize::G500);
        cart.add(nyeri(), 1, BagSize::G250);
        cart.add(kiambu(), 2, BagSize::G500);

        let ids: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.product.id.as_str())
            .collect();
        assert_eq!(ids, vec!["kiambu-sl34", "nyeri-sl28"]);
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let mut cart = CartStore::new();
        cart.add(nyeri(), 1, BagSize::G250);
        cart.update_quantity(&nyeri().id, BagSize::G250, -5);

        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_update_quantity_on_missing_line_is_noop() {
        let mut cart = CartStore::new();
        cart.add(nyeri(), 2, BagSize::G250);
        cart.update_quantity(&nyeri().id, BagSize::Kg1, 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = CartStore::new();
        cart.add(nyeri(), 2, BagSize::G250);

        cart.remove(&nyeri().id, BagSize::G500);
        assert_eq!(cart.lines().len(), 1);

        cart.remove(&nyeri().id, BagSize::G250);
        assert!(cart.is_empty());

        cart.remove(&nyeri().id, BagSize::G250);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut cart = CartStore::new();
        for product in kenyan_coffees() {
            cart.add(product, 2, BagSize::G250);
        }

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), Price::zero());
    }

    #[test]
    fn test_derived_totals() {
        let mut cart = CartStore::new();
        cart.add(nyeri(), 2, BagSize::G250); // 2 x $24.00
        cart.add(kiambu(), 1, BagSize::G500); // 1 x $26.00

        assert_eq!(cart.subtotal().display(), "$74.00");
        assert_eq!(cart.shipping().display(), "$12.00");
        assert_eq!(cart.total().display(), "$86.00");
    }

    #[test]
    fn test_empty_cart_has_no_shipping() {
        let cart = CartStore::new();
        assert_eq!(cart.shipping(), Price::zero());
        assert_eq!(cart.total(), Price::zero());
    }

    #[test]
    fn test_known_gap_add_is_not_clamped_to_stock() {
        // The reference storefront never clamps against stock; the cart may
        // exceed availability. Flagged here so a future clamp is a conscious
        // behavior change, not an accident.
        let mut cart = CartStore::new();
        cart.add(kiambu(), kiambu().stock + 10, BagSize::G250);

        assert_eq!(cart.item_count(), kiambu().stock + 10);
    }
}
