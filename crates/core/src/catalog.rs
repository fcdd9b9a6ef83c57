//! The product model and the seeded demo catalog.
//!
//! The catalog is fixed at process start: four single-origin Kenyan coffees.
//! Nothing in the system mutates a `Product`; the cart stores snapshots.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, RoastLevel};

/// A coffee product as presented in the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub region: String,
    /// Growing elevation, display string (e.g., "1,800m").
    pub elevation: String,
    /// Processing method (Washed, Natural, Honey).
    pub process: String,
    pub roast_level: RoastLevel,
    /// Flavor tags in tasting order.
    pub notes: Vec<String>,
    pub price: Price,
    /// Units available. Informational only: the cart does not reserve stock.
    pub stock: u32,
    pub image: String,
    pub description: String,
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    region: &str,
    elevation: &str,
    process: &str,
    roast_level: RoastLevel,
    notes: &[&str],
    price_cents: i64,
    stock: u32,
    image: &str,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        region: region.to_owned(),
        elevation: elevation.to_owned(),
        process: process.to_owned(),
        roast_level,
        notes: notes.iter().map(|n| (*n).to_owned()).collect(),
        price: Price::from_cents(price_cents),
        stock,
        image: image.to_owned(),
        description: description.to_owned(),
    }
}

/// The full seeded catalog, in merchandising order.
pub fn kenyan_coffees() -> &'static [Product] {
    static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            product(
                "nyeri-sl28",
                "Nyeri Hill Estate SL28",
                "Nyeri County",
                "1,800m",
                "Washed",
                RoastLevel::Light,
                &["Blackcurrant", "Hibiscus", "Lime"],
                2400,
                45,
                "https://images.unsplash.com/photo-1677443144837-e80ccaa9555f",
                "A classic Nyeri profile with intense acidity and deep berry \
                 sweetness. SL28 variety is known for its distinct blackcurrant \
                 profile.",
            ),
            product(
                "kirinyaga-pb",
                "Kirinyaga Peaberry Special",
                "Kirinyaga",
                "1,750m",
                "Washed",
                RoastLevel::Medium,
                &["Grapefruit", "Tomato Leaf", "Maple"],
                2800,
                22,
                "https://images.unsplash.com/photo-1770081485131-d978211245aa",
                "Peaberry beans are small, round beans formed when only one seed \
                 develops in the coffee cherry. They concentrate the flavor for a \
                 punchy experience.",
            ),
            product(
                "kiambu-sl34",
                "Kiambu Plateau SL34",
                "Kiambu",
                "1,900m",
                "Natural",
                RoastLevel::Medium,
                &["Mango", "Dark Chocolate", "Molasses"],
                2600,
                15,
                "https://images.unsplash.com/photo-1620472434832-b3ea9294e669",
                "A rare naturally processed Kenyan coffee. This process emphasizes \
                 the fruit notes, giving it a heavy body and tropical sweetness.",
            ),
            product(
                "embu-k7",
                "Embu Gakuyuni K7",
                "Embu",
                "1,650m",
                "Honey",
                RoastLevel::Light,
                &["Caramel", "Orange", "Floral"],
                2200,
                60,
                "https://images.unsplash.com/photo-1633627354173-1a26871e3204",
                "The K7 variety is resistant to coffee leaf rust and produces a \
                 clean, floral cup with moderate acidity.",
            ),
        ]
    })
}

/// Look up a product by ID.
#[must_use]
pub fn find(id: &ProductId) -> Option<&'static Product> {
    kenyan_coffees().iter().find(|p| &p.id == id)
}

/// Distinct regions in first-seen catalog order, for filter menus.
#[must_use]
pub fn regions() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for product in kenyan_coffees() {
        if !seen.contains(&product.region.as_str()) {
            seen.push(product.region.as_str());
        }
    }
    seen
}
