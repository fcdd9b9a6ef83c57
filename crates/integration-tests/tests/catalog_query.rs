//! Catalog query engine properties on both seeded and ad hoc product lists.

use kenyan_beans_core::catalog::kenyan_coffees;
use kenyan_beans_core::{Price, Product, ProductId, RoastLevel};
use kenyan_beans_storefront::catalog::{CatalogQuery, SortBy, filter_products};

fn product(id: &str, region: &str, roast: RoastLevel, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Test {id}"),
        region: region.to_owned(),
        elevation: "1,700m".to_owned(),
        process: "Washed".to_owned(),
        roast_level: roast,
        notes: vec!["Citrus".to_owned()],
        price: Price::from_cents(price_cents),
        stock: 10,
        image: String::new(),
        description: String::new(),
    }
}

fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn test_roast_filter_worked_example() {
    // A: Nyeri/Light/$24, B: Kiambu/Medium/$26
    let products = vec![
        product("a", "Nyeri", RoastLevel::Light, 2400),
        product("b", "Kiambu", RoastLevel::Medium, 2600),
    ];

    let light = filter_products(&products, &CatalogQuery {
        roast: Some(RoastLevel::Light),
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&light), vec!["a"]);
}

#[test]
fn test_price_high_worked_example() {
    let products = vec![
        product("a", "Nyeri", RoastLevel::Light, 2400),
        product("b", "Kiambu", RoastLevel::Medium, 2600),
    ];

    let sorted = filter_products(&products, &CatalogQuery {
        sort: SortBy::PriceHigh,
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&sorted), vec!["b", "a"]);
}

#[test]
fn test_filter_dimensions_commute() {
    // roast-then-region and region-then-roast must agree
    let roast_query = CatalogQuery {
        roast: Some(RoastLevel::Medium),
        ..CatalogQuery::default()
    };
    let region_query = CatalogQuery {
        region: Some("Kiambu".to_owned()),
        ..CatalogQuery::default()
    };
    let both = CatalogQuery {
        roast: Some(RoastLevel::Medium),
        region: Some("Kiambu".to_owned()),
        ..CatalogQuery::default()
    };

    let roast_first: Vec<Product> = filter_products(kenyan_coffees(), &roast_query)
        .into_iter()
        .cloned()
        .collect();
    let roast_then_region = filter_products(&roast_first, &region_query);

    let region_first: Vec<Product> = filter_products(kenyan_coffees(), &region_query)
        .into_iter()
        .cloned()
        .collect();
    let region_then_roast = filter_products(&region_first, &roast_query);

    assert_eq!(ids(&roast_then_region), ids(&region_then_roast));
    assert_eq!(
        ids(&roast_then_region),
        ids(&filter_products(kenyan_coffees(), &both))
    );
}

#[test]
fn test_filtering_is_idempotent() {
    let query = CatalogQuery {
        roast: Some(RoastLevel::Light),
        ..CatalogQuery::default()
    };

    let once: Vec<Product> = filter_products(kenyan_coffees(), &query)
        .into_iter()
        .cloned()
        .collect();
    let twice = filter_products(&once, &query);

    assert_eq!(ids(&twice), ids(&once.iter().collect::<Vec<_>>()));
}

#[test]
fn test_search_and_filters_conjoin_on_seeded_catalog() {
    let query = CatalogQuery {
        search: "kirinyaga".to_owned(),
        roast: Some(RoastLevel::Medium),
        region: Some("Kirinyaga".to_owned()),
        sort: SortBy::PriceLow,
    };
    assert_eq!(ids(&filter_products(kenyan_coffees(), &query)), vec![
        "kirinyaga-pb"
    ]);
}

#[test]
fn test_equal_prices_keep_catalog_order() {
    let products = vec![
        product("first", "Nyeri", RoastLevel::Light, 2400),
        product("second", "Kiambu", RoastLevel::Medium, 2400),
        product("third", "Embu", RoastLevel::Dark, 2200),
    ];

    let sorted = filter_products(&products, &CatalogQuery {
        sort: SortBy::PriceLow,
        ..CatalogQuery::default()
    });
    // stable sort: the two $24.00 products stay in insertion order
    assert_eq!(ids(&sorted), vec!["third", "first", "second"]);
}
