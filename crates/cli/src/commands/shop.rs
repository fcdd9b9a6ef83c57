//! Catalog browsing, mirroring the shop page's toolbar.

use kenyan_beans_core::RoastLevel;
use kenyan_beans_core::catalog::kenyan_coffees;
use kenyan_beans_storefront::catalog::{CatalogQuery, SortBy, filter_products};

/// Filter and print the catalog.
#[allow(clippy::print_stdout)]
pub fn browse(
    search: &str,
    roast: Option<RoastLevel>,
    region: Option<String>,
    sort: SortBy,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = CatalogQuery {
        search: search.to_owned(),
        roast,
        region,
        sort,
    };
    let visible = filter_products(kenyan_coffees(), &query);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No matching coffee found. Try adjusting your filters.");
        return Ok(());
    }

    for product in visible {
        println!(
            "{:<14} {:<28} {:<13} {:<6} roast  {:>7}  {} in stock",
            product.id.as_str(),
            product.name,
            product.region,
            product.roast_level.to_string(),
            product.price.display(),
            product.stock,
        );
        println!("{:14} notes: {}", "", product.notes.join(", "));
    }
    Ok(())
}
