//! Scripted cart walkthrough.
//!
//! Exercises the full cart lifecycle against the process-wide state handle:
//! merge-by-identity adds, clamped quantity updates, removal, and a mock
//! checkout that clears the cart.

use kenyan_beans_core::{BagSize, ProductId, catalog};
use kenyan_beans_storefront::checkout::{CheckoutForm, place_order};
use kenyan_beans_storefront::state::{AppState, context};

#[allow(clippy::print_stdout)]
fn print_cart(state: &AppState, heading: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("-- {heading}");
    for line in state.cart_lines()? {
        println!(
            "   {} x{} ({})  {}",
            line.product.name,
            line.quantity,
            line.bag_size,
            line.line_total().display(),
        );
    }
    println!(
        "   bags: {}  subtotal: {}  total: {}",
        state.cart_count()?,
        state.subtotal()?.display(),
        state.total()?.display(),
    );
    Ok(())
}

/// Run the walkthrough.
#[allow(clippy::print_stdout)]
pub fn demo() -> Result<(), Box<dyn std::error::Error>> {
    context::init(AppState::new())?;
    let state = context::current()?;

    let nyeri_id = ProductId::new("nyeri-sl28");
    let kiambu_id = ProductId::new("kiambu-sl34");
    let nyeri = catalog::find(&nyeri_id).ok_or("missing seeded product")?;
    let kiambu = catalog::find(&kiambu_id).ok_or("missing seeded product")?;

    state.add_to_cart(nyeri, 2, BagSize::G250)?;
    state.add_to_cart(nyeri, 3, BagSize::G250)?;
    print_cart(&state, "after adding 2 + 3 Nyeri 250g (one merged line)")?;

    state.add_to_cart(nyeri, 1, BagSize::Kg1)?;
    state.add_to_cart(kiambu, 1, BagSize::G500)?;
    print_cart(&state, "after adding Nyeri 1kg and Kiambu 500g")?;

    state.update_quantity(&nyeri_id, BagSize::G250, -10)?;
    print_cart(&state, "after decrementing Nyeri 250g by 10 (clamped to 1)")?;

    state.remove_from_cart(&nyeri_id, BagSize::Kg1)?;
    print_cart(&state, "after removing the Nyeri 1kg line")?;

    let form = CheckoutForm {
        full_name: "Demo Customer".to_owned(),
        email: "demo@kenyanbeans.example".to_owned(),
        street: "12 Riverside Drive".to_owned(),
        city: "Nairobi".to_owned(),
        country: "Kenya".to_owned(),
        postal_code: "00100".to_owned(),
        card_number: "4242 4242 4242 4242".to_owned(),
        card_expiry: "12/27".to_owned(),
        card_cvc: "123".to_owned(),
    };
    let confirmation = place_order(&state, &form)?;
    println!(
        "-- placed order {}: {} bags, {} charged",
        confirmation.order_id,
        confirmation.item_count,
        confirmation.total.display(),
    );
    print_cart(&state, "after checkout (cart cleared)")?;

    Ok(())
}
