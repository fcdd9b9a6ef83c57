//! Shipment tracking output.

use kenyan_beans_storefront::tracking;

/// Print the mock tracking timeline for an order.
#[allow(clippy::print_stdout)]
pub fn show(order_id: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let info = tracking::track(order_id);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Order {}", info.order_id);
    println!("Status:             {}", info.status);
    println!("Estimated arrival:  {}", info.estimated_delivery);
    println!("Current location:   {}", info.current_location);
    println!();
    for step in &info.history {
        let marker = if step.completed { "[x]" } else { "[ ]" };
        println!(
            "{marker} {}  {} - {}",
            step.time.format("%b %d, %Y %I:%M %p"),
            step.status,
            step.location,
        );
    }
    Ok(())
}
