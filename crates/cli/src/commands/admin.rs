//! Admin views: order book and dashboard.

use kenyan_beans_admin::OrderBook;
use kenyan_beans_admin::dashboard;

/// List the seeded order book.
#[allow(clippy::print_stdout)]
pub fn orders() {
    let book = OrderBook::seeded();
    for order in book.orders() {
        println!(
            "{:<10} {:<16} {:<10} {:>8}  {}",
            order.id.as_str(),
            order.customer,
            order.status.to_string(),
            order.total.display(),
            order.date,
        );
        for line in &order.items {
            println!("{:10} {} x{}", "", line.product_id, line.quantity);
        }
    }
}

/// Show the overview stats, weekly sales, and inventory levels.
#[allow(clippy::print_stdout)]
pub fn stats() {
    for card in dashboard::stats() {
        println!("{:<18} {:>12}  ({})", card.label, card.value, card.trend);
    }

    println!();
    for point in dashboard::weekly_sales() {
        println!("{}  sales {:>5}  orders {:>3}", point.day, point.sales, point.orders);
    }

    println!();
    for row in dashboard::inventory("") {
        println!(
            "{:<28} {:>3} units  {:?}",
            row.name, row.stock, row.level
        );
    }
}
