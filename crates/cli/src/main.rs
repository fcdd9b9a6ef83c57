//! Kenyan Beans CLI - Terminal demo driver for the storefront core.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! kb-cli shop
//! kb-cli shop --roast light --sort price-low
//! kb-cli shop --search nyeri --json
//!
//! # Walk through the cart semantics
//! kb-cli cart demo
//!
//! # Track an order
//! kb-cli track ORD-KB-8829
//!
//! # Admin views
//! kb-cli admin orders
//! kb-cli admin stats
//! ```
//!
//! # Commands
//!
//! - `shop` - Filter and sort the seeded catalog
//! - `cart demo` - Scripted add/merge/update/remove/checkout walkthrough
//! - `track` - Mock shipment tracking
//! - `admin` - Order book and dashboard read models

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use kenyan_beans_core::RoastLevel;
use kenyan_beans_storefront::SortBy;

mod commands;

#[derive(Parser)]
#[command(name = "kb-cli")]
#[command(author, version, about = "Kenyan Beans demo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog with the shop page's filters
    Shop {
        /// Case-insensitive match against name or region
        #[arg(short, long, default_value = "")]
        search: String,

        /// Roast filter (`light`, `medium`, `dark`)
        #[arg(long)]
        roast: Option<RoastLevel>,

        /// Region filter (exact, e.g. "Nyeri County")
        #[arg(long)]
        region: Option<String>,

        /// Sort order (`newest`, `price-low`, `price-high`)
        #[arg(long, default_value = "newest")]
        sort: SortBy,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Cart walkthrough
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Track a shipment
    Track {
        /// Order number; blank falls back to the demo order
        #[arg(default_value = "")]
        order_id: String,

        /// Emit JSON instead of a timeline
        #[arg(long)]
        json: bool,
    },
    /// Admin views
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Run the scripted cart and checkout walkthrough
    Demo,
}

#[derive(Subcommand)]
enum AdminAction {
    /// List the seeded order book
    Orders,
    /// Show the overview stats and weekly sales
    Stats,
}

fn main() {
    // Optional .env, then tracing
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Shop {
            search,
            roast,
            region,
            sort,
            json,
        } => commands::shop::browse(&search, roast, region, sort, json)?,
        Commands::Cart { action } => match action {
            CartAction::Demo => commands::cart::demo()?,
        },
        Commands::Track { order_id, json } => commands::track::show(&order_id, json)?,
        Commands::Admin { action } => match action {
            AdminAction::Orders => commands::admin::orders(),
            AdminAction::Stats => commands::admin::stats(),
        },
    }
    Ok(())
}
