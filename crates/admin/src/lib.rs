//! Kenyan Beans Admin library.
//!
//! Read models behind the management dashboard: the seeded order book and
//! the overview/inventory tabs. All data is static demo data; status
//! updates mutate in memory only and reset with the process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod dashboard;
pub mod orders;

pub use orders::{Order, OrderBook, OrderLine};
