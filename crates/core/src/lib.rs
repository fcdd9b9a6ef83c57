//! Kenyan Beans Core - Shared types and seeded demo data.
//!
//! This crate provides common types used across all Kenyan Beans components:
//! - `storefront` - Customer-facing state library (catalog queries, cart, checkout)
//! - `admin` - Internal read models (order book, dashboard)
//! - `cli` - Terminal demo driver
//!
//! # Architecture
//!
//! The core crate contains only types and static demo data - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses
//! - [`catalog`] - The product model and the seeded Kenyan coffee catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::Product;
pub use types::*;
