//! Kenyan Beans Storefront library.
//!
//! The customer-facing state core of the demo: catalog queries, the cart
//! store, the session state container, mock checkout, and mock order
//! tracking. Presentation (page rendering, navigation, toasts) lives outside
//! this crate and consumes it through [`state::AppState`].
//!
//! Everything here is synchronous and in-memory. There is no backend, no
//! persistence, and no payment gateway; see the crate-level demo in
//! `kb-cli` for a scripted walkthrough.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod state;
pub mod tracking;

pub use cart::{CartLineItem, CartStore};
pub use catalog::{CatalogQuery, SortBy};
pub use state::{AppState, StateError};
