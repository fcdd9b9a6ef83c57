//! Integration tests for Kenyan Beans.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p kenyan-beans-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_semantics` - Line-item identity, merging, clamping, derived totals
//! - `catalog_query` - Filter conjunction/commutativity and sort orders
//! - `checkout_flow` - Shop-to-confirmation walkthrough across crates
//! - `state_context` - Process-wide handle initialization contract
//! - `admin_views` - Order book updates and dashboard read models
