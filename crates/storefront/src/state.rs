//! Session state shared between the storefront views.
//!
//! [`AppState`] owns the cart and the active role behind a cheaply-cloneable
//! handle, so the presentation layer can pass one state object around
//! instead of reaching for globals. Tests construct independent instances.
//!
//! A process-wide handle is available through [`context`] for callers that
//! mirror the original single-tab demo; reading it before initialization is
//! a programmer error and fails fast.

use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing::info;

use kenyan_beans_core::{BagSize, Price, Product, ProductId, Role};

use crate::cart::{CartLineItem, CartStore};

/// Errors from the session state container.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// The process-wide context was read before [`context::init`] ran.
    /// This is a usage bug, not a runtime condition to recover from.
    #[error("store not initialized: call context::init before reading state")]
    Uninitialized,

    /// The process-wide context was initialized twice.
    #[error("store already initialized")]
    AlreadyInitialized,

    /// A previous writer panicked while holding the state lock.
    #[error("state lock poisoned")]
    Poisoned,
}

#[derive(Debug, Default)]
struct AppStateInner {
    cart: CartStore,
    role: Role,
}

/// Session state shared across all views.
///
/// The state is single-writer in practice (every mutation runs to
/// completion on the event thread before the next one starts), but the
/// handle is `Clone + Send + Sync` so it can be injected anywhere.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    inner: Arc<Mutex<AppStateInner>>,
}

impl AppState {
    /// Create a fresh session: empty cart, `Role::Customer`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with<T>(&self, f: impl FnOnce(&mut AppStateInner) -> T) -> Result<T, StateError> {
        let mut inner = self.inner.lock().map_err(|_| StateError::Poisoned)?;
        Ok(f(&mut inner))
    }

    // ------------------------------------------------------------------
    // Cart operations
    // ------------------------------------------------------------------

    /// See [`CartStore::add`].
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Poisoned`] if the state lock is poisoned.
    pub fn add_to_cart(
        &self,
        product: &Product,
        quantity: u32,
        bag_size: BagSize,
    ) -> Result<(), StateError> {
        self.with(|state| state.cart.add(product, quantity, bag_size))
    }

    /// See [`CartStore::remove`].
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Poisoned`] if the state lock is poisoned.
    pub fn remove_from_cart(&self, id: &ProductId, bag_size: BagSize) -> Result<(), StateError> {
        self.with(|state| state.cart.remove(id, bag_size))
    }

    /// See [`CartStore::update_quantity`].
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Poisoned`] if the state lock is poisoned.
    pub fn update_quantity(
        &self,
        id: &ProductId,
        bag_size: BagSize,
        delta: i64,
    ) -> Result<(), StateError> {
        self.with(|state| state.cart.update_quantity(id, bag_size, delta))
    }

    /// See [`CartStore::clear`].
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Poisoned`] if the state lock is poisoned.
    pub fn clear_cart(&self) -> Result<(), StateError> {
        self.with(|state| state.cart.clear())
    }

    /// Snapshot of the current cart lines, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Poisoned`] if the state lock is poisoned.
    pub fn cart_lines(&self) -> Result<Vec<CartLineItem>, StateError> {
        self.with(|state| state.cart.lines().to_vec())
    }

    /// Derived bag count for the header badge.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Poisoned`] if the state lock is poisoned.
    pub fn cart_count(&self) -> Result<u32, StateError> {
        self.with(|state| state.cart.item_count())
    }

    /// Derived subtotal across all lines.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Poisoned`] if the state lock is poisoned.
    pub fn subtotal(&self) -> Result<Price, StateError> {
        self.with(|state| state.cart.subtotal())
    }

    /// Derived total (subtotal plus flat shipping).
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Poisoned`] if the state lock is poisoned.
    pub fn total(&self) -> Result<Price, StateError> {
        self.with(|state| state.cart.total())
    }

    // ------------------------------------------------------------------
    // Role switch
    // ------------------------------------------------------------------

    /// The active role. Starts as `Customer` on every new session.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Poisoned`] if the state lock is poisoned.
    pub fn role(&self) -> Result<Role, StateError> {
        self.with(|state| state.role)
    }

    /// Switch roles. Unguarded in either direction; the only effect is which
    /// view the presentation layer renders next.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Poisoned`] if the state lock is poisoned.
    pub fn set_role(&self, role: Role) -> Result<(), StateError> {
        self.with(|state| {
            if state.role != role {
                info!(%role, "switched role");
            }
            state.role = role;
        })
    }
}

/// Process-wide state handle for single-session callers.
pub mod context {
    use super::{AppState, OnceLock, StateError};

    static CONTEXT: OnceLock<AppState> = OnceLock::new();

    /// Install the session state for the whole process. Call once at startup.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::AlreadyInitialized`] on a second call.
    pub fn init(state: AppState) -> Result<(), StateError> {
        CONTEXT
            .set(state)
            .map_err(|_| StateError::AlreadyInitialized)
    }

    /// The installed session state.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Uninitialized`] when read before [`init`].
    pub fn current() -> Result<AppState, StateError> {
        CONTEXT.get().cloned().ok_or(StateError::Uninitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kenyan_beans_core::catalog;

    fn nyeri() -> &'static Product {
        catalog::find(&ProductId::new("nyeri-sl28")).expect("seeded product")
    }

    #[test]
    fn test_new_session_is_customer_with_empty_cart() {
        let state = AppState::new();
        assert_eq!(state.role().expect("role"), Role::Customer);
        assert_eq!(state.cart_count().expect("count"), 0);
    }

    #[test]
    fn test_handles_share_one_cart() {
        let state = AppState::new();
        let other = state.clone();

        state
            .add_to_cart(nyeri(), 2, BagSize::G250)
            .expect("add to cart");
        assert_eq!(other.cart_count().expect("count"), 2);
    }

    #[test]
    fn test_instances_are_independent() {
        let a = AppState::new();
        let b = AppState::new();

        a.add_to_cart(nyeri(), 1, BagSize::G250).expect("add");
        a.set_role(Role::Admin).expect("set role");

        assert_eq!(b.cart_count().expect("count"), 0);
        assert_eq!(b.role().expect("role"), Role::Customer);
    }

    #[test]
    fn test_role_switches_both_directions() {
        let state = AppState::new();
        state.set_role(Role::Admin).expect("to admin");
        assert_eq!(state.role().expect("role"), Role::Admin);
        state.set_role(Role::Customer).expect("to customer");
        assert_eq!(state.role().expect("role"), Role::Customer);
    }

    #[test]
    fn test_cart_ops_through_the_handle() {
        let state = AppState::new();
        state.add_to_cart(nyeri(), 1, BagSize::G250).expect("add");
        state
            .update_quantity(&nyeri().id, BagSize::G250, -5)
            .expect("update");

        let lines = state.cart_lines().expect("lines");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 1);

        state.clear_cart().expect("clear");
        assert!(state.cart_lines().expect("lines").is_empty());
    }
}
