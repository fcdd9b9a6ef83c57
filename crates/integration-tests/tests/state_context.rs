//! Contract of the process-wide state handle.
//!
//! Single test function: the context is a process global, so the
//! uninitialized read, the successful init, and the double-init rejection
//! must be observed in sequence within one process.

use kenyan_beans_core::{BagSize, Role, catalog};
use kenyan_beans_storefront::state::{AppState, StateError, context};

#[test]
fn test_context_lifecycle() {
    // Reading before init fails fast; this is a usage bug, not a recoverable
    // runtime condition.
    assert_eq!(context::current().err(), Some(StateError::Uninitialized));

    context::init(AppState::new()).expect("first init");

    let state = context::current().expect("initialized");
    assert_eq!(state.role().expect("role"), Role::Customer);

    // Handles from the context observe the same session.
    let nyeri = catalog::kenyan_coffees().first().expect("seeded catalog");
    state.add_to_cart(nyeri, 2, BagSize::G250).expect("add");
    let again = context::current().expect("initialized");
    assert_eq!(again.cart_count().expect("count"), 2);

    // A second init is rejected.
    assert_eq!(
        context::init(AppState::new()).err(),
        Some(StateError::AlreadyInitialized)
    );
}
