//! Mock checkout.
//!
//! Validates the checkout form, captures the cart totals, and "places" the
//! order by clearing the cart and handing back the demo confirmation
//! number. No payment gateway is contacted and nothing is persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use kenyan_beans_core::{OrderId, Price};

use crate::state::{AppState, StateError};

/// Confirmation number issued for every demo order.
pub const DEMO_ORDER_NUMBER: &str = "ORD-KB-8829";

/// Errors surfaced to the checkout form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// A required field was left blank.
    #[error("missing required field: {0}")]
    EmptyField(&'static str),

    /// The email address is not plausibly an email address.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The card number is not a plausible card number.
    #[error("invalid card number")]
    InvalidCard,

    /// Checkout was submitted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The session state was unavailable.
    #[error(transparent)]
    State(#[from] StateError),
}

/// Checkout form fields as submitted by the customer.
///
/// Validation is shape-only: the demo accepts any well-formed input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
}

impl CheckoutForm {
    /// Validate the form fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing field, in display order.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let required: [(&'static str, &str); 9] = [
            ("full name", &self.full_name),
            ("email", &self.email),
            ("street", &self.street),
            ("city", &self.city),
            ("country", &self.country),
            ("postal code", &self.postal_code),
            ("card number", &self.card_number),
            ("card expiry", &self.card_expiry),
            ("card cvc", &self.card_cvc),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CheckoutError::EmptyField(name));
            }
        }

        if !self.email.contains('@') {
            return Err(CheckoutError::InvalidEmail(self.email.clone()));
        }

        let digits = self
            .card_number
            .chars()
            .filter(char::is_ascii_digit)
            .count();
        let non_digits = self
            .card_number
            .chars()
            .any(|c| !c.is_ascii_digit() && c != ' ' && c != '-');
        if non_digits || !(13..=19).contains(&digits) {
            return Err(CheckoutError::InvalidCard);
        }

        Ok(())
    }
}

/// What the customer sees on the success screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub total: Price,
    pub item_count: u32,
}

/// Place the order: validate, capture totals, clear the cart.
///
/// # Errors
///
/// Returns a [`CheckoutError`] for invalid form input, an empty cart, or an
/// unavailable session state. The cart is only cleared on success.
pub fn place_order(
    state: &AppState,
    form: &CheckoutForm,
) -> Result<OrderConfirmation, CheckoutError> {
    form.validate()?;

    let item_count = state.cart_count()?;
    if item_count == 0 {
        return Err(CheckoutError::EmptyCart);
    }
    let total = state.total()?;
    state.clear_cart()?;

    let confirmation = OrderConfirmation {
        order_id: OrderId::new(DEMO_ORDER_NUMBER),
        total,
        item_count,
    };
    info!(order_id = %confirmation.order_id, total = %total, "placed demo order");
    Ok(confirmation)
}
