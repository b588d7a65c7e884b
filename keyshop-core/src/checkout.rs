//! Checkout form validation and simulated order placement.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::price::format_price;

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Add some items to proceed!";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Email address is required.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
}

/// Validate an email address the way the form does on blur and submit.
///
/// # Errors
///
/// Returns [`CheckoutError::EmailRequired`] for blank input and
/// [`CheckoutError::EmailInvalid`] when the address has no `user@host.tld` shape.
pub fn validate_email(email: &str) -> Result<(), CheckoutError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CheckoutError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(CheckoutError::EmailInvalid);
    }
    Ok(())
}

/// Order handed to the (simulated) payment backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub email: String,
    pub item_count: u64,
    pub total: f64,
}

impl OrderSummary {
    /// Console lines describing the simulated order.
    #[must_use]
    pub fn log_lines(&self) -> Vec<String> {
        vec![
            "Simulating order placement...".to_string(),
            format!("Email: {}", self.email),
            format!("Items: {}", self.item_count),
            format!("Total: {}", format_price(self.total)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// Nothing to order; go home without touching the cart
    EmptyCart,
    /// Order accepted; clear the cart and go home
    Placed(OrderSummary),
    /// Stay on the page and show the error
    Rejected(CheckoutError),
}

/// Checkout form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    email: String,
    error: Option<CheckoutError>,
}

impl CheckoutForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn error(&self) -> Option<&CheckoutError> {
        self.error.as_ref()
    }

    /// Value for the input's `aria-invalid` attribute.
    #[must_use]
    pub const fn aria_invalid(&self) -> &'static str {
        if self.error.is_some() { "true" } else { "false" }
    }

    /// Typing clears any shown error.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.error = None;
    }

    pub fn blur(&mut self) {
        self.error = validate_email(&self.email).err();
    }

    /// Decide what a submit does for a cart with `item_count` units and `total`.
    pub fn submit(&mut self, item_count: u64, total: f64) -> OrderOutcome {
        if item_count == 0 {
            log::info!("Your cart is empty. Cannot place order.");
            return OrderOutcome::EmptyCart;
        }
        if let Err(err) = validate_email(&self.email) {
            self.error = Some(err.clone());
            return OrderOutcome::Rejected(err);
        }
        self.error = None;
        let summary = OrderSummary {
            email: self.email.trim().to_string(),
            item_count,
            total,
        };
        for line in summary.log_lines() {
            log::info!("{line}");
        }
        OrderOutcome::Placed(summary)
    }
}

/// Payment buttons shown on the checkout page; neither is wired to a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Stripe,
    Crypto,
}

impl PaymentMethod {
    pub const ALL: [Self; 2] = [Self::Stripe, Self::Crypto];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stripe => "Pay with Stripe",
            Self::Crypto => "Pay with Crypto",
        }
    }

    /// Log the placeholder click.
    pub fn select(self) {
        log::info!("{} selected (not yet implemented)", self.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_messages() {
        assert_eq!(validate_email(""), Err(CheckoutError::EmailRequired));
        assert_eq!(validate_email("   "), Err(CheckoutError::EmailRequired));
        assert_eq!(validate_email("invalid-email"), Err(CheckoutError::EmailInvalid));
        assert_eq!(validate_email("a@b"), Err(CheckoutError::EmailInvalid));
        assert_eq!(validate_email("test@example.com"), Ok(()));
        assert_eq!(
            CheckoutError::EmailRequired.to_string(),
            "Email address is required."
        );
        assert_eq!(
            CheckoutError::EmailInvalid.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn blur_sets_error_and_typing_clears_it() {
        let mut form = CheckoutForm::new();
        form.blur();
        assert_eq!(form.error(), Some(&CheckoutError::EmailRequired));
        assert_eq!(form.aria_invalid(), "true");
        form.set_email("t");
        assert!(form.error().is_none());
        assert_eq!(form.aria_invalid(), "false");
    }

    #[test]
    fn empty_cart_submit_skips_validation() {
        let mut form = CheckoutForm::new();
        form.set_email("test@example.com");
        assert_eq!(form.submit(0, 0.0), OrderOutcome::EmptyCart);
    }

    #[test]
    fn invalid_email_rejects_submit() {
        let mut form = CheckoutForm::new();
        form.set_email("invalid-email");
        assert_eq!(
            form.submit(3, 23.97),
            OrderOutcome::Rejected(CheckoutError::EmailInvalid)
        );
        assert_eq!(form.error(), Some(&CheckoutError::EmailInvalid));
    }

    #[test]
    fn valid_submit_places_order() {
        let mut form = CheckoutForm::new();
        form.set_email(" test@example.com ");
        let OrderOutcome::Placed(summary) = form.submit(3, 25.97) else {
            panic!("expected order to be placed");
        };
        assert_eq!(summary.email, "test@example.com");
        let lines = summary.log_lines();
        assert_eq!(lines[0], "Simulating order placement...");
        assert_eq!(lines[1], "Email: test@example.com");
        assert_eq!(lines[3], "Total: $25.97");
    }

    #[test]
    fn payment_labels() {
        let labels: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["Pay with Stripe", "Pay with Crypto"]);
    }
}
