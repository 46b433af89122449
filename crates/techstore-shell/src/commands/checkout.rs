//! # Checkout Commands

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AuthState, CartItem, CartState, CartTotals, NavigationState};
use techstore_core::{Order, OrderItem, Page};

/// What the checkout page presents for confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

/// The placed order and the page the app returned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order: Order,
    pub page: Page,
}

/// Reads the cart for the confirmation view. Nothing is mutated.
pub fn get_checkout_summary(cart: &CartState) -> CheckoutSummary {
    debug!("get_checkout_summary command");

    cart.with_cart(|c| CheckoutSummary {
        items: c.items.clone(),
        totals: CartTotals::from(c),
    })
}

/// Confirms the checkout: snapshots the cart into an order, clears the
/// cart, and returns the app to the products page.
///
/// ## Errors
/// An empty cart is the only failure; nothing is mutated in that case.
/// There is no payment processing here — any payment backend is an
/// external collaborator.
pub fn place_order(
    cart: &CartState,
    nav: &NavigationState,
    auth: &AuthState,
) -> Result<OrderConfirmation, ApiError> {
    debug!("place_order command");

    // Snapshot and clear under one lock, so an item added concurrently
    // either makes it into this order or stays in the cart.
    let order = cart.with_cart_mut(|c| {
        let items: Vec<OrderItem> = c
            .items
            .iter()
            .map(|item| OrderItem {
                product_id: item.product_id.clone(),
                name: item.name.clone(),
                unit_price_cents: item.unit_price_cents,
                quantity: item.quantity,
                line_total_cents: item.line_total_cents(),
            })
            .collect();

        let order = Order::new(
            Uuid::new_v4().to_string(),
            generate_order_number(),
            items,
            Utc::now(),
        )?;

        c.clear();
        Ok::<_, ApiError>(order)
    })?;

    let page = nav.request(Page::Products, auth.is_authenticated());

    info!(
        order_number = %order.order_number,
        total_cents = order.total_cents,
        items = order.items.len(),
        "Order placed"
    );

    Ok(OrderConfirmation { order, page })
}

/// Generates a human-readable order number: timestamp plus a short
/// discriminator so two orders in the same second stay distinct.
fn generate_order_number() -> String {
    let now = Utc::now();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let random: u16 = (nanos % 10000) as u16;
    format!("{}-{:04}", now.format("%y%m%d-%H%M%S"), random)
}
