//! # Cart Commands
//!
//! Shell commands for cart manipulation.
//!
//! ## Error Model
//! Cart commands never fail. Mutations on identifiers that aren't in the
//! cart (or aren't in the catalog) are silent no-ops and the command
//! returns the unchanged cart — the frontend re-renders from whatever
//! comes back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::{Cart, CartItem, CartState, CartTotals, CatalogState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as new item
/// - Price is frozen at time of adding (won't change if the catalog updates)
/// - Unknown or inactive product id: no-op
///
/// ## Arguments
/// * `product_id` - Catalog id to add
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
    quantity: Option<i64>,
) -> CartResponse {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    match catalog.get(product_id) {
        Some(product) if product.is_active => {
            cart.with_cart_mut(|c| {
                c.add_item(product, quantity);
                CartResponse::from(&*c)
            })
        }
        Some(_) => {
            debug!(product_id = %product_id, "add_to_cart ignored: product inactive");
            get_cart(cart)
        }
        None => {
            debug!(product_id = %product_id, "add_to_cart ignored: unknown product");
            get_cart(cart)
        }
    }
}

/// Updates the quantity of an item in the cart.
///
/// ## Behavior
/// - Quantity <= 0: removes the item
/// - Unknown product id: no-op
pub fn update_cart_item(cart: &CartState, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.update_quantity(product_id, quantity);
        CartResponse::from(&*c)
    })
}

/// Removes an item from the cart, regardless of its quantity.
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(product_id);
        CartResponse::from(&*c)
    })
}

/// Clears all items from the cart.
///
/// ## When Used
/// - User empties the cart
/// - After an order is placed (new shopping session)
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_cart_defaults_to_one() {
        let catalog = CatalogState::demo();
        let cart = CartState::new();

        let response = add_to_cart(&catalog, &cart, "p-01", None);
        assert_eq!(response.totals.total_quantity, 1);

        let response = add_to_cart(&catalog, &cart, "p-01", Some(2));
        assert_eq!(response.totals.item_count, 1);
        assert_eq!(response.totals.total_quantity, 3);
    }

    #[test]
    fn test_add_unknown_product_is_a_no_op() {
        let catalog = CatalogState::demo();
        let cart = CartState::new();
        add_to_cart(&catalog, &cart, "p-01", None);

        let response = add_to_cart(&catalog, &cart, "ghost", Some(5));
        assert_eq!(response.totals.item_count, 1);
        assert_eq!(response.totals.total_quantity, 1);
    }

    #[test]
    fn test_add_inactive_product_is_a_no_op() {
        let mut products = CatalogState::demo().all().to_vec();
        products[0].is_active = false;
        let inactive_id = products[0].id.clone();
        let catalog = CatalogState::new(products);
        let cart = CartState::new();

        let response = add_to_cart(&catalog, &cart, &inactive_id, None);
        assert_eq!(response.totals.item_count, 0);
    }

    #[test]
    fn test_update_and_remove_round_trip() {
        let catalog = CatalogState::demo();
        let cart = CartState::new();
        add_to_cart(&catalog, &cart, "p-01", Some(2));
        add_to_cart(&catalog, &cart, "p-02", None);

        let response = update_cart_item(&cart, "p-01", 4);
        assert_eq!(response.totals.total_quantity, 5);

        let response = update_cart_item(&cart, "p-01", 0);
        assert_eq!(response.totals.item_count, 1);

        let response = remove_from_cart(&cart, "p-02");
        assert_eq!(response.totals.item_count, 0);
    }

    #[test]
    fn test_clear_cart() {
        let catalog = CatalogState::demo();
        let cart = CartState::new();
        add_to_cart(&catalog, &cart, "p-03", Some(3));

        let response = clear_cart(&cart);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_cents, 0);
    }
}
