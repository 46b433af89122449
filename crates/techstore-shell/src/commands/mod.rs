//! # Command Surface
//!
//! The functions the rendering frontend invokes, grouped by page:
//!
//! - `auth` - login, logout, current user
//! - `product` - catalog queries
//! - `cart` - cart mutations and reads (never fail)
//! - `checkout` - order confirmation
//! - `navigation` - page transitions and the navbar view
//! - `wheel` - the promotional prize wheel
//!
//! Commands take the state holders they touch as explicit arguments and
//! return serializable view models. Fallible commands return
//! `Result<_, ApiError>`; the rest return their view directly.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod navigation;
pub mod product;
pub mod wheel;

pub use auth::{current_user, login, logout, LoginResponse};
pub use cart::{
    add_to_cart, clear_cart, get_cart, remove_from_cart, update_cart_item, CartResponse,
};
pub use checkout::{get_checkout_summary, place_order, CheckoutSummary, OrderConfirmation};
pub use navigation::{current_page, get_navbar, navigate, NavbarView};
pub use product::{get_product_by_id, list_products};
pub use wheel::{get_wheel, spin_wheel, WheelView};
