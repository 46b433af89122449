//! # Navigation Commands
//!
//! Page transitions and the navbar view.
//!
//! Every command here resolves the page against the auth flag, so the
//! login gate holds no matter which command the frontend calls first
//! after auth state changes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::{AuthState, CartState, NavigationState, StoreConfig};
use techstore_core::Page;

/// Everything the navbar renders: brand, greeting, badge, highlight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarView {
    pub store_name: String,

    /// Greeting name of the signed-in user, absent while signed out.
    pub user_name: Option<String>,

    pub current_page: Page,

    /// Sum of all line quantities, rendered as the cart badge.
    /// The frontend hides the badge when this is zero.
    pub cart_badge: i64,
}

/// Requests a page transition and returns the page the app settled on.
///
/// Unauthenticated requests to any non-login page settle on `Login`.
pub fn navigate(nav: &NavigationState, auth: &AuthState, page: Page) -> Page {
    debug!(requested = ?page, "navigate command");
    nav.request(page, auth.is_authenticated())
}

/// Returns the page currently displayed, gated by auth state.
pub fn current_page(nav: &NavigationState, auth: &AuthState) -> Page {
    nav.resolve(auth.is_authenticated())
}

/// Builds the navbar view model.
pub fn get_navbar(
    config: &StoreConfig,
    nav: &NavigationState,
    auth: &AuthState,
    cart: &CartState,
) -> NavbarView {
    debug!("get_navbar command");

    NavbarView {
        store_name: config.store_name.clone(),
        user_name: auth.current_user().map(|u| u.name),
        current_page: nav.resolve(auth.is_authenticated()),
        cart_badge: cart.with_cart(|c| c.total_quantity()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::state::CatalogState;
    use techstore_core::Credentials;

    fn signed_in_auth() -> AuthState {
        let auth = AuthState::new();
        auth.login(Credentials {
            name: "Maria".into(),
            email: "maria@example.com".into(),
            password: "segredo".into(),
        })
        .unwrap();
        auth
    }

    #[test]
    fn test_navigate_respects_gate() {
        let nav = NavigationState::new();
        let auth = AuthState::new();

        assert_eq!(navigate(&nav, &auth, Page::Products), Page::Login);

        let auth = signed_in_auth();
        assert_eq!(navigate(&nav, &auth, Page::Products), Page::Products);
    }

    #[test]
    fn test_current_page_snaps_back_after_logout() {
        let nav = NavigationState::new();
        let auth = signed_in_auth();
        navigate(&nav, &auth, Page::Cart);

        auth.logout();
        assert_eq!(current_page(&nav, &auth), Page::Login);
    }

    #[test]
    fn test_navbar_view() {
        let config = StoreConfig::default();
        let nav = NavigationState::new();
        let auth = signed_in_auth();
        let cart = CartState::new();
        let catalog = CatalogState::demo();

        navigate(&nav, &auth, Page::Products);
        add_to_cart(&catalog, &cart, "p-01", Some(2));
        add_to_cart(&catalog, &cart, "p-02", None);

        let navbar = get_navbar(&config, &nav, &auth, &cart);
        assert_eq!(navbar.store_name, "TechStore");
        assert_eq!(navbar.user_name.as_deref(), Some("Maria"));
        assert_eq!(navbar.current_page, Page::Products);
        assert_eq!(navbar.cart_badge, 3);
    }

    #[test]
    fn test_navbar_while_signed_out() {
        let config = StoreConfig::default();
        let nav = NavigationState::new();
        let auth = AuthState::new();
        let cart = CartState::new();

        let navbar = get_navbar(&config, &nav, &auth, &cart);
        assert!(navbar.user_name.is_none());
        assert_eq!(navbar.current_page, Page::Login);
        assert_eq!(navbar.cart_badge, 0);
    }
}
