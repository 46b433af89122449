//! # TechStore Shell
//!
//! Application shell for the TechStore storefront: shared state holders
//! and the command surface a rendering frontend invokes. All state is
//! in-memory and lives for the process; nothing is persisted.
//!
//! ## Module Organization
//! ```text
//! techstore_shell/
//! ├── lib.rs              ◄─── You are here (shell composition & tracing)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── auth.rs         ◄─── Session state
//! │   ├── cart.rs         ◄─── Cart state management
//! │   ├── catalog.rs      ◄─── Read-only product catalog
//! │   ├── config.rs       ◄─── Store configuration
//! │   ├── navigation.rs   ◄─── Page state and login gate
//! │   └── wheel.rs        ◄─── Prize wheel state
//! ├── commands/
//! │   ├── mod.rs          ◄─── Command exports
//! │   ├── auth.rs         ◄─── Login/logout commands
//! │   ├── product.rs      ◄─── Catalog query commands
//! │   ├── cart.rs         ◄─── Cart manipulation commands
//! │   ├── checkout.rs     ◄─── Order confirmation commands
//! │   ├── navigation.rs   ◄─── Page transition & navbar commands
//! │   └── wheel.rs        ◄─── Prize wheel commands
//! └── error.rs            ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Shell State Management                              │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐  │
//! │  │  AuthState   │ │  CartState   │ │ CatalogState │ │ Navigation-  │  │
//! │  │              │ │              │ │              │ │ State        │  │
//! │  │ • Session    │ │ • Cart items │ │ • Products   │ │ • Current    │  │
//! │  │   user       │ │ • Totals     │ │   (read-only)│ │   page       │  │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘  │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐                                    │
//! │  │  WheelState  │ │ StoreConfig  │                                    │
//! │  │              │ │              │                                    │
//! │  │ • Spin flag  │ │ • Store name │                                    │
//! │  │ • Prize      │ │ • Currency   │                                    │
//! │  └──────────────┘ └──────────────┘                                    │
//! │                                                                         │
//! │  WHY: Each command only requests the state it needs.                   │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use state::{AuthState, CartState, CatalogState, NavigationState, StoreConfig, WheelState};
use techstore_core::WHEEL_MAX_SLOTS;

/// The fully composed storefront shell.
///
/// Bundles every state holder so an embedding application can construct
/// the whole thing in one call and hand commands the pieces they need.
/// The shell starts signed out, on the login page, with an empty cart.
#[derive(Debug, Clone)]
pub struct Shell {
    pub config: StoreConfig,
    pub auth: AuthState,
    pub cart: CartState,
    pub catalog: CatalogState,
    pub navigation: NavigationState,
    pub wheel: WheelState,
}

impl Shell {
    /// Composes a shell over the given catalog and configuration.
    ///
    /// The prize wheel displays the first active products from the
    /// catalog, up to its slot limit.
    pub fn new(config: StoreConfig, catalog: CatalogState) -> Self {
        let featured: Vec<_> = catalog
            .active()
            .into_iter()
            .take(WHEEL_MAX_SLOTS)
            .collect();

        info!(
            store = %config.store_name,
            products = catalog.len(),
            wheel_slots = featured.len(),
            "Shell initialized"
        );

        Shell {
            config,
            auth: AuthState::new(),
            cart: CartState::new(),
            catalog,
            navigation: NavigationState::new(),
            wheel: WheelState::new(featured),
        }
    }

    /// Composes a shell over the built-in demo catalog.
    pub fn demo() -> Self {
        Shell::new(StoreConfig::from_env(), CatalogState::demo())
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=techstore=trace` - Show trace for techstore crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,techstore=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;
    use techstore_core::{Credentials, Page};

    fn maria() -> Credentials {
        Credentials {
            name: "Maria".into(),
            email: "maria@example.com".into(),
            password: "segredo".into(),
        }
    }

    #[test]
    fn test_demo_shell_starts_signed_out_on_login() {
        let shell = Shell::demo();

        assert!(!shell.auth.is_authenticated());
        assert_eq!(shell.navigation.resolve(false), Page::Login);
        assert!(shell.cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_wheel_features_at_most_six_catalog_products() {
        let shell = Shell::demo();

        let slot_count = shell.wheel.with_wheel(|w| w.products().len());
        assert_eq!(slot_count, WHEEL_MAX_SLOTS.min(shell.catalog.len()));
    }

    /// End-to-end shopping session: sign in, browse, fill the cart,
    /// check out, and end up back on the products page with an empty cart.
    #[test]
    fn test_full_shopping_flow() {
        let shell = Shell::demo();

        // Signed out: the gate holds every page request at Login.
        assert_eq!(
            commands::navigate(&shell.navigation, &shell.auth, Page::Cart),
            Page::Login
        );

        // Sign in, landing on the products page.
        let login = commands::login(&shell.auth, &shell.navigation, maria()).unwrap();
        assert_eq!(login.page, Page::Products);

        // Add the headphones twice and the mouse once.
        commands::add_to_cart(&shell.catalog, &shell.cart, "p-01", None);
        commands::add_to_cart(&shell.catalog, &shell.cart, "p-01", None);
        let cart = commands::add_to_cart(&shell.catalog, &shell.cart, "p-05", None);
        assert_eq!(cart.totals.item_count, 2);
        assert_eq!(cart.totals.total_quantity, 3);

        // The navbar badge tracks total quantity.
        let navbar = commands::get_navbar(
            &shell.config,
            &shell.navigation,
            &shell.auth,
            &shell.cart,
        );
        assert_eq!(navbar.cart_badge, 3);

        // Drop the headphones entirely, leaving one line.
        let cart = commands::remove_from_cart(&shell.cart, "p-01");
        assert_eq!(cart.totals.item_count, 1);

        // Confirm the order from the checkout page.
        commands::navigate(&shell.navigation, &shell.auth, Page::Checkout);
        let confirmation =
            commands::place_order(&shell.cart, &shell.navigation, &shell.auth).unwrap();
        assert_eq!(confirmation.page, Page::Products);
        assert_eq!(confirmation.order.total_cents, 15990);

        // The cart is fresh for the next session.
        assert!(shell.cart.with_cart(|c| c.is_empty()));
        assert_eq!(shell.navigation.resolve(true), Page::Products);

        // Logging out snaps the app back behind the gate.
        commands::logout(&shell.auth, &shell.navigation);
        assert_eq!(
            commands::current_page(&shell.navigation, &shell.auth),
            Page::Login
        );
    }
}
