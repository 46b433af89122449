//! # Navigation State
//!
//! The single source of truth for which page is currently displayed.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Navigation State Machine                             │
//! │                                                                         │
//! │   initial                                                               │
//! │      │            authenticated                                         │
//! │      ▼        ┌──────────────────┐                                      │
//! │  ┌───────┐    │                  ▼                                      │
//! │  │ Login │◄───┤   Products ◄─► Cart ◄─► Checkout                       │
//! │  └───┬───┘    │      ▲                     │                            │
//! │      │        │      └─────────────────────┘ (order placed)             │
//! │      └────────┘                                                         │
//! │   login → Products                                                      │
//! │                                                                         │
//! │  GATE: while no user is present, every requested transition to a       │
//! │  non-login page is rejected and the state is forced back to Login.     │
//! │  The gate holds on every read, not just at transition time, so a       │
//! │  logout snaps the page back reactively. There is no terminal state.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use techstore_core::Page;
use tracing::debug;

/// Shared navigation state.
///
/// ## Thread Safety
/// A `Mutex` guards the single `Page` value; the auth gate is applied
/// inside the lock so a settled page is always consistent with the
/// authentication flag it was resolved against.
#[derive(Debug, Clone)]
pub struct NavigationState {
    page: Arc<Mutex<Page>>,
}

impl NavigationState {
    /// Creates navigation state resting on the login page.
    pub fn new() -> Self {
        NavigationState {
            page: Arc::new(Mutex::new(Page::Login)),
        }
    }

    /// Requests a transition and returns the page the state settled on.
    ///
    /// ## Behavior
    /// - Authenticated: any page is accepted
    /// - Unauthenticated: only `Login` is accepted; anything else is
    ///   rejected and the state is forced back to `Login`
    pub fn request(&self, page: Page, is_authenticated: bool) -> Page {
        let mut current = self.page.lock().expect("Navigation mutex poisoned");

        if !is_authenticated && page != Page::Login {
            debug!(requested = ?page, "navigation rejected: not authenticated");
            *current = Page::Login;
        } else {
            *current = page;
        }

        *current
    }

    /// Resolves the current page against the authentication flag.
    ///
    /// This is the reactive half of the gate: even if no transition was
    /// requested since auth changed, an unauthenticated read snaps the
    /// state back to `Login` before returning it.
    pub fn resolve(&self, is_authenticated: bool) -> Page {
        let mut current = self.page.lock().expect("Navigation mutex poisoned");

        if !is_authenticated && *current != Page::Login {
            debug!(stale = ?*current, "navigation reset: user no longer present");
            *current = Page::Login;
        }

        *current
    }

    /// Forces the state back to the login page (the logout path).
    pub fn force_login(&self) {
        *self.page.lock().expect("Navigation mutex poisoned") = Page::Login;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_is_login() {
        let nav = NavigationState::new();
        assert_eq!(nav.resolve(false), Page::Login);
        assert_eq!(nav.resolve(true), Page::Login);
    }

    #[test]
    fn test_authenticated_transitions_are_accepted() {
        let nav = NavigationState::new();
        assert_eq!(nav.request(Page::Products, true), Page::Products);
        assert_eq!(nav.request(Page::Cart, true), Page::Cart);
        assert_eq!(nav.request(Page::Checkout, true), Page::Checkout);
        assert_eq!(nav.resolve(true), Page::Checkout);
    }

    #[test]
    fn test_unauthenticated_requests_are_forced_to_login() {
        let nav = NavigationState::new();
        assert_eq!(nav.request(Page::Products, false), Page::Login);
        assert_eq!(nav.request(Page::Checkout, false), Page::Login);
        // Login itself is always reachable.
        assert_eq!(nav.request(Page::Login, false), Page::Login);
    }

    #[test]
    fn test_resolve_snaps_back_after_auth_is_lost() {
        let nav = NavigationState::new();
        nav.request(Page::Cart, true);

        // Auth flag flips (logout happened elsewhere); the very next read
        // lands on Login without an explicit transition.
        assert_eq!(nav.resolve(false), Page::Login);
        // And the state itself was rewritten, not just the returned value.
        assert_eq!(nav.resolve(true), Page::Login);
    }

    #[test]
    fn test_force_login() {
        let nav = NavigationState::new();
        nav.request(Page::Products, true);
        nav.force_login();
        assert_eq!(nav.resolve(true), Page::Login);
    }
}
