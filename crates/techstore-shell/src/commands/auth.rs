//! # Auth Commands
//!
//! Login and logout for the storefront session.
//!
//! There is no account backend: any credentials with a non-blank name and
//! password establish a session, and the only failure the frontend ever
//! sees is a single "not authenticated" code.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{AuthState, NavigationState};
use techstore_core::{Credentials, Page, User};

/// Login result: the fresh user and the page the app landed on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    pub page: Page,
}

/// Attempts to sign in and, on success, navigates to the products page.
///
/// ## Errors
/// A blank name or password fails with `UNAUTHENTICATED`; no distinction
/// is surfaced between the two.
pub fn login(
    auth: &AuthState,
    nav: &NavigationState,
    credentials: Credentials,
) -> Result<LoginResponse, ApiError> {
    debug!("login command");

    let user = auth
        .login(credentials)
        .map_err(|_| ApiError::unauthenticated())?;

    let page = nav.request(Page::Products, true);
    info!(user = %user.name, "User logged in");

    Ok(LoginResponse { user, page })
}

/// Signs the current user out and returns the app to the login page.
///
/// Logging out while signed out is a harmless no-op.
pub fn logout(auth: &AuthState, nav: &NavigationState) -> Page {
    debug!("logout command");

    if let Some(user) = auth.logout() {
        info!(user = %user.name, "User logged out");
    }
    nav.force_login();

    Page::Login
}

/// Returns the current user, if any.
pub fn current_user(auth: &AuthState) -> Option<User> {
    auth.current_user()
}
