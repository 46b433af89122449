//! # Auth State
//!
//! Holds the current user, if any.
//!
//! ## Contract
//! - `login` accepts any credentials with a non-blank name and password;
//!   there is no account backend to check them against.
//! - `logout` drops the user. Nothing about a session is persisted.
//! - `is_authenticated` is the flag the navigation gate reads.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use techstore_core::validation::{validate_display_name, validate_password};
use techstore_core::{CoreResult, Credentials, User};

/// Shared auth state.
///
/// ## Thread Safety
/// Wrapped in `Arc<Mutex<T>>` because commands may run concurrently and
/// only one should flip the current user at a time. Reads also take the
/// lock but release it immediately.
#[derive(Debug, Clone)]
pub struct AuthState {
    user: Arc<Mutex<Option<User>>>,
}

impl AuthState {
    /// Creates a signed-out auth state.
    pub fn new() -> Self {
        AuthState {
            user: Arc::new(Mutex::new(None)),
        }
    }

    /// Attempts to sign in with the given credentials.
    ///
    /// ## Behavior
    /// - Blank name or password: fails without setting a user
    /// - Anything else: a fresh `User` is minted and becomes current
    ///
    /// Logging in while already signed in replaces the current user.
    pub fn login(&self, credentials: Credentials) -> CoreResult<User> {
        validate_display_name(&credentials.name)?;
        validate_password(&credentials.password)?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: credentials.name.trim().to_string(),
            email: credentials.email.trim().to_string(),
            logged_in_at: Utc::now(),
        };

        let mut current = self.user.lock().expect("Auth mutex poisoned");
        if current.is_some() {
            debug!("login replacing an existing session");
        }
        *current = Some(user.clone());

        Ok(user)
    }

    /// Signs the current user out, returning them if there was one.
    pub fn logout(&self) -> Option<User> {
        self.user.lock().expect("Auth mutex poisoned").take()
    }

    /// Returns whether a user is currently present.
    pub fn is_authenticated(&self) -> bool {
        self.user.lock().expect("Auth mutex poisoned").is_some()
    }

    /// Returns a copy of the current user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.user.lock().expect("Auth mutex poisoned").clone()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
