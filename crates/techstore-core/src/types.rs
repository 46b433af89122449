//! # Domain Types
//!
//! Core domain types used throughout TechStore.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  name           │   │  order_number   │       │
//! │  │  price_cents    │   │  email          │   │  items (frozen) │       │
//! │  │  image          │   │  logged_in_at   │   │  total_cents    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Page       │   │   Credentials   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Login          │   │  name           │                             │
//! │  │  Products       │   │  email          │                             │
//! │  │  Cart           │   │  password       │                             │
//! │  │  Checkout       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_product_name};

// =============================================================================
// Product
// =============================================================================

/// A product in the store catalog.
///
/// Catalog entries are immutable from the storefront's perspective: they are
/// supplied by an external catalog collaborator and never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in the catalog, cart and prize wheel.
    pub name: String,

    /// Optional description for the product detail view.
    pub description: Option<String>,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Image reference (path or URL) rendered by the frontend.
    pub image: String,

    /// Whether the product is offered for sale.
    pub is_active: bool,
}

impl Product {
    /// Creates a validated catalog entry.
    ///
    /// ## Rules
    /// - Name must be non-empty and at most 200 characters
    /// - Price must be non-negative (zero allowed for giveaways)
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_cents: i64,
        image: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price_cents(price_cents)?;

        Ok(Product {
            id: id.into(),
            name,
            description: None,
            price_cents,
            image: image.into(),
            is_active: true,
        })
    }

    /// Attaches a description to the entry.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// User
// =============================================================================

/// The currently signed-in shopper.
///
/// ## Lifecycle
/// Created on login from the submitted credentials, dropped on logout.
/// There is no account backend: nothing about a user survives the process.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    /// Unique identifier (UUID v4), minted at login.
    pub id: String,

    /// Display name shown in the navbar greeting.
    pub name: String,

    /// Email as entered on the login form.
    pub email: String,

    /// When this session started.
    #[ts(as = "String")]
    pub logged_in_at: DateTime<Utc>,
}

// =============================================================================
// Credentials
// =============================================================================

/// Login form input.
///
/// Credentials are accepted without backend validation (there is none in
/// this storefront); blank name or password is the only way login fails.
#[derive(Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Manual Debug keeps the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Page
// =============================================================================

/// The pages the storefront can display.
///
/// A single current value is owned by the navigation controller; it is never
/// persisted. `Login` is both the initial page and the page every
/// unauthenticated read resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Login,
    Products,
    Cart,
    Checkout,
}

// =============================================================================
// Order
// =============================================================================

/// A confirmed checkout.
///
/// Uses the snapshot pattern: line items freeze the product data as it was
/// in the cart, so later catalog edits cannot rewrite an order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: String,
    /// Human-readable order number shown on the confirmation screen.
    pub order_number: String,
    pub items: Vec<OrderItem>,
    /// Sum of all line quantities.
    pub total_quantity: i64,
    pub total_cents: i64,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order from frozen line items.
    ///
    /// ## Errors
    /// Returns [`CoreError::EmptyOrder`] when there are no items; this is
    /// the only failure checkout can produce.
    pub fn new(
        id: impl Into<String>,
        order_number: impl Into<String>,
        items: Vec<OrderItem>,
        placed_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        if items.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        let total_quantity = items.iter().map(|i| i.quantity).sum();
        let total_cents = items.iter().map(|i| i.line_total_cents).sum();

        Ok(Order {
            id: id.into(),
            order_number: order_number.into(),
            items,
            total_quantity,
            total_cents,
            placed_at,
        })
    }

    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// A line item in an order (frozen at confirmation time).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub product_id: String,
    /// Product name at confirmation time (frozen).
    pub name: String,
    /// Unit price in cents at confirmation time (frozen).
    pub unit_price_cents: i64,
    pub quantity: i64,
    /// Line total (unit_price × quantity).
    pub line_total_cents: i64,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
