//! # techstore-core: Pure Business Logic for TechStore
//!
//! This crate is the **heart** of the TechStore storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      TechStore Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Rendering Frontend (external)                   │   │
//! │  │    Login UI ──► Products UI ──► Cart UI ──► Checkout UI        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / view DTOs                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    techstore-shell                              │   │
//! │  │    login, add_to_cart, place_order, spin_wheel, etc.           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ techstore-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   order   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Order   │  │   rules   │  │   │
//! │  │   │ User/Page │  │  (cents)  │  │ OrderItem │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, Page, Order, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system and timer access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use techstore_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(1099); // R$ 10.99
//!
//! // Quantity math stays in integer cents
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.cents(), 3297);
//! assert_eq!(line_total.to_string(), "R$ 32.97");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use techstore_core::Money` instead of
// `use techstore_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of products displayed on the prize wheel.
///
/// ## Business Reason
/// The wheel renders up to six sectors; callers pass their catalog and the
/// widget truncates to this many slots.
pub const WHEEL_MAX_SLOTS: usize = 6;
