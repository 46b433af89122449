//! # State Module
//!
//! Manages application state for the storefront shell.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌───────────┐ ┌───────────┐ ┌────────────┐ ┌────────────┐ ┌────────┐ │
//! │  │ AuthState │ │ CartState │ │ Navigation │ │ WheelState │ │Catalog │ │
//! │  │           │ │           │ │ State      │ │            │ │State   │ │
//! │  │ Option<   │ │ Arc<Mutex │ │ Arc<Mutex< │ │ Arc<Mutex< │ │(read-  │ │
//! │  │  User>    │ │  <Cart>>  │ │  Page>>    │ │ PrizeWheel │ │ only)  │ │
//! │  └───────────┘ └───────────┘ └────────────┘ └────────────┘ └────────┘ │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Mutable holders are protected by Arc<Mutex<T>>                      │
//! │  • CatalogState and StoreConfig are read-only after initialization     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod cart;
mod catalog;
mod config;
mod navigation;
mod wheel;

pub use auth::AuthState;
pub use cart::{Cart, CartItem, CartState, CartTotals};
pub use catalog::CatalogState;
pub use config::StoreConfig;
pub use navigation::NavigationState;
pub use wheel::{PrizeWheel, SpinStarted, WheelSlot, WheelState, SPIN_DURATION};
