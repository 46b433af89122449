//! # Prize Wheel State
//!
//! Self-contained state for the promotional prize wheel widget.
//!
//! ## Spin Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Prize Wheel Lifecycle                                │
//! │                                                                         │
//! │  ┌──────────┐  start_spin   ┌──────────┐   reveal (after 5s)           │
//! │  │   Idle   │──────────────►│ Spinning │──────────────────┐            │
//! │  │          │               │          │                  ▼            │
//! │  └──────────┘               └──────────┘           ┌─────────────┐     │
//! │       ▲                          │                 │   Prize     │     │
//! │       │                          │ start_spin      │  Revealed   │     │
//! │       │                          └── (no effect)   └──────┬──────┘     │
//! │       │                                                   │            │
//! │       └───────────────────────── start_spin ──────────────┘            │
//! │                                                                         │
//! │  The rotation is decorative: it animates the CSS transform and does    │
//! │  NOT determine the prize. The prize is drawn independently and         │
//! │  uniformly from the displayed products.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use techstore_core::{Product, WHEEL_MAX_SLOTS};

/// How long the wheel animates before the prize is revealed.
pub const SPIN_DURATION: Duration = Duration::from_secs(5);

/// Minimum number of full turns in the decorative rotation (inclusive).
const MIN_FULL_TURNS: u32 = 5;

/// Maximum number of full turns in the decorative rotation (exclusive).
const MAX_FULL_TURNS: u32 = 10;

/// Radius of the wheel face in CSS pixels.
const WHEEL_RADIUS: f64 = 180.0;

/// Fraction of the radius at which slot labels are centred.
const LABEL_DISTANCE_FACTOR: f64 = 0.45;

/// A sector of the wheel face, with the layout the renderer needs.
///
/// Sector angles and label offsets are precomputed here so the frontend
/// only applies CSS transforms; the geometry is cosmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSlot {
    pub product: Product,

    /// Rotation of this sector's wedge, in degrees.
    pub sector_angle_degrees: f64,

    /// Horizontal label offset from the wheel centre, in CSS pixels.
    pub label_x: f64,

    /// Vertical label offset from the wheel centre, in CSS pixels.
    pub label_y: f64,
}

/// Animation parameters handed back when a spin starts.
#[derive(Debug, Clone, Copy)]
pub struct SpinStarted {
    /// Total decorative rotation in degrees (full turns plus final offset).
    pub rotation_degrees: u32,

    /// Fixed animation length; the reveal fires when it elapses.
    pub duration: Duration,
}

/// The prize wheel widget state.
///
/// ## Contract
/// - Displays at most [`WHEEL_MAX_SLOTS`] products (the input is truncated)
/// - `start_spin` is single-flight per widget instance
/// - The revealed prize is always one of the displayed products
/// - Nothing about past spins is persisted
#[derive(Debug, Clone)]
pub struct PrizeWheel {
    products: Vec<Product>,
    spinning: bool,
    rotation_degrees: u32,
    pending_prize: Option<Product>,
    prize: Option<Product>,
}

impl PrizeWheel {
    /// Creates a wheel over the given products, truncated to the slot limit.
    pub fn new(mut products: Vec<Product>) -> Self {
        products.truncate(WHEEL_MAX_SLOTS);
        PrizeWheel {
            products,
            spinning: false,
            rotation_degrees: 0,
            pending_prize: None,
            prize: None,
        }
    }

    /// Returns the displayed products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether a spin is currently in progress.
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// The decorative rotation target of the current/last spin, in degrees.
    pub fn rotation_degrees(&self) -> u32 {
        self.rotation_degrees
    }

    /// The revealed prize of the last completed spin, if any.
    pub fn prize(&self) -> Option<&Product> {
        self.prize.as_ref()
    }

    /// Computes the radial slot layout for the renderer.
    ///
    /// Each sector spans `360 / n` degrees; its label sits on the sector's
    /// bisector at `radius × factor` from the centre.
    pub fn slots(&self) -> Vec<WheelSlot> {
        let count = self.products.len();
        if count == 0 {
            return Vec::new();
        }

        let step = 360.0 / count as f64;
        self.products
            .iter()
            .enumerate()
            .map(|(index, product)| {
                let sector_angle = step * index as f64;
                // Centre the label within its sector.
                let label_angle = sector_angle + step / 2.0;
                let radian = label_angle.to_radians();

                WheelSlot {
                    product: product.clone(),
                    sector_angle_degrees: sector_angle,
                    label_x: radian.cos() * WHEEL_RADIUS * LABEL_DISTANCE_FACTOR,
                    label_y: radian.sin() * WHEEL_RADIUS * LABEL_DISTANCE_FACTOR,
                }
            })
            .collect()
    }

    /// Starts a spin, drawing the rotation and the prize.
    ///
    /// ## Behavior
    /// - Returns `None` while a spin is already in progress (single-flight)
    ///   or when the wheel has no products
    /// - The rotation is five to ten full turns plus a random final offset,
    ///   purely for animation
    /// - The prize is drawn independently and uniformly from the displayed
    ///   products; the wheel's resting position does not indicate it
    pub fn start_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SpinStarted> {
        if self.spinning || self.products.is_empty() {
            return None;
        }

        let full_turns = rng.random_range(MIN_FULL_TURNS..MAX_FULL_TURNS);
        let final_offset = rng.random_range(0..360);
        let rotation_degrees = full_turns * 360 + final_offset;

        let prize_index = rng.random_range(0..self.products.len());
        let prize = self.products.get(prize_index).cloned()?;

        self.spinning = true;
        self.prize = None;
        self.pending_prize = Some(prize);
        self.rotation_degrees = rotation_degrees;

        Some(SpinStarted {
            rotation_degrees,
            duration: SPIN_DURATION,
        })
    }

    /// Completes the spin: publishes the prize and clears the spinning flag.
    ///
    /// Called by the reveal timer when the animation delay elapses. A reveal
    /// with no spin in progress is a no-op.
    pub fn reveal(&mut self) -> Option<Product> {
        if !self.spinning {
            return None;
        }

        self.spinning = false;
        self.prize = self.pending_prize.take();
        self.prize.clone()
    }
}

/// Shared prize wheel state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<PrizeWheel>>` because the reveal timer task and UI
/// commands touch the same widget instance.
#[derive(Debug, Clone)]
pub struct WheelState {
    wheel: Arc<Mutex<PrizeWheel>>,
}

impl WheelState {
    /// Creates wheel state over the given product list.
    pub fn new(products: Vec<Product>) -> Self {
        WheelState {
            wheel: Arc::new(Mutex::new(PrizeWheel::new(products))),
        }
    }

    /// Executes a function with read access to the wheel.
    pub fn with_wheel<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PrizeWheel) -> R,
    {
        let wheel = self.wheel.lock().expect("Wheel mutex poisoned");
        f(&wheel)
    }

    /// Executes a function with write access to the wheel.
    pub fn with_wheel_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PrizeWheel) -> R,
    {
        let mut wheel = self.wheel.lock().expect("Wheel mutex poisoned");
        f(&mut wheel)
    }
}
