//! # Prize Wheel Commands
//!
//! The one place in the shell with timed behavior: `spin_wheel` schedules
//! the reveal on a tokio timer so the prize appears after the fixed
//! 5-second animation. The timer is not cancellable; if the widget
//! unmounts mid-spin the reveal still fires against the shared state,
//! which is harmless.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::state::{WheelSlot, WheelState, SPIN_DURATION};
use techstore_core::Product;

/// Everything the wheel widget renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelView {
    pub slots: Vec<WheelSlot>,

    pub spinning: bool,

    /// Decorative rotation target for the CSS transform, in degrees.
    pub rotation_degrees: u32,

    /// Animation length the frontend should use, in seconds.
    pub spin_seconds: u64,

    /// The revealed prize, present only after a spin completes.
    pub prize: Option<Product>,
}

/// Reads the current wheel state.
pub fn get_wheel(wheel: &WheelState) -> WheelView {
    wheel.with_wheel(|w| WheelView {
        slots: w.slots(),
        spinning: w.is_spinning(),
        rotation_degrees: w.rotation_degrees(),
        spin_seconds: SPIN_DURATION.as_secs(),
        prize: w.prize().cloned(),
    })
}

/// Triggers a spin.
///
/// ## Behavior
/// - Starts the decorative rotation and schedules the prize reveal for
///   5 seconds later
/// - Re-triggering while a spin is in progress has no effect; the
///   unchanged view is returned
///
/// Must be called from within a tokio runtime (the embedding app's).
pub async fn spin_wheel(wheel: &WheelState) -> WheelView {
    debug!("spin_wheel command");

    let started = wheel.with_wheel_mut(|w| w.start_spin(&mut rand::rng()));

    match started {
        Some(spin) => {
            info!(rotation_degrees = spin.rotation_degrees, "Wheel spin started");

            let state = wheel.clone();
            // Create the sleep here so its deadline is anchored to the spin
            // trigger, not to whenever the spawned task is first polled.
            let delay = tokio::time::sleep(spin.duration);
            tokio::spawn(async move {
                delay.await;
                if let Some(prize) = state.with_wheel_mut(|w| w.reveal()) {
                    info!(prize = %prize.name, "Wheel prize revealed");
                }
            });
        }
        None => {
            debug!("spin ignored: already spinning or wheel empty");
        }
    }

    get_wheel(wheel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_products(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| Product {
                id: format!("p-{}", i),
                name: format!("Produto {}", i),
                description: None,
                price_cents: 1000,
                image: format!("/images/p-{}.jpg", i),
                is_active: true,
            })
            .collect()
    }

    /// Lets spawned tasks run without advancing the paused clock.
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_prize_revealed_after_five_seconds_not_before() {
        let wheel = WheelState::new(test_products(6));

        let view = spin_wheel(&wheel).await;
        assert!(view.spinning);
        assert!(view.prize.is_none());
        assert_eq!(view.spin_seconds, 5);

        // Just before the reveal: still spinning, no prize.
        tokio::time::advance(Duration::from_millis(4_999)).await;
        settle().await;
        let view = get_wheel(&wheel);
        assert!(view.spinning);
        assert!(view.prize.is_none());

        // The reveal fires at the 5-second mark.
        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        let view = get_wheel(&wheel);
        assert!(!view.spinning);
        let prize = view.prize.expect("prize revealed");
        assert!(view.slots.iter().any(|s| s.product.id == prize.id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_trigger_has_no_effect_until_reveal() {
        let wheel = WheelState::new(test_products(4));

        let first = spin_wheel(&wheel).await;
        let second = spin_wheel(&wheel).await;

        // Identical rotation proves no new spin was drawn.
        assert_eq!(second.rotation_degrees, first.rotation_degrees);
        assert!(second.spinning);

        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert!(get_wheel(&wheel).prize.is_some());

        // After the reveal the wheel accepts a fresh spin.
        let third = spin_wheel(&wheel).await;
        assert!(third.spinning);
        assert!(third.prize.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_wheel_spin_is_a_no_op() {
        let wheel = WheelState::new(Vec::new());

        let view = spin_wheel(&wheel).await;
        assert!(!view.spinning);
        assert!(view.slots.is_empty());
        assert!(view.prize.is_none());
    }
}
