//! Polled push-button debouncing and gesture classification.
//!
//! Each [`button::Button`] wraps one physical switch behind an
//! [`embedded_hal_1::digital::InputPin`] and turns its noisy raw level into a
//! clean stream of one-shot events: pressed, released, long-pressed,
//! long-released, clicked, long-clicked and double-clicked. The machine is
//! driven by calling [`button::Button::update`] from a cooperative polling
//! loop with the current value of a wrapping millisecond counter; no timer
//! driver or executor is required.
//!
//! [`group::ButtonGroup`] fans a single `update` call out over a collection
//! of borrowed buttons.

#![no_std]
#![warn(missing_docs)]

pub mod button;
pub mod fmt;
pub mod group;

pub use button::{ActiveState, Button, ButtonId, Gesture};
pub use group::ButtonGroup;
