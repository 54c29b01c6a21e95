//! Veer Animation
//!
//! Timed single-value tweens with CSS-style easing.
//!
//! # Features
//!
//! - **Easing**: the CSS named curves plus arbitrary cubic beziers
//! - **Retargetable**: an in-flight tween can be pointed at a new target at
//!   any time; it restarts from its current value, so the latest write
//!   always wins and nothing is ever queued
//! - **Externally timed**: callers advance tweens with `tick(dt_ms)`; there
//!   is no internal clock, which keeps the controllers deterministic under
//!   test

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::Tween;
