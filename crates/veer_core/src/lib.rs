//! Veer Core
//!
//! Foundational primitives for the Veer scroll-synchronization crates:
//!
//! - **Geometry**: plain 2D value types (`Point`, `Size`, `Rect`, `Color`)
//! - **Events**: a unified input-event model with type constants and data
//!   payloads for pointer, touch, scroll, and lifecycle notifications
//! - **Subscriptions**: an [`EventDispatcher`] whose registrations are keyed
//!   handles, so every listener can be released individually
//!
//! Controllers in `veer_scroller` never talk to a windowing system directly;
//! the host feeds events through the dispatcher and the controllers react.

pub mod events;
pub mod geometry;

pub use events::{Event, EventData, EventDispatcher, EventType, HandlerId};
pub use geometry::{Color, Point, Rect, Size};
