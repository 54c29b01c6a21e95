//! Veer Scroller
//!
//! Scroll-position synchronization for custom scroll UI. Two controllers
//! share one design:
//!
//! - [`Scrollbar`]: a continuous virtual position mirroring a native
//!   vertical viewport with a custom thumb/track indicator - thumb drags,
//!   track clicks, and native scroll events all resolve to the same
//!   position
//! - [`Pager`]: a discrete virtual position (page index) driving a
//!   swipeable carousel, either transform-based or on top of native scroll
//!
//! Both borrow their world through [`ViewportHost`] and are wired to an
//! event stream with the bindings in [`binding`], which own the
//! attach/detach listener lifecycle. The [`headless`] module provides an
//! in-memory host for driving all of it deterministically in tests.

pub mod binding;
pub mod config;
pub mod geometry;
pub mod headless;
pub mod host;
pub mod pager;
pub mod scrollbar;

pub use binding::{PagerBinding, ScrollbarBinding};
pub use config::{PagerConfig, ScrollbarConfig, TrackPadding};
pub use geometry::{MeasureError, SlotMetrics, ViewportGeometry};
pub use headless::HeadlessViewport;
pub use host::ViewportHost;
pub use pager::{AxisLock, DefaultStrip, PageDot, Pager, PaginationStrip, StripContext};
pub use scrollbar::{Scrollbar, ThumbRenderInfo, ThumbState};
