//! Host environment contract
//!
//! The controllers never own a visual tree. Everything they know about the
//! world - element boxes, scroll offsets, child extents - is borrowed
//! through this trait, and everything they change - scroll position, thumb
//! placement, content translation - is written back through it.
//!
//! Hosts are expected to clamp scroll writes to the valid range, the way a
//! native scroll container does.

use veer_core::{Point, Size};

/// Capabilities borrowed from the host environment
pub trait ViewportHost {
    /// Structural readiness: container, indicator, and track are all mounted.
    ///
    /// Measurement is skipped while this is false; no partial state is
    /// written.
    fn is_attached(&self) -> bool;

    /// Visible box of the scroll container
    fn container_size(&self) -> Size;

    /// Full extent of the scrollable content
    fn content_size(&self) -> Size;

    fn child_count(&self) -> usize;

    fn child_size(&self, index: usize) -> Size;

    /// Distance of the child's leading edge from the content origin
    fn child_offset(&self, index: usize) -> f32;

    fn scroll_offset(&self) -> Point;

    /// Instantaneous scroll mutation; the host clamps to the scrollable
    /// range. Animated scrolls are controller-driven tweens writing through
    /// this repeatedly.
    fn set_scroll_offset(&mut self, offset: Point);

    /// Measured indicator thumb box
    fn thumb_size(&self) -> Size;

    /// Measured indicator track box
    fn track_size(&self) -> Size;

    /// Position the indicator thumb along its track
    fn place_thumb(&mut self, top: f32);

    /// Apply a transform-based horizontal translation to the content
    fn apply_translation(&mut self, x: f32);

    /// Touch-first environment: the custom indicator is drag-only and gets
    /// suppressed entirely on such hosts.
    fn touch_first(&self) -> bool;
}
