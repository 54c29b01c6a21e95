//! Headless host for deterministic controller testing
//!
//! An in-memory [`ViewportHost`] with fixed geometry and recorded writes.
//! Tests build one, drive the controllers through events and ticks, and
//! assert on the scroll offset, thumb placement, and translation the
//! controllers wrote back.

use veer_core::{Point, Size};

use crate::host::ViewportHost;

/// In-memory viewport with scripted geometry
#[derive(Clone, Debug)]
pub struct HeadlessViewport {
    container: Size,
    content: Option<Size>,
    child_sizes: Vec<Size>,
    thumb: Size,
    track: Size,
    scroll: Point,
    thumb_top: f32,
    translation: f32,
    attached: bool,
    touch_first: bool,
}

impl HeadlessViewport {
    pub fn new(container: Size) -> Self {
        Self {
            container,
            content: None,
            child_sizes: Vec::new(),
            thumb: Size::new(10.0, 0.0),
            track: Size::new(10.0, container.height),
            scroll: Point::ZERO,
            thumb_top: 0.0,
            translation: 0.0,
            attached: true,
            touch_first: false,
        }
    }

    /// Children sized `width x container-height`
    pub fn with_child_widths(mut self, widths: &[f32]) -> Self {
        self.child_sizes = widths
            .iter()
            .map(|width| Size::new(*width, self.container.height))
            .collect();
        self
    }

    /// Explicit content extent (otherwise derived from the children, or the
    /// container itself when there are none)
    pub fn with_content(mut self, content: Size) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_indicator(mut self, thumb: Size, track: Size) -> Self {
        self.thumb = thumb;
        self.track = track;
        self
    }

    pub fn with_touch_first(mut self) -> Self {
        self.touch_first = true;
        self
    }

    /// Structure not mounted yet; measurement must skip
    pub fn detached(mut self) -> Self {
        self.attached = false;
        self
    }

    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Shrink or grow the container, simulating a window resize
    pub fn set_container(&mut self, container: Size) {
        self.container = container;
    }

    pub fn set_content(&mut self, content: Size) {
        self.content = Some(content);
    }

    /// Last thumb placement written by a controller
    pub fn thumb_top(&self) -> f32 {
        self.thumb_top
    }

    /// Last content translation written by a controller
    pub fn translation(&self) -> f32 {
        self.translation
    }
}

impl ViewportHost for HeadlessViewport {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn container_size(&self) -> Size {
        self.container
    }

    fn content_size(&self) -> Size {
        if let Some(content) = self.content {
            return content;
        }
        if self.child_sizes.is_empty() {
            return self.container;
        }
        let width: f32 = self.child_sizes.iter().map(|size| size.width).sum();
        Size::new(width.max(self.container.width), self.container.height)
    }

    fn child_count(&self) -> usize {
        self.child_sizes.len()
    }

    fn child_size(&self, index: usize) -> Size {
        self.child_sizes.get(index).copied().unwrap_or(Size::ZERO)
    }

    fn child_offset(&self, index: usize) -> f32 {
        self.child_sizes
            .iter()
            .take(index)
            .map(|size| size.width)
            .sum()
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: Point) {
        let content = self.content_size();
        let max_x = (content.width - self.container.width).max(0.0);
        let max_y = (content.height - self.container.height).max(0.0);
        self.scroll = Point::new(offset.x.clamp(0.0, max_x), offset.y.clamp(0.0, max_y));
    }

    fn thumb_size(&self) -> Size {
        self.thumb
    }

    fn track_size(&self) -> Size {
        self.track
    }

    fn place_thumb(&mut self, top: f32) {
        self.thumb_top = top;
    }

    fn apply_translation(&mut self, x: f32) {
        self.translation = x;
    }

    fn touch_first(&self) -> bool {
        self.touch_first
    }
}
