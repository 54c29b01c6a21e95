//! Mirrored custom scrollbar
//!
//! Keeps a native vertical scroll viewport and a custom thumb/track
//! indicator in lock-step. Three inputs feed the same virtual position:
//! dragging the thumb, clicking the track, and the viewport's own scroll
//! events. The controller owns the mapping in both directions and never
//! lets the thumb leave its track.
//!
//! Coordinates handed to the pointer methods are track-local (0 at the top
//! of the track).

use veer_animation::{Easing, Tween};
use veer_core::{Point, Size};

use crate::config::ScrollbarConfig;
use crate::geometry::{MeasureError, ViewportGeometry};
use crate::host::ViewportHost;

// ============================================================================
// Thumb interaction state
// ============================================================================

/// Scrollbar interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbState {
    #[default]
    Idle,
    /// Pointer is over the thumb
    Hovered,
    /// Thumb is being dragged
    Dragging,
}

impl ThumbState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, ThumbState::Dragging)
    }
}

/// Everything a host needs to draw the indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbRenderInfo {
    pub visible: bool,
    pub top: f32,
    pub size: Size,
    pub state: ThumbState,
    /// Horizontal space the content should reserve for the indicator
    pub content_gutter: f32,
}

// ============================================================================
// Controller
// ============================================================================

/// Controller for a custom scrollbar mirroring a native vertical viewport
pub struct Scrollbar<H: ViewportHost> {
    host: H,
    config: ScrollbarConfig,

    // Measured geometry (refreshed on mount, resize, and content load)
    /// Usable track height: container height reduced by the track padding
    track_height: f32,
    /// Full scrollable range of the native viewport
    scroll_range: f32,
    thumb_height: f32,
    thumb_width: f32,
    track_width: f32,
    child_count: usize,
    content_overflows: bool,

    // Interaction
    state: ThumbState,
    /// Thumb top at drag start
    drag_origin: f32,
    /// Pointer position (plus top track padding) at drag start
    drag_start_delta: f32,
    thumb_top: f32,

    /// In-flight animated scroll (track clicks); retargeted, never queued
    scroll_tween: Option<Tween>,
}

impl<H: ViewportHost> Scrollbar<H> {
    pub fn new(host: H, config: ScrollbarConfig) -> Self {
        let mut scrollbar = Self {
            host,
            config,
            track_height: 0.0,
            scroll_range: 0.0,
            thumb_height: 0.0,
            thumb_width: 0.0,
            track_width: 0.0,
            child_count: 0,
            content_overflows: false,
            state: ThumbState::Idle,
            drag_origin: 0.0,
            drag_start_delta: 0.0,
            thumb_top: 0.0,
            scroll_tween: None,
        };
        scrollbar.refresh();
        scrollbar
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn state(&self) -> ThumbState {
        self.state
    }

    pub fn thumb_top(&self) -> f32 {
        self.thumb_top
    }

    pub fn thumb_height(&self) -> f32 {
        self.thumb_height
    }

    // ------------------------------------------------------------------------
    // Measurement
    // ------------------------------------------------------------------------

    /// Re-measure the host. Called on mount, window resize, and content
    /// load. Skipped silently while the structure is detached.
    ///
    /// If the thumb's previous position no longer fits the new bounds
    /// (content shrank), it is clamped back onto the track and the native
    /// scroll is forced to the content end so the indicator cannot orphan.
    pub fn refresh(&mut self) {
        let geometry = match ViewportGeometry::measure(&self.host) {
            Ok(geometry) => geometry,
            Err(MeasureError::Detached) => {
                tracing::trace!("scrollbar refresh skipped: viewport detached");
                return;
            }
        };

        self.track_height =
            (geometry.container.height - self.config.track_padding.vertical()).max(0.0);
        self.scroll_range = geometry.max_scroll_top();
        self.thumb_width = geometry.thumb.width;
        self.track_width = geometry.track.width;
        self.child_count = geometry.child_offsets.len();
        self.content_overflows = geometry.can_scroll_y();

        self.thumb_height = match self.config.thumb {
            Some(size) => size.height,
            None => auto_thumb_height(self.track_height, geometry.content.height),
        };

        if self.thumb_top + self.thumb_height > self.track_height {
            let clamped = (self.track_height - self.thumb_height).max(0.0);
            tracing::debug!(
                "thumb re-clamped {:.1} -> {:.1} after geometry change",
                self.thumb_top,
                clamped
            );
            self.thumb_top = clamped;
            let scroll_x = self.host.scroll_offset().x;
            self.host
                .set_scroll_offset(Point::new(scroll_x, self.scroll_range));
        }
        self.host.place_thumb(self.thumb_top);
    }

    /// Thumb travel range along the track
    fn max_offset(&self) -> f32 {
        (self.track_height - self.thumb_height).max(0.0)
    }

    /// Scroll pixels per thumb pixel
    fn ratio(&self) -> f32 {
        let max_offset = self.max_offset();
        if max_offset <= 0.0 {
            return 0.0;
        }
        self.scroll_range / max_offset
    }

    // ------------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------------

    /// Whether the indicator should exist at all: content must overflow
    /// (judged by child count when columns are configured) and the host
    /// must not be touch-first.
    pub fn should_render(&self) -> bool {
        if self.host.touch_first() {
            return false;
        }
        match self.config.columns {
            Some(columns) => self.child_count > columns,
            None => self.content_overflows,
        }
    }

    /// Horizontal space the content reserves so it never slides under the
    /// indicator
    pub fn content_gutter(&self) -> f32 {
        if self.should_render() {
            self.track_width.max(self.thumb_width) + 10.0
        } else {
            20.0
        }
    }

    // ------------------------------------------------------------------------
    // Thumb drag
    // ------------------------------------------------------------------------

    /// Pointer press anywhere on the track. Hit-tests the thumb first; a
    /// press on the thumb starts a drag (returns true, and the caller
    /// registers move listeners), anything else is a track click.
    pub fn on_pointer_down(&mut self, pointer_y: f32) -> bool {
        if !self.should_render() {
            return false;
        }
        if pointer_y >= self.thumb_top && pointer_y <= self.thumb_top + self.thumb_height {
            self.start_drag(pointer_y);
            return true;
        }
        self.track_click(pointer_y);
        false
    }

    fn start_drag(&mut self, pointer_y: f32) {
        // A drag overrides whatever animation is in flight
        self.scroll_tween = None;
        self.state = ThumbState::Dragging;
        self.drag_origin = self.thumb_top;
        self.drag_start_delta = pointer_y + self.config.track_padding.top;
        tracing::trace!("thumb drag start at y={:.1}", pointer_y);
    }

    /// Pointer move during a drag.
    ///
    /// While the unclamped offset stays on the track, scroll and thumb move
    /// together through the ratio mapping. Once the pointer overshoots, the
    /// thumb pins to the nearer end while the native scroll snaps to its
    /// true extreme - the drag hits a wall, the content still reaches the
    /// edge.
    pub fn on_drag_move(&mut self, pointer_y: f32) {
        if !self.state.is_dragging() {
            return;
        }
        let max_offset = self.max_offset();
        if max_offset <= 0.0 {
            return;
        }

        let offset = pointer_y - self.drag_start_delta + self.drag_origin;
        let scroll_x = self.host.scroll_offset().x;

        if offset < 0.0 || offset > max_offset {
            let pinned = if offset < 0.0 { 0.0 } else { max_offset };
            let extreme = if offset > 0.0 { self.scroll_range } else { 0.0 };
            self.thumb_top = pinned;
            self.host.place_thumb(pinned);
            self.host.set_scroll_offset(Point::new(scroll_x, extreme));
            return;
        }

        self.thumb_top = offset;
        self.host.place_thumb(offset);
        self.host
            .set_scroll_offset(Point::new(scroll_x, self.ratio() * offset));
    }

    /// Pointer release; also the global fallback for gestures whose move
    /// sequence never delivered an end event.
    pub fn on_release(&mut self) {
        if self.state.is_dragging() {
            tracing::trace!("thumb drag end at top={:.1}", self.thumb_top);
            self.state = ThumbState::Idle;
        }
    }

    // ------------------------------------------------------------------------
    // Track click
    // ------------------------------------------------------------------------

    /// Click on empty track area: scroll so the thumb's midpoint lands on
    /// the click, animated. Fire-and-forget; further input overrides it.
    fn track_click(&mut self, pointer_y: f32) {
        let ratio = self.ratio();
        if ratio <= 0.0 {
            return;
        }
        let target = (ratio * (pointer_y - self.thumb_height / 2.0)).clamp(0.0, self.scroll_range);
        let current = self.host.scroll_offset().y;
        tracing::trace!("track click: animating scroll {:.1} -> {:.1}", current, target);
        match &mut self.scroll_tween {
            Some(tween) => tween.retarget(target),
            None => {
                self.scroll_tween = Some(Tween::new(
                    current,
                    target,
                    self.config.smooth_scroll_ms,
                    Easing::EaseInOut,
                ));
            }
        }
    }

    // ------------------------------------------------------------------------
    // Native scroll mirror
    // ------------------------------------------------------------------------

    /// Native scroll feedback: reposition the thumb to mirror the
    /// viewport. This is the only path from scroll position back into the
    /// indicator, and it never writes the scroll position itself.
    pub fn on_native_scroll(&mut self, scroll_top: f32) {
        if self.scroll_range <= 0.0 {
            return;
        }
        let top = (scroll_top * self.max_offset() / self.scroll_range).clamp(0.0, self.max_offset());
        self.thumb_top = top;
        self.host.place_thumb(top);
    }

    // ------------------------------------------------------------------------
    // Hover (styling only)
    // ------------------------------------------------------------------------

    pub fn on_thumb_hover(&mut self) {
        if !self.state.is_dragging() {
            self.state = ThumbState::Hovered;
        }
    }

    pub fn on_hover_leave(&mut self) {
        if !self.state.is_dragging() {
            self.state = ThumbState::Idle;
        }
    }

    // ------------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------------

    /// Advance the animated scroll, if any. Returns true while animating.
    /// The thumb follows through the host's scroll event, not from here.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(tween) = &mut self.scroll_tween else {
            return false;
        };
        tween.tick(dt_ms);
        let value = tween.value();
        let finished = tween.is_finished();
        let scroll_x = self.host.scroll_offset().x;
        self.host.set_scroll_offset(Point::new(scroll_x, value));
        if finished {
            self.scroll_tween = None;
        }
        !finished
    }

    pub fn is_animating(&self) -> bool {
        self.scroll_tween.is_some()
    }

    pub fn render_info(&self) -> ThumbRenderInfo {
        ThumbRenderInfo {
            visible: self.should_render(),
            top: self.thumb_top,
            size: Size::new(self.thumb_width, self.thumb_height),
            state: self.state,
            content_gutter: self.content_gutter(),
        }
    }
}

/// Thumb height proportional to the visible fraction of the content,
/// with the percentage rounded to a whole number first.
fn auto_thumb_height(track_height: f32, content_height: f32) -> f32 {
    if content_height <= 0.0 {
        return track_height;
    }
    let percentage = (track_height * 100.0 / content_height).round();
    percentage * track_height / 100.0
}
