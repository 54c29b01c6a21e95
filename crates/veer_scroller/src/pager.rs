//! Paginated carousel
//!
//! A discrete virtual position (page index) fed by three inputs: touch and
//! mouse drags, programmatic navigation, and - in native-scroll mode - the
//! viewport's own scroll offset. Transform mode moves the content with a
//! translation and snaps it to page boundaries on release; native-scroll
//! mode (`with_scroll`) drives the host's scroll position instead and reads
//! the page index back from scroll events.
//!
//! The axis lock is what keeps a carousel from fighting the page scroll
//! around it: a gesture commits to a direction once and keeps that reading
//! until the finger lifts.

use veer_animation::{Easing, Tween};
use veer_core::{Color, Point};

use crate::config::PagerConfig;
use crate::geometry::cumulative_offsets;
use crate::host::ViewportHost;

// ============================================================================
// Gesture state
// ============================================================================

/// A gesture's committed interpretation for its remaining duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisLock {
    #[default]
    None,
    /// Carousel swipe; the host's default scroll is suppressed
    Horizontal,
    /// Page scroll; the carousel ignores the rest of the gesture
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureKind {
    Touch,
    Mouse,
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    kind: GestureKind,
    origin: Point,
    /// Settled offset when the gesture began
    start_offset: f32,
    axis_lock: AxisLock,
}

// ============================================================================
// Pagination strip
// ============================================================================

/// One dot of the pagination strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDot {
    pub index: usize,
    pub color: Color,
    pub active: bool,
}

/// What a strip implementation gets to work with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripContext {
    pub selected_dot: usize,
    pub children_count: usize,
    pub page_count: usize,
}

/// Strategy for producing the pagination strip. The default renders one dot
/// per page; hosts inject their own to take over completely.
pub trait PaginationStrip: Send {
    fn dots(&self, ctx: &StripContext, config: &PagerConfig) -> Vec<PageDot>;
}

/// One colored dot per page, selected dot highlighted
pub struct DefaultStrip;

impl PaginationStrip for DefaultStrip {
    fn dots(&self, ctx: &StripContext, config: &PagerConfig) -> Vec<PageDot> {
        (0..ctx.page_count)
            .map(|index| {
                let active = index == ctx.selected_dot;
                PageDot {
                    index,
                    color: if active {
                        config.active_dot_color()
                    } else {
                        config.unactive_dots_color()
                    },
                    active,
                }
            })
            .collect()
    }
}

/// Snapshot for the host's renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerRenderInfo {
    /// Current visual offset (translation in transform mode)
    pub offset: f32,
    pub page_index: usize,
    pub page_count: usize,
    pub animating: bool,
    pub dragging: bool,
}

// ============================================================================
// Controller
// ============================================================================

/// Controller for a swipeable, paginated carousel
pub struct Pager<H: ViewportHost> {
    host: H,
    config: PagerConfig,
    strip: Box<dyn PaginationStrip>,

    /// Last settled page
    page_index: usize,
    /// Settled transform offset; negative-going as pages advance
    virtual_offset: f32,
    /// Visual offset while a drag is live; unclamped for responsiveness
    drag_offset: f32,
    gesture: Option<Gesture>,
    /// In-flight snap/navigation animation; retargeted, never queued
    tween: Option<Tween>,
}

impl<H: ViewportHost> Pager<H> {
    pub fn new(host: H, config: PagerConfig) -> Self {
        Self::with_strip(host, config, Box::new(DefaultStrip))
    }

    pub fn with_strip(host: H, config: PagerConfig, strip: Box<dyn PaginationStrip>) -> Self {
        let mut pager = Self {
            host,
            config,
            strip,
            page_index: 0,
            virtual_offset: 0.0,
            drag_offset: 0.0,
            gesture: None,
            tween: None,
        };
        pager.apply_start_position();
        pager
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Children shown per page; an unset/zero configuration means one
    fn columns(&self) -> usize {
        self.config.columns.max(1)
    }

    pub fn page_count(&self) -> usize {
        let children = self.host.child_count();
        let columns = self.columns();
        children.div_ceil(columns)
    }

    fn container_width(&self) -> f32 {
        self.host.container_size().width
    }

    // ------------------------------------------------------------------------
    // Start position / resize
    // ------------------------------------------------------------------------

    /// Map the configured start index to its page and place the content
    /// there directly (no animation). Skipped while detached; the content
    /// load event retries it.
    pub fn apply_start_position(&mut self) {
        self.place_at_page(page_for_child(self.config.start_index, self.columns()));
    }

    /// Re-apply the current page's offset against fresh geometry. Called on
    /// every resize; also re-clamps a page index that no longer exists.
    pub fn update_position(&mut self) {
        self.place_at_page(self.page_index);
    }

    fn place_at_page(&mut self, page: usize) {
        if !self.host.is_attached() {
            tracing::trace!("pager placement skipped: viewport detached");
            return;
        }
        let pages = self.page_count();
        let page = if pages == 0 { 0 } else { page.min(pages - 1) };

        self.tween = None;
        self.page_index = page;
        if self.config.with_scroll {
            let left = self.host.child_offset(page * self.columns());
            let top = self.host.scroll_offset().y;
            self.host.set_scroll_offset(Point::new(left, top));
        } else {
            self.virtual_offset = -(page as f32) * self.container_width();
            self.host.apply_translation(self.virtual_offset);
        }
    }

    // ------------------------------------------------------------------------
    // Gesture tracking
    // ------------------------------------------------------------------------

    /// First touch point went down. Cancels any in-flight transition and
    /// begins tracking with no axis committed yet.
    pub fn on_touch_start(&mut self, x: f32, y: f32) {
        if self.config.with_scroll {
            return;
        }
        self.tween = None;
        self.drag_offset = self.virtual_offset;
        self.host.apply_translation(self.virtual_offset);
        self.gesture = Some(Gesture {
            kind: GestureKind::Touch,
            origin: Point::new(x, y),
            start_offset: self.virtual_offset,
            axis_lock: AxisLock::None,
        });
    }

    /// Touch moved. Returns true when the carousel claims the gesture and
    /// the host must suppress its default scroll for this event.
    pub fn on_touch_move(&mut self, x: f32, y: f32) -> bool {
        if self.config.with_scroll {
            return false;
        }
        let Some(gesture) = &mut self.gesture else {
            return false;
        };
        let dx = x - gesture.origin.x;
        let dy = y - gesture.origin.y;
        let threshold = self.config.drag_intent_threshold();

        match gesture.axis_lock {
            // Committed to page scroll: the carousel sits this one out
            AxisLock::Vertical => return false,
            AxisLock::None => {
                if dy.abs() > threshold {
                    gesture.axis_lock = AxisLock::Vertical;
                    tracing::trace!("gesture locked vertical (dy={:.1})", dy);
                    return false;
                }
                if dx.abs() > threshold {
                    gesture.axis_lock = AxisLock::Horizontal;
                    tracing::trace!("gesture locked horizontal (dx={:.1})", dx);
                }
            }
            AxisLock::Horizontal => {}
        }

        // Some hosts emit a final glitch event at x == 0; ignore it
        if x != 0.0 {
            self.drag_offset = gesture.start_offset + dx;
            self.host.apply_translation(self.drag_offset);
        }
        dx.abs() > threshold
    }

    /// Primary mouse button went down over the carousel. Only participates
    /// when drags are configured; returns true when a drag began (the
    /// caller registers its move listener).
    pub fn on_pointer_down(&mut self, x: f32) -> bool {
        if self.config.with_scroll || !self.config.draggable || self.host.touch_first() {
            return false;
        }
        self.tween = None;
        self.drag_offset = self.virtual_offset;
        self.host.apply_translation(self.virtual_offset);
        self.gesture = Some(Gesture {
            kind: GestureKind::Mouse,
            origin: Point::new(x, 0.0),
            start_offset: self.virtual_offset,
            axis_lock: AxisLock::None,
        });
        true
    }

    /// Mouse drag; unrestricted (no axis lock for pointer gestures)
    pub fn on_pointer_move(&mut self, x: f32) {
        let Some(gesture) = &self.gesture else {
            return;
        };
        if gesture.kind != GestureKind::Mouse {
            return;
        }
        if x != 0.0 {
            self.drag_offset = gesture.start_offset + (x - gesture.origin.x);
            self.host.apply_translation(self.drag_offset);
        }
    }

    // ------------------------------------------------------------------------
    // Snap resolution
    // ------------------------------------------------------------------------

    /// Gesture ended (touch end, mouse up, or the global fallback). Applies
    /// the threshold test to the net displacement and animates to the
    /// resolved page.
    pub fn on_release(&mut self) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        if self.config.with_scroll {
            return;
        }
        let pages = self.page_count();
        if pages == 0 {
            return;
        }

        let net = self.drag_offset - gesture.start_offset;
        let threshold = self.config.snap_threshold();
        let target = if net <= -threshold {
            (self.page_index + 1).min(pages - 1)
        } else if net >= threshold {
            self.page_index.saturating_sub(1)
        } else {
            self.page_index
        };
        tracing::debug!(
            "snap: net={:.1} threshold={:.1} page {} -> {}",
            net,
            threshold,
            self.page_index,
            target
        );

        let start = self.drag_offset;
        self.page_index = target;
        self.virtual_offset = -(target as f32) * self.container_width();
        self.tween = Some(Tween::new(
            start,
            self.virtual_offset,
            self.config.transition_ms,
            Easing::Ease,
        ));
    }

    // ------------------------------------------------------------------------
    // Programmatic navigation
    // ------------------------------------------------------------------------

    /// Advance one page. Clamped at the last page unless `infinite`, which
    /// wraps to the first page with a direct (non-animated) reset.
    pub fn next(&mut self) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        if self.page_index + 1 < pages {
            if self.config.with_scroll {
                let step = self.host.child_size(self.page_index).width;
                let base = self.scroll_animation_base();
                self.animate_to(base + step);
            } else {
                let target = self.virtual_offset - self.container_width();
                self.advance_to(self.page_index + 1, target);
            }
        } else if self.config.infinite {
            self.wrap_to(0);
        }
    }

    /// Retreat one page. Clamped at the first page unless `infinite`, which
    /// wraps to the last page with a direct (non-animated) reset.
    pub fn previous(&mut self) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        if self.page_index > 0 {
            if self.config.with_scroll {
                let step = self.host.child_size(self.page_index - 1).width;
                let base = self.scroll_animation_base();
                self.animate_to(base - step);
            } else {
                let target = self.virtual_offset + self.container_width();
                self.advance_to(self.page_index - 1, target);
            }
        } else if self.config.infinite {
            self.wrap_to(pages - 1);
        }
    }

    /// Go straight to an arbitrary page (dot click); no intermediate pages
    /// are visited.
    pub fn jump_to(&mut self, index: usize) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        let index = index.min(pages - 1);
        if self.config.with_scroll {
            self.animate_to(self.host.child_offset(index));
        } else if index != self.page_index {
            let target = -(index as f32) * self.container_width();
            self.advance_to(index, target);
        }
    }

    /// Transform-mode navigation: settle on the page immediately, animate
    /// the visual offset toward it.
    fn advance_to(&mut self, page: usize, target: f32) {
        let start = self.current_visual();
        self.page_index = page;
        self.virtual_offset = target;
        let transition_ms = self.config.transition_ms;
        match &mut self.tween {
            Some(tween) => tween.retarget(target),
            None => self.tween = Some(Tween::new(start, target, transition_ms, Easing::Ease)),
        }
    }

    /// Infinite wrap: a direct position reset instead of animating across
    /// the whole sequence.
    fn wrap_to(&mut self, page: usize) {
        tracing::debug!("wrap {} -> {}", self.page_index, page);
        self.tween = None;
        self.page_index = page;
        if self.config.with_scroll {
            let left = self.host.child_offset(page * self.columns());
            let top = self.host.scroll_offset().y;
            self.host.set_scroll_offset(Point::new(left, top));
        } else {
            self.virtual_offset = -(page as f32) * self.container_width();
            self.host.apply_translation(self.virtual_offset);
        }
    }

    /// Where a native-scroll animation should continue from: the in-flight
    /// target when one exists (rapid navigation compounds), the live scroll
    /// position otherwise.
    fn scroll_animation_base(&self) -> f32 {
        match &self.tween {
            Some(tween) => tween.target(),
            None => self.host.scroll_offset().x,
        }
    }

    fn animate_to(&mut self, target: f32) {
        let start = self.host.scroll_offset().x;
        let transition_ms = self.config.transition_ms;
        match &mut self.tween {
            Some(tween) => tween.retarget(target),
            None => self.tween = Some(Tween::new(start, target, transition_ms, Easing::Ease)),
        }
    }

    fn current_visual(&self) -> f32 {
        if self.gesture.is_some() {
            return self.drag_offset;
        }
        match &self.tween {
            Some(tween) => tween.value(),
            None => self.virtual_offset,
        }
    }

    // ------------------------------------------------------------------------
    // Native scroll reconciliation
    // ------------------------------------------------------------------------

    /// Native scroll feedback (`with_scroll` mode): derive the page from
    /// the scroll position against the cumulative child-offset table. The
    /// index is never set optimistically by navigation in this mode; this
    /// is where it lands.
    pub fn on_native_scroll(&mut self, scroll_left: f32) {
        if !self.config.with_scroll {
            return;
        }
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        let widths = (0..self.host.child_count()).map(|index| self.host.child_size(index).width);
        let offsets = cumulative_offsets(widths);
        let mut page = 0;
        for (index, offset) in offsets.iter().enumerate().rev() {
            if scroll_left >= *offset {
                page = index + 1;
                break;
            }
        }
        self.page_index = page.min(pages - 1);
    }

    // ------------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------------

    /// Advance the in-flight transition. Returns true while animating.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(tween) = &mut self.tween else {
            return false;
        };
        tween.tick(dt_ms);
        let value = tween.value();
        let finished = tween.is_finished();
        if self.config.with_scroll {
            let top = self.host.scroll_offset().y;
            self.host.set_scroll_offset(Point::new(value, top));
        } else {
            self.host.apply_translation(value);
        }
        if finished {
            self.tween = None;
        }
        !finished
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    pub fn render_info(&self) -> PagerRenderInfo {
        PagerRenderInfo {
            offset: self.current_visual(),
            page_index: self.page_index,
            page_count: self.page_count(),
            animating: self.tween.is_some(),
            dragging: self.gesture.is_some(),
        }
    }

    /// The pagination strip, produced by the configured strategy
    pub fn dots(&self) -> Vec<PageDot> {
        let ctx = StripContext {
            selected_dot: self.page_index,
            children_count: self.host.child_count(),
            page_count: self.page_count(),
        };
        self.strip.dots(&ctx, &self.config)
    }
}

/// Page holding a given child index
fn page_for_child(child_index: usize, columns: usize) -> usize {
    child_index.div_ceil(columns)
}
