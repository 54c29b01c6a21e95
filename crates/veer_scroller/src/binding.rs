//! Event wiring and listener lifecycle
//!
//! Bindings connect a controller to an event stream. `attach()` registers
//! the mount-scoped listeners (resize, content load, global pointer-up,
//! viewport scroll) and is idempotent; `detach()` releases every
//! registration and is safe to call repeatedly.
//!
//! Gesture-scoped listeners follow the stricter discipline: the drag-move
//! listener exists only while a gesture is live. It is registered the
//! moment a press claims a drag and released on every exit path - including
//! the global pointer-up fallback that catches gestures whose move stream
//! never delivered an end event.

use std::sync::{Arc, Mutex};

use veer_core::events::{event_types, Event, EventData};
use veer_core::{EventDispatcher, HandlerId, Point};

use crate::host::ViewportHost;
use crate::pager::Pager;
use crate::scrollbar::Scrollbar;

/// Conventional event targets used by the bindings
pub mod targets {
    /// Window-level notifications: resize, load, global pointer events
    pub const WINDOW: u64 = 0;
    /// The scrollable viewport: scroll events, content presses
    pub const VIEWPORT: u64 = 1;
    /// The indicator track: presses that hit the custom scrollbar
    pub const TRACK: u64 = 2;
}

fn pointer_position(data: &EventData) -> Option<Point> {
    match data {
        EventData::Pointer { x, y, .. } => Some(Point::new(*x, *y)),
        EventData::Touch { x, y } => Some(Point::new(*x, *y)),
        _ => None,
    }
}

// ============================================================================
// Scrollbar binding
// ============================================================================

/// Wires a [`Scrollbar`] to an event stream
pub struct ScrollbarBinding<H: ViewportHost + Send + 'static> {
    scrollbar: Arc<Mutex<Scrollbar<H>>>,
    dispatcher: EventDispatcher,
    mount: Vec<HandlerId>,
    drag_move: Option<HandlerId>,
    attached: bool,
}

impl<H: ViewportHost + Send + 'static> ScrollbarBinding<H> {
    pub fn new(scrollbar: Scrollbar<H>) -> Self {
        Self {
            scrollbar: Arc::new(Mutex::new(scrollbar)),
            dispatcher: EventDispatcher::new(),
            mount: Vec::new(),
            drag_move: None,
            attached: false,
        }
    }

    /// Shared handle to the controller
    pub fn controller(&self) -> Arc<Mutex<Scrollbar<H>>> {
        self.scrollbar.clone()
    }

    /// Register the mount-scoped listeners. Calling again while attached
    /// does nothing.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }

        let scrollbar = self.scrollbar.clone();
        self.mount.push(self.dispatcher.register(
            targets::WINDOW,
            event_types::RESIZE,
            move |_| {
                scrollbar.lock().unwrap().refresh();
            },
        ));

        let scrollbar = self.scrollbar.clone();
        self.mount.push(self.dispatcher.register(
            targets::WINDOW,
            event_types::CONTENT_LOAD,
            move |_| {
                scrollbar.lock().unwrap().refresh();
            },
        ));

        // Global fallback: a drag must end even if its move stream dies
        let scrollbar = self.scrollbar.clone();
        self.mount.push(self.dispatcher.register(
            targets::WINDOW,
            event_types::POINTER_UP,
            move |_| {
                scrollbar.lock().unwrap().on_release();
            },
        ));

        let scrollbar = self.scrollbar.clone();
        self.mount.push(self.dispatcher.register(
            targets::VIEWPORT,
            event_types::SCROLL,
            move |event| {
                if let EventData::Scroll { top, .. } = event.data {
                    scrollbar.lock().unwrap().on_native_scroll(top);
                }
            },
        ));

        let scrollbar = self.scrollbar.clone();
        self.mount.push(self.dispatcher.register(
            targets::TRACK,
            event_types::POINTER_DOWN,
            move |event| {
                if let Some(position) = pointer_position(&event.data) {
                    scrollbar.lock().unwrap().on_pointer_down(position.y);
                }
            },
        ));

        self.attached = true;
    }

    /// Release every registration, gesture-scoped ones included
    pub fn detach(&mut self) {
        for id in self.mount.drain(..) {
            self.dispatcher.unregister(id);
        }
        if let Some(id) = self.drag_move.take() {
            self.dispatcher.unregister(id);
        }
        self.attached = false;
    }

    /// Feed one event through the binding
    pub fn dispatch(&mut self, event: &mut Event) {
        self.dispatcher.dispatch(event);
        self.sync_gesture_listeners();
    }

    /// Advance the animated scroll and mirror the resulting scroll position
    /// back through the regular scroll-event path.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let (animating, before, after) = {
            let mut scrollbar = self.scrollbar.lock().unwrap();
            let before = scrollbar.host().scroll_offset();
            let animating = scrollbar.tick(dt_ms);
            let after = scrollbar.host().scroll_offset();
            (animating, before, after)
        };
        if after != before {
            let mut event = Event::new(
                event_types::SCROLL,
                targets::VIEWPORT,
                EventData::Scroll {
                    left: after.x,
                    top: after.y,
                },
            );
            self.dispatch(&mut event);
        }
        animating
    }

    pub fn handler_count(&self) -> usize {
        self.dispatcher.handler_count()
    }

    /// Keep the drag-move listener's existence in lock-step with the
    /// controller's drag state.
    fn sync_gesture_listeners(&mut self) {
        let dragging = self.scrollbar.lock().unwrap().state().is_dragging();
        if dragging && self.drag_move.is_none() {
            let scrollbar = self.scrollbar.clone();
            self.drag_move = Some(self.dispatcher.register(
                targets::WINDOW,
                event_types::POINTER_MOVE,
                move |event| {
                    if let Some(position) = pointer_position(&event.data) {
                        scrollbar.lock().unwrap().on_drag_move(position.y);
                    }
                },
            ));
        } else if !dragging {
            if let Some(id) = self.drag_move.take() {
                self.dispatcher.unregister(id);
            }
        }
    }
}

// ============================================================================
// Pager binding
// ============================================================================

/// Wires a [`Pager`] to an event stream
pub struct PagerBinding<H: ViewportHost + Send + 'static> {
    pager: Arc<Mutex<Pager<H>>>,
    dispatcher: EventDispatcher,
    mount: Vec<HandlerId>,
    drag_move: Option<HandlerId>,
    attached: bool,
}

impl<H: ViewportHost + Send + 'static> PagerBinding<H> {
    pub fn new(pager: Pager<H>) -> Self {
        Self {
            pager: Arc::new(Mutex::new(pager)),
            dispatcher: EventDispatcher::new(),
            mount: Vec::new(),
            drag_move: None,
            attached: false,
        }
    }

    pub fn controller(&self) -> Arc<Mutex<Pager<H>>> {
        self.pager.clone()
    }

    pub fn attach(&mut self) {
        if self.attached {
            return;
        }

        let pager = self.pager.clone();
        self.mount.push(self.dispatcher.register(
            targets::WINDOW,
            event_types::RESIZE,
            move |_| {
                pager.lock().unwrap().update_position();
            },
        ));

        let pager = self.pager.clone();
        self.mount.push(self.dispatcher.register(
            targets::WINDOW,
            event_types::CONTENT_LOAD,
            move |_| {
                pager.lock().unwrap().apply_start_position();
            },
        ));

        let pager = self.pager.clone();
        self.mount.push(self.dispatcher.register(
            targets::WINDOW,
            event_types::TOUCH_START,
            move |event| {
                if let Some(position) = pointer_position(&event.data) {
                    pager.lock().unwrap().on_touch_start(position.x, position.y);
                }
            },
        ));

        let pager = self.pager.clone();
        self.mount.push(self.dispatcher.register(
            targets::WINDOW,
            event_types::TOUCH_MOVE,
            move |event| {
                if let Some(position) = pointer_position(&event.data) {
                    if pager.lock().unwrap().on_touch_move(position.x, position.y) {
                        event.suppress_default();
                    }
                }
            },
        ));

        let pager = self.pager.clone();
        self.mount.push(self.dispatcher.register(
            targets::WINDOW,
            event_types::TOUCH_END,
            move |_| {
                pager.lock().unwrap().on_release();
            },
        ));

        // Global fallback shared with the mouse path
        let pager = self.pager.clone();
        self.mount.push(self.dispatcher.register(
            targets::WINDOW,
            event_types::POINTER_UP,
            move |_| {
                pager.lock().unwrap().on_release();
            },
        ));

        let pager = self.pager.clone();
        self.mount.push(self.dispatcher.register(
            targets::VIEWPORT,
            event_types::SCROLL,
            move |event| {
                if let EventData::Scroll { left, .. } = event.data {
                    pager.lock().unwrap().on_native_scroll(left);
                }
            },
        ));

        let pager = self.pager.clone();
        self.mount.push(self.dispatcher.register(
            targets::VIEWPORT,
            event_types::POINTER_DOWN,
            move |event| {
                if let Some(position) = pointer_position(&event.data) {
                    pager.lock().unwrap().on_pointer_down(position.x);
                }
            },
        ));

        self.attached = true;
    }

    pub fn detach(&mut self) {
        for id in self.mount.drain(..) {
            self.dispatcher.unregister(id);
        }
        if let Some(id) = self.drag_move.take() {
            self.dispatcher.unregister(id);
        }
        self.attached = false;
    }

    pub fn dispatch(&mut self, event: &mut Event) {
        self.dispatcher.dispatch(event);
        self.sync_gesture_listeners();
    }

    /// Advance the in-flight transition. In native-scroll mode the write is
    /// mirrored back as a scroll event so the page index reconciles through
    /// the normal path.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let (animating, before, after) = {
            let mut pager = self.pager.lock().unwrap();
            let before = pager.host().scroll_offset();
            let animating = pager.tick(dt_ms);
            let after = pager.host().scroll_offset();
            (animating, before, after)
        };
        if after != before {
            let mut event = Event::new(
                event_types::SCROLL,
                targets::VIEWPORT,
                EventData::Scroll {
                    left: after.x,
                    top: after.y,
                },
            );
            self.dispatch(&mut event);
        }
        animating
    }

    pub fn handler_count(&self) -> usize {
        self.dispatcher.handler_count()
    }

    fn sync_gesture_listeners(&mut self) {
        let dragging = self.pager.lock().unwrap().is_dragging();
        if dragging && self.drag_move.is_none() {
            let pager = self.pager.clone();
            self.drag_move = Some(self.dispatcher.register(
                targets::WINDOW,
                event_types::POINTER_MOVE,
                move |event| {
                    if let Some(position) = pointer_position(&event.data) {
                        pager.lock().unwrap().on_pointer_move(position.x);
                    }
                },
            ));
        } else if !dragging {
            if let Some(id) = self.drag_move.take() {
                self.dispatcher.unregister(id);
            }
        }
    }
}
