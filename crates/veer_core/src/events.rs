//! Event dispatch system
//!
//! Unified input-event handling for the Veer controllers. Hosts translate
//! their native notifications (windowing system, DOM, test harness) into
//! [`Event`] values and feed them through an [`EventDispatcher`].
//!
//! Registrations return a [`HandlerId`]; dropping a listener is an explicit
//! `unregister` call with that id. This is what lets gesture-scoped
//! listeners (drag-move, drag-end) be attached when a gesture begins and
//! reliably detached on every exit path.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;

    pub const TOUCH_START: EventType = 10;
    pub const TOUCH_MOVE: EventType = 11;
    pub const TOUCH_END: EventType = 12;

    pub const SCROLL: EventType = 30;
    pub const RESIZE: EventType = 40;

    // Host lifecycle events
    pub const CONTENT_LOAD: EventType = 60;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Target id; hosts pick the numbering (0 is conventionally the window)
    pub target: u64,
    pub data: EventData,
    pub timestamp: u64,
    pub propagation_stopped: bool,
    pub default_suppressed: bool,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    /// First touch point only; additional touch points are not tracked
    Touch {
        x: f32,
        y: f32,
    },
    Scroll {
        left: f32,
        top: f32,
    },
    Resize {
        width: u32,
        height: u32,
    },
    None,
}

impl Event {
    pub fn new(event_type: EventType, target: u64, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            timestamp: 0,
            propagation_stopped: false,
            default_suppressed: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Claim the event: the host should not apply its default behavior
    /// (e.g. native page scroll) for the rest of this gesture frame.
    pub fn suppress_default(&mut self) {
        self.default_suppressed = true;
    }
}

new_key_type! {
    /// Handle to a registered event listener
    pub struct HandlerId;
}

/// Event handler function type
pub type EventHandler = Box<dyn FnMut(&mut Event) + Send>;

struct HandlerEntry {
    key: (u64, EventType),
    callback: EventHandler,
}

/// Dispatches events to registered handlers
///
/// Handlers for one `(target, event type)` pair run in registration order
/// until one stops propagation.
pub struct EventDispatcher {
    entries: SlotMap<HandlerId, HandlerEntry>,
    index: FxHashMap<(u64, EventType), SmallVec<[HandlerId; 2]>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            index: FxHashMap::default(),
        }
    }

    /// Register an event handler for a target and event type
    pub fn register<F>(&mut self, target: u64, event_type: EventType, handler: F) -> HandlerId
    where
        F: FnMut(&mut Event) + Send + 'static,
    {
        let id = self.entries.insert(HandlerEntry {
            key: (target, event_type),
            callback: Box::new(handler),
        });
        self.index.entry((target, event_type)).or_default().push(id);
        id
    }

    /// Remove a previously registered handler.
    ///
    /// Returns false when the id was already removed; safe to call twice.
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        let Some(entry) = self.entries.remove(id) else {
            return false;
        };
        if let Some(ids) = self.index.get_mut(&entry.key) {
            ids.retain(|candidate| *candidate != id);
            if ids.is_empty() {
                self.index.remove(&entry.key);
            }
        }
        true
    }

    /// Dispatch an event to all registered handlers
    pub fn dispatch(&mut self, event: &mut Event) {
        let Some(ids) = self.index.get(&(event.target, event.event_type)) else {
            return;
        };
        tracing::trace!(
            "dispatch type={} target={} to {} handler(s)",
            event.event_type,
            event.target,
            ids.len()
        );
        // Snapshot the id list so the index is not borrowed while the
        // handlers (stored next to it) run.
        let ids: SmallVec<[HandlerId; 2]> = ids.clone();
        for id in ids {
            if event.propagation_stopped {
                break;
            }
            if let Some(entry) = self.entries.get_mut(id) {
                (entry.callback)(event);
            }
        }
    }

    /// Number of live registrations
    pub fn handler_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
