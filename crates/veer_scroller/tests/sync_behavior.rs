//! Integration tests for the scroll-synchronization controllers
//!
//! These tests drive full scenarios through the event bindings and the
//! headless host:
//! - the scrollbar's three input channels agree on one position
//! - pager navigation, wrapping, and snapping settle where they should
//! - gesture axis locking keeps the carousel out of page scrolls
//! - listener lifecycles hold across repeated attach/detach cycles

use veer_core::events::{event_types, Event, EventData};
use veer_core::{Point, Size};
use veer_scroller::binding::targets;
use veer_scroller::{
    HeadlessViewport, Pager, PagerBinding, PagerConfig, Scrollbar, ScrollbarBinding,
    ScrollbarConfig, ViewportHost,
};

fn pointer(event_type: u32, target: u64, x: f32, y: f32) -> Event {
    Event::new(event_type, target, EventData::Pointer { x, y, button: 0 })
}

fn touch(event_type: u32, x: f32, y: f32) -> Event {
    Event::new(event_type, targets::WINDOW, EventData::Touch { x, y })
}

fn scroll(left: f32, top: f32) -> Event {
    Event::new(
        event_types::SCROLL,
        targets::VIEWPORT,
        EventData::Scroll { left, top },
    )
}

fn scrollbar_binding() -> ScrollbarBinding<HeadlessViewport> {
    // container 400, content 1000: thumb 160, travel 240, range 600
    let host = HeadlessViewport::new(Size::new(300.0, 400.0))
        .with_content(Size::new(300.0, 1000.0))
        .with_indicator(Size::new(10.0, 0.0), Size::new(10.0, 400.0));
    let mut binding = ScrollbarBinding::new(Scrollbar::new(host, ScrollbarConfig::default()));
    binding.attach();
    binding
}

fn pager_binding(widths: &[f32], config: PagerConfig) -> PagerBinding<HeadlessViewport> {
    let host = HeadlessViewport::new(Size::new(300.0, 400.0)).with_child_widths(widths);
    let mut binding = PagerBinding::new(Pager::new(host, config));
    binding.attach();
    binding
}

// ============================================================================
// Scrollbar: three channels, one position
// ============================================================================

#[test]
fn test_thumb_stays_on_track_through_a_wild_drag() {
    let mut binding = scrollbar_binding();
    binding.dispatch(&mut pointer(event_types::POINTER_DOWN, targets::TRACK, 0.0, 10.0));

    for y in [-500.0, 30.0, 900.0, 121.0, -0.001, 240.0, 10_000.0] {
        binding.dispatch(&mut pointer(event_types::POINTER_MOVE, targets::WINDOW, 0.0, y));
        let controller = binding.controller();
        let scrollbar = controller.lock().unwrap();
        assert!(scrollbar.thumb_top() >= 0.0);
        assert!(scrollbar.thumb_top() + scrollbar.thumb_height() <= 400.0);
    }
}

#[test]
fn test_drag_to_the_extremes_reaches_true_edges() {
    let mut binding = scrollbar_binding();
    binding.dispatch(&mut pointer(event_types::POINTER_DOWN, targets::TRACK, 0.0, 10.0));

    binding.dispatch(&mut pointer(event_types::POINTER_MOVE, targets::WINDOW, 0.0, 2000.0));
    assert_eq!(
        binding.controller().lock().unwrap().host().scroll_offset().y,
        600.0
    );

    binding.dispatch(&mut pointer(event_types::POINTER_MOVE, targets::WINDOW, 0.0, -2000.0));
    assert_eq!(
        binding.controller().lock().unwrap().host().scroll_offset().y,
        0.0
    );
}

#[test]
fn test_mirror_round_trip_is_its_own_inverse() {
    let mut binding = scrollbar_binding();

    for target in [0.0, 150.0, 300.0, 599.0, 600.0] {
        {
            let controller = binding.controller();
            let mut scrollbar = controller.lock().unwrap();
            scrollbar
                .host_mut()
                .set_scroll_offset(Point::new(0.0, target));
        }
        binding.dispatch(&mut scroll(0.0, target));

        let controller = binding.controller();
        let scrollbar = controller.lock().unwrap();
        // thumb = s * 240/600; mapping back: thumb * 600/240 == s
        let recovered = scrollbar.thumb_top() * 600.0 / 240.0;
        assert!((recovered - target).abs() < 1e-3);
    }
}

#[test]
fn test_track_click_scrolls_smoothly_to_target_and_settles() {
    let mut binding = scrollbar_binding();

    // Thumb sits at [0, 160); click well below it
    binding.dispatch(&mut pointer(event_types::POINTER_DOWN, targets::TRACK, 0.0, 230.0));
    assert!(binding.tick(16.0));

    let mut ticks = 1;
    while binding.tick(16.0) {
        ticks += 1;
        assert!(ticks < 100, "animated scroll never settled");
    }

    let controller = binding.controller();
    let scrollbar = controller.lock().unwrap();
    // ratio 2.5 * (230 - 80) = 375, mirrored into the thumb at 150
    assert_eq!(scrollbar.host().scroll_offset().y, 375.0);
    assert_eq!(scrollbar.thumb_top(), 150.0);
}

#[test]
fn test_detach_stops_event_delivery() {
    let mut binding = scrollbar_binding();
    binding.dispatch(&mut scroll(0.0, 450.0));
    assert_eq!(binding.controller().lock().unwrap().thumb_top(), 180.0);

    binding.detach();
    binding.dispatch(&mut scroll(0.0, 0.0));
    // Nothing listened; the thumb kept its last position
    assert_eq!(binding.controller().lock().unwrap().thumb_top(), 180.0);
    assert_eq!(binding.handler_count(), 0);
}

#[test]
fn test_resize_event_reclamps_orphaned_thumb() {
    let mut binding = scrollbar_binding();
    {
        let controller = binding.controller();
        let mut scrollbar = controller.lock().unwrap();
        scrollbar
            .host_mut()
            .set_scroll_offset(Point::new(0.0, 600.0));
    }
    binding.dispatch(&mut scroll(0.0, 600.0));
    assert_eq!(binding.controller().lock().unwrap().thumb_top(), 240.0);

    // Content collapses to fit in 500px; the old thumb position is invalid
    {
        let controller = binding.controller();
        let mut scrollbar = controller.lock().unwrap();
        scrollbar.host_mut().set_content(Size::new(300.0, 500.0));
    }
    binding.dispatch(&mut Event::new(
        event_types::RESIZE,
        targets::WINDOW,
        EventData::Resize {
            width: 300,
            height: 400,
        },
    ));

    let controller = binding.controller();
    let scrollbar = controller.lock().unwrap();
    assert!(scrollbar.thumb_top() + scrollbar.thumb_height() <= 400.0 + 1e-3);
    assert_eq!(scrollbar.host().scroll_offset().y, 100.0);
}

// ============================================================================
// Pager: navigation and snapping
// ============================================================================

#[test]
fn test_next_walks_to_the_last_page_then_stops() {
    let binding = pager_binding(&[300.0; 5], PagerConfig::default());
    let controller = binding.controller();
    let mut pager = controller.lock().unwrap();

    for expected in 1..=4 {
        pager.next();
        while pager.tick(16.0) {}
        assert_eq!(pager.page_index(), expected);
    }

    pager.next();
    assert!(!pager.is_animating());
    assert_eq!(pager.page_index(), 4);
    assert_eq!(pager.host().translation(), -1200.0);
}

#[test]
fn test_infinite_wrap_in_both_directions() {
    let binding = pager_binding(
        &[300.0; 3],
        PagerConfig {
            infinite: true,
            ..Default::default()
        },
    );
    let controller = binding.controller();
    let mut pager = controller.lock().unwrap();

    pager.previous();
    assert_eq!(pager.page_index(), 2);
    assert!(!pager.is_animating(), "wrap must be a direct reset");
    assert_eq!(pager.host().translation(), -600.0);

    pager.next();
    assert_eq!(pager.page_index(), 0);
    assert!(!pager.is_animating());
    assert_eq!(pager.host().translation(), 0.0);
}

#[test]
fn test_swipe_left_advances_swipe_back_snaps() {
    let mut binding = pager_binding(&[300.0; 3], PagerConfig::default());

    // Net -200 beats the 150 default: next page
    binding.dispatch(&mut touch(event_types::TOUCH_START, 250.0, 100.0));
    binding.dispatch(&mut touch(event_types::TOUCH_MOVE, 50.0, 105.0));
    binding.dispatch(&mut touch(event_types::TOUCH_END, 50.0, 105.0));
    {
        let controller = binding.controller();
        let mut pager = controller.lock().unwrap();
        assert_eq!(pager.page_index(), 1);
        while pager.tick(16.0) {}
        assert_eq!(pager.host().translation(), -300.0);
    }

    // A hesitant 149px pull snaps back to the same page
    binding.dispatch(&mut touch(event_types::TOUCH_START, 250.0, 100.0));
    binding.dispatch(&mut touch(event_types::TOUCH_MOVE, 101.0, 100.0));
    binding.dispatch(&mut touch(event_types::TOUCH_END, 101.0, 100.0));
    let controller = binding.controller();
    let mut pager = controller.lock().unwrap();
    assert_eq!(pager.page_index(), 1);
    while pager.tick(16.0) {}
    assert_eq!(pager.host().translation(), -300.0);
}

#[test]
fn test_vertical_gesture_never_moves_the_carousel() {
    let mut binding = pager_binding(&[300.0; 3], PagerConfig::default());

    binding.dispatch(&mut touch(event_types::TOUCH_START, 200.0, 100.0));

    // dy=60 with dx=10 commits the gesture to the page scroll
    let mut locking = touch(event_types::TOUCH_MOVE, 210.0, 160.0);
    binding.dispatch(&mut locking);
    assert!(!locking.default_suppressed);

    // dx=80 afterward belongs to the page, not the carousel
    let mut late_swipe = touch(event_types::TOUCH_MOVE, 120.0, 160.0);
    binding.dispatch(&mut late_swipe);
    assert!(!late_swipe.default_suppressed);

    binding.dispatch(&mut touch(event_types::TOUCH_END, 120.0, 160.0));
    let controller = binding.controller();
    let pager = controller.lock().unwrap();
    assert_eq!(pager.page_index(), 0);
    assert_eq!(pager.host().translation(), 0.0);
}

#[test]
fn test_with_scroll_page_resolution_from_mixed_widths() {
    let binding = pager_binding(
        &[100.0, 150.0, 200.0],
        PagerConfig {
            with_scroll: true,
            ..Default::default()
        },
    );
    let controller = binding.controller();
    let mut pager = controller.lock().unwrap();

    // Cumulative offsets [100, 250, 450]: 180 lands inside child 1
    pager.on_native_scroll(180.0);
    assert_eq!(pager.page_index(), 1);
}

#[test]
fn test_with_scroll_next_reconciles_only_after_scrolling() {
    let mut binding = pager_binding(
        &[300.0; 3],
        PagerConfig {
            with_scroll: true,
            transition_ms: 120.0,
            ..Default::default()
        },
    );

    binding.controller().lock().unwrap().next();
    assert_eq!(binding.controller().lock().unwrap().page_index(), 0);

    while binding.tick(16.0) {}
    let controller = binding.controller();
    let pager = controller.lock().unwrap();
    assert_eq!(pager.host().scroll_offset().x, 300.0);
    assert_eq!(pager.page_index(), 1);
}

#[test]
fn test_rapid_navigation_last_write_wins() {
    let binding = pager_binding(&[300.0; 5], PagerConfig::default());
    let controller = binding.controller();
    let mut pager = controller.lock().unwrap();

    // Fire three navigations without letting anything settle
    pager.next();
    pager.tick(50.0);
    pager.next();
    pager.tick(50.0);
    pager.jump_to(4);
    while pager.tick(16.0) {}

    assert_eq!(pager.page_index(), 4);
    assert_eq!(pager.host().translation(), -1200.0);
}

#[test]
fn test_reattach_after_detach_works_once() {
    let mut binding = pager_binding(&[300.0; 3], PagerConfig::default());
    let mounted = binding.handler_count();

    binding.detach();
    binding.detach();
    assert_eq!(binding.handler_count(), 0);

    binding.attach();
    assert_eq!(binding.handler_count(), mounted);

    // Still fully functional after the cycle
    binding.dispatch(&mut touch(event_types::TOUCH_START, 250.0, 100.0));
    binding.dispatch(&mut touch(event_types::TOUCH_MOVE, 50.0, 100.0));
    binding.dispatch(&mut touch(event_types::TOUCH_END, 50.0, 100.0));
    assert_eq!(binding.controller().lock().unwrap().page_index(), 1);
}
