//! Configuration for the scrollbar and pager controllers

use veer_core::{Color, Size};

/// Track padding passed through to the indicator track.
///
/// Only the vertical components participate in the scrollbar math: the
/// usable track height is the container height minus both, and drag deltas
/// are measured from below the top inset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackPadding {
    pub top: f32,
    pub bottom: f32,
}

impl TrackPadding {
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
        }
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Configuration for the mirrored custom scrollbar
#[derive(Clone, Copy, Debug)]
pub struct ScrollbarConfig {
    /// Children per column group. When set, overflow is judged by child
    /// count against the column count instead of measured heights.
    pub columns: Option<usize>,
    /// Inter-child gap in pixels
    pub spacing: f32,
    /// Padding passed through to the indicator track
    pub track_padding: TrackPadding,
    /// Custom thumb override. None auto-sizes the thumb proportionally to
    /// the visible fraction of the content.
    pub thumb: Option<Size>,
    /// Duration of the animated scroll triggered by a track click
    pub smooth_scroll_ms: f32,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            columns: None,
            spacing: 0.0,
            track_padding: TrackPadding::default(),
            thumb: None,
            smooth_scroll_ms: 300.0,
        }
    }
}

/// Configuration for the paginated carousel
#[derive(Clone, Copy, Debug)]
pub struct PagerConfig {
    /// Children per page. Zero is undefined behavior and is not validated.
    pub columns: usize,
    /// Inter-child gap in pixels
    pub spacing: f32,
    /// Initial child index; mapped to its page and clamped on mount
    pub start_index: usize,
    /// Drive the native scroll container instead of a transform
    pub with_scroll: bool,
    /// Stepping past either end wraps to the opposite end
    pub infinite: bool,
    /// Allow mouse drags to move the carousel
    pub draggable: bool,
    /// Net displacement required to change slides. None uses the defaults:
    /// 150 px at release, 50 px for in-gesture intent detection.
    pub min_offset_to_change_slide: Option<f32>,
    /// Snap/navigation transition duration in milliseconds
    pub transition_ms: f32,
    pub active_dot_color: Option<Color>,
    pub unactive_dots_color: Option<Color>,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            columns: 1,
            spacing: 0.0,
            start_index: 0,
            with_scroll: false,
            infinite: false,
            draggable: false,
            min_offset_to_change_slide: None,
            transition_ms: 1000.0,
            active_dot_color: None,
            unactive_dots_color: None,
        }
    }
}

impl PagerConfig {
    /// Threshold for committing a drag's axis interpretation
    pub fn drag_intent_threshold(&self) -> f32 {
        self.min_offset_to_change_slide.unwrap_or(50.0)
    }

    /// Threshold a released drag must exceed to change slides
    pub fn snap_threshold(&self) -> f32 {
        self.min_offset_to_change_slide.unwrap_or(150.0)
    }

    pub fn active_dot_color(&self) -> Color {
        self.active_dot_color.unwrap_or(colors::PRIMARY)
    }

    pub fn unactive_dots_color(&self) -> Color {
        self.unactive_dots_color.unwrap_or(colors::MEDIUM_GRAY)
    }
}

/// Default palette for the built-in pagination strip
pub mod colors {
    use veer_core::Color;

    pub const PRIMARY: Color = Color::rgb(0.18, 0.50, 0.93);
    pub const MEDIUM_GRAY: Color = Color::rgb(0.80, 0.80, 0.80);
}
