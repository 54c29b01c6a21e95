//! Geometry measurement
//!
//! Controllers never cache host geometry authoritatively: a snapshot is
//! taken on mount, on every resize, and on content load, and all ratio math
//! runs against the latest snapshot. Measurement is idempotent and writes
//! nothing back to the host.

use smallvec::SmallVec;
use thiserror::Error;
use veer_core::Size;

use crate::host::ViewportHost;

/// Why a measurement pass produced no snapshot
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MeasureError {
    /// Structural elements are not mounted yet. Callers skip the operation
    /// and retry on the next lifecycle event; no partial state is written.
    #[error("viewport structure is not attached")]
    Detached,
}

/// A measured view of the host at one instant
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewportGeometry {
    pub container: Size,
    pub content: Size,
    pub thumb: Size,
    pub track: Size,
    /// Cumulative child widths: entry `i` is the total width of children
    /// `0..=i`. Monotonically non-decreasing, one entry per child.
    pub child_offsets: SmallVec<[f32; 8]>,
}

impl ViewportGeometry {
    /// Take a snapshot of the host's current geometry.
    pub fn measure(host: &impl ViewportHost) -> Result<Self, MeasureError> {
        if !host.is_attached() {
            return Err(MeasureError::Detached);
        }

        let widths = (0..host.child_count()).map(|index| host.child_size(index).width);
        Ok(Self {
            container: host.container_size(),
            content: host.content_size(),
            thumb: host.thumb_size(),
            track: host.track_size(),
            child_offsets: cumulative_offsets(widths),
        })
    }

    pub fn can_scroll_y(&self) -> bool {
        self.content.height > self.container.height
    }

    pub fn can_scroll_x(&self) -> bool {
        self.content.width > self.container.width
    }

    /// Scrollable range on the vertical axis
    pub fn max_scroll_top(&self) -> f32 {
        (self.content.height - self.container.height).max(0.0)
    }

    /// Page index for a native horizontal scroll position.
    ///
    /// Reverse scan: the greatest entry `i` with `child_offsets[i] <=
    /// scroll_left` resolves to page `i + 1`; when no entry qualifies the
    /// first page is showing. Ties break toward the later index.
    pub fn page_at_scroll_left(&self, scroll_left: f32) -> usize {
        for (index, offset) in self.child_offsets.iter().enumerate().rev() {
            if scroll_left >= *offset {
                return index + 1;
            }
        }
        0
    }
}

/// Build the cumulative-offset table with a running sum.
///
/// The first entry is the first child's own width; every later entry adds
/// one more child. Building the table up front avoids reading entries that
/// have not been produced yet during the page lookup.
pub fn cumulative_offsets(widths: impl Iterator<Item = f32>) -> SmallVec<[f32; 8]> {
    let mut total = 0.0;
    widths
        .map(|width| {
            total += width;
            total
        })
        .collect()
}

/// Layout hints for one child slot. The host applies these when positioning
/// children; the controllers only hand back numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlotMetrics {
    /// Padding on the child's leading edge
    pub leading: f32,
    /// Padding on the child's trailing edge
    pub trailing: f32,
    /// Fixed main-axis basis when columns are configured
    pub basis: Option<f32>,
}

/// Per-child slot metrics: half the configured gap on each interior edge
/// (outer edges get none), and an even share of the container when columns
/// are set.
pub fn slot_metrics(
    index: usize,
    count: usize,
    spacing: f32,
    columns: Option<usize>,
    container_extent: f32,
) -> SlotMetrics {
    let half = spacing / 2.0;
    SlotMetrics {
        leading: if index == 0 { 0.0 } else { half },
        trailing: if index + 1 == count { 0.0 } else { half },
        basis: columns
            .filter(|cols| *cols > 0)
            .map(|cols| container_extent / cols as f32),
    }
}
