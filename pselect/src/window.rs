//! Fixed-row-height list windowing.
//!
//! Only rows that intersect the viewport (plus a small overscan on both
//! sides) are rendered, so the cost of drawing the list is bounded by the
//! viewport height rather than the number of items.

use std::ops::Range;

/// Windowing state for a list whose rows all share one height.
///
/// Offsets and heights are in rows of the terminal grid. The scroll offset
/// is always kept within `0..=max_offset()`.
///
/// # Example
///
/// ```
/// use pselect::window::FixedSizeList;
///
/// let mut list = FixedSizeList::new(1, 6).with_overscan(2);
/// list.set_item_count(10_000);
/// list.scroll_to(100);
/// assert_eq!(list.visible_range(), 98..108);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSizeList {
    row_height: usize,
    viewport_height: usize,
    item_count: usize,
    overscan: usize,
    offset: usize,
}

impl FixedSizeList {
    pub fn new(row_height: usize, viewport_height: usize) -> Self {
        Self {
            row_height: row_height.max(1),
            viewport_height,
            item_count: 0,
            overscan: 0,
            offset: 0,
        }
    }

    /// Set how many extra rows are rendered above and below the viewport.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn row_height(&self) -> usize {
        self.row_height
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn content_height(&self) -> usize {
        self.item_count.saturating_mul(self.row_height)
    }

    pub fn max_offset(&self) -> usize {
        self.content_height().saturating_sub(self.viewport_height)
    }

    /// Number of whole rows that fit in the viewport, at least one.
    pub fn page_rows(&self) -> usize {
        (self.viewport_height / self.row_height).max(1)
    }

    /// Change the item count, pulling the offset back if the list shrank.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll to an absolute offset. Returns true if the offset changed.
    pub fn scroll_to(&mut self, offset: usize) -> bool {
        let clamped = offset.min(self.max_offset());
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    /// Scroll by a relative amount (positive = down).
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let target = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.scroll_to(target)
    }

    /// Scroll the least amount needed for row `index` to be fully visible.
    pub fn scroll_to_item(&mut self, index: usize) -> bool {
        if index >= self.item_count {
            return false;
        }
        let top = index * self.row_height;
        let bottom = top + self.row_height;

        if top < self.offset {
            self.scroll_to(top)
        } else if bottom > self.offset + self.viewport_height {
            self.scroll_to(bottom.saturating_sub(self.viewport_height))
        } else {
            false
        }
    }

    /// Rows intersecting the viewport, without overscan.
    pub fn rows_in_view(&self) -> Range<usize> {
        if self.item_count == 0 || self.viewport_height == 0 {
            return 0..0;
        }
        let first = self.offset / self.row_height;
        let end = (self.offset + self.viewport_height).div_ceil(self.row_height);
        first.min(self.item_count)..end.min(self.item_count)
    }

    /// Rows to render: the rows in view extended by the overscan.
    pub fn visible_range(&self) -> Range<usize> {
        let view = self.rows_in_view();
        if view.is_empty() {
            return view;
        }
        let start = view.start.saturating_sub(self.overscan);
        let end = view.end.saturating_add(self.overscan).min(self.item_count);
        start..end
    }

    /// Row under viewport-relative `y`, if there is one.
    pub fn row_at(&self, y: usize) -> Option<usize> {
        if y >= self.viewport_height {
            return None;
        }
        let index = (self.offset + y) / self.row_height;
        (index < self.item_count).then_some(index)
    }

    /// Viewport-relative top of row `index`; negative when above the viewport.
    pub fn row_top(&self, index: usize) -> isize {
        (index * self.row_height) as isize - self.offset as isize
    }
}
