// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility for strips of uniformly sized cells.

use crate::VisibleItems;

/// A strip of `len` cells, each `item_extent` wide, seen through a viewport.
///
/// All extents and offsets are in one caller-chosen 1D coordinate space
/// (typically logical pixels) and are expected to be finite and non-negative.
/// The scroll offset is kept within `0..=max_scroll_offset()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedExtentStrip {
    len: usize,
    item_extent: f64,
    viewport_extent: f64,
    scroll_offset: f64,
}

impl FixedExtentStrip {
    /// Creates a strip scrolled to the start.
    ///
    /// Negative or non-finite extents are treated as zero.
    #[must_use]
    pub fn new(len: usize, item_extent: f64, viewport_extent: f64) -> Self {
        Self {
            len,
            item_extent: sanitize(item_extent),
            viewport_extent: sanitize(viewport_extent),
            scroll_offset: 0.0,
        }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the strip has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Changes the number of cells, re-clamping the scroll offset.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.scroll_offset = self.clamp(self.scroll_offset);
    }

    /// The extent of a single cell.
    #[must_use]
    pub fn item_extent(&self) -> f64 {
        self.item_extent
    }

    /// The extent of the viewport.
    #[must_use]
    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// Resizes the viewport, re-clamping the scroll offset.
    pub fn set_viewport_extent(&mut self, viewport_extent: f64) {
        self.viewport_extent = sanitize(viewport_extent);
        self.scroll_offset = self.clamp(self.scroll_offset);
    }

    /// The total extent of all cells.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.len as f64 * self.item_extent
    }

    /// The largest scroll offset that still fills the viewport.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_extent() - self.viewport_extent).max(0.0)
    }

    /// The current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Sets the scroll offset, clamped to the valid range.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = self.clamp(offset);
    }

    /// Scrolls by `delta` and returns the distance actually scrolled.
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        let before = self.scroll_offset;
        self.set_scroll_offset(before + delta);
        self.scroll_offset - before
    }

    /// Scrolls so cell `index` starts at the leading edge, as far as the content allows.
    pub fn scroll_to_index(&mut self, index: usize) {
        let start = index.min(self.len) as f64 * self.item_extent;
        self.set_scroll_offset(start);
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_finite() {
            offset.clamp(0.0, self.max_scroll_offset())
        } else {
            0.0
        }
    }

    fn fully_visible_span(&self) -> Option<(usize, usize)> {
        if self.len == 0 || self.item_extent <= 0.0 {
            return None;
        }
        let start = self.scroll_offset;
        let end = start + self.viewport_extent;

        #[expect(
            clippy::cast_possible_truncation,
            reason = "Offsets are finite and non-negative; indices are clamped below"
        )]
        let (first, past_last) = (
            (start / self.item_extent).ceil() as usize,
            (end / self.item_extent).floor() as usize,
        );
        let last = past_last.checked_sub(1)?.min(self.len - 1);
        (first <= last).then_some((first, last))
    }
}

impl VisibleItems for FixedExtentStrip {
    fn first_completely_visible(&self) -> Option<usize> {
        self.fully_visible_span().map(|(first, _)| first)
    }

    fn last_completely_visible(&self) -> Option<usize> {
        self.fully_visible_span().map(|(_, last)| last)
    }
}

fn sanitize(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_visible_span_at_rest() {
        let strip = FixedExtentStrip::new(10, 40.0, 160.0);
        assert_eq!(strip.first_completely_visible(), Some(0));
        assert_eq!(strip.last_completely_visible(), Some(3));
    }

    #[test]
    fn partially_visible_cells_are_excluded() {
        let mut strip = FixedExtentStrip::new(10, 40.0, 160.0);
        strip.set_scroll_offset(20.0);
        assert_eq!(strip.first_completely_visible(), Some(1));
        assert_eq!(strip.last_completely_visible(), Some(3));
    }

    #[test]
    fn viewport_narrower_than_a_cell_shows_nothing_fully() {
        let mut strip = FixedExtentStrip::new(10, 40.0, 30.0);
        strip.set_scroll_offset(5.0);
        assert_eq!(strip.first_completely_visible(), None);
        assert_eq!(strip.last_completely_visible(), None);
    }

    #[test]
    fn resizing_the_viewport_reclamps_the_offset() {
        let mut strip = FixedExtentStrip::new(10, 40.0, 160.0);
        strip.scroll_by(1_000.0);
        assert_eq!(strip.scroll_offset(), 240.0);

        strip.set_viewport_extent(200.0);
        assert_eq!(strip.viewport_extent(), 200.0);
        assert_eq!(strip.scroll_offset(), 200.0);
        assert_eq!(strip.first_completely_visible(), Some(5));
        assert_eq!(strip.last_completely_visible(), Some(9));

        // A collapsed viewport shows nothing completely.
        strip.set_viewport_extent(f64::NAN);
        assert_eq!(strip.viewport_extent(), 0.0);
        assert_eq!(strip.scroll_offset(), 200.0);
        assert_eq!(strip.last_completely_visible(), None);
    }

    #[test]
    fn scroll_offset_is_clamped() {
        let mut strip = FixedExtentStrip::new(10, 40.0, 160.0);
        assert_eq!(strip.max_scroll_offset(), 240.0);

        assert_eq!(strip.scroll_by(1_000.0), 240.0);
        assert_eq!(strip.last_completely_visible(), Some(9));

        strip.set_scroll_offset(-5.0);
        assert_eq!(strip.scroll_offset(), 0.0);

        strip.set_scroll_offset(f64::NAN);
        assert_eq!(strip.scroll_offset(), 0.0);
    }

    #[test]
    fn scroll_to_index_aligns_leading_edge() {
        let mut strip = FixedExtentStrip::new(10, 40.0, 160.0);
        strip.scroll_to_index(2);
        assert_eq!(strip.first_completely_visible(), Some(2));

        // Near the end the offset is clamped, so the index stays visible but not leading.
        strip.scroll_to_index(9);
        assert_eq!(strip.first_completely_visible(), Some(6));
        assert_eq!(strip.last_completely_visible(), Some(9));
    }

    #[test]
    fn shrinking_reclamps_offset() {
        let mut strip = FixedExtentStrip::new(10, 40.0, 160.0);
        strip.set_scroll_offset(240.0);
        strip.set_len(5);
        assert_eq!(strip.scroll_offset(), 40.0);
        assert_eq!(strip.last_completely_visible(), Some(4));

        strip.set_len(0);
        assert!(strip.is_empty());
        assert_eq!(strip.first_completely_visible(), None);
    }
}
