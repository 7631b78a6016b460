// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the controller and the host's list widget.

use daystrip_diff::ListUpdateSink;
use daystrip_scroll::{FixedExtentStrip, VisibleItems};

/// The host list widget a [`CalendarController`](crate::CalendarController) drives.
///
/// The host owns rendering, virtualization and cell recycling. The controller
/// only tells it how many cells exist, which ones changed and where to
/// scroll, and asks it which cells are completely visible.
pub trait StripHost: ListUpdateSink + VisibleItems {
    /// The strip now has `len` cells; any previous content is replaced.
    fn set_item_count(&mut self, len: usize);

    /// Scroll so `position` is shown.
    fn scroll_to_position(&mut self, position: usize);

    /// The cell at `position` must be rebound, e.g. after its selection flipped.
    fn notify_item_changed(&mut self, position: usize);
}

/// A [`StripHost`] for uniformly sized cells without a real widget behind it.
///
/// Useful for headless embedders and tests: it tracks the cell count and
/// scroll offset through a [`FixedExtentStrip`] and collects the positions
/// that need rebinding until [`HeadlessHost::take_dirty`] drains them.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessHost {
    strip: FixedExtentStrip,
    dirty: Vec<usize>,
}

impl HeadlessHost {
    /// Creates a host with no cells.
    #[must_use]
    pub fn new(item_extent: f64, viewport_extent: f64) -> Self {
        Self {
            strip: FixedExtentStrip::new(0, item_extent, viewport_extent),
            dirty: Vec::new(),
        }
    }

    /// The underlying strip geometry.
    #[must_use]
    pub fn strip(&self) -> &FixedExtentStrip {
        &self.strip
    }

    /// Scrolls by `delta` and returns the distance actually scrolled.
    ///
    /// Hosts report that distance to
    /// [`CalendarController::on_scrolled`](crate::CalendarController::on_scrolled).
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        self.strip.scroll_by(delta)
    }

    /// Removes and returns positions waiting to be rebound, in first-notified order.
    pub fn take_dirty(&mut self) -> Vec<usize> {
        core::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self, position: usize) {
        if !self.dirty.contains(&position) {
            self.dirty.push(position);
        }
    }
}

impl ListUpdateSink for HeadlessHost {
    fn inserted(&mut self, _at: usize, count: usize) {
        self.strip.set_len(self.strip.len() + count);
    }

    fn removed(&mut self, _at: usize, count: usize) {
        self.strip.set_len(self.strip.len().saturating_sub(count));
    }

    fn moved(&mut self, from: usize, to: usize) {
        self.mark_dirty(from);
        self.mark_dirty(to);
    }
}

impl VisibleItems for HeadlessHost {
    fn first_completely_visible(&self) -> Option<usize> {
        self.strip.first_completely_visible()
    }

    fn last_completely_visible(&self) -> Option<usize> {
        self.strip.last_completely_visible()
    }
}

impl StripHost for HeadlessHost {
    fn set_item_count(&mut self, len: usize) {
        self.strip.set_len(len);
        self.dirty.clear();
    }

    fn scroll_to_position(&mut self, position: usize) {
        self.strip.scroll_to_index(position);
    }

    fn notify_item_changed(&mut self, position: usize) {
        self.mark_dirty(position);
    }
}
