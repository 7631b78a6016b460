// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month/year transition detection while scrolling.

use daystrip_dates::DateEntry;

use crate::VisibleItems;

/// The month and year of the strip's leading edge changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonthChange {
    /// Month number, 1 for January through 12 for December.
    pub month_number: u32,
    /// English month name.
    pub month_name: &'static str,
    /// Calendar year.
    pub year: i32,
    /// The date whose month is reported.
    pub date: DateEntry,
}

impl From<DateEntry> for MonthChange {
    fn from(date: DateEntry) -> Self {
        Self {
            month_number: date.month_number(),
            month_name: date.month_name(),
            year: date.year(),
            date,
        }
    }
}

/// Watches scroll callbacks and reports month/year transitions.
///
/// The observer remembers the last reported `(month, year)` pair and the last
/// completely visible position (the strip's *scroll position*). Both start
/// unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollObserver {
    previous: Option<(u32, i32)>,
    scroll_position: usize,
}

impl ScrollObserver {
    /// Creates an observer with no month reported yet and scroll position 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: None,
            scroll_position: 0,
        }
    }

    /// Handles one scroll callback with horizontal delta `dx`.
    ///
    /// The leading edge is the last completely visible item when `dx > 0`,
    /// otherwise the first. Returns a [`MonthChange`] if that item's month or
    /// year differs from the previously reported pair; the stored pair is
    /// updated either way. Returns `None` without touching the stored pair if
    /// no item is completely visible or the edge is outside `dates`.
    pub fn on_scrolled<V>(
        &mut self,
        dx: i32,
        visible: &V,
        dates: &[DateEntry],
    ) -> Option<MonthChange>
    where
        V: VisibleItems + ?Sized,
    {
        if let Some(last) = visible.last_completely_visible() {
            self.scroll_position = last;
        }

        let edge = if dx > 0 {
            visible.last_completely_visible()
        } else {
            visible.first_completely_visible()
        }?;
        let date = *dates.get(edge)?;

        let current = date.month_and_year();
        let changed = self.previous != Some(current);
        self.previous = Some(current);
        changed.then(|| MonthChange::from(date))
    }

    /// The last `(month_number, year)` pair seen at the leading edge.
    #[must_use]
    pub const fn previous_month_and_year(&self) -> Option<(u32, i32)> {
        self.previous
    }

    /// Records `date`'s month as the last reported one.
    ///
    /// Used after a forced month report so the next scroll does not repeat it.
    pub fn mark_reported(&mut self, date: DateEntry) {
        self.previous = Some(date.month_and_year());
    }

    /// The remembered scroll position.
    #[must_use]
    pub const fn scroll_position(&self) -> usize {
        self.scroll_position
    }

    /// Overrides the remembered scroll position.
    pub fn set_scroll_position(&mut self, position: usize) {
        self.scroll_position = position;
    }

    /// Clamps the scroll position into a list of `len` items.
    ///
    /// Returns the clamped position, or `None` if the list is empty.
    pub fn clamp_scroll_position(&mut self, len: usize) -> Option<usize> {
        let last = len.checked_sub(1)?;
        self.scroll_position = self.scroll_position.min(last);
        Some(self.scroll_position)
    }

    /// Forgets the reported month so the next callback reports again.
    pub fn reset_month(&mut self) {
        self.previous = None;
    }
}
