// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=daystrip_scroll --heading-base-level=0

//! Daystrip Scroll: scroll observation for horizontally scrolling date strips.
//!
//! The crate does not scroll anything itself. Hosts own the list widget and
//! report scroll deltas; this crate decides what those deltas mean for a
//! calendar strip:
//!
//! - [`VisibleItems`]: the two layout queries the observer needs, namely the
//!   first and last *completely* visible item. Host list adapters implement it.
//! - [`FixedExtentStrip`]: a small [`VisibleItems`] implementation for strips of
//!   uniformly sized cells, driven by a scroll offset and a viewport extent.
//! - [`ScrollObserver`]: the month/year state machine. On each scroll callback
//!   it looks at the leading edge item (last fully visible when moving forward,
//!   first fully visible otherwise) and reports a [`MonthChange`] only when that
//!   item's month or year differs from the last one reported.
//!
//! ## Minimal example
//!
//! ```rust
//! use daystrip_dates::{DateEntry, DateRange};
//! use daystrip_scroll::{FixedExtentStrip, ScrollObserver};
//!
//! let today = DateEntry::from_ymd(2024, 3, 27).unwrap();
//! let dates = DateRange::new(0, 9).build(today).unwrap();
//!
//! // Ten 40px cells in a 160px viewport: four cells fit.
//! let mut strip = FixedExtentStrip::new(dates.len(), 40.0, 160.0);
//! let mut observer = ScrollObserver::new();
//!
//! // First callback always reports the month.
//! let change = observer.on_scrolled(0, &strip, &dates).unwrap();
//! assert_eq!(change.month_name, "March");
//!
//! // Scrolling within March stays quiet.
//! strip.scroll_by(40.0);
//! assert!(observer.on_scrolled(40, &strip, &dates).is_none());
//!
//! // Scrolling forward until an April date is the last visible cell.
//! strip.scroll_by(40.0);
//! let change = observer.on_scrolled(40, &strip, &dates).unwrap();
//! assert_eq!((change.month_number, change.year), (4, 2024));
//! ```

mod fixed;
mod observer;

pub use fixed::FixedExtentStrip;
pub use observer::{MonthChange, ScrollObserver};

/// Layout queries a [`ScrollObserver`] needs from the host list.
///
/// Positions are indices into the strip's date list. `None` means no item is
/// completely visible, for example while the list is empty or narrower than
/// a single cell.
pub trait VisibleItems {
    /// Index of the first item whose full extent is inside the viewport.
    fn first_completely_visible(&self) -> Option<usize>;

    /// Index of the last item whose full extent is inside the viewport.
    fn last_completely_visible(&self) -> Option<usize>;
}
