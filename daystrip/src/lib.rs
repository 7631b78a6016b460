// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=daystrip --heading-base-level=0

//! Daystrip: a single-row, horizontally scrolling calendar strip.
//!
//! The strip shows a contiguous window of dates around today. Users scroll it
//! sideways and select dates; the application is told when the month at the
//! leading edge changes and when the selection changes. This crate is the
//! controller tying the pieces together:
//!
//! - [`CalendarConfig`]: the range of days, the selection switches and the
//!   label slots, fixed at construction.
//! - [`CalendarController`]: owns the date list, the selection and the scroll
//!   state, and drives a host list through [`StripHost`].
//! - [`CalendarChangesObserver`]: the single sink for semantic events.
//!   [`EventLog`] is a recording implementation.
//! - [`HeadlessHost`]: a [`StripHost`] for uniformly sized cells without a
//!   widget toolkit, used by headless embedders and tests.
//!
//! The building blocks live in their own crates: `daystrip_dates` for date
//! values and ranges, `daystrip_diff` for edit scripts between date lists,
//! `daystrip_selection` for selection bookkeeping and `daystrip_scroll` for
//! month tracking.
//!
//! ## Minimal example
//!
//! ```rust
//! use daystrip::{
//!     CalendarConfig, CalendarController, CalendarEvent, DateEntry, EventLog, HeadlessHost,
//! };
//!
//! let config = CalendarConfig::default().with_past_days(2).with_future_days(2);
//! let mut calendar = CalendarController::new(config, HeadlessHost::new(40.0, 120.0));
//! let log = EventLog::new();
//! calendar.set_calendar_changes_observer(log.clone());
//!
//! let today = DateEntry::from_ymd(2024, 3, 15).unwrap();
//! calendar.initialize_at(today).unwrap();
//! assert_eq!(calendar.dates().len(), 5);
//!
//! // Long press is off, so a plain tap selects.
//! calendar.on_item_tapped(0).unwrap();
//! assert_eq!(calendar.selected_dates(), vec![DateEntry::from_ymd(2024, 3, 13).unwrap()]);
//! assert!(matches!(
//!     log.take().as_slice(),
//!     [CalendarEvent::SelectionChanged { selected: true, position: 0, .. }],
//! ));
//! ```

mod cell;
mod config;
mod controller;
mod error;
mod host;
mod observer;
mod snapshot;

pub use cell::{BoundCell, CellLabel, CellViewType, SingleViewType, ViewType};
pub use config::{CalendarConfig, SlotId, ViewBinding};
pub use controller::CalendarController;
pub use error::CalendarError;
pub use host::{HeadlessHost, StripHost};
pub use observer::{CalendarChangesObserver, CalendarEvent, EventLog};
pub use snapshot::CalendarSnapshot;

pub use daystrip_dates::{DateEntry, DateRange, RangeError};
pub use daystrip_diff::{Edit, EditScript, ListUpdateSink};
pub use daystrip_scroll::{MonthChange, VisibleItems};
pub use daystrip_selection::SelectionSnapshot;
