// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Daystrip Dates: calendar dates and bounded day ranges.
//!
//! This crate provides the data a single-row calendar strip displays:
//!
//! - [`DateEntry`]: one calendar date (year, month, day) with no time-of-day.
//!   It exposes the label accessors a calendar cell needs (day name, day number,
//!   month name) and the month/year pair used for month-change detection.
//! - [`DateRange`]: builds the ordered list of dates for a strip from a number of
//!   past days, an optional "today", and a number of future days.
//!
//! Calendar arithmetic is limited to day offsets; time zones only matter when
//! asking for the local "today" via [`DateRange::build_today`].
//!
//! ## Minimal example
//!
//! ```rust
//! use daystrip_dates::{DateEntry, DateRange};
//!
//! let today = DateEntry::from_ymd(2024, 3, 15).unwrap();
//! let dates = DateRange::new(2, 2).build(today).unwrap();
//!
//! let labels: Vec<String> = dates.iter().map(ToString::to_string).collect();
//! assert_eq!(
//!     labels,
//!     ["2024-03-13", "2024-03-14", "2024-03-15", "2024-03-16", "2024-03-17"],
//! );
//! assert_eq!(dates[2].month_name(), "March");
//! assert_eq!(dates[2].day_name(), "Friday");
//! ```

mod entry;
mod names;
mod range;

pub use entry::DateEntry;
pub use names::{DAY_NAMES, MONTH_NAMES};
pub use range::{DateRange, RangeError, future_dates, past_dates};
