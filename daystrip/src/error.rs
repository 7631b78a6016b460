// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use daystrip_dates::RangeError;

/// Errors reported by [`CalendarController`](crate::CalendarController).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A position does not name a cell of the current date list.
    #[error("position {position} is out of range for a strip of {len} dates")]
    IndexOutOfRange {
        /// The rejected position.
        position: usize,
        /// Length of the date list at the time.
        len: usize,
    },
    /// The configured range yields no dates, or leaves the calendar.
    #[error(transparent)]
    Range(#[from] RangeError),
    /// `change_dates` was given an empty list.
    #[error("a calendar strip needs at least one date")]
    EmptyDateList,
}
