// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building the bounded date list shown by a strip.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::DateEntry;

/// Errors produced while building a date range.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// No past days, no future days and no current date: the strip would be empty.
    #[error("date range is empty: no past days, no future days and current date excluded")]
    Empty,
    /// An offset from the reference date falls outside the representable calendar.
    #[error("date {offset} days away from {from} is outside the supported calendar")]
    OutOfCalendar {
        /// The reference date.
        from: DateEntry,
        /// The day offset that could not be represented.
        offset: u64,
    },
}

/// Shape of a strip's date range around a reference date.
///
/// Counts are unsigned, so "negative" inputs cannot be expressed; callers that
/// start from signed values should clamp to zero before constructing a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// Number of dates strictly before the reference date.
    pub past_days: u32,
    /// Number of dates strictly after the reference date.
    pub future_days: u32,
    /// Whether the reference date itself is part of the range.
    pub include_current_date: bool,
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new(0, 30)
    }
}

impl DateRange {
    /// Creates a range with the given past and future counts, including the current date.
    #[must_use]
    pub const fn new(past_days: u32, future_days: u32) -> Self {
        Self {
            past_days,
            future_days,
            include_current_date: true,
        }
    }

    /// Sets whether the reference date is included.
    #[must_use]
    pub const fn with_current_date(mut self, include: bool) -> Self {
        self.include_current_date = include;
        self
    }

    /// Number of dates [`DateRange::build`] produces.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.past_days as usize + self.future_days as usize + self.include_current_date as usize
    }

    /// Returns `true` if the range holds no dates.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds the ascending date list around `today`.
    ///
    /// The result holds `past_days` dates before `today`, then `today` if
    /// included, then `future_days` dates after it, each one day apart.
    ///
    /// # Errors
    ///
    /// - [`RangeError::Empty`] if the range holds no dates.
    /// - [`RangeError::OutOfCalendar`] if an offset leaves the supported calendar.
    pub fn build(&self, today: DateEntry) -> Result<Vec<DateEntry>, RangeError> {
        if self.is_empty() {
            return Err(RangeError::Empty);
        }

        let mut dates = Vec::with_capacity(self.len());
        let mut past = past_dates(today, self.past_days)?;
        past.reverse();
        dates.extend(past);
        if self.include_current_date {
            dates.push(today);
        }
        dates.extend(future_dates(today, self.future_days)?);
        Ok(dates)
    }

    /// Builds the date list around the local calendar date.
    ///
    /// # Errors
    ///
    /// See [`DateRange::build`].
    pub fn build_today(&self) -> Result<Vec<DateEntry>, RangeError> {
        self.build(DateEntry::from(Local::now().date_naive()))
    }
}

/// Returns the `count` dates after `from`, nearest first.
///
/// # Errors
///
/// [`RangeError::OutOfCalendar`] if a date leaves the supported calendar.
pub fn future_dates(from: DateEntry, count: u32) -> Result<Vec<DateEntry>, RangeError> {
    (1..=u64::from(count))
        .map(|offset| {
            from.checked_add_days(offset)
                .ok_or(RangeError::OutOfCalendar { from, offset })
        })
        .collect()
}

/// Returns the `count` dates before `from`, nearest first (descending).
///
/// # Errors
///
/// [`RangeError::OutOfCalendar`] if a date leaves the supported calendar.
pub fn past_dates(from: DateEntry, count: u32) -> Result<Vec<DateEntry>, RangeError> {
    (1..=u64::from(count))
        .map(|offset| {
            from.checked_sub_days(offset)
                .ok_or(RangeError::OutOfCalendar { from, offset })
        })
        .collect()
}
