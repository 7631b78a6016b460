// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single calendar date.

use core::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::names::{DAY_NAMES, MONTH_NAMES, short};

/// A calendar date without time-of-day.
///
/// Entries are immutable values. Within a date list their identity is their
/// position, not the date itself, so the same date may appear more than once.
///
/// Serializes as an ISO 8601 `YYYY-MM-DD` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateEntry(NaiveDate);

impl DateEntry {
    /// Creates a date from year, month (1-12) and day (1-31).
    ///
    /// Returns `None` if the combination does not name a real date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Wraps a [`NaiveDate`].
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying [`NaiveDate`].
    #[must_use]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    /// The calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// The month number, 1 for January through 12 for December.
    #[must_use]
    pub fn month_number(self) -> u32 {
        self.0.month()
    }

    /// The English month name, e.g. `"March"`.
    #[must_use]
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[self.0.month0() as usize]
    }

    /// The three-letter month name, e.g. `"Mar"`.
    #[must_use]
    pub fn month_short_name(self) -> &'static str {
        short(self.month_name())
    }

    /// The day of the month, starting at 1.
    #[must_use]
    pub fn day_number(self) -> u32 {
        self.0.day()
    }

    /// The English weekday name, e.g. `"Friday"`.
    #[must_use]
    pub fn day_name(self) -> &'static str {
        DAY_NAMES[self.0.weekday().num_days_from_monday() as usize]
    }

    /// The three-letter weekday name, e.g. `"Fri"`.
    #[must_use]
    pub fn day_short_name(self) -> &'static str {
        short(self.day_name())
    }

    /// Returns `(month_number, year)`, the pair month-change detection compares.
    #[must_use]
    pub fn month_and_year(self) -> (u32, i32) {
        (self.month_number(), self.year())
    }

    /// Returns the date `days` after this one, or `None` past the calendar's end.
    #[must_use]
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// Returns the date `days` before this one, or `None` before the calendar's start.
    #[must_use]
    pub fn checked_sub_days(self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }
}

impl From<NaiveDate> for DateEntry {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateEntry> for NaiveDate {
    fn from(entry: DateEntry) -> Self {
        entry.0
    }
}

impl fmt::Display for DateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month_number(),
            self.day_number()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> DateEntry {
        DateEntry::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn labels_for_a_known_date() {
        let d = date(2024, 3, 15);
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month_number(), 3);
        assert_eq!(d.month_name(), "March");
        assert_eq!(d.month_short_name(), "Mar");
        assert_eq!(d.day_number(), 15);
        assert_eq!(d.day_name(), "Friday");
        assert_eq!(d.day_short_name(), "Fri");
        assert_eq!(d.month_and_year(), (3, 2024));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(DateEntry::from_ymd(2023, 2, 29), None);
        assert!(DateEntry::from_ymd(2024, 2, 29).is_some(), "2024 is a leap year");
        assert_eq!(DateEntry::from_ymd(2024, 13, 1), None);
    }

    #[test]
    fn day_offsets_cross_month_and_year() {
        assert_eq!(date(2024, 12, 31).checked_add_days(1), Some(date(2025, 1, 1)));
        assert_eq!(date(2024, 3, 1).checked_sub_days(1), Some(date(2024, 2, 29)));
    }

    #[test]
    fn display_is_iso() {
        assert_eq!(date(987, 1, 2).to_string(), "0987-01-02");
    }
}
