// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use daystrip_dates::DateRange;
use daystrip_selection::SelectionFlags;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a label slot in the host's cell layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub u32);

/// Which host slots receive the day, date and month labels of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewBinding {
    /// Slot for the weekday label, e.g. `"Fri"`.
    pub day_label: SlotId,
    /// Slot for the day-of-month label, e.g. `"15"`.
    pub date_label: SlotId,
    /// Slot for the month label, e.g. `"Mar"`.
    pub month_label: SlotId,
}

/// Configuration of a [`CalendarController`](crate::CalendarController).
///
/// Fixed once the controller is constructed. Missing fields take the defaults
/// documented on each field when deserializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Days shown before today. Default `0`.
    pub past_days_count: u32,
    /// Days shown after today. Default `30`.
    pub future_days_count: u32,
    /// Whether today is shown. Default `true`.
    pub include_current_date: bool,
    /// Position scrolled to on initialization. Default: `past_days_count`,
    /// clamped to the last date.
    pub initial_position_index: Option<usize>,
    /// Whether several dates can be selected. Default `false`.
    pub multi_selection: bool,
    /// Whether a selected date can be deselected by interaction. Default `true`.
    pub deselection: bool,
    /// Whether selection mode starts with a long press. Default `false`.
    pub long_press: bool,
    /// Label slots for cell binding.
    pub view_binding: ViewBinding,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            past_days_count: 0,
            future_days_count: 30,
            include_current_date: true,
            initial_position_index: None,
            multi_selection: false,
            deselection: true,
            long_press: false,
            view_binding: ViewBinding::default(),
        }
    }
}

impl CalendarConfig {
    /// Sets the number of past days.
    #[must_use]
    pub fn with_past_days(mut self, count: u32) -> Self {
        self.past_days_count = count;
        self
    }

    /// Sets the number of future days.
    #[must_use]
    pub fn with_future_days(mut self, count: u32) -> Self {
        self.future_days_count = count;
        self
    }

    /// Sets whether today is shown.
    #[must_use]
    pub fn with_current_date(mut self, include: bool) -> Self {
        self.include_current_date = include;
        self
    }

    /// Sets the position scrolled to on initialization.
    #[must_use]
    pub fn with_initial_position(mut self, position: usize) -> Self {
        self.initial_position_index = Some(position);
        self
    }

    /// Enables or disables multi-selection.
    #[must_use]
    pub fn with_multi_selection(mut self, enabled: bool) -> Self {
        self.multi_selection = enabled;
        self
    }

    /// Enables or disables deselection.
    #[must_use]
    pub fn with_deselection(mut self, enabled: bool) -> Self {
        self.deselection = enabled;
        self
    }

    /// Enables or disables long press to start selection.
    #[must_use]
    pub fn with_long_press(mut self, enabled: bool) -> Self {
        self.long_press = enabled;
        self
    }

    /// Sets the label slots.
    #[must_use]
    pub fn with_view_binding(mut self, binding: ViewBinding) -> Self {
        self.view_binding = binding;
        self
    }

    /// The date range described by the day counts.
    #[must_use]
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.past_days_count, self.future_days_count)
            .with_current_date(self.include_current_date)
    }

    /// The initial position, falling back to the number of past days.
    #[must_use]
    pub fn initial_position(&self) -> usize {
        self.initial_position_index
            .unwrap_or(self.past_days_count as usize)
    }

    /// The selection policy flags described by the boolean switches.
    #[must_use]
    pub fn selection_flags(&self) -> SelectionFlags {
        let mut flags = SelectionFlags::empty();
        flags.set(SelectionFlags::MULTI_SELECTION, self.multi_selection);
        flags.set(SelectionFlags::DESELECTION, self.deselection);
        flags.set(SelectionFlags::LONG_PRESS, self.long_press);
        flags
    }
}
