// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing event sink.

use std::cell::RefCell;
use std::rc::Rc;

use daystrip_dates::DateEntry;
use daystrip_scroll::MonthChange;

/// Receives the semantic events of a calendar strip.
///
/// All methods default to doing nothing, so implementors only override what
/// they care about. Events are delivered synchronously, in input order, from
/// inside the controller call that caused them.
pub trait CalendarChangesObserver {
    /// Every raw scroll delta, without de-duplication.
    fn on_calendar_scrolled(&mut self, _dx: i32, _dy: i32) {}

    /// The month/year at the leading edge changed, or the date list was replaced.
    fn on_month_and_year_changed(&mut self, _change: &MonthChange) {}

    /// A date entered (`selected == true`) or left the selection.
    fn on_selection_changed(&mut self, _selected: bool, _position: usize, _date: DateEntry) {}

    /// Selected positions were dropped because the date list shrank.
    fn on_selection_refreshed(&mut self) {}

    /// The selection was restored from a snapshot.
    fn on_selection_restored(&mut self) {}
}

/// One observed event, as recorded by [`EventLog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarEvent {
    /// See [`CalendarChangesObserver::on_calendar_scrolled`].
    Scrolled {
        /// Horizontal delta.
        dx: i32,
        /// Vertical delta.
        dy: i32,
    },
    /// See [`CalendarChangesObserver::on_month_and_year_changed`].
    MonthChanged(MonthChange),
    /// See [`CalendarChangesObserver::on_selection_changed`].
    SelectionChanged {
        /// New state of the date.
        selected: bool,
        /// Position of the date.
        position: usize,
        /// The date.
        date: DateEntry,
    },
    /// See [`CalendarChangesObserver::on_selection_refreshed`].
    SelectionRefreshed,
    /// See [`CalendarChangesObserver::on_selection_restored`].
    SelectionRestored,
}

/// An observer that records events for later inspection.
///
/// Clones share the same log, so a host can install one clone and keep
/// another to drain events from.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<CalendarEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<CalendarEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns the recorded events.
    pub fn take(&self) -> Vec<CalendarEvent> {
        self.events.take()
    }

    fn push(&self, event: CalendarEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl CalendarChangesObserver for EventLog {
    fn on_calendar_scrolled(&mut self, dx: i32, dy: i32) {
        self.push(CalendarEvent::Scrolled { dx, dy });
    }

    fn on_month_and_year_changed(&mut self, change: &MonthChange) {
        self.push(CalendarEvent::MonthChanged(*change));
    }

    fn on_selection_changed(&mut self, selected: bool, position: usize, date: DateEntry) {
        self.push(CalendarEvent::SelectionChanged {
            selected,
            position,
            date,
        });
    }

    fn on_selection_refreshed(&mut self) {
        self.push(CalendarEvent::SelectionRefreshed);
    }

    fn on_selection_restored(&mut self) {
        self.push(CalendarEvent::SelectionRestored);
    }
}
