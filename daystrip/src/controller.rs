// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The orchestrating controller.

use core::fmt;

use daystrip_dates::DateEntry;
use daystrip_diff::{EditScript, diff};
use daystrip_scroll::{MonthChange, ScrollObserver};
use daystrip_selection::{SelectionEvent, SelectionPolicy, SelectionTracker};
use tracing::{debug, trace};

use crate::{
    BoundCell, CalendarChangesObserver, CalendarConfig, CalendarError, CalendarSnapshot,
    CellViewType, SingleViewType, StripHost,
};

/// Drives a single-row calendar strip displayed by a [`StripHost`].
///
/// The controller owns the date list, the selection and the scroll state.
/// Hosts forward gestures ([`on_item_tapped`], [`on_item_long_pressed`]) and
/// scroll callbacks ([`on_scrolled`]); applications use the selection API and
/// [`change_dates`]. Semantic events go to the single installed
/// [`CalendarChangesObserver`].
///
/// Observers receive values, never the controller itself, so they cannot
/// re-enter it while an event is being delivered.
///
/// [`on_item_tapped`]: CalendarController::on_item_tapped
/// [`on_item_long_pressed`]: CalendarController::on_item_long_pressed
/// [`on_scrolled`]: CalendarController::on_scrolled
/// [`change_dates`]: CalendarController::change_dates
pub struct CalendarController<H> {
    config: CalendarConfig,
    host: H,
    dates: Vec<DateEntry>,
    selection: SelectionTracker,
    scroll: ScrollObserver,
    observer: Option<Box<dyn CalendarChangesObserver>>,
    view_type: Box<dyn CellViewType>,
    restored_position: Option<usize>,
    attached: bool,
}

impl<H: fmt::Debug> fmt::Debug for CalendarController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarController")
            .field("config", &self.config)
            .field("host", &self.host)
            .field("dates", &self.dates.len())
            .field("selection", &self.selection)
            .field("scroll", &self.scroll)
            .field("restored_position", &self.restored_position)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl<H: StripHost> CalendarController<H> {
    /// Creates a controller. Nothing is shown until [`initialize`](Self::initialize).
    pub fn new(config: CalendarConfig, host: H) -> Self {
        let selection = SelectionTracker::new(SelectionPolicy::new(config.selection_flags()));
        Self {
            config,
            host,
            dates: Vec::new(),
            selection,
            scroll: ScrollObserver::new(),
            observer: None,
            view_type: Box::new(SingleViewType::default()),
            restored_position: None,
            attached: false,
        }
    }

    /// Installs the strategy choosing cell layouts.
    #[must_use]
    pub fn with_view_type(mut self, view_type: impl CellViewType + 'static) -> Self {
        self.view_type = Box::new(view_type);
        self
    }

    /// The configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// The host list.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host list.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The current date list.
    pub fn dates(&self) -> &[DateEntry] {
        &self.dates
    }

    /// Whether [`initialize`](Self::initialize) has attached the host.
    pub fn is_initialized(&self) -> bool {
        self.attached
    }

    /// The remembered scroll position.
    pub fn scroll_position(&self) -> usize {
        self.scroll.scroll_position()
    }

    /// Whether long-press selection is currently suppressed.
    pub fn long_press_suppressed(&self) -> bool {
        self.selection.long_press_suppressed()
    }

    /// Builds the date list around the local date and attaches the host.
    ///
    /// # Errors
    ///
    /// See [`initialize_at`](Self::initialize_at).
    pub fn initialize(&mut self) -> Result<(), CalendarError> {
        if self.dates.is_empty() {
            self.dates = self.config.date_range().build_today()?;
        }
        self.attach()
    }

    /// Builds the date list around `today` and attaches the host.
    ///
    /// An existing date list (from [`restore_state`](Self::restore_state) or
    /// [`change_dates`](Self::change_dates)) is kept. The host is told the
    /// cell count and scrolled to the configured initial position. Without an
    /// explicit [`initial_position_index`](CalendarConfig::initial_position_index)
    /// that is the past day count, clamped to the last date.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::Range`] if the configured range is empty.
    /// - [`CalendarError::IndexOutOfRange`] if an explicit initial position is
    ///   past the list.
    pub fn initialize_at(&mut self, today: DateEntry) -> Result<(), CalendarError> {
        if self.dates.is_empty() {
            self.dates = self.config.date_range().build(today)?;
        }
        self.attach()
    }

    fn attach(&mut self) -> Result<(), CalendarError> {
        let position = if let Some(restored) = self.restored_position.take() {
            self.scroll.set_scroll_position(restored);
            self.scroll
                .clamp_scroll_position(self.dates.len())
                .ok_or(CalendarError::EmptyDateList)?
        } else {
            if let Some(explicit) = self.config.initial_position_index {
                self.check(explicit)?;
            }
            // The past day count points one past the end of a past-only strip.
            self.scroll.set_scroll_position(self.config.initial_position());
            self.scroll
                .clamp_scroll_position(self.dates.len())
                .ok_or(CalendarError::EmptyDateList)?
        };
        let events = self.selection.retain_below(self.dates.len());
        self.deliver_all(events);

        self.host.set_item_count(self.dates.len());
        self.host.scroll_to_position(position);
        self.attached = true;
        debug!(
            len = self.dates.len(),
            position,
            long_press_suppressed = self.selection.long_press_suppressed(),
            "calendar strip initialized"
        );
        Ok(())
    }

    /// Installs the observer, replacing any previous one.
    pub fn set_calendar_changes_observer(
        &mut self,
        observer: impl CalendarChangesObserver + 'static,
    ) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes and returns the installed observer.
    pub fn take_calendar_changes_observer(&mut self) -> Option<Box<dyn CalendarChangesObserver>> {
        self.observer.take()
    }

    /// Handles a scroll callback from the host.
    ///
    /// The raw delta is always forwarded. A month change is reported only when
    /// the leading edge crosses into another month or year.
    pub fn on_scrolled(&mut self, dx: i32, dy: i32) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_calendar_scrolled(dx, dy);
        }
        if let Some(change) = self.scroll.on_scrolled(dx, &self.host, &self.dates) {
            trace!(month = change.month_number, year = change.year, "month changed");
            if let Some(observer) = self.observer.as_mut() {
                observer.on_month_and_year_changed(&change);
            }
        }
    }

    /// Handles a tap on the cell at `position`.
    ///
    /// # Errors
    ///
    /// [`CalendarError::IndexOutOfRange`] if `position` is not a cell.
    pub fn on_item_tapped(&mut self, position: usize) -> Result<(), CalendarError> {
        self.check(position)?;
        let events = self.selection.on_tap(position);
        self.deliver(position, events);
        Ok(())
    }

    /// Handles a long press on the cell at `position`.
    ///
    /// # Errors
    ///
    /// [`CalendarError::IndexOutOfRange`] if `position` is not a cell.
    pub fn on_item_long_pressed(&mut self, position: usize) -> Result<(), CalendarError> {
        self.check(position)?;
        let events = self.selection.on_long_press(position);
        self.deliver(position, events);
        Ok(())
    }

    /// Selects the date at `position`.
    ///
    /// # Errors
    ///
    /// [`CalendarError::IndexOutOfRange`] if `position` is not a cell.
    pub fn select(&mut self, position: usize) -> Result<(), CalendarError> {
        self.check(position)?;
        let events = self.selection.select(position);
        self.deliver(position, events);
        Ok(())
    }

    /// Deselects the date at `position`, unless deselection is disabled.
    ///
    /// # Errors
    ///
    /// [`CalendarError::IndexOutOfRange`] if `position` is not a cell.
    pub fn deselect(&mut self, position: usize) -> Result<(), CalendarError> {
        self.check(position)?;
        let events = self.selection.deselect(position);
        self.deliver(position, events);
        Ok(())
    }

    /// Selects or deselects every position in `positions`.
    ///
    /// All positions are validated before anything changes.
    ///
    /// # Errors
    ///
    /// [`CalendarError::IndexOutOfRange`] for the first position that is not a cell.
    pub fn set_items_selected(
        &mut self,
        positions: &[usize],
        selected: bool,
    ) -> Result<(), CalendarError> {
        for &position in positions {
            self.check(position)?;
        }
        let events = self
            .selection
            .set_items_selected(positions.iter().copied(), selected);
        self.deliver_all(events);
        Ok(())
    }

    /// Whether the date at `position` is selected.
    ///
    /// # Errors
    ///
    /// [`CalendarError::IndexOutOfRange`] if `position` is not a cell.
    pub fn is_selected(&self, position: usize) -> Result<bool, CalendarError> {
        self.check(position)?;
        Ok(self.selection.is_selected(position))
    }

    /// Deselects everything, regardless of the deselection setting.
    ///
    /// With long press disabled, selection mode stays active afterwards.
    pub fn clear_selection(&mut self) {
        let events = self.selection.clear();
        self.deliver_all(events);
    }

    /// Whether at least one date is selected.
    pub fn has_selection(&self) -> bool {
        !self.selected_indexes().is_empty()
    }

    /// Selected positions, in selection order.
    pub fn selected_indexes(&self) -> Vec<usize> {
        self.selection
            .iter()
            .copied()
            .filter(|&key| key < self.dates.len())
            .collect()
    }

    /// Selected dates, in selection order.
    pub fn selected_dates(&self) -> Vec<DateEntry> {
        self.selection
            .iter()
            .filter_map(|&key| self.dates.get(key).copied())
            .collect()
    }

    /// Replaces the date list.
    ///
    /// The host receives the minimal edit script between the old and new
    /// lists. Selected positions past the new end are dropped. The remembered
    /// scroll position is clamped into the new list, scrolled to, and its
    /// month is reported even if it did not change.
    ///
    /// # Errors
    ///
    /// [`CalendarError::EmptyDateList`] if `dates` is empty; nothing changes.
    pub fn change_dates(&mut self, dates: Vec<DateEntry>) -> Result<EditScript, CalendarError> {
        if dates.is_empty() {
            return Err(CalendarError::EmptyDateList);
        }

        let script = diff(&self.dates, &dates);
        self.dates = dates;
        if self.attached {
            script.dispatch(&mut self.host);
        }
        debug!(
            len = self.dates.len(),
            inserted = script.inserted_items(),
            removed = script.removed_items(),
            moved = script.moved_items(),
            "date list replaced"
        );

        let events = self.selection.retain_below(self.dates.len());
        if !events.is_empty() {
            debug!(len = self.dates.len(), "dropped selected positions past the end");
        }
        self.deliver_all(events);

        let position = self
            .scroll
            .clamp_scroll_position(self.dates.len())
            .ok_or(CalendarError::EmptyDateList)?;
        if self.attached {
            self.host.scroll_to_position(position);
        }
        let date = self.dates[position];
        self.scroll.mark_reported(date);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_month_and_year_changed(&MonthChange::from(date));
        }
        Ok(script)
    }

    /// Copies the state a host should persist.
    pub fn save_state(&self) -> CalendarSnapshot {
        CalendarSnapshot {
            selection: self.selection.snapshot(),
            dates: self.dates.clone(),
            scroll_position: self.scroll.scroll_position(),
        }
    }

    /// Restores state saved by [`save_state`](Self::save_state).
    ///
    /// Before [`initialize`](Self::initialize), a non-empty saved date list
    /// becomes the strip's list and the saved scroll position replaces the
    /// configured initial position; afterwards the list is only changed
    /// through [`change_dates`](Self::change_dates). Restored positions past
    /// the end of the list are dropped.
    pub fn restore_state(&mut self, snapshot: &CalendarSnapshot) {
        if !self.attached && !snapshot.dates.is_empty() {
            self.dates.clone_from(&snapshot.dates);
        }

        let previous: Vec<usize> = self.selection.keys().to_vec();
        let mut events = self.selection.restore(&snapshot.selection);
        if !self.dates.is_empty() {
            let pruned = self.selection.retain_below(self.dates.len());
            events.extend(pruned);
        }
        if self.attached {
            for &key in previous.iter().chain(self.selection.keys()) {
                if key < self.dates.len() {
                    self.host.notify_item_changed(key);
                }
            }
        }

        self.scroll.set_scroll_position(snapshot.scroll_position);
        if !self.attached {
            self.restored_position = Some(snapshot.scroll_position);
        } else if let Some(position) = self.scroll.clamp_scroll_position(self.dates.len()) {
            self.host.scroll_to_position(position);
        }
        debug!(selected = self.selection.len(), "calendar state restored");
        self.deliver_all(events);
    }

    /// Binds the cell at `position` for display.
    ///
    /// # Errors
    ///
    /// [`CalendarError::IndexOutOfRange`] if `position` is not a cell.
    pub fn bind_cell(&self, position: usize) -> Result<BoundCell, CalendarError> {
        self.check(position)?;
        let date = self.dates[position];
        let selected = self.selection.is_selected(position);
        let view_type = self.view_type.view_type(position, date, selected);
        Ok(BoundCell::new(
            position,
            date,
            selected,
            view_type,
            self.config.view_binding,
        ))
    }

    fn check(&self, position: usize) -> Result<(), CalendarError> {
        if position < self.dates.len() {
            Ok(())
        } else {
            Err(CalendarError::IndexOutOfRange {
                position,
                len: self.dates.len(),
            })
        }
    }

    /// Delivers events of a gesture or call targeting `position`, logging rejections.
    fn deliver(&mut self, position: usize, events: Vec<SelectionEvent>) {
        if events.is_empty() {
            trace!(position, "selection unchanged");
        }
        self.deliver_all(events);
    }

    fn deliver_all(&mut self, events: Vec<SelectionEvent>) {
        for event in events {
            match event {
                SelectionEvent::ItemStateChanged { key, selected } => {
                    let Some(date) = self.dates.get(key).copied() else {
                        continue;
                    };
                    if self.attached {
                        self.host.notify_item_changed(key);
                    }
                    if let Some(observer) = self.observer.as_mut() {
                        observer.on_selection_changed(selected, key, date);
                    }
                }
                SelectionEvent::Refreshed => {
                    if let Some(observer) = self.observer.as_mut() {
                        observer.on_selection_refreshed();
                    }
                }
                SelectionEvent::Restored => {
                    if let Some(observer) = self.observer.as_mut() {
                        observer.on_selection_restored();
                    }
                }
            }
        }
    }
}
