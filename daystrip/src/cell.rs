// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding dates to cells.

use daystrip_dates::DateEntry;

use crate::{SlotId, ViewBinding};

/// Host-defined identifier of a cell layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ViewType(pub u32);

/// Chooses the cell layout for a date.
///
/// Any `Fn(usize, DateEntry, bool) -> ViewType` closure is a strategy.
pub trait CellViewType {
    /// The layout for the cell at `position` showing `date`.
    fn view_type(&self, position: usize, date: DateEntry, selected: bool) -> ViewType;
}

impl<F> CellViewType for F
where
    F: Fn(usize, DateEntry, bool) -> ViewType,
{
    fn view_type(&self, position: usize, date: DateEntry, selected: bool) -> ViewType {
        self(position, date, selected)
    }
}

/// A strategy that uses one layout for every cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SingleViewType(pub ViewType);

impl CellViewType for SingleViewType {
    fn view_type(&self, _position: usize, _date: DateEntry, _selected: bool) -> ViewType {
        self.0
    }
}

/// Text for one label slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellLabel {
    /// Where the text goes.
    pub slot: SlotId,
    /// The text.
    pub text: String,
}

/// Everything a host needs to draw one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundCell {
    /// Position in the date list.
    pub position: usize,
    /// The date shown.
    pub date: DateEntry,
    /// Whether the date is selected.
    pub selected: bool,
    /// Layout chosen by the installed [`CellViewType`].
    pub view_type: ViewType,
    /// Day, date and month labels, in that order.
    pub labels: [CellLabel; 3],
}

impl BoundCell {
    pub(crate) fn new(
        position: usize,
        date: DateEntry,
        selected: bool,
        view_type: ViewType,
        binding: ViewBinding,
    ) -> Self {
        let label = |slot, text: String| CellLabel { slot, text };
        Self {
            position,
            date,
            selected,
            view_type,
            labels: [
                label(binding.day_label, date.day_short_name().to_owned()),
                label(binding.date_label, date.day_number().to_string()),
                label(binding.month_label, date.month_short_name().to_owned()),
            ],
        }
    }

    /// The text bound to `slot`, if any.
    #[must_use]
    pub fn label(&self, slot: SlotId) -> Option<&str> {
        self.labels
            .iter()
            .find(|label| label.slot == slot)
            .map(|label| label.text.as_str())
    }
}
