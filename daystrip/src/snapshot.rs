// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use daystrip_dates::DateEntry;
use daystrip_selection::SelectionSnapshot;
use serde::{Deserialize, Serialize};

/// Persistable state of a calendar strip.
///
/// Produced by [`CalendarController::save_state`](crate::CalendarController::save_state)
/// and consumed by [`CalendarController::restore_state`](crate::CalendarController::restore_state).
/// The host decides how to encode it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSnapshot {
    /// Selected positions.
    pub selection: SelectionSnapshot,
    /// The date list at the time of saving.
    pub dates: Vec<DateEntry>,
    /// The remembered scroll position.
    pub scroll_position: usize,
}
