// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The authoritative selected set.

use alloc::vec;
use alloc::vec::Vec;

use crate::{SelectionPolicy, SelectionSnapshot};

/// A change reported by a [`SelectionTracker`] mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionEvent {
    /// `key` entered (`selected == true`) or left the selection.
    ItemStateChanged {
        /// The affected key.
        key: usize,
        /// The key's new state.
        selected: bool,
    },
    /// Keys were dropped because they no longer name a cell.
    Refreshed,
    /// The selection was replaced from a [`SelectionSnapshot`].
    Restored,
}

/// Tracks the selected keys of a list under a [`SelectionPolicy`].
///
/// Keys are stored in a small `Vec` in the order they were selected, with
/// uniqueness enforced by scanning. That order is the enumeration order of
/// [`SelectionTracker::keys`]; callers should not assume it is sorted.
///
/// Programmatic and gesture entry points share the policy: [`select`] is
/// always permitted, [`deselect`] is rejected when deselection is disabled.
/// Only [`clear`] and [`retain_below`] bypass the predicate, since they are
/// housekeeping rather than interaction.
///
/// [`select`]: SelectionTracker::select
/// [`deselect`]: SelectionTracker::deselect
/// [`clear`]: SelectionTracker::clear
/// [`retain_below`]: SelectionTracker::retain_below
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    keys: Vec<usize>,
    policy: SelectionPolicy,
    revision: u64,
}

impl SelectionTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub const fn new(policy: SelectionPolicy) -> Self {
        Self {
            keys: Vec::new(),
            policy,
            revision: 0,
        }
    }

    /// The policy in effect.
    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Returns `true` if no key is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Selected keys in enumeration order.
    #[must_use]
    pub fn keys(&self) -> &[usize] {
        &self.keys
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, usize> {
        self.keys.iter()
    }

    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn is_selected(&self, key: usize) -> bool {
        self.keys.contains(&key)
    }

    /// A counter bumped whenever the selected set changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the long-press gesture is currently disabled.
    ///
    /// This holds while nothing is selected and the policy does not enable
    /// long press: selection mode is then kept active so taps select directly.
    #[must_use]
    pub fn long_press_suppressed(&self) -> bool {
        self.keys.is_empty() && !self.policy.long_press_enabled()
    }

    /// Whether a tap currently toggles cells.
    #[must_use]
    pub fn is_selection_mode_active(&self) -> bool {
        !self.keys.is_empty() || self.long_press_suppressed()
    }

    /// Selects `key`.
    ///
    /// Without multi-selection, any other selected key is dropped first; that
    /// drop is part of the single-selection contract and is not subject to
    /// the deselection predicate.
    pub fn select(&mut self, key: usize) -> Vec<SelectionEvent> {
        let mut events = Vec::new();
        self.select_into(key, &mut events);
        events
    }

    /// Deselects `key` if the policy allows it.
    pub fn deselect(&mut self, key: usize) -> Vec<SelectionEvent> {
        let mut events = Vec::new();
        self.deselect_into(key, &mut events);
        events
    }

    /// Selects or deselects every key in `keys`, in order.
    ///
    /// Each key is checked against the policy individually. Without
    /// multi-selection, selecting a batch leaves only its last key selected.
    pub fn set_items_selected<I>(&mut self, keys: I, selected: bool) -> Vec<SelectionEvent>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut events = Vec::new();
        for key in keys {
            if selected {
                self.select_into(key, &mut events);
            } else {
                self.deselect_into(key, &mut events);
            }
        }
        events
    }

    /// Flips `key`, subject to the policy.
    pub fn toggle(&mut self, key: usize) -> Vec<SelectionEvent> {
        if self.is_selected(key) {
            self.deselect(key)
        } else {
            self.select(key)
        }
    }

    /// Handles a tap on `key`.
    ///
    /// Taps toggle only while selection mode is active; otherwise the tap is
    /// not a selection gesture and nothing changes.
    pub fn on_tap(&mut self, key: usize) -> Vec<SelectionEvent> {
        if self.is_selection_mode_active() {
            self.toggle(key)
        } else {
            Vec::new()
        }
    }

    /// Handles a long press on `key`.
    ///
    /// With long press enabled and nothing selected, this starts selection
    /// mode by selecting `key`. In every other case it acts like a tap.
    pub fn on_long_press(&mut self, key: usize) -> Vec<SelectionEvent> {
        if self.policy.long_press_enabled() && self.keys.is_empty() {
            self.select(key)
        } else {
            self.on_tap(key)
        }
    }

    /// Deselects everything, regardless of the deselection flag.
    pub fn clear(&mut self) -> Vec<SelectionEvent> {
        if self.keys.is_empty() {
            return Vec::new();
        }
        let events = self
            .keys
            .drain(..)
            .map(|key| SelectionEvent::ItemStateChanged {
                key,
                selected: false,
            })
            .collect();
        self.bump_revision();
        events
    }

    /// Drops keys `>= len`, which no longer name a cell after the list shrank.
    ///
    /// Reports a single [`SelectionEvent::Refreshed`] if anything was dropped.
    pub fn retain_below(&mut self, len: usize) -> Vec<SelectionEvent> {
        let before = self.keys.len();
        self.keys.retain(|&key| key < len);
        if self.keys.len() == before {
            return Vec::new();
        }
        self.bump_revision();
        vec![SelectionEvent::Refreshed]
    }

    /// Copies the selected keys for persistence.
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            keys: self.keys.clone(),
        }
    }

    /// Replaces the selection with the keys of `snapshot`.
    ///
    /// Duplicate keys are ignored. Without multi-selection only the last key
    /// survives. Reports [`SelectionEvent::Restored`] and no per-item changes.
    pub fn restore(&mut self, snapshot: &SelectionSnapshot) -> Vec<SelectionEvent> {
        let mut keys: Vec<usize> = Vec::with_capacity(snapshot.keys.len());
        for &key in &snapshot.keys {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        if !self.policy.can_select_multiple() && keys.len() > 1 {
            keys.drain(..keys.len() - 1);
        }

        if keys != self.keys {
            self.keys = keys;
            self.bump_revision();
        }
        vec![SelectionEvent::Restored]
    }

    fn select_into(&mut self, key: usize, events: &mut Vec<SelectionEvent>) {
        if self.is_selected(key) || !self.policy.can_set_state(key, true) {
            return;
        }
        if !self.policy.can_select_multiple() {
            events.extend(
                self.keys
                    .drain(..)
                    .map(|old| SelectionEvent::ItemStateChanged {
                        key: old,
                        selected: false,
                    }),
            );
        }
        self.keys.push(key);
        self.bump_revision();
        events.push(SelectionEvent::ItemStateChanged {
            key,
            selected: true,
        });
    }

    fn deselect_into(&mut self, key: usize, events: &mut Vec<SelectionEvent>) {
        let Some(idx) = self.keys.iter().position(|&k| k == key) else {
            return;
        };
        if !self.policy.can_set_state(key, false) {
            return;
        }
        self.keys.remove(idx);
        self.bump_revision();
        events.push(SelectionEvent::ItemStateChanged {
            key,
            selected: false,
        });
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
