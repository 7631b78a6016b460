// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection predicates.

bitflags::bitflags! {
    /// Switches controlling what a [`SelectionPolicy`] permits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SelectionFlags: u8 {
        /// More than one key may be selected at a time.
        const MULTI_SELECTION = 0b0000_0001;
        /// Selected keys may be deselected by interaction.
        const DESELECTION     = 0b0000_0010;
        /// A long press starts selection mode. Without it, selection mode is always on.
        const LONG_PRESS      = 0b0000_0100;
    }
}

impl Default for SelectionFlags {
    fn default() -> Self {
        Self::DESELECTION
    }
}

/// The predicate a [`SelectionTracker`](crate::SelectionTracker) consults before changing state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionPolicy {
    flags: SelectionFlags,
}

impl SelectionPolicy {
    /// Creates a policy from flags.
    #[must_use]
    pub const fn new(flags: SelectionFlags) -> Self {
        Self { flags }
    }

    /// The configured flags.
    #[must_use]
    pub const fn flags(&self) -> SelectionFlags {
        self.flags
    }

    /// Whether more than one key may be selected.
    #[must_use]
    pub const fn can_select_multiple(&self) -> bool {
        self.flags.contains(SelectionFlags::MULTI_SELECTION)
    }

    /// Whether selected keys may leave the selection through interaction.
    #[must_use]
    pub const fn can_deselect(&self) -> bool {
        self.flags.contains(SelectionFlags::DESELECTION)
    }

    /// Whether long press gates selection mode.
    #[must_use]
    pub const fn long_press_enabled(&self) -> bool {
        self.flags.contains(SelectionFlags::LONG_PRESS)
    }

    /// Whether `key` may transition to `next_selected`.
    ///
    /// Transitions to selected are always allowed; transitions to unselected
    /// require [`SelectionFlags::DESELECTION`].
    #[must_use]
    pub const fn can_set_state(&self, _key: usize, next_selected: bool) -> bool {
        next_selected || self.can_deselect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_deselection_only() {
        let policy = SelectionPolicy::default();
        assert!(policy.can_deselect(), "deselection is on by default");
        assert!(!policy.can_select_multiple(), "single selection by default");
        assert!(!policy.long_press_enabled(), "long press is off by default");
    }

    #[test]
    fn selecting_is_always_allowed() {
        for flags in [SelectionFlags::empty(), SelectionFlags::all()] {
            let policy = SelectionPolicy::new(flags);
            assert!(policy.can_set_state(7, true), "select allowed for {flags:?}");
        }
    }

    #[test]
    fn deselecting_follows_the_flag() {
        assert!(SelectionPolicy::new(SelectionFlags::DESELECTION).can_set_state(7, false));
        assert!(!SelectionPolicy::new(SelectionFlags::MULTI_SELECTION).can_set_state(7, false));
    }
}
