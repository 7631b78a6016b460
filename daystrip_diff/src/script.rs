// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edit scripts and their emission from an alignment.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::myers::Step;

/// A single positional edit.
///
/// Positions refer to the list as it stands after all previous edits of the
/// same script have been applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Remove `count` items starting at `at`.
    Remove {
        /// First removed position.
        at: usize,
        /// Number of removed items.
        count: usize,
    },
    /// Insert `count` items at `at`, taken from the new list starting at `new_index`.
    Insert {
        /// Position of the first inserted item.
        at: usize,
        /// Index of the first inserted item in the new list.
        new_index: usize,
        /// Number of inserted items.
        count: usize,
    },
    /// Take the item at `from` out of the list and reinsert it at `to`.
    ///
    /// `to` is a position in the list *after* the item has been taken out.
    Move {
        /// Current position of the item.
        from: usize,
        /// Position after the move.
        to: usize,
    },
}

/// Receives list updates from [`EditScript::dispatch`].
///
/// This mirrors the update callback of a list widget: host adapters implement
/// it to animate insertions/removals and rebind only the affected rows.
pub trait ListUpdateSink {
    /// `count` items were inserted at `at`.
    fn inserted(&mut self, at: usize, count: usize);
    /// `count` items were removed starting at `at`.
    fn removed(&mut self, at: usize, count: usize);
    /// The item at `from` moved to `to`.
    fn moved(&mut self, from: usize, to: usize);
}

/// An ordered sequence of [`Edit`]s produced by [`diff`](crate::diff).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditScript {
    edits: Vec<Edit>,
}

impl EditScript {
    /// Returns `true` if the lists were equal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Number of edits, with runs of adjacent insertions or removals counted once.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// The edits, in application order.
    #[must_use]
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Returns an iterator over the edits.
    pub fn iter(&self) -> core::slice::Iter<'_, Edit> {
        self.edits.iter()
    }

    /// Total number of inserted items.
    #[must_use]
    pub fn inserted_items(&self) -> usize {
        self.edits
            .iter()
            .map(|edit| match edit {
                Edit::Insert { count, .. } => *count,
                _ => 0,
            })
            .sum()
    }

    /// Total number of removed items.
    #[must_use]
    pub fn removed_items(&self) -> usize {
        self.edits
            .iter()
            .map(|edit| match edit {
                Edit::Remove { count, .. } => *count,
                _ => 0,
            })
            .sum()
    }

    /// Number of moved items.
    #[must_use]
    pub fn moved_items(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| matches!(edit, Edit::Move { .. }))
            .count()
    }

    /// Forwards every edit, in order, to `sink`.
    pub fn dispatch<S>(&self, sink: &mut S)
    where
        S: ListUpdateSink + ?Sized,
    {
        for edit in &self.edits {
            match *edit {
                Edit::Remove { at, count } => sink.removed(at, count),
                Edit::Insert { at, count, .. } => sink.inserted(at, count),
                Edit::Move { from, to } => sink.moved(from, to),
            }
        }
    }

    /// Applies the script to `list`, which must equal the old list it was computed from.
    ///
    /// `new` is the list the script was computed against; inserted items are
    /// cloned from it.
    ///
    /// # Panics
    ///
    /// Panics if `list` or `new` do not match the lists passed to [`diff`](crate::diff).
    pub fn apply<T: Clone>(&self, list: &mut Vec<T>, new: &[T]) {
        for edit in &self.edits {
            match *edit {
                Edit::Remove { at, count } => {
                    list.drain(at..at + count);
                }
                Edit::Insert {
                    at,
                    new_index,
                    count,
                } => {
                    let items = new[new_index..new_index + count].iter().cloned();
                    list.splice(at..at, items);
                }
                Edit::Move { from, to } => {
                    let item = list.remove(from);
                    list.insert(to, item);
                }
            }
        }
    }

    fn push_remove(&mut self, at: usize) {
        if let Some(Edit::Remove {
            at: run_at,
            count,
        }) = self.edits.last_mut()
            && *run_at == at + 1
        {
            *run_at = at;
            *count += 1;
            return;
        }
        self.edits.push(Edit::Remove { at, count: 1 });
    }

    fn push_insert(&mut self, at: usize, new_index: usize) {
        if let Some(Edit::Insert {
            at: run_at,
            new_index: run_index,
            count,
        }) = self.edits.last_mut()
            && *run_at + *count == at
            && *run_index + *count == new_index
        {
            *count += 1;
            return;
        }
        self.edits.push(Edit::Insert {
            at,
            new_index,
            count: 1,
        });
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a Edit;
    type IntoIter = core::slice::Iter<'a, Edit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}

/// Where an item of the new list comes from.
#[derive(Copy, Clone)]
enum Source {
    Kept(usize),
    Moved(usize),
    Inserted,
}

/// Turns an alignment into an edit script, pairing equal removed/inserted items into moves.
pub(crate) fn build<T>(old: &[T], new: &[T], steps: &[Step]) -> EditScript
where
    T: Eq + Hash,
{
    // Removed items by value. Most dates occur once, so one inline slot suffices.
    let mut removed: HashMap<&T, SmallVec<[usize; 1]>> = HashMap::new();
    for step in steps {
        if let Step::Delete { old: i } = *step {
            removed.entry(&old[i]).or_default().push(i);
        }
    }

    let mut sources = Vec::with_capacity(new.len());
    for step in steps {
        match *step {
            Step::Keep { old: i, .. } => sources.push(Source::Kept(i)),
            Step::Insert { new: j } => {
                let candidate = removed
                    .get_mut(&new[j])
                    .filter(|bucket| !bucket.is_empty())
                    .map(|bucket| bucket.remove(0));
                match candidate {
                    Some(i) => sources.push(Source::Moved(i)),
                    None => sources.push(Source::Inserted),
                }
            }
            Step::Delete { .. } => {}
        }
    }

    let mut script = EditScript::default();

    // Slots track which old item (or `None` for an inserted one) sits at each position.
    let mut slots: Vec<Option<usize>> = (0..old.len()).map(Some).collect();

    // Plain removals go first, back to front, so positions equal old indices.
    let mut dropped: Vec<usize> = removed.into_values().flatten().collect();
    dropped.sort_unstable_by(|a, b| b.cmp(a));
    for i in dropped {
        slots.remove(i);
        script.push_remove(i);
    }

    // Everything before `cursor` is in its final relative order.
    let mut cursor = 0;
    for (j, source) in sources.into_iter().enumerate() {
        match source {
            Source::Inserted => {
                slots.insert(cursor, None);
                script.push_insert(cursor, j);
                cursor += 1;
            }
            Source::Kept(i) => {
                if let Some(p) = position(&slots, i) {
                    cursor = p + 1;
                }
            }
            Source::Moved(i) => {
                if let Some(from) = position(&slots, i) {
                    if from == cursor {
                        cursor += 1;
                        continue;
                    }
                    slots.remove(from);
                    if from < cursor {
                        cursor -= 1;
                    }
                    slots.insert(cursor, Some(i));
                    script.edits.push(Edit::Move { from, to: cursor });
                    cursor += 1;
                }
            }
        }
    }
    debug_assert_eq!(slots.len(), new.len(), "script must produce the new length");

    script
}

fn position(slots: &[Option<usize>], old_index: usize) -> Option<usize> {
    slots.iter().position(|slot| *slot == Some(old_index))
}
