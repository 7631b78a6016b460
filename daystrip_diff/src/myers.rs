// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Myers' O(ND) shortest edit search, in its linear-space form.

use alloc::vec;
use alloc::vec::Vec;
use core::hash::Hash;
use core::ops::Range;

use hashbrown::HashSet;

/// One step of an alignment between two lists, using absolute indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// `old[old]` and `new[new]` are the same item.
    Keep { old: usize, new: usize },
    /// `old[old]` does not survive.
    Delete { old: usize },
    /// `new[new]` has no counterpart in the old list.
    Insert { new: usize },
}

/// Aligns `old` with `new` using as few deletions and insertions as possible.
///
/// Steps come out in list order.
pub(crate) fn align<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<Step> {
    let mut steps = Vec::with_capacity(old.len().max(new.len()));
    let old_range = 0..old.len();
    let new_range = 0..new.len();

    // Full replacements are common when a strip jumps far ahead; they need no search.
    let old_items: HashSet<&T> = old.iter().collect();
    if !new.iter().any(|item| old_items.contains(item)) {
        replace(old_range, new_range, &mut steps);
        return steps;
    }

    let max_d = max_d(old.len(), new.len());
    let mut forward = Frontier::new(max_d);
    let mut backward = Frontier::new(max_d);
    conquer(
        old,
        old_range,
        new,
        new_range,
        &mut forward,
        &mut backward,
        &mut steps,
    );
    steps
}

/// Furthest x reached per diagonal k = x - y, for diagonals in `-max_d..max_d`.
struct Frontier {
    offset: isize,
    v: Vec<isize>,
}

impl Frontier {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            v: vec![0; 2 * max_d],
        }
    }

    fn get(&self, k: isize) -> isize {
        self.v[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, x: isize) {
        self.v[(k + self.offset) as usize] = x;
    }
}

fn max_d(old_len: usize, new_len: usize) -> usize {
    old_len.div_ceil(2) + new_len.div_ceil(2) + 1
}

/// Emits every old item as deleted, then every new item as inserted.
fn replace(old: Range<usize>, new: Range<usize>, steps: &mut Vec<Step>) {
    steps.extend(old.map(|old| Step::Delete { old }));
    steps.extend(new.map(|new| Step::Insert { new }));
}

fn conquer<T: PartialEq>(
    old: &[T],
    mut old_range: Range<usize>,
    new: &[T],
    mut new_range: Range<usize>,
    forward: &mut Frontier,
    backward: &mut Frontier,
    steps: &mut Vec<Step>,
) {
    let prefix = common_prefix(&old[old_range.clone()], &new[new_range.clone()]);
    steps.extend((0..prefix).map(|i| Step::Keep {
        old: old_range.start + i,
        new: new_range.start + i,
    }));
    old_range.start += prefix;
    new_range.start += prefix;

    let suffix = common_suffix(&old[old_range.clone()], &new[new_range.clone()]);
    old_range.end -= suffix;
    new_range.end -= suffix;
    let (old_end, new_end) = (old_range.end, new_range.end);
    let suffix_keeps = (0..suffix).map(move |i| Step::Keep {
        old: old_end + i,
        new: new_end + i,
    });

    if old_range.is_empty() || new_range.is_empty() {
        replace(old_range, new_range, steps);
    } else if let Some((x, y)) = middle_snake(
        old,
        old_range.clone(),
        new,
        new_range.clone(),
        forward,
        backward,
    ) {
        conquer(
            old,
            old_range.start..x,
            new,
            new_range.start..y,
            forward,
            backward,
            steps,
        );
        conquer(
            old,
            x..old_range.end,
            new,
            y..new_range.end,
            forward,
            backward,
            steps,
        );
    } else {
        replace(old_range, new_range, steps);
    }

    steps.extend(suffix_keeps);
}

/// Finds where a shortest path crosses the middle, searching from both ends.
///
/// Returns absolute `(old, new)` indices splitting the problem in two, or
/// `None` if the frontiers never meet.
fn middle_snake<T: PartialEq>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
    forward: &mut Frontier,
    backward: &mut Frontier,
) -> Option<(usize, usize)> {
    let a = &old[old_range.clone()];
    let b = &new[new_range.clone()];
    let n = a.len() as isize;
    let m = b.len() as isize;
    let delta = n - m;
    let odd = delta & 1 == 1;
    forward.set(1, 0);
    backward.set(1, 0);

    for d in 0..max_d(a.len(), b.len()) as isize {
        let mut k = d;
        while k >= -d {
            let mut x = if k == -d || (k != d && forward.get(k - 1) < forward.get(k + 1)) {
                forward.get(k + 1)
            } else {
                forward.get(k - 1) + 1
            };
            let y = x - k;
            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix(&a[x as usize..], &b[y as usize..]) as isize;
            }
            forward.set(k, x);
            if odd && (k - delta).abs() < d && x + backward.get(delta - k) >= n {
                return Some((
                    old_range.start + x0 as usize,
                    new_range.start + y0 as usize,
                ));
            }
            k -= 2;
        }

        let mut k = d;
        while k >= -d {
            let mut x = if k == -d || (k != d && backward.get(k - 1) < backward.get(k + 1)) {
                backward.get(k + 1)
            } else {
                backward.get(k - 1) + 1
            };
            let mut y = x - k;
            if x < n && y < m {
                let run = common_suffix(&a[..(n - x) as usize], &b[..(m - y) as usize]) as isize;
                x += run;
                y += run;
            }
            backward.set(k, x);
            if !odd && (k - delta).abs() <= d && x + forward.get(delta - k) >= n {
                return Some((
                    old_range.start + (n - x) as usize,
                    new_range.start + (m - y) as usize,
                ));
            }
            k -= 2;
        }
    }

    None
}

fn common_prefix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(a, b)| a == b).count()
}

fn common_suffix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(steps: &[Step]) -> (usize, usize, usize) {
        let keeps = steps.iter().filter(|s| matches!(s, Step::Keep { .. })).count();
        let deletes = steps.iter().filter(|s| matches!(s, Step::Delete { .. })).count();
        let inserts = steps.iter().filter(|s| matches!(s, Step::Insert { .. })).count();
        (keeps, deletes, inserts)
    }

    #[test]
    fn identical_lists_are_all_keeps() {
        let steps = align(&[1, 2, 3], &[1, 2, 3]);
        assert_eq!(counts(&steps), (3, 0, 0));
    }

    #[test]
    fn classic_example_has_edit_distance_five() {
        // ABCABBA -> CBABAC, the textbook example with D = 5.
        let a = ['A', 'B', 'C', 'A', 'B', 'B', 'A'];
        let b = ['C', 'B', 'A', 'B', 'A', 'C'];
        let steps = align(&a, &b);
        let (keeps, deletes, inserts) = counts(&steps);
        assert_eq!(deletes + inserts, 5);
        assert_eq!(keeps, 4);
    }

    #[test]
    fn steps_walk_both_lists_in_order() {
        let a = [1, 5, 2, 7, 3];
        let b = [9, 1, 2, 3, 8, 7];
        let steps = align(&a, &b);

        let mut next_old = 0;
        let mut next_new = 0;
        for step in &steps {
            match *step {
                Step::Keep { old, new } => {
                    assert_eq!((old, new), (next_old, next_new));
                    assert_eq!(a[old], b[new]);
                    next_old += 1;
                    next_new += 1;
                }
                Step::Delete { old } => {
                    assert_eq!(old, next_old);
                    next_old += 1;
                }
                Step::Insert { new } => {
                    assert_eq!(new, next_new);
                    next_new += 1;
                }
            }
        }
        assert_eq!((next_old, next_new), (a.len(), b.len()));
    }

    #[test]
    fn disjoint_lists_delete_then_insert() {
        assert_eq!(
            align(&[1, 2], &[3, 4]),
            [
                Step::Delete { old: 0 },
                Step::Delete { old: 1 },
                Step::Insert { new: 0 },
                Step::Insert { new: 1 },
            ]
        );
    }

    #[test]
    fn split_search_keeps_interior_matches() {
        // No common prefix or suffix, so the match in the middle comes from the search.
        let steps = align(&[1, 2, 3, 4, 5], &[6, 2, 3, 4, 7]);
        assert_eq!(counts(&steps), (3, 2, 2));
        assert!(
            steps.contains(&Step::Keep { old: 2, new: 2 }),
            "middle item kept: {steps:?}"
        );
    }

    #[test]
    fn one_side_empty() {
        assert_eq!(counts(&align::<u8>(&[], &[1, 2])), (0, 0, 2));
        assert_eq!(counts(&align::<u8>(&[1, 2], &[])), (0, 2, 0));
        assert!(align::<u8>(&[], &[]).is_empty(), "nothing to align");
    }
}
