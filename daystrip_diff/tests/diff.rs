// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `daystrip_diff` crate.
//!
//! These focus on the shapes of date-list replacement a strip sees in practice:
//! sliding windows, full replacements and no-op updates.

use daystrip_dates::{DateEntry, DateRange};
use daystrip_diff::{Edit, EditScript, ListUpdateSink, diff};

fn days(start: (i32, u32, u32), len: u32) -> Vec<DateEntry> {
    let first = DateEntry::from_ymd(start.0, start.1, start.2).unwrap();
    DateRange::new(0, len - 1).build(first).unwrap()
}

fn assert_applies(old: &[DateEntry], new: &[DateEntry], script: &EditScript) {
    let mut mirror = old.to_vec();
    script.apply(&mut mirror, new);
    assert_eq!(mirror, new, "applying {script:?} must yield the new list");
}

#[derive(Debug, Default, PartialEq)]
struct Recorder(Vec<String>);

impl ListUpdateSink for Recorder {
    fn inserted(&mut self, at: usize, count: usize) {
        self.0.push(format!("insert {at}+{count}"));
    }

    fn removed(&mut self, at: usize, count: usize) {
        self.0.push(format!("remove {at}+{count}"));
    }

    fn moved(&mut self, from: usize, to: usize) {
        self.0.push(format!("move {from}->{to}"));
    }
}

#[test]
fn identical_lists_need_no_edits() {
    let dates = days((2024, 3, 13), 5);
    let script = diff(&dates, &dates);
    assert!(script.is_empty(), "self diff must be empty, got {script:?}");
    assert_eq!(script.len(), 0);
}

#[test]
fn window_slid_forward_by_one() {
    let old = days((2024, 3, 13), 5);
    let new = days((2024, 3, 14), 5);
    let script = diff(&old, &new);

    assert_eq!(script.inserted_items(), 1);
    assert_eq!(script.removed_items(), 1);
    assert_eq!(script.moved_items(), 0);
    assert_eq!(
        script.edits(),
        &[
            Edit::Remove { at: 0, count: 1 },
            Edit::Insert {
                at: 4,
                new_index: 4,
                count: 1
            },
        ]
    );
    assert_applies(&old, &new, &script);
}

#[test]
fn window_slid_backward_by_one() {
    let old = days((2024, 3, 13), 5);
    let new = days((2024, 3, 12), 5);
    let script = diff(&old, &new);

    assert_eq!(
        script.edits(),
        &[
            Edit::Remove { at: 4, count: 1 },
            Edit::Insert {
                at: 0,
                new_index: 0,
                count: 1
            },
        ]
    );
    assert_applies(&old, &new, &script);
}

#[test]
fn window_slid_across_a_month_boundary_coalesces_runs() {
    let old = days((2024, 2, 25), 10);
    let new = days((2024, 2, 28), 10);
    let script = diff(&old, &new);

    assert_eq!(
        script.edits(),
        &[
            Edit::Remove { at: 0, count: 3 },
            Edit::Insert {
                at: 7,
                new_index: 7,
                count: 3
            },
        ]
    );
    assert_applies(&old, &new, &script);
}

#[test]
fn disjoint_lists_are_a_full_replace() {
    let old = days((2024, 1, 1), 5);
    let new = days((2025, 6, 1), 3);
    let script = diff(&old, &new);

    assert_eq!(
        script.edits(),
        &[
            Edit::Remove { at: 0, count: 5 },
            Edit::Insert {
                at: 0,
                new_index: 0,
                count: 3
            },
        ]
    );
    assert_applies(&old, &new, &script);
}

#[test]
fn large_full_replace_is_two_edits() {
    let old = days((2024, 1, 1), 3_000);
    let new = days((2051, 6, 1), 3_000);
    let script = diff(&old, &new);

    assert_eq!(
        script.edits(),
        &[
            Edit::Remove { at: 0, count: 3_000 },
            Edit::Insert {
                at: 0,
                new_index: 0,
                count: 3_000
            },
        ]
    );
    assert_applies(&old, &new, &script);
}

#[test]
fn large_windows_sharing_one_day() {
    let old = days((2024, 1, 1), 3_000);
    let new = days((2024, 1, 1), 5_999)[2_999..].to_vec();
    assert_eq!(old[2_999], new[0]);
    let script = diff(&old, &new);

    assert_eq!(
        script.edits(),
        &[
            Edit::Remove { at: 0, count: 2_999 },
            Edit::Insert {
                at: 1,
                new_index: 1,
                count: 2_999
            },
        ]
    );
    assert_applies(&old, &new, &script);
}

#[test]
fn growing_and_shrinking_at_the_edges() {
    let base = days((2024, 3, 1), 10);

    let grown = days((2024, 2, 28), 14);
    let script = diff(&base, &grown);
    assert_eq!(script.removed_items(), 0);
    assert_eq!(script.inserted_items(), 4);
    assert_applies(&base, &grown, &script);

    let shrunk = base[2..8].to_vec();
    let script = diff(&base, &shrunk);
    assert_eq!(script.removed_items(), 4);
    assert_eq!(script.inserted_items(), 0);
    assert_applies(&base, &shrunk, &script);
}

#[test]
fn reordered_items_become_moves() {
    let old = days((2024, 3, 1), 4);
    let new = vec![old[3], old[0], old[1], old[2]];
    let script = diff(&old, &new);

    assert_eq!(script.moved_items(), 1);
    assert_eq!(script.inserted_items(), 0);
    assert_eq!(script.removed_items(), 0);
    assert_applies(&old, &new, &script);
}

#[test]
fn reversal_applies_cleanly() {
    let old = days((2024, 3, 1), 6);
    let mut new = old.clone();
    new.reverse();
    let script = diff(&old, &new);

    assert_eq!(script.inserted_items(), 0);
    assert_eq!(script.removed_items(), 0);
    assert_applies(&old, &new, &script);
}

#[test]
fn mixed_edits_apply_cleanly() {
    let pool = days((2024, 1, 1), 20);
    let cases: [(&[usize], &[usize]); 5] = [
        (&[0, 1, 2, 3, 4], &[4, 0, 5, 2, 6]),
        (&[0, 1, 2, 3], &[3, 2, 1, 0, 7]),
        (&[5, 6, 7], &[]),
        (&[], &[8, 9]),
        (&[0, 1, 2, 3, 4, 5], &[0, 9, 2, 10, 4, 1]),
    ];
    for (old_idx, new_idx) in cases {
        let old: Vec<_> = old_idx.iter().map(|&i| pool[i]).collect();
        let new: Vec<_> = new_idx.iter().map(|&i| pool[i]).collect();
        let script = diff(&old, &new);
        assert_applies(&old, &new, &script);
    }
}

#[test]
fn duplicate_dates_are_matched_by_value() {
    let d = days((2024, 3, 1), 3);
    let old = vec![d[0], d[0], d[1]];
    let new = vec![d[0], d[1], d[0], d[2]];
    let script = diff(&old, &new);
    assert_applies(&old, &new, &script);
}

#[test]
fn dispatch_reports_edits_in_order() {
    let old = days((2024, 3, 13), 5);
    let new = days((2024, 3, 15), 5);
    let mut recorder = Recorder::default();
    diff(&old, &new).dispatch(&mut recorder);
    assert_eq!(recorder.0, ["remove 0+2", "insert 3+2"]);
}
