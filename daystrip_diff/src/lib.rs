// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=daystrip_diff --heading-base-level=0

//! Daystrip Diff: minimal edit scripts between ordered lists.
//!
//! When a strip's date list is replaced, redrawing every cell is wasteful: the
//! common case is a window sliding forward or backward by a few days. This
//! crate computes an [`EditScript`] of removals, insertions and moves that turns
//! the old list into the new one, matching items by **value equality** rather
//! than position.
//!
//! - [`diff`] runs a Myers shortest-edit search over the differing middle of
//!   the two lists (common prefix and suffix are skipped up front), then pairs
//!   removed and inserted items with equal values into moves.
//! - [`EditScript::dispatch`] forwards the script to a [`ListUpdateSink`], which
//!   is how a host list widget learns what to animate or rebind.
//! - [`EditScript::apply`] performs the script on a `Vec`, for hosts that keep a
//!   mirror of the displayed items.
//!
//! Edits are positional and must be applied **in order**: each position refers
//! to the list as it stands after the previous edit.
//!
//! ## Minimal example
//!
//! ```rust
//! use daystrip_diff::{Edit, diff};
//!
//! let old = [1, 2, 3, 4];
//! let new = [2, 3, 4, 5];
//!
//! let script = diff(&old, &new);
//! assert_eq!(
//!     script.edits(),
//!     &[
//!         Edit::Remove { at: 0, count: 1 },
//!         Edit::Insert { at: 3, new_index: 3, count: 1 },
//!     ],
//! );
//!
//! let mut mirror = old.to_vec();
//! script.apply(&mut mirror, &new);
//! assert_eq!(mirror, new);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod myers;
mod script;

pub use script::{Edit, EditScript, ListUpdateSink};

use core::hash::Hash;

/// Computes the edit script turning `old` into `new`.
///
/// Items are matched by equality. Identical inputs yield an empty script; a
/// window slid by `n` items yields `n` removed and `n` inserted items; items
/// that only changed position are reported as [`Edit::Move`].
#[must_use]
pub fn diff<T>(old: &[T], new: &[T]) -> EditScript
where
    T: Eq + Hash,
{
    let steps = myers::align(old, new);
    script::build(old, new, &steps)
}
