// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=daystrip_selection --heading-base-level=0

//! Daystrip Selection: policy-driven selection tracking for list cells.
//!
//! This crate owns the _bookkeeping_ of which cells in a strip are selected.
//! Keys are cell positions (`usize`); the crate does not know what the cells
//! show. It is made of three pieces:
//!
//! - [`SelectionPolicy`]: the predicate consulted before any state change,
//!   configured with [`SelectionFlags`] (multi-selection, deselection, long press).
//! - [`SelectionTracker`]: the authoritative set of selected keys. Every
//!   mutation returns the [`SelectionEvent`]s it caused, in order, so callers
//!   can forward them without registering observers.
//! - [`SelectionSnapshot`]: a serializable copy of the selected keys for
//!   save/restore across host lifecycle events.
//!
//! ## Selection mode and long press
//!
//! Gesture handling follows the usual list-selection convention: a plain tap
//! only toggles a cell while *selection mode* is active, and a long press is
//! what normally starts selection mode. When long press is disabled in the
//! policy, the tracker reports [`SelectionTracker::long_press_suppressed`]
//! whenever nothing is selected and keeps selection mode active, so every tap
//! selects and long presses behave like taps. The flag is derived from the
//! policy and the selected set; it never appears among the selected keys.
//!
//! ## Minimal example
//!
//! ```rust
//! use daystrip_selection::{SelectionEvent, SelectionFlags, SelectionPolicy, SelectionTracker};
//!
//! let mut tracker = SelectionTracker::new(SelectionPolicy::new(SelectionFlags::DESELECTION));
//! assert!(tracker.long_press_suppressed());
//!
//! // Single selection: picking 5 after 3 drops 3.
//! tracker.select(3);
//! let events = tracker.select(5);
//! assert_eq!(
//!     events,
//!     vec![
//!         SelectionEvent::ItemStateChanged { key: 3, selected: false },
//!         SelectionEvent::ItemStateChanged { key: 5, selected: true },
//!     ],
//! );
//! assert_eq!(tracker.keys(), &[5]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod policy;
mod snapshot;
mod tracker;

pub use policy::{SelectionFlags, SelectionPolicy};
pub use snapshot::SelectionSnapshot;
pub use tracker::{SelectionEvent, SelectionTracker};
