// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistable selection state.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// The selected keys at the time of [`SelectionTracker::snapshot`](crate::SelectionTracker::snapshot).
///
/// Keys keep the tracker's enumeration order. Long-press suppression is not
/// stored because it is derived from the policy and the keys on restore.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    /// Selected keys.
    pub keys: Vec<usize>,
}
