// SPDX-License-Identifier: MPL-2.0
//! Shared species/region filter.
//!
//! The store holds the one `FilterSelection` the whole app reads. Views get
//! it by reference; `apply` is the only way to change it.

use crate::domain::filter::{FilterChange, FilterSelection};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStore {
    current: FilterSelection,
}

impl FilterStore {
    #[must_use]
    pub fn new(initial: FilterSelection) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub fn current(&self) -> &FilterSelection {
        &self.current
    }

    /// Applies a change. Returns `true` if the selection changed.
    pub fn apply(&mut self, change: FilterChange) -> bool {
        let next = self.current.with(change);
        if next == self.current {
            return false;
        }
        log::info!(
            "Filter changed: {} / {}",
            next.species.label(),
            next.region.label()
        );
        self.current = next;
        true
    }
}
