//! Power-set enumeration.
//!
//! This module provides a lazy iterator over all subsets of a finite
//! set, plus an eager collector. The enumeration works on an indexed
//! snapshot of the elements taken once up front, so the input set is
//! never mutated or even touched during iteration --- callers may keep
//! using (or sharing) it freely.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use fds_rs::powerset::power_set;
//!
//! let s: BTreeSet<u32> = [1, 2, 3].into_iter().collect();
//! let ps = power_set(&s);
//!
//! assert_eq!(ps.len(), 8); // 2^3
//! assert!(ps.contains(&BTreeSet::new()));
//! assert!(ps.contains(&s));
//! ```
//!
//! # Performance
//!
//! The number of subsets is `2^n`, so eager collection is only
//! sensible for small sets. The iterator itself is cheap: each step
//! decodes one bitmask into a fresh subset.

use std::collections::BTreeSet;

use num_bigint::BigUint;

/// Lazy iterator over all subsets of a set, empty subset and full set
/// included.
///
/// Subsets are produced by counting a bitmask from `0` to `2^n - 1`;
/// bit `i` of the mask selects the `i`-th element of the snapshot.
/// Yields exactly `2^n` subsets.
pub struct Subsets<T> {
    elements: Vec<T>,
    mask: usize,
    done: bool,
}

impl<T: Clone + Ord> Iterator for Subsets<T> {
    type Item = BTreeSet<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let subset: BTreeSet<T> = self
            .elements
            .iter()
            .enumerate()
            .filter(|(i, _)| self.mask & (1 << i) != 0)
            .map(|(_, e)| e.clone())
            .collect();

        if self.mask == (1usize << self.elements.len()) - 1 {
            self.done = true;
        } else {
            self.mask += 1;
        }

        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = 1usize << self.elements.len();
        let remaining = if self.done { 0 } else { total - self.mask };
        (remaining, Some(remaining))
    }
}

impl<T: Clone + Ord> ExactSizeIterator for Subsets<T> {}

/// Returns an iterator over all subsets of `set`.
///
/// The input is snapshotted once and never modified.
///
/// # Panics
///
/// Panics if `set` has more elements than fit in a machine-word
/// bitmask. Enumerating that many subsets is unfeasible anyway; see
/// [`Limits`](crate::closure::Limits) for the guarded entry point.
pub fn subsets<T: Clone + Ord>(set: &BTreeSet<T>) -> Subsets<T> {
    assert!(
        set.len() < usize::BITS as usize,
        "Power set of {} elements cannot be enumerated",
        set.len()
    );
    Subsets {
        elements: set.iter().cloned().collect(),
        mask: 0,
        done: false,
    }
}

/// Computes the power set of `set`: the set of all its subsets,
/// including the empty set and `set` itself. The result has exactly
/// `2^n` members.
///
/// The input is not mutated and can be reused by the caller.
pub fn power_set<T: Clone + Ord>(set: &BTreeSet<T>) -> BTreeSet<BTreeSet<T>> {
    subsets(set).collect()
}

/// Returns `2^n`, the number of subsets of an `n`-element set.
///
/// Computed as a [`BigUint`] so that resource-limit diagnostics can
/// report the figure for universes far beyond what is enumerable.
pub fn subset_count(n: usize) -> BigUint {
    BigUint::from(1u8) << n
}
