//! Sets of functional dependencies.
//!
//! An [`FdSet`] models a theory: the set of FDs known (or derived) to
//! hold over a schema. Structurally equal FDs are deduplicated, and
//! [`FdSet::insert`]/[`FdSet::merge`] report whether anything new was
//! actually added, which is the termination signal for the fixpoint
//! loops in [`closure`](crate::closure).

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use crate::attrs::AttributeSet;
use crate::fd::Fd;

/// A deduplicated set of functional dependencies.
///
/// Insertion order is irrelevant; two sets are equal iff they contain
/// the same FDs. During closure computation an `FdSet` only ever
/// grows.
#[derive(Debug, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FdSet {
    fds: BTreeSet<Fd>,
}

impl FdSet {
    /// Creates an empty FD set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of FDs.
    pub fn len(&self) -> usize {
        self.fds.len()
    }

    /// Returns true if the set contains no FDs.
    pub fn is_empty(&self) -> bool {
        self.fds.is_empty()
    }

    /// Returns true if a structurally equal FD is present.
    pub fn contains(&self, fd: &Fd) -> bool {
        self.fds.contains(fd)
    }

    /// Adds an FD. Returns true if no structurally equal FD was
    /// present (adding a duplicate is a no-op).
    pub fn insert(&mut self, fd: Fd) -> bool {
        self.fds.insert(fd)
    }

    /// Adds every FD of `other` to `self`. Returns true if at least
    /// one of them was not already present.
    pub fn merge(&mut self, other: &FdSet) -> bool {
        let before = self.fds.len();
        self.fds.extend(other.fds.iter().cloned());
        self.fds.len() > before
    }

    /// The attribute universe: the union of every determinant and
    /// dependent appearing in the set.
    pub fn attributes(&self) -> AttributeSet {
        let mut out = AttributeSet::new();
        for fd in &self.fds {
            out.extend(fd.determinant().iter().cloned());
            out.extend(fd.dependent().iter().cloned());
        }
        out
    }

    /// Iterates over the FDs in unspecified (but stable) order.
    pub fn iter(&self) -> btree_set::Iter<'_, Fd> {
        self.fds.iter()
    }

    /// Access to the underlying set.
    pub fn as_set(&self) -> &BTreeSet<Fd> {
        &self.fds
    }
}

impl fmt::Display for FdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for fd in &self.fds {
            writeln!(f, "  {}", fd)?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<Fd> for FdSet {
    fn from_iter<I: IntoIterator<Item = Fd>>(iter: I) -> Self {
        Self {
            fds: iter.into_iter().collect(),
        }
    }
}

impl Extend<Fd> for FdSet {
    fn extend<I: IntoIterator<Item = Fd>>(&mut self, iter: I) {
        self.fds.extend(iter);
    }
}

impl<'a> IntoIterator for &'a FdSet {
    type Item = &'a Fd;
    type IntoIter = btree_set::Iter<'a, Fd>;

    fn into_iter(self) -> Self::IntoIter {
        self.fds.iter()
    }
}

impl IntoIterator for FdSet {
    type Item = Fd;
    type IntoIter = btree_set::IntoIter<Fd>;

    fn into_iter(self) -> Self::IntoIter {
        self.fds.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedup() {
        let mut set = FdSet::new();
        assert!(set.insert(Fd::new(["A"], ["B"])));
        assert!(!set.insert(Fd::new(["A"], ["B"])));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_merge_reports_novelty() {
        let mut set: FdSet = [Fd::new(["A"], ["B"])].into_iter().collect();
        let same: FdSet = [Fd::new(["A"], ["B"])].into_iter().collect();
        let more: FdSet = [Fd::new(["B"], ["C"])].into_iter().collect();
        assert!(!set.merge(&same));
        assert!(set.merge(&more));
        assert!(!set.merge(&more));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_attributes_universe() {
        let set: FdSet = [Fd::new(["A", "B"], ["C"]), Fd::new(["C"], ["D"])]
            .into_iter()
            .collect();
        let universe = set.attributes();
        assert_eq!(universe, ["A", "B", "C", "D"].into_iter().collect());
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let x: FdSet = [Fd::new(["A"], ["B"]), Fd::new(["B"], ["C"])]
            .into_iter()
            .collect();
        let y: FdSet = [Fd::new(["B"], ["C"]), Fd::new(["A"], ["B"])]
            .into_iter()
            .collect();
        assert_eq!(x, y);
    }
}
