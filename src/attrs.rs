//! Attribute sets over a relation schema.
//!
//! An [`AttributeSet`] is a set of attribute names (column names) with
//! value semantics: no duplicates, order irrelevant, equality by
//! membership. Every operation in the closure engine builds fresh
//! attribute sets rather than mutating its inputs.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// A set of attribute names.
///
/// Backed by a `BTreeSet<String>`, so iteration is in lexicographic
/// order, but equality and hashing depend only on membership.
///
/// # Examples
///
/// ```
/// use fds_rs::attrs::AttributeSet;
///
/// let ab: AttributeSet = ["A", "B"].into_iter().collect();
/// let ba: AttributeSet = ["B", "A", "A"].into_iter().collect();
/// assert_eq!(ab, ba);
/// assert_eq!(ab.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AttributeSet {
    attrs: BTreeSet<String>,
}

impl AttributeSet {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns true if the set contains no attributes.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Returns true if the set contains the given attribute name.
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains(name)
    }

    /// Adds an attribute. Returns true if it was not previously present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.attrs.insert(name.into())
    }

    /// Returns true if every attribute of `self` is in `other`.
    pub fn is_subset_of(&self, other: &AttributeSet) -> bool {
        self.attrs.is_subset(&other.attrs)
    }

    /// Returns true if `self` contains every attribute of `other`.
    pub fn is_superset_of(&self, other: &AttributeSet) -> bool {
        self.attrs.is_superset(&other.attrs)
    }

    /// Returns a new set containing the attributes of both `self` and `other`.
    ///
    /// Neither input is modified.
    pub fn united(&self, other: &AttributeSet) -> AttributeSet {
        let mut out = self.clone();
        out.extend(other.iter().cloned());
        out
    }

    /// Iterates over the attribute names in lexicographic order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.attrs.iter()
    }

    /// Access to the underlying set.
    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.attrs
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, name) in self.attrs.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, "}}")
    }
}

impl<S: Into<String>> FromIterator<S> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for AttributeSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.attrs.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.iter()
    }
}

impl IntoIterator for AttributeSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.into_iter()
    }
}

impl From<BTreeSet<String>> for AttributeSet {
    fn from(attrs: BTreeSet<String>) -> Self {
        Self { attrs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_content() {
        let a: AttributeSet = ["A", "B", "C"].into_iter().collect();
        let b: AttributeSet = ["C", "B", "A"].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, AttributeSet::new());
    }

    #[test]
    fn test_insert_dedup() {
        let mut s = AttributeSet::new();
        assert!(s.insert("A"));
        assert!(!s.insert("A"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_united_leaves_inputs_alone() {
        let a: AttributeSet = ["A"].into_iter().collect();
        let b: AttributeSet = ["B"].into_iter().collect();
        let u = a.united(&b);
        assert_eq!(u, ["A", "B"].into_iter().collect());
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_subset_relations() {
        let ab: AttributeSet = ["A", "B"].into_iter().collect();
        let a: AttributeSet = ["A"].into_iter().collect();
        assert!(a.is_subset_of(&ab));
        assert!(ab.is_superset_of(&a));
        assert!(AttributeSet::new().is_subset_of(&a));
        assert!(!ab.is_subset_of(&a));
    }

    #[test]
    fn test_display() {
        let ab: AttributeSet = ["B", "A"].into_iter().collect();
        assert_eq!(ab.to_string(), "{A,B}");
        assert_eq!(AttributeSet::new().to_string(), "{}");
    }
}
