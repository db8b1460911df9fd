//! Functional dependencies.

use std::fmt;

use crate::attrs::AttributeSet;

/// A functional dependency `X -> Y`: the values of the determinant
/// attributes `X` uniquely determine the values of the dependent
/// attributes `Y`.
///
/// The pair is ordered: `A -> B` and `B -> A` are distinct
/// dependencies. Two FDs are equal iff both sides are equal. Either
/// side may be empty at construction; the closure engine only ever
/// derives FDs with non-empty dependents from the triviality axiom.
///
/// # Examples
///
/// ```
/// use fds_rs::fd::Fd;
///
/// let fd = Fd::new(["A", "B"], ["C"]);
/// assert_eq!(fd.to_string(), "{A,B} -> {C}");
/// assert_eq!(fd, Fd::new(["B", "A"], ["C"]));
/// assert_ne!(fd, Fd::new(["C"], ["A", "B"]));
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Fd {
    determinant: AttributeSet,
    dependent: AttributeSet,
}

impl Fd {
    /// Creates a dependency `determinant -> dependent`.
    pub fn new(
        determinant: impl IntoIterator<Item = impl Into<String>>,
        dependent: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            determinant: determinant.into_iter().collect(),
            dependent: dependent.into_iter().collect(),
        }
    }

    /// Creates a dependency from already-built attribute sets.
    pub fn from_sets(determinant: AttributeSet, dependent: AttributeSet) -> Self {
        Self {
            determinant,
            dependent,
        }
    }

    /// The left-hand side `X` of `X -> Y`.
    pub fn determinant(&self) -> &AttributeSet {
        &self.determinant
    }

    /// The right-hand side `Y` of `X -> Y`.
    pub fn dependent(&self) -> &AttributeSet {
        &self.dependent
    }

    /// Returns a fresh FD with both sides united with `attrs`
    /// (Armstrong's augmentation axiom). `self` is not modified.
    pub fn augmented(&self, attrs: &AttributeSet) -> Fd {
        Fd {
            determinant: self.determinant.united(attrs),
            dependent: self.dependent.united(attrs),
        }
    }

    /// Returns true if the dependent is a subset of the determinant,
    /// i.e. the FD follows from reflexivity alone.
    pub fn is_trivial(&self) -> bool {
        self.dependent.is_subset_of(&self.determinant)
    }
}

impl fmt::Display for Fd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.determinant, self.dependent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_componentwise() {
        let fd = Fd::new(["A"], ["B", "C"]);
        assert_eq!(fd, Fd::new(["A"], ["C", "B"]));
        assert_ne!(fd, Fd::new(["A"], ["B"]));
        assert_ne!(fd, Fd::new(["B", "C"], ["A"]));
    }

    #[test]
    fn test_augmented_builds_fresh_value() {
        let fd = Fd::new(["A"], ["B"]);
        let attrs: AttributeSet = ["C"].into_iter().collect();
        let aug = fd.augmented(&attrs);
        assert_eq!(aug, Fd::new(["A", "C"], ["B", "C"]));
        // the source FD is untouched
        assert_eq!(fd, Fd::new(["A"], ["B"]));
    }

    #[test]
    fn test_augmented_with_empty_is_identity() {
        let fd = Fd::new(["A", "B"], ["C"]);
        assert_eq!(fd.augmented(&AttributeSet::new()), fd);
    }

    #[test]
    fn test_is_trivial() {
        assert!(Fd::new(["A", "B"], ["A"]).is_trivial());
        assert!(!Fd::new(["A"], ["B"]).is_trivial());
        // empty dependent is vacuously trivial
        assert!(Fd::new(["A"], Vec::<String>::new()).is_trivial());
    }

    #[test]
    fn test_display() {
        let fd = Fd::new(["B", "A"], ["C"]);
        assert_eq!(fd.to_string(), "{A,B} -> {C}");
    }
}
