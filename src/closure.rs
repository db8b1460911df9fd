//! The closure engine: Armstrong's axioms over FD sets.
//!
//! Four pure operations make up the engine:
//!
//! - [`trivial`] --- reflexivity: a determinant determines every
//!   non-empty subset of itself.
//! - [`augment`] --- augmentation: uniting both sides of an FD with
//!   the same attributes preserves validity.
//! - [`transitive`] --- transitivity: `A -> B` and `C -> D` with
//!   `C ⊇ B` yield `A -> D`.
//! - [`closure`] --- the fixpoint of the three above: every FD
//!   logically implied by the input.
//!
//! Every operation treats its inputs as read-only and allocates a
//! fresh output set, so concurrent callers sharing unmodified inputs
//! need no synchronization.
//!
//! # Example
//!
//! ```
//! use fds_rs::closure::{closure, transitive};
//! use fds_rs::fd::Fd;
//! use fds_rs::fdset::FdSet;
//!
//! let fds: FdSet = [Fd::new(["A"], ["B"]), Fd::new(["B"], ["C"])]
//!     .into_iter()
//!     .collect();
//!
//! assert!(transitive(&fds).contains(&Fd::new(["A"], ["C"])));
//!
//! let closed = closure(&fds);
//! assert!(closed.contains(&Fd::new(["A"], ["C"])));
//! assert!(closed.contains(&Fd::new(["A", "B"], ["C"])));
//! assert!(closed.contains(&Fd::new(["A"], ["A", "B"])));
//! ```
//!
//! # Performance
//!
//! [`closure`] enumerates every subset of the attribute universe on
//! every pass, so its cost is exponential in the number of distinct
//! attributes. This is inherent to the problem, not an implementation
//! shortcut to be optimized away; use [`closure_checked`] to refuse
//! universes above a configured size instead of hanging.

use log::debug;
use num_bigint::BigUint;
use thiserror::Error;

use crate::attrs::AttributeSet;
use crate::fd::Fd;
use crate::fdset::FdSet;
use crate::powerset::{subset_count, subsets};

/// Resolves all trivial FDs: for every `X -> Y` in the input, emits
/// `X -> Z` for every non-empty subset `Z` of `X`.
///
/// Only the determinant of each input FD is consulted; the dependent
/// side is irrelevant to reflexivity.
pub fn trivial(fds: &FdSet) -> FdSet {
    let mut out = FdSet::new();
    for fd in fds {
        for right in subsets(fd.determinant().as_set()) {
            if !right.is_empty() {
                out.insert(Fd::from_sets(fd.determinant().clone(), right.into()));
            }
        }
    }
    out
}

/// Augments every FD in the set with the given attributes:
/// `X -> Y` becomes `X ∪ attrs -> Y ∪ attrs`.
///
/// Neither `fds` nor `attrs` is modified; every output FD is a fresh
/// value. Augmenting with the empty set reproduces the input.
pub fn augment(fds: &FdSet, attrs: &AttributeSet) -> FdSet {
    fds.iter().map(|fd| fd.augmented(attrs)).collect()
}

/// Exhaustively resolves transitive FDs: returns every FD derivable
/// from the input by one or more applications of transitivity, and
/// nothing already in the input.
///
/// The fixpoint is computed iteratively. Each pass scans all ordered
/// pairs of the working set, collects the derived FDs not yet present,
/// and applies them at the end of the pass; the loop stops when a pass
/// derives nothing new. Stack depth is constant regardless of how many
/// FDs are derivable.
pub fn transitive(fds: &FdSet) -> FdSet {
    let mut working = fds.clone();
    let mut accum = FdSet::new();

    loop {
        let mut derived = FdSet::new();
        for a in &working {
            for b in &working {
                if b.determinant().is_superset_of(a.dependent()) {
                    let fd = Fd::from_sets(a.determinant().clone(), b.dependent().clone());
                    if !working.contains(&fd) {
                        derived.insert(fd);
                    }
                }
            }
        }
        if derived.is_empty() {
            break;
        }
        debug!("transitive: pass derived {} new FDs", derived.len());
        working.merge(&derived);
        accum.merge(&derived);
    }

    accum
}

/// Computes the closure of the given FD set: the smallest superset
/// closed under reflexivity, augmentation, and transitivity.
///
/// The attribute universe for augmentation is fixed up front as the
/// union of all attributes in the *original* input. Closure never
/// introduces new attribute names, so recomputing the universe from
/// the growing working set would change nothing.
///
/// Runs until a full pass of augment/trivial/transitive adds no FD.
pub fn closure(fds: &FdSet) -> FdSet {
    let universe = fds.attributes();
    debug!(
        "closure: {} input FDs over {} attributes ({} subsets per pass)",
        fds.len(),
        universe.len(),
        subset_count(universe.len())
    );

    let mut working = fds.clone();
    let mut pass = 0u32;
    loop {
        pass += 1;
        let mut changed = false;

        for s in subsets(universe.as_set()) {
            changed |= working.merge(&augment(fds, &s.into()));
        }
        changed |= working.merge(&trivial(&working));
        changed |= working.merge(&transitive(&working));

        debug!(
            "closure: pass {} done, {} FDs, changed = {}",
            pass,
            working.len(),
            changed
        );
        if !changed {
            break;
        }
    }

    working
}

/// Resource limits for [`closure_checked`].
///
/// The closure computation enumerates `2^k` attribute subsets per pass
/// for a universe of `k` attributes, so the attribute count is the
/// only knob that matters.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Limits {
    /// Largest attribute universe accepted (inclusive).
    pub max_attributes: usize,
}

impl Default for Limits {
    /// Allows up to 20 attributes (about a million subsets per pass).
    fn default() -> Self {
        Self { max_attributes: 20 }
    }
}

/// Error returned by [`closure_checked`] when the input is refused.
#[derive(Debug, Error)]
pub enum ClosureError {
    /// The attribute universe is too large to close within the
    /// configured limits.
    #[error(
        "attribute universe has {actual} attributes (limit {limit}): \
         closure would enumerate {subsets} subsets per pass"
    )]
    TooManyAttributes {
        /// Size of the input's attribute universe.
        actual: usize,
        /// The configured `max_attributes`.
        limit: usize,
        /// `2^actual`, the subsets enumerated per closure pass.
        subsets: BigUint,
    },
}

/// Like [`closure`], but refuses up front when the attribute universe
/// exceeds `limits.max_attributes` instead of starting an infeasible
/// computation.
///
/// # Example
///
/// ```
/// use fds_rs::closure::{closure_checked, Limits};
/// use fds_rs::fd::Fd;
/// use fds_rs::fdset::FdSet;
///
/// let fds: FdSet = [Fd::new(["A"], ["B"])].into_iter().collect();
/// let closed = closure_checked(&fds, &Limits::default()).unwrap();
/// assert!(closed.contains(&Fd::new(["A"], ["B"])));
///
/// let tight = Limits { max_attributes: 1 };
/// assert!(closure_checked(&fds, &tight).is_err());
/// ```
pub fn closure_checked(fds: &FdSet, limits: &Limits) -> Result<FdSet, ClosureError> {
    let actual = fds.attributes().len();
    if actual > limits.max_attributes {
        return Err(ClosureError::TooManyAttributes {
            actual,
            limit: limits.max_attributes,
            subsets: subset_count(actual),
        });
    }
    Ok(closure(fds))
}
