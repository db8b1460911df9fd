//! # fds-rs: Functional-Dependency Closure in Rust
//!
//! **`fds-rs`** is a small library for reasoning about **functional
//! dependencies (FDs)** over a relation schema. It computes the logical
//! closure of an FD set under **Armstrong's axioms**, the core primitive
//! behind schema normalization tooling: deciding which FDs are implied by
//! a given set, detecting redundancy, and testing candidate keys.
//!
//! ## What is a functional dependency?
//!
//! An FD `X -> Y` states that the values of the attributes `X` (the
//! *determinant*) uniquely determine the values of the attributes `Y`
//! (the *dependent*). Armstrong's axioms are the sound-and-complete
//! inference rules over FDs:
//!
//! - **Reflexivity**: `X -> Z` for every non-empty `Z ⊆ X`.
//! - **Augmentation**: from `X -> Y` infer `X ∪ W -> Y ∪ W`.
//! - **Transitivity**: from `A -> B` and `C -> D` with `C ⊇ B` infer `A -> D`.
//!
//! The *closure* of an FD set is everything derivable by chaining these
//! rules --- a fixpoint computation with combinatorially many
//! intermediate results.
//!
//! ## Key Properties
//!
//! - **Value semantics everywhere**: [`AttributeSet`], [`Fd`], and
//!   [`FdSet`] compare by content; duplicates collapse automatically.
//! - **Pure operations**: every engine function reads immutable inputs
//!   and allocates a fresh output, so shared inputs are safe across
//!   concurrent callers.
//! - **Explicit resource guard**: closure is exponential in the number
//!   of attributes by nature; [`closure_checked`] refuses oversized
//!   universes up front instead of hanging.
//!
//! ## Basic Usage
//!
//! ```rust
//! use fds_rs::closure::closure;
//! use fds_rs::fd::Fd;
//! use fds_rs::fdset::FdSet;
//!
//! // 1. State what you know about the schema
//! let fds: FdSet = [Fd::new(["A"], ["B"]), Fd::new(["B"], ["C"])]
//!     .into_iter()
//!     .collect();
//!
//! // 2. Close it under Armstrong's axioms
//! let closed = closure(&fds);
//!
//! // 3. Ask what is implied
//! assert!(closed.contains(&Fd::new(["A"], ["C"])));       // transitivity
//! assert!(closed.contains(&Fd::new(["A"], ["A"])));       // reflexivity
//! assert!(closed.contains(&Fd::new(["A", "B"], ["C"])));  // augmentation
//! ```
//!
//! ## Core Components
//!
//! - **[`attrs`]**: [`AttributeSet`], a set of attribute names.
//! - **[`fd`]**: [`Fd`], the (determinant, dependent) pair.
//! - **[`fdset`]**: [`FdSet`], a deduplicated set of FDs.
//! - **[`powerset`]**: generic subset enumeration used by the
//!   reflexivity and augmentation steps.
//! - **[`closure`]**: the engine --- [`trivial`], [`augment`],
//!   [`transitive`], [`closure()`](closure::closure), and the guarded
//!   [`closure_checked`].
//!
//! Parsing FD syntax from text, persistence, and normal-form reporting
//! are out of scope: this crate is the engine those tools build on.

pub mod attrs;
pub mod closure;
pub mod fd;
pub mod fdset;
pub mod powerset;

pub use attrs::AttributeSet;
pub use closure::{augment, closure_checked, transitive, trivial, ClosureError, Limits};
pub use fd::Fd;
pub use fdset::FdSet;
pub use powerset::{power_set, subsets};
