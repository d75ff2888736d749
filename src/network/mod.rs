//! Constraint network over named intervals.
//!
//! A [`ConstraintNetwork`] accumulates pairwise [`AllenRelation`]s between
//! named intervals. Each [`add`](ConstraintNetwork::add) runs a worklist
//! path-consistency pass: the new fact is composed against every known
//! triangle until no pair can be tightened further, and a contradiction
//! surfaces as a [`Conflict`].
//!
//! # Algorithm
//!
//! 1. Normalize the asserted fact to the pair's canonical orientation
//! 2. At each step, pop the *least uncertain* pending fact (heuristic:
//!    strongest information first, fewer redundant revisits)
//! 3. Intersect it with the stored relation; an empty result is a conflict
//! 4. On a strict tightening, derive both transitive candidates through
//!    every third interval and enqueue the ones that tighten their pair
//! 5. Stop at the empty worklist — every write shrinks a finite lattice
//!    element, so the fixpoint is reached and is order-independent
//!
//! # References
//!
//! - Allen, J. F. (1983). "Maintaining Knowledge about Temporal Intervals",
//!   *Communications of the ACM* 26(11), 832-843 (the constraint
//!   propagation section).
//!
//! [`AllenRelation`]: crate::allen::AllenRelation

mod conflict;
mod engine;

pub use conflict::Conflict;
pub use engine::ConstraintNetwork;
