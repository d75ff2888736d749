//! Qualitative temporal reasoning over intervals.
//!
//! Implements Allen's interval calculus and the companion point–interval
//! calculus, plus a constraint network that keeps a set of named intervals
//! mutually consistent:
//!
//! - **Relation algebra**: a relation is a subset of a fixed basis of
//!   mutually exclusive basic relations, encoded as a bitmask. Subsets form
//!   a Boolean lattice under implication, with union, intersection,
//!   complement, set difference, a bit-reversal converse, and table-driven
//!   composition.
//! - **[`allen`]**: the 13-basis interval–interval calculus — named
//!   constants from `PRECEDES` to `PRECEDED_BY`, derived unions such as
//!   `STARTS_EARLIER`, and a factory computing the most certain relation
//!   between two intervals from their (possibly unknown) endpoints.
//! - **[`point`]**: the 5-basis point–interval calculus, with heterogeneous
//!   composition against interval relations.
//! - **[`network`]**: a path-consistency propagation engine. Each asserted
//!   fact is composed through every triangle until the network reaches a
//!   fixpoint; contradictions are reported, never repaired.
//!
//! # Architecture
//!
//! The crate is purely synchronous and in-memory: no I/O, no threads, no
//! global state. All algebra operations are O(1) bit manipulation; the
//! composition tables are baked at compile time. Everything is
//! deterministic — propagation order is a heuristic, and the fixpoint it
//! reaches does not depend on it.
//!
//! # Examples
//!
//! ```
//! use allen_calculus::allen::AllenRelation;
//! use allen_calculus::network::ConstraintNetwork;
//!
//! let mut net = ConstraintNetwork::new();
//! net.add("breakfast", "commute", AllenRelation::PRECEDES)?;
//! net.add("commute", "standup", AllenRelation::MEETS)?;
//! assert_eq!(net.get("breakfast", "standup"), AllenRelation::PRECEDES);
//! # Ok::<(), allen_calculus::network::Conflict>(())
//! ```

pub mod allen;
pub mod network;
pub mod point;
pub mod relation;
