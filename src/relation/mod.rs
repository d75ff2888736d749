//! Generic relation algebra.
//!
//! A qualitative calculus is built from a fixed *basis* of mutually
//! exclusive, jointly exhaustive basic relations. A general relation is any
//! subset of that basis, encoded as a bitmask, and the 2^N subsets form a
//! Boolean lattice under implication (subset inclusion).
//!
//! This module provides the calculus-independent machinery: the [`Basis`]
//! trait describing a concrete basis, the [`Relation`] value type with its
//! lattice operations, and the [`Interval`] endpoint container consumed by
//! the per-calculus `relation(x, y)` factories.
//!
//! The two instantiations live in [`crate::allen`] (13 basic relations
//! between intervals) and [`crate::point`] (5 basic relations between a
//! point and an interval).
//!
//! # References
//!
//! - Allen, J. F. (1983). "Maintaining Knowledge about Temporal Intervals",
//!   *Communications of the ACM* 26(11), 832-843.

mod interval;
mod set;

pub use interval::{Interval, InvalidInterval};
pub use set::{Basis, Relation};
