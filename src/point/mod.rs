//! The point–interval calculus.
//!
//! Five mutually exclusive basic relations can hold between a point and a
//! proper interval: the point is *before* it, *commences* it, lies *in* it,
//! *terminates* it, or is *after* it. Composition is heterogeneous: a
//! point–interval relation composed with an interval–interval relation
//! yields another point–interval relation.

mod relation;
mod table;

pub use relation::{PointIntervalBasis, PointIntervalRelation};
