//! The interval–interval calculus.
//!
//! Thirteen mutually exclusive basic relations can hold between two proper
//! intervals, from *precedes* through *equals* to *preceded by*. A general
//! [`AllenRelation`] is any subset of them; composition over the published
//! 13×13 table derives the relation between X and Z from X–Y and Y–Z.
//!
//! # References
//!
//! - Allen, J. F. (1983). "Maintaining Knowledge about Temporal Intervals",
//!   *Communications of the ACM* 26(11), 832-843.

mod relation;
mod table;

pub use relation::{AllenBasis, AllenRelation};
