//! Contradiction reporting.

use thiserror::Error;

use crate::allen::AllenRelation;

/// The accumulated constraints are jointly unsatisfiable.
///
/// Raised by [`ConstraintNetwork::add`](super::ConstraintNetwork::add) when
/// an asserted or derived relation cannot refine what is already known
/// about a pair. Carries both interval names, the previously recorded
/// relation, and the conflicting candidate so the caller can diagnose which
/// assertion is at fault.
///
/// Not locally recoverable: propagation halts immediately and the network
/// is left in a tightened-but-unvalidated state. Callers that need rollback
/// should clone the network before adding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("conflicting temporal constraints between '{i}' and '{j}': \
         {candidate} does not refine the known relation {known}")]
pub struct Conflict {
    /// First interval of the pair, in the orientation of `known`.
    pub i: String,
    /// Second interval of the pair.
    pub j: String,
    /// The relation recorded for (i, j) before the contradiction.
    pub known: AllenRelation,
    /// The asserted or derived relation that contradicts it.
    pub candidate: AllenRelation,
}
