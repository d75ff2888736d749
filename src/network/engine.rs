//! The propagation engine.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use log::{debug, trace};

use super::Conflict;
use crate::allen::AllenRelation;

/// A pending fact in the worklist, ordered so the heap pops the entry with
/// the fewest admitted basic relations first. The member count is a proxy
/// for [`uncertainty`](AllenRelation::uncertainty) that avoids float
/// comparison and handles `EMPTY` (which must surface immediately). The
/// sequence number makes ties FIFO and the run deterministic.
struct Pending {
    members: u32,
    seq: u64,
    i: usize,
    j: usize,
    relation: AllenRelation,
}

impl Pending {
    fn new(i: usize, j: usize, relation: AllenRelation, seq: u64) -> Self {
        Self {
            members: relation.member_count(),
            seq,
            i,
            j,
            relation,
        }
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap and we want the
        // least uncertain, earliest enqueued entry on top.
        other
            .members
            .cmp(&self.members)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// An incrementally tightened network of pairwise interval relations.
///
/// Intervals are named by strings and registered on first use. For every
/// unordered pair the network stores the tightest relation it has learned,
/// oriented from the earlier-registered interval to the later one; the
/// other direction is served through [`converse`](AllenRelation::converse).
/// An unconstrained pair reads as `FULL`, and the diagonal is `EQUALS` by
/// definition.
///
/// Stored relations only ever shrink. [`add`](ConstraintNetwork::add) runs
/// propagation to the fixpoint and reports contradictions as [`Conflict`];
/// after a conflict the already-written tightenings remain (clone first if
/// rollback is needed).
///
/// Not thread-safe: `add` mutates the fact table in place during the
/// fixpoint loop, so concurrent use must be serialized by the caller.
///
/// # Examples
///
/// ```
/// use allen_calculus::allen::AllenRelation;
/// use allen_calculus::network::ConstraintNetwork;
///
/// let mut net = ConstraintNetwork::new();
/// net.add("load", "haul", AllenRelation::PRECEDES)?;
/// net.add("haul", "dump", AllenRelation::PRECEDES)?;
/// assert_eq!(net.get("load", "dump"), AllenRelation::PRECEDES);
/// assert_eq!(net.get("dump", "load"), AllenRelation::PRECEDED_BY);
/// # Ok::<(), allen_calculus::network::Conflict>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintNetwork {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    facts: HashMap<(usize, usize), AllenRelation>,
}

impl ConstraintNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Asserts that the relation from `i` to `j` is at least as tight as
    /// `relation`, then propagates to the fixpoint.
    ///
    /// Unknown interval names are registered. Fails with [`Conflict`] when
    /// the assertion does not refine what is already known for the pair, or
    /// when propagation derives an impossible (empty) relation anywhere in
    /// the network.
    pub fn add(&mut self, i: &str, j: &str, relation: AllenRelation) -> Result<(), Conflict> {
        if i == j {
            self.intern(i);
            // The diagonal is EQUALS by definition and is never stored;
            // an assertion is only acceptable if it admits EQUALS.
            if AllenRelation::EQUALS.implies(relation) {
                return Ok(());
            }
            return Err(Conflict {
                i: i.to_owned(),
                j: j.to_owned(),
                known: AllenRelation::EQUALS,
                candidate: relation,
            });
        }

        let a = self.intern(i);
        let b = self.intern(j);
        let (a, b, relation) = Self::orient(a, b, relation);

        // The asserted fact must refine the recorded one outright; an
        // assertion that merely intersects with it is a contradiction in
        // the caller's inputs.
        let known = self.relation_between(a, b);
        if !relation.implies(known) {
            debug!(
                "conflict asserting {} between '{}' and '{}': known {}",
                relation, self.nodes[a], self.nodes[b], known
            );
            return Err(self.conflict(a, b, known, relation));
        }
        debug!(
            "assert '{}' {} '{}'",
            self.nodes[a], relation, self.nodes[b]
        );

        let mut queue = BinaryHeap::new();
        let mut seq = 0u64;
        queue.push(Pending::new(a, b, relation, seq));

        while let Some(pending) = queue.pop() {
            let current = self.relation_between(pending.i, pending.j);
            let tightened = current & pending.relation;
            if tightened == current {
                continue;
            }
            if tightened.is_empty() {
                debug!(
                    "conflict between '{}' and '{}': derived {} against known {}",
                    self.nodes[pending.i], self.nodes[pending.j], pending.relation, current
                );
                return Err(self.conflict(pending.i, pending.j, current, pending.relation));
            }
            trace!(
                "tighten '{}'-'{}': {} -> {}",
                self.nodes[pending.i],
                self.nodes[pending.j],
                current,
                tightened
            );
            self.facts.insert((pending.i, pending.j), tightened);

            // Recompute both transitive candidates through every third
            // interval and enqueue whatever tightens its pair.
            for k in 0..self.nodes.len() {
                if k == pending.i || k == pending.j {
                    continue;
                }
                let kj = self.relation_between(k, pending.j);
                let candidate = kj & self.relation_between(k, pending.i).compose(tightened);
                if candidate != kj {
                    seq += 1;
                    let (x, y, oriented) = Self::orient(k, pending.j, candidate);
                    queue.push(Pending::new(x, y, oriented, seq));
                }

                let ik = self.relation_between(pending.i, k);
                let candidate = ik & tightened.compose(self.relation_between(pending.j, k));
                if candidate != ik {
                    seq += 1;
                    let (x, y, oriented) = Self::orient(pending.i, k, candidate);
                    queue.push(Pending::new(x, y, oriented, seq));
                }
            }
        }
        Ok(())
    }

    /// The tightest known relation from `i` to `j`.
    ///
    /// `EQUALS` when the names coincide; `FULL` when the pair is
    /// unconstrained or either name has never been registered. Never
    /// registers nodes.
    pub fn get(&self, i: &str, j: &str) -> AllenRelation {
        if i == j {
            return AllenRelation::EQUALS;
        }
        match (self.index.get(i), self.index.get(j)) {
            (Some(&a), Some(&b)) => self.relation_between(a, b),
            _ => AllenRelation::FULL,
        }
    }

    /// The registered interval names, in insertion order.
    pub fn intervals(&self) -> Vec<String> {
        self.nodes.clone()
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(name.to_owned());
        self.index.insert(name.to_owned(), idx);
        idx
    }

    /// Canonical storage orientation: from the earlier-registered interval
    /// to the later one, re-orienting the relation via converse if needed.
    fn orient(i: usize, j: usize, relation: AllenRelation) -> (usize, usize, AllenRelation) {
        if i < j {
            (i, j, relation)
        } else {
            (j, i, relation.converse())
        }
    }

    fn relation_between(&self, i: usize, j: usize) -> AllenRelation {
        if i == j {
            return AllenRelation::EQUALS;
        }
        if i < j {
            self.facts
                .get(&(i, j))
                .copied()
                .unwrap_or(AllenRelation::FULL)
        } else {
            self.facts
                .get(&(j, i))
                .map(|r| r.converse())
                .unwrap_or(AllenRelation::FULL)
        }
    }

    fn conflict(
        &self,
        i: usize,
        j: usize,
        known: AllenRelation,
        candidate: AllenRelation,
    ) -> Conflict {
        Conflict {
            i: self.nodes[i].clone(),
            j: self.nodes[j].clone(),
            known,
            candidate,
        }
    }
}

impl fmt::Display for ConstraintNetwork {
    /// Renders the full pairwise grid. Diagnostic output, not a wire
    /// format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.nodes.len();
        let mut cells = Vec::with_capacity(n);
        for i in 0..n {
            let row: Vec<String> = (0..n)
                .map(|j| self.relation_between(i, j).to_string())
                .collect();
            cells.push(row);
        }

        let mut widths: Vec<usize> = self.nodes.iter().map(|name| name.len()).collect();
        for row in &cells {
            for (j, cell) in row.iter().enumerate() {
                widths[j] = widths[j].max(cell.len());
            }
        }
        let name_width = self.nodes.iter().map(|n| n.len()).max().unwrap_or(0);

        write!(f, "{:name_width$}", "")?;
        for (j, name) in self.nodes.iter().enumerate() {
            write!(f, " {:>width$}", name, width = widths[j])?;
        }
        writeln!(f)?;
        for (i, name) in self.nodes.iter().enumerate() {
            write!(f, "{name:name_width$}")?;
            for (j, cell) in cells[i].iter().enumerate() {
                write!(f, " {:>width$}", cell, width = widths[j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type A = AllenRelation;

    #[test]
    fn test_fresh_network_defaults() {
        let net = ConstraintNetwork::new();
        assert_eq!(net.get("x", "y"), A::FULL);
        assert_eq!(net.get("x", "x"), A::EQUALS);
        assert!(net.intervals().is_empty());
    }

    #[test]
    fn test_transitive_tightening() {
        let mut net = ConstraintNetwork::new();
        net.add("a", "b", A::PRECEDES).unwrap();
        net.add("b", "c", A::PRECEDES).unwrap();
        assert_eq!(net.get("a", "c"), A::PRECEDES);
        assert_eq!(net.get("c", "a"), A::PRECEDED_BY);
    }

    #[test]
    fn test_asserted_conflict() {
        let mut net = ConstraintNetwork::new();
        net.add("a", "b", A::PRECEDES).unwrap();
        let err = net.add("a", "b", A::MEETS).unwrap_err();
        assert_eq!(err.i, "a");
        assert_eq!(err.j, "b");
        assert_eq!(err.known, A::PRECEDES);
        assert_eq!(err.candidate, A::MEETS);
    }

    #[test]
    fn test_cycle_is_rejected() {
        // a before b and c before a propagate to "c before b", so closing
        // the cycle contradicts the already-derived relation.
        let mut net = ConstraintNetwork::new();
        net.add("a", "b", A::PRECEDES).unwrap();
        net.add("c", "a", A::PRECEDES).unwrap();
        assert_eq!(net.get("c", "b"), A::PRECEDES);
        let err = net.add("b", "c", A::PRECEDES).unwrap_err();
        assert_eq!(err.candidate, A::PRECEDES);
        assert_eq!(err.known, A::PRECEDED_BY);
    }

    #[test]
    fn test_asserting_empty_is_conflict() {
        // EMPTY refines everything, but it would record an impossibility;
        // it is rejected instead of silently stored.
        let mut net = ConstraintNetwork::new();
        net.add("a", "b", A::PRECEDES).unwrap();
        let err = net.add("a", "b", A::EMPTY).unwrap_err();
        assert_eq!(err.known, A::PRECEDES);
        assert!(err.candidate.is_empty());
        assert_eq!(net.get("a", "b"), A::PRECEDES);
    }

    #[test]
    fn test_converse_orientation_of_assertions() {
        let mut net = ConstraintNetwork::new();
        net.add("a", "b", A::FULL).unwrap();
        net.add("b", "a", A::MEETS).unwrap();
        assert_eq!(net.get("b", "a"), A::MEETS);
        assert_eq!(net.get("a", "b"), A::MET_BY);
    }

    #[test]
    fn test_idempotent_add() {
        let mut once = ConstraintNetwork::new();
        once.add("a", "b", A::OVERLAPS | A::MEETS).unwrap();
        once.add("b", "c", A::DURING).unwrap();

        let mut twice = once.clone();
        twice.add("a", "b", A::OVERLAPS | A::MEETS).unwrap();
        twice.add("b", "c", A::DURING).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_clone_independence() {
        let mut original = ConstraintNetwork::new();
        original.add("a", "b", A::PRECEDES).unwrap();
        let mut copy = original.clone();

        copy.add("b", "c", A::PRECEDES).unwrap();
        assert_eq!(copy.get("a", "c"), A::PRECEDES);
        assert_eq!(original.get("a", "c"), A::FULL);

        original.add("a", "b", A::PRECEDES).unwrap();
        original.add("x", "y", A::MEETS).unwrap();
        assert_eq!(copy.get("x", "y"), A::FULL);
        assert_eq!(copy.intervals(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_intervals_insertion_order() {
        let mut net = ConstraintNetwork::new();
        net.add("m", "z", A::PRECEDES).unwrap();
        net.add("a", "m", A::PRECEDES).unwrap();
        assert_eq!(net.intervals(), vec!["m", "z", "a"]);
    }

    #[test]
    fn test_diagonal_assertions() {
        let mut net = ConstraintNetwork::new();
        net.add("a", "a", A::EQUALS).unwrap();
        net.add("a", "a", A::FULL).unwrap();
        let err = net.add("a", "a", A::PRECEDES).unwrap_err();
        assert_eq!(err.known, A::EQUALS);
        assert_eq!(err.candidate, A::PRECEDES);
        assert_eq!(net.intervals(), vec!["a"]);
    }

    #[test]
    fn test_tightening_is_monotone() {
        let mut net = ConstraintNetwork::new();
        net.add("a", "b", A::PRECEDES | A::MEETS | A::OVERLAPS).unwrap();
        net.add("a", "b", A::PRECEDES | A::MEETS).unwrap();
        assert_eq!(net.get("a", "b"), A::PRECEDES | A::MEETS);
        // Loosening is rejected, not applied.
        assert!(net.add("a", "b", A::STARTS_EARLIER).is_err());
        assert_eq!(net.get("a", "b"), A::PRECEDES | A::MEETS);
    }

    #[test]
    fn test_propagation_through_meets() {
        // a meets b and b during c puts a's end inside c without pinning
        // down a's begin: osd.
        let mut net = ConstraintNetwork::new();
        net.add("a", "b", A::MEETS).unwrap();
        net.add("b", "c", A::DURING).unwrap();
        assert_eq!(
            net.get("a", "c"),
            A::OVERLAPS | A::STARTS | A::DURING
        );
    }

    #[test]
    fn test_fixpoint_tightens_earlier_pairs() {
        // The third assertion must flow back into the first pair.
        let mut net = ConstraintNetwork::new();
        net.add("a", "b", A::FULL).unwrap();
        net.add("a", "c", A::MEETS).unwrap();
        net.add("c", "b", A::STARTS).unwrap();
        // a meets c and c starts b, so a meets b as well.
        assert_eq!(net.get("a", "b"), A::MEETS);
    }

    #[test]
    fn test_display_grid() {
        let mut net = ConstraintNetwork::new();
        net.add("a", "b", A::PRECEDES).unwrap();
        let grid = net.to_string();
        assert!(grid.contains("a"));
        assert!(grid.contains("b"));
        assert!(grid.contains("(p)"));
        assert!(grid.contains("(P)"));
        assert!(grid.contains("(e)"));
    }

    #[test]
    fn test_network_left_tightened_after_conflict() {
        // Facts written before the contradiction surfaced stay in place.
        let mut net = ConstraintNetwork::new();
        net.add("a", "b", A::PRECEDES).unwrap();
        net.add("c", "a", A::PRECEDES).unwrap();
        assert!(net.add("b", "c", A::PRECEDES).is_err());
        assert_eq!(net.get("a", "b"), A::PRECEDES);
    }
}
