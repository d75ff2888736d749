//! The 13-basis interval relation and its comparison factory.

use std::cmp::Ordering;

use super::table;
use crate::relation::{Basis, Interval, Relation};

/// Basis tag of the interval–interval calculus.
///
/// Ordinal order is `p m o F D s e S d f O M P`, chosen so that the
/// converse of ordinal `i` is ordinal `12 - i` and the generic bit-reversal
/// converse applies.
pub enum AllenBasis {}

impl Basis for AllenBasis {
    const N: usize = 13;
    const SYMBOLS: &'static [u8] = b"pmoFDseSdfOMP";
    const NAME: &'static str = "allen";
}

/// A general relation between two proper intervals.
///
/// # Examples
///
/// ```
/// use allen_calculus::allen::AllenRelation;
///
/// let r = AllenRelation::PRECEDES | AllenRelation::MEETS;
/// assert_eq!(r.to_string(), "(pm)");
/// assert_eq!(r.converse(), AllenRelation::MET_BY | AllenRelation::PRECEDED_BY);
/// assert_eq!(
///     AllenRelation::PRECEDES.compose(AllenRelation::PRECEDES),
///     AllenRelation::PRECEDES,
/// );
/// ```
pub type AllenRelation = Relation<AllenBasis>;

impl AllenRelation {
    /// `X p Y`: X ends before Y begins.
    pub const PRECEDES: Self = Self::basic(0);
    /// `X m Y`: X ends exactly where Y begins.
    pub const MEETS: Self = Self::basic(1);
    /// `X o Y`: X begins first, they overlap, Y ends last.
    pub const OVERLAPS: Self = Self::basic(2);
    /// `X F Y`: Y finishes X — same end, X begins first.
    pub const FINISHED_BY: Self = Self::basic(3);
    /// `X D Y`: Y lies strictly inside X.
    pub const CONTAINS: Self = Self::basic(4);
    /// `X s Y`: X starts Y — same begin, X ends first.
    pub const STARTS: Self = Self::basic(5);
    /// `X e Y`: identical intervals.
    pub const EQUALS: Self = Self::basic(6);
    /// `X S Y`: Y starts X — same begin, Y ends first.
    pub const STARTED_BY: Self = Self::basic(7);
    /// `X d Y`: X lies strictly inside Y.
    pub const DURING: Self = Self::basic(8);
    /// `X f Y`: X finishes Y — same end, Y begins first.
    pub const FINISHES: Self = Self::basic(9);
    /// `X O Y`: Y begins first, they overlap, X ends last.
    pub const OVERLAPPED_BY: Self = Self::basic(10);
    /// `X M Y`: Y ends exactly where X begins.
    pub const MET_BY: Self = Self::basic(11);
    /// `X P Y`: Y ends before X begins.
    pub const PRECEDED_BY: Self = Self::basic(12);

    /// All 13 basic relations in canonical order.
    pub const BASICS: [Self; 13] = [
        Self::PRECEDES,
        Self::MEETS,
        Self::OVERLAPS,
        Self::FINISHED_BY,
        Self::CONTAINS,
        Self::STARTS,
        Self::EQUALS,
        Self::STARTED_BY,
        Self::DURING,
        Self::FINISHES,
        Self::OVERLAPPED_BY,
        Self::MET_BY,
        Self::PRECEDED_BY,
    ];

    /// `(pmoFD)` — X begins before Y begins.
    pub const STARTS_EARLIER: Self = Self::from_mask(
        Self::PRECEDES.mask()
            | Self::MEETS.mask()
            | Self::OVERLAPS.mask()
            | Self::FINISHED_BY.mask()
            | Self::CONTAINS.mask(),
    );

    /// `(seS)` — X and Y begin together.
    pub const START_TOGETHER: Self = Self::from_mask(
        Self::STARTS.mask() | Self::EQUALS.mask() | Self::STARTED_BY.mask(),
    );

    /// `(dfOMP)` — X begins after Y begins.
    pub const STARTS_LATER: Self = Self::from_mask(
        Self::DURING.mask()
            | Self::FINISHES.mask()
            | Self::OVERLAPPED_BY.mask()
            | Self::MET_BY.mask()
            | Self::PRECEDED_BY.mask(),
    );

    /// `(pmosd)` — X ends before Y ends.
    pub const ENDS_EARLIER: Self = Self::from_mask(
        Self::PRECEDES.mask()
            | Self::MEETS.mask()
            | Self::OVERLAPS.mask()
            | Self::STARTS.mask()
            | Self::DURING.mask(),
    );

    /// `(Fef)` — X and Y end together.
    pub const END_TOGETHER: Self = Self::from_mask(
        Self::FINISHED_BY.mask() | Self::EQUALS.mask() | Self::FINISHES.mask(),
    );

    /// `(DSOMP)` — X ends after Y ends.
    pub const ENDS_LATER: Self = Self::from_mask(
        Self::CONTAINS.mask()
            | Self::STARTED_BY.mask()
            | Self::OVERLAPPED_BY.mask()
            | Self::MET_BY.mask()
            | Self::PRECEDED_BY.mask(),
    );

    /// `(oFD)` — Y's begin falls strictly inside X.
    pub const CONTAINS_START: Self = Self::from_mask(
        Self::OVERLAPS.mask() | Self::FINISHED_BY.mask() | Self::CONTAINS.mask(),
    );

    /// `(DSO)` — Y's end falls strictly inside X.
    pub const CONTAINS_END: Self = Self::from_mask(
        Self::CONTAINS.mask() | Self::STARTED_BY.mask() | Self::OVERLAPPED_BY.mask(),
    );

    /// `(oFDseSdfO)` — X and Y share at least one inner moment: everything
    /// except the four disjoint relations `p m M P`.
    pub const CONCURS_WITH: Self = Self::from_mask(
        Self::FULL.mask()
            & !(Self::PRECEDES.mask()
                | Self::MEETS.mask()
                | Self::MET_BY.mask()
                | Self::PRECEDED_BY.mask()),
    );

    /// Composes two interval relations through the 13×13 table: the union
    /// over every pair of implied basic relations.
    ///
    /// Not commutative. `EMPTY` composed with anything is `EMPTY`.
    pub fn compose(self, other: AllenRelation) -> AllenRelation {
        let mut mask = 0u16;
        for a in self.basics() {
            for b in other.basics() {
                mask |= table::COMPOSITION[a][b];
            }
        }
        Self::from_mask(mask)
    }

    /// The most certain relation between two intervals implied by their
    /// definite endpoints, under `Ord`.
    ///
    /// An unknown endpoint simply contributes no constraint, widening the
    /// answer toward `FULL`; with all four endpoints known the result is
    /// basic.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_calculus::allen::AllenRelation;
    /// use allen_calculus::relation::Interval;
    ///
    /// let a = Interval::bounded(1, 3)?;
    /// let b = Interval::bounded(3, 8)?;
    /// assert_eq!(AllenRelation::relation(&a, &b), AllenRelation::MEETS);
    ///
    /// // Y's begin is known to fall strictly inside X.
    /// let c = Interval::new(Some(5), None)?;
    /// assert_eq!(
    ///     AllenRelation::relation(&b, &c),
    ///     AllenRelation::CONTAINS_START,
    /// );
    /// # Ok::<(), allen_calculus::relation::InvalidInterval>(())
    /// ```
    pub fn relation<T: Ord>(x: &Interval<T>, y: &Interval<T>) -> AllenRelation {
        Self::relation_by(x, y, T::cmp)
    }

    /// Like [`relation`](AllenRelation::relation), with a caller-supplied
    /// total-order comparator.
    pub fn relation_by<T, C>(x: &Interval<T>, y: &Interval<T>, mut cmp: C) -> AllenRelation
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut result = Self::FULL;
        if let (Some(xs), Some(ys)) = (x.start(), y.start()) {
            result = result
                & match cmp(xs, ys) {
                    Ordering::Less => Self::STARTS_EARLIER,
                    Ordering::Equal => Self::START_TOGETHER,
                    Ordering::Greater => Self::STARTS_LATER,
                };
        }
        if let (Some(xe), Some(ye)) = (x.end(), y.end()) {
            result = result
                & match cmp(xe, ye) {
                    Ordering::Less => Self::ENDS_EARLIER,
                    Ordering::Equal => Self::END_TOGETHER,
                    Ordering::Greater => Self::ENDS_LATER,
                };
        }
        if let (Some(xe), Some(ys)) = (x.end(), y.start()) {
            result = result
                & match cmp(xe, ys) {
                    Ordering::Less => Self::PRECEDES,
                    Ordering::Equal => Self::MEETS,
                    Ordering::Greater => Self::FULL - (Self::PRECEDES | Self::MEETS),
                };
        }
        if let (Some(xs), Some(ye)) = (x.start(), y.end()) {
            result = result
                & match cmp(xs, ye) {
                    Ordering::Greater => Self::PRECEDED_BY,
                    Ordering::Equal => Self::MET_BY,
                    Ordering::Less => Self::FULL - (Self::MET_BY | Self::PRECEDED_BY),
                };
        }
        result
    }
}
