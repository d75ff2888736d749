//! The 5-basis point–interval relation and its comparison factory.

use std::cmp::Ordering;

use super::table;
use crate::allen::AllenRelation;
use crate::relation::{Basis, Interval, Relation};

/// Basis tag of the point–interval calculus.
///
/// Ordinal order is `b c i t a`; the converse of ordinal `i` is ordinal
/// `4 - i`, so the generic bit-reversal converse applies (the converse reads
/// the relation from the interval's side: *before* becomes *after*,
/// *commences* becomes *terminates*, *in* is self-converse).
pub enum PointIntervalBasis {}

impl Basis for PointIntervalBasis {
    const N: usize = 5;
    const SYMBOLS: &'static [u8] = b"bcita";
    const NAME: &'static str = "point-interval";
}

/// A general relation between a point and a proper interval.
///
/// # Examples
///
/// ```
/// use allen_calculus::point::PointIntervalRelation;
///
/// let r = PointIntervalRelation::from_symbols("bci");
/// assert_eq!(r, PointIntervalRelation::BEFORE_END);
/// assert!(PointIntervalRelation::IN.implies(r));
/// ```
pub type PointIntervalRelation = Relation<PointIntervalBasis>;

impl PointIntervalRelation {
    /// `t b Y`: the point falls before the interval begins.
    pub const BEFORE: Self = Self::basic(0);
    /// `t c Y`: the point coincides with the interval's begin.
    pub const COMMENCES: Self = Self::basic(1);
    /// `t i Y`: the point falls strictly inside the interval.
    pub const IN: Self = Self::basic(2);
    /// `t t Y`: the point coincides with the interval's end.
    pub const TERMINATES: Self = Self::basic(3);
    /// `t a Y`: the point falls after the interval ends.
    pub const AFTER: Self = Self::basic(4);

    /// All 5 basic relations in canonical order.
    pub const BASICS: [Self; 5] = [
        Self::BEFORE,
        Self::COMMENCES,
        Self::IN,
        Self::TERMINATES,
        Self::AFTER,
    ];

    /// `(bci)` — the point falls before the interval ends.
    pub const BEFORE_END: Self = Self::from_mask(
        Self::BEFORE.mask() | Self::COMMENCES.mask() | Self::IN.mask(),
    );

    /// `(ita)` — the point falls after the interval begins.
    pub const AFTER_BEGIN: Self = Self::from_mask(
        Self::IN.mask() | Self::TERMINATES.mask() | Self::AFTER.mask(),
    );

    /// Composes a point–interval relation with an interval–interval
    /// relation: given how t relates to Y and how Y relates to Z, the union
    /// of the table cells gives how t relates to Z.
    pub fn compose(self, other: AllenRelation) -> PointIntervalRelation {
        let mut mask = 0u16;
        for a in self.basics() {
            for b in other.basics() {
                mask |= table::COMPOSITION[a][b];
            }
        }
        Self::from_mask(mask)
    }

    /// The most certain relation between a point and an interval implied by
    /// the interval's definite endpoints, under `Ord`.
    ///
    /// # Examples
    ///
    /// ```
    /// use allen_calculus::point::PointIntervalRelation;
    /// use allen_calculus::relation::Interval;
    ///
    /// let y = Interval::bounded(2, 6)?;
    /// assert_eq!(
    ///     PointIntervalRelation::relation(&4, &y),
    ///     PointIntervalRelation::IN,
    /// );
    ///
    /// let open = Interval::new(None, Some(6))?;
    /// assert_eq!(
    ///     PointIntervalRelation::relation(&4, &open),
    ///     PointIntervalRelation::BEFORE_END,
    /// );
    /// # Ok::<(), allen_calculus::relation::InvalidInterval>(())
    /// ```
    pub fn relation<T: Ord>(t: &T, y: &Interval<T>) -> PointIntervalRelation {
        Self::relation_by(t, y, T::cmp)
    }

    /// Like [`relation`](PointIntervalRelation::relation), with a
    /// caller-supplied total-order comparator.
    pub fn relation_by<T, C>(t: &T, y: &Interval<T>, mut cmp: C) -> PointIntervalRelation
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut result = Self::FULL;
        if let Some(start) = y.start() {
            result = result
                & match cmp(t, start) {
                    Ordering::Less => Self::BEFORE,
                    Ordering::Equal => Self::COMMENCES,
                    Ordering::Greater => Self::AFTER_BEGIN,
                };
        }
        if let Some(end) = y.end() {
            result = result
                & match cmp(t, end) {
                    Ordering::Less => Self::BEFORE_END,
                    Ordering::Equal => Self::TERMINATES,
                    Ordering::Greater => Self::AFTER,
                };
        }
        result
    }
}
