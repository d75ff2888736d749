//! The generic bitmask relation type.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, Sub};

/// Describes the fixed basis of a qualitative calculus.
///
/// A basis is an ordered list of at most 16 basic relations, each identified
/// by its ordinal and a single-letter code. Implementors are zero-sized tag
/// types; they carry no values and exist only to parameterize [`Relation`].
///
/// The ordering is part of the calculus definition: the converse of the
/// basic relation with ordinal `i` must be the basic relation with ordinal
/// `N - 1 - i`, so that the converse of any general relation is the bit
/// reversal of its mask.
pub trait Basis: 'static {
    /// Number of basic relations in the basis.
    const N: usize;

    /// Single-letter codes for the basic relations, in ordinal order.
    ///
    /// Must have exactly `N` entries, all distinct.
    const SYMBOLS: &'static [u8];

    /// Short name used in `Debug` output.
    const NAME: &'static str;
}

/// A general qualitative relation over the basis `B`.
///
/// Encodes a subset of the basic relations as a bitmask: bit `i` is set iff
/// the basic relation with ordinal `i` is a member. The 2^N possible values
/// form a Boolean lattice under implication, with [`Relation::EMPTY`] at the
/// bottom (impossible) and [`Relation::FULL`] at the top (no information).
///
/// Values cannot be built from raw masks. The only way to obtain one is via
/// the named constants of a concrete calculus, the set operations, or
/// [`from_symbols`](Relation::from_symbols), so every reachable value is a
/// legal subset of the basis.
///
/// Because the basis is a type parameter, relations over different bases are
/// different types: mixing them in `implies`, `&`, or `|` is a compile-time
/// error rather than a runtime panic.
pub struct Relation<B: Basis> {
    mask: u16,
    basis: PhantomData<B>,
}

impl<B: Basis> Relation<B> {
    /// The impossible relation: no basic relation is a member.
    pub const EMPTY: Self = Self::from_mask(0);

    /// The fully uncertain relation: every basic relation is a member.
    pub const FULL: Self = Self::from_mask((1 << B::N) - 1);

    /// Builds a relation from a raw mask. Crate-internal: callers must
    /// guarantee the mask only uses the low `B::N` bits.
    pub(crate) const fn from_mask(mask: u16) -> Self {
        Self {
            mask,
            basis: PhantomData,
        }
    }

    /// The basic relation with the given ordinal.
    pub(crate) const fn basic(ordinal: usize) -> Self {
        Self::from_mask(1 << ordinal)
    }

    pub(crate) const fn mask(self) -> u16 {
        self.mask
    }

    /// Whether exactly one basic relation is a member.
    pub fn is_basic(self) -> bool {
        self.mask.count_ones() == 1
    }

    /// Whether this is [`EMPTY`](Relation::EMPTY).
    pub fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// Whether this is [`FULL`](Relation::FULL).
    pub fn is_full(self) -> bool {
        self == Self::FULL
    }

    /// The ordinal of the single member, or `None` if the relation is not
    /// basic.
    pub fn ordinal(self) -> Option<usize> {
        if self.is_basic() {
            Some(self.mask.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// Subset test: every basic relation implied by `self` is also implied
    /// by `other`.
    ///
    /// [`EMPTY`](Relation::EMPTY) implies everything; everything implies
    /// [`FULL`](Relation::FULL).
    pub fn implies(self, other: Self) -> bool {
        self.mask & !other.mask == 0
    }

    /// Converse subset test: `a.implied_by(b)` is `b.implies(a)`.
    pub fn implied_by(self, other: Self) -> bool {
        other.implies(self)
    }

    /// The relation seen from the other operand's side.
    ///
    /// Because the basis is ordered so that converse pairs mirror around the
    /// middle, this is a bit reversal of the mask. It is an involution, and
    /// it fixes both `EMPTY` and `FULL`.
    pub fn converse(self) -> Self {
        Self::from_mask(self.mask.reverse_bits() >> (u16::BITS as usize - B::N))
    }

    /// The set complement within the basis.
    ///
    /// This is an involution, but it is *not* logical negation: a general
    /// relation failing to imply `r` does not make it imply `complement(r)`.
    /// Only for a *basic* probe do the two coincide.
    pub fn complement(self) -> Self {
        Self::from_mask(!self.mask & Self::FULL.mask)
    }

    /// Union of any number of relations. With no operands this is
    /// [`EMPTY`](Relation::EMPTY); the union of all basic relations is
    /// [`FULL`](Relation::FULL).
    pub fn union<I>(relations: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        relations.into_iter().fold(Self::EMPTY, |acc, r| acc | r)
    }

    /// Intersection of any number of relations. With no operands this is
    /// [`FULL`](Relation::FULL).
    pub fn intersection<I>(relations: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        relations.into_iter().fold(Self::FULL, |acc, r| acc & r)
    }

    /// Set difference: the members of `self` that `other` does not contain.
    ///
    /// Used to narrow a relation by excluding possibilities ruled out
    /// elsewhere. Also available as the `-` operator.
    pub fn minus(self, other: Self) -> Self {
        Self::from_mask(self.mask & !other.mask)
    }

    /// Normalized measure of how little the relation pins down, as the
    /// fraction of extra basic relations it admits: 0.0 for any basic
    /// relation, 1.0 for [`FULL`](Relation::FULL), and NaN for
    /// [`EMPTY`](Relation::EMPTY), which admits nothing at all.
    ///
    /// This is a propagation-order heuristic, never a correctness input.
    pub fn uncertainty(self) -> f64 {
        let members = self.mask.count_ones();
        if members == 0 {
            return f64::NAN;
        }
        (members - 1) as f64 / (B::N - 1) as f64
    }

    /// Number of basic relations that are members.
    pub(crate) fn member_count(self) -> u32 {
        self.mask.count_ones()
    }

    /// Iterates over the ordinals of the member basic relations, in
    /// canonical order.
    pub(crate) fn basics(self) -> impl Iterator<Item = usize> {
        let mask = self.mask;
        (0..B::N).filter(move |i| mask & (1 << i) != 0)
    }

    /// Parses a relation from basic-relation letters.
    ///
    /// Letters may appear in any order and any number of times; characters
    /// that are not a basic-relation code of this basis (including the
    /// wrapping parentheses produced by `Display`) are ignored, so the
    /// function is total and round-trips with `Display`.
    pub fn from_symbols(s: &str) -> Self {
        let mut mask = 0u16;
        for byte in s.bytes() {
            if let Some(ordinal) = B::SYMBOLS.iter().position(|&sym| sym == byte) {
                mask |= 1 << ordinal;
            }
        }
        Self::from_mask(mask)
    }
}

impl<B: Basis> Clone for Relation<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Basis> Copy for Relation<B> {}

impl<B: Basis> PartialEq for Relation<B> {
    fn eq(&self, other: &Self) -> bool {
        self.mask == other.mask
    }
}

impl<B: Basis> Eq for Relation<B> {}

impl<B: Basis> std::hash::Hash for Relation<B> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.mask.hash(state);
    }
}

impl<B: Basis> BitOr for Relation<B> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_mask(self.mask | rhs.mask)
    }
}

impl<B: Basis> BitAnd for Relation<B> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_mask(self.mask & rhs.mask)
    }
}

impl<B: Basis> Sub for Relation<B> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.minus(rhs)
    }
}

impl<B: Basis> fmt::Display for Relation<B> {
    /// Canonical textual form: the letters of the member basic relations in
    /// ordinal order, wrapped in parentheses. `EMPTY` prints as `()`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for ordinal in self.basics() {
            write!(f, "{}", B::SYMBOLS[ordinal] as char)?;
        }
        write!(f, ")")
    }
}

impl<B: Basis> fmt::Debug for Relation<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", B::NAME, self)
    }
}

#[cfg(feature = "serde")]
impl<B: Basis> serde::Serialize for Relation<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, B: Basis> serde::Deserialize<'de> for Relation<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_symbols(&s))
    }
}
