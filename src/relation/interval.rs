//! Interval endpoints for the comparison factories.

use thiserror::Error;

/// Raised when an interval's start does not strictly precede its end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("interval start must strictly precede its end")]
pub struct InvalidInterval;

/// An interval with possibly unknown endpoints.
///
/// The qualitative calculi never inspect endpoint values directly; they only
/// compare them. An endpoint may therefore be left as `None` ("indefinite"),
/// in which case the `relation(x, y)` factories widen their answer toward
/// `FULL` instead of failing.
///
/// Only proper intervals are representable: when both endpoints are known,
/// the start must strictly precede the end.
///
/// # Examples
///
/// ```
/// use allen_calculus::relation::Interval;
///
/// let known = Interval::new(Some(1), Some(5))?;
/// let open_ended = Interval::new(Some(3), None)?;
/// assert_eq!(known.start(), Some(&1));
/// assert_eq!(open_ended.end(), None);
/// # Ok::<(), allen_calculus::relation::InvalidInterval>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    start: Option<T>,
    end: Option<T>,
}

impl<T: PartialOrd> Interval<T> {
    /// Creates an interval, rejecting a degenerate or inverted one when both
    /// endpoints are known.
    pub fn new(start: Option<T>, end: Option<T>) -> Result<Self, InvalidInterval> {
        if let (Some(s), Some(e)) = (&start, &end) {
            if s >= e {
                return Err(InvalidInterval);
            }
        }
        Ok(Self { start, end })
    }

    /// An interval with both endpoints unknown.
    pub fn unknown() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Convenience constructor for a fully known interval.
    pub fn bounded(start: T, end: T) -> Result<Self, InvalidInterval> {
        Self::new(Some(start), Some(end))
    }
}

impl<T> Interval<T> {
    /// The start endpoint, if known.
    pub fn start(&self) -> Option<&T> {
        self.start.as_ref()
    }

    /// The end endpoint, if known.
    pub fn end(&self) -> Option<&T> {
        self.end.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded() {
        let i = Interval::bounded(1, 4).unwrap();
        assert_eq!(i.start(), Some(&1));
        assert_eq!(i.end(), Some(&4));
    }

    #[test]
    fn test_rejects_degenerate() {
        assert_eq!(Interval::bounded(3, 3), Err(InvalidInterval));
        assert_eq!(Interval::bounded(5, 2), Err(InvalidInterval));
    }

    #[test]
    fn test_partial_endpoints_allowed() {
        assert!(Interval::new(Some(7), None).is_ok());
        assert!(Interval::new(None, Some(7)).is_ok());
        assert!(Interval::<i32>::new(None, None).is_ok());
    }
}
