use core::cmp::{max, min};
use core::fmt;
use core::ops::Range;

/// A half-open range of numeric IDs, bounded inclusively below and
/// exclusively above (`start..end`).
///
/// An interval with `start >= end` is _degenerate_ and means "no IDs".
/// Degenerate intervals are absorbed by every operation rather than
/// rejected: they have length zero, intersect nothing, and are dropped
/// on the way into an [`IntervalSet`](crate::IntervalSet).
///
/// Intervals are plain `Copy` values with no identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Interval {
        Interval { start, end }
    }

    /// Number of IDs covered. Zero for degenerate intervals.
    pub fn len(&self) -> i64 {
        max(0, self.end - self.start)
    }

    /// Returns `true` if this interval covers no IDs (`end <= start`).
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns `true` if the given ID lies within this interval.
    pub fn contains(&self, id: i64) -> bool {
        self.start <= id && id < self.end
    }

    /// Returns `true` if the two intervals share at least one ID.
    pub fn overlaps(&self, other: &Interval) -> bool {
        // Strictly less than, because ends are excluded.
        max(self.start, other.start) < min(self.end, other.end)
    }

    /// Returns `true` if the two intervals overlap or are immediately
    /// adjacent, i.e. they could be joined into a single range.
    pub fn touches(&self, other: &Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        // Less-than-or-equal-to because if one end is excluded,
        // the other is included.
        max(self.start, other.start) <= min(self.end, other.end)
    }

    /// The overlap of the two intervals. Degenerate if they don't
    /// overlap. Symmetric.
    pub fn intersect(&self, other: &Interval) -> Interval {
        Interval {
            start: max(self.start, other.start),
            end: min(self.end, other.end),
        }
    }

    /// Returns `true` if every ID of `self` is below every ID of
    /// `other`. False in both directions when either operand is
    /// degenerate: "nothing" is not before anything.
    pub fn before(&self, other: &Interval) -> bool {
        !self.is_empty() && !other.is_empty() && self.end <= other.start
    }

    /// Splits `self` around `other`: the part strictly below
    /// `other.start` and the part strictly above `other.end`, each
    /// present only if non-empty. This is the primitive behind
    /// [`IntervalSet::subtract`](crate::IntervalSet::subtract).
    ///
    /// A degenerate `other` removes nothing.
    pub fn bisect(&self, other: &Interval) -> (Option<Interval>, Option<Interval>) {
        if self.is_empty() {
            return (None, None);
        }
        if other.is_empty() {
            return (Some(*self), None);
        }
        let lower = Interval {
            start: self.start,
            end: min(self.end, other.start),
        };
        let upper = Interval {
            start: max(self.start, other.end),
            end: self.end,
        };
        (lower.nonempty(), upper.nonempty())
    }

    /// Fuses two intervals that are disjoint and exactly contiguous
    /// (`self.end == other.start` or the mirror image). Returns `None`
    /// for overlapping, equal, gapped, or degenerate pairs. Symmetric.
    pub fn adjoin(&self, other: &Interval) -> Option<Interval> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        if self.end == other.start {
            Some(Interval {
                start: self.start,
                end: other.end,
            })
        } else if other.end == self.start {
            Some(Interval {
                start: other.start,
                end: self.end,
            })
        } else {
            None
        }
    }

    /// The minimal interval containing both operands, gap included.
    /// A degenerate operand is absorbed; `None` only when both are
    /// degenerate. Symmetric.
    pub fn encompass(&self, other: &Interval) -> Option<Interval> {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => None,
            (true, false) => Some(*other),
            (false, true) => Some(*self),
            (false, false) => Some(Interval {
                start: min(self.start, other.start),
                end: max(self.end, other.end),
            }),
        }
    }

    fn nonempty(self) -> Option<Interval> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl From<Range<i64>> for Interval {
    fn from(range: Range<i64>) -> Interval {
        Interval {
            start: range.start,
            end: range.end,
        }
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
