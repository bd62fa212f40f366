use alloc::vec::Vec;
use core::fmt;
use core::iter::FromIterator;

#[cfg(feature = "serde1")]
use serde::{
    de::{Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, Serializer},
};

use crate::error::Error;
use crate::interval::Interval;
use crate::zip::Zip;

/// An immutable set of IDs, stored as sorted, disjoint half-open
/// intervals.
///
/// The set is always in canonical form: degenerate input intervals are
/// dropped, and inputs that overlap or are immediately adjacent are
/// coalesced into a single maximal interval. Two sets are equal exactly
/// when their canonical interval lists are equal, regardless of how
/// fragmented or disordered the inputs were.
///
/// Every operation returns a new set; nothing is mutated after
/// construction, so instances can be shared freely across threads.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct IntervalSet {
    ivs: Vec<Interval>,
}

impl IntervalSet {
    /// Makes a new empty `IntervalSet`.
    pub fn new() -> IntervalSet {
        IntervalSet { ivs: Vec::new() }
    }

    /// Gets an ordered iterator over the canonical intervals,
    /// ascending by start. Each call starts a fresh traversal.
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.ivs.iter()
    }

    /// Returns `true` if the set covers no IDs.
    pub fn is_empty(&self) -> bool {
        self.ivs.is_empty()
    }

    /// Returns `true` if any interval in the set covers the given ID.
    pub fn contains(&self, id: i64) -> bool {
        let idx = self.ivs.partition_point(|iv| iv.start <= id);
        idx > 0 && self.ivs[idx - 1].contains(id)
    }

    /// Total number of IDs covered.
    pub fn size(&self) -> i64 {
        self.ivs.iter().map(Interval::len).sum()
    }

    /// The set of IDs covered by either operand. Interval boundaries
    /// from the two inputs fuse wherever they overlap or touch.
    pub fn union(&self, other: &IntervalSet) -> IntervalSet {
        self.iter().chain(other.iter()).copied().collect()
    }

    /// The set of IDs in `self` but not in `other`.
    ///
    /// Subtracting the empty set returns `self` unchanged. Each
    /// interval of `self` is bisected around every interval of `other`
    /// that reaches it.
    pub fn subtract(&self, other: &IntervalSet) -> IntervalSet {
        let mut out = Vec::new();
        for &iv in &self.ivs {
            let mut rest = Some(iv);
            for o in &other.ivs {
                let Some(cur) = rest else { break };
                if cur.before(o) {
                    // Both lists ascend, so nothing further can reach
                    // the current fragment either.
                    break;
                }
                let (lower, upper) = cur.bisect(o);
                if let Some(lower) = lower {
                    out.push(lower);
                }
                rest = upper;
            }
            if let Some(cur) = rest {
                out.push(cur);
            }
        }
        // Fragments only ever shrink, so they stay sorted and mutually
        // non-touching; no re-normalization needed.
        IntervalSet { ivs: out }
    }

    /// The first `n` IDs of the set in ascending order, spanning as
    /// many intervals as needed.
    ///
    /// Requesting zero or fewer IDs yields the empty set. Requesting
    /// more IDs than the set holds is [`Error::NotEnoughIds`].
    pub fn find_available(&self, n: i64) -> Result<IntervalSet, Error> {
        if n <= 0 {
            return Ok(IntervalSet::new());
        }
        let mut taken = Vec::new();
        let mut remaining = n;
        for iv in &self.ivs {
            let take = remaining.min(iv.len());
            taken.push(Interval::new(iv.start, iv.start + take));
            remaining -= take;
            if remaining == 0 {
                return Ok(IntervalSet { ivs: taken });
            }
        }
        Err(Error::NotEnoughIds {
            requested: n,
            available: n - remaining,
        })
    }

    /// Pairs this set (host side) with `container` (container side)
    /// unit-by-unit, yielding maximal mapping records and stopping at
    /// whichever side runs out first. See [`Zip`].
    pub fn zip<'a>(&'a self, container: &'a IntervalSet) -> Zip<'a> {
        Zip::new(self.ivs.iter(), container.ivs.iter())
    }
}

/// Builds the canonical set from arbitrary raw intervals: degenerate
/// entries are dropped, the rest are sorted and coalesced.
impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> IntervalSet {
        let mut raw: Vec<Interval> = iter.into_iter().filter(|iv| !iv.is_empty()).collect();
        raw.sort_unstable_by_key(|iv| (iv.start, iv.end));
        let mut ivs: Vec<Interval> = Vec::with_capacity(raw.len());
        for iv in raw {
            match ivs.last_mut() {
                Some(last) if last.touches(&iv) => last.end = last.end.max(iv.end),
                _ => ivs.push(iv),
            }
        }
        IntervalSet { ivs }
    }
}

impl From<Interval> for IntervalSet {
    fn from(iv: Interval) -> IntervalSet {
        core::iter::once(iv).collect()
    }
}

// We can't just derive this automatically, because that would
// expose irrelevant (and private) implementation details.
// Instead render it as what it is: a set of ranges.
impl fmt::Debug for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde1")]
impl Serialize for IntervalSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.ivs.len()))?;
        for iv in self.iter() {
            seq.serialize_element(&(iv.start, iv.end))?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde1")]
impl<'de> Deserialize<'de> for IntervalSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(IntervalSetVisitor)
    }
}

#[cfg(feature = "serde1")]
struct IntervalSetVisitor;

#[cfg(feature = "serde1")]
impl<'de> Visitor<'de> for IntervalSetVisitor {
    type Value = IntervalSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("IntervalSet")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut ivs = Vec::new();
        while let Some((start, end)) = access.next_element()? {
            ivs.push(Interval::new(start, end));
        }
        // Re-normalize, so hand-edited input cannot smuggle in a
        // non-canonical set.
        Ok(ivs.into_iter().collect())
    }
}
