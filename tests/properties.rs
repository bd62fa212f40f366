//! Property-based invariants of the interval algebra.

use idset::{subtract_host_ids, IdMap, Interval, IntervalSet};
use proptest::prelude::*;

// Small coordinates keep sets fragmented enough to exercise merging;
// negative lengths feed in degenerate intervals on purpose.
fn arb_interval() -> impl Strategy<Value = Interval> {
    (-100i64..200, -20i64..40).prop_map(|(start, len)| Interval::new(start, start + len))
}

fn arb_set() -> impl Strategy<Value = IntervalSet> {
    prop::collection::vec(arb_interval(), 0..12).prop_map(|ivs| ivs.into_iter().collect())
}

fn arb_id_map() -> impl Strategy<Value = IdMap> {
    (-50i64..50, -100i64..200, -20i64..60)
        .prop_map(|(container_id, host_id, size)| IdMap::new(container_id, host_id, size))
}

proptest! {
    #[test]
    fn canonical_form_holds(ivs in prop::collection::vec(arb_interval(), 0..12)) {
        let set: IntervalSet = ivs.into_iter().collect();
        let canonical: Vec<Interval> = set.iter().copied().collect();
        for iv in &canonical {
            prop_assert!(!iv.is_empty());
        }
        for pair in canonical.windows(2) {
            // Sorted, disjoint, and not even touching.
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn canonicalization_is_idempotent(set in arb_set()) {
        let rebuilt: IntervalSet = set.iter().copied().collect();
        prop_assert_eq!(rebuilt, set);
    }

    #[test]
    fn union_is_commutative(a in arb_set(), b in arb_set()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_is_associative(a in arb_set(), b in arb_set(), c in arb_set()) {
        prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
    }

    #[test]
    fn union_is_idempotent(a in arb_set()) {
        prop_assert_eq!(a.union(&a), a);
    }

    #[test]
    fn subtracting_self_empties(a in arb_set()) {
        prop_assert_eq!(a.subtract(&a).size(), 0);
    }

    #[test]
    fn subtraction_result_is_within_self(a in arb_set(), b in arb_set()) {
        let diff = a.subtract(&b);
        prop_assert_eq!(diff.subtract(&a).size(), 0);
        prop_assert!(a.union(&diff).size() >= diff.size());
    }

    #[test]
    fn subtraction_and_intersection_partition_self(a in arb_set(), b in arb_set()) {
        // |a| == |a \ b| + |a ∩ b|, with the intersection computed
        // through double subtraction.
        let diff = a.subtract(&b);
        let inter = a.subtract(&diff);
        prop_assert_eq!(a.size(), diff.size() + inter.size());
    }

    #[test]
    fn size_agrees_with_iteration(a in arb_set()) {
        let total: i64 = a.iter().map(|iv| iv.len()).sum();
        prop_assert_eq!(a.size(), total);
        let rebuilt: IntervalSet = a.iter().copied().collect();
        prop_assert_eq!(rebuilt.size(), a.size());
    }

    #[test]
    fn zip_consumes_the_shorter_side_exactly(a in arb_set(), b in arb_set()) {
        let consumed: i64 = a.zip(&b).map(|m| m.size).sum();
        prop_assert_eq!(consumed, a.size().min(b.size()));
    }

    #[test]
    fn zip_records_are_valid_and_ordered(a in arb_set(), b in arb_set()) {
        let records: Vec<IdMap> = a.zip(&b).collect();
        for m in &records {
            prop_assert!(m.size > 0);
        }
        for pair in records.windows(2) {
            prop_assert!(pair[0].host_id + pair[0].size <= pair[1].host_id);
            prop_assert!(pair[1].container_id >= pair[0].container_id + pair[0].size);
        }
    }

    #[test]
    fn find_available_errors_iff_capacity_is_short(a in arb_set(), n in 0i64..100) {
        match a.find_available(n) {
            Ok(taken) => {
                prop_assert!(n <= a.size());
                prop_assert_eq!(taken.size(), n);
                // The result is a subset of self.
                prop_assert_eq!(taken.subtract(&a).size(), 0);
            }
            Err(_) => prop_assert!(n > a.size()),
        }
    }

    #[test]
    fn find_available_takes_the_lowest_ids(a in arb_set(), n in 1i64..100) {
        if let Ok(taken) = a.find_available(n) {
            // Everything in self below the top of the allocation is
            // part of the allocation: no free ID was skipped.
            if let Some(top) = taken.iter().last().map(|iv| iv.end) {
                let below: IntervalSet = a
                    .iter()
                    .map(|iv| Interval::new(iv.start, iv.end.min(top)))
                    .collect();
                prop_assert_eq!(below, taken);
            }
        }
    }

    #[test]
    fn host_subtraction_preserves_the_lockstep_offset(
        avail in arb_id_map(),
        used in arb_id_map(),
    ) {
        let offset = avail.container_id - avail.host_id;
        let pieces = subtract_host_ids(avail, used);
        let mut covered = 0;
        for piece in &pieces {
            prop_assert!(piece.size > 0);
            prop_assert_eq!(piece.container_id - piece.host_id, offset);
            covered += piece.size;
        }
        // What survives is avail's host range minus the used host range.
        let expected = IntervalSet::from(avail.host_interval())
            .subtract(&IntervalSet::from(used.host_interval()))
            .size();
        prop_assert_eq!(covered, expected);
    }
}
