#![no_main]
use libfuzzer_sys::fuzz_target;

use idset::{Interval, IntervalSet};

// Small coordinates so that overlaps, adjacency and duplicates
// actually happen instead of everything landing far apart.
fuzz_target!(|raw: Vec<(i8, i8)>| {
    let set: IntervalSet = raw
        .iter()
        .map(|&(start, end)| Interval::new(start as i64, end as i64))
        .collect();

    // Canonical form: valid, ascending, and never touching.
    let ivs: Vec<Interval> = set.iter().copied().collect();
    for iv in &ivs {
        if iv.is_empty() {
            panic!()
        }
    }
    for pair in ivs.windows(2) {
        if pair[0].end >= pair[1].start {
            panic!()
        }
    }

    // Rebuilding from the canonical form changes nothing.
    let rebuilt: IntervalSet = ivs.into_iter().collect();
    assert_eq!(rebuilt, set);

    // Membership agrees with the raw inputs.
    let size: i64 = set.iter().map(|iv| iv.len()).sum();
    assert_eq!(set.size(), size);
    for &(start, end) in &raw {
        let (start, end) = (start as i64, end as i64);
        if start < end {
            assert!(set.contains(start));
            assert!(set.contains(end - 1));
        }
    }
});
