#![no_main]
use libfuzzer_sys::fuzz_target;

use idset::{Interval, IntervalSet};

fn build(raw: &[(i8, i8)]) -> IntervalSet {
    raw.iter()
        .map(|&(start, end)| Interval::new(start as i64, end as i64))
        .collect()
}

fn is_canonical(set: &IntervalSet) -> bool {
    let ivs: Vec<Interval> = set.iter().copied().collect();
    ivs.iter().all(|iv| !iv.is_empty())
        && ivs.windows(2).all(|pair| pair[0].end < pair[1].start)
}

fuzz_target!(|input: (Vec<(i8, i8)>, Vec<(i8, i8)>)| {
    let (raw_a, raw_b) = input;
    let a = build(&raw_a);
    let b = build(&raw_b);

    let union = a.union(&b);
    let diff = a.subtract(&b);
    if !is_canonical(&union) || !is_canonical(&diff) {
        panic!()
    }

    // Subtraction removes exactly the intersection.
    assert!(diff.size() <= a.size());
    assert_eq!(diff.subtract(&b).size(), diff.size());
    assert_eq!(union.size(), a.size() + b.subtract(&a).size());

    // Zip consumes min(|a|, |b|) from each side, in valid records.
    let mut consumed = 0;
    for record in a.zip(&b) {
        assert!(record.size > 0);
        consumed += record.size;
    }
    assert_eq!(consumed, a.size().min(b.size()));
});
