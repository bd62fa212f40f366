//! Allocation and validation routines over ID mapping tables.
//!
//! These are the entry points the surrounding storage engine calls on
//! every container/layer creation: lift mapping triples into interval
//! sets, do set algebra, and lower the result back into triples.

use alloc::vec::Vec;

use crate::error::Error;
use crate::interval::Interval;
use crate::mapping::{host_space, IdMap};
use crate::set::IntervalSet;

/// Removes the host IDs covered by `used` from the `avail` mapping.
///
/// Returns zero, one, or two mappings: a cut through the middle of
/// `avail`'s host range produces two, total coverage produces none, and
/// a `used` range that misses `avail` entirely (or covers no IDs at
/// all) returns `avail` unchanged. A `used` range overhanging either
/// end of `avail` removes only the overlap.
pub fn subtract_host_ids(avail: IdMap, used: IdMap) -> Vec<IdMap> {
    // Within one mapping the two ID spaces advance in lockstep, so
    // every surviving fragment keeps avail's container/host offset.
    let offset = avail.container_id - avail.host_id;
    IntervalSet::from(avail.host_interval())
        .subtract(&IntervalSet::from(used.host_interval()))
        .iter()
        .map(|iv| IdMap {
            container_id: iv.start + offset,
            host_id: iv.start,
            size: iv.len(),
        })
        .collect()
}

/// Removes the container IDs covered by `used` from the `avail`
/// mapping. The mirror image of [`subtract_host_ids`].
pub fn subtract_container_ids(avail: IdMap, used: IdMap) -> Vec<IdMap> {
    let offset = avail.host_id - avail.container_id;
    IntervalSet::from(avail.container_interval())
        .subtract(&IntervalSet::from(used.container_interval()))
        .iter()
        .map(|iv| IdMap {
            container_id: iv.start,
            host_id: iv.start + offset,
            size: iv.len(),
        })
        .collect()
}

/// Finds `n` host IDs that are configured in `avail` but not claimed
/// by `used`, taking the lowest free IDs first and splitting around
/// holes as needed.
///
/// The container side of the result is a fresh, contiguous numbering
/// starting at 0, for the caller to hand to a new container. Fails
/// with [`Error::NotEnoughIds`] when the free space is smaller than
/// `n`; `n <= 0` yields an empty table.
pub fn find_available_id_range(
    n: i64,
    avail: &[IdMap],
    used: &[IdMap],
) -> Result<Vec<IdMap>, Error> {
    let free = host_space(avail).subtract(&host_space(used));
    let taken = free.find_available(n)?;
    let container = IntervalSet::from(Interval::new(0, n));
    Ok(taken.zip(&container).collect())
}

/// Checks a mapping table for entries that claim overlapping
/// container-ID ranges, reporting the first conflicting pair found.
///
/// Every pair of distinct entries is checked, so an entry conflicts
/// with an exact duplicate of itself. Entries with no IDs (zero or
/// negative size) conflict with nothing.
pub fn check_overlapping_ranges(mappings: &[IdMap]) -> Result<(), Error> {
    for (i, first) in mappings.iter().enumerate() {
        for second in &mappings[i + 1..] {
            if first
                .container_interval()
                .overlaps(&second.container_interval())
            {
                return Err(Error::OverlappingMappings {
                    first: *first,
                    second: *second,
                });
            }
        }
    }
    Ok(())
}
