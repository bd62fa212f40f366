use thiserror::Error;

use crate::mapping::IdMap;

/// Errors reported by the allocation and validation routines.
///
/// Both variants are plain, descriptive and non-retriable: retrying
/// with the same inputs cannot succeed. Nothing else in this crate can
/// fail; the set algebra and the interval primitives are total, and
/// absorb degenerate inputs instead of rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A free-range search was asked for more IDs than the set holds.
    /// The caller is expected to fail the operation that triggered the
    /// request; the used/available inputs would have to change first.
    #[error("not enough available IDs: requested {requested}, only {available} free")]
    NotEnoughIds { requested: i64, available: i64 },

    /// Two entries of a mapping table claim overlapping container-ID
    /// ranges. A misconfiguration to report to the administrator.
    #[error("ID mapping {first} overlaps with mapping {second}")]
    OverlappingMappings { first: IdMap, second: IdMap },
}
