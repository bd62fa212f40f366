/*!
Set algebra over UID/GID ranges, for handing out private slices of the
host's ID space to containers.

A container engine that uses user namespaces must give every container
a mapping table: a list of triples saying "the `size` container IDs
starting at `container_id` correspond to the `size` host IDs starting
at `host_id`". The engine's storage layer needs to answer, on every
container or layer creation: which host IDs are already claimed, what
remains free, where do `n` free IDs live in that (possibly fragmented)
free space, and is a configured table even self-consistent?

This crate is the algebra behind those answers:

- [`Interval`]: a half-open range of IDs `start..end`, with the
  comparison and combination primitives (`intersect`, `bisect`,
  `adjoin`, `encompass`, ...). Anything with `start >= end` covers no
  IDs and is uniformly absorbed, never rejected.
- [`IntervalSet`]: an immutable, always-canonical collection of
  intervals. Inputs that overlap or touch are coalesced into a single
  maximal interval, so two sets are equal exactly when they cover the
  same IDs. Provides `union`, `subtract`, `size`, ordered iteration,
  "first `n` IDs", and `zip`.
- [`IdMap`]: the boundary triple, with [`host_space`] /
  [`container_space`] projecting a mapping table into either coordinate
  space, and [`IntervalSet::zip`] recombining two correlated sets back
  into triples.
- The four routines the storage engine calls directly:
  [`subtract_host_ids`], [`subtract_container_ids`],
  [`find_available_id_range`], and [`check_overlapping_ranges`].

Everything here is a pure computation over immutable values: no I/O,
no persistence, no policy, nothing to lock. Reading or writing
`/etc/subuid`-style tables and invoking the kernel's user-namespace
machinery are the caller's business.


# Example

Carve 4096 host IDs for a new container out of a configured range with
a 10-ID hole already in use:

```rust
use idset::{find_available_id_range, IdMap};

let configured = [IdMap::new(0, 100_000, 65_536)];
let used = [IdMap::new(0, 100_010, 10)];

let table = find_available_id_range(4096, &configured, &used)?;

// The allocation splits around the hole; the container side is a
// fresh numbering from 0.
assert_eq!(table[0], IdMap::new(0, 100_000, 10));
assert_eq!(table[1], IdMap::new(10, 100_020, 4086));
# Ok::<(), idset::Error>(())
```

Only [`find_available_id_range`] (not enough free IDs) and
[`check_overlapping_ranges`] (misconfigured table) can fail, both with
a descriptive, non-retriable [`Error`]. The rest of the algebra is
total: degenerate inputs yield empty results.


# Crate features

By default this crate depends only on `thiserror`.

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for [`IntervalSet`] and [`IdMap`].

You can enable the **serde1** feature in your _Cargo.toml_ file like so:

```toml
[dependencies]
idset = { version = "0.1", features = ["serde1"] }
```


# Building without the Rust standard library

This crate can work without the full standard library available
(e.g. when running on bare metal without an operating system)
but relies on the presence of a global allocator &mdash;
i.e. it links the `core` and `alloc` crates, but not `std`.
*/

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod interval;
pub mod mapping;
pub mod ops;
pub mod set;
pub mod zip;

pub use error::Error;
pub use interval::Interval;
pub use mapping::{container_space, host_space, IdMap};
pub use ops::{
    check_overlapping_ranges, find_available_id_range, subtract_container_ids, subtract_host_ids,
};
pub use set::IntervalSet;
pub use zip::Zip;
