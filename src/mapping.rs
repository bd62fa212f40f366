use core::fmt;

#[cfg(feature = "serde1")]
use serde::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, Serializer},
};

use crate::interval::Interval;
use crate::set::IntervalSet;

/// One contiguous correspondence between container IDs and host IDs:
/// the `size` IDs starting at `container_id` inside the container map
/// 1:1, in order, onto the `size` IDs starting at `host_id` on the
/// host. A list of these is a full user-namespace mapping table.
///
/// A zero or negative `size` means "no range"; such entries project to
/// degenerate intervals and are silently dropped by the set algebra,
/// never rejected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IdMap {
    pub container_id: i64,
    pub host_id: i64,
    pub size: i64,
}

impl IdMap {
    pub fn new(container_id: i64, host_id: i64, size: i64) -> IdMap {
        IdMap {
            container_id,
            host_id,
            size,
        }
    }

    /// The host IDs this mapping covers, as a half-open interval.
    pub fn host_interval(&self) -> Interval {
        Interval::new(self.host_id, self.host_id + self.size)
    }

    /// The container IDs this mapping covers, as a half-open interval.
    pub fn container_interval(&self) -> Interval {
        Interval::new(self.container_id, self.container_id + self.size)
    }
}

impl fmt::Display for IdMap {
    /// `container:host:size`, the shape of an `/etc/subuid` line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.container_id, self.host_id, self.size)
    }
}

#[cfg(feature = "serde1")]
impl Serialize for IdMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.container_id, self.host_id, self.size).serialize(serializer)
    }
}

#[cfg(feature = "serde1")]
impl<'de> Deserialize<'de> for IdMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (container_id, host_id, size) = Deserialize::deserialize(deserializer)?;
        Ok(IdMap {
            container_id,
            host_id,
            size,
        })
    }
}

/// Projects a mapping table onto the host-ID coordinate space.
pub fn host_space(mappings: &[IdMap]) -> IntervalSet {
    mappings.iter().map(IdMap::host_interval).collect()
}

/// Projects a mapping table onto the container-ID coordinate space.
pub fn container_space(mappings: &[IdMap]) -> IntervalSet {
    mappings.iter().map(IdMap::container_interval).collect()
}
