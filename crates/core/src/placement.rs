//! Placement of an item inside a container.

use crate::geometry::{Aabb3D, Extent, Pivot, RotationType};
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A committed rotation and pivot for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Orientation of the item.
    pub rotation: RotationType,

    /// Minimum corner of the rotated item.
    pub pivot: Pivot,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(rotation: RotationType, pivot: Pivot) -> Self {
        Self { rotation, pivot }
    }

    /// Returns the effective extent of an item with the given native dimensions.
    pub fn extent(&self, dimensions: &Extent) -> Extent {
        self.rotation.apply(dimensions)
    }

    /// Returns the box occupied by an item with the given native dimensions.
    pub fn aabb(&self, dimensions: &Extent) -> Aabb3D {
        Aabb3D::new(self.pivot, self.extent(dimensions))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pos({},{},{}) rt({})",
            self.pivot.x, self.pivot.y, self.pivot.z, self.rotation
        )
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// How many placements used each rotation.
    pub rotation_distribution: HashMap<RotationType, usize>,
    /// Placements sitting at the container origin.
    pub at_origin: usize,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements<'a>(placements: impl IntoIterator<Item = &'a Placement>) -> Self {
        let mut stats = Self::default();

        for p in placements {
            stats.count += 1;
            *stats.rotation_distribution.entry(p.rotation).or_insert(0) += 1;
            if p.pivot == Pivot::origin() {
                stats.at_origin += 1;
            }
        }

        stats
    }

    /// Number of placements that are not in the native orientation.
    pub fn rotated_count(&self) -> usize {
        self.count
            - self
                .rotation_distribution
                .get(&RotationType::Whd)
                .copied()
                .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_aabb() {
        let p = Placement::new(RotationType::Hdw, Pivot::new(0, 0, 10));
        let aabb = p.aabb(&Extent::new(150, 50, 40));

        assert_eq!(aabb.min, Pivot::new(0, 0, 10));
        assert_eq!(aabb.extent, Extent::new(50, 40, 150));
        assert_eq!(aabb.max(), Pivot::new(50, 40, 160));
    }

    #[test]
    fn test_placement_display() {
        let p = Placement::new(RotationType::Hwd, Pivot::new(100, 120, 0));
        assert_eq!(p.to_string(), "pos(100,120,0) rt(HWD)");
    }

    #[test]
    fn test_placement_stats() {
        let placements = [
            Placement::new(RotationType::Whd, Pivot::origin()),
            Placement::new(RotationType::Hwd, Pivot::new(10, 0, 0)),
            Placement::new(RotationType::Whd, Pivot::new(0, 10, 0)),
        ];

        let stats = PlacementStats::from_placements(&placements);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.at_origin, 1);
        assert_eq!(stats.rotation_distribution.get(&RotationType::Whd), Some(&2));
        assert_eq!(stats.rotation_distribution.get(&RotationType::Hwd), Some(&1));
        assert_eq!(stats.rotated_count(), 1);
    }
}
