//! Geometry primitives: extents, pivots, axes, rotations and boxes.
//!
//! All coordinates are exact unsigned integers, so containment and overlap
//! tests never depend on floating point tolerances.

use nalgebra::{Point3, Vector3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scalar type for dimensions and coordinates.
pub type Length = u64;

/// Size of a box along (X, Y, Z), i.e. (width, height, depth).
pub type Extent = Vector3<Length>;

/// Minimum corner of a box, the corner closest to the container origin.
pub type Pivot = Point3<Length>;

/// One of the three container axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// X axis (width).
    Width,
    /// Y axis (height).
    Height,
    /// Z axis (depth).
    Depth,
}

impl Axis {
    /// All axes in enumeration order.
    pub const ALL: [Axis; 3] = [Axis::Width, Axis::Height, Axis::Depth];

    /// Returns the coordinate index of this axis.
    pub fn index(self) -> usize {
        match self {
            Axis::Width => 0,
            Axis::Height => 1,
            Axis::Depth => 2,
        }
    }

    /// Returns `pivot` moved along this axis by the matching component of `extent`.
    ///
    /// Returns `None` on overflow.
    pub fn advance(self, pivot: &Pivot, extent: &Extent) -> Option<Pivot> {
        let i = self.index();
        let mut moved = *pivot;
        moved[i] = pivot[i].checked_add(extent[i])?;
        Some(moved)
    }
}

/// Assignment of an item's native (width, height, depth) onto the container's
/// (X, Y, Z) axes.
///
/// The declaration order is the search priority: the packer tries `Whd`
/// first and `Wdh` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RotationType {
    /// (width, height, depth), the native orientation.
    #[default]
    Whd,
    /// (height, width, depth)
    Hwd,
    /// (height, depth, width)
    Hdw,
    /// (depth, height, width)
    Dhw,
    /// (depth, width, height)
    Dwh,
    /// (width, depth, height)
    Wdh,
}

impl RotationType {
    /// All rotations in search priority order.
    pub const ALL: [RotationType; 6] = [
        RotationType::Whd,
        RotationType::Hwd,
        RotationType::Hdw,
        RotationType::Dhw,
        RotationType::Dwh,
        RotationType::Wdh,
    ];

    /// Native dimension indices (0 = width, 1 = height, 2 = depth) placed on X, Y and Z.
    fn axes(self) -> [usize; 3] {
        match self {
            RotationType::Whd => [0, 1, 2],
            RotationType::Hwd => [1, 0, 2],
            RotationType::Hdw => [1, 2, 0],
            RotationType::Dhw => [2, 1, 0],
            RotationType::Dwh => [2, 0, 1],
            RotationType::Wdh => [0, 2, 1],
        }
    }

    /// Returns the effective (X, Y, Z) extent of `dimensions` under this rotation.
    pub fn apply(self, dimensions: &Extent) -> Extent {
        let [x, y, z] = self.axes();
        Extent::new(dimensions[x], dimensions[y], dimensions[z])
    }

    /// Long name, e.g. `"height-depth-width"`.
    pub fn label(self) -> &'static str {
        match self {
            RotationType::Whd => "width-height-depth",
            RotationType::Hwd => "height-width-depth",
            RotationType::Hdw => "height-depth-width",
            RotationType::Dhw => "depth-height-width",
            RotationType::Dwh => "depth-width-height",
            RotationType::Wdh => "width-depth-height",
        }
    }

    /// Short code, e.g. `"HDW"`.
    pub fn code(self) -> &'static str {
        match self {
            RotationType::Whd => "WHD",
            RotationType::Hwd => "HWD",
            RotationType::Hdw => "HDW",
            RotationType::Dhw => "DHW",
            RotationType::Dwh => "DWH",
            RotationType::Wdh => "WDH",
        }
    }
}

impl fmt::Display for RotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Axis-aligned box given by its minimum corner and its extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb3D {
    /// Minimum corner.
    pub min: Pivot,
    /// Size along (X, Y, Z).
    pub extent: Extent,
}

impl Aabb3D {
    /// Creates a box from its minimum corner and extent.
    pub fn new(min: Pivot, extent: Extent) -> Self {
        Self { min, extent }
    }

    /// Returns the maximum corner, saturating on overflow.
    pub fn max(&self) -> Pivot {
        Pivot::new(
            self.min.x.saturating_add(self.extent.x),
            self.min.y.saturating_add(self.extent.y),
            self.min.z.saturating_add(self.extent.z),
        )
    }

    /// Returns true if the two boxes share a positive volume.
    ///
    /// Boxes touching at a face, an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Aabb3D) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        (0..3).all(|i| self.min[i] < b_max[i] && other.min[i] < a_max[i])
    }

    /// Returns true if the box lies inside `[0, container)` on every axis.
    pub fn fits_within(&self, container: &Extent) -> bool {
        (0..3).all(|i| {
            self.min[i]
                .checked_add(self.extent[i])
                .is_some_and(|end| end <= container[i])
        })
    }

    /// Returns the volume of the box.
    pub fn volume(&self) -> u128 {
        volume(&self.extent)
    }
}

/// Volume of an extent, widened so the product cannot overflow.
pub fn volume(extent: &Extent) -> u128 {
    extent.iter().map(|&v| u128::from(v)).product()
}
