//! Items to be packed.

use std::fmt;
use u_packing_core::geometry::{self, Aabb3D, Extent, Length, Pivot, RotationType};
use u_packing_core::{Error, Placement, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular box that can be packed into a [`Bin`](crate::Bin).
///
/// An item is created unplaced. It only carries a [`Placement`] once the
/// packer has committed it to a container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Label, not used by the packer.
    name: String,

    /// Native dimensions (width, height, depth).
    dimensions: Extent,

    /// Weight, counted against the container's capacity.
    weight: f64,

    /// Committed rotation and pivot.
    placement: Option<Placement>,
}

impl Item {
    /// Creates a new unplaced item.
    ///
    /// Fails if any dimension is zero or the weight is negative or not finite.
    pub fn new(
        name: impl Into<String>,
        width: Length,
        height: Length,
        depth: Length,
        weight: f64,
    ) -> Result<Self> {
        let item = Self {
            name: name.into(),
            dimensions: Extent::new(width, height, depth),
            weight,
            placement: None,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<()> {
        if self.dimensions.iter().any(|&d| d == 0) {
            return Err(Error::InvalidItem(format!(
                "All dimensions for '{}' must be positive",
                self.name
            )));
        }

        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidItem(format!(
                "Weight for '{}' must be a non-negative number",
                self.name
            )));
        }

        Ok(())
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the native dimensions (width, height, depth).
    pub fn dimensions(&self) -> &Extent {
        &self.dimensions
    }

    /// Returns the width.
    pub fn width(&self) -> Length {
        self.dimensions.x
    }

    /// Returns the height.
    pub fn height(&self) -> Length {
        self.dimensions.y
    }

    /// Returns the depth.
    pub fn depth(&self) -> Length {
        self.dimensions.z
    }

    /// Returns the weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the volume.
    pub fn volume(&self) -> u128 {
        geometry::volume(&self.dimensions)
    }

    /// Returns the committed placement, if any.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Returns true if the item has been placed.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Returns the committed rotation, if any.
    pub fn rotation(&self) -> Option<RotationType> {
        self.placement.map(|p| p.rotation)
    }

    /// Returns the committed pivot, if any.
    pub fn pivot(&self) -> Option<Pivot> {
        self.placement.map(|p| p.pivot)
    }

    /// Returns the extent this item would occupy under `rotation`.
    pub fn extent_for(&self, rotation: RotationType) -> Extent {
        rotation.apply(&self.dimensions)
    }

    /// Returns the occupied box of a placed item.
    pub fn aabb(&self) -> Option<Aabb3D> {
        self.placement.map(|p| p.aabb(&self.dimensions))
    }

    /// Returns a copy of this item committed to `placement`.
    pub(crate) fn placed_at(&self, placement: Placement) -> Self {
        Self {
            placement: Some(placement),
            ..self.clone()
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}x{}x{}, weight: {})",
            self.name,
            self.width(),
            self.height(),
            self.depth(),
            self.weight
        )?;
        if let Some(placement) = &self.placement {
            write!(f, " {}", placement)?;
        }
        Ok(())
    }
}
