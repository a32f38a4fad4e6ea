//! Containers that items are packed into.

use crate::item::Item;
use crate::search::find_placement;
use std::fmt;
use u_packing_core::geometry::{self, Extent, Length};
use u_packing_core::{Error, PackSummary, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slack allowed when comparing summed `f64` weights against a capacity.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// A rectangular container with a weight capacity.
///
/// Placed items are kept in placement order. For every bin the packer
/// returns, the placed items lie inside the container, do not overlap, and
/// their total weight does not exceed `max_weight`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bin {
    /// Label, not used by the packer.
    name: String,

    /// Internal dimensions (width, height, depth).
    dimensions: Extent,

    /// Maximum total weight of placed items.
    max_weight: f64,

    /// Placed items, in placement order.
    items: Vec<Item>,
}

impl Bin {
    /// Creates a new empty bin.
    ///
    /// Fails if any dimension is zero or the weight capacity is negative or
    /// not finite.
    pub fn new(
        name: impl Into<String>,
        width: Length,
        height: Length,
        depth: Length,
        max_weight: f64,
    ) -> Result<Self> {
        let bin = Self {
            name: name.into(),
            dimensions: Extent::new(width, height, depth),
            max_weight,
            items: Vec::new(),
        };
        bin.validate()?;
        Ok(bin)
    }

    fn validate(&self) -> Result<()> {
        if self.dimensions.iter().any(|&d| d == 0) {
            return Err(Error::InvalidBin(format!(
                "All dimensions for '{}' must be positive",
                self.name
            )));
        }

        if !self.max_weight.is_finite() || self.max_weight < 0.0 {
            return Err(Error::InvalidBin(format!(
                "Maximum weight for '{}' must be a non-negative number",
                self.name
            )));
        }

        Ok(())
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dimensions (width, height, depth).
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

    /// Returns the weight capacity.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Returns the placed items in placement order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the container volume.
    pub fn volume(&self) -> u128 {
        geometry::volume(&self.dimensions)
    }

    /// Returns the total weight of placed items.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(Item::weight).sum()
    }

    /// Returns the weight that can still be added.
    pub fn remaining_weight(&self) -> f64 {
        (self.max_weight - self.total_weight()).max(0.0)
    }

    /// Returns true if an extra `weight` stays within capacity.
    ///
    /// Weights are summed in `f64`, so the comparison allows a small
    /// rounding slack: `0.1 + 0.2` fits a capacity of `0.3`.
    pub fn can_carry(&self, weight: f64) -> bool {
        weight <= self.remaining_weight() + WEIGHT_TOLERANCE
    }

    /// Returns a copy of this bin with no placed items.
    pub fn emptied(&self) -> Self {
        Self {
            name: self.name.clone(),
            dimensions: self.dimensions,
            max_weight: self.max_weight,
            items: Vec::new(),
        }
    }

    /// Tries to place `item` in this bin.
    ///
    /// On success a placed copy of the item is appended and `true` is
    /// returned. On failure the bin is left unchanged.
    pub fn put_item(&mut self, item: &Item) -> bool {
        match find_placement(self, item) {
            Some(placement) => {
                log::trace!("placed '{}' in '{}' at {}", item.name(), self.name, placement);
                self.items.push(item.placed_at(placement));
                true
            }
            None => false,
        }
    }

    /// Builds a volume/weight summary.
    pub fn summary(&self) -> PackSummary {
        PackSummary {
            bin_name: self.name.clone(),
            item_count: self.items.len(),
            packed_volume: self.items.iter().map(Item::volume).sum(),
            bin_volume: self.volume(),
            total_weight: self.total_weight(),
            max_weight: self.max_weight,
        }
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}x{}x{}, max_weight: {})",
            self.name,
            self.width(),
            self.height(),
            self.depth(),
            self.max_weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use u_packing_core::{Pivot, RotationType};

    #[test]
    fn test_bin_volume() {
        let bin = Bin::new("B", 100, 80, 50, 10.0).unwrap();
        assert_eq!(bin.volume(), 400_000);
        assert!(bin.items().is_empty());
    }

    #[test]
    fn test_validation() {
        assert!(Bin::new("ok", 1, 1, 1, 0.0).is_ok());
        assert!(matches!(
            Bin::new("flat", 10, 0, 10, 1.0),
            Err(Error::InvalidBin(_))
        ));
        assert!(matches!(
            Bin::new("neg", 10, 10, 10, -5.0),
            Err(Error::InvalidBin(_))
        ));
        assert!(Bin::new("inf", 10, 10, 10, f64::INFINITY).is_err());
    }

    #[test]
    fn test_put_item_tracks_weight() {
        let mut bin = Bin::new("B", 10, 10, 10, 25.0).unwrap();
        let item = Item::new("I", 5, 5, 5, 10.0).unwrap();

        assert!(bin.put_item(&item));
        assert!(bin.put_item(&item));
        assert_relative_eq!(bin.total_weight(), 20.0);
        assert_relative_eq!(bin.remaining_weight(), 5.0);

        // Room left, but over capacity
        assert!(!bin.put_item(&item));
        assert_eq!(bin.items().len(), 2);
    }

    #[test]
    fn test_fractional_weights_fill_capacity() {
        let mut bin = Bin::new("B", 10, 10, 10, 0.3).unwrap();

        assert!(bin.put_item(&Item::new("a", 1, 1, 1, 0.1).unwrap()));
        assert!(bin.put_item(&Item::new("b", 1, 1, 1, 0.2).unwrap()));
        assert!(bin.can_carry(0.0));
        assert!(!bin.can_carry(0.001));
        assert!(!bin.put_item(&Item::new("c", 1, 1, 1, 0.01).unwrap()));
        assert_eq!(bin.items().len(), 2);
    }

    #[test]
    fn test_put_item_failure_leaves_bin_unchanged() {
        let mut bin = Bin::new("B", 10, 10, 10, 100.0).unwrap();
        let big = Item::new("big", 11, 1, 1, 1.0).unwrap();

        let before = bin.clone();
        assert!(!bin.put_item(&big));
        assert_eq!(bin, before);
    }

    #[test]
    fn test_emptied() {
        let mut bin = Bin::new("B", 10, 10, 10, 100.0).unwrap();
        bin.put_item(&Item::new("I", 1, 1, 1, 1.0).unwrap());

        let fresh = bin.emptied();
        assert!(fresh.items().is_empty());
        assert_eq!(fresh.name(), "B");
        assert_eq!(fresh.dimensions(), bin.dimensions());
    }

    #[test]
    fn test_summary() {
        let mut bin = Bin::new("B", 10, 10, 10, 100.0).unwrap();
        let item = Item::new("I", 5, 10, 10, 30.0).unwrap();
        assert!(bin.put_item(&item));
        assert!(bin.put_item(&item));

        let summary = bin.summary();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.packed_volume, 1000);
        assert_relative_eq!(summary.utilization(), 1.0);
        assert_relative_eq!(summary.total_weight, 60.0);

        assert_eq!(bin.items()[1].pivot(), Some(Pivot::new(5, 0, 0)));
        assert_eq!(bin.items()[1].rotation(), Some(RotationType::Whd));
    }

    #[test]
    fn test_display() {
        let bin = Bin::new("Bin 1", 220, 160, 100, 110.0).unwrap();
        assert_eq!(bin.to_string(), "Bin 1(220x160x100, max_weight: 110)");
    }
}
