//! Solver traits and configuration.

use crate::result::SolveResult;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which items are fed to each container trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemOrder {
    /// Items are placed in the order supplied by the caller.
    #[default]
    AsGiven,
    /// Largest volume first. Ties keep their supplied order.
    VolumeDescending,
}

/// Order in which containers are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOrder {
    /// Containers are tried in the order supplied by the caller.
    #[default]
    AsGiven,
    /// Smallest volume first. Ties keep their supplied order.
    VolumeAscending,
}

/// Common configuration for packers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Item ordering applied before every trial.
    pub item_order: ItemOrder,

    /// Container ordering.
    pub bin_order: BinOrder,

    /// Run container trials on the rayon thread pool.
    ///
    /// The lowest-index successful container still wins, so the result is
    /// identical to a sequential run.
    pub parallel_trials: bool,
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item ordering.
    pub fn with_item_order(mut self, order: ItemOrder) -> Self {
        self.item_order = order;
        self
    }

    /// Sets the container ordering.
    pub fn with_bin_order(mut self, order: BinOrder) -> Self {
        self.bin_order = order;
        self
    }

    /// Enables or disables parallel container trials.
    pub fn with_parallel_trials(mut self, enabled: bool) -> Self {
        self.parallel_trials = enabled;
        self
    }
}

/// Trait for container packers.
pub trait Solver {
    /// The item type this solver places.
    type Item;
    /// The container type this solver fills.
    type Bin;

    /// Packs every item into the first container able to hold them all.
    fn solve(&self, bins: &[Self::Bin], items: &[Self::Item]) -> Result<SolveResult<Self::Bin>>;

    /// Like [`Solver::solve`], returning only the filled container.
    fn pack(&self, bins: &[Self::Bin], items: &[Self::Item]) -> Result<Self::Bin> {
        self.solve(bins, items).map(|result| result.bin)
    }
}
