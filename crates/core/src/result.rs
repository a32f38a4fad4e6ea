//! Solve result representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a successful pack.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResult<B> {
    /// The chosen container, holding every placed item.
    pub bin: B,

    /// Index of the chosen container in the caller's list.
    pub bin_index: usize,

    /// 1-based position of the chosen container in trial order.
    ///
    /// A sequential run stops there, so this is the number of trials it ran.
    /// With parallel trials, later containers may also have been tried.
    pub trials: usize,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Volume and weight summary of the chosen container.
    pub summary: PackSummary,
}

impl<B> SolveResult<B> {
    /// Returns the number of containers ahead of the chosen one in trial
    /// order, all of which were rejected.
    pub fn rejected_trials(&self) -> usize {
        self.trials.saturating_sub(1)
    }
}

/// Summary statistics for a filled container.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackSummary {
    /// Name of the container.
    pub bin_name: String,
    /// Number of placed items.
    pub item_count: usize,
    /// Total volume of placed items.
    pub packed_volume: u128,
    /// Volume of the container.
    pub bin_volume: u128,
    /// Total weight of placed items.
    pub total_weight: f64,
    /// Weight capacity of the container.
    pub max_weight: f64,
}

impl PackSummary {
    /// Volume utilization ratio (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        if self.bin_volume == 0 {
            return 0.0;
        }
        self.packed_volume as f64 / self.bin_volume as f64
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }

    /// Fraction of the weight capacity in use.
    pub fn weight_ratio(&self) -> f64 {
        if self.max_weight <= 0.0 {
            return 0.0;
        }
        self.total_weight / self.max_weight
    }
}
