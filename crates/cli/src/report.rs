//! Pack results as JSON responses and text reports.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use u_packing_core::PlacementStats;
use u_packing_d3::{Bin, Item, SolveResult};

/// Response written for every pack run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackResponse {
    /// Whether a bin holding all items was found.
    pub success: bool,

    /// Error message if failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The chosen bin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<BinResponse>,

    /// Index of the chosen bin in the job file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_index: Option<usize>,

    /// Position of the chosen bin in trial order, or the number of bins
    /// tried on failure.
    pub trials: usize,

    /// Volume utilization ratio of the chosen bin.
    pub utilization: f64,

    /// Total weight of placed items.
    pub total_weight: f64,

    /// Number of items placed in a rotated orientation.
    #[serde(default)]
    pub rotated_items: usize,

    /// Placements in placement order.
    #[serde(default)]
    pub placements: Vec<PlacementResponse>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

/// Chosen bin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinResponse {
    pub name: String,
    pub width: u64,
    pub height: u64,
    pub depth: u64,
    pub max_weight: f64,
}

/// One placed item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementResponse {
    pub item: String,
    pub width: u64,
    pub height: u64,
    pub depth: u64,
    pub weight: f64,
    /// Rotation code, e.g. "HDW".
    pub rotation: String,
    /// Minimum corner [x, y, z].
    pub pivot: [u64; 3],
}

impl PackResponse {
    /// Builds a success response.
    pub fn from_result(result: &SolveResult<Bin>) -> Self {
        let bin = &result.bin;
        let placements = bin
            .items()
            .iter()
            .filter_map(|item| {
                let placement = item.placement()?;
                Some(PlacementResponse {
                    item: item.name().to_string(),
                    width: item.width(),
                    height: item.height(),
                    depth: item.depth(),
                    weight: item.weight(),
                    rotation: placement.rotation.code().to_string(),
                    pivot: [placement.pivot.x, placement.pivot.y, placement.pivot.z],
                })
            })
            .collect();
        let stats =
            PlacementStats::from_placements(bin.items().iter().filter_map(Item::placement));

        Self {
            success: true,
            error: None,
            bin: Some(BinResponse {
                name: bin.name().to_string(),
                width: bin.width(),
                height: bin.height(),
                depth: bin.depth(),
                max_weight: bin.max_weight(),
            }),
            bin_index: Some(result.bin_index),
            trials: result.trials,
            utilization: result.summary.utilization(),
            total_weight: result.summary.total_weight,
            rotated_items: stats.rotated_count(),
            placements,
            computation_time_ms: result.computation_time_ms,
        }
    }

    /// Builds a failure response.
    pub fn failure(error: impl ToString, trials: usize) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            bin: None,
            bin_index: None,
            trials,
            utilization: 0.0,
            total_weight: 0.0,
            rotated_items: 0,
            placements: Vec::new(),
            computation_time_ms: 0,
        }
    }

    /// Saves the response as pretty JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Formats a human-readable report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let Some(bin) = &self.bin else {
            let _ = writeln!(
                out,
                "Packing failed: {}",
                self.error.as_deref().unwrap_or("unknown error")
            );
            return out;
        };

        let _ = writeln!(
            out,
            "{}({}x{}x{}, max_weight: {})",
            bin.name, bin.width, bin.height, bin.depth, bin.max_weight
        );
        let _ = writeln!(out, " packed items:");
        for p in &self.placements {
            let _ = writeln!(
                out,
                "   {}({}x{}x{}, weight: {}) pos({},{},{}) rt({})",
                p.item,
                p.width,
                p.height,
                p.depth,
                p.weight,
                p.pivot[0],
                p.pivot[1],
                p.pivot[2],
                p.rotation
            );
        }
        let _ = writeln!(
            out,
            " utilization: {:.1}%  weight: {}/{}  rotated: {}  trials: {}  time: {}ms",
            self.utilization * 100.0,
            self.total_weight,
            bin.max_weight,
            self.rotated_items,
            self.trials,
            self.computation_time_ms
        );

        out
    }
}
