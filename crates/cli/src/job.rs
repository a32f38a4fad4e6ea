//! JSON job files: the bins and items of one pack request.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use u_packing_d3::{Bin, Item};

/// Errors that can occur when loading a job.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid job: {0}")]
    InvalidJob(#[from] u_packing_d3::Error),
}

/// A pack request as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Candidate containers, in the order they should be tried.
    pub bins: Vec<BinRequest>,

    /// Items to pack.
    pub items: Vec<ItemRequest>,
}

/// Container entry of a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinRequest {
    pub name: String,
    pub width: u64,
    pub height: u64,
    pub depth: u64,
    pub max_weight: f64,
}

/// Item entry of a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    pub width: u64,
    pub height: u64,
    pub depth: u64,
    #[serde(default)]
    pub weight: f64,

    /// Number of identical copies to pack.
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

fn default_quantity() -> usize {
    1
}

impl Job {
    /// Loads a job from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, JobError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a job from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, JobError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds validated bins and items. Items with a quantity above one are
    /// expanded in place, keeping their name. A quantity of zero is rejected.
    pub fn build(&self) -> Result<(Vec<Bin>, Vec<Item>), JobError> {
        let bins = self
            .bins
            .iter()
            .map(|b| Bin::new(b.name.as_str(), b.width, b.height, b.depth, b.max_weight))
            .collect::<u_packing_d3::Result<Vec<_>>>()?;

        let mut items = Vec::new();
        for request in &self.items {
            if request.quantity == 0 {
                return Err(JobError::InvalidJob(u_packing_d3::Error::InvalidItem(format!(
                    "Quantity for '{}' must be at least 1",
                    request.name
                ))));
            }
            let item = Item::new(
                request.name.as_str(),
                request.width,
                request.height,
                request.depth,
                request.weight,
            )?;
            items.extend(std::iter::repeat(item).take(request.quantity));
        }

        Ok((bins, items))
    }

    /// A small job with one bin and seven mixed items.
    pub fn sample() -> Self {
        let item = |name: &str, width, height, depth| ItemRequest {
            name: name.to_string(),
            width,
            height,
            depth,
            weight: 10.0,
            quantity: 1,
        };

        Self {
            bins: vec![BinRequest {
                name: "Bin 1".to_string(),
                width: 220,
                height: 160,
                depth: 100,
                max_weight: 110.0,
            }],
            items: vec![
                item("Item 7", 100, 100, 30),
                item("Item 6", 100, 100, 30),
                item("Item 2", 100, 20, 30),
                item("Item 3", 20, 100, 30),
                item("Item 4", 100, 20, 30),
                item("Item 5", 100, 20, 30),
                item("Item 1", 20, 100, 30),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_job() {
        let json = r#"{
            "bins": [
                { "name": "small", "width": 296, "height": 296, "depth": 8, "max_weight": 1000 }
            ],
            "items": [
                { "name": "slab", "width": 250, "height": 250, "depth": 2, "weight": 200, "quantity": 3 },
                { "name": "feather", "width": 1, "height": 1, "depth": 1 }
            ]
        }"#;

        let job = Job::from_json(json).unwrap();
        assert_eq!(job.bins.len(), 1);
        assert_eq!(job.items[0].quantity, 3);
        assert_eq!(job.items[1].quantity, 1);
        assert_eq!(job.items[1].weight, 0.0);

        let (bins, items) = job.build().unwrap();
        assert_eq!(bins[0].name(), "small");
        assert_eq!(items.len(), 4);
        assert_eq!(items[2].name(), "slab");
        assert_eq!(items[3].name(), "feather");
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let json = r#"{
            "bins": [{ "name": "b", "width": 10, "height": 10, "depth": 10, "max_weight": 1 }],
            "items": [{ "name": "flat", "width": 10, "height": 0, "depth": 10 }]
        }"#;

        let job = Job::from_json(json).unwrap();
        assert!(matches!(job.build(), Err(JobError::InvalidJob(_))));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let json = r#"{
            "bins": [{ "name": "b", "width": 10, "height": 10, "depth": 10, "max_weight": 1 }],
            "items": [{ "name": "ghost", "width": 1, "height": 1, "depth": 1, "quantity": 0 }]
        }"#;

        let err = Job::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(
            err,
            JobError::InvalidJob(u_packing_d3::Error::InvalidItem(ref msg)) if msg.contains("ghost")
        ));
    }

    #[test]
    fn test_negative_dimension_is_json_error() {
        let json = r#"{ "bins": [], "items": [{ "name": "x", "width": -1, "height": 1, "depth": 1 }] }"#;
        assert!(matches!(Job::from_json(json), Err(JobError::JsonError(_))));
    }

    #[test]
    fn test_sample_round_trips() {
        let json = serde_json::to_string(&Job::sample()).unwrap();
        let job = Job::from_json(&json).unwrap();
        let (bins, items) = job.build().unwrap();
        assert_eq!(bins.len(), 1);
        assert_eq!(items.len(), 7);
    }
}
