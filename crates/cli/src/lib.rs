//! Command line front end for U-Packing.
//!
//! This crate provides:
//! - JSON job file parsing
//! - Pack responses and text reports

mod job;
mod report;

pub use job::{BinRequest, ItemRequest, Job, JobError};
pub use report::{BinResponse, PackResponse, PlacementResponse};
