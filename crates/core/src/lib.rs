//! # U-Packing Core
//!
//! Core types and traits for the U-Packing container packing engine.
//!
//! This crate provides the foundational types shared by the packing
//! algorithms and their front ends.
//!
//! ## Core Components
//!
//! - **Geometry**: integer extents and pivots, the six-way `RotationType`, `Aabb3D`
//! - **Placement**: committed rotation + pivot of an item
//! - **Solver trait**: common interface for packers, plus `Config`
//! - **Results**: `SolveResult` and `PackSummary`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Aabb3D, Axis, Extent, Length, Pivot, RotationType};
pub use placement::{Placement, PlacementStats};
pub use result::{PackSummary, SolveResult};
pub use solver::{BinOrder, Config, ItemOrder, Solver};
