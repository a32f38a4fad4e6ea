//! # U-Packing
//!
//! Rectangular container packing engine.
//!
//! Given an ordered list of candidate containers and a list of boxes, finds
//! the first container that holds every box, respecting its dimensions and
//! weight capacity, and reports the rotation and position of each box.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_packing::d3::{Bin, Item, Packer3D};
//! use u_packing::Solver;
//!
//! let bins = vec![
//!     Bin::new("Le petite box", 296, 296, 8, 1000.0)?,
//!     Bin::new("Le grande box", 2960, 2960, 80, 10000.0)?,
//! ];
//! let items: Vec<Item> = (1..=3)
//!     .map(|i| Item::new(format!("Item {}", i), 250, 250, 2, 200.0))
//!     .collect::<u_packing::Result<_>>()?;
//!
//! let packed = Packer3D::default_config().pack(&bins, &items)?;
//! assert_eq!(packed.name(), "Le petite box");
//! # Ok::<(), u_packing::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types and traits.
pub use u_packing_core as core;

/// 3D container packing.
pub use u_packing_d3 as d3;

// Re-export commonly used types at root level
pub use u_packing_core::{Config, Error, Placement, Result, RotationType, SolveResult, Solver};
