//! # U-Packing 3D
//!
//! First-fit packing of rectangular items into rectangular containers.
//!
//! Every item may be rotated into any of its six axis-aligned orientations.
//! Containers are tried in order and the first one that holds every item,
//! within its dimensions and weight capacity, is returned.
//!
//! ```
//! use u_packing_d3::{Bin, Item, Packer3D, Solver};
//!
//! let bins = vec![Bin::new("Le grande box", 100, 100, 300, 1500.0)?];
//! let items = vec![Item::new("Item 1", 150, 50, 50, 20.0)?];
//!
//! let packed = Packer3D::default_config().pack(&bins, &items)?;
//! assert_eq!(packed.items()[0].to_string(), "Item 1(150x50x50, weight: 20) pos(0,0,0) rt(HDW)");
//! # Ok::<(), u_packing_d3::Error>(())
//! ```

pub mod bin;
pub mod item;
pub mod packer;
pub mod search;

// Re-exports
pub use bin::Bin;
pub use item::Item;
pub use packer::Packer3D;
pub use u_packing_core::{
    BinOrder, Config, Error, ItemOrder, Pivot, Placement, Result, RotationType, SolveResult,
    Solver,
};
