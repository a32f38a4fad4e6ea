//! First-fit placement search for a single item.
//!
//! Candidate pivots are derived from the items already in the container:
//! the origin, then every placed item's pivot stepped along one axis by the
//! item's native width, height or depth. The step ignores the item's
//! rotation, so a candidate may land inside or short of a rotated box; the
//! fit and overlap checks reject those. Axes are visited in `Width`,
//! `Height`, `Depth` order and, within an axis, placed items in placement
//! order. For each candidate the
//! six rotations are tried in [`RotationType::ALL`] order and the first
//! collision-free fit wins.

use crate::bin::Bin;
use crate::item::Item;
use u_packing_core::geometry::{Aabb3D, Axis, Extent, Pivot, RotationType};
use u_packing_core::Placement;

/// Returns the candidate pivots for the next item, in evaluation order.
///
/// Yields at most `1 + 3 * placed.len()` pivots. Unplaced entries are skipped.
pub fn candidate_pivots(placed: &[Item]) -> Vec<Pivot> {
    let anchors: Vec<(Pivot, &Extent)> = placed
        .iter()
        .filter_map(|i| i.pivot().map(|pivot| (pivot, i.dimensions())))
        .collect();

    let mut pivots = Vec::with_capacity(1 + 3 * anchors.len());
    pivots.push(Pivot::origin());

    for axis in Axis::ALL {
        pivots.extend(
            anchors
                .iter()
                .filter_map(|(pivot, dims)| axis.advance(pivot, dims)),
        );
    }

    pivots
}

/// Finds the first rotation that seats `item` at `pivot` without leaving the
/// bin or colliding with `occupied`.
fn fit_at(bin: &Bin, item: &Item, pivot: Pivot, occupied: &[Aabb3D]) -> Option<RotationType> {
    RotationType::ALL.into_iter().find(|&rotation| {
        let candidate = Aabb3D::new(pivot, item.extent_for(rotation));
        candidate.fits_within(bin.dimensions())
            && !occupied.iter().any(|other| candidate.intersects(other))
    })
}

/// Searches for a placement of `item` in `bin` without modifying either.
///
/// Returns `None` if the item would exceed the bin's weight capacity or no
/// candidate pivot admits a collision-free rotation.
pub fn find_placement(bin: &Bin, item: &Item) -> Option<Placement> {
    if !bin.can_carry(item.weight()) {
        return None;
    }

    let occupied: Vec<Aabb3D> = bin.items().iter().filter_map(Item::aabb).collect();

    candidate_pivots(bin.items())
        .into_iter()
        .find_map(|pivot| {
            fit_at(bin, item, pivot, &occupied).map(|rotation| Placement::new(rotation, pivot))
        })
}
