//! Integration tests for u-packing-core.

use u_packing_core::geometry::{Aabb3D, Axis, Extent, Pivot, RotationType};
use u_packing_core::placement::{Placement, PlacementStats};
use u_packing_core::result::PackSummary;

mod rotation_tests {
    use super::*;

    #[test]
    fn test_every_rotation_preserves_volume() {
        let dims = Extent::new(7, 11, 13);
        for rotation in RotationType::ALL {
            let e = rotation.apply(&dims);
            assert_eq!(e.x * e.y * e.z, 7 * 11 * 13, "{}", rotation.label());
        }
    }

    #[test]
    fn test_priority_order() {
        let codes: Vec<&str> = RotationType::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes, ["WHD", "HWD", "HDW", "DHW", "DWH", "WDH"]);

        let mut sorted = RotationType::ALL;
        sorted.sort();
        assert_eq!(sorted, RotationType::ALL);
    }

    #[test]
    fn test_cube_is_rotation_invariant() {
        let dims = Extent::new(5, 5, 5);
        assert!(RotationType::ALL.iter().all(|r| r.apply(&dims) == dims));
    }
}

mod aabb_tests {
    use super::*;

    #[test]
    fn test_stacked_boxes() {
        // Three 250x250x2 slabs stacked along depth
        let slabs: Vec<Aabb3D> = (0..3)
            .map(|i| Aabb3D::new(Pivot::new(0, 0, 2 * i), Extent::new(250, 250, 2)))
            .collect();
        let container = Extent::new(296, 296, 8);

        for (i, a) in slabs.iter().enumerate() {
            assert!(a.fits_within(&container));
            for b in &slabs[i + 1..] {
                assert!(!a.intersects(b));
            }
        }

        let fourth = Aabb3D::new(Pivot::new(0, 0, 6), Extent::new(250, 250, 4));
        assert!(!fourth.fits_within(&container));
    }

    #[test]
    fn test_flush_pivots_never_overlap_source() {
        let placed = Aabb3D::new(Pivot::new(3, 4, 5), Extent::new(10, 20, 30));
        for axis in Axis::ALL {
            let pivot = axis.advance(&placed.min, &placed.extent).unwrap();
            let neighbour = Aabb3D::new(pivot, placed.extent);
            assert!(!placed.intersects(&neighbour), "{:?}", axis);
        }
    }
}

mod summary_tests {
    use super::*;

    #[test]
    fn test_stats_and_summary_together() {
        let placements = vec![
            Placement::new(RotationType::Whd, Pivot::origin()),
            Placement::new(RotationType::Whd, Pivot::new(100, 0, 0)),
            Placement::new(RotationType::Hwd, Pivot::new(200, 0, 0)),
            Placement::new(RotationType::Hdw, Pivot::new(200, 100, 0)),
        ];
        let stats = PlacementStats::from_placements(&placements);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.rotated_count(), 2);

        let summary = PackSummary {
            bin_name: "Bin 1".into(),
            item_count: stats.count,
            packed_volume: 1_000,
            bin_volume: 4_000,
            total_weight: 40.0,
            max_weight: 110.0,
        };
        assert_eq!(summary.utilization_percent(), "25.0%");
    }
}
