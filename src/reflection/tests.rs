//! Reflection domain: tests for copy, paste, clear, and notification order.

use bevy::prelude::{IVec2, IVec3};
use std::collections::HashSet;

use super::{CellChangeKind, CopyError, GridLayer, Reflector, RegionSnapshot};
use crate::grid::{GridBox, TileGrid, TileId};

const A: TileId = TileId(1);
const B: TileId = TileId(2);
const C: TileId = TileId(3);
const D: TileId = TileId(4);

/// 2x2 source at the origin holding tiles [A, B, C, D] in enumeration order.
fn two_by_two_source() -> (TileGrid, GridBox) {
    let mut grid = TileGrid::default();
    grid.set(IVec3::new(0, 0, 0), A);
    grid.set(IVec3::new(1, 0, 0), B);
    grid.set(IVec3::new(0, 1, 0), C);
    grid.set(IVec3::new(1, 1, 0), D);
    (grid, GridBox::flat(IVec2::new(0, 0), IVec2::new(2, 2)))
}

fn dest_at_five() -> GridBox {
    GridBox::flat(IVec2::new(5, 5), IVec2::new(2, 2))
}

// -----------------------------------------------------------------------------
// Snapshot tests
// -----------------------------------------------------------------------------

#[test]
fn test_snapshot_covers_full_source_area() {
    let (grid, bounds) = two_by_two_source();
    let snapshot = RegionSnapshot::capture(&grid, bounds);

    assert_eq!(snapshot.cell_count(), bounds.area());
    assert_eq!(snapshot.positions().len(), snapshot.tiles().len());

    let captured: HashSet<IVec3> = snapshot.positions().iter().copied().collect();
    let expected: HashSet<IVec3> = bounds.cells().collect();
    assert_eq!(captured, expected);
}

#[test]
fn test_snapshot_includes_empty_cells_as_none() {
    let mut grid = TileGrid::default();
    grid.set(IVec3::new(0, 0, 0), A);
    let bounds = GridBox::flat(IVec2::new(0, 0), IVec2::new(2, 1));

    let snapshot = RegionSnapshot::capture(&grid, bounds);
    assert_eq!(snapshot.tiles(), &[Some(A), None]);
}

#[test]
fn test_snapshot_positions_follow_enumeration_order() {
    let (grid, bounds) = two_by_two_source();
    let snapshot = RegionSnapshot::capture(&grid, bounds);

    assert_eq!(
        snapshot.positions(),
        &[
            IVec3::new(0, 0, 0),
            IVec3::new(1, 0, 0),
            IVec3::new(0, 1, 0),
            IVec3::new(1, 1, 0),
        ]
    );
    assert_eq!(snapshot.tiles(), &[Some(A), Some(B), Some(C), Some(D)]);
}

// -----------------------------------------------------------------------------
// Copy tests
// -----------------------------------------------------------------------------

#[test]
fn test_copy_rejects_bounds_with_wrong_depth() {
    let (grid, _) = two_by_two_source();
    let deep = GridBox::new(IVec3::ZERO, IVec3::new(2, 2, 2));

    let mut reflector = Reflector::default();
    assert_eq!(
        reflector.copy_region(&grid, deep),
        Err(CopyError::InvalidDepth(2))
    );
    assert!(!reflector.has_copy());
}

#[test]
fn test_copy_replaces_prior_snapshot() {
    let (grid, bounds) = two_by_two_source();
    let mut reflector = Reflector::default();

    reflector.copy_region(&grid, bounds).unwrap();
    // Second copy from a single empty cell overwrites unconditionally.
    let single = GridBox::flat(IVec2::new(9, 9), IVec2::new(1, 1));
    reflector.copy_region(&grid, single).unwrap();

    let mut overlay = TileGrid::default();
    reflector.paste_region(&grid, &mut overlay, single);
    // The stale 2x2 snapshot is gone: nothing to place from the empty cell.
    assert!(overlay.is_empty());
}

#[test]
fn test_copy_does_not_touch_placement() {
    let (grid, bounds) = two_by_two_source();
    let mut overlay = TileGrid::default();
    let mut reflector = Reflector::default();

    reflector.copy_region(&grid, bounds).unwrap();
    reflector.paste_region(&grid, &mut overlay, dest_at_five());
    assert!(reflector.has_placement());

    reflector.copy_region(&grid, bounds).unwrap();
    assert!(reflector.has_placement());
    assert!(!overlay.is_empty());
}

// -----------------------------------------------------------------------------
// Paste tests
// -----------------------------------------------------------------------------

#[test]
fn test_paste_round_trip_reproduces_layout_at_destination() {
    let (grid, bounds) = two_by_two_source();
    let mut overlay = TileGrid::default();
    let mut reflector = Reflector::default();

    reflector.copy_region(&grid, bounds).unwrap();
    let notifications = reflector.paste_region(&grid, &mut overlay, dest_at_five());

    assert_eq!(overlay.get(IVec3::new(5, 5, 0)), Some(A));
    assert_eq!(overlay.get(IVec3::new(6, 5, 0)), Some(B));
    assert_eq!(overlay.get(IVec3::new(5, 6, 0)), Some(C));
    assert_eq!(overlay.get(IVec3::new(6, 6, 0)), Some(D));
    assert_eq!(overlay.len(), 4);

    // Fresh placement with no prior one: a single Created notification.
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, CellChangeKind::Created);
    assert_eq!(notifications[0].layer, GridLayer::Overlay);
    assert_eq!(notifications[0].cells.len(), 4);
}

#[test]
fn test_paste_skips_cells_colliding_with_base_terrain() {
    let (mut grid, bounds) = two_by_two_source();
    // Solid terrain at one destination cell; the reflection must not cover it.
    grid.set(IVec3::new(6, 5, 0), TileId(9));

    let mut overlay = TileGrid::default();
    let mut reflector = Reflector::default();
    reflector.copy_region(&grid, bounds).unwrap();
    let notifications = reflector.paste_region(&grid, &mut overlay, dest_at_five());

    assert_eq!(overlay.get(IVec3::new(5, 5, 0)), Some(A));
    assert_eq!(overlay.get(IVec3::new(5, 6, 0)), Some(C));
    assert_eq!(overlay.get(IVec3::new(6, 6, 0)), Some(D));
    assert!(!overlay.has_tile(IVec3::new(6, 5, 0)));

    // The Created notification lists exactly the three written cells.
    assert_eq!(notifications[0].cells.len(), 3);
    assert!(!notifications[0].cells.contains(&IVec3::new(6, 5, 0)));
}

#[test]
fn test_paste_skips_empty_captured_cells() {
    let mut grid = TileGrid::default();
    grid.set(IVec3::new(0, 0, 0), A);
    let bounds = GridBox::flat(IVec2::new(0, 0), IVec2::new(2, 2));

    let mut overlay = TileGrid::default();
    let mut reflector = Reflector::default();
    reflector.copy_region(&grid, bounds).unwrap();
    let notifications = reflector.paste_region(&grid, &mut overlay, dest_at_five());

    assert_eq!(overlay.len(), 1);
    assert_eq!(overlay.get(IVec3::new(5, 5, 0)), Some(A));
    assert_eq!(notifications[0].cells, vec![IVec3::new(5, 5, 0)]);
}

#[test]
fn test_paste_skips_targets_outside_destination_bounds() {
    let (grid, bounds) = two_by_two_source();
    let mut overlay = TileGrid::default();
    let mut reflector = Reflector::default();

    reflector.copy_region(&grid, bounds).unwrap();
    // Destination narrower than the source: the second column cannot land.
    let narrow = GridBox::flat(IVec2::new(5, 5), IVec2::new(1, 2));
    let notifications = reflector.paste_region(&grid, &mut overlay, narrow);

    assert_eq!(overlay.len(), 2);
    assert_eq!(overlay.get(IVec3::new(5, 5, 0)), Some(A));
    assert_eq!(overlay.get(IVec3::new(5, 6, 0)), Some(C));
    assert_eq!(notifications[0].cells.len(), 2);
}

#[test]
fn test_paste_without_snapshot_is_hard_noop() {
    let (grid, _) = two_by_two_source();
    let mut overlay = TileGrid::default();
    let mut reflector = Reflector::default();

    let notifications = reflector.paste_region(&grid, &mut overlay, dest_at_five());

    assert!(notifications.is_empty());
    assert!(overlay.is_empty());
    assert!(!reflector.has_placement());
}

#[test]
fn test_paste_consumes_snapshot_and_marks_placement() {
    let (grid, bounds) = two_by_two_source();
    let mut overlay = TileGrid::default();
    let mut reflector = Reflector::default();

    reflector.copy_region(&grid, bounds).unwrap();
    assert!(reflector.has_copy());

    reflector.paste_region(&grid, &mut overlay, dest_at_five());
    assert!(!reflector.has_copy());
    assert!(reflector.has_placement());
}

#[test]
fn test_replacing_paste_emits_destroyed_before_created() {
    let (grid, bounds) = two_by_two_source();
    let mut overlay = TileGrid::default();
    let mut reflector = Reflector::default();

    reflector.copy_region(&grid, bounds).unwrap();
    reflector.paste_region(&grid, &mut overlay, dest_at_five());

    // Second paste replaces the first placement entirely.
    reflector.copy_region(&grid, bounds).unwrap();
    let other_dest = GridBox::flat(IVec2::new(10, 10), IVec2::new(2, 2));
    let notifications = reflector.paste_region(&grid, &mut overlay, other_dest);

    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].kind, CellChangeKind::Destroyed);
    assert_eq!(notifications[1].kind, CellChangeKind::Created);

    // Destroyed reports the four cells of the first placement.
    let destroyed: HashSet<IVec3> = notifications[0].cells.iter().copied().collect();
    let expected: HashSet<IVec3> = dest_at_five().cells().collect();
    assert_eq!(destroyed, expected);

    // Only the new placement remains on the overlay.
    assert_eq!(overlay.len(), 4);
    assert_eq!(overlay.get(IVec3::new(10, 10, 0)), Some(A));
    assert!(!overlay.has_tile(IVec3::new(5, 5, 0)));
}

// -----------------------------------------------------------------------------
// Clear tests
// -----------------------------------------------------------------------------

#[test]
fn test_clear_placement_reports_occupied_cells_and_wipes() {
    let (grid, bounds) = two_by_two_source();
    let mut overlay = TileGrid::default();
    let mut reflector = Reflector::default();

    reflector.copy_region(&grid, bounds).unwrap();
    reflector.paste_region(&grid, &mut overlay, dest_at_five());

    let destroyed = reflector.clear_placement(&mut overlay).unwrap();
    assert_eq!(destroyed.kind, CellChangeKind::Destroyed);
    assert_eq!(destroyed.cells.len(), 4);
    assert!(overlay.is_empty());
    assert!(!reflector.has_placement());
}

#[test]
fn test_clear_placement_is_idempotent() {
    let (grid, bounds) = two_by_two_source();
    let mut overlay = TileGrid::default();
    let mut reflector = Reflector::default();

    reflector.copy_region(&grid, bounds).unwrap();
    reflector.paste_region(&grid, &mut overlay, dest_at_five());

    assert!(reflector.clear_placement(&mut overlay).is_some());
    // The wipe and the notification happen only once.
    assert!(reflector.clear_placement(&mut overlay).is_none());
}

#[test]
fn test_clear_without_placement_is_noop() {
    let mut overlay = TileGrid::default();
    let mut reflector = Reflector::default();
    assert!(reflector.clear_placement(&mut overlay).is_none());
}
