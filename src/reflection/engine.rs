//! Reflection domain: the copy/paste engine.
//!
//! All operations run synchronously inside one system invocation; the
//! `Reflector` resource is the single mutual-exclusion domain for the
//! snapshot, the placement flag, and the overlay grid writes.

use bevy::prelude::*;
use std::fmt;

use crate::grid::{GridBox, TileGrid};

use super::events::{CellChangeKind, GridLayer, ReflectionChanged};
use super::snapshot::RegionSnapshot;

/// Copy failure conditions. All are recoverable logged no-ops at the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyError {
    /// Source bounds must be exactly one cell deep or enumeration and bulk
    /// reads would disagree about cell count.
    InvalidDepth(i32),
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::InvalidDepth(depth) => {
                write!(f, "source bounds depth must be 1, got {}", depth)
            }
        }
    }
}

/// Holds the current snapshot (if any) and whether a pasted reflection is
/// live on the overlay. The two are independent: paste consumes the snapshot
/// and sets the placement; copy installs a snapshot and leaves any placement
/// standing.
#[derive(Resource, Debug, Default)]
pub struct Reflector {
    snapshot: Option<RegionSnapshot>,
    has_placement: bool,
}

impl Reflector {
    pub fn has_copy(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn has_placement(&self) -> bool {
        self.has_placement
    }

    /// Snapshot `bounds` from `grid`, replacing any prior snapshot
    /// unconditionally. Does not touch the placement state.
    pub fn copy_region(&mut self, grid: &TileGrid, bounds: GridBox) -> Result<(), CopyError> {
        if bounds.depth() != 1 {
            return Err(CopyError::InvalidDepth(bounds.depth()));
        }

        self.snapshot = Some(RegionSnapshot::capture(grid, bounds));
        Ok(())
    }

    /// Paste the held snapshot into `dest`, remapping each captured cell by
    /// its offset from the snapshot origin. Returns the notifications to
    /// dispatch, Destroyed (from clearing a prior placement) strictly before
    /// Created.
    ///
    /// A cell is skipped when its target falls outside `dest`, the captured
    /// tile is empty, or the base grid already holds a tile at the target:
    /// terrain always wins over the reflection.
    ///
    /// With no snapshot held this is a hard no-op returning no notifications.
    pub fn paste_region(
        &mut self,
        base: &TileGrid,
        overlay: &mut TileGrid,
        dest: GridBox,
    ) -> Vec<ReflectionChanged> {
        let Some(snapshot) = self.snapshot.take() else {
            return Vec::new();
        };

        let mut notifications = Vec::new();
        if let Some(destroyed) = self.clear_placement(overlay) {
            notifications.push(destroyed);
        }

        let mut writes = Vec::new();
        let mut skipped = 0usize;
        for (tile, position) in snapshot.entries() {
            let offset = position - snapshot.origin();
            let target = dest.origin + offset;

            let Some(tile) = tile else {
                skipped += 1;
                continue;
            };
            if !dest.contains(target) || base.has_tile(target) {
                skipped += 1;
                continue;
            }

            writes.push((target, tile));
        }

        let created: Vec<IVec3> = writes.iter().map(|(cell, _)| *cell).collect();
        overlay.bulk_write(&writes);
        self.has_placement = true;

        debug!(
            "Pasted {} of {} captured cells ({} skipped)",
            created.len(),
            snapshot.cell_count(),
            skipped
        );

        notifications.push(ReflectionChanged {
            cells: created,
            layer: GridLayer::Overlay,
            kind: CellChangeKind::Created,
        });
        notifications
    }

    /// Wipe the overlay and report which occupied cells were destroyed.
    /// No-op (returning `None`) when no placement is live, so repeated calls
    /// clear and notify only once.
    pub fn clear_placement(&mut self, overlay: &mut TileGrid) -> Option<ReflectionChanged> {
        if !self.has_placement {
            return None;
        }

        let cells: Vec<IVec3> = match overlay.occupied_range() {
            Some(range) => range.cells().filter(|cell| overlay.has_tile(*cell)).collect(),
            None => Vec::new(),
        };

        overlay.clear_all();
        self.has_placement = false;

        Some(ReflectionChanged {
            cells,
            layer: GridLayer::Overlay,
            kind: CellChangeKind::Destroyed,
        })
    }
}
