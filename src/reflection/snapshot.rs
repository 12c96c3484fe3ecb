//! Reflection domain: captured copy of a grid region.

use bevy::prelude::*;

use crate::grid::{GridBox, TileGrid, TileId};

/// Tile contents of one source region, captured at copy time.
///
/// `tiles` and `positions` are parallel sequences: entry i of each describes
/// the same cell. This holds because both are produced from the same
/// `GridBox::cells()` enumeration, `positions` directly and `tiles` through
/// `TileGrid::bulk_read`, which visits cells in exactly that order.
#[derive(Debug, Clone)]
pub struct RegionSnapshot {
    tiles: Vec<Option<TileId>>,
    positions: Vec<IVec3>,
    origin: IVec3,
}

impl RegionSnapshot {
    /// Capture every cell of `bounds` from `grid`, empty cells included.
    /// Callers validate the bounds depth before capturing.
    pub fn capture(grid: &TileGrid, bounds: GridBox) -> Self {
        Self {
            tiles: grid.bulk_read(bounds),
            positions: bounds.cells().collect(),
            origin: bounds.origin,
        }
    }

    /// Minimum corner of the source bounds; the basis for per-cell offsets
    /// when remapping into a destination region.
    pub fn origin(&self) -> IVec3 {
        self.origin
    }

    pub fn cell_count(&self) -> usize {
        self.positions.len()
    }

    /// Captured `(tile, source position)` pairs in enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (Option<TileId>, IVec3)> + '_ {
        self.tiles
            .iter()
            .copied()
            .zip(self.positions.iter().copied())
    }

    #[cfg(test)]
    pub(crate) fn positions(&self) -> &[IVec3] {
        &self.positions
    }

    #[cfg(test)]
    pub(crate) fn tiles(&self) -> &[Option<TileId>] {
        &self.tiles
    }
}
