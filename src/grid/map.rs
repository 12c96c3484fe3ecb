//! Grid domain: sparse tile storage and cell-space geometry.

use bevy::prelude::*;
use std::collections::HashMap;

/// Opaque reference to a tile kind. Absence of a tile is modeled as `None`
/// at the storage layer, never as a reserved id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub u16);

/// Axis-aligned box of grid cells with an exclusive max corner: `origin` is
/// the first included cell, `origin + size` is one past the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBox {
    pub origin: IVec3,
    pub size: IVec3,
}

impl GridBox {
    pub fn new(origin: IVec3, size: IVec3) -> Self {
        Self { origin, size }
    }

    /// A depth-1 box in the z = 0 plane, from 2D origin and size.
    pub fn flat(origin: IVec2, size: IVec2) -> Self {
        Self {
            origin: origin.extend(0),
            size: size.extend(1),
        }
    }

    pub fn min(&self) -> IVec3 {
        self.origin
    }

    pub fn max(&self) -> IVec3 {
        self.origin + self.size
    }

    pub fn depth(&self) -> i32 {
        self.size.z
    }

    pub fn area(&self) -> usize {
        (self.size.x.max(0) * self.size.y.max(0) * self.size.z.max(0)) as usize
    }

    pub fn contains(&self, cell: IVec3) -> bool {
        let min = self.min();
        let max = self.max();
        cell.x >= min.x
            && cell.x < max.x
            && cell.y >= min.y
            && cell.y < max.y
            && cell.z >= min.z
            && cell.z < max.z
    }

    /// Center cell, floor of the midpoint of the min and (exclusive) max corners.
    pub fn center_cell(&self) -> IVec3 {
        (self.min() + self.max()).div_euclid(IVec3::splat(2))
    }

    /// Enumerate every cell in the box: x fastest, then y, then z.
    ///
    /// Invariant: `TileGrid::bulk_read` visits cells in exactly this order.
    /// Snapshot remapping pairs the two sequences index-by-index.
    pub fn cells(self) -> impl Iterator<Item = IVec3> {
        let min = self.min();
        let max = self.max();
        (min.z..max.z).flat_map(move |z| {
            (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| IVec3::new(x, y, z)))
        })
    }
}

/// Sparse tile store keyed by cell coordinate. Both the level terrain and the
/// reflection overlay are instances of this one type.
#[derive(Debug, Default, Clone)]
pub struct TileGrid {
    cells: HashMap<IVec3, TileId>,
}

impl TileGrid {
    pub fn has_tile(&self, cell: IVec3) -> bool {
        self.cells.contains_key(&cell)
    }

    pub fn get(&self, cell: IVec3) -> Option<TileId> {
        self.cells.get(&cell).copied()
    }

    pub fn set(&mut self, cell: IVec3, tile: TileId) {
        self.cells.insert(cell, tile);
    }

    pub fn clear_cell(&mut self, cell: IVec3) {
        self.cells.remove(&cell);
    }

    pub fn clear_all(&mut self) {
        self.cells.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IVec3, TileId)> + '_ {
        self.cells.iter().map(|(cell, tile)| (*cell, *tile))
    }

    /// Read every cell of `bounds` in `GridBox::cells()` order, empty cells
    /// included as `None`.
    pub fn bulk_read(&self, bounds: GridBox) -> Vec<Option<TileId>> {
        bounds.cells().map(|cell| self.get(cell)).collect()
    }

    /// Write a batch of cells. Order within the batch is not significant;
    /// later entries win on duplicate cells.
    pub fn bulk_write(&mut self, changes: &[(IVec3, TileId)]) {
        for (cell, tile) in changes {
            self.cells.insert(*cell, *tile);
        }
    }

    /// Tight bounding box over all occupied cells, `None` when the grid holds
    /// nothing.
    pub fn occupied_range(&self) -> Option<GridBox> {
        let mut iter = self.cells.keys();
        let first = *iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), cell| {
            (min.min(*cell), max.max(*cell))
        });
        Some(GridBox::new(min, max - min + IVec3::ONE))
    }
}

/// Base terrain layer.
#[derive(Resource, Debug, Default)]
pub struct BaseGrid(pub TileGrid);

/// Reflection overlay layer, written only by paste operations.
#[derive(Resource, Debug, Default)]
pub struct OverlayGrid(pub TileGrid);

/// Cell-space to world-space mapping. Cells are square; cell (0, 0) has its
/// min corner at the world origin.
#[derive(Resource, Debug, Clone, Copy)]
pub struct GridConfig {
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size: 32.0 }
    }
}

impl GridConfig {
    pub fn cell_to_world(&self, cell: IVec3) -> Vec2 {
        Vec2::new(cell.x as f32, cell.y as f32) * self.cell_size
    }

    pub fn cell_center_world(&self, cell: IVec3) -> Vec2 {
        self.cell_to_world(cell) + Vec2::splat(self.cell_size * 0.5)
    }

    pub fn world_to_cell(&self, world: Vec2) -> IVec3 {
        let scaled = (world / self.cell_size).floor();
        IVec3::new(scaled.x as i32, scaled.y as i32, 0)
    }
}
