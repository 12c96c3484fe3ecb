//! Grid domain: tile presentation and collision geometry.
//!
//! Base tiles are spawned once after the level is loaded. Overlay tiles are
//! driven entirely by reflection change messages: Created spawns them,
//! Destroyed removes them.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::collections::HashSet;

use crate::grid::{BaseGrid, GridConfig, OverlayGrid, TileId, TilePalette};
use crate::movement::GameLayer;
use crate::reflection::{CellChangeKind, GridLayer, ReflectionChanged};

const BASE_TILE_Z: f32 = 0.0;
const OVERLAY_TILE_Z: f32 = 1.0;

/// Marker for a spawned base-terrain tile.
#[derive(Component, Debug)]
pub struct BaseTile(pub IVec3);

/// Marker for a spawned overlay (reflection) tile.
#[derive(Component, Debug)]
pub struct OverlayTile(pub IVec3);

/// Spawn visuals and colliders for every cell in the base grid. Runs once the
/// level spawn pass has populated the grid.
pub(crate) fn spawn_base_tiles(
    mut commands: Commands,
    base: Res<BaseGrid>,
    config: Res<GridConfig>,
    palette: Res<TilePalette>,
) {
    for (cell, tile) in base.0.iter() {
        spawn_base_tile(&mut commands, &config, &palette, cell, tile);
    }
    info!("Spawned {} base tiles", base.0.len());
}

/// Spawn one base tile entity. Shared with the dev-tools scatter command.
pub(crate) fn spawn_base_tile(
    commands: &mut Commands,
    config: &GridConfig,
    palette: &TilePalette,
    cell: IVec3,
    tile: TileId,
) {
    let center = config.cell_center_world(cell);
    commands.spawn((
        BaseTile(cell),
        Sprite {
            color: palette.color_of(tile),
            custom_size: Some(Vec2::splat(config.cell_size)),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, BASE_TILE_Z),
        RigidBody::Static,
        Collider::rectangle(config.cell_size, config.cell_size),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

/// Keep overlay tile entities in lockstep with reflection change messages.
pub(crate) fn sync_overlay_tiles(
    mut commands: Commands,
    mut changes: MessageReader<ReflectionChanged>,
    overlay: Res<OverlayGrid>,
    config: Res<GridConfig>,
    palette: Res<TilePalette>,
    existing: Query<(Entity, &OverlayTile)>,
) {
    for change in changes.read() {
        if change.layer != GridLayer::Overlay {
            continue;
        }

        match change.kind {
            CellChangeKind::Created => {
                for cell in &change.cells {
                    let Some(tile) = overlay.0.get(*cell) else {
                        // The engine only reports cells it wrote; a miss here
                        // means the message and the grid are out of sync.
                        warn!("Created overlay cell {:?} holds no tile", cell);
                        continue;
                    };
                    let center = config.cell_center_world(*cell);
                    commands.spawn((
                        OverlayTile(*cell),
                        Sprite {
                            color: palette.color_of(tile),
                            custom_size: Some(Vec2::splat(config.cell_size)),
                            ..default()
                        },
                        Transform::from_xyz(center.x, center.y, OVERLAY_TILE_Z),
                        RigidBody::Static,
                        Collider::rectangle(config.cell_size, config.cell_size),
                        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
                    ));
                }
            }
            CellChangeKind::Destroyed => {
                let removed: HashSet<IVec3> = change.cells.iter().copied().collect();
                for (entity, tile) in &existing {
                    if removed.contains(&tile.0) {
                        commands.entity(entity).despawn();
                    }
                }
            }
        }
    }
}
