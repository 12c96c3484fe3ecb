//! Debug overlay and dev commands for fast iteration.
//!
//! Features:
//! - Toggle gizmo overlay (locus boxes, ground probe, overlay range)
//! - Scatter seeded random tiles for copy/paste experiments
//! - Clear the live reflection

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::GameState;
use crate::grid::{BaseGrid, GridConfig, OverlayGrid, TilePalette};
use crate::locus::Locus;
use crate::movement::{GroundProbe, MovementState, Player};
use crate::reflection::{ReflectionChanged, Reflector};

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the gizmo overlay is drawn
    pub gizmos_enabled: bool,
    /// Seed for the next tile scatter; advances per use so repeated
    /// scatters differ but a fresh session replays the same sequence
    pub scatter_seed: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            gizmos_enabled: true,
            scatter_seed: 7,
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (toggle_gizmos, scatter_tiles, clear_overlay)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (draw_locus_gizmos, draw_probe_gizmos, draw_overlay_range)
                    .run_if(|state: Res<DebugState>| state.gizmos_enabled),
            );
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Toggle the gizmo overlay with F1
fn toggle_gizmos(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        state.gizmos_enabled = !state.gizmos_enabled;
        info!(
            "[DEBUG] Gizmos {}",
            if state.gizmos_enabled { "ON" } else { "OFF" }
        );
    }
}

/// Ctrl+T: scatter random palette tiles into empty cells around the player.
/// Seeded so a session's scatter sequence is reproducible.
fn scatter_tiles(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut base: ResMut<BaseGrid>,
    config: Res<GridConfig>,
    palette: Res<TilePalette>,
    player: Query<&Transform, With<Player>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl || !keyboard.just_pressed(KeyCode::KeyT) {
        return;
    }
    let Ok(transform) = player.single() else {
        return;
    };

    let ids: Vec<_> = palette.ids().collect();
    if ids.is_empty() {
        return;
    }

    let seed = state.scatter_seed;
    state.scatter_seed = state.scatter_seed.wrapping_add(1);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let around = config.world_to_cell(transform.translation.truncate());
    let mut placed = 0u32;
    for _ in 0..24 {
        let cell = around
            + IVec3::new(
                rng.random_range(-8..=8),
                rng.random_range(-4..=4),
                0,
            );
        if base.0.has_tile(cell) {
            continue;
        }

        let tile = ids[rng.random_range(0..ids.len())];
        base.0.set(cell, tile);
        crate::grid::spawn_base_tile(&mut commands, &config, &palette, cell, tile);
        placed += 1;
    }

    info!(
        "[DEBUG] Scattered {} tiles around {:?} (seed {})",
        placed, around, seed
    );
}

/// Ctrl+X: clear the live reflection through the engine, so the usual
/// Destroyed notification reaches every consumer.
fn clear_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut reflector: ResMut<Reflector>,
    mut overlay: ResMut<OverlayGrid>,
    mut changes: MessageWriter<ReflectionChanged>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl || !keyboard.just_pressed(KeyCode::KeyX) {
        return;
    }

    if let Some(destroyed) = reflector.clear_placement(&mut overlay.0) {
        let count = destroyed.cells.len();
        changes.write(destroyed);
        info!("[DEBUG] Cleared reflection ({} cells)", count);
    }
}

// ============================================================================
// Gizmo overlays
// ============================================================================

fn draw_locus_gizmos(mut gizmos: Gizmos, config: Res<GridConfig>, loci: Query<&Locus>) {
    let green = Color::srgb(0.2, 0.9, 0.2);
    let yellow = Color::srgb(0.9, 0.9, 0.2);
    let red = Color::srgb(0.9, 0.2, 0.2);

    for locus in &loci {
        let bounds = locus.bounds();
        let extent = Vec2::new(bounds.size.x as f32, bounds.size.y as f32) * config.cell_size;
        let center = config.cell_to_world(bounds.min()) + extent * 0.5;

        gizmos.rect_2d(center, extent, green);
        gizmos.circle_2d(config.cell_center_world(locus.center_cell()), 6.0, green);

        // start
        gizmos.circle_2d(config.cell_center_world(bounds.min()), 6.0, yellow);

        // end; bounds go up to the limit, not including, so the last cell is max - 1
        gizmos.circle_2d(
            config.cell_center_world(bounds.max() - IVec3::ONE),
            6.0,
            red,
        );
    }
}

fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    players: Query<(&Transform, &GroundProbe, &MovementState), With<Player>>,
) {
    for (transform, probe, state) in &players {
        let color = if state.on_ground {
            Color::srgb(0.2, 0.9, 0.2)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };

        let origin = transform.translation.truncate() + probe.offset;
        let target = origin - Vec2::Y * probe.travel;

        // Eleven boxes so there is one at the start and one at the end
        for i in 0..11 {
            let along = origin.lerp(target, i as f32 / 10.0);
            gizmos.rect_2d(along, probe.size, color);
        }
    }
}

fn draw_overlay_range(mut gizmos: Gizmos, overlay: Res<OverlayGrid>, config: Res<GridConfig>) {
    let Some(range) = overlay.0.occupied_range() else {
        return;
    };

    let extent = Vec2::new(range.size.x as f32, range.size.y as f32) * config.cell_size;
    let center = config.cell_to_world(range.min()) + extent * 0.5;
    gizmos.rect_2d(center, extent, Color::srgb(0.9, 0.6, 0.2));
}
