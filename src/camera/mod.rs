//! Camera domain: room-style snap follow.
//!
//! The camera never scrolls. When the player leaves the visible viewport it
//! jumps by exactly one viewport width or height, room by room.

use bevy::prelude::*;

use crate::core::{GameState, WorldCamera};
use crate::level::LevelData;
use crate::movement::Player;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), center_on_spawn)
            .add_systems(
                Update,
                snap_to_player.run_if(in_state(GameState::Playing)),
            );
    }
}

/// Start the camera on the room the player spawns in.
fn center_on_spawn(
    level: Res<LevelData>,
    mut camera: Query<&mut Transform, With<WorldCamera>>,
) {
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };
    let (x, y) = level.0.player_spawn;
    transform.translation.x = x;
    transform.translation.y = y;
}

fn snap_to_player(
    mut camera: Query<
        (&Camera, &GlobalTransform, &mut Transform, &Projection),
        With<WorldCamera>,
    >,
    player: Query<&Transform, (With<Player>, Without<WorldCamera>)>,
) {
    let Ok((camera, global, mut transform, projection)) = camera.single_mut() else {
        return;
    };
    let Ok(player_transform) = player.single() else {
        return;
    };
    let Projection::Orthographic(ortho) = projection else {
        return;
    };

    let Some(ndc) = camera.world_to_ndc(global, player_transform.translation) else {
        return;
    };

    let width = ortho.area.width();
    let height = ortho.area.height();

    // One axis per frame, x before y, exactly one viewport step.
    if ndc.x < -1.0 {
        transform.translation.x -= width;
    } else if ndc.x > 1.0 {
        transform.translation.x += width;
    } else if ndc.y < -1.0 {
        transform.translation.y -= height;
    } else if ndc.y > 1.0 {
        transform.translation.y += height;
    }
}
