//! Movement domain: player bootstrap from level data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::LevelData;
use crate::movement::{GameLayer, GroundProbe, MovementState, Player};

pub(crate) fn spawn_player(
    mut commands: Commands,
    level: Res<LevelData>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let (x, y) = level.0.player_spawn;

    commands.spawn((
        Player,
        MovementState::default(),
        GroundProbe::default(),
        // Rendering
        Sprite {
            color: Color::srgb(0.92, 0.92, 0.95),
            custom_size: Some(Vec2::new(24.0, 44.0)),
            ..default()
        },
        Transform::from_xyz(x, y, 5.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 44.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the controller
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
    ));

    info!("Spawned player at ({}, {})", x, y);
}
