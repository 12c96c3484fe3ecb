//! Ornament domain: bobbing collectibles and pickup events.

mod systems;

use avian2d::prelude::*;
use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::GameLayer;

const ORNAMENT_Z: f32 = 4.0;

#[derive(Component, Debug)]
pub struct Ornament {
    /// Resting position the bob oscillates around.
    pub anchor: Vec3,
    pub degrees_per_second: f32,
    pub bob_scale: f32,
}

/// Emitted when the player picks up an ornament.
#[derive(Debug)]
pub struct OrnamentCollected {
    pub position: Vec2,
}

impl Message for OrnamentCollected {}

#[derive(Resource, Debug, Default)]
pub struct CollectedOrnaments {
    pub count: u32,
}

/// Spawn one ornament at its anchor. Used by the level spawn pass.
pub(crate) fn spawn_ornament(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        Ornament {
            anchor: position.extend(ORNAMENT_Z),
            degrees_per_second: 45.0,
            bob_scale: 4.0,
        },
        Sprite {
            color: Color::srgb(0.95, 0.8, 0.3),
            custom_size: Some(Vec2::splat(14.0)),
            ..default()
        },
        Transform::from_translation(position.extend(ORNAMENT_Z)),
        (
            RigidBody::Static,
            Collider::circle(10.0),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ),
    ));
}

pub struct OrnamentPlugin;

impl Plugin for OrnamentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollectedOrnaments>()
            .add_message::<OrnamentCollected>()
            .add_systems(
                Update,
                (systems::animate_ornaments, systems::collect_ornaments)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
