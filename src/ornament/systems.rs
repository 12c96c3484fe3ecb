//! Ornament domain: idle animation and pickup handling.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::Player;

use super::{CollectedOrnaments, Ornament, OrnamentCollected};

/// Sine bob plus steady spin around the anchor.
pub(crate) fn animate_ornaments(
    time: Res<Time>,
    mut query: Query<(&Ornament, &mut Transform)>,
) {
    let t = time.elapsed_secs();

    for (ornament, mut transform) in &mut query {
        transform.translation = ornament.anchor + Vec3::Y * t.sin() * ornament.bob_scale;
        transform.rotation =
            Quat::from_rotation_z(((ornament.degrees_per_second * t) % 360.0).to_radians());
    }
}

pub(crate) fn collect_ornaments(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut collected: ResMut<CollectedOrnaments>,
    mut pickups: MessageWriter<OrnamentCollected>,
    ornaments: Query<(Entity, &Ornament)>,
    player: Query<(), With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (ornament_entity, other) in pairs {
            let Ok((entity, ornament)) = ornaments.get(ornament_entity) else {
                continue;
            };
            if player.get(other).is_err() {
                continue;
            }

            commands.entity(entity).despawn();
            collected.count += 1;
            pickups.write(OrnamentCollected {
                position: ornament.anchor.truncate(),
            });
            info!("Ornament collected ({} total)", collected.count);
        }
    }
}
