//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundProbe, MovementState, Player};

/// Box-cast downward from the player's feet against the Ground layer.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &GroundProbe, &mut MovementState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, probe, mut state) in &mut query {
        let origin = transform.translation.truncate() + probe.offset;
        let shape = Collider::rectangle(probe.size.x, probe.size.y);

        let hit = spatial_query.cast_shape(
            &shape,
            origin,
            0.0,
            Dir2::NEG_Y,
            &ShapeCastConfig::from_max_distance(probe.travel),
            &ground_filter,
        );

        state.was_on_ground = state.on_ground;
        state.on_ground = hit.is_some();

        if state.on_ground != state.was_on_ground {
            debug!("Ground contact changed: on_ground={}", state.on_ground);
        }
    }
}
