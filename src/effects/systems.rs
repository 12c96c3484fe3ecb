//! Effects domain: activation and fade-out.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::grid::GridConfig;
use crate::ornament::OrnamentCollected;
use crate::reflection::{CellChangeKind, ReflectionChanged};

use super::pool::{
    DEFAULT_POOL_SIZE, EFFECT_LIFETIME, EffectPool, TileEffect, fade_alpha, first_idle,
};

const EFFECT_Z: f32 = 6.0;
const EFFECT_COLOR: Color = Color::srgb(0.7, 0.95, 1.0);

/// Only cell creation drives a burst; destruction stays silent.
pub(crate) fn reacts_to(kind: CellChangeKind) -> bool {
    matches!(kind, CellChangeKind::Created)
}

pub(crate) fn spawn_pool(mut commands: Commands, mut pool: ResMut<EffectPool>) {
    for _ in 0..DEFAULT_POOL_SIZE {
        let entity = spawn_instance(&mut commands);
        pool.entities.push(entity);
    }
}

fn spawn_instance(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            TileEffect::default(),
            Sprite {
                color: EFFECT_COLOR,
                custom_size: Some(Vec2::splat(10.0)),
                ..default()
            },
            Transform::default(),
            Visibility::Hidden,
        ))
        .id()
}

pub(crate) fn trigger_reflection_effects(
    mut commands: Commands,
    mut pool: ResMut<EffectPool>,
    mut changes: MessageReader<ReflectionChanged>,
    config: Res<GridConfig>,
    mut instances: Query<(&mut TileEffect, &mut Transform, &mut Visibility)>,
) {
    for change in changes.read() {
        if !reacts_to(change.kind) {
            continue;
        }

        for cell in &change.cells {
            let center = config.cell_center_world(*cell);
            activate(&mut commands, &mut pool, &mut instances, center);
        }
    }
}

pub(crate) fn trigger_ornament_effects(
    mut commands: Commands,
    mut pool: ResMut<EffectPool>,
    mut pickups: MessageReader<OrnamentCollected>,
    mut instances: Query<(&mut TileEffect, &mut Transform, &mut Visibility)>,
) {
    for pickup in pickups.read() {
        activate(&mut commands, &mut pool, &mut instances, pickup.position);
    }
}

/// Reuse the first idle pooled instance, or grow the pool when all are busy.
fn activate(
    commands: &mut Commands,
    pool: &mut EffectPool,
    instances: &mut Query<(&mut TileEffect, &mut Transform, &mut Visibility)>,
    position: Vec2,
) {
    let busy: Vec<bool> = pool
        .entities
        .iter()
        .map(|entity| {
            instances
                .get(*entity)
                .map(|(effect, _, _)| !effect.is_idle())
                .unwrap_or(true)
        })
        .collect();

    if let Some(index) = first_idle(&busy) {
        let entity = pool.entities[index];
        if let Ok((mut effect, mut transform, mut visibility)) = instances.get_mut(entity) {
            effect.remaining = EFFECT_LIFETIME;
            transform.translation = position.extend(EFFECT_Z);
            *visibility = Visibility::Visible;
            return;
        }
    }

    // Pool saturated: grow by one live instance.
    let entity = commands
        .spawn((
            TileEffect {
                remaining: EFFECT_LIFETIME,
            },
            Sprite {
                color: EFFECT_COLOR,
                custom_size: Some(Vec2::splat(10.0)),
                ..default()
            },
            Transform::from_translation(position.extend(EFFECT_Z)),
            Visibility::Visible,
        ))
        .id();
    pool.entities.push(entity);
    debug!("Effect pool grew to {}", pool.entities.len());
}

pub(crate) fn fade_effects(
    time: Res<Time>,
    mut query: Query<(&mut TileEffect, &mut Sprite, &mut Visibility)>,
) {
    let dt = time.delta_secs();

    for (mut effect, mut sprite, mut visibility) in &mut query {
        if effect.is_idle() {
            continue;
        }

        effect.remaining -= dt;
        sprite.color.set_alpha(fade_alpha(effect.remaining));

        if effect.is_idle() {
            *visibility = Visibility::Hidden;
        }
    }
}
