//! Locus domain: outline bars and pulse animation.

use bevy::prelude::*;

use crate::grid::GridConfig;

use super::{Locus, LocusPulse};

const BAR_THICKNESS: f32 = 3.0;
const PULSE_WIDTH_FACTOR: f32 = 2.0;
const OUTLINE_Z: f32 = 2.0;
const OUTLINE_COLOR: Color = Color::srgb(0.55, 0.85, 0.9);

/// One edge of a locus outline rectangle. `base_size` is the unpulsed sprite
/// size; the thin dimension widens while a pulse is live.
#[derive(Component, Debug)]
pub struct OutlineBar {
    base_size: Vec2,
}

/// Give every newly spawned locus its four outline bars.
pub(crate) fn attach_outlines(
    mut commands: Commands,
    config: Res<GridConfig>,
    added: Query<(Entity, &Locus), Added<Locus>>,
) {
    for (entity, locus) in &added {
        let bounds = locus.bounds();
        let extent = Vec2::new(bounds.size.x as f32, bounds.size.y as f32) * config.cell_size;
        let half = extent * 0.5;

        // (offset from rect center, bar size)
        let bars = [
            (Vec2::new(0.0, -half.y), Vec2::new(extent.x, BAR_THICKNESS)),
            (Vec2::new(0.0, half.y), Vec2::new(extent.x, BAR_THICKNESS)),
            (Vec2::new(-half.x, 0.0), Vec2::new(BAR_THICKNESS, extent.y)),
            (Vec2::new(half.x, 0.0), Vec2::new(BAR_THICKNESS, extent.y)),
        ];

        commands.entity(entity).with_children(|parent| {
            for (offset, size) in bars {
                parent.spawn((
                    OutlineBar { base_size: size },
                    Sprite {
                        color: OUTLINE_COLOR,
                        custom_size: Some(size),
                        ..default()
                    },
                    Transform::from_xyz(offset.x, offset.y, OUTLINE_Z),
                ));
            }
        });
    }
}

pub(crate) fn tick_pulses(time: Res<Time>, mut pulses: Query<&mut LocusPulse>) {
    let dt = time.delta_secs();
    for mut pulse in &mut pulses {
        pulse.tick(dt);
    }
}

/// Widen outline bars while their locus pulse is live, restore them after.
pub(crate) fn animate_pulse(
    loci: Query<(&LocusPulse, &Children), With<Locus>>,
    mut bars: Query<(&OutlineBar, &mut Sprite)>,
) {
    for (pulse, children) in &loci {
        let factor = if pulse.is_active() {
            PULSE_WIDTH_FACTOR
        } else {
            1.0
        };

        for child in children.iter() {
            let Ok((bar, mut sprite)) = bars.get_mut(child) else {
                continue;
            };
            // The thin dimension is the bar thickness; only it widens.
            let size = if bar.base_size.x > bar.base_size.y {
                Vec2::new(bar.base_size.x, bar.base_size.y * factor)
            } else {
                Vec2::new(bar.base_size.x * factor, bar.base_size.y)
            };
            sprite.custom_size = Some(size);
        }
    }
}
