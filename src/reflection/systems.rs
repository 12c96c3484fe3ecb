//! Reflection domain: the reflect trigger.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::WorldCamera;
use crate::grid::{BaseGrid, GridConfig, OverlayGrid};
use crate::locus::{CameraProjector, Locus, LocusPulse, LocusRoster, find_onscreen_locus};

use super::{Reflector, ReflectionChanged};

/// One discrete trigger drives the whole mechanic: with no snapshot held it
/// copies from the on-screen locus, otherwise it pastes into it.
pub(crate) fn handle_reflect_trigger(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut reflector: ResMut<Reflector>,
    base: Res<BaseGrid>,
    mut overlay: ResMut<OverlayGrid>,
    config: Res<GridConfig>,
    roster: Res<LocusRoster>,
    mut loci: Query<(&Locus, &mut LocusPulse)>,
    camera_q: Query<(&Camera, &GlobalTransform), With<WorldCamera>>,
    mut changes: MessageWriter<ReflectionChanged>,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }

    let Ok((camera, camera_transform)) = camera_q.single() else {
        return;
    };
    let projector = CameraProjector {
        camera,
        transform: camera_transform,
    };

    // Centers in registration order, so the first-match rule is stable.
    let centers: Vec<(Entity, IVec3)> = roster
        .entities
        .iter()
        .filter_map(|entity| {
            loci.get(*entity)
                .ok()
                .map(|(locus, _)| (*entity, locus.center_cell()))
        })
        .collect();

    let Some(entity) = find_onscreen_locus(&centers, &config, &projector) else {
        warn!("No locus on screen; reflect input ignored");
        return;
    };
    let Ok((locus, mut pulse)) = loci.get_mut(entity) else {
        return;
    };
    let bounds = locus.bounds();

    if reflector.has_copy() {
        for notification in reflector.paste_region(&base.0, &mut overlay.0, bounds) {
            changes.write(notification);
        }
        pulse.restart();
        info!("Pasted reflection into locus at {:?}", bounds.origin);
    } else {
        match reflector.copy_region(&base.0, bounds) {
            Ok(()) => {
                pulse.restart();
                info!(
                    "Copied {} cells from locus at {:?}",
                    bounds.area(),
                    bounds.origin
                );
            }
            Err(e) => warn!("Copy from locus at {:?} failed: {}", bounds.origin, e),
        }
    }
}
