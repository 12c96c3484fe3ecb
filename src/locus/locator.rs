//! Locus domain: on-screen locus lookup.

use bevy::prelude::*;

use crate::grid::GridConfig;

/// Projects world positions into normalized viewport coordinates, where
/// `[0,1]` on both axes means visible.
pub trait ViewportProjector {
    /// `None` when the position cannot be projected at all.
    fn project(&self, world: Vec2) -> Option<Vec2>;
}

/// Projector backed by the live camera.
pub struct CameraProjector<'a> {
    pub camera: &'a Camera,
    pub transform: &'a GlobalTransform,
}

impl ViewportProjector for CameraProjector<'_> {
    fn project(&self, world: Vec2) -> Option<Vec2> {
        let ndc = self
            .camera
            .world_to_ndc(self.transform, world.extend(0.0))?;
        // NDC is [-1, 1] on both axes; remap to the [0, 1] viewport range.
        Some(ndc.truncate() * 0.5 + Vec2::splat(0.5))
    }
}

/// First locus (in registration order) whose center cell projects inside the
/// viewport, or `None`.
///
/// Deliberately a linear scan over every registered locus: counts are small
/// and the first-match-in-stable-order rule is part of the contract.
pub fn find_onscreen_locus<I: Copy>(
    loci: &[(I, IVec3)],
    config: &GridConfig,
    projector: &impl ViewportProjector,
) -> Option<I> {
    for (id, center) in loci {
        let Some(vp) = projector.project(config.cell_center_world(*center)) else {
            continue;
        };

        if vp.x < 0.0 || vp.x > 1.0 {
            continue;
        }
        if vp.y < 0.0 || vp.y > 1.0 {
            continue;
        }

        return Some(*id);
    }

    None
}
